/// Cloud coordinate bounds tracking
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl CloudBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
            min_z: f32::INFINITY,
            max_z: f32::NEG_INFINITY,
        }
    }

    /// Update bounds with a new point
    pub fn update(&mut self, x: f32, y: f32, z: f32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
    }

    /// World space dimensions
    pub fn dimensions(&self) -> (f32, f32, f32) {
        (
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        )
    }

    /// Midpoint of each axis range
    pub fn centre(&self) -> (f32, f32, f32) {
        (
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
            (self.min_z + self.max_z) * 0.5,
        )
    }

    /// Largest absolute coordinate on any axis
    pub fn max_abs_extent(&self) -> f32 {
        [
            self.min_x.abs(),
            self.max_x.abs(),
            self.min_y.abs(),
            self.max_y.abs(),
            self.min_z.abs(),
            self.max_z.abs(),
        ]
        .into_iter()
        .fold(0.0, f32::max)
    }

    /// True once every edge has been pulled in from its infinity start
    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_z.is_finite()
            && self.max_z.is_finite()
    }
}

impl Default for CloudBounds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_bounds_are_not_finite() {
        assert!(!CloudBounds::new().is_finite());
    }

    #[test]
    fn update_expands_only_outward() {
        let mut bounds = CloudBounds::new();
        bounds.update(1.0, -2.0, 3.0);
        bounds.update(-1.0, 2.0, 0.5);

        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_x, 1.0);
        assert_eq!(bounds.min_y, -2.0);
        assert_eq!(bounds.max_y, 2.0);
        assert_eq!(bounds.min_z, 0.5);
        assert_eq!(bounds.max_z, 3.0);
        assert!(bounds.is_finite());
    }

    #[test]
    fn dimensions_and_centre_follow_the_edges() {
        let mut bounds = CloudBounds::new();
        bounds.update(-2.0, 0.0, 1.0);
        bounds.update(4.0, 6.0, 5.0);

        assert_eq!(bounds.dimensions(), (6.0, 6.0, 4.0));
        assert_eq!(bounds.centre(), (1.0, 3.0, 3.0));
        assert_eq!(bounds.max_abs_extent(), 6.0);
    }
}
