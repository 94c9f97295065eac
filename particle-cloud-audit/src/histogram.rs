/// Radial density histogram over point distance from the origin
use serde::{Deserialize, Serialize};

pub const BIN_COUNT: usize = 16;

/// Fixed-width bins spanning zero to the observed maximum radius.
///
/// The shape of this histogram is the quickest offline tell: a ringed
/// planet puts mass in two separated bands, a burst shell piles almost
/// everything into the outer bins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadialHistogram {
    pub max_radius: f32,
    pub counts: Vec<usize>,
}

impl RadialHistogram {
    pub fn from_radii(radii: &[f32]) -> Self {
        let max_radius = radii.iter().copied().fold(0.0f32, f32::max);
        let mut counts = vec![0usize; BIN_COUNT];

        if max_radius > 0.0 {
            for &radius in radii {
                let bin = ((radius / max_radius) * BIN_COUNT as f32) as usize;
                counts[bin.min(BIN_COUNT - 1)] += 1;
            }
        } else {
            counts[0] = radii.len();
        }

        Self { max_radius, counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_radius_lands_in_a_bin() {
        let radii = [0.0, 0.5, 1.0, 2.0, 3.999, 4.0];
        let histogram = RadialHistogram::from_radii(&radii);

        assert_eq!(histogram.max_radius, 4.0);
        assert_eq!(histogram.total(), radii.len());
        // The maximum itself stays inside the outermost bin.
        assert_eq!(histogram.counts[BIN_COUNT - 1], 2);
    }

    #[test]
    fn a_thin_ring_occupies_one_bin() {
        let radii = vec![3.0; 100];
        let histogram = RadialHistogram::from_radii(&radii);

        assert_eq!(histogram.counts[BIN_COUNT - 1], 100);
        assert_eq!(
            histogram.counts.iter().filter(|&&c| c > 0).count(),
            1,
            "identical radii should collapse into a single bin"
        );
    }

    #[test]
    fn degenerate_origin_cloud_fills_the_first_bin() {
        let histogram = RadialHistogram::from_radii(&[0.0, 0.0, 0.0]);
        assert_eq!(histogram.max_radius, 0.0);
        assert_eq!(histogram.counts[0], 3);
    }
}
