/// Orthographic splat previews for quick visual inspection
use image::GrayImage;

pub const PREVIEW_SIZE: u32 = 256;

/// Axis pair a preview projects onto.
#[derive(Debug, Clone, Copy)]
pub enum Projection {
    /// Looking down minus z: x right, y up.
    FrontXy,
    /// Looking down minus y: x right, z down the image.
    TopXz,
}

impl Projection {
    pub fn file_suffix(self) -> &'static str {
        match self {
            Projection::FrontXy => "front_xy",
            Projection::TopXz => "top_xz",
        }
    }
}

/// Splat a flat `xyzxyz` buffer into a density image.
///
/// The frame spans `[-extent, extent]` on both projected axes; points
/// outside it are dropped rather than clamped so a bad generator shows up
/// as a cropped image instead of a bright border.
pub fn render_preview(positions: &[f32], projection: Projection, extent: f32) -> GrayImage {
    let size = PREVIEW_SIZE as usize;
    let mut hits = vec![0u32; size * size];

    if extent > 0.0 {
        for point in positions.chunks_exact(3) {
            let (u, v) = match projection {
                Projection::FrontXy => (point[0], -point[1]),
                Projection::TopXz => (point[0], point[2]),
            };

            let px = (u + extent) / (2.0 * extent) * (PREVIEW_SIZE - 1) as f32;
            let py = (v + extent) / (2.0 * extent) * (PREVIEW_SIZE - 1) as f32;
            if px < 0.0 || py < 0.0 || px >= PREVIEW_SIZE as f32 || py >= PREVIEW_SIZE as f32 {
                continue;
            }

            hits[py as usize * size + px as usize] += 1;
        }
    }

    let peak = hits.iter().copied().max().unwrap_or(0).max(1) as f32;
    let mut image = GrayImage::new(PREVIEW_SIZE, PREVIEW_SIZE);
    for (pixel, &count) in image.pixels_mut().zip(hits.iter()) {
        // Square-root tone map keeps sparse splats visible next to the
        // densest cell.
        let value = ((count as f32 / peak).sqrt() * 255.0) as u8;
        pixel.0 = [value];
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_single_point_splats_at_the_centre() {
        let image = render_preview(&[0.0, 0.0, 0.0], Projection::FrontXy, 1.0);

        let centre = PREVIEW_SIZE / 2;
        let lit: Vec<_> = image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] > 0)
            .collect();
        assert_eq!(lit.len(), 1);
        let (x, y, pixel) = lit[0];
        assert!(x.abs_diff(centre) <= 1 && y.abs_diff(centre) <= 1);
        assert_eq!(pixel.0[0], 255);
    }

    #[test]
    fn out_of_frame_points_are_dropped() {
        let image = render_preview(&[10.0, 10.0, 10.0], Projection::TopXz, 1.0);
        assert!(image.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn vertical_position_flips_for_the_front_view() {
        // A point above the origin must land in the upper image half.
        let image = render_preview(&[0.0, 0.9, 0.0], Projection::FrontXy, 1.0);
        let lit = image
            .enumerate_pixels()
            .find(|(_, _, p)| p.0[0] > 0)
            .map(|(_, y, _)| y);
        assert!(lit.is_some_and(|y| y < PREVIEW_SIZE / 4));
    }
}
