use image::{GrayImage, Luma, RgbImage};
use imageproc::contours::find_contours;
use imageproc::distance_transform::Norm;
use imageproc::filter::gaussian_blur_f32;
use imageproc::geometry::convex_hull;
use imageproc::morphology::{dilate, erode};
use imageproc::point::Point;
use redzone_base::Vec2;

use crate::hsv::rgb_to_hsv;

/// Inclusive HSV range kept by the skin threshold, in OpenCV 8-bit scale
/// (hue 0-179, saturation and value 0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinRange {
    pub hue: (u8, u8),
    pub saturation: (u8, u8),
    pub value: (u8, u8),
}

impl Default for SkinRange {
    /// Generic skin tone range that works under typical lighting.
    fn default() -> Self {
        Self {
            hue: (0, 25),
            saturation: (30, 255),
            value: (60, 255),
        }
    }
}

impl SkinRange {
    pub fn contains(&self, h: u8, s: u8, v: u8) -> bool {
        self.hue.0 <= h
            && h <= self.hue.1
            && self.saturation.0 <= s
            && s <= self.saturation.1
            && self.value.0 <= v
            && v <= self.value.1
    }
}

/// Convex outline of the detected hand, in frame pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hull {
    pub points: Vec<Vec2<i32>>,
}

/// Skin-color hand segmentation.
///
/// Blur, HSV threshold, morphological cleanup, contour extraction, then the
/// convex hull of the largest contour. Returns `None` when no skin-colored
/// region larger than `min_area` is present — an expected outcome, not an
/// error.
#[derive(Debug, Clone)]
pub struct HandSegmenter {
    skin: SkinRange,
    min_area: f64,
    blur_sigma: f32,
    morph_radius: u8,
}

impl Default for HandSegmenter {
    fn default() -> Self {
        Self {
            skin: SkinRange::default(),
            // Rejects noise and background skin-colored clutter at the
            // default capture resolution
            min_area: 3000.0,
            // Matches an 11x11 Gaussian kernel
            blur_sigma: 2.0,
            // 5x5 square structuring element
            morph_radius: 2,
        }
    }
}

impl HandSegmenter {
    /// Replace the skin threshold range.
    pub fn with_skin_range(mut self, skin: SkinRange) -> Self {
        self.skin = skin;
        self
    }

    /// Replace the minimum contour area, in pixels squared.
    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    /// Detect the hand in a frame and return its convex hull.
    pub fn segment(&self, frame: &RgbImage) -> Option<Hull> {
        let blurred = gaussian_blur_f32(frame, self.blur_sigma);
        let mask = self.skin_mask(&blurred);

        // Erode once, dilate twice: drop speckle, close small holes
        let mask = erode(&mask, Norm::LInf, self.morph_radius);
        let mask = dilate(&mask, Norm::LInf, self.morph_radius);
        let mask = dilate(&mask, Norm::LInf, self.morph_radius);

        let contours = find_contours::<i32>(&mask);
        let (points, area) = contours
            .iter()
            .map(|contour| (&contour.points, contour_area(&contour.points)))
            .max_by(|a, b| a.1.total_cmp(&b.1))?;
        log::debug!("{} contours, largest area {:.0}", contours.len(), area);

        if area <= self.min_area {
            return None;
        }

        let hull = convex_hull(points.clone());
        Some(Hull {
            points: hull.into_iter().map(|p| Vec2::new(p.x, p.y)).collect(),
        })
    }

    fn skin_mask(&self, frame: &RgbImage) -> GrayImage {
        let mut mask = GrayImage::new(frame.width(), frame.height());
        for (x, y, pixel) in frame.enumerate_pixels() {
            let [r, g, b] = pixel.0;
            let (h, s, v) = rgb_to_hsv(r, g, b);
            if self.skin.contains(h, s, v) {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        mask
    }
}

/// Enclosed area of a closed pixel contour (shoelace formula).
fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut twice_area = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice_area += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    twice_area.abs() as f64 / 2.0
}
