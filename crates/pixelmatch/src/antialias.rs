//! Anti-aliased pixel detection, after V. Vysniauskas, "Anti-aliased Pixel
//! and Intensity Slope Detector" (2009).

use crate::color::luma_delta;
use crate::image::ImageView;

/// A pixel with more equal neighbors than this is flat, not an edge.
pub const MAX_EQUAL_NEIGHBORS: u8 = 2;

/// The 3x3 neighborhood of `(x, y)` clamped to the image, center excluded.
/// Visits columns left to right, each column top to bottom.
fn neighbors(image: &ImageView<'_>, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> {
    let x0 = x.saturating_sub(1);
    let y0 = y.saturating_sub(1);
    let x1 = (x + 1).min(image.width() - 1);
    let y1 = (y + 1).min(image.height() - 1);

    (x0..=x1)
        .flat_map(move |nx| (y0..=y1).map(move |ny| (nx, ny)))
        .filter(move |&p| p != (x, y))
}

/// Border pixels count the missing side as one equal neighbor.
fn border_bias(image: &ImageView<'_>, x: u32, y: u32) -> u8 {
    let on_border = x == 0 || y == 0 || x == image.width() - 1 || y == image.height() - 1;
    u8::from(on_border)
}

/// Whether `(x, y)` in `image` looks like an anti-aliased edge pixel.
///
/// The pixel needs both a darker and a brighter neighbor, at most
/// [`MAX_EQUAL_NEIGHBORS`] neighbors of equal brightness, and one of the two
/// neighbors with the steepest brightness step must sit inside a flat region
/// in both `image` and `other`.
pub fn is_antialiased(image: &ImageView<'_>, x: u32, y: u32, other: &ImageView<'_>) -> bool {
    let center = image.pixel(x, y);
    let mut zeroes = border_bias(image, x, y);

    let mut min = 0.0;
    let mut max = 0.0;
    let mut min_at = None;
    let mut max_at = None;

    for (nx, ny) in neighbors(image, x, y) {
        let delta = luma_delta(center, image.pixel(nx, ny));

        if delta == 0.0 {
            zeroes += 1;
            if zeroes > MAX_EQUAL_NEIGHBORS {
                return false;
            }
        } else if delta < min {
            min = delta;
            min_at = Some((nx, ny));
        } else if delta > max {
            max = delta;
            max_at = Some((nx, ny));
        }
    }

    let (Some(min_at), Some(max_at)) = (min_at, max_at) else {
        return false;
    };

    let flat_in_both = |(px, py): (u32, u32)| {
        has_many_siblings(image, px, py) && has_many_siblings(other, px, py)
    };

    flat_in_both(min_at) || flat_in_both(max_at)
}

/// Whether `(x, y)` has more than [`MAX_EQUAL_NEIGHBORS`] byte-identical neighbors.
pub fn has_many_siblings(image: &ImageView<'_>, x: u32, y: u32) -> bool {
    let center = image.pixel(x, y);
    let mut zeroes = border_bias(image, x, y);

    for (nx, ny) in neighbors(image, x, y) {
        if image.pixel(nx, ny) == center {
            zeroes += 1;
        }
        if zeroes > MAX_EQUAL_NEIGHBORS {
            return true;
        }
    }

    false
}
