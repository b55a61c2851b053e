use tracing::{debug, trace};

use crate::antialias::is_antialiased;
use crate::color::{Color, Direction, color_delta, gray, max_delta};
use crate::error::{Buffer, GeometryError};
use crate::image::{CHANNELS, Geometry, ImageView};
use crate::options::Options;

/// Compare two RGBA8 images and return the number of mismatched pixels.
///
/// `img1`, `img2` and `output` (when given) must each be exactly
/// `stride * height * 4` bytes. When `output` is present it receives the
/// diff visualization; the returned count is the same either way.
///
/// # Panics
///
/// Panics with "Image data size does not match width/height" when the
/// buffers do not match the declared geometry. Use [`try_pixelmatch`] to
/// get the error as a value instead.
pub fn pixelmatch(
    img1: &[u8],
    img2: &[u8],
    output: Option<&mut [u8]>,
    width: u32,
    height: u32,
    stride: usize,
    options: &Options,
) -> usize {
    match try_pixelmatch(img1, img2, output, width, height, stride, options) {
        Ok(mismatched) => mismatched,
        Err(e) => panic!("{e}"),
    }
}

/// [`pixelmatch`], returning invalid geometry as an error.
pub fn try_pixelmatch(
    img1: &[u8],
    img2: &[u8],
    output: Option<&mut [u8]>,
    width: u32,
    height: u32,
    stride: usize,
    options: &Options,
) -> Result<usize, GeometryError> {
    let geometry = Geometry::new(width, height, stride);
    geometry.check(Buffer::Image1, img1.len())?;
    geometry.check(Buffer::Image2, img2.len())?;
    if let Some(out) = output.as_deref() {
        geometry.check(Buffer::Output, out.len())?;
    }

    let sweep = Sweep {
        image1: ImageView::new_unchecked(img1, geometry),
        image2: ImageView::new_unchecked(img2, geometry),
        options,
        max_delta: max_delta(options.threshold),
    };
    Ok(sweep.run(output))
}

/// Outcome for one pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Unchanged,
    Antialiased,
    Different(Direction),
}

struct Sweep<'a> {
    image1: ImageView<'a>,
    image2: ImageView<'a>,
    options: &'a Options,
    max_delta: f64,
}

impl Sweep<'_> {
    fn run(&self, output: Option<&mut [u8]>) -> usize {
        let geometry = self.image1.geometry();

        if self.image1.same_pixels(&self.image2) {
            trace!(
                width = geometry.width,
                height = geometry.height,
                "images are identical"
            );
            if let Some(out) = output {
                for (y, row) in out.chunks_mut(geometry.row_bytes()).enumerate() {
                    for x in 0..geometry.width {
                        let paint = self.paint(Verdict::Unchanged, self.image1.pixel(x, y as u32));
                        put(row, x, paint);
                    }
                }
            }
            return 0;
        }

        let mismatched = self.sweep_rows(output);
        debug!(
            width = geometry.width,
            height = geometry.height,
            stride = geometry.stride,
            mismatched,
            "compared images"
        );
        mismatched
    }

    #[cfg(not(feature = "parallel"))]
    fn sweep_rows(&self, output: Option<&mut [u8]>) -> usize {
        let geometry = self.image1.geometry();
        match output {
            Some(out) => out
                .chunks_mut(geometry.row_bytes())
                .enumerate()
                .map(|(y, row)| self.sweep_row(y as u32, Some(row)))
                .sum(),
            None => (0..geometry.height).map(|y| self.sweep_row(y, None)).sum(),
        }
    }

    /// Rows are independent; each worker owns its own output row.
    #[cfg(feature = "parallel")]
    fn sweep_rows(&self, output: Option<&mut [u8]>) -> usize {
        use rayon::prelude::*;

        let geometry = self.image1.geometry();
        match output {
            Some(out) => out
                .par_chunks_mut(geometry.row_bytes())
                .enumerate()
                .map(|(y, row)| self.sweep_row(y as u32, Some(row)))
                .sum(),
            None => (0..geometry.height)
                .into_par_iter()
                .map(|y| self.sweep_row(y, None))
                .sum(),
        }
    }

    fn sweep_row(&self, y: u32, mut row: Option<&mut [u8]>) -> usize {
        let mut mismatched = 0;
        for x in 0..self.image1.width() {
            let p1 = self.image1.pixel(x, y);
            let verdict = self.classify(x, y, p1, self.image2.pixel(x, y));
            if matches!(verdict, Verdict::Different(_)) {
                mismatched += 1;
            }
            if let Some(row) = row.as_deref_mut() {
                put(row, x, self.paint(verdict, p1));
            }
        }
        mismatched
    }

    fn classify(&self, x: u32, y: u32, p1: Color, p2: Color) -> Verdict {
        if p1 == p2 {
            return Verdict::Unchanged;
        }

        let delta = color_delta(p1, p2);
        if delta.magnitude <= self.max_delta {
            return Verdict::Unchanged;
        }

        if !self.options.include_aa
            && (is_antialiased(&self.image1, x, y, &self.image2)
                || is_antialiased(&self.image2, x, y, &self.image1))
        {
            return Verdict::Antialiased;
        }

        Verdict::Different(delta.direction)
    }

    fn paint(&self, verdict: Verdict, original: Color) -> Color {
        let o = self.options;
        match verdict {
            // anti-aliased pixels are not part of a mask
            Verdict::Unchanged | Verdict::Antialiased if o.diff_mask => Color::TRANSPARENT,
            Verdict::Unchanged => gray(original, o.alpha),
            Verdict::Antialiased => o.aa_color,
            Verdict::Different(Direction::Darker) => o.diff_color_alt.unwrap_or(o.diff_color),
            Verdict::Different(Direction::Lighter) => o.diff_color,
        }
    }
}

#[inline]
fn put(row: &mut [u8], x: u32, color: Color) {
    let i = x as usize * CHANNELS;
    row[i..i + CHANNELS].copy_from_slice(&color.to_array());
}
