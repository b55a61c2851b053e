use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use image::{ImageReader, RgbaImage};
use pixelmatch::Options;
use tracing::{debug, info};

use crate::report;

pub struct CompareResult {
    pub mismatched: u64,
    pub total_pixels: u64,
    /// 0.0 = identical, 1.0 = every pixel differs.
    pub score: f64,
    pub diff_image: Option<RgbaImage>,
    pub elapsed: Duration,
}

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .to_rgba8();
    Ok(image)
}

/// Run the sweep over two decoded images, producing a diff image when asked.
pub fn compare_images(
    left: &RgbaImage,
    right: &RgbaImage,
    with_diff: bool,
    options: &Options,
) -> Result<CompareResult> {
    if left.dimensions() != right.dimensions() {
        bail!(
            "Image dimensions do not match: {}x{} vs {}x{}",
            left.width(),
            left.height(),
            right.width(),
            right.height()
        );
    }

    let (w, h) = left.dimensions();
    let mut diff_image = with_diff.then(|| RgbaImage::new(w, h));

    let start = Instant::now();
    let mismatched = pixelmatch::try_pixelmatch(
        left.as_raw(),
        right.as_raw(),
        diff_image.as_deref_mut(),
        w,
        h,
        w as usize,
        options,
    )
    .context("Failed to compare images")? as u64;
    let elapsed = start.elapsed();

    let total_pixels = (w as u64) * (h as u64);
    let score = if total_pixels > 0 {
        mismatched as f64 / total_pixels as f64
    } else {
        0.0
    };

    Ok(CompareResult {
        mismatched,
        total_pixels,
        score,
        diff_image,
        elapsed,
    })
}

/// `pixelmatch compare` — decode, compare, write the diff, report.
/// Returns exit code: 0 = no mismatched pixels, 1 = some pixels differ.
pub fn compare(
    image1: &Path,
    image2: &Path,
    diff_path: Option<&Path>,
    options: &Options,
) -> Result<i32> {
    let left = load_rgba(image1)?;
    let right = load_rgba(image2)?;
    debug!(
        width = left.width(),
        height = left.height(),
        "decoded images"
    );

    let result = compare_images(&left, &right, diff_path.is_some(), options)?;

    if let (Some(path), Some(diff_img)) = (diff_path, &result.diff_image) {
        diff_img
            .save(path)
            .with_context(|| format!("Failed to save diff image: {}", path.display()))?;
        info!(path = %path.display(), "wrote diff image");
    }

    report::print_result(image1, image2, &result);
    Ok(if result.mismatched == 0 { 0 } else { 1 })
}
