//! Pixel-level image comparison with perceptual color distance and
//! anti-aliasing detection.
//!
//! ```
//! use pixelmatch::{Options, pixelmatch};
//!
//! let a = [255u8; 4 * 4 * 4];
//! let mut b = a;
//! b[..4].copy_from_slice(&[0, 0, 0, 255]);
//!
//! let mut diff = vec![0u8; a.len()];
//! let mismatched = pixelmatch(&a, &b, Some(&mut diff[..]), 4, 4, 4, &Options::default());
//! assert_eq!(mismatched, 1);
//! assert_eq!(&diff[..4], &[255, 0, 0, 255]);
//! ```

pub mod antialias;
pub mod color;
mod error;
pub mod image;
mod options;
mod sweep;

pub use antialias::{has_many_siblings, is_antialiased};
pub use color::{
    Color, ColorDelta, Direction, MAX_YIQ_DELTA, ParseColorError, color_delta, luma_delta,
    max_delta,
};
pub use error::{Buffer, GeometryError};
pub use image::{Geometry, ImageView};
pub use options::Options;
pub use sweep::{pixelmatch, try_pixelmatch};
