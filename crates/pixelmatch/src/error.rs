use std::fmt;

use thiserror::Error;

/// Which buffer of a comparison call failed the geometry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    Image1,
    Image2,
    Output,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Image1 => "image1",
            Self::Image2 => "image2",
            Self::Output => "output",
        })
    }
}

/// Invalid geometry: the buffers handed to a comparison do not describe
/// the declared `width`/`height`/`stride`.
///
/// This is a caller bug, not a data condition. [`crate::pixelmatch`] panics
/// with this message; [`crate::try_pixelmatch`] returns it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error(
        "Image data size does not match width/height: {buffer} is {actual} bytes, expected {expected}"
    )]
    DataSize {
        buffer: Buffer,
        expected: usize,
        actual: usize,
    },

    #[error("Image data size does not match width/height: invalid geometry {width}x{height} with stride {stride}")]
    Dimensions {
        width: u32,
        height: u32,
        stride: usize,
    },
}
