use crate::color::Color;
use crate::error::{Buffer, GeometryError};

/// Bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Shape of an RGBA8 buffer: logical size plus row stride in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    /// Pixels per row, `>= width`.
    pub stride: usize,
}

impl Geometry {
    pub fn new(width: u32, height: u32, stride: usize) -> Self {
        Self {
            width,
            height,
            stride,
        }
    }

    /// Tightly packed rows (`stride == width`).
    pub fn packed(width: u32, height: u32) -> Self {
        Self::new(width, height, width as usize)
    }

    /// Required buffer length: `stride * height * 4`, or `None` if that overflows `usize`.
    pub fn byte_len(&self) -> Option<usize> {
        self.stride
            .checked_mul(self.height as usize)?
            .checked_mul(CHANNELS)
    }

    /// Bytes per row including padding.
    pub fn row_bytes(&self) -> usize {
        self.stride * CHANNELS
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.stride + x as usize) * CHANNELS
    }

    /// Check that the dimensions are usable and that `buffer` is exactly `byte_len()` long.
    pub fn check(&self, buffer: Buffer, len: usize) -> Result<(), GeometryError> {
        let dimensions = || GeometryError::Dimensions {
            width: self.width,
            height: self.height,
            stride: self.stride,
        };
        if self.width == 0 || self.height == 0 || self.stride < self.width as usize {
            return Err(dimensions());
        }
        let expected = self.byte_len().ok_or_else(dimensions)?;
        if len != expected {
            return Err(GeometryError::DataSize {
                buffer,
                expected,
                actual: len,
            });
        }
        Ok(())
    }
}

/// Read-only view over a validated RGBA8 buffer.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    data: &'a [u8],
    geometry: Geometry,
}

impl<'a> ImageView<'a> {
    /// Wrap `data`, validating it against `geometry`.
    pub fn new(data: &'a [u8], geometry: Geometry) -> Result<Self, GeometryError> {
        geometry.check(Buffer::Image1, data.len())?;
        Ok(Self { data, geometry })
    }

    /// Caller has already run `geometry.check` on `data`.
    pub(crate) fn new_unchecked(data: &'a [u8], geometry: Geometry) -> Self {
        debug_assert_eq!(Some(data.len()), geometry.byte_len());
        Self { data, geometry }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let i = self.geometry.offset(x, y);
        let p = &self.data[i..i + CHANNELS];
        Color::new(p[0], p[1], p[2], p[3])
    }

    /// The `width` visible pixels of row `y`, without stride padding.
    pub fn row(&self, y: u32) -> &'a [u8] {
        let start = self.geometry.offset(0, y);
        &self.data[start..start + self.geometry.width as usize * CHANNELS]
    }

    /// True when every visible pixel matches `other` byte for byte.
    /// Padding between rows is ignored.
    pub fn same_pixels(&self, other: &ImageView<'_>) -> bool {
        self.geometry == other.geometry
            && (0..self.geometry.height).all(|y| self.row(y) == other.row(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_len_counts_padding() {
        let g = Geometry::new(3, 2, 5);
        assert_eq!(g.byte_len(), Some(5 * 2 * 4));
        assert_eq!(g.offset(2, 1), (5 + 2) * 4);
    }

    #[test]
    fn check_rejects_wrong_length() {
        let g = Geometry::new(2, 1, 2);
        assert_eq!(
            g.check(Buffer::Image2, 9),
            Err(GeometryError::DataSize {
                buffer: Buffer::Image2,
                expected: 8,
                actual: 9,
            })
        );
        assert!(g.check(Buffer::Image1, 8).is_ok());
    }

    #[test]
    fn check_rejects_empty_and_narrow_stride() {
        assert!(matches!(
            Geometry::new(0, 1, 0).check(Buffer::Image1, 0),
            Err(GeometryError::Dimensions { .. })
        ));
        assert!(matches!(
            Geometry::new(4, 1, 2).check(Buffer::Image1, 8),
            Err(GeometryError::Dimensions { .. })
        ));
    }

    #[test]
    fn check_rejects_overflowing_length() {
        let g = Geometry::new(1, 2, usize::MAX / 4 + 2);
        assert_eq!(g.byte_len(), None);
        assert!(matches!(
            g.check(Buffer::Image1, 8),
            Err(GeometryError::Dimensions { .. })
        ));
    }

    #[test]
    fn same_pixels_ignores_stride_padding() {
        let g = Geometry::new(1, 2, 2);
        let a = [1, 2, 3, 4, 9, 9, 9, 9, 5, 6, 7, 8, 0, 0, 0, 0];
        let b = [1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8, 7, 7, 7, 7];
        let a = ImageView::new(&a, g).unwrap();
        let b = ImageView::new(&b, g).unwrap();
        assert!(a.same_pixels(&b));
        assert_eq!(a.pixel(0, 1), Color::new(5, 6, 7, 8));
    }
}
