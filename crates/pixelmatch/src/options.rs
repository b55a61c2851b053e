use crate::color::Color;

/// Settings for one comparison call.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Matching threshold in `[0, 1]`; smaller is more sensitive.
    pub threshold: f64,
    /// Count anti-aliased pixels as differences instead of detecting them.
    pub include_aa: bool,
    /// Opacity of the original image under the diff output.
    pub alpha: f64,
    /// Color of anti-aliased pixels in the diff output.
    pub aa_color: Color,
    /// Color of differing pixels in the diff output.
    pub diff_color: Color,
    /// Color for pixels that get darker in the second image; `diff_color` when unset.
    pub diff_color_alt: Option<Color>,
    /// Paint unchanged pixels transparent, producing a mask of the differences.
    pub diff_mask: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            include_aa: false,
            alpha: 0.1,
            aa_color: Color::rgb(255, 255, 0),
            diff_color: Color::rgb(255, 0, 0),
            diff_color_alt: None,
            diff_mask: false,
        }
    }
}
