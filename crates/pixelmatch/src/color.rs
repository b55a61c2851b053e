//! Perceptual color model.
//!
//! Pixels are blended against white, converted to YIQ and compared with the
//! weighted distance from Kotsarenko & Ramos, "Measuring perceived color
//! difference using YIQ NTSC transmission color space in mobile applications".

use std::fmt;
use std::str::FromStr;

/// Maximum possible value of [`ColorDelta::magnitude`].
pub const MAX_YIQ_DELTA: f64 = 35215.0;

const Y_WEIGHTS: [f64; 3] = [0.29889531, 0.58662247, 0.11448223];
const I_WEIGHTS: [f64; 3] = [0.59597799, -0.27417610, -0.32180189];
const Q_WEIGHTS: [f64; 3] = [0.21147017, -0.52261711, 0.31114694];

const Y_DELTA_WEIGHT: f64 = 0.5053;
const I_DELTA_WEIGHT: f64 = 0.299;
const Q_DELTA_WEIGHT: f64 = 0.1957;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Luma of the color after blending its alpha against white.
    pub fn luma(self) -> f64 {
        Yiq::from(self).y
    }

    /// Luma of the raw channels, ignoring alpha.
    fn luma_opaque(self) -> f64 {
        dot(Y_WEIGHTS, [self.r as f64, self.g as f64, self.b as f64])
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}': expected #rrggbb, #rrggbbaa, r,g,b or r,g,b,a")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_owned());
        let s = s.trim();

        let channels: Vec<u8> = if let Some(hex) = s.strip_prefix('#') {
            if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
                return Err(err());
            }
            (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
                .collect::<Result<_, _>>()
                .map_err(|_| err())?
        } else {
            s.split(',')
                .map(|c| c.trim().parse::<u8>())
                .collect::<Result<_, _>>()
                .map_err(|_| err())?
        };

        match channels[..] {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::new(r, g, b, a)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Whether the second pixel of a comparison is darker or lighter than the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The second pixel has lower luma.
    Darker,
    /// The second pixel has equal or higher luma.
    Lighter,
}

/// Perceptual distance between two pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDelta {
    /// Weighted squared YIQ distance, `0..=MAX_YIQ_DELTA`.
    pub magnitude: f64,
    pub direction: Direction,
}

impl ColorDelta {
    pub const ZERO: ColorDelta = ColorDelta {
        magnitude: 0.0,
        direction: Direction::Lighter,
    };

    /// Distance as a fraction of the largest possible distance, in `[0, 1]`.
    pub fn normalized(&self) -> f64 {
        (self.magnitude / MAX_YIQ_DELTA).sqrt()
    }

    /// True when the distance is strictly above `threshold` (a fraction in `[0, 1]`).
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.magnitude > max_delta(threshold)
    }
}

/// Largest magnitude still considered equal at `threshold`.
pub fn max_delta(threshold: f64) -> f64 {
    MAX_YIQ_DELTA * threshold * threshold
}

/// YIQ coordinates of an alpha-blended pixel.
#[derive(Debug, Clone, Copy)]
struct Yiq {
    y: f64,
    i: f64,
    q: f64,
}

impl From<Color> for Yiq {
    fn from(c: Color) -> Self {
        let rgb = blend_rgb(c);
        Self {
            y: dot(Y_WEIGHTS, rgb),
            i: dot(I_WEIGHTS, rgb),
            q: dot(Q_WEIGHTS, rgb),
        }
    }
}

#[inline]
fn dot(w: [f64; 3], [r, g, b]: [f64; 3]) -> f64 {
    r * w[0] + g * w[1] + b * w[2]
}

/// Blend a channel value against white at opacity `a` (`0..=1`).
#[inline]
fn blend(c: f64, a: f64) -> f64 {
    255.0 + (c - 255.0) * a
}

fn blend_rgb(c: Color) -> [f64; 3] {
    let (r, g, b) = (c.r as f64, c.g as f64, c.b as f64);
    if c.a < 255 {
        let a = c.a as f64 / 255.0;
        [blend(r, a), blend(g, a), blend(b, a)]
    } else {
        [r, g, b]
    }
}

/// Full perceptual distance between `a` and `b`.
pub fn color_delta(a: Color, b: Color) -> ColorDelta {
    if a == b {
        return ColorDelta::ZERO;
    }

    let p = Yiq::from(a);
    let q = Yiq::from(b);
    let dy = p.y - q.y;
    let di = p.i - q.i;
    let dq = p.q - q.q;

    ColorDelta {
        magnitude: Y_DELTA_WEIGHT * dy * dy + I_DELTA_WEIGHT * di * di + Q_DELTA_WEIGHT * dq * dq,
        direction: if p.y > q.y {
            Direction::Darker
        } else {
            Direction::Lighter
        },
    }
}

/// Signed brightness difference `Y(a) - Y(b)`.
pub fn luma_delta(a: Color, b: Color) -> f64 {
    if a == b {
        return 0.0;
    }
    a.luma() - b.luma()
}

/// Grayscale rendering of `c` faded towards white by `alpha`, used for unchanged pixels.
/// The level is truncated, not rounded.
pub(crate) fn gray(c: Color, alpha: f64) -> Color {
    let v = blend(c.luma_opaque(), alpha * c.a as f64 / 255.0) as u8;
    Color::rgb(v, v, v)
}
