//! Colour type, parsing, and perceptual distance.

use std::fmt;
use std::str::FromStr;

use palette::color_difference::DeltaE;
use palette::white_point::D65;
use palette::{IntoColor, Lab, LinSrgb, Srgb};
use serde::{Serialize, Serializer};

use crate::error::{Result, TintError};

type SrgbHsl = palette::Hsl<palette::encoding::Srgb, f64>;

/// Largest ΔE at which two colours still count as the same colour.
pub const SIMILARITY_THRESHOLD: f64 = 2.3;

/// An opaque sRGB colour.
///
/// Channels are kept as floating point values in `0.0..=255.0` so that
/// transform results are scored without intermediate rounding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A colour in HSL space.
///
/// Hue is in degrees, saturation and lightness are in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Colour {
    /// Create a colour from RGB components in `0.0..=255.0`.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// A neutral grey with all three channels set to `value`.
    pub fn grey(value: u8) -> Self {
        let v = f64::from(value);
        Self::rgb(v, v, v)
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);

    /// Parse a colour literal into an RGB colour.
    ///
    /// Returns `None` unless the literal resolves to exactly three channels,
    /// so alpha-carrying hex forms such as `#RGBA` are rejected along with
    /// malformed input.
    pub fn parse(input: &str) -> Option<Self> {
        match parse_channels(input).ok()?[..] {
            [r, g, b] => Some(Self::rgb(f64::from(r), f64::from(g), f64::from(b))),
            _ => None,
        }
    }

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> [f64; 3] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0]
    }

    /// Build a colour from channels in `0.0..=1.0`.
    pub fn from_unit([r, g, b]: [f64; 3]) -> Self {
        Self::rgb(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Convert to HSL. Achromatic colours get a hue of zero.
    pub fn to_hsl(self) -> Hsl {
        let [r, g, b] = self.to_unit();
        let hsl: SrgbHsl = Srgb::new(r, g, b).into_color();
        Hsl {
            hue: hsl.hue.into_positive_degrees(),
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    /// Convert from HSL. Saturation and lightness are clamped first.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let hsl = SrgbHsl::new(
            hsl.hue,
            hsl.saturation.clamp(0.0, 1.0),
            hsl.lightness.clamp(0.0, 1.0),
        );
        let rgb: Srgb<f64> = hsl.into_color();
        Self::from_unit([rgb.red, rgb.green, rgb.blue])
    }

    /// Convert to CIE L*a*b* (D65).
    pub fn to_lab(self) -> Lab<D65, f64> {
        let [r, g, b] = self.to_unit();
        Srgb::new(r, g, b).into_color()
    }

    /// Perceptual distance to another colour (CIE76 ΔE).
    pub fn difference(self, other: Colour) -> f64 {
        self.to_lab().delta_e(other.to_lab())
    }

    /// Whether the two colours are perceptually indistinguishable.
    pub fn is_similar_to(self, other: Colour) -> bool {
        self.difference(other) < SIMILARITY_THRESHOLD
    }

    /// Relative luminance over linearised sRGB, Rec. 709 weights.
    pub fn luma(self) -> f64 {
        let [r, g, b] = self.to_unit();
        let linear: LinSrgb<f64> = Srgb::new(r, g, b).into_linear();
        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }

    /// Channels rounded and clamped to bytes.
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| c.round().clamp(0.0, 255.0) as u8)
    }
}

impl FromStr for Colour {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| TintError::Parse {
            message: format!("Not an RGB colour: {}", s),
            help: Some("Use #RGB, #RRGGBB, or a CSS colour name".to_string()),
        })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a colour literal into its raw channels.
///
/// Supports formats (leading `#` optional):
/// - `RGB` and `RGBA` (expanded to two digits per channel)
/// - `RRGGBB` and `RRGGBBAA`
/// - CSS colour names such as `rebeccapurple`
pub fn parse_channels(input: &str) -> Result<Vec<u8>> {
    let s = input.trim();
    let hex = s.strip_prefix('#').unwrap_or(s);

    if !hex.is_empty() && !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return palette::named::from_str(&hex.to_ascii_lowercase())
            .map(|named| vec![named.red, named.green, named.blue])
            .ok_or_else(|| TintError::Parse {
                message: format!("Unknown colour name: {}", s),
                help: None,
            });
    }

    let digits = hex
        .chars()
        .map(parse_hex_digit)
        .collect::<Result<Vec<u8>>>()?;

    match digits.len() {
        3 | 4 => Ok(digits.iter().map(|&d| d << 4 | d).collect()),
        6 | 8 => Ok(digits.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect()),
        _ => Err(TintError::Parse {
            message: format!("Invalid hex colour: {}", s),
            help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
        }),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| TintError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_6digit() {
        assert_eq!(Colour::parse("#FF0000"), Some(Colour::rgb(255.0, 0.0, 0.0)));
        assert_eq!(
            Colour::parse("1a1a2e"),
            Some(Colour::rgb(26.0, 26.0, 46.0))
        );
    }

    #[test]
    fn test_parse_3digit() {
        assert_eq!(Colour::parse("#ABC"), Some(Colour::rgb(170.0, 187.0, 204.0)));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Colour::parse("red"), Some(Colour::rgb(255.0, 0.0, 0.0)));
        assert_eq!(Colour::parse("White"), Some(Colour::WHITE));
    }

    #[test]
    fn test_alpha_is_not_rgb() {
        assert_eq!(parse_channels("#F008").unwrap(), vec![255, 0, 0, 136]);
        assert_eq!(Colour::parse("#F008"), None);
        assert_eq!(Colour::parse("#FF000080"), None);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Colour::parse("not-a-color-at-all"), None);
        assert_eq!(Colour::parse("#12345"), None);
        assert_eq!(Colour::parse(""), None);
        assert!("#GG0000".parse::<Colour>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::rgb(255.0, 0.0, 0.0).to_string(), "#ff0000");
        assert_eq!(Colour::grey(1).to_string(), "#010101");
        assert_eq!(Colour::rgb(12.4, 12.6, 300.0).to_string(), "#0c0dff");
    }

    #[test]
    fn test_hsl() {
        let hsl = Colour::rgb(255.0, 0.0, 0.0).to_hsl();
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 1.0);
        assert_eq!(hsl.lightness, 0.5);

        let hsl = Colour::rgb(0.0, 0.0, 255.0).to_hsl();
        assert_eq!(hsl.hue, 240.0);

        let grey = Colour::grey(128).to_hsl();
        assert_eq!(grey.hue, 0.0);
        assert_eq!(grey.saturation, 0.0);
    }

    #[test]
    fn test_hsl_hue_is_positive() {
        // Red dominant with blue above green sits just below 360°
        let hsl = Colour::rgb(255.0, 0.0, 128.0).to_hsl();
        assert!(hsl.hue > 329.0 && hsl.hue < 330.0, "got {}", hsl.hue);

        let back = Colour::from_hsl(Hsl { hue: hsl.hue - 360.0, ..hsl });
        assert_eq!(back.to_bytes(), [255, 0, 128]);
    }

    #[test]
    fn test_hsl_round_trip_is_close() {
        let colour = Colour::rgb(247.0, 173.0, 69.0);
        let back = Colour::from_hsl(colour.to_hsl());
        assert!((back.r - colour.r).abs() < 1e-9);
        assert!((back.g - colour.g).abs() < 1e-9);
        assert!((back.b - colour.b).abs() < 1e-9);
    }

    #[test]
    fn test_difference() {
        let red = Colour::rgb(255.0, 0.0, 0.0);
        assert_eq!(red.difference(red), 0.0);

        // L* of black is 0 and of white is 100
        let d = Colour::BLACK.difference(Colour::WHITE);
        assert!((d - 100.0).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_similarity_threshold() {
        assert!(Colour::grey(100).is_similar_to(Colour::grey(101)));
        assert!(!Colour::BLACK.is_similar_to(Colour::grey(51)));
    }

    #[test]
    fn test_luma() {
        assert_eq!(Colour::BLACK.luma(), 0.0);
        assert!((Colour::WHITE.luma() - 1.0).abs() < 1e-9);
    }
}
