//! Named colour transforms with preprocessor semantics.
//!
//! Each transform is identified by its canonical name, the spelling used in
//! expression templates before dialect substitution.

use crate::types::Colour;

/// Luma above which `contrast` picks black over white.
const CONTRAST_THRESHOLD: f64 = 0.43;

/// A transform taking a colour and a numeric amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Lighten,
    Darken,
    Saturate,
    Desaturate,
    Spin,
}

impl Adjust {
    pub const ALL: [Adjust; 5] = [
        Adjust::Lighten,
        Adjust::Darken,
        Adjust::Saturate,
        Adjust::Desaturate,
        Adjust::Spin,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|adjust| adjust.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Adjust::Lighten => "lighten",
            Adjust::Darken => "darken",
            Adjust::Saturate => "saturate",
            Adjust::Desaturate => "desaturate",
            Adjust::Spin => "spin",
        }
    }

    /// Apply the transform. Percentages are given as `0..=100`, spin in degrees.
    pub fn apply(self, colour: Colour, amount: f64) -> Colour {
        let mut hsl = colour.to_hsl();
        match self {
            Adjust::Lighten => hsl.lightness = clamp_unit(hsl.lightness + amount / 100.0),
            Adjust::Darken => hsl.lightness = clamp_unit(hsl.lightness - amount / 100.0),
            Adjust::Saturate => hsl.saturation = clamp_unit(hsl.saturation + amount / 100.0),
            Adjust::Desaturate => hsl.saturation = clamp_unit(hsl.saturation - amount / 100.0),
            Adjust::Spin => {
                let hue = (hsl.hue + amount) % 360.0;
                hsl.hue = if hue < 0.0 { 360.0 + hue } else { hue };
            }
        }
        Colour::from_hsl(hsl)
    }
}

/// A transform taking only a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Greyscale,
    Contrast,
}

impl Effect {
    pub const ALL: [Effect; 2] = [Effect::Greyscale, Effect::Contrast];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|effect| effect.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Effect::Greyscale => "greyscale",
            Effect::Contrast => "contrast",
        }
    }

    pub fn apply(self, colour: Colour) -> Colour {
        match self {
            Effect::Greyscale => Adjust::Desaturate.apply(colour, 100.0),
            Effect::Contrast => {
                if colour.luma() > CONTRAST_THRESHOLD {
                    Colour::BLACK
                } else {
                    Colour::WHITE
                }
            }
        }
    }
}

/// A per-channel blend of two colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Multiply,
    Screen,
    Overlay,
    Difference,
    Exclusion,
    Softlight,
}

impl BlendMode {
    pub const ALL: [BlendMode; 6] = [
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Softlight,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Softlight => "softlight",
        }
    }

    /// Blend `source` over `backdrop`.
    pub fn apply(self, backdrop: Colour, source: Colour) -> Colour {
        let cb = backdrop.to_unit();
        let cs = source.to_unit();
        Colour::from_unit([0, 1, 2].map(|i| self.channel(cb[i], cs[i])))
    }

    fn channel(self, cb: f64, cs: f64) -> f64 {
        match self {
            BlendMode::Multiply => cb * cs,
            BlendMode::Screen => cb + cs - cb * cs,
            BlendMode::Overlay => {
                let cb = cb * 2.0;
                if cb <= 1.0 {
                    BlendMode::Multiply.channel(cb, cs)
                } else {
                    BlendMode::Screen.channel(cb - 1.0, cs)
                }
            }
            BlendMode::Difference => (cb - cs).abs(),
            BlendMode::Exclusion => cb + cs - 2.0 * cb * cs,
            BlendMode::Softlight => {
                let (d, e) = if cs > 0.5 {
                    let d = if cb > 0.25 {
                        cb.sqrt()
                    } else {
                        ((16.0 * cb - 12.0) * cb + 4.0) * cb
                    };
                    (d, 1.0)
                } else {
                    (1.0, cb)
                };
                cb - (1.0 - 2.0 * cs) * e * (d - cb)
            }
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_black() {
        let colour = Adjust::Lighten.apply(Colour::BLACK, 20.0);
        assert_eq!(colour, Colour::grey(51));
    }

    #[test]
    fn test_darken_clamps() {
        let colour = Adjust::Darken.apply(Colour::grey(51), 100.0);
        assert_eq!(colour, Colour::BLACK);
    }

    #[test]
    fn test_desaturate_fully_is_grey() {
        let colour = Adjust::Desaturate.apply(Colour::rgb(255.0, 100.0, 100.0), 100.0);
        assert!((colour.r - colour.g).abs() < 1e-9);
        assert!((colour.g - colour.b).abs() < 1e-9);
    }

    #[test]
    fn test_saturate_already_saturated() {
        let red = Colour::rgb(255.0, 0.0, 0.0);
        assert_eq!(Adjust::Saturate.apply(red, 10.0), red);
    }

    #[test]
    fn test_spin_wraps() {
        let red = Colour::rgb(255.0, 0.0, 0.0);
        let blue = Adjust::Spin.apply(red, -120.0);
        assert_eq!(blue.to_bytes(), [0, 0, 255]);
        let green = Adjust::Spin.apply(red, 120.0);
        assert_eq!(green.to_bytes(), [0, 255, 0]);
    }

    #[test]
    fn test_greyscale() {
        let grey = Effect::Greyscale.apply(Colour::rgb(255.0, 0.0, 0.0));
        assert_eq!(grey.to_bytes(), [128, 128, 128]);
    }

    #[test]
    fn test_contrast() {
        assert_eq!(Effect::Contrast.apply(Colour::BLACK), Colour::WHITE);
        assert_eq!(Effect::Contrast.apply(Colour::WHITE), Colour::BLACK);
    }

    #[test]
    fn test_blend_modes_on_black() {
        let grey = Colour::grey(51);
        assert_eq!(BlendMode::Multiply.apply(Colour::BLACK, grey), Colour::BLACK);
        assert_eq!(BlendMode::Screen.apply(Colour::BLACK, grey), grey);
        assert_eq!(BlendMode::Difference.apply(Colour::BLACK, grey), grey);
        assert_eq!(BlendMode::Exclusion.apply(Colour::BLACK, grey), grey);
        assert_eq!(BlendMode::Overlay.apply(Colour::BLACK, grey), Colour::BLACK);
    }

    #[test]
    fn test_multiply_white_is_identity() {
        let colour = Colour::rgb(10.0, 20.0, 30.0);
        let blended = BlendMode::Multiply.apply(colour, Colour::WHITE);
        assert_eq!(blended.to_bytes(), [10, 20, 30]);
    }

    #[test]
    fn test_softlight_mid_grey_is_identity() {
        let colour = Colour::rgb(200.0, 100.0, 50.0);
        let mid = Colour::rgb(127.5, 127.5, 127.5);
        assert_eq!(BlendMode::Softlight.apply(colour, mid).to_bytes(), [200, 100, 50]);
    }
}
