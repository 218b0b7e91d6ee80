//! Candidate generators.
//!
//! Every entry in [`GENERATORS`] turns a (source, target, dialect) triple into
//! at most one candidate. Sweeping strategies try many parameter values and
//! report only their local winner.

use crate::dialect::Dialect;
use crate::ops::{Adjust, BlendMode, Effect};
use crate::rank::{best, Candidate};
use crate::template::Template;
use crate::types::Colour;

/// A sweep stops at the first step closer than this.
pub const NEAR_EXACT: f64 = 0.05;

/// Complexity of every blend candidate, whichever grey it uses.
pub const BLEND_COMPLEXITY: f64 = 50.0;

/// Complexity of the composite fallback.
pub const COMPOSITE_COMPLEXITY: f64 = 1000.0;

/// Greys tried by blend sweeps: `#010101` to `#fdfdfd`.
const BLEND_GREYS: std::ops::RangeInclusive<u8> = 1..=253;

/// How a generator produces its candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// The source itself, as a baseline.
    Identity,
    /// A transform without parameters.
    Simple(Effect),
    /// Integer steps of a transform's amount over `min..=max`, skipping zero.
    Sweep {
        adjust: Adjust,
        min: i32,
        max: i32,
        unit: &'static str,
    },
    /// Blends of the source with every grey in [`BLEND_GREYS`].
    Blend(BlendMode),
    /// Nested spin/saturate/lighten reaching the target exactly.
    Composite,
}

/// A registered generator and the dialects it is offered in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSpec {
    pub strategy: Strategy,
    /// `None` means every dialect.
    pub dialects: Option<&'static [Dialect]>,
}

pub static GENERATORS: &[GeneratorSpec] = &[
    GeneratorSpec::new(Strategy::Identity),
    GeneratorSpec::new(sweep(Adjust::Lighten)),
    GeneratorSpec::new(sweep(Adjust::Darken)),
    GeneratorSpec::new(sweep(Adjust::Saturate)),
    GeneratorSpec::new(sweep(Adjust::Desaturate)),
    GeneratorSpec::new(Strategy::Sweep {
        adjust: Adjust::Spin,
        min: -359,
        max: 359,
        unit: "",
    }),
    GeneratorSpec::new(Strategy::Simple(Effect::Greyscale)),
    GeneratorSpec::new(Strategy::Blend(BlendMode::Multiply)),
    GeneratorSpec::new(Strategy::Blend(BlendMode::Screen)),
    GeneratorSpec::new(Strategy::Blend(BlendMode::Overlay)),
    GeneratorSpec::new(Strategy::Blend(BlendMode::Difference)),
    GeneratorSpec::new(Strategy::Blend(BlendMode::Exclusion)),
    GeneratorSpec::new(Strategy::Blend(BlendMode::Softlight)),
    GeneratorSpec::new(Strategy::Simple(Effect::Contrast)).only(&[Dialect::Less]),
    GeneratorSpec::new(Strategy::Composite),
];

const fn sweep(adjust: Adjust) -> Strategy {
    Strategy::Sweep {
        adjust,
        min: 1,
        max: 100,
        unit: "%",
    }
}

impl GeneratorSpec {
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            dialects: None,
        }
    }

    /// Restrict this generator to the given dialects.
    pub const fn only(self, dialects: &'static [Dialect]) -> Self {
        Self {
            strategy: self.strategy,
            dialects: Some(dialects),
        }
    }

    pub fn name(&self) -> &'static str {
        match self.strategy {
            Strategy::Identity => "identity",
            Strategy::Simple(effect) => effect.name(),
            Strategy::Sweep { adjust, .. } => adjust.name(),
            Strategy::Blend(mode) => mode.name(),
            Strategy::Composite => "composite",
        }
    }

    pub fn supports(&self, dialect: Dialect) -> bool {
        self.dialects.map_or(true, |allowed| allowed.contains(&dialect))
    }

    /// Produce this generator's candidate, if any.
    pub fn generate(&self, source: Colour, target: Colour, dialect: Dialect) -> Option<Candidate> {
        if !self.supports(dialect) {
            return None;
        }

        match self.strategy {
            Strategy::Identity => Some(Candidate::scored(
                source,
                target,
                0.0,
                Template::input(),
                dialect,
            )),
            Strategy::Simple(effect) => Some(Candidate::scored(
                effect.apply(source),
                target,
                0.0,
                Template::input().call(effect.name(), &[]),
                dialect,
            )),
            Strategy::Sweep {
                adjust,
                min,
                max,
                unit,
            } => sweep_amount(adjust, min, max, unit, source, target, dialect),
            Strategy::Blend(mode) => blend(mode, source, target, dialect),
            Strategy::Composite => composite(source, target, dialect),
        }
    }
}

fn sweep_amount(
    adjust: Adjust,
    min: i32,
    max: i32,
    unit: &str,
    source: Colour,
    target: Colour,
    dialect: Dialect,
) -> Option<Candidate> {
    let mut results = Vec::new();

    for amount in (min..=max).filter(|&amount| amount != 0) {
        let candidate = Candidate::scored(
            adjust.apply(source, f64::from(amount)),
            target,
            f64::from(amount.unsigned_abs()),
            Template::input().call(adjust.name(), &[format!("{}{}", amount, unit)]),
            dialect,
        );

        let done = candidate.difference < NEAR_EXACT;
        results.push(candidate);
        if done {
            break;
        }
    }

    best(results, target).into_iter().next()
}

fn blend(mode: BlendMode, source: Colour, target: Colour, dialect: Dialect) -> Option<Candidate> {
    let results = BLEND_GREYS
        .map(|value| {
            let grey = Colour::grey(value);
            Candidate::scored(
                mode.apply(source, grey),
                target,
                BLEND_COMPLEXITY,
                Template::input().call(mode.name(), &[grey.to_string()]),
                dialect,
            )
        })
        .collect();

    best(results, target).into_iter().next()
}

/// Signed HSL offsets taking `source` to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslDelta {
    /// Degrees to spin by.
    pub hue: f64,
    /// Saturation change magnitude, in percent.
    pub saturation: f64,
    pub saturation_fn: Adjust,
    /// Lightness change magnitude, in percent.
    pub lightness: f64,
    pub lightness_fn: Adjust,
}

impl HslDelta {
    pub fn between(source: Colour, target: Colour) -> Self {
        let from = source.to_hsl();
        let to = target.to_hsl();

        let saturation = from.saturation - to.saturation;
        let lightness = from.lightness - to.lightness;

        // Greys have no hue, so spinning one is meaningless.
        let hue = if from.saturation == 0.0 || to.saturation == 0.0 {
            0.0
        } else {
            to.hue - from.hue
        };

        Self {
            hue,
            saturation: saturation.abs() * 100.0,
            saturation_fn: if saturation > 0.0 {
                Adjust::Desaturate
            } else {
                Adjust::Saturate
            },
            lightness: lightness.abs() * 100.0,
            lightness_fn: if lightness > 0.0 {
                Adjust::Darken
            } else {
                Adjust::Lighten
            },
        }
    }

    /// Number of axes with a non-zero change.
    pub fn axes(&self) -> usize {
        [self.hue, self.saturation, self.lightness]
            .iter()
            .filter(|&&v| v != 0.0)
            .count()
    }
}

fn composite(source: Colour, target: Colour, dialect: Dialect) -> Option<Candidate> {
    let delta = HslDelta::between(source, target);

    // A single differing axis belongs to the plain sweeps.
    if delta.axes() == 1 {
        return None;
    }

    let mut template = Template::input();
    if delta.hue != 0.0 {
        template = template.call(Adjust::Spin.name(), &[format!("{:.4}", delta.hue)]);
    }
    if delta.saturation != 0.0 {
        template = template.call(
            delta.saturation_fn.name(),
            &[format!("{:.4}", delta.saturation)],
        );
    }
    if delta.lightness != 0.0 {
        template = template.call(
            delta.lightness_fn.name(),
            &[format!("{:.4}", delta.lightness)],
        );
    }

    Some(Candidate {
        colour: target,
        difference: 0.0,
        complexity: COMPOSITE_COMPLEXITY,
        expression: template.render(dialect),
        template,
    })
}
