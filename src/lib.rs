//! tint - colour function suggestions for CSS preprocessors
//!
//! Given a source and a target colour, finds the simplest LESS or Sass
//! expression (`lighten(@input, 20%)`, `adjust-hue($input, 30)`, ...) that
//! turns the source into the target, or close enough that the difference
//! is imperceptible.

pub mod cli;
pub mod config;
pub mod dialect;
pub mod error;
pub mod generator;
pub mod ops;
pub mod output;
pub mod rank;
pub mod suggest;
pub mod template;
pub mod types;

pub use config::{Config, OutputFormat};
pub use dialect::Dialect;
pub use error::{Result, TintError};
pub use generator::{GeneratorSpec, Strategy, GENERATORS};
pub use ops::{Adjust, BlendMode, Effect};
pub use rank::{best, Candidate};
pub use suggest::{suggest, suggest_in};
pub use template::Template;
pub use types::{evaluate, Colour, ColourExpr, ExprEvaluator, Hsl};
