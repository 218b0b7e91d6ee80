//! Core colour types for tint.
//!
//! - `Colour` - RGB colour values with HSL and Lab views
//! - `ColourExpr` - Colour expressions (lighten, spin, multiply, etc.)

mod colour;
mod expr;

pub use colour::{parse_channels, Colour, Hsl, SIMILARITY_THRESHOLD};
pub use expr::{evaluate, ColourExpr, ExprEvaluator};
