//! Colour expression parsing and evaluation.
//!
//! Reads back the expressions produced by the suggestion engine, in either
//! dialect, so they can be applied to a concrete input colour:
//! - `lighten(@input, 20%)` - parametric transforms
//! - `adjust-hue($input, -120)` - dialect spellings map to canonical names
//! - `multiply(@input, #7f7f7f)` - blends against a colour argument
//! - `darken(spin(@input, 30.0000), 5.0000)` - nested calls

use crate::dialect::Dialect;
use crate::error::{Result, TintError};
use crate::ops::{Adjust, BlendMode, Effect};
use crate::types::Colour;

/// A parsed colour expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ColourExpr {
    /// A hex literal: `#FF0000`
    Hex(String),
    /// A CSS colour name: `rebeccapurple`
    Named(String),
    /// A variable reference: `@input` or `$input`
    Variable(String),
    /// A function call: `darken(@input, 20%)`
    Function {
        name: String,
        args: Vec<ColourExpr>,
    },
    /// A percentage value (used as argument): `20%`
    Percent(f64),
    /// A plain number (used as argument): `-120` or `12.5000`
    Number(f64),
}

impl ColourExpr {
    /// Parse a colour expression from a string.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(TintError::Parse {
                message: "Empty colour expression".to_string(),
                help: None,
            });
        }

        // Hex literal
        if input.starts_with('#') {
            return Ok(ColourExpr::Hex(input.to_string()));
        }

        // Percentage
        if let Some(num_str) = input.strip_suffix('%') {
            let value: f64 = num_str.trim().parse().map_err(|_| TintError::Parse {
                message: format!("Invalid percentage: {}", input),
                help: Some("Use format like 20% or 50.5%".to_string()),
            })?;
            return Ok(ColourExpr::Percent(value));
        }

        // Variable: @name or $name
        if let Some(name) = input.strip_prefix('@').or_else(|| input.strip_prefix('$')) {
            return Ok(ColourExpr::Variable(name.to_string()));
        }

        // Function call: name(args)
        if let Some(paren_pos) = input.find('(') {
            if !input.ends_with(')') {
                return Err(TintError::Parse {
                    message: format!("Unclosed function call: {}", input),
                    help: Some("Add closing parenthesis".to_string()),
                });
            }

            let name = input[..paren_pos].trim().to_string();
            let args = parse_args(&input[paren_pos + 1..input.len() - 1])?;

            return Ok(ColourExpr::Function { name, args });
        }

        if let Ok(value) = input.parse::<f64>() {
            return Ok(ColourExpr::Number(value));
        }

        Ok(ColourExpr::Named(input.to_string()))
    }
}

/// Parse comma-separated arguments, handling nested parentheses.
fn parse_args(input: &str) -> Result<Vec<ColourExpr>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(vec![]);
    }

    let mut args = Vec::new();
    let mut current = String::new();
    let mut paren_depth = 0usize;

    for c in input.chars() {
        match c {
            '(' => {
                paren_depth += 1;
                current.push(c);
            }
            ')' => {
                paren_depth = paren_depth.checked_sub(1).ok_or_else(|| TintError::Parse {
                    message: format!("Unbalanced parenthesis in: {}", input),
                    help: None,
                })?;
                current.push(c);
            }
            ',' if paren_depth == 0 => {
                args.push(ColourExpr::parse(&current)?);
                current.clear();
            }
            _ => current.push(c),
        }
    }

    // Don't forget the last argument
    args.push(ColourExpr::parse(&current)?);

    Ok(args)
}

/// Colour expression evaluator.
///
/// Function names are read in the evaluator's dialect; variables are
/// resolved through a lookup function.
pub struct ExprEvaluator<F>
where
    F: Fn(&str) -> Option<Colour>,
{
    dialect: Dialect,
    lookup: F,
}

impl<F> ExprEvaluator<F>
where
    F: Fn(&str) -> Option<Colour>,
{
    /// Create a new evaluator with the given variable lookup function.
    pub fn new(dialect: Dialect, lookup: F) -> Self {
        Self { dialect, lookup }
    }

    /// Evaluate an expression to a colour.
    pub fn eval(&self, expr: &ColourExpr) -> Result<Colour> {
        match expr {
            ColourExpr::Hex(hex) | ColourExpr::Named(hex) => hex.parse(),

            ColourExpr::Variable(name) => (self.lookup)(name).ok_or_else(|| TintError::Parse {
                message: format!("Undefined variable: {}{}", self.dialect.sigil(), name),
                help: None,
            }),

            ColourExpr::Percent(_) | ColourExpr::Number(_) => Err(TintError::Parse {
                message: "A number cannot be evaluated as a colour".to_string(),
                help: Some("Numbers are only valid as function arguments".to_string()),
            }),

            ColourExpr::Function { name, args } => self.eval_function(name, args),
        }
    }

    /// Evaluate a function call.
    fn eval_function(&self, name: &str, args: &[ColourExpr]) -> Result<Colour> {
        let canonical = self.dialect.canonical(name);

        if let Some(adjust) = Adjust::from_name(canonical) {
            let [colour, amount] = expect_args::<2>(name, args, "@input, 20%")?;
            return Ok(adjust.apply(self.eval(colour)?, expect_amount(name, amount)?));
        }

        if let Some(effect) = Effect::from_name(canonical) {
            let [colour] = expect_args::<1>(name, args, "@input")?;
            return Ok(effect.apply(self.eval(colour)?));
        }

        if let Some(mode) = BlendMode::from_name(canonical) {
            let [backdrop, source] = expect_args::<2>(name, args, "@input, #808080")?;
            return Ok(mode.apply(self.eval(backdrop)?, self.eval(source)?));
        }

        Err(TintError::Parse {
            message: format!("Unknown colour function for {}: {}", self.dialect, name),
            help: Some(format!("Available functions: {}", self.function_names().join(", "))),
        })
    }

    fn function_names(&self) -> Vec<&'static str> {
        Adjust::ALL
            .iter()
            .map(|adjust| adjust.name())
            .chain(Effect::ALL.iter().map(|effect| effect.name()))
            .chain(BlendMode::ALL.iter().map(|mode| mode.name()))
            .map(|name| self.dialect.spell(name))
            .collect()
    }
}

/// Evaluate `expression` with its input variable bound to `input`.
pub fn evaluate(expression: &str, input: Colour, dialect: Dialect) -> Result<Colour> {
    let expr = ColourExpr::parse(expression)?;
    let evaluator = ExprEvaluator::new(dialect, |name| (name == "input").then_some(input));
    evaluator.eval(&expr)
}

/// Helper: expect exactly `N` arguments
fn expect_args<'a, const N: usize>(
    func_name: &str,
    args: &'a [ColourExpr],
    usage: &str,
) -> Result<&'a [ColourExpr; N]> {
    args.try_into().map_err(|_| TintError::Parse {
        message: format!("{}() requires {} argument(s), got {}", func_name, N, args.len()),
        help: Some(format!("Usage: {}({})", func_name, usage)),
    })
}

/// Helper: expect a numeric argument
fn expect_amount(func_name: &str, expr: &ColourExpr) -> Result<f64> {
    match expr {
        ColourExpr::Percent(value) | ColourExpr::Number(value) => Ok(*value),
        _ => Err(TintError::Parse {
            message: format!("{}() requires a numeric amount", func_name),
            help: Some(format!("Usage: {}(@input, 20%)", func_name)),
        }),
    }
}
