//! Expression templates with `{token}` placeholders.
//!
//! Grammar:
//!
//! ```text
//! template := (literal | "{" ident "}")*
//! ident    := [A-Za-z0-9_-]+
//! ```
//!
//! Generators build templates bottom-up (`{input}` innermost, the final call
//! outermost). Rendering substitutes every token with its dialect spelling in
//! a single pass.

use std::fmt;

use crate::dialect::Dialect;
use crate::error::{Result, TintError};

/// Token naming the colour being transformed.
pub const INPUT: &str = "input";

/// One piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Token(String),
}

/// A parsed expression template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// The bare `{input}` template.
    pub fn input() -> Self {
        Self {
            segments: vec![Segment::Token(INPUT.to_string())],
        }
    }

    /// Wrap this template as the first argument of `{name}(...)`.
    ///
    /// Further arguments are appended as literals.
    pub fn call(self, name: &str, args: &[String]) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 3);
        segments.push(Segment::Token(name.to_string()));
        segments.push(Segment::Literal("(".to_string()));
        segments.extend(self.segments);

        let mut tail = String::new();
        for arg in args {
            tail.push_str(", ");
            tail.push_str(arg);
        }
        tail.push(')');
        segments.push(Segment::Literal(tail));

        Self { segments }.normalized()
    }

    /// Parse a template string.
    pub fn parse(input: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = input;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }

            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| TintError::Parse {
                message: format!("Unterminated placeholder in template: {}", input),
                help: Some("Close every `{` with a matching `}`".to_string()),
            })?;

            let ident = &after[..close];
            if !is_ident(ident) {
                return Err(TintError::Parse {
                    message: format!("Invalid placeholder `{{{}}}` in template: {}", ident, input),
                    help: Some("Placeholders may only contain letters, digits, `-` and `_`".to_string()),
                });
            }

            segments.push(Segment::Token(ident.to_string()));
            rest = &after[close + 1..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Canonical names referenced by this template, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Token(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every token with its spelling in `dialect`.
    pub fn render(&self, dialect: Dialect) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Token(name) => dialect.spell(name),
            })
            .collect()
    }

    /// Merge adjacent literals.
    fn normalized(self) -> Self {
        let mut segments: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for segment in self.segments {
            if let (Some(Segment::Literal(prev)), Segment::Literal(next)) =
                (segments.last_mut(), &segment)
            {
                prev.push_str(next);
                continue;
            }
            segments.push(segment);
        }
        Self { segments }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Token(name) => write!(f, "{{{}}}", name)?,
            }
        }
        Ok(())
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
