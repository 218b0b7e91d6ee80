//! Preprocessor dialects and their function spellings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TintError};

/// Overrides for LESS. Every other canonical name is spelled verbatim.
const LESS: &[(&str, &str)] = &[("input", "@input")];

/// Overrides for Sass.
const SASS: &[(&str, &str)] = &[
    ("input", "$input"),
    ("greyscale", "grayscale"),
    ("spin", "adjust-hue"),
    ("multiply", "blend-multiply"),
    ("screen", "blend-screen"),
    ("overlay", "blend-overlay"),
    ("difference", "blend-difference"),
    ("exclusion", "blend-exclusion"),
    ("softlight", "blend-softlight"),
];

/// A CSS preprocessor syntax family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Less,
    Sass,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Less, Dialect::Sass];

    pub const fn name(self) -> &'static str {
        match self {
            Dialect::Less => "less",
            Dialect::Sass => "sass",
        }
    }

    fn overrides(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Dialect::Less => LESS,
            Dialect::Sass => SASS,
        }
    }

    /// Spelling of a canonical token, or the token itself when not overridden.
    pub fn spell<'a>(self, token: &'a str) -> &'a str {
        self.overrides()
            .iter()
            .find(|(canonical, _)| *canonical == token)
            .map_or(token, |&(_, spelling)| spelling)
    }

    /// Canonical token for a dialect spelling, or the spelling itself.
    pub fn canonical<'a>(self, spelling: &'a str) -> &'a str {
        self.overrides()
            .iter()
            .find(|(_, spelled)| *spelled == spelling)
            .map_or(spelling, |&(canonical, _)| canonical)
    }

    /// Resolve an optional dialect name. An absent or empty name is `None`.
    pub fn resolve(name: Option<&str>) -> Result<Option<Self>> {
        name.filter(|name| !name.is_empty())
            .map(str::parse::<Self>)
            .transpose()
    }

    /// Sigil that starts a variable reference (`@` or `$`).
    pub fn sigil(self) -> char {
        match self {
            Dialect::Less => '@',
            Dialect::Sass => '$',
        }
    }
}

impl FromStr for Dialect {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.name() == s)
            .ok_or_else(|| TintError::UnknownDialect {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("less".parse::<Dialect>().unwrap(), Dialect::Less);
        assert_eq!("sass".parse::<Dialect>().unwrap(), Dialect::Sass);
        assert!(matches!(
            "stylus".parse::<Dialect>(),
            Err(TintError::UnknownDialect { name }) if name == "stylus"
        ));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Dialect::resolve(None).unwrap(), None);
        assert_eq!(Dialect::resolve(Some("")).unwrap(), None);
        assert_eq!(Dialect::resolve(Some("sass")).unwrap(), Some(Dialect::Sass));
        assert!(Dialect::resolve(Some("stylus")).is_err());
    }

    #[test]
    fn test_spell() {
        assert_eq!(Dialect::Less.spell("input"), "@input");
        assert_eq!(Dialect::Less.spell("spin"), "spin");
        assert_eq!(Dialect::Sass.spell("input"), "$input");
        assert_eq!(Dialect::Sass.spell("spin"), "adjust-hue");
        assert_eq!(Dialect::Sass.spell("lighten"), "lighten");
    }

    #[test]
    fn test_canonical() {
        assert_eq!(Dialect::Sass.canonical("blend-softlight"), "softlight");
        assert_eq!(Dialect::Sass.canonical("darken"), "darken");
        assert_eq!(Dialect::Less.canonical("spin"), "spin");
    }

    #[test]
    fn test_default_is_less() {
        assert_eq!(Dialect::default(), Dialect::Less);
    }
}
