//! Suggestion engine.

use crate::dialect::Dialect;
use crate::error::{Result, TintError};
use crate::generator::GENERATORS;
use crate::rank::{best, Candidate};
use crate::types::Colour;

/// Suggest expressions turning `source` into `target`.
///
/// `dialect` defaults to LESS, as does an empty dialect name. Returns candidates ranked best-first; only
/// candidates perceptually similar to the target are kept.
///
/// # Errors
///
/// Fails with [`TintError::InvalidInput`] when `source` is empty and with
/// [`TintError::UnknownDialect`] for an unrecognised dialect name. Colours
/// that do not resolve to plain RGB give an empty list instead.
pub fn suggest(source: &str, target: &str, dialect: Option<&str>) -> Result<Vec<Candidate>> {
    require_source(source)?;
    let dialect = Dialect::resolve(dialect)?.unwrap_or_default();
    suggest_in(source, target, dialect)
}

/// Like [`suggest`], with an already resolved dialect.
pub fn suggest_in(source: &str, target: &str, dialect: Dialect) -> Result<Vec<Candidate>> {
    require_source(source)?;

    let (Some(source), Some(target)) = (Colour::parse(source), Colour::parse(target)) else {
        return Ok(Vec::new());
    };

    let candidates = GENERATORS
        .iter()
        .filter_map(|generator| generator.generate(source, target, dialect))
        .collect();

    Ok(best(candidates, target))
}

fn require_source(source: &str) -> Result<()> {
    if source.is_empty() {
        return Err(TintError::InvalidInput {
            message: "cannot suggest without a source colour".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_is_an_error() {
        assert!(matches!(
            suggest("", "#ff0000", None),
            Err(TintError::InvalidInput { .. })
        ));
        assert!(matches!(
            suggest_in("", "#ff0000", Dialect::Sass),
            Err(TintError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_blank_source_gives_nothing() {
        assert_eq!(suggest_in("  ", "#ff0000", Dialect::Sass).unwrap(), vec![]);
    }

    #[test]
    fn test_unknown_dialect_is_an_error() {
        assert!(matches!(
            suggest("#000", "#333", Some("stylus")),
            Err(TintError::UnknownDialect { .. })
        ));
    }

    #[test]
    fn test_unparseable_colours_give_nothing() {
        assert!(suggest("not-a-color-at-all", "#ff0000", None)
            .unwrap()
            .is_empty());
        assert!(suggest("#ff0000", "#zz0000", None).unwrap().is_empty());
        assert!(suggest("#ff000080", "#ff0000", None).unwrap().is_empty());
        assert!(suggest("#ff0000", "", None).unwrap().is_empty());
    }

    #[test]
    fn test_defaults_to_less() {
        let results = suggest("#ff0000", "#ff0000", None).unwrap();
        assert_eq!(results[0].expression, "@input");

        let results = suggest("#000", "#333", Some("")).unwrap();
        assert_eq!(results[0].expression, "lighten(@input, 20%)");
    }
}
