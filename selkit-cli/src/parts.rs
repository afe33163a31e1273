//! Command-line selector parts.

use anyhow::{Context, Result, bail};
use selkit_selector::{Combinator, FragmentKind};

/// One positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// `kind=value`
    Fragment(FragmentKind, String),
    /// A combinator token, either bare (`>`) or as `combinator=TOKEN`.
    Combinator(String),
}

impl Part {
    /// Parse one argument.
    ///
    /// Bare `>`, `+`, `~` and `descendant` are combinators. Anything else
    /// must be `kind=value`; the value is taken verbatim and may itself
    /// contain `=`.
    pub fn parse(arg: &str) -> Result<Self> {
        if let Some(combinator) = Combinator::from_token(arg) {
            return Ok(Self::Combinator(combinator.token().to_string()));
        }

        let Some((kind, value)) = arg.split_once('=') else {
            bail!("expected `kind=value` or a combinator, got `{arg}`");
        };

        if kind == "combinator" {
            if value.is_empty() {
                bail!("`combinator=` needs a token");
            }
            return Ok(Self::Combinator(value.to_string()));
        }

        let kind = kind
            .parse::<FragmentKind>()
            .with_context(|| format!("in `{arg}`"))?;
        Ok(Self::Fragment(kind, value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment() {
        assert_eq!(
            Part::parse("element=div").unwrap(),
            Part::Fragment(FragmentKind::Element, "div".to_string())
        );
        assert_eq!(
            Part::parse("pseudo-element=first-line").unwrap(),
            Part::Fragment(FragmentKind::PseudoElement, "first-line".to_string())
        );
    }

    #[test]
    fn test_parse_attr_keeps_inner_equals() {
        assert_eq!(
            Part::parse("attr=type=\"text\"").unwrap(),
            Part::Fragment(FragmentKind::Attribute, "type=\"text\"".to_string())
        );
    }

    #[test]
    fn test_parse_combinators() {
        assert_eq!(Part::parse(">").unwrap(), Part::Combinator(">".to_string()));
        assert_eq!(Part::parse("descendant").unwrap(), Part::Combinator(" ".to_string()));
        assert_eq!(
            Part::parse("combinator=||").unwrap(),
            Part::Combinator("||".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Part::parse("div").is_err());
        assert!(Part::parse("combinator=").is_err());

        let err = Part::parse("universal=*").unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "in `universal=*`: unknown selector fragment kind 'universal'"
        );
    }
}
