//! Turning parsed parts into selectors.

use anyhow::{Context, Result, bail};
use selkit_common::warning::warn_once;
use selkit_selector::{Combinator, Selector, SelectorBuilder, combine};
use serde::Serialize;

use crate::parts::Part;

/// Compound selectors and the combinators between them.
#[derive(Debug, Serialize)]
pub struct Assembly {
    /// The combined selector text.
    pub selector: String,
    /// Each compound selector, as fragments.
    pub compounds: Vec<SelectorBuilder>,
    /// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`.
    pub combinators: Vec<String>,
}

/// Feed `parts` through the builder and combine the compounds left to right.
pub fn assemble(parts: &[Part]) -> Result<Assembly> {
    let mut compounds = Vec::new();
    let mut combinators = Vec::new();
    let mut current = SelectorBuilder::new();

    for (index, part) in parts.iter().enumerate() {
        match part {
            Part::Fragment(kind, value) => {
                let _ = current
                    .push(*kind, value.as_str())
                    .with_context(|| format!("cannot append {kind} `{value}` (part {})", index + 1))?;
            }
            Part::Combinator(token) => {
                if current.is_empty() {
                    bail!("combinator `{token}` (part {}) has no selector on its left", index + 1);
                }
                if Combinator::from_token(token).is_none() {
                    warn_once(
                        "cli",
                        &format!("non-standard combinator `{token}` is used verbatim"),
                    );
                }
                compounds.push(std::mem::take(&mut current));
                combinators.push(token.clone());
            }
        }
    }

    if current.is_empty() {
        match combinators.last() {
            Some(token) => bail!("combinator `{token}` has no selector on its right"),
            None => bail!("no selector parts given"),
        }
    }
    compounds.push(current);

    let selector = render(&compounds, &combinators);
    Ok(Assembly {
        selector,
        compounds,
        combinators,
    })
}

fn render(compounds: &[SelectorBuilder], combinators: &[String]) -> String {
    let Some((first, rest)) = compounds.split_first() else {
        return String::new();
    };

    let mut combined: Box<dyn Selector> = Box::new(first.clone());
    for (token, right) in combinators.iter().zip(rest) {
        combined = Box::new(combine(&*combined, token, right));
    }
    combined.stringify()
}
