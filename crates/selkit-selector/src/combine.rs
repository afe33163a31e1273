//! Joining finished selectors with combinators.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::builder::Selector;

/// The four combinators defined by Selectors Level 4.
///
/// [`combine`] takes any `AsRef<str>`, so these are a convenience rather
/// than a restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The token written between the two selectors.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Recognise a combinator token. `descendant` is accepted for the
    /// whitespace combinator since a bare space is awkward to type.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " | "descendant" => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.token()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The read-only result of [`combine`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombinedSelector {
    #[serde(rename = "selector")]
    text: String,
}

impl CombinedSelector {
    /// The combined selector text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }
}

impl Selector for CombinedSelector {
    fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join two selectors as `"<left> <combinator> <right>"`.
///
/// The combinator is padded with exactly one space on each side whatever
/// its content, so the descendant combinator yields three spaces. It is
/// not validated. Either side may itself be a [`CombinedSelector`], and
/// nesting composes left to right.
#[must_use]
pub fn combine<L, R>(left: &L, combinator: impl AsRef<str>, right: &R) -> CombinedSelector
where
    L: Selector + ?Sized,
    R: Selector + ?Sized,
{
    let (left, combinator, right) = (left.as_str(), combinator.as_ref(), right.as_str());
    let mut text = String::with_capacity(left.len() + combinator.len() + right.len() + 2);
    text.push_str(left);
    text.push(' ');
    text.push_str(combinator);
    text.push(' ');
    text.push_str(right);
    CombinedSelector { text }
}
