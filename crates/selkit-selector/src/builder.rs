//! The order-checked compound selector builder.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator."

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SelectorError, SelectorResult};
use crate::kind::FragmentKind;
use crate::validate::validate;

/// Anything that renders to selector text.
pub trait Selector {
    /// The rendered selector text.
    fn as_str(&self) -> &str;

    /// The rendered selector text, owned.
    fn stringify(&self) -> String {
        self.as_str().to_string()
    }
}

/// One typed piece of a selector together with its literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fragment {
    /// What kind of simple selector this is.
    pub kind: FragmentKind,
    /// The value without its punctuation (`main` for `#main`).
    pub value: String,
}

impl Fragment {
    /// Create a fragment.
    #[must_use]
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The fragment with its punctuation, e.g. `[href]` or `::before`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.kind.render_into(&self.value, &mut out);
        out
    }
}

/// Accumulates one compound selector, rejecting misordered or repeated
/// fragments as they are appended.
///
/// The fragment methods consume the builder and hand it back on success,
/// so a chain reads:
///
/// ```
/// use selkit_selector::element;
///
/// let selector = element("div").id("main")?.class("container")?;
/// assert_eq!(selector.stringify(), "div#main.container");
/// # Ok::<(), selkit_selector::SelectorError>(())
/// ```
///
/// [`push`](Self::push) does the same through `&mut self`, and leaves the
/// builder usable when a fragment is rejected.
///
/// Serializes as its list of fragments. Deserializing replays the list
/// through the same checks, so an invalid list is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Fragment>", into = "Vec<Fragment>")]
pub struct SelectorBuilder {
    text: String,
    applied: Vec<FragmentKind>,
    fragments: Vec<Fragment>,
}

impl SelectorBuilder {
    /// An empty builder. Stringifies to `""`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            applied: Vec::new(),
            fragments: Vec::new(),
        }
    }

    /// A builder holding a single fragment. A lone fragment is always valid.
    #[must_use]
    pub(crate) fn with_fragment(kind: FragmentKind, value: impl Into<String>) -> Self {
        let fragment = Fragment::new(kind, value);
        let mut text = String::new();
        kind.render_into(&fragment.value, &mut text);
        Self {
            text,
            applied: vec![kind],
            fragments: vec![fragment],
        }
    }

    /// Validate and append one fragment.
    ///
    /// On error nothing is appended.
    ///
    /// # Errors
    ///
    /// See [`validate`](crate::validate::validate).
    pub fn push(&mut self, kind: FragmentKind, value: impl Into<String>) -> SelectorResult<&mut Self> {
        validate(&self.applied, kind)?;

        let fragment = Fragment::new(kind, value);
        kind.render_into(&fragment.value, &mut self.text);
        self.applied.push(kind);
        self.fragments.push(fragment);
        Ok(self)
    }

    fn apply(mut self, kind: FragmentKind, value: impl Into<String>) -> SelectorResult<Self> {
        let _ = self.push(kind, value)?;
        Ok(self)
    }

    /// Append a type selector, verbatim.
    ///
    /// # Errors
    ///
    /// Fails if an element was already appended, or anything else was.
    ///
    /// The builder is consumed even on error. Use [`push`](Self::push) to keep
    /// building after a rejected fragment.
    pub fn element(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.apply(FragmentKind::Element, value)
    }

    /// Append `#value`.
    ///
    /// # Errors
    ///
    /// Fails on a second id, or after a class, attribute or pseudo.
    ///
    /// The builder is consumed even on error. Use [`push`](Self::push) to keep
    /// building after a rejected fragment.
    pub fn id(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.apply(FragmentKind::Id, value)
    }

    /// Append `.value`.
    ///
    /// # Errors
    ///
    /// Fails after an attribute or pseudo fragment.
    ///
    /// The builder is consumed even on error. Use [`push`](Self::push) to keep
    /// building after a rejected fragment.
    pub fn class(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.apply(FragmentKind::Class, value)
    }

    /// Append `[value]`. The value is not checked for attribute syntax.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-class or pseudo-element.
    ///
    /// The builder is consumed even on error. Use [`push`](Self::push) to keep
    /// building after a rejected fragment.
    pub fn attr(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.apply(FragmentKind::Attribute, value)
    }

    /// Append `:value`.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-element.
    ///
    /// The builder is consumed even on error. Use [`push`](Self::push) to keep
    /// building after a rejected fragment.
    pub fn pseudo_class(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.apply(FragmentKind::PseudoClass, value)
    }

    /// Append `::value`.
    ///
    /// # Errors
    ///
    /// Fails on a second pseudo-element.
    ///
    /// The builder is consumed even on error. Use [`push`](Self::push) to keep
    /// building after a rejected fragment.
    pub fn pseudo_element(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.apply(FragmentKind::PseudoElement, value)
    }

    /// The accumulated selector text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    /// Kinds appended so far, in order.
    #[must_use]
    pub fn kinds(&self) -> &[FragmentKind] {
        &self.applied
    }

    /// Fragments appended so far, in order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Whether no fragment has been appended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

impl Selector for SelectorBuilder {
    fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<Vec<Fragment>> for SelectorBuilder {
    type Error = SelectorError;

    fn try_from(fragments: Vec<Fragment>) -> Result<Self, Self::Error> {
        let mut builder = Self::new();
        for Fragment { kind, value } in fragments {
            let _ = builder.push(kind, value)?;
        }
        Ok(builder)
    }
}

impl From<SelectorBuilder> for Vec<Fragment> {
    fn from(builder: SelectorBuilder) -> Self {
        builder.fragments
    }
}
