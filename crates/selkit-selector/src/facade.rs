//! One entry point per fragment kind, plus [`combine`] and [`stringify`].
//!
//! Every function here is pure: each factory returns a fresh
//! [`SelectorBuilder`] and nothing is shared between calls.

use crate::builder::{Selector, SelectorBuilder};
use crate::kind::FragmentKind;

pub use crate::combine::combine;

/// A new builder starting with a type selector.
#[must_use]
pub fn element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::with_fragment(FragmentKind::Element, value)
}

/// A new builder starting with `#value`.
#[must_use]
pub fn id(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::with_fragment(FragmentKind::Id, value)
}

/// A new builder starting with `.value`.
#[must_use]
pub fn class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::with_fragment(FragmentKind::Class, value)
}

/// A new builder starting with `[value]`.
#[must_use]
pub fn attr(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::with_fragment(FragmentKind::Attribute, value)
}

/// A new builder starting with `:value`.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::with_fragment(FragmentKind::PseudoClass, value)
}

/// A new builder starting with `::value`.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::with_fragment(FragmentKind::PseudoElement, value)
}

/// The text of any selector.
#[must_use]
pub fn stringify<S: Selector + ?Sized>(selector: &S) -> String {
    selector.stringify()
}
