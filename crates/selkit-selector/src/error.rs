//! Errors raised while building selectors.
//!
//! Both [`SelectorError`] variants indicate misuse of the builder by the
//! caller. Neither is retryable.

use thiserror::Error;

use crate::kind::FragmentKind;

/// Result alias for builder operations.
pub type SelectorResult<T> = Result<T, SelectorError>;

/// A fragment was rejected by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A second element, id or pseudo-element was appended.
    #[error("element, id and pseudo-element should not occur more than one time inside the selector")]
    DuplicateSingleton {
        /// The kind that was repeated.
        kind: FragmentKind,
    },

    /// A fragment ranked lower than the one before it was appended.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The most recently appended kind.
        previous: FragmentKind,
        /// The kind that was rejected.
        next: FragmentKind,
    },
}

impl SelectorError {
    /// The fragment kind whose append was rejected.
    #[must_use]
    pub const fn rejected_kind(&self) -> FragmentKind {
        match *self {
            Self::DuplicateSingleton { kind } => kind,
            Self::OrderViolation { next, .. } => next,
        }
    }
}

/// A fragment kind name that doesn't match any [`FragmentKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selector fragment kind '{0}'")]
pub struct UnknownFragmentKind(pub String);
