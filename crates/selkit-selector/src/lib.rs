//! Typed, order-checked construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - Ordering: element, id, class, attribute, pseudo-class, pseudo-element
//!   - At most one element, id and pseudo-element per selector
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling, or any custom token
//!
//! # Not Implemented
//!
//! - Parsing selector strings
//! - Matching against a document
//! - Checking the syntax of fragment values
//! - Specificity
//!
//! # Example
//!
//! ```
//! use selkit_selector::{combine, element};
//!
//! let table = element("table").id("data")?;
//! let row = element("tr");
//! assert_eq!(combine(&table, "~", &row).stringify(), "table#data ~ tr");
//! # Ok::<(), selkit_selector::SelectorError>(())
//! ```

/// The compound selector builder.
pub mod builder;
/// Combinators and combined selectors per [§ 16](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combine;
/// Builder errors.
pub mod error;
/// Free-function entry points.
pub mod facade;
/// Fragment kinds, ranks and rendering.
pub mod kind;
/// Ordering and uniqueness checks.
pub mod validate;

// Re-exports for convenience
pub use builder::{Fragment, Selector, SelectorBuilder};
pub use combine::{CombinedSelector, Combinator};
pub use error::{SelectorError, SelectorResult, UnknownFragmentKind};
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element, stringify};
pub use kind::FragmentKind;
pub use validate::{validate, validate_sequence};
