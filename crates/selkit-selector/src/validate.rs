//! Ordering and uniqueness checks for fragment sequences.

use crate::error::{SelectorError, SelectorResult};
use crate::kind::FragmentKind;

/// Check whether `next` may be appended after the kinds in `applied`.
///
/// 1. A singleton kind already present in `applied` is rejected with
///    [`SelectorError::DuplicateSingleton`]. This runs before the order check.
/// 2. If the last applied kind ranks higher than `next`, it is rejected with
///    [`SelectorError::OrderViolation`].
///
/// Only the immediately preceding kind is compared. Since every accepted
/// append keeps ranks non-decreasing, that is the same as comparing
/// against the highest rank seen so far.
///
/// # Errors
///
/// Returns the first rule `next` breaks, if any.
pub fn validate(applied: &[FragmentKind], next: FragmentKind) -> SelectorResult<()> {
    if next.is_singleton() && applied.contains(&next) {
        return Err(SelectorError::DuplicateSingleton { kind: next });
    }

    match applied.last() {
        Some(&previous) if previous.rank() > next.rank() => {
            Err(SelectorError::OrderViolation { previous, next })
        }
        _ => Ok(()),
    }
}

/// Check a whole sequence of kinds, as if appended one at a time.
///
/// # Errors
///
/// Returns the error for the first kind that would be rejected.
pub fn validate_sequence(kinds: &[FragmentKind]) -> SelectorResult<()> {
    for (i, &kind) in kinds.iter().enumerate() {
        validate(&kinds[..i], kind)?;
    }
    Ok(())
}
