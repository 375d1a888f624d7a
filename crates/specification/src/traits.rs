//! Core traits for the specification engine.
//!
//! `Specification` is the predicate seam: new predicates implement it and
//! immediately work with every filter and combinator. `Filter` is the seam
//! for the scan itself.

use crate::error::Result;
use std::sync::Arc;

/// A predicate over items of type `T`.
///
/// ## Design Note
/// - `Send + Sync` lets one specification be shared across threads
/// - Implementations must be pure: the same item always yields the same answer
/// - Returning `Err` is reserved for items that cannot be judged at all
///   (e.g. a missing attribute), never for a plain mismatch
pub trait Specification<T>: Send + Sync {
    /// Returns the name of this specification (for logging/debugging)
    fn name(&self) -> &str;

    /// Decide whether `item` satisfies this specification.
    ///
    /// # Returns
    /// * `Ok(true)` / `Ok(false)` - The verdict
    /// * `Err` - If the item cannot be evaluated
    fn is_satisfied(&self, item: &T) -> Result<bool>;
}

/// A specification shared by reference, as held by composites.
pub type SharedSpec<T> = Arc<dyn Specification<T>>;

impl<T, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_satisfied(&self, item: &T) -> Result<bool> {
        (**self).is_satisfied(item)
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_satisfied(&self, item: &T) -> Result<bool> {
        (**self).is_satisfied(item)
    }
}

/// Core trait for scanning a collection with a specification.
///
/// Implementations yield matching items lazily and in input order.
/// Evaluation errors are yielded in place of the offending item.
pub trait Filter<T>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = Result<&'a T>> + 'a>
    where
        T: 'a;
}
