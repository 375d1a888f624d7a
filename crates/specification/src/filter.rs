//! Filter passes over a collection.
//!
//! [`filter`] is the single code path every specification goes through: it
//! knows nothing about colors, sizes or composites, only about
//! `Specification::is_satisfied`.

use crate::error::Result;
use crate::traits::{Filter, Specification};
use rayon::prelude::*;

/// Lazy iterator returned by [`filter`].
///
/// Each call to `next` advances through the input until it finds an item the
/// specification accepts. An evaluation error is yielded in place of the
/// item that caused it and the scan continues with the next item.
pub struct Filtered<'a, I, S: ?Sized> {
    items: I,
    spec: &'a S,
}

impl<'a, T, I, S> Iterator for Filtered<'a, I, S>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    type Item = Result<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.items.by_ref() {
            match self.spec.is_satisfied(item) {
                Ok(true) => return Some(Ok(item)),
                Ok(false) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

/// Lazily yield the items satisfying `spec`, in input order.
///
/// The input is only read. Collect into `Result<Vec<_>>` to stop at the first
/// error, or inspect each `Result` to skip bad items.
///
/// ## Example
/// ```ignore
/// let green = ColorSpecification::new(Color::Green);
/// let names: Vec<&str> = filter(catalog.products(), &green)
///     .map(|r| r.map(|p| p.name.as_str()))
///     .collect::<Result<_>>()?;
/// ```
pub fn filter<'a, T, I, S>(items: I, spec: &'a S) -> Filtered<'a, I::IntoIter, S>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    Filtered {
        items: items.into_iter(),
        spec,
    }
}

/// Evaluate `spec` over `items` on the rayon pool.
///
/// Specifications are immutable and `Sync`, so no locking is involved. The
/// output keeps input order. If several items fail, which error is returned
/// is unspecified.
pub fn filter_parallel<'a, T, S>(items: &'a [T], spec: &S) -> Result<Vec<&'a T>>
where
    T: Sync,
    S: Specification<T> + ?Sized,
{
    items
        .par_iter()
        .filter_map(|item| match spec.is_satisfied(item) {
            Ok(true) => Some(Ok(item)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}

/// The general-purpose filter: one method handles every specification,
/// including ones written after this type.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn name(&self) -> &str {
        "BetterFilter"
    }

    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = Result<&'a T>> + 'a>
    where
        T: 'a,
    {
        tracing::debug!(
            "Applying filter: {} with {} (input count: {})",
            Filter::<T>::name(self),
            spec.name(),
            items.len()
        );
        Box::new(filter(items, spec))
    }
}
