//! Combining specifications with boolean operators.
//!
//! Composites hold their children behind `Arc`, so one specification can sit
//! inside any number of composites without being copied or mutated. Because
//! a composite is itself a `Specification`, nesting goes to any depth.
//!
//! ## Example Usage
//! ```ignore
//! use specification::prelude::*;
//!
//! let large_blue = combine(
//!     SizeSpecification::new(Size::Large).shared(),
//!     ColorSpecification::new(Color::Blue).shared(),
//!     Operator::And,
//! )?;
//!
//! // Or, with the extension methods:
//! let green_or_small = ColorSpecification::new(Color::Green)
//!     .or(SizeSpecification::new(Size::Small));
//! ```

use crate::error::{Result, SpecError};
use crate::traits::{SharedSpec, Specification};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Boolean combinators understood by [`combine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    /// Unary; only accepted by [`negate`]
    Not,
}

impl FromStr for Operator {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" | "&" | "&&" => Ok(Operator::And),
            "or" | "|" | "||" => Ok(Operator::Or),
            "not" | "!" => Ok(Operator::Not),
            other => Err(SpecError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Composite (n-ary AND / OR)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Junction {
    All,
    Any,
}

/// A specification built from two or more children.
///
/// AND stops at the first child that is not satisfied, OR at the first one
/// that is. Children are evaluated left to right and an error from any
/// evaluated child is returned immediately.
pub struct CompositeSpecification<T> {
    junction: Junction,
    children: Vec<SharedSpec<T>>,
}

impl<T> CompositeSpecification<T> {
    fn build(junction: Junction, children: Vec<SharedSpec<T>>) -> Result<Self> {
        if children.len() < 2 {
            return Err(SpecError::InvalidOperator(format!(
                "{} needs at least two specifications, got {}",
                match junction {
                    Junction::All => "and",
                    Junction::Any => "or",
                },
                children.len()
            )));
        }
        Ok(Self { junction, children })
    }

    /// The operator joining the children
    pub fn operator(&self) -> Operator {
        match self.junction {
            Junction::All => Operator::And,
            Junction::Any => Operator::Or,
        }
    }

    pub fn children(&self) -> &[SharedSpec<T>] {
        &self.children
    }
}

impl<T> Clone for CompositeSpecification<T> {
    fn clone(&self) -> Self {
        Self {
            junction: self.junction,
            children: self.children.clone(),
        }
    }
}

impl<T> fmt::Debug for CompositeSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.children.iter().map(|c| c.name()).collect();
        f.debug_struct("CompositeSpecification")
            .field("operator", &self.operator())
            .field("children", &names)
            .finish()
    }
}

impl<T> Specification<T> for CompositeSpecification<T> {
    fn name(&self) -> &str {
        match self.junction {
            Junction::All => "AndSpecification",
            Junction::Any => "OrSpecification",
        }
    }

    fn is_satisfied(&self, item: &T) -> Result<bool> {
        match self.junction {
            Junction::All => {
                for child in &self.children {
                    if !child.is_satisfied(item)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Junction::Any => {
                for child in &self.children {
                    if child.is_satisfied(item)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

// =============================================================================
// Negation
// =============================================================================

/// Inverts the verdict of its child. Errors pass through unchanged.
pub struct NotSpecification<T> {
    inner: SharedSpec<T>,
}

impl<T> NotSpecification<T> {
    pub fn new(inner: SharedSpec<T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for NotSpecification<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Specification<T> for NotSpecification<T> {
    fn name(&self) -> &str {
        "NotSpecification"
    }

    fn is_satisfied(&self, item: &T) -> Result<bool> {
        Ok(!self.inner.is_satisfied(item)?)
    }
}

// =============================================================================
// Factories
// =============================================================================

/// Combine two specifications with a binary operator.
///
/// Neither operand is modified; the result shares them.
///
/// # Errors
/// `SpecError::InvalidOperator` for `Operator::Not`, which takes one operand.
pub fn combine<T: 'static>(
    left: SharedSpec<T>,
    right: SharedSpec<T>,
    operator: Operator,
) -> Result<SharedSpec<T>> {
    let junction = match operator {
        Operator::And => Junction::All,
        Operator::Or => Junction::Any,
        Operator::Not => {
            return Err(SpecError::InvalidOperator(
                "not takes a single specification; use negate".to_string(),
            ));
        }
    };
    tracing::trace!("Combining {} {} {}", left.name(), operator, right.name());
    Ok(Arc::new(CompositeSpecification::build(
        junction,
        vec![left, right],
    )?))
}

/// Conjunction of two or more specifications.
pub fn all_of<T: 'static>(specs: Vec<SharedSpec<T>>) -> Result<SharedSpec<T>> {
    Ok(Arc::new(CompositeSpecification::build(Junction::All, specs)?))
}

/// Disjunction of two or more specifications.
pub fn any_of<T: 'static>(specs: Vec<SharedSpec<T>>) -> Result<SharedSpec<T>> {
    Ok(Arc::new(CompositeSpecification::build(Junction::Any, specs)?))
}

/// Logical NOT of a specification.
pub fn negate<T: 'static>(spec: SharedSpec<T>) -> SharedSpec<T> {
    Arc::new(NotSpecification::new(spec))
}

// =============================================================================
// Extension methods
// =============================================================================

/// Chainable combinators available on every specification.
///
/// Binary composition through these methods cannot fail, so they return the
/// concrete composite rather than a `Result`.
pub trait SpecificationExt<T>: Specification<T> + Sized + 'static {
    /// Move this specification behind an `Arc`
    fn shared(self) -> SharedSpec<T> {
        Arc::new(self)
    }

    fn and<S: Specification<T> + 'static>(self, other: S) -> CompositeSpecification<T> {
        CompositeSpecification {
            junction: Junction::All,
            children: vec![self.shared(), Arc::new(other)],
        }
    }

    fn or<S: Specification<T> + 'static>(self, other: S) -> CompositeSpecification<T> {
        CompositeSpecification {
            junction: Junction::Any,
            children: vec![self.shared(), Arc::new(other)],
        }
    }

    fn not(self) -> NotSpecification<T> {
        NotSpecification::new(self.shared())
    }
}

impl<T, S: Specification<T> + 'static> SpecificationExt<T> for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{ColorSpecification, SizeSpecification};
    use catalog::{Color, Product, Size};

    fn products() -> Vec<Product> {
        vec![
            Product::new("Apple", Color::Green, Size::Small),
            Product::new("Tree", Color::Green, Size::Large),
            Product::new("House", Color::Blue, Size::Large),
            Product::new("Ruby", Color::Red, Size::Medium),
        ]
    }

    /// Counts evaluations so short-circuiting is observable.
    struct Counting {
        verdict: bool,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl Specification<Product> for Counting {
        fn name(&self) -> &str {
            "Counting"
        }

        fn is_satisfied(&self, _item: &Product) -> Result<bool> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(self.verdict)
        }
    }

    #[test]
    fn test_and_matches_conjunction() {
        let large: SharedSpec<Product> = SizeSpecification::new(Size::Large).shared();
        let blue: SharedSpec<Product> = ColorSpecification::new(Color::Blue).shared();
        let both = combine(large.clone(), blue.clone(), Operator::And).unwrap();

        for p in &products() {
            let expected = large.is_satisfied(p).unwrap() && blue.is_satisfied(p).unwrap();
            assert_eq!(both.is_satisfied(p).unwrap(), expected, "{}", p.name);
        }
    }

    #[test]
    fn test_or_matches_disjunction() {
        let small: SharedSpec<Product> = SizeSpecification::new(Size::Small).shared();
        let blue: SharedSpec<Product> = ColorSpecification::new(Color::Blue).shared();
        let either = combine(small.clone(), blue.clone(), Operator::Or).unwrap();

        for p in &products() {
            let expected = small.is_satisfied(p).unwrap() || blue.is_satisfied(p).unwrap();
            assert_eq!(either.is_satisfied(p).unwrap(), expected, "{}", p.name);
        }
    }

    #[test]
    fn test_and_is_associative() {
        let s1: SharedSpec<Product> = ColorSpecification::new(Color::Green).shared();
        let s2: SharedSpec<Product> = SizeSpecification::new(Size::Large).shared();
        let s3: SharedSpec<Product> = negate(ColorSpecification::new(Color::Red).shared());

        let left = combine(
            combine(s1.clone(), s2.clone(), Operator::And).unwrap(),
            s3.clone(),
            Operator::And,
        )
        .unwrap();
        let right = combine(s1, combine(s2, s3, Operator::And).unwrap(), Operator::And).unwrap();

        for p in &products() {
            assert_eq!(left.is_satisfied(p).unwrap(), right.is_satisfied(p).unwrap());
        }
    }

    #[test]
    fn test_not_operator_rejected_by_combine() {
        let a: SharedSpec<Product> = ColorSpecification::new(Color::Green).shared();
        let b: SharedSpec<Product> = SizeSpecification::new(Size::Large).shared();

        let err = combine(a, b, Operator::Not).err().unwrap();
        assert!(matches!(err, SpecError::InvalidOperator(_)));
    }

    #[test]
    fn test_unknown_operator_text() {
        assert_eq!("AND".parse::<Operator>().unwrap(), Operator::And);
        assert_eq!("||".parse::<Operator>().unwrap(), Operator::Or);
        assert_eq!(
            "xor".parse::<Operator>().unwrap_err(),
            SpecError::InvalidOperator("xor".to_string())
        );
    }

    #[test]
    fn test_all_of_requires_two_children() {
        let only: SharedSpec<Product> = ColorSpecification::new(Color::Green).shared();
        assert!(all_of(vec![only]).is_err());
        assert!(any_of::<Product>(vec![]).is_err());
    }

    #[test]
    fn test_any_of_three() {
        let spec = any_of(vec![
            ColorSpecification::new(Color::Red).shared(),
            SizeSpecification::new(Size::Small).shared(),
            ColorSpecification::new(Color::Blue).shared(),
        ])
        .unwrap();

        let matched: Vec<bool> = products()
            .iter()
            .map(|p| spec.is_satisfied(p).unwrap())
            .collect();
        assert_eq!(matched, vec![true, false, true, true]);
    }

    #[test]
    fn test_and_short_circuits() {
        let first = Arc::new(Counting {
            verdict: false,
            calls: Default::default(),
        });
        let second = Arc::new(Counting {
            verdict: true,
            calls: Default::default(),
        });

        let spec = combine::<Product>(first.clone(), second.clone(), Operator::And).unwrap();
        assert!(!spec.is_satisfied(&products()[0]).unwrap());
        assert_eq!(first.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(second.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[test]
    fn test_error_propagates_from_evaluated_child() {
        let ghost = Product {
            name: "Ghost".to_string(),
            color: None,
            size: Some(Size::Large),
        };

        let large_green = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Green));
        assert!(matches!(
            large_green.is_satisfied(&ghost),
            Err(SpecError::MissingAttribute { attribute: "color", .. })
        ));

        // The size check fails first, so color is never consulted
        let small_green = SizeSpecification::new(Size::Small).and(ColorSpecification::new(Color::Green));
        assert!(!small_green.is_satisfied(&ghost).unwrap());
    }

    #[test]
    fn test_extension_methods_nest() {
        let spec = ColorSpecification::new(Color::Green)
            .and(SizeSpecification::new(Size::Small).not())
            .or(ColorSpecification::new(Color::Red));

        let matched: Vec<bool> = products()
            .iter()
            .map(|p| spec.is_satisfied(p).unwrap())
            .collect();
        assert_eq!(matched, vec![false, true, false, true]);
        assert_eq!(spec.operator(), Operator::Or);
        assert_eq!(spec.children().len(), 2);
    }

    #[test]
    fn test_or_short_circuits() {
        let first = Arc::new(Counting {
            verdict: true,
            calls: Default::default(),
        });
        let second = Arc::new(Counting {
            verdict: false,
            calls: Default::default(),
        });

        let spec = combine::<Product>(first.clone(), second.clone(), Operator::Or).unwrap();
        assert!(spec.is_satisfied(&products()[0]).unwrap());
        assert_eq!(first.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(second.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[test]
    fn test_or_error_depends_on_evaluation_order() {
        let no_size = Product {
            name: "Blob".to_string(),
            color: Some(Color::Green),
            size: None,
        };

        // Color answers first, so size is never consulted
        let green_or_large = ColorSpecification::new(Color::Green).or(SizeSpecification::new(Size::Large));
        assert!(green_or_large.is_satisfied(&no_size).unwrap());

        let large_or_green = SizeSpecification::new(Size::Large).or(ColorSpecification::new(Color::Green));
        assert_eq!(
            large_or_green.is_satisfied(&no_size),
            Err(SpecError::MissingAttribute {
                item: "Blob".to_string(),
                attribute: "size",
            })
        );
    }

    #[test]
    fn test_not_passes_errors_through() {
        let ghost = Product {
            name: "Ghost".to_string(),
            color: None,
            size: Some(Size::Small),
        };

        let not_red = negate(ColorSpecification::new(Color::Red).shared());
        assert_eq!(
            not_red.is_satisfied(&ghost),
            Err(SpecError::MissingAttribute {
                item: "Ghost".to_string(),
                attribute: "color",
            })
        );

        let not_large = SizeSpecification::new(Size::Large).not();
        assert!(not_large.is_satisfied(&ghost).unwrap());
    }
}
