//! Specification engine: composable predicates and the filter that runs them.
//!
//! This crate provides:
//! - Specification trait and attribute specifications for products
//! - Composite AND / OR / NOT specifications and the `combine` factory
//! - A lazy, order-preserving `filter` plus a rayon-backed variant
//! - The legacy `ProductFilter`, for contrast
//!
//! ## Architecture
//! A filter pass is a single linear scan: every item is handed to
//! `Specification::is_satisfied` once and kept when the answer is `Ok(true)`.
//! New predicates plug in by implementing `Specification`; neither `filter`
//! nor `combine` changes.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, Color, Size};
//! use specification::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let large_blue = SizeSpecification::new(Size::Large)
//!     .and(ColorSpecification::new(Color::Blue));
//!
//! for product in filter(catalog.products(), &large_blue) {
//!     println!("{} is large and blue", product?.name);
//! }
//! ```

pub mod error;
pub mod traits;
pub mod specs;
pub mod composite;
pub mod filter;
pub mod legacy;

// Re-export main types
pub use error::{Result, SpecError};
pub use traits::{Filter, SharedSpec, Specification};
pub use composite::{
    all_of, any_of, combine, negate, CompositeSpecification, NotSpecification, Operator,
    SpecificationExt,
};
pub use filter::{filter, filter_parallel, BetterFilter, Filtered};
pub use legacy::ProductFilter;
pub use specs::{ColorSpecification, SizeSpecification};

/// Everything needed to build and run specifications.
pub mod prelude {
    pub use crate::composite::{all_of, any_of, combine, negate, Operator, SpecificationExt};
    pub use crate::filter::{filter, filter_parallel, BetterFilter};
    pub use crate::specs::{ColorSpecification, SizeSpecification};
    pub use crate::traits::{Filter, SharedSpec, Specification};
    pub use crate::error::{Result, SpecError};
}
