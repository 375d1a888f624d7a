//! Attribute specifications over catalog products.
//!
//! Each specification compares one product attribute against a value fixed
//! at construction. Products lacking the attribute are reported as
//! `SpecError::MissingAttribute`.

pub mod color;
pub mod size;

// Re-export for convenience
pub use color::ColorSpecification;
pub use size::SizeSpecification;
