//! Match products of a single size.

use crate::error::{Result, SpecError};
use crate::traits::Specification;
use catalog::{Product, Size};

/// Satisfied by products whose size equals the target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Specification<Product> for SizeSpecification {
    fn name(&self) -> &str {
        "SizeSpecification"
    }

    fn is_satisfied(&self, item: &Product) -> Result<bool> {
        match item.size {
            Some(size) => Ok(size == self.size),
            None => Err(SpecError::MissingAttribute {
                item: item.name.clone(),
                attribute: "size",
            }),
        }
    }
}
