//! The product filter as it looks before specifications exist.
//!
//! Every new criterion, or combination of criteria, needs another method
//! here, so the type is never closed for modification. It also treats a
//! missing attribute as a mismatch and silently drops the product.

use catalog::{Color, Product, Size};

/// Attribute-by-attribute product filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn filter_by_color<'a>(
        &self,
        products: &'a [Product],
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| p.color == Some(color))
    }

    pub fn filter_by_size<'a>(
        &self,
        products: &'a [Product],
        size: Size,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| p.size == Some(size))
    }

    pub fn filter_by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products
            .iter()
            .filter(move |p| p.size == Some(size) && p.color == Some(color))
    }
}
