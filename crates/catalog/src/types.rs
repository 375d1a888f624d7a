//! Core domain types for the product catalog.
//!
//! Products carry a name plus two queryable attributes. Both attributes are
//! optional: a catalog record may leave one out, and the specification engine
//! reports that as a missing attribute instead of guessing.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Attribute Enums
// =============================================================================

/// Product colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// Product sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl FromStr for Color {
    type Err = CatalogError;

    /// Case-insensitive: "green", "Green" and "GREEN" all parse.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A single catalog entry.
///
/// `color` and `size` are `None` when the source record omitted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Option<Color>,
    pub size: Option<Size>,
}

impl Product {
    /// Create a product with every attribute present.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color: Some(color),
            size: Some(size),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.color.map(|c| c.to_string());
        let size = self.size.map(|s| s.to_string());
        write!(
            f,
            "{} ({}, {})",
            self.name,
            color.as_deref().unwrap_or("?"),
            size.as_deref().unwrap_or("?")
        )
    }
}

// =============================================================================
// Catalog - ordered product list
// =============================================================================

/// An ordered collection of products.
///
/// Insertion order is preserved; filters rely on it to keep their output in
/// the same order as the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) products: Vec<Product>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// The three products used throughout the Open-Closed demo.
    pub fn demo() -> Self {
        let mut catalog = Self::new();
        catalog.insert(Product::new("Apple", Color::Green, Size::Small));
        catalog.insert(Product::new("Tree", Color::Green, Size::Large));
        catalog.insert(Product::new("House", Color::Blue, Size::Large));
        catalog
    }

    /// Append a product to the end of the catalog
    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    /// All products, in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
