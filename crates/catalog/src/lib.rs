//! # Catalog Crate
//!
//! The item model filtered by the specification engine.
//!
//! ## Main Components
//!
//! - **types**: `Product`, its `Color` and `Size` attributes, and `Catalog`
//! - **parser**: Parse `name::color::size` lines into products
//! - **index**: Build a `Catalog` from text or a file
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("products.txt"))?;
//! for product in catalog.products() {
//!     println!("{}", product);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Color, Product, Size};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_demo_catalog_order() {
        let catalog = Catalog::demo();
        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Tree", "House"]);
    }

    #[test]
    fn test_parse_attributes() {
        assert_eq!("GREEN".parse::<Color>().unwrap(), Color::Green);
        assert_eq!(" medium ".parse::<Size>().unwrap(), Size::Medium);
        assert!("huge".parse::<Size>().is_err());
    }

    #[test]
    fn test_product_display() {
        let apple = Product::new("Apple", Color::Green, Size::Small);
        assert_eq!(apple.to_string(), "Apple (green, small)");

        let ghost = Product {
            name: "Ghost".to_string(),
            color: None,
            size: Some(Size::Large),
        };
        assert_eq!(ghost.to_string(), "Ghost (?, large)");
    }
}
