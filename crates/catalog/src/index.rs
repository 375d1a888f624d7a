//! Catalog building and loading.
//!
//! Turns catalog text (or a file holding it) into a [`Catalog`].

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::fs;
use std::path::Path;

impl Catalog {
    /// Build a catalog from text in the `name::color::size` format.
    pub fn parse(text: &str) -> Result<Self> {
        let products = parser::parse_products(text)?;
        tracing::debug!("Parsed {} products", products.len());
        Ok(Self { products })
    }

    /// Load a catalog file from disk.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let catalog = Self::parse(&text)?;

        let incomplete = catalog
            .products
            .iter()
            .filter(|p| p.color.is_none() || p.size.is_none())
            .count();
        if incomplete > 0 {
            tracing::warn!(
                "{} of {} products in {:?} are missing attributes",
                incomplete,
                catalog.len(),
                path
            );
        }
        tracing::info!("Loaded {} products from {:?}", catalog.len(), path);

        Ok(catalog)
    }
}
