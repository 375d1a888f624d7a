//! Parser for catalog text.
//!
//! Format: `name::color::size`, one product per line.
//! - An empty color or size field means the product lacks that attribute
//! - Blank lines and lines starting with `#` are skipped
//! - Color and size names are case-insensitive

use crate::error::{CatalogError, Result};
use crate::types::*;

const FIELD_COUNT: usize = 3;

/// Parse catalog text into products, preserving line order.
pub fn parse_products(text: &str) -> Result<Vec<Product>> {
    let mut products = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line_trimmed.split("::").map(str::trim).collect();
        if parts.len() != FIELD_COUNT {
            return Err(CatalogError::FieldCountMismatch {
                expected: FIELD_COUNT,
                found: parts.len(),
                line: line_no,
            });
        }

        let name = parts[0];
        if name.is_empty() {
            return Err(CatalogError::ParseError {
                line: line_no,
                reason: "Missing product name".to_string(),
            });
        }

        products.push(Product {
            name: name.to_string(),
            color: parse_optional(parts[1])?,
            size: parse_optional(parts[2])?,
        });
    }

    Ok(products)
}

/// Empty field -> `None`, anything else must parse.
fn parse_optional<T>(field: &str) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = CatalogError>,
{
    if field.is_empty() {
        Ok(None)
    } else {
        field.parse().map(Some)
    }
}
