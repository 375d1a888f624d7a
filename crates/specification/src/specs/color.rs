//! Match products of a single color.

use crate::error::{Result, SpecError};
use crate::traits::Specification;
use catalog::{Color, Product};

/// Satisfied by products whose color equals the target color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Specification<Product> for ColorSpecification {
    fn name(&self) -> &str {
        "ColorSpecification"
    }

    fn is_satisfied(&self, item: &Product) -> Result<bool> {
        let color = item.color.ok_or_else(|| SpecError::MissingAttribute {
            item: item.name.clone(),
            attribute: "color",
        })?;
        Ok(color == self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Size;

    #[test]
    fn test_color_specification() {
        let green = ColorSpecification::new(Color::Green);

        assert!(green.is_satisfied(&Product::new("Apple", Color::Green, Size::Small)).unwrap());
        assert!(!green.is_satisfied(&Product::new("House", Color::Blue, Size::Large)).unwrap());
    }

    #[test]
    fn test_missing_color() {
        let ghost = Product {
            name: "Ghost".to_string(),
            color: None,
            size: Some(Size::Large),
        };

        let err = ColorSpecification::new(Color::Red).is_satisfied(&ghost).unwrap_err();
        assert_eq!(
            err,
            SpecError::MissingAttribute {
                item: "Ghost".to_string(),
                attribute: "color",
            }
        );
    }
}
