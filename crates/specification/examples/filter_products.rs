//! Example: filter the demo catalog with composed specifications
//!
//! Run with: cargo run --package specification --example filter_products

use catalog::{Catalog, Color, Size};
use specification::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("debug")
        .init();

    let catalog = Catalog::demo();
    let better = BetterFilter;

    let green = ColorSpecification::new(Color::Green);
    println!("Green products:");
    for product in better.filter(catalog.products(), &green) {
        println!(" - {} is green", product?.name);
    }

    let large = SizeSpecification::new(Size::Large).shared();
    let large_blue = combine(large.clone(), ColorSpecification::new(Color::Blue).shared(), Operator::And)?;
    println!("Large blue products:");
    for product in better.filter(catalog.products(), &*large_blue) {
        println!(" - {} is large and blue", product?.name);
    }

    let not_large = negate(large);
    println!("Products that are not large:");
    for product in better.filter(catalog.products(), &*not_large) {
        println!(" - {}", product?.name);
    }

    Ok(())
}
