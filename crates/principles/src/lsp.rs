//! Liskov Substitution: a square is not a drop-in rectangle.
//!
//! Both types implement [`Shape`], but `Square` couples its sides, so code
//! that sets one side and expects the other to stay put gets the wrong area.

use std::fmt;

/// A shape with independently settable sides, as callers assume.
pub trait Shape {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, value: u32);
    fn set_height(&mut self, value: u32);

    /// Widened to `u64` so any pair of `u32` sides fits.
    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, value: u32) {
        self.width = value;
    }

    fn set_height(&mut self, value: u32) {
        self.height = value;
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, Height: {}", self.width, self.height)
    }
}

/// Setting either side sets both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }

    fn set_width(&mut self, value: u32) {
        self.side = value;
    }

    fn set_height(&mut self, value: u32) {
        self.side = value;
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, Height: {}", self.side, self.side)
    }
}

/// What `use_it` expected versus what the shape reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaCheck {
    pub expected: u64,
    pub actual: u64,
}

impl AreaCheck {
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

/// Set the height to 10 and check the area against `width * 10`.
pub fn use_it(shape: &mut dyn Shape) -> AreaCheck {
    let w = shape.width();
    shape.set_height(10);
    let check = AreaCheck {
        expected: u64::from(w) * 10,
        actual: shape.area(),
    };
    if !check.holds() {
        tracing::warn!(
            "Expected area {} but got {}",
            check.expected,
            check.actual
        );
    }
    check
}
