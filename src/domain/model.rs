use crate::utils::error::Result;
use crate::utils::validation::validate_positive_dimension;

/// A circle described only by its radius. Holds data, computes nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        validate_positive_dimension("radius", radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Result<Self> {
        validate_positive_dimension("length", length)?;
        validate_positive_dimension("width", width)?;
        Ok(Self { length, width })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

/// The four measurements produced by one showcase run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseSummary {
    pub circle_area: f64,
    pub rectangle_area: f64,
    pub circle_perimeter: f64,
    pub rectangle_perimeter: f64,
}
