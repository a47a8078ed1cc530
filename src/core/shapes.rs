use crate::core::{Circle, Perimeter, Rectangle, Shape};
use std::f64::consts::PI;

/// Area capability over a borrowed [`Circle`].
#[derive(Debug, Clone, Copy)]
pub struct CircleShape<'a> {
    circle: &'a Circle,
}

impl<'a> CircleShape<'a> {
    pub fn new(circle: &'a Circle) -> Self {
        Self { circle }
    }

    pub fn circle(&self) -> &'a Circle {
        self.circle
    }
}

impl Shape for CircleShape<'_> {
    fn calculate_area(&self) -> f64 {
        PI * self.circle.radius().powi(2)
    }
}

/// Area capability over a borrowed [`Rectangle`].
#[derive(Debug, Clone, Copy)]
pub struct RectangleShape<'a> {
    rectangle: &'a Rectangle,
}

impl<'a> RectangleShape<'a> {
    pub fn new(rectangle: &'a Rectangle) -> Self {
        Self { rectangle }
    }

    pub fn rectangle(&self) -> &'a Rectangle {
        self.rectangle
    }
}

impl Shape for RectangleShape<'_> {
    fn calculate_area(&self) -> f64 {
        self.rectangle.length() * self.rectangle.width()
    }
}

/// Wraps a [`CircleShape`] and adds the perimeter on top of its area.
#[derive(Debug, Clone, Copy)]
pub struct CirclePerimeter<'a> {
    shape: CircleShape<'a>,
}

impl<'a> CirclePerimeter<'a> {
    pub fn new(circle: &'a Circle) -> Self {
        Self {
            shape: CircleShape::new(circle),
        }
    }

    pub fn shape(&self) -> &CircleShape<'a> {
        &self.shape
    }
}

impl<'a> From<CircleShape<'a>> for CirclePerimeter<'a> {
    fn from(shape: CircleShape<'a>) -> Self {
        Self { shape }
    }
}

impl Shape for CirclePerimeter<'_> {
    fn calculate_area(&self) -> f64 {
        self.shape.calculate_area()
    }
}

impl Perimeter for CirclePerimeter<'_> {
    fn calculate_perimeter(&self) -> f64 {
        2.0 * PI * self.shape.circle().radius()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RectanglePerimeter<'a> {
    shape: RectangleShape<'a>,
}

impl<'a> RectanglePerimeter<'a> {
    pub fn new(rectangle: &'a Rectangle) -> Self {
        Self {
            shape: RectangleShape::new(rectangle),
        }
    }

    pub fn shape(&self) -> &RectangleShape<'a> {
        &self.shape
    }
}

impl<'a> From<RectangleShape<'a>> for RectanglePerimeter<'a> {
    fn from(shape: RectangleShape<'a>) -> Self {
        Self { shape }
    }
}

impl Shape for RectanglePerimeter<'_> {
    fn calculate_area(&self) -> f64 {
        self.shape.calculate_area()
    }
}

impl Perimeter for RectanglePerimeter<'_> {
    fn calculate_perimeter(&self) -> f64 {
        let rectangle = self.shape.rectangle();
        2.0 * (rectangle.length() + rectangle.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_circle_area() {
        for radius in [0.5, 1.0, 5.0, 123.25] {
            let circle = Circle::new(radius).unwrap();
            assert_close(CircleShape::new(&circle).calculate_area(), PI * radius * radius);
        }
    }

    #[test]
    fn test_circle_perimeter() {
        for radius in [0.5, 1.0, 5.0, 123.25] {
            let circle = Circle::new(radius).unwrap();
            assert_close(
                CirclePerimeter::new(&circle).calculate_perimeter(),
                2.0 * PI * radius,
            );
        }
    }

    #[test]
    fn test_rectangle_area_and_perimeter() {
        for (length, width) in [(10.0, 4.0), (1.5, 2.5), (0.1, 300.0)] {
            let rectangle = Rectangle::new(length, width).unwrap();
            assert_close(RectangleShape::new(&rectangle).calculate_area(), length * width);
            assert_close(
                RectanglePerimeter::new(&rectangle).calculate_perimeter(),
                2.0 * (length + width),
            );
        }
    }

    #[test]
    fn test_perimeter_variant_keeps_area() {
        let circle = Circle::new(5.0).unwrap();
        let rectangle = Rectangle::new(10.0, 4.0).unwrap();

        assert_eq!(
            CirclePerimeter::new(&circle).calculate_area(),
            CircleShape::new(&circle).calculate_area()
        );
        assert_eq!(
            RectanglePerimeter::from(RectangleShape::new(&rectangle)).calculate_area(),
            RectangleShape::new(&rectangle).calculate_area()
        );
    }

    #[test]
    fn test_known_values() {
        let circle = Circle::new(5.0).unwrap();
        let rectangle = Rectangle::new(10.0, 4.0).unwrap();

        assert_eq!(format!("{:.2}", CircleShape::new(&circle).calculate_area()), "78.54");
        assert_eq!(format!("{:.2}", CirclePerimeter::new(&circle).calculate_perimeter()), "31.42");
        assert_eq!(RectangleShape::new(&rectangle).calculate_area(), 40.0);
        assert_eq!(RectanglePerimeter::new(&rectangle).calculate_perimeter(), 28.0);
    }
}
