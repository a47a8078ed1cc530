use crate::core::{Result, Shape};
use std::io::{self, Write};

pub fn format_area<S: Shape + ?Sized>(shape: &S) -> String {
    format!("Area: {:.2}", shape.calculate_area())
}

pub fn write_area<W: Write, S: Shape + ?Sized>(out: &mut W, shape: &S) -> Result<()> {
    writeln!(out, "{}", format_area(shape))?;
    Ok(())
}

/// Prints `Area: <value>` for any area-capable shape.
pub fn print_area<S: Shape + ?Sized>(shape: &S) -> Result<()> {
    write_area(&mut io::stdout().lock(), shape)
}

/// Depends on the [`Shape`] abstraction only, never on a concrete variant.
#[derive(Debug, Clone)]
pub struct ShapeService<S: Shape> {
    shape: S,
}

impl<S: Shape> ShapeService<S> {
    pub fn new(shape: S) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    pub fn write_area<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Shape Area: {:.2}", self.shape.calculate_area())?;
        Ok(())
    }

    pub fn display_area(&self) -> Result<()> {
        self.write_area(&mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shapes::{CirclePerimeter, CircleShape, RectanglePerimeter, RectangleShape};
    use crate::core::{Circle, Rectangle};

    fn written<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_format_area_uses_two_decimals() {
        let rectangle = Rectangle::new(10.0, 4.0).unwrap();
        assert_eq!(format_area(&RectangleShape::new(&rectangle)), "Area: 40.00");
    }

    #[test]
    fn test_perimeter_variant_substitutes_for_shape() {
        let circle = Circle::new(5.0).unwrap();
        let rectangle = Rectangle::new(10.0, 4.0).unwrap();

        let area_only = written(|out| write_area(out, &CircleShape::new(&circle)));
        let with_perimeter = written(|out| write_area(out, &CirclePerimeter::new(&circle)));
        assert_eq!(area_only, "Area: 78.54\n");
        assert_eq!(area_only, with_perimeter);

        let area_only = written(|out| write_area(out, &RectangleShape::new(&rectangle)));
        let with_perimeter = written(|out| write_area(out, &RectanglePerimeter::new(&rectangle)));
        assert_eq!(area_only, with_perimeter);

        assert!(print_area(&CircleShape::new(&circle)).is_ok());
        assert!(print_area(&CirclePerimeter::new(&circle)).is_ok());
    }

    #[test]
    fn test_write_area_accepts_trait_objects() {
        let circle = Circle::new(1.0).unwrap();
        let rectangle = Rectangle::new(2.0, 3.0).unwrap();
        let shapes: Vec<Box<dyn Shape + '_>> = vec![
            Box::new(CircleShape::new(&circle)),
            Box::new(RectanglePerimeter::new(&rectangle)),
        ];

        let output = written(|out| {
            for shape in &shapes {
                write_area(out, &**shape)?;
            }
            Ok(())
        });
        assert_eq!(output, "Area: 3.14\nArea: 6.00\n");
    }

    #[test]
    fn test_shape_service_display() {
        let circle = Circle::new(5.0).unwrap();
        let service = ShapeService::new(CircleShape::new(&circle));

        let output = written(|out| service.write_area(out));
        assert_eq!(output, "Shape Area: 78.54\n");
        assert!(service.display_area().is_ok());
    }

    #[test]
    fn test_shape_service_over_boxed_shape() {
        let rectangle = Rectangle::new(10.0, 4.0).unwrap();
        let boxed: Box<dyn Shape + '_> = Box::new(RectangleShape::new(&rectangle));
        let service = ShapeService::new(boxed);

        let output = written(|out| service.write_area(out));
        assert_eq!(output, "Shape Area: 40.00\n");
    }
}
