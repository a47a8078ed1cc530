use crate::core::report::{write_area, ShapeService};
use crate::core::shapes::{CirclePerimeter, CircleShape, RectanglePerimeter, RectangleShape};
use crate::core::{
    Circle, DimensionsProvider, Perimeter, Rectangle, Result, Shape, ShowcaseSummary,
};
use std::io::Write;

pub const DEFAULT_RADIUS: f64 = 5.0;
pub const DEFAULT_LENGTH: f64 = 10.0;
pub const DEFAULT_WIDTH: f64 = 4.0;

/// The dimensions used when nothing else is configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultDimensions;

impl DimensionsProvider for DefaultDimensions {
    fn radius(&self) -> f64 {
        DEFAULT_RADIUS
    }

    fn length(&self) -> f64 {
        DEFAULT_LENGTH
    }

    fn width(&self) -> f64 {
        DEFAULT_WIDTH
    }
}

/// Walks one circle and one rectangle through every capability and writes a line per step.
pub struct ShowcaseRunner<D: DimensionsProvider> {
    dimensions: D,
}

impl<D: DimensionsProvider> ShowcaseRunner<D> {
    pub fn new(dimensions: D) -> Self {
        Self { dimensions }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<ShowcaseSummary> {
        // Both shapes are built before anything is written.
        let circle = Circle::new(self.dimensions.radius())?;
        let rectangle = Rectangle::new(self.dimensions.length(), self.dimensions.width())?;
        tracing::debug!("Shapes constructed: {:?}, {:?}", circle, rectangle);

        tracing::info!("Reporting areas");
        let circle_shape = CircleShape::new(&circle);
        let rectangle_shape = RectangleShape::new(&rectangle);
        write_area(out, &circle_shape)?;
        write_area(out, &rectangle_shape)?;

        tracing::info!("Reporting perimeters");
        let circle_perimeter = CirclePerimeter::new(&circle);
        let rectangle_perimeter = RectanglePerimeter::new(&rectangle);
        writeln!(
            out,
            "Circle Perimeter: {:.2}",
            circle_perimeter.calculate_perimeter()
        )?;
        writeln!(
            out,
            "Rectangle Perimeter: {:.2}",
            rectangle_perimeter.calculate_perimeter()
        )?;

        tracing::info!("Reporting through shape service");
        let service = ShapeService::new(circle_shape);
        service.write_area(out)?;

        out.flush()?;

        Ok(ShowcaseSummary {
            circle_area: circle_perimeter.calculate_area(),
            rectangle_area: rectangle_perimeter.calculate_area(),
            circle_perimeter: circle_perimeter.calculate_perimeter(),
            rectangle_perimeter: rectangle_perimeter.calculate_perimeter(),
        })
    }

    pub fn run_to_stdout(&self) -> Result<ShowcaseSummary> {
        self.run(&mut std::io::stdout().lock())
    }
}
