/// Area capability.
pub trait Shape {
    fn calculate_area(&self) -> f64;
}

/// Perimeter capability. Anything with a perimeter is also a [`Shape`].
pub trait Perimeter: Shape {
    fn calculate_perimeter(&self) -> f64;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn calculate_area(&self) -> f64 {
        (**self).calculate_area()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn calculate_area(&self) -> f64 {
        (**self).calculate_area()
    }
}

/// Source of the dimensions a showcase run measures.
pub trait DimensionsProvider {
    fn radius(&self) -> f64;
    fn length(&self) -> f64;
    fn width(&self) -> f64;
}
