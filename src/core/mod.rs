pub mod report;
pub mod shapes;
pub mod showcase;

pub use crate::domain::model::{Circle, Rectangle, ShowcaseSummary};
pub use crate::domain::ports::{DimensionsProvider, Perimeter, Shape};
pub use crate::utils::error::Result;
