pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, ShapeDimensions};
pub use core::report::{format_area, print_area, write_area, ShapeService};
pub use core::shapes::{CirclePerimeter, CircleShape, RectanglePerimeter, RectangleShape};
pub use core::showcase::{DefaultDimensions, ShowcaseRunner};
pub use domain::model::{Circle, Rectangle, ShowcaseSummary};
pub use domain::ports::{DimensionsProvider, Perimeter, Shape};
pub use utils::error::{Result, ShapeError};
