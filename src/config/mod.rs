pub mod toml_config;

use crate::core::showcase::{DEFAULT_LENGTH, DEFAULT_RADIUS, DEFAULT_WIDTH};
use crate::core::DimensionsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_dimension, Validate};
#[cfg(feature = "cli")]
use crate::utils::validation::validate_path;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Resolved dimensions for one showcase run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDimensions {
    pub radius: f64,
    pub length: f64,
    pub width: f64,
}

impl Default for ShapeDimensions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            length: DEFAULT_LENGTH,
            width: DEFAULT_WIDTH,
        }
    }
}

impl DimensionsProvider for ShapeDimensions {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn width(&self) -> f64 {
        self.width
    }
}

impl Validate for ShapeDimensions {
    fn validate(&self) -> Result<()> {
        validate_positive_dimension("radius", self.radius)?;
        validate_positive_dimension("length", self.length)?;
        validate_positive_dimension("width", self.width)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "solid-shapes")]
#[command(about = "Area and perimeter of a circle and a rectangle, reported through shape capabilities")]
pub struct CliConfig {
    /// Circle radius (default 5)
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Rectangle length (default 10)
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<f64>,

    /// Rectangle width (default 4)
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Path to a TOML file with [circle] and [rectangle] tables
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Explicit flags win over whatever `base` carries.
    pub fn apply_overrides(&self, base: ShapeDimensions) -> ShapeDimensions {
        ShapeDimensions {
            radius: self.radius.unwrap_or(base.radius),
            length: self.length.unwrap_or(base.length),
            width: self.width.unwrap_or(base.width),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }

        for (field, value) in [
            ("radius", self.radius),
            ("length", self.length),
            ("width", self.width),
        ] {
            if let Some(value) = value {
                validate_positive_dimension(field, value)?;
            }
        }

        Ok(())
    }
}
