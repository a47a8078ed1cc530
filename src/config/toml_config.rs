use crate::config::ShapeDimensions;
use crate::core::showcase::{DEFAULT_LENGTH, DEFAULT_RADIUS, DEFAULT_WIDTH};
use crate::utils::error::{Result, ShapeError};
use crate::utils::validation::{validate_positive_dimension, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").unwrap_or_else(|e| panic!("invalid env var pattern: {}", e))
});

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub circle: Option<CircleConfig>,
    pub rectangle: Option<RectangleConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleConfig {
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleConfig {
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ShapeError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${SHAPE_RADIUS})
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn dimensions(&self) -> ShapeDimensions {
        ShapeDimensions {
            radius: self.circle.as_ref().map_or(DEFAULT_RADIUS, |c| c.radius),
            length: self.rectangle.as_ref().map_or(DEFAULT_LENGTH, |r| r.length),
            width: self.rectangle.as_ref().map_or(DEFAULT_WIDTH, |r| r.width),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(circle) = &self.circle {
            validate_positive_dimension("circle.radius", circle.radius)?;
        }

        if let Some(rectangle) = &self.rectangle {
            validate_positive_dimension("rectangle.length", rectangle.length)?;
            validate_positive_dimension("rectangle.width", rectangle.width)?;
        }

        if let Some(level) = self.log_level() {
            if !VALID_LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ShapeError::ConfigError {
                    message: format!(
                        "unsupported logging.level '{}'. Valid levels: {}",
                        level,
                        VALID_LOG_LEVELS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}
