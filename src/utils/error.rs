use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("Invalid dimension '{field}' = {value}: {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("TOML parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShapeError {
    pub fn invalid_dimension(field: &str, value: f64, reason: &str) -> Self {
        ShapeError::InvalidDimension {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ShapeError::InvalidDimension { .. } => ErrorCategory::Validation,
            ShapeError::ConfigError { .. } | ShapeError::ConfigParseError(_) => {
                ErrorCategory::Configuration
            }
            ShapeError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error when it reaches the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Io => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShapeError::InvalidDimension { field, value, .. } => {
                format!("The {} must be a positive number, got {}", field, value)
            }
            ShapeError::ConfigError { message } => {
                format!("Could not use the configuration: {}", message)
            }
            ShapeError::ConfigParseError(_) => {
                "The configuration file is not valid TOML".to_string()
            }
            ShapeError::IoError(e) => format!("Could not write output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => {
                "Pass finite values greater than zero for radius, length and width"
            }
            ErrorCategory::Configuration => {
                "Check that the config file exists and has [circle] and [rectangle] tables"
            }
            ErrorCategory::Io => "Check that standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
