use crate::utils::error::{ShapeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts finite values strictly greater than zero.
pub fn validate_positive_dimension(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ShapeError::invalid_dimension(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }

    if value <= 0.0 {
        return Err(ShapeError::invalid_dimension(
            field_name,
            value,
            "Value must be greater than zero",
        ));
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ShapeError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(ShapeError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_dimension() {
        assert!(validate_positive_dimension("radius", 5.0).is_ok());
        assert!(validate_positive_dimension("radius", f64::MIN_POSITIVE).is_ok());
        assert!(validate_positive_dimension("radius", 0.0).is_err());
        assert!(validate_positive_dimension("radius", -0.0).is_err());
        assert!(validate_positive_dimension("radius", -3.5).is_err());
        assert!(validate_positive_dimension("radius", f64::NAN).is_err());
        assert!(validate_positive_dimension("radius", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_positive_dimension_names_field() {
        match validate_positive_dimension("width", 0.0) {
            Err(ShapeError::InvalidDimension { field, .. }) => assert_eq!(field, "width"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "shapes.toml").is_ok());
        assert!(validate_path("config", "  ").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }
}
