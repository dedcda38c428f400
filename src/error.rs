//! Error types for raster access and filter operations.

use std::fmt;

/// Result type for raster and filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while building a raster or applying a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A coordinate lies outside the raster grid.
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A raster with a zero dimension was requested.
    InvalidDimensions { width: usize, height: usize },

    /// A value buffer does not hold exactly `width * height` intensities.
    ShapeMismatch { expected: usize, actual: usize },

    /// A filter parameter is outside its domain.
    InvalidParameter { parameter: String, message: String },
}

impl FilterError {
    pub(crate) fn invalid_parameter(parameter: &str, message: impl Into<String>) -> Self {
        FilterError::InvalidParameter {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Coordinate ({}, {}) is outside the {}x{} raster",
                x, y, width, height
            ),
            FilterError::InvalidDimensions { width, height } => {
                write!(f, "Invalid raster dimensions {}x{}", width, height)
            }
            FilterError::ShapeMismatch { expected, actual } => write!(
                f,
                "Expected {} intensity values, got {}",
                expected, actual
            ),
            FilterError::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
        }
    }
}

impl std::error::Error for FilterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_bounds() {
        let err = FilterError::OutOfBounds {
            x: 3,
            y: 1,
            width: 2,
            height: 2,
        };
        assert_eq!(err.to_string(), "Coordinate (3, 1) is outside the 2x2 raster");
    }

    #[test]
    fn test_display_invalid_parameter() {
        let err = FilterError::invalid_parameter("factor", "must be positive");
        assert_eq!(err.to_string(), "Invalid parameter 'factor': must be positive");
    }
}
