// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the overlay library.
//!
//! The overlay computations themselves never fail: malformed-but-typed input
//! degrades to an empty overlay. Errors only surface at the validation
//! boundary (keypoint shape, color strings, configuration) and in the CLI.

use std::fmt;

/// Result type alias for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;

/// Main error type for the overlay library.
#[derive(Debug)]
pub enum OverlayError {
    /// Keypoint data does not have the expected `(x, y, confidence)` shape.
    InvalidKeypoints(String),
    /// Color string is not a `#rgb` or `#rrggbb` hex color.
    InvalidColor(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// Error parsing JSON input.
    ParseError(String),
    /// Error reading image dimensions.
    ImageError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeypoints(msg) => write!(f, "Invalid keypoints: {msg}"),
            Self::InvalidColor(msg) => write!(f, "Invalid color: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

#[cfg(feature = "image")]
impl From<image::ImageError> for OverlayError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OverlayError::InvalidKeypoints("test".to_string());
        assert_eq!(err.to_string(), "Invalid keypoints: test");

        let err = OverlayError::ConfigError("test".to_string());
        assert_eq!(err.to_string(), "Config error: test");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = OverlayError::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(OverlayError::InvalidColor("x".into()).source().is_none());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<f64>>("not json").unwrap_err();
        let err = OverlayError::from(json_err);
        assert!(matches!(err, OverlayError::ParseError(_)));
    }
}
