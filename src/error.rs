use image::ImageError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building, rendering or writing an icon
#[derive(Error, Debug)]
pub enum IconError {
    /// The requested canvas has no pixels
    #[error("Canvas must be at least 1x1 pixels (got {width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    /// The requested canvas would need more memory than the renderer allows
    #[error("Canvas of {size}x{size} pixels is too large (maximum is {max}x{max})")]
    CanvasTooLarge { size: u32, max: u32 },

    /// A color string could not be parsed as a CSS color
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The style file could not be read
    #[error("Failed to read style file {path}")]
    StyleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The style JSON is malformed or incomplete
    #[error("Invalid style definition: {0}")]
    StyleParse(#[from] serde_json::Error),

    /// The directory the icon should be written into does not exist
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    /// Writing the encoded icon failed
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG codec is not compiled into the image library
    #[error("PNG encoder is not available: {0}")]
    EncoderUnavailable(#[source] ImageError),

    /// PNG encoding failed for any other reason
    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] ImageError),
}

impl IconError {
    /// Sort an encoder error into "codec missing" and everything else.
    pub fn from_encoder(err: ImageError) -> Self {
        match err {
            ImageError::Unsupported(_) => IconError::EncoderUnavailable(err),
            other => IconError::Encode(other),
        }
    }

    /// True when the failure comes from a missing drawing/encoding dependency
    /// rather than from the environment or the input.
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, IconError::EncoderUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::error::{ImageFormatHint, LimitError, LimitErrorKind, UnsupportedError};

    #[test]
    fn test_unsupported_encoder_is_missing_dependency() {
        let err = ImageError::Unsupported(UnsupportedError::from(ImageFormatHint::Name(
            "png".to_string(),
        )));
        let icon_err = IconError::from_encoder(err);
        assert!(icon_err.is_missing_dependency());
        assert!(icon_err.to_string().contains("not available"));
    }

    #[test]
    fn test_other_encoder_errors_are_generic() {
        let err = ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError));
        let icon_err = IconError::from_encoder(err);
        assert!(!icon_err.is_missing_dependency());
        assert!(matches!(icon_err, IconError::Encode(_)));
    }

    #[test]
    fn test_too_large_message_names_limit() {
        let err = IconError::CanvasTooLarge { size: 100_000, max: 8192 };
        assert!(!err.is_missing_dependency());
        assert!(err.to_string().contains("maximum is 8192x8192"));
    }

    #[test]
    fn test_missing_dir_message_names_path() {
        let err = IconError::MissingOutputDir(PathBuf::from("no/such/dir"));
        assert!(!err.is_missing_dependency());
        assert_eq!(err.to_string(), "Output directory does not exist: no/such/dir");
    }
}
