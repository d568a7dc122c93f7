use raster_fx::FxError;
use thiserror::Error;

/// Error surface of the pixelscope library.
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG bit depth: {0:?}")]
    UnsupportedBitDepth(png::BitDepth),

    #[error("Unsupported PNG color type: {0:?}")]
    UnsupportedColorType(png::ColorType),

    #[error("Engine error: {0}")]
    Engine(#[from] FxError),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Preset file error: {0}")]
    PresetFile(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_preset_message() {
        let error = ScopeError::UnknownPreset("vaporwave".to_string());
        assert_eq!(error.to_string(), "Unknown preset: vaporwave");
    }

    #[test]
    fn test_engine_error_wraps() {
        let engine = raster_fx::EffectsError::ZeroBlockSize;
        let error: ScopeError = FxError::from(engine).into();
        assert_eq!(
            error.to_string(),
            "Engine error: effects error: block size must be at least 1"
        );
    }

    #[test]
    fn test_io_error_wraps() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let error: ScopeError = io.into();
        assert!(error.to_string().starts_with("IO error:"));
    }
}
