use thiserror::Error;

/// Failures of rectangle resolution and decoding.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid coordinate ({latitude}, {longitude}): latitude and longitude must be finite")]
    InvalidInput { latitude: f64, longitude: f64 },

    #[error("coordinate ({latitude}, {longitude}) is outside every statistical rectangle grid")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },

    #[error("invalid statistical rectangle label: {0:?}")]
    InvalidLabel(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("cannot read GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
}
