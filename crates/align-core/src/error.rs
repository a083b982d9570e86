use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("Unsupported measure kind: {0} (segment start and length must be length measures)")]
    UnsupportedMeasureKind(String),

    #[error("Unsupported point type: {0} (only cartesian points are supported)")]
    UnsupportedPointType(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Parameter {0} is outside every polyline sub-range")]
    OutOfRangeParameter(f64),

    #[error("Curve type not implemented: {0}")]
    UnsupportedCurveType(String),
}

pub type Result<T> = std::result::Result<T, AlignError>;
