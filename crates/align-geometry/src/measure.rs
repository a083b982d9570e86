//! Tagged measure values for segment start and extent.

use align_core::{AlignError, Result};
use serde::{Deserialize, Serialize};

/// A scalar tagged with the kind of quantity it measures.
///
/// Segment start/length accept only length measures: spirals have no
/// defined parametrization for angle or free parameter values, so the
/// other kinds are rejected before any shape is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measure {
    Length(f64),
    PlaneAngle(f64),
    Parameter(f64),
}

impl Measure {
    pub fn kind(&self) -> &'static str {
        match self {
            Measure::Length(_) => "LengthMeasure",
            Measure::PlaneAngle(_) => "PlaneAngleMeasure",
            Measure::Parameter(_) => "ParameterValue",
        }
    }

    fn as_length(&self) -> Result<f64> {
        match self {
            Measure::Length(v) => Ok(*v),
            other => Err(AlignError::UnsupportedMeasureKind(other.kind().to_string())),
        }
    }
}

/// Validate the segment's start/length measures and scale both into
/// internal units.
pub fn normalized_range(start: Measure, length: Measure, length_unit: f64) -> Result<(f64, f64)> {
    let start = start.as_length()?;
    let length = length.as_length()?;
    Ok((start * length_unit, length * length_unit))
}
