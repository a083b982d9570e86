//! Schema-level points and planar placements.

use align_core::{AlignError, Result};
use align_math::{DVec2, Rotation2d};
use serde::{Deserialize, Serialize};

use crate::curve::Curve;

/// Point representations as they appear in the source schema.
///
/// Only the cartesian form resolves to coordinates; a point defined by a
/// distance along a basis curve is carried through but rejected wherever a
/// concrete location is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Point {
    Cartesian(DVec2),
    OnCurve { basis: Box<Curve>, parameter: f64 },
}

impl Point {
    pub fn type_name(&self) -> &'static str {
        match self {
            Point::Cartesian(_) => "CartesianPoint",
            Point::OnCurve { .. } => "PointOnCurve",
        }
    }

    /// Concrete coordinates, for the representations that have them.
    pub fn cartesian(&self) -> Result<DVec2> {
        match self {
            Point::Cartesian(p) => Ok(*p),
            other => Err(AlignError::UnsupportedPointType(
                other.type_name().to_string(),
            )),
        }
    }
}

/// Axis placement in the plane: a location plus an optional reference
/// direction for the local X axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement2d {
    pub location: Point,
    pub ref_direction: Option<DVec2>,
}

impl Placement2d {
    pub fn new(location: Point, ref_direction: Option<DVec2>) -> Self {
        Self {
            location,
            ref_direction,
        }
    }

    /// Placement at a cartesian location with the default axis direction.
    pub fn at(location: DVec2) -> Self {
        Self {
            location: Point::Cartesian(location),
            ref_direction: None,
        }
    }

    /// Rotation angle of the local X axis, 0 when no reference direction
    /// is given.
    pub fn angle(&self) -> f64 {
        self.ref_direction.map(Rotation2d::angle_of).unwrap_or(0.0)
    }

    /// Resolve to a concrete planar transform. Fails when the location is
    /// not a cartesian point.
    pub fn resolve(&self) -> Result<Rotation2d> {
        Ok(Rotation2d::new(self.location.cartesian()?, self.angle()))
    }
}
