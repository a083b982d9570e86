//! Segment parametrization: a sub-range of a parent curve.

use align_core::{AlignError, Result};
use align_math::DVec3;
use serde::{Deserialize, Serialize};

#[cfg(feature = "clothoid")]
use crate::curve::ClothoidEval;
use crate::curve::{CircleEval, Curve, LineEval, PolylineEval};
use crate::measure::{normalized_range, Measure};
use crate::placement::Placement2d;

/// A curve-segment description as supplied by the caller: a sub-range of a
/// parent curve, placed in the segment's own frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveSegment {
    pub placement: Placement2d,
    pub segment_start: Measure,
    pub segment_length: Measure,
    pub parent_curve: Curve,
}

/// Local-frame evaluator, one per supported parent-curve variant.
#[derive(Debug, Clone)]
enum ShapeEval {
    Line(LineEval),
    Circle(CircleEval),
    #[cfg(feature = "clothoid")]
    Clothoid(ClothoidEval),
    Polyline(PolylineEval),
}

/// A ready-to-sample parametrization of one curve segment.
///
/// Construction validates the measures, resolves the parent curve against
/// the supported variants, and builds the matching evaluator; there is no
/// partially-initialized state to observe.
#[derive(Debug, Clone)]
pub struct SegmentParametrization {
    eval: ShapeEval,
    start: f64,
    length: f64,
    length_unit: f64,
}

impl SegmentParametrization {
    /// Build the parametrization for `segment`, with measure values scaled
    /// by `length_unit`.
    ///
    /// The measure guard runs first: both start and length must be length
    /// measures before any shape is resolved.
    pub fn new(segment: &CurveSegment, length_unit: f64) -> Result<Self> {
        let (start, length) = normalized_range(
            segment.segment_start,
            segment.segment_length,
            length_unit,
        )?;

        let eval = match &segment.parent_curve {
            Curve::Line(line) => ShapeEval::Line(LineEval::new(line)?),
            Curve::Circle(circle) => ShapeEval::Circle(CircleEval::new(circle)?),
            #[cfg(feature = "clothoid")]
            Curve::Clothoid(clothoid) => {
                ShapeEval::Clothoid(ClothoidEval::new(clothoid, start, length)?)
            }
            Curve::Polyline(polyline) => ShapeEval::Polyline(PolylineEval::new(polyline)?),
            other => {
                return Err(AlignError::UnsupportedCurveType(
                    other.type_name().to_string(),
                ))
            }
        };

        Ok(Self {
            eval,
            start,
            length,
            length_unit,
        })
    }

    /// Evaluate the local-frame point at segment parameter `u`.
    ///
    /// `u` is offset by the segment start and scaled into the parent
    /// curve's units before delegation.
    pub fn evaluate(&self, u: f64) -> Result<DVec3> {
        let t = (u + self.start) * self.length_unit;
        match &self.eval {
            ShapeEval::Line(eval) => Ok(eval.point_at(t)),
            ShapeEval::Circle(eval) => Ok(eval.point_at(t)),
            #[cfg(feature = "clothoid")]
            ShapeEval::Clothoid(eval) => Ok(eval.point_at(t)),
            ShapeEval::Polyline(eval) => eval.point_at(t),
        }
    }

    /// Signed total length of the segment, in normalized units.
    pub fn length(&self) -> f64 {
        self.length
    }
}
