//! Fixed-resolution sampling of segment parametrizations.

use align_core::tolerance::ZERO_LENGTH_TOLERANCE;
use align_core::Result;
use align_math::{Point3, Rotation2d};

use crate::segment::{CurveSegment, SegmentParametrization};

/// Number of sample intervals per segment; a non-degenerate segment
/// produces `SAMPLE_COUNT + 1` points.
pub const SAMPLE_COUNT: usize = 64;

/// Sample a segment parametrization and place the points into the
/// segment's frame.
///
/// Segments at or below the zero-length tolerance produce an empty
/// polygon: compound curves commonly end in a zero-length trailing
/// segment, which is skipped rather than treated as an error.
pub fn tessellate_segment(
    parametrization: &SegmentParametrization,
    placement: &Rotation2d,
) -> Result<Vec<Point3>> {
    let length = parametrization.length();
    if length.abs() <= ZERO_LENGTH_TOLERANCE {
        return Ok(Vec::new());
    }

    let mut polygon = Vec::with_capacity(SAMPLE_COUNT + 1);
    for i in 0..=SAMPLE_COUNT {
        let u = length * i as f64 / SAMPLE_COUNT as f64;
        let local = parametrization.evaluate(u)?;
        polygon.push(placement.transform_point(local));
    }
    Ok(polygon)
}

/// Map a curve-segment description to its output polygon.
///
/// Runs the full pipeline: measure validation, parent-curve resolution,
/// placement resolution, then fixed-resolution sampling.
pub fn curve_segment_polygon(segment: &CurveSegment, length_unit: f64) -> Result<Vec<Point3>> {
    let parametrization = SegmentParametrization::new(segment, length_unit)?;
    let placement = segment.placement.resolve()?;
    tessellate_segment(&parametrization, &placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Circle, Curve, Direction, Line};
    use crate::measure::Measure;
    use crate::placement::{Placement2d, Point};
    use align_math::{DVec2, DVec3};

    fn line_segment(start: f64, length: f64, placement: Placement2d) -> CurveSegment {
        CurveSegment {
            placement,
            segment_start: Measure::Length(start),
            segment_length: Measure::Length(length),
            parent_curve: Curve::Line(Line::new(
                DVec2::ZERO,
                Direction::new(DVec2::new(1.0, 0.0), 1.0),
            )),
        }
    }

    #[test]
    fn test_sample_count() {
        let seg = line_segment(0.0, 10.0, Placement2d::at(DVec2::ZERO));
        let polygon = curve_segment_polygon(&seg, 1.0).unwrap();
        assert_eq!(polygon.len(), SAMPLE_COUNT + 1);
        assert!((polygon[0] - DVec3::new(0.0, 0.0, 0.0)).length() < 1e-12);
        assert!((polygon[64] - DVec3::new(10.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_zero_length_segment_skipped() {
        let seg = line_segment(0.0, 0.0005, Placement2d::at(DVec2::ZERO));
        let polygon = curve_segment_polygon(&seg, 1.0).unwrap();
        assert!(polygon.is_empty());
    }

    #[test]
    fn test_negative_length_samples_backwards() {
        let seg = line_segment(0.0, -10.0, Placement2d::at(DVec2::ZERO));
        let polygon = curve_segment_polygon(&seg, 1.0).unwrap();
        assert_eq!(polygon.len(), 65);
        assert!((polygon[0] - DVec3::new(0.0, 0.0, 0.0)).length() < 1e-12);
        assert!((polygon[64] - DVec3::new(-10.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_placement_rotates_and_translates() {
        let placement = Placement2d::new(
            Point::Cartesian(DVec2::new(100.0, 50.0)),
            Some(DVec2::new(0.0, 1.0)),
        );
        let seg = line_segment(0.0, 10.0, placement);
        let polygon = curve_segment_polygon(&seg, 1.0).unwrap();
        // the local +X line is turned onto global +Y
        assert!((polygon[0] - DVec3::new(100.0, 50.0, 0.0)).length() < 1e-10);
        assert!((polygon[64] - DVec3::new(100.0, 60.0, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_circle_arc_endpoints() {
        use std::f64::consts::PI;

        let seg = CurveSegment {
            placement: Placement2d::at(DVec2::ZERO),
            segment_start: Measure::Length(0.0),
            segment_length: Measure::Length(PI * 10.0 / 2.0),
            parent_curve: Curve::Circle(Circle::new(10.0, Placement2d::at(DVec2::ZERO))),
        };
        let polygon = curve_segment_polygon(&seg, 1.0).unwrap();
        assert_eq!(polygon.len(), 65);
        assert!((polygon[0] - DVec3::new(10.0, 0.0, 0.0)).length() < 1e-10);
        assert!((polygon[64] - DVec3::new(0.0, 10.0, 0.0)).length() < 1e-10);
        // every sample stays on the circle
        for p in &polygon {
            let r = DVec2::new(p.x, p.y).length();
            assert!((r - 10.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_unresolvable_segment_placement_fails() {
        use align_core::AlignError;

        let basis = Curve::Line(Line::new(
            DVec2::ZERO,
            Direction::new(DVec2::new(1.0, 0.0), 1.0),
        ));
        let placement = Placement2d::new(
            Point::OnCurve {
                basis: Box::new(basis),
                parameter: 1.0,
            },
            None,
        );
        let seg = line_segment(0.0, 10.0, placement);
        let err = curve_segment_polygon(&seg, 1.0).unwrap_err();
        assert!(matches!(err, AlignError::UnsupportedPointType(_)));
    }

    #[cfg(feature = "clothoid")]
    #[test]
    fn test_clothoid_polygon_starts_at_combined_origin() {
        use crate::curve::Clothoid;

        let seg = CurveSegment {
            placement: Placement2d::at(DVec2::new(1000.0, 2000.0)),
            segment_start: Measure::Length(0.0),
            segment_length: Measure::Length(100.0),
            parent_curve: Curve::Clothoid(Clothoid::new(
                300.0,
                Placement2d::at(DVec2::ZERO),
            )),
        };
        let polygon = curve_segment_polygon(&seg, 1.0).unwrap();
        assert_eq!(polygon.len(), 65);
        assert!((polygon[0] - DVec3::new(1000.0, 2000.0, 0.0)).length() < 1e-10);
    }
}
