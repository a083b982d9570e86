//! Curve-segment geometry: parent-curve evaluators, segment
//! parametrization, and fixed-resolution tessellation.

pub mod curve;
pub mod measure;
pub mod placement;
pub mod segment;
pub mod tessellate;

pub use curve::Curve;
pub use measure::Measure;
pub use placement::{Placement2d, Point};
pub use segment::{CurveSegment, SegmentParametrization};
pub use tessellate::{curve_segment_polygon, tessellate_segment, SAMPLE_COUNT};
