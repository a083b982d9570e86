//! Tolerances shared by segment evaluation and tessellation.

/// Slack added to the final polyline sub-range so that evaluation at the
/// exact total length survives floating-point error (in length units).
pub const ENDPOINT_EPS: f64 = 0.001;

/// Segments whose total |length| does not exceed this are skipped during
/// tessellation; compound curves commonly end in a zero-length trailing
/// segment (in length units).
pub const ZERO_LENGTH_TOLERANCE: f64 = 0.001;
