//! Parent-curve variants and their local arc-length evaluators.

mod circle;
#[cfg(feature = "clothoid")]
mod clothoid;
mod line;
mod polyline;

use serde::{Deserialize, Serialize};

pub use circle::{Circle, CircleEval};
#[cfg(feature = "clothoid")]
pub use clothoid::{Clothoid, ClothoidEval};
pub use line::{Direction, Line, LineEval};
pub use polyline::{Polyline, PolylineEval};

use crate::placement::Placement2d;

/// The closed set of parent-curve shapes a segment may reference.
///
/// `Ellipse` exists in the schema but has no arc-length parametrization
/// here; resolving a segment over one fails with `UnsupportedCurveType`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Curve {
    Line(Line),
    Circle(Circle),
    #[cfg(feature = "clothoid")]
    Clothoid(Clothoid),
    Polyline(Polyline),
    Ellipse(Ellipse),
}

impl Curve {
    /// Variant name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Curve::Line(_) => "Line",
            Curve::Circle(_) => "Circle",
            #[cfg(feature = "clothoid")]
            Curve::Clothoid(_) => "Clothoid",
            Curve::Polyline(_) => "Polyline",
            Curve::Ellipse(_) => "Ellipse",
        }
    }
}

/// An ellipse given by its two semi-axis lengths and a placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    pub semi_axis1: f64,
    pub semi_axis2: f64,
    pub position: Placement2d,
}

impl Ellipse {
    pub fn new(semi_axis1: f64, semi_axis2: f64, position: Placement2d) -> Self {
        Self {
            semi_axis1,
            semi_axis2,
            position,
        }
    }
}
