//! Piecewise-linear curve evaluated by distance from its first point.

use align_core::tolerance::ENDPOINT_EPS;
use align_core::{AlignError, Result};
use align_math::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// An ordered sequence of at least two points; insertion order is the
/// geometric order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<DVec2>,
}

impl Polyline {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }
}

/// One linear piece with its cumulative parameter range.
#[derive(Debug, Clone)]
struct Piece {
    u_start: f64,
    u_end: f64,
    origin: DVec2,
    dir: DVec2,
    last: bool,
}

impl Piece {
    fn contains(&self, u: f64) -> bool {
        if self.last {
            // inclusive upper bound with slack, so evaluation at the exact
            // total length survives floating-point error
            self.u_start <= u && u <= self.u_end + ENDPOINT_EPS
        } else {
            self.u_start <= u && u < self.u_end
        }
    }
}

/// Arc-length evaluator over the polyline's consecutive pieces.
#[derive(Debug, Clone)]
pub struct PolylineEval {
    pieces: Vec<Piece>,
}

impl PolylineEval {
    pub fn new(polyline: &Polyline) -> Result<Self> {
        let points = &polyline.points;
        if points.len() < 2 {
            return Err(AlignError::DegenerateGeometry(
                "polyline must have at least 2 points".to_string(),
            ));
        }

        let mut pieces = Vec::with_capacity(points.len() - 1);
        let mut u = 0.0;
        for (i, pair) in points.windows(2).enumerate() {
            let (p1, p2) = (pair[0], pair[1]);
            let d = p2 - p1;
            let l = d.length();
            if l == 0.0 {
                return Err(AlignError::DegenerateGeometry(format!(
                    "coincident consecutive polyline points at index {}",
                    i
                )));
            }
            pieces.push(Piece {
                u_start: u,
                u_end: u + l,
                origin: p1,
                dir: d / l,
                last: i == points.len() - 2,
            });
            u += l;
        }
        Ok(Self { pieces })
    }

    /// Point at distance `u` from the first point. Scans the ordered,
    /// non-overlapping ranges; a miss means malformed upstream data and is
    /// reported rather than asserted away.
    pub fn point_at(&self, u: f64) -> Result<DVec3> {
        let piece = self
            .pieces
            .iter()
            .find(|piece| piece.contains(u))
            .ok_or(AlignError::OutOfRangeParameter(u))?;
        let p = piece.origin + (u - piece.u_start) * piece.dir;
        Ok(DVec3::new(p.x, p.y, 0.0))
    }
}
