//! Unbounded line curve.

use align_core::{AlignError, Result};
use align_math::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Direction as the schema states it: ratio components plus an explicit
/// magnitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Direction {
    pub ratios: DVec2,
    pub magnitude: f64,
}

impl Direction {
    pub fn new(ratios: DVec2, magnitude: f64) -> Self {
        Self { ratios, magnitude }
    }
}

/// An unbounded line through `pnt` with direction `dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub pnt: DVec2,
    pub dir: Direction,
}

impl Line {
    pub fn new(pnt: DVec2, dir: Direction) -> Self {
        Self { pnt, dir }
    }
}

/// Arc-length evaluator for a line; the line itself is unbounded and only
/// the enclosing segment's length limits sampling.
#[derive(Debug, Clone)]
pub struct LineEval {
    origin: DVec2,
    dir: DVec2,
}

impl LineEval {
    pub fn new(line: &Line) -> Result<Self> {
        let m = line.dir.magnitude;
        if m == 0.0 {
            return Err(AlignError::DegenerateGeometry(
                "line direction has zero magnitude".to_string(),
            ));
        }
        Ok(Self {
            origin: line.pnt,
            dir: line.dir.ratios / m,
        })
    }

    /// Point at distance `u` from the line's base point.
    pub fn point_at(&self, u: f64) -> DVec3 {
        let p = self.origin + u * self.dir;
        DVec3::new(p.x, p.y, 0.0)
    }
}
