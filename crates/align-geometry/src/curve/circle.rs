//! Circle curve evaluated by arc length.

use align_core::Result;
use align_math::{DVec2, DVec3, Rotation2d};
use serde::{Deserialize, Serialize};

use crate::placement::Placement2d;

/// A circle of `radius` centered at its placement's location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
    pub position: Placement2d,
}

impl Circle {
    pub fn new(radius: f64, position: Placement2d) -> Self {
        Self { radius, position }
    }
}

/// Arc-length evaluator for a circle; `u = 0` lies on the placement's
/// local X axis.
#[derive(Debug, Clone)]
pub struct CircleEval {
    radius: f64,
    frame: Rotation2d,
}

impl CircleEval {
    pub fn new(circle: &Circle) -> Result<Self> {
        Ok(Self {
            radius: circle.radius,
            frame: circle.position.resolve()?,
        })
    }

    pub fn point_at(&self, u: f64) -> DVec3 {
        // angle subtended by arc length u
        let angle = u / self.radius;
        let local = DVec2::new(self.radius * angle.cos(), self.radius * angle.sin());
        let p = self.frame.transform_point2(local);
        DVec3::new(p.x, p.y, 0.0)
    }
}
