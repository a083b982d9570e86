//! Clothoid (Euler spiral) curve evaluated by a truncated Fresnel series.

use align_core::Result;
use align_math::{DVec2, DVec3, Rotation2d};
use serde::{Deserialize, Serialize};

use crate::placement::Placement2d;

/// A clothoid: curvature varies linearly with arc length. The clothoid
/// constant `A` fixes the rate (`A^2 = R * L` along the spiral); its sign
/// selects the turning direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clothoid {
    pub clothoid_constant: f64,
    pub position: Placement2d,
}

impl Clothoid {
    pub fn new(clothoid_constant: f64, position: Placement2d) -> Self {
        Self {
            clothoid_constant,
            position,
        }
    }
}

/// Local-frame evaluator built for a specific segment range.
///
/// The series is scaled by `RL = sign(A) * R * L`, where `L` is the
/// farthest absolute parameter the segment reaches and `R = A^2 / L` the
/// curvature radius there. Terms above `u^13` / `u^15` are dropped:
/// adequate at alignment curvature scales, not exact for arbitrary inputs.
#[derive(Debug, Clone)]
pub struct ClothoidEval {
    rl: f64,
    frame: Rotation2d,
}

impl ClothoidEval {
    pub fn new(clothoid: &Clothoid, start: f64, length: f64) -> Result<Self> {
        let l = normalization_length(start, length);
        let a = clothoid.clothoid_constant;
        let r = a * a / l;
        let rl = if a < 0.0 { -r * l } else { r * l };
        Ok(Self {
            rl,
            frame: clothoid.position.resolve()?,
        })
    }

    pub fn point_at(&self, u: f64) -> DVec3 {
        let rl = self.rl;
        let x = u - u.powi(5) / (40.0 * rl.powi(2)) + u.powi(9) / (3456.0 * rl.powi(4))
            - u.powi(13) / (599_040.0 * rl.powi(6));
        let y = u.powi(3) / (6.0 * rl) - u.powi(7) / (336.0 * rl.powi(3))
            + u.powi(11) / (42_240.0 * rl.powi(5))
            - u.powi(15) / (9_676_800.0 * rl.powi(7));
        let p = self.frame.transform_point2(DVec2::new(x, y));
        DVec3::new(p.x, p.y, 0.0)
    }
}

/// The farthest absolute parameter reached across `[start, start+length]`,
/// used to fix the curvature-radius scale of the series.
fn normalization_length(start: f64, length: f64) -> f64 {
    let sign = |v: f64| -> i32 {
        if v < 0.0 {
            -1
        } else if v > 0.0 {
            1
        } else {
            0
        }
    };
    let s = sign(start);
    if s == 0 {
        length.abs()
    } else if s == sign(length) {
        (start + length).abs()
    } else {
        start.abs()
    }
}
