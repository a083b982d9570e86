use crate::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Rigid planar transform (rotation about the origin followed by a
/// translation), applied to the XY components of points with Z kept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rotation2d {
    pub origin: DVec2,
    pub angle: f64,
}

impl Rotation2d {
    pub fn new(origin: DVec2, angle: f64) -> Self {
        Self { origin, angle }
    }

    pub fn identity() -> Self {
        Self {
            origin: DVec2::ZERO,
            angle: 0.0,
        }
    }

    /// Angle a reference direction makes with the parent frame's X axis.
    pub fn angle_of(direction: DVec2) -> f64 {
        direction.y.atan2(direction.x)
    }

    pub fn transform_point2(&self, p: DVec2) -> DVec2 {
        let (sin, cos) = self.angle.sin_cos();
        DVec2::new(
            p.x * cos - p.y * sin + self.origin.x,
            p.x * sin + p.y * cos + self.origin.y,
        )
    }

    /// Rotate and translate the XY components, leaving Z unchanged.
    pub fn transform_point(&self, p: DVec3) -> DVec3 {
        let xy = self.transform_point2(DVec2::new(p.x, p.y));
        DVec3::new(xy.x, xy.y, p.z)
    }
}

impl Default for Rotation2d {
    fn default() -> Self {
        Self::identity()
    }
}
