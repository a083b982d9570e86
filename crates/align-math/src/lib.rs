pub mod rotation;

pub use glam::{DVec2, DVec3};
pub use rotation::Rotation2d;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
