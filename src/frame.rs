//! Per-frame view of the pendulum for renderers

use nalgebra::Point2;

/// Bob position relative to the pivot, x to the right and y pointing down
#[inline]
pub fn bob_position(length: f64, angle: f64) -> Point2<f64> {
    Point2::new(length * angle.sin(), length * angle.cos())
}

/// Owned copy of everything a renderer reads each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub angle: f64,
    pub angular_velocity: f64,
    pub length: f64,
    pub mass: f64,
    pub is_running: bool,
    /// Bob position in meters, see [`bob_position`]
    pub bob: Point2<f64>,
}
