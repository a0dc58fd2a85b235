//! Lemniscate tube geometry.
//!
//! The hero scene is a figure-eight centerline with particles scattered
//! through a circular tube around it. Everything here is pure math suitable
//! for both native and web targets.

use crate::constants::{TANGENT_DT, TANGENT_EPSILON};
use glam::{Vec2, Vec3};

/// Figure-eight ("infinity") centerline with a circular tube cross-section.
#[derive(Clone, Copy, Debug)]
pub struct CurveField {
    scale: f32,
}

impl CurveField {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Point on the centerline at parameter `t`.
    fn centerline(&self, t: f32) -> Vec2 {
        let denom = 1.0 + t.sin() * t.sin();
        Vec2::new(
            self.scale * t.cos() / denom,
            self.scale * t.sin() * t.cos() / denom,
        )
    }

    /// Position on or around the tube surface.
    ///
    /// `tube_offset` is the radial distance from the centerline and
    /// `radial_angle` the angle around the cross-section. The in-plane part
    /// of the offset follows the curve normal (the tangent rotated 90°); the
    /// rest leaves the curve plane. A degenerate tangent yields the
    /// centerline point itself rather than dividing by ~zero.
    pub fn position_at(&self, t: f32, tube_offset: f32, radial_angle: f32) -> Vec3 {
        let base = self.centerline(t);
        let tangent = self.centerline(t + TANGENT_DT) - base;
        let len = tangent.length();
        if len < TANGENT_EPSILON {
            return base.extend(0.0);
        }
        let normal = Vec2::new(-tangent.y, tangent.x) / len;
        let in_plane = tube_offset * radial_angle.cos();
        Vec3::new(
            base.x + in_plane * normal.x,
            base.y + in_plane * normal.y,
            tube_offset * radial_angle.sin(),
        )
    }
}
