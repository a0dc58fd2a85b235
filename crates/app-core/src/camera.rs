//! Camera placement for the hero scene.
//!
//! These types avoid platform-specific APIs and are shared by the native and
//! web frontends, which only differ in where `now_ms` comes from.

use crate::constants::{
    CAMERA_DISTANCE_MULTIPLIER, CAMERA_FOV_Y, CAMERA_MOVEMENT_FRACTION, CAMERA_MOVEMENT_MIN,
    CAMERA_ZFAR, CAMERA_ZNEAR, PORTRAIT_CORRECTION_FACTOR, SWAY_X_RATE, SWAY_Y_RATE,
    SWAY_Y_SCALE, SWAY_Z_RATE, SWAY_Z_SCALE,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Camera driver: a base distance derived from the curve scale, gentle
/// sinusoidal sway, and a distance correction that pulls back on portrait
/// viewports so the curve never clips.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    base_distance: f32,
    movement_scale: f32,
    aspect_correction: f32,
    camera: Camera,
}

impl CameraRig {
    pub fn new(scale: f32, width: u32, height: u32) -> Self {
        let base_distance = Self::compute_distance(scale);
        let movement_scale = (scale * CAMERA_MOVEMENT_FRACTION).max(CAMERA_MOVEMENT_MIN);
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, base_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_Y,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        };
        let mut rig = Self {
            base_distance,
            movement_scale,
            aspect_correction: 0.0,
            camera,
        };
        rig.on_resize(width, height);
        rig
    }

    /// Base camera distance for a given curve scale.
    pub fn compute_distance(scale: f32) -> f32 {
        scale * CAMERA_DISTANCE_MULTIPLIER
    }

    /// Recompute aspect and the portrait distance correction from new surface
    /// dimensions. Pure function of the inputs, so repeated identical calls
    /// leave the state untouched.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        self.camera.aspect = aspect;
        self.aspect_correction = if aspect < 1.0 {
            (1.0 / aspect) * PORTRAIT_CORRECTION_FACTOR
        } else {
            0.0
        };
    }

    /// Sway the eye around its base position and re-target the origin.
    /// Returns the new eye position.
    pub fn update(&mut self, now_ms: f64) -> Vec3 {
        let sway = self.movement_scale;
        let x = (now_ms * SWAY_X_RATE).sin() as f32 * sway;
        let y = (now_ms * SWAY_Y_RATE).cos() as f32 * (sway * SWAY_Y_SCALE);
        let z = self.base_distance
            + self.aspect_correction
            + (now_ms * SWAY_Z_RATE).sin() as f32 * (sway * SWAY_Z_SCALE);
        self.camera.eye = Vec3::new(x, y, z);
        self.camera.target = Vec3::ZERO;
        self.camera.eye
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.projection_matrix() * self.camera.view_matrix()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn aspect(&self) -> f32 {
        self.camera.aspect
    }

    pub fn aspect_correction(&self) -> f32 {
        self.aspect_correction
    }

    pub fn base_distance(&self) -> f32 {
        self.base_distance
    }
}
