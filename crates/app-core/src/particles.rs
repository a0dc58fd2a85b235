//! Particle population for the infinity-tube animation.
//!
//! Simulation state lives here as plain records owned by [`ParticleSet`];
//! the renderable view ([`ParticleInstance`]) is re-derived from it every
//! tick and is never the source of truth.

use crate::constants::{
    ALPHA_BASE, ALPHA_SPAN, BASE_ADVANCE_RATE, CURVE_SEED_SPAN, INFINITY_SCALE, PARTICLE_BASE_SIZE,
    PARTICLE_COLOR, PARTICLE_COUNT, PULSE_AMPLITUDE, PULSE_BASE, PULSE_INDEX_PHASE,
    PULSE_TIME_RATE, RADIAL_VELOCITY_BAND, SPEED_MAX, SPEED_MIN, TUBE_RADIUS,
};
use crate::curve::CurveField;
use crate::error::SetupError;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Immutable animation parameters, fixed for the lifetime of a mount.
#[derive(Clone, Copy, Debug)]
pub struct CurveParameters {
    pub scale: f32,
    pub tube_radius: f32,
    pub particle_count: usize,
    pub particle_color: [f32; 3],
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            scale: INFINITY_SCALE,
            tube_radius: TUBE_RADIUS,
            particle_count: PARTICLE_COUNT,
            particle_color: PARTICLE_COLOR,
        }
    }
}

impl CurveParameters {
    /// Check the structural invariants. The negated comparisons also reject
    /// NaN inputs.
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(self.scale > 0.0) {
            return Err(SetupError::InvalidParameters(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !(self.tube_radius >= 0.0) {
            return Err(SetupError::InvalidParameters(format!(
                "tube radius must be non-negative, got {}",
                self.tube_radius
            )));
        }
        Ok(())
    }
}

/// One population member.
///
/// `position` and `pulse_scale` are projections recomputed by
/// [`ParticleSet::advance`]; the remaining fields are sampled once at
/// creation (except `curve_parameter` and `radial_angle`, which integrate
/// their per-tick rates).
#[derive(Clone, Debug)]
pub struct Particle {
    pub curve_parameter: f32,
    pub speed: f32,
    pub tube_offset: f32,
    pub radial_angle: f32,
    pub radial_angular_velocity: f32,
    pub alpha: f32,
    pub position: Vec3,
    pub pulse_scale: f32,
}

/// GPU-facing view of one particle (one quad instance).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
}

pub struct ParticleSet {
    particles: Vec<Particle>,
    curve: CurveField,
    color: [f32; 3],
}

impl ParticleSet {
    /// Seed `params.particle_count` particles, spacing `curve_parameter`
    /// evenly over two traversals of the figure-eight so both lobes fill
    /// with different phase. Deterministic for a given `seed`.
    pub fn new(params: &CurveParameters, seed: u64) -> Result<Self, SetupError> {
        params.validate()?;
        let curve = CurveField::new(params.scale);
        let mut rng = StdRng::seed_from_u64(seed);
        let count = params.particle_count;
        let mut particles = Vec::with_capacity(count);
        for i in 0..count {
            let curve_parameter = (i as f32 / count as f32) * CURVE_SEED_SPAN;
            let tube_offset = rng.gen::<f32>() * params.tube_radius;
            let radial_angle = rng.gen::<f32>() * TAU;
            let speed = SPEED_MIN + rng.gen::<f32>() * (SPEED_MAX - SPEED_MIN);
            let radial_angular_velocity = (rng.gen::<f32>() - 0.5) * 2.0 * RADIAL_VELOCITY_BAND;
            let alpha = ALPHA_BASE + rng.gen::<f32>() * ALPHA_SPAN;
            let position = curve.position_at(curve_parameter, tube_offset, radial_angle);
            particles.push(Particle {
                curve_parameter,
                speed,
                tube_offset,
                radial_angle,
                radial_angular_velocity,
                alpha,
                position,
                pulse_scale: 1.0,
            });
        }
        log::info!("[particles] seeded {count} over two curve traversals");
        Ok(Self {
            particles,
            curve,
            color: params.particle_color,
        })
    }

    /// Advance every particle one tick and recompute its projections.
    ///
    /// Tick-driven on purpose: `curve_parameter` gains `BASE_ADVANCE_RATE *
    /// speed` per call regardless of elapsed time, so perceived speed follows
    /// the display refresh. `now_ms` feeds only the cosmetic size pulse.
    /// `curve_parameter` grows without wraparound; the trig-based curve is
    /// periodic, so unbounded growth is harmless over page-session lifetimes.
    pub fn advance(&mut self, now_ms: f64) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.curve_parameter += BASE_ADVANCE_RATE * p.speed;
            p.radial_angle += p.radial_angular_velocity;
            p.position = self
                .curve
                .position_at(p.curve_parameter, p.tube_offset, p.radial_angle);
            let phase = now_ms * PULSE_TIME_RATE + f64::from(i as f32 * PULSE_INDEX_PHASE);
            p.pulse_scale = PULSE_BASE + PULSE_AMPLITUDE * phase.sin() as f32;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drop the whole population (teardown path).
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Project the simulation state into GPU instances, reusing `out`.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.reserve(self.particles.len());
        let [r, g, b] = self.color;
        for p in &self.particles {
            out.push(ParticleInstance {
                pos: p.position.to_array(),
                scale: PARTICLE_BASE_SIZE * p.pulse_scale,
                color: [r, g, b, p.alpha],
            });
        }
    }
}
