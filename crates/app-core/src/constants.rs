// Shared visual tuning constants used by both the web and native frontends.

// Curve geometry
pub const INFINITY_SCALE: f32 = 8.0; // overall size of the lemniscate
pub const TUBE_RADIUS: f32 = 0.89; // max radial offset from the centerline
pub const PARTICLE_COUNT: usize = 9200;
pub const PARTICLE_COLOR: [f32; 3] = [1.0, 1.0, 1.0]; // pure white

// Tangent estimation
pub const TANGENT_DT: f32 = 0.01; // forward-difference step along t
pub const TANGENT_EPSILON: f32 = 1e-6; // below this the tangent is degenerate

// Particle seeding bands
pub const CURVE_SEED_SPAN: f32 = 4.0 * std::f32::consts::PI; // two traversals
pub const SPEED_MIN: f32 = 0.5;
pub const SPEED_MAX: f32 = 1.2;
pub const RADIAL_VELOCITY_BAND: f32 = 0.01; // signed, radians per tick
pub const ALPHA_BASE: f32 = 0.8;
pub const ALPHA_SPAN: f32 = 0.2;

// Particle motion. Per tick, not per second: the animation is deliberately
// frame-driven and the rate is tuned for refresh-cadence advancement.
pub const BASE_ADVANCE_RATE: f32 = 0.008;

// Cosmetic size pulse (sinusoid of wall-clock milliseconds)
pub const PULSE_BASE: f32 = 0.8;
pub const PULSE_AMPLITUDE: f32 = 0.3;
pub const PULSE_TIME_RATE: f64 = 0.002; // radians per millisecond
pub const PULSE_INDEX_PHASE: f32 = 0.05; // radians per particle index
pub const PARTICLE_BASE_SIZE: f32 = 0.03; // world-space quad side at pulse 1.0

// Camera
pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_3; // 60 degrees
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_DISTANCE_MULTIPLIER: f32 = 2.5; // base distance per unit scale
pub const CAMERA_MOVEMENT_FRACTION: f32 = 0.1; // sway amplitude per unit scale
pub const CAMERA_MOVEMENT_MIN: f32 = 0.3; // sway floor for small curves
pub const SWAY_X_RATE: f64 = 0.0002; // radians per millisecond
pub const SWAY_Y_RATE: f64 = 0.0003;
pub const SWAY_Z_RATE: f64 = 0.0001;
pub const SWAY_Y_SCALE: f32 = 0.6;
pub const SWAY_Z_SCALE: f32 = 0.3;
pub const PORTRAIT_CORRECTION_FACTOR: f32 = 0.5; // extra distance per 1/aspect

// Hero copy entrance timing (seconds)
pub const TAGLINE_DELAY_BASE_SEC: f32 = 0.4;
pub const TAGLINE_DELAY_STEP_SEC: f32 = 0.2;
pub const DESCRIPTION_DELAY_SEC: f32 = 0.7;
