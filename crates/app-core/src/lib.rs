pub mod camera;
pub mod constants;
pub mod content;
pub mod curve;
pub mod error;
pub mod particles;
pub mod run_loop;
pub mod viewport;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use content::*;
pub use curve::*;
pub use error::*;
pub use particles::*;
pub use run_loop::*;
pub use viewport::*;
