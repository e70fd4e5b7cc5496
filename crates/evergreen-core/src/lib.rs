//! Gesture-driven choreography for the evergreen scene.
//!
//! Hand landmarks are classified into gestures ([`gesture`]), gesture edges
//! drive the scene mode ([`mode`]), and every frame the particles steer
//! toward the mode's arrangement ([`animator`]) while the snow and fairy
//! lights run on their own ([`snow`], [`fairy`]). [`Scene`] ties the visual
//! side together; [`InferenceLoop`] drives the gesture side.

pub mod animator;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod fairy;
pub mod gesture;
pub mod inference;
pub mod layout;
pub mod mode;
pub mod particle;
pub mod scene;
pub mod snow;
pub mod state;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animator::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use fairy::*;
pub use gesture::*;
pub use inference::*;
pub use layout::*;
pub use mode::*;
pub use particle::*;
pub use scene::*;
pub use snow::*;
pub use state::*;
