use glam::Vec3;

// Shared scene tuning constants. Everything here is a tunable, not physics.

// Tree envelope
pub const TREE_HEIGHT: f32 = 26.0;
pub const TREE_RADIUS: f32 = 9.0;
pub const TREE_MIN_RADIUS: f32 = 0.8; // keeps the tip from collapsing onto the axis
pub const TREE_HEIGHT_BIAS: f32 = 0.75; // t = u^bias, pushes density toward the base
pub const TREE_SPIRAL_TURNS: f32 = 45.0; // angle = t * turns * PI
pub const STAR_LIFT: f32 = 1.8; // star sits this far above the tree tip

// Scatter shell
pub const SCATTER_RADIUS_MIN: f32 = 10.0;
pub const SCATTER_RADIUS_SPAN: f32 = 15.0;

// Camera and focus
pub const CAMERA_EYE: [f32; 3] = [0.0, 4.0, 55.0];
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 300.0;
pub const FOCUS_ANCHOR: [f32; 3] = [0.0, 3.0, 38.0]; // world space, in front of the camera

// Particle motion (rates are per second, used as lerp factors rate * dt)
pub const MOVE_RATE: f32 = 3.0;
pub const FOCUS_MOVE_RATE: f32 = 6.0;
pub const SCALE_RATE: f32 = 5.0;
pub const FOCUS_SCALE: f32 = 5.0; // absolute, not a multiple of the base scale
pub const SCATTER_PHOTO_SCALE_MULTIPLIER: f32 = 3.0;
pub const SCATTER_SPIN_X: f32 = 0.5; // rad/s
pub const SCATTER_SPIN_Y: f32 = 0.8; // rad/s

// Parent group rotation about Y, rad/s
pub const TREE_GROUP_SPIN: f32 = 0.25;
pub const SCATTER_GROUP_SPIN: f32 = 0.15;

// Ornaments and photos
pub const ORNAMENT_SCALE_MIN: f32 = 0.5;
pub const ORNAMENT_SCALE_SPAN: f32 = 0.6;
pub const PHOTO_BASE_SCALE: f32 = 0.8;
pub const PHOTO_FRAME_SIZE: f32 = 1.5;
pub const PHOTO_FILL: f32 = 0.86; // fraction of the frame the picture may cover

// Fairy lights
pub const FAIRY_SPIRAL_TURNS: f32 = 40.0;
pub const FAIRY_FLICKER_RATE: f32 = 3.0; // phase advance per second
pub const FAIRY_FLICKER_CENTER: f32 = 0.8;
pub const FAIRY_FLICKER_DEPTH: f32 = 0.4;

// Upper bound on a single frame step, seconds
pub const MAX_FRAME_DT: f32 = 0.1;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn focus_anchor_vec3() -> Vec3 {
    Vec3::from(FOCUS_ANCHOR)
}
