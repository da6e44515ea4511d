// Shared visual tuning constants for the particle backdrop.
//
// Values mirror the home page scene; the `detail` preset in `config.rs`
// overrides the handful that differ.

// Brand palette (linear-ish sRGB floats)
pub const AMBER: [f32; 3] = [0.91, 0.66, 0.27]; // #e8a845
pub const CYAN: [f32; 3] = [0.27, 0.784, 0.91]; // #45c8e8
pub const STEEL: [f32; 3] = [0.533, 0.533, 0.6]; // #888899

// Particle spawn
pub const PARTICLE_COUNT_HOME: usize = 600;
pub const PARTICLE_COUNT_DETAIL: usize = 800;
pub const PARTICLE_SIZE_MIN: f32 = 0.3;
pub const PARTICLE_SIZE_MAX: f32 = 2.3;

// Connection lines
pub const LINE_THRESHOLD: f32 = 10.0;
pub const LINE_MAX: usize = 150;
pub const LINE_CHECK_COUNT: usize = 80;

// Pointer low-pass factors (fraction of the remaining gap closed per frame)
pub const POINTER_SMOOTHING: f32 = 0.04;
pub const CURSOR_SMOOTHING: f32 = 0.15;

// Render-only wave drift
pub const WAVE_AMPLITUDE_XY: f32 = 1.5;
pub const WAVE_AMPLITUDE_Z: f32 = 0.5;

// Pointer repulsion in world units
pub const POINTER_WORLD_SCALE: f32 = 40.0;
pub const REPULSE_RADIUS: f32 = 12.0;
pub const REPULSE_STRENGTH: f32 = 4.0;

// Camera rig
pub const CAMERA_BASE_Z: f32 = 50.0;
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_PARALLAX_X: f32 = 4.0;
pub const CAMERA_PARALLAX_Y: f32 = 3.0;
pub const CAMERA_FOLLOW: f32 = 0.015;
pub const CAMERA_DOLLY_PER_PX: f32 = 0.008;

// Scroll fade, as multiples of the viewport height
pub const FADE_START_VH: f32 = 0.3;
pub const FADE_END_VH: f32 = 2.5;
pub const FADE_FLOOR: f32 = 0.05;

// Floating accents
pub const SHAPE_FLOAT_AMPLITUDE: f32 = 2.0;
pub const SHAPE_OPACITY: f32 = 0.06;

// Grid floor
pub const GRID_SIZE: f32 = 80.0;
pub const GRID_DIVISIONS: usize = 40;
pub const GRID_OPACITY: f32 = 0.04;
pub const GRID_BASE_Y: f32 = -20.0;
pub const GRID_BASE_Z: f32 = -10.0;

// Particle material
pub const PARTICLE_ALPHA: f32 = 0.4;
pub const POINT_SIZE_SCALE: f32 = 180.0;
pub const DEPTH_FADE_FAR: f32 = 60.0;
pub const DEPTH_FADE_NEAR: f32 = 15.0;
pub const LINE_OPACITY: f32 = 0.12;

// Page chrome
pub const LOADER_START_DELAY_MS: f64 = 300.0;
pub const LOADER_RATE: f32 = 0.03;
pub const LOADER_STEP: f32 = 0.5;
pub const LOADER_DONE_AT: f32 = 99.5;
pub const LOADER_HOLD_MS: f64 = 400.0;
pub const WORD_STAGGER_MS: f64 = 120.0;
pub const WORD_DELAY_MS: f64 = 200.0;
pub const FPS_WINDOW_MS: f64 = 1000.0;
pub const NAVBAR_SCROLLED_PX: f32 = 50.0;
pub const COUNT_UP_MS: f64 = 2500.0;
pub const COUNT_UP_VISIBLE: f32 = 0.5;

// Scroll reveal: share of the element that must show above a bottom margin
pub const REVEAL_VISIBLE: f32 = 0.08;
pub const REVEAL_BOTTOM_MARGIN_PX: f32 = 40.0;

// Active nav link follows the section crossing this band of the viewport
pub const NAV_BAND_START: f32 = 0.4;
pub const NAV_BAND_END: f32 = 0.6;
