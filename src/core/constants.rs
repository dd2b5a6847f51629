use glam::Vec3;

// Shared scene layout and tuning constants.

// Camera
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_DISTANCE: f32 = 2.0; // eye starts on +Z looking at the origin

// Debug panel bounds for the camera distance field; also the zoom limits
pub const MIN_DISTANCE: f32 = 1.2;
pub const MAX_DISTANCE: f32 = 10.0;
pub const DISTANCE_STEP: f32 = 0.1;

// Blob mesh
pub const BLOB_RADIUS: f32 = 1.0; // displacement assumes a unit base radius
pub const BLOB_WIDTH_SEGMENTS: u32 = 128;
pub const BLOB_HEIGHT_SEGMENTS: u32 = 128;

// Displacement: ratio = noise * AMPLITUDE + 1, noise sampled at dir + t * rates
pub const DISPLACEMENT_AMPLITUDE: f32 = 0.4;
pub const NOISE_TIME_RATES: Vec3 = Vec3::new(0.3, 0.35, 0.4);

// Default tint and rim lighting of the blob material
pub const DEFAULT_BLOB_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const BLOB_RIM_STRENGTH: f32 = 0.6;

// Background sphere, viewed from inside
pub const SKY_RADIUS: f32 = 50.0;
pub const SKY_WIDTH_SEGMENTS: u32 = 64;
pub const SKY_HEIGHT_SEGMENTS: u32 = 32;

// Environments and their generated textures
pub const ENVIRONMENT_COUNT: usize = 3;
pub const SKY_TEXTURE_SIZE: [u32; 2] = [1024, 512];
pub const SURFACE_TEXTURE_SIZE: [u32; 2] = [512, 256];

// Background clear color (0x292929)
pub const CLEAR_RGB: [f64; 3] = [41.0 / 255.0, 41.0 / 255.0, 41.0 / 255.0];
