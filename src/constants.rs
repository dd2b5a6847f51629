use glam::Vec3;

/// Frame and interaction tuning constants for the web front-end.
///
/// Scene layout lives in `core::constants`; these cover how input and the
/// browser surface are mapped onto it.
// Cap on devicePixelRatio when sizing the canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Largest frame delta fed to the controls (seconds); tab switches stall RAF
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Wheel deltas per zoom notch, by WheelEvent.deltaMode
pub const WHEEL_PIXELS_PER_NOTCH: f32 = 100.0;
pub const WHEEL_LINES_PER_NOTCH: f32 = 3.0;

// Lighting
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(-0.5, -0.8, -0.6); // direction the light travels
pub const AMBIENT_LIGHT: f32 = 0.35;
