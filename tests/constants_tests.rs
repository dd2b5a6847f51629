// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_consistent() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);

    // The starting distance must be reachable from the debug panel
    assert!(MIN_DISTANCE < CAMERA_START_DISTANCE);
    assert!(CAMERA_START_DISTANCE < MAX_DISTANCE);
    assert!(DISTANCE_STEP > 0.0);
}

#[test]
fn distance_range_is_whole_number_of_steps() {
    let steps = (MAX_DISTANCE - MIN_DISTANCE) / DISTANCE_STEP;
    assert!((steps - steps.round()).abs() < 1e-3, "steps={steps}");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn displacement_keeps_ratio_positive() {
    // Noise stays within [-1, 1], so the ratio must stay above zero
    assert!(DISPLACEMENT_AMPLITUDE > 0.0 && DISPLACEMENT_AMPLITUDE < 1.0);
    assert!(NOISE_TIME_RATES.min_element() > 0.0);
    assert!(NOISE_TIME_RATES.max_element() < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sky_encloses_every_camera_position() {
    let blob_extent = BLOB_RADIUS * (1.0 + DISPLACEMENT_AMPLITUDE);
    assert!(SKY_RADIUS > MAX_DISTANCE + blob_extent);
    assert!(SKY_RADIUS < CAMERA_FAR);
    assert!(MIN_DISTANCE > blob_extent * 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mesh_and_texture_sizes_are_sane() {
    assert!(BLOB_WIDTH_SEGMENTS >= 3 && BLOB_HEIGHT_SEGMENTS >= 2);
    assert!(SKY_WIDTH_SEGMENTS >= 3 && SKY_HEIGHT_SEGMENTS >= 2);
    assert_eq!(ENVIRONMENT_COUNT, 3);
    for [w, h] in [SKY_TEXTURE_SIZE, SURFACE_TEXTURE_SIZE] {
        assert!(w > 0 && h > 0);
        // equirectangular layouts are twice as wide as tall
        assert_eq!(w, h * 2);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_tuning_is_sane() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 1.0);
    assert!(WHEEL_PIXELS_PER_NOTCH > 0.0);
    assert!(WHEEL_LINES_PER_NOTCH > 0.0);
    assert!(AMBIENT_LIGHT >= 0.0 && AMBIENT_LIGHT <= 1.0);
    assert!(LIGHT_DIRECTION.length() > 0.0);
    for c in CLEAR_RGB {
        assert!((0.0..=1.0).contains(&c));
    }
    for c in DEFAULT_BLOB_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
}
