// Host-side tests for environment cycling and procedural textures.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod environment {
        include!("../src/core/environment.rs");
    }
    pub mod noise {
        include!("../src/core/noise.rs");
    }
    pub mod texture {
        include!("../src/core/texture.rs");
    }
}

use crate::core::constants::ENVIRONMENT_COUNT;
use crate::core::environment::{EnvironmentCycle, ENVIRONMENTS};
use crate::core::texture::{environment_textures, sky_texture, surface_texture};

#[test]
fn cycle_starts_at_first_environment() {
    let c = EnvironmentCycle::default();
    assert_eq!(c.index(), 0);
    assert_eq!(c.environment().name, ENVIRONMENTS[0].name);
}

#[test]
fn next_three_times_returns_to_start() {
    for start in 0..ENVIRONMENT_COUNT {
        let mut c = EnvironmentCycle::with_index(ENVIRONMENT_COUNT, start);
        for _ in 0..ENVIRONMENT_COUNT {
            c.next();
        }
        assert_eq!(c.index(), start);
    }
}

#[test]
fn next_and_previous_sequences() {
    let mut c = EnvironmentCycle::default();
    assert_eq!(c.next(), 1);
    assert_eq!(c.next(), 2);
    assert_eq!(c.next(), 0);

    // backward from the first wraps to the last
    assert_eq!(c.previous(), 2);
    assert_eq!(c.previous(), 1);
    assert_eq!(c.previous(), 0);
}

#[test]
fn previous_then_next_is_identity() {
    for start in 0..ENVIRONMENT_COUNT {
        let mut c = EnvironmentCycle::with_index(ENVIRONMENT_COUNT, start);
        c.previous();
        c.next();
        assert_eq!(c.index(), start);
    }
}

#[test]
fn degenerate_lengths_are_guarded() {
    // an empty set is treated as a single environment
    let mut c = EnvironmentCycle::new(0);
    assert_eq!(c.next(), 0);
    assert_eq!(c.previous(), 0);

    let c = EnvironmentCycle::with_index(3, 7);
    assert_eq!(c.index(), 1);
}

#[test]
fn environments_are_distinct() {
    for (i, a) in ENVIRONMENTS.iter().enumerate() {
        assert!(!a.name.is_empty());
        for b in &ENVIRONMENTS[i + 1..] {
            assert_ne!(a.name, b.name);
            assert_ne!(a.seed, b.seed);
        }
    }
}

#[test]
fn textures_have_requested_size_and_are_opaque() {
    let (sky, surface) = environment_textures(&ENVIRONMENTS[0], [64, 32], [32, 16]);
    assert_eq!((sky.width, sky.height), (64, 32));
    assert_eq!(sky.rgba.len(), 64 * 32 * 4);
    assert_eq!(sky.bytes_per_row(), 64 * 4);
    assert_eq!((surface.width, surface.height), (32, 16));
    assert_eq!(surface.rgba.len(), 32 * 16 * 4);
    assert!(sky.rgba.chunks_exact(4).all(|px| px[3] == 255));
    assert!(surface.rgba.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn textures_are_deterministic() {
    let env = &ENVIRONMENTS[1];
    assert_eq!(sky_texture(env, 48, 24).rgba, sky_texture(env, 48, 24).rgba);
    assert_eq!(
        surface_texture(env, 48, 24).rgba,
        surface_texture(env, 48, 24).rgba
    );
}

#[test]
fn each_environment_looks_different() {
    let skies: Vec<_> = ENVIRONMENTS
        .iter()
        .map(|env| sky_texture(env, 32, 16).rgba)
        .collect();
    assert_ne!(skies[0], skies[1]);
    assert_ne!(skies[1], skies[2]);
    assert_ne!(skies[0], skies[2]);
}

#[test]
fn sky_is_lighter_at_horizon_for_dusk() {
    // Dusk fades from a dark zenith to a bright horizon
    let sky = sky_texture(&ENVIRONMENTS[0], 64, 64);
    let luma = |px: [u8; 4]| px[0] as u32 + px[1] as u32 + px[2] as u32;
    let zenith: u32 = (0..64).map(|x| luma(sky.pixel(x, 0))).sum();
    let horizon: u32 = (0..64).map(|x| luma(sky.pixel(x, 31))).sum();
    assert!(horizon > zenith, "horizon={horizon} zenith={zenith}");
}
