use crate::core::environment::{Environment, Palette};
use crate::core::noise::{Noise3, Perlin};
use std::f32::consts::{PI, TAU};

/// Tightly packed RGBA8 image, row 0 at the top.
#[derive(Clone, Debug)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    fn from_fn(width: u32, height: u32, mut f: impl FnMut(f32, f32) -> [f32; 3]) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            let v = (y as f32 + 0.5) / height as f32;
            for x in 0..width {
                let u = (x as f32 + 0.5) / width as f32;
                let [r, g, b] = f(u, v);
                rgba.extend_from_slice(&[to_u8(r), to_u8(g), to_u8(b), 255]);
            }
        }
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ]
    }
}

/// Equirectangular backdrop: `high` at the zenith fading to `low` at the
/// horizon, cloud bands tinted with `accent`, and a sprinkle of stars in the
/// upper half.
pub fn sky_texture(env: &Environment, width: u32, height: u32) -> TextureImage {
    let noise = Perlin::seeded(env.seed);
    let Palette { low, high, accent } = env.sky;
    TextureImage::from_fn(width, height, |u, v| {
        let p = cylinder_point(u, v, 3.0);
        // elevation: 1 at the zenith, 0 at the horizon, negative below
        let elevation = (0.5 - v) * 2.0;
        let ramp = smoothstep(0.0, 0.9, elevation.max(0.0));
        let mut c = mix(low, high, ramp);
        if elevation < 0.0 {
            c = scale(low, 1.0 + elevation * 0.6);
        }

        let clouds = noise.fbm(p[0] * 2.0, p[1] * 2.0, p[2] * 4.0, 5) * 0.5 + 0.5;
        let band = (1.0 - (elevation - 0.15).abs() * 3.0).clamp(0.0, 1.0);
        c = mix(c, accent, smoothstep(0.55, 0.85, clouds) * band * 0.6);

        let star = noise.sample(p[0] * 60.0, p[1] * 60.0, p[2] * 120.0);
        if elevation > 0.3 && star > 0.62 {
            c = mix(c, [1.0, 1.0, 1.0], ((star - 0.62) * 8.0).min(1.0));
        }
        c
    })
}

/// Marbled surface wrapping the blob: veins of `accent` over a `low`/`high`
/// ramp. Seamless across the u = 0/1 edge.
pub fn surface_texture(env: &Environment, width: u32, height: u32) -> TextureImage {
    let noise = Perlin::seeded(env.seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let Palette { low, high, accent } = env.surface;
    TextureImage::from_fn(width, height, |u, v| {
        let p = cylinder_point(u, v, 2.0);
        let turbulence = noise.fbm(p[0] * 1.5, p[1] * 1.5, p[2] * 1.5, 4);
        let marble = ((v * 6.0 + turbulence * 4.0) * PI).sin() * 0.5 + 0.5;
        let c = mix(low, high, marble);
        let vein = 1.0 - (turbulence * 6.0).abs().min(1.0);
        mix(c, accent, vein.powf(4.0) * 0.8)
    })
}

/// Both textures of one environment, background first.
pub fn environment_textures(
    env: &Environment,
    sky_size: [u32; 2],
    surface_size: [u32; 2],
) -> (TextureImage, TextureImage) {
    (
        sky_texture(env, sky_size[0], sky_size[1]),
        surface_texture(env, surface_size[0], surface_size[1]),
    )
}

// Maps (u, v) onto a cylinder so the noise wraps around the u seam.
#[inline]
fn cylinder_point(u: f32, v: f32, height_scale: f32) -> [f32; 3] {
    let (s, c) = (u * TAU).sin_cos();
    [c, s, v * height_scale]
}

#[inline]
fn mix(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

#[inline]
fn scale(c: [f32; 3], k: f32) -> [f32; 3] {
    [c[0] * k, c[1] * k, c[2] * k]
}

#[inline]
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
