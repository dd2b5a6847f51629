use crate::core::constants::{DISPLACEMENT_AMPLITUDE, NOISE_TIME_RATES};
use crate::core::noise::Noise3;
use fnv::FnvHashMap;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Interleaved vertex layout uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    /// Sphere centred on the axis-aligned box of `points`, radius reaching the
    /// farthest point.
    pub fn from_points(points: &[Vec3]) -> Self {
        if points.is_empty() {
            return Self {
                center: Vec3::ZERO,
                radius: 0.0,
            };
        }
        let (min, max) = points
            .iter()
            .fold((Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)), |(lo, hi), p| {
                (lo.min(*p), hi.max(*p))
            });
        let center = (min + max) * 0.5;
        let radius_sq = points
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0_f32, f32::max);
        Self {
            center,
            radius: radius_sq.sqrt(),
        }
    }

    pub fn contains(&self, point: Vec3, epsilon: f32) -> bool {
        point.distance(self.center) <= self.radius + epsilon
    }
}

/// Where one base vertex lands at `time_sec`.
///
/// The base point only contributes its direction: the noise ratio scales the
/// unit direction, so any base magnitude other than one is discarded. A zero
/// base point stays at the origin.
pub fn displaced_position<N: Noise3 + ?Sized>(base: Vec3, noise: &N, time_sec: f32) -> Vec3 {
    let dir = base.normalize_or_zero();
    let offset = NOISE_TIME_RATES * time_sec;
    let n = noise.sample(dir.x + offset.x, dir.y + offset.y, dir.z + offset.z);
    let ratio = n * DISPLACEMENT_AMPLITUDE + 1.0;
    dir * ratio
}

/// Fixed-topology sphere whose vertices are re-placed every animated frame.
///
/// `base` is captured once at construction and never written again; the
/// current positions, normals and bounds are derived from it.
#[derive(Clone, Debug)]
pub struct BlobMesh {
    base: Vec<Vec3>,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
    // first vertex sharing the same base position (seam and pole duplicates)
    weld: Vec<u32>,
    bounds: BoundingSphere,
    dirty: bool,
}

impl BlobMesh {
    /// Latitude/longitude sphere. Rows run from the north pole (v = 0) to the
    /// south pole; the first and last column of every row coincide so the
    /// texture seam gets its own UVs.
    pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let ws = width_segments.max(3);
        let hs = height_segments.max(2);
        let row = ws + 1;

        let mut base = Vec::with_capacity((row * (hs + 1)) as usize);
        let mut uvs = Vec::with_capacity(base.capacity());
        for iy in 0..=hs {
            let v = iy as f32 / hs as f32;
            // pin the poles so their duplicates weld exactly
            let (sin_v, cos_v) = match iy {
                0 => (0.0, 1.0),
                _ if iy == hs => (0.0, -1.0),
                _ => (v * PI).sin_cos(),
            };
            for ix in 0..=ws {
                let u = ix as f32 / ws as f32;
                let (sin_u, cos_u) = match ix {
                    0 => (0.0, 1.0),
                    _ if ix == ws => (0.0, 1.0),
                    _ => (u * TAU).sin_cos(),
                };
                base.push(Vec3::new(
                    -radius * cos_u * sin_v,
                    radius * cos_v,
                    radius * sin_u * sin_v,
                ));
                uvs.push([u, v]);
            }
        }

        let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
        for iy in 0..hs {
            for ix in 0..ws {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != hs - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self::from_parts(base, uvs, indices)
    }

    fn from_parts(base: Vec<Vec3>, uvs: Vec<[f32; 2]>, indices: Vec<u32>) -> Self {
        let weld = weld_duplicates(&base);
        let mut mesh = Self {
            positions: base.clone(),
            normals: vec![Vec3::ZERO; base.len()],
            bounds: BoundingSphere::from_points(&base),
            base,
            uvs,
            indices,
            weld,
            dirty: true,
        };
        mesh.recompute_normals();
        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.base.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn base_positions(&self) -> &[Vec3] {
        &self.base
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    pub fn bounds(&self) -> BoundingSphere {
        self.bounds
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the vertex data changed since the last call and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// One animation step: every vertex is recomputed from its base position,
    /// then normals and bounds follow and the buffer is flagged for upload.
    pub fn displace<N: Noise3 + ?Sized>(&mut self, noise: &N, time_sec: f32) {
        for (pos, base) in self.positions.iter_mut().zip(&self.base) {
            *pos = displaced_position(*base, noise, time_sec);
        }
        self.recompute_normals();
        self.bounds = BoundingSphere::from_points(&self.positions);
        self.dirty = true;
    }

    /// Packs the current state into `out`, reusing its allocation.
    pub fn write_gpu_vertices(&self, out: &mut Vec<GpuVertex>) {
        out.clear();
        out.extend(
            self.positions
                .iter()
                .zip(&self.normals)
                .zip(&self.uvs)
                .map(|((p, n), uv)| GpuVertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                    uv: *uv,
                }),
        );
    }

    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        let mut out = Vec::with_capacity(self.vertex_count());
        self.write_gpu_vertices(&mut out);
        out
    }

    fn recompute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = self.positions[i0];
            let face = (self.positions[i1] - p0).cross(self.positions[i2] - p0);
            for i in [i0, i1, i2] {
                acc[self.weld[i] as usize] += face;
            }
        }
        for (i, n) in self.normals.iter_mut().enumerate() {
            let summed = acc[self.weld[i] as usize];
            *n = if summed.length_squared() > f32::EPSILON {
                summed.normalize()
            } else {
                self.positions[i].normalize_or_zero()
            };
        }
    }
}

fn weld_duplicates(points: &[Vec3]) -> Vec<u32> {
    const QUANT: f32 = 1.0e5;
    let mut first: FnvHashMap<(i32, i32, i32), u32> = FnvHashMap::default();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let key = (
                (p.x * QUANT).round() as i32,
                (p.y * QUANT).round() as i32,
                (p.z * QUANT).round() as i32,
            );
            *first.entry(key).or_insert(i as u32)
        })
        .collect()
}
