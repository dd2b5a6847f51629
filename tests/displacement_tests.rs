// Host-side tests for noise, sphere generation and vertex displacement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod noise {
        include!("../src/core/noise.rs");
    }
}

use crate::core::constants::DISPLACEMENT_AMPLITUDE;
use crate::core::mesh::{displaced_position, BlobMesh, BoundingSphere};
use crate::core::noise::{ConstantNoise, Noise3, Perlin};
use glam::Vec3;

fn approx_vec(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() <= eps
}

#[test]
fn noise_is_zero_on_integer_lattice() {
    let p = Perlin::reference();
    for (x, y, z) in [(0.0, 0.0, 0.0), (1.0, 2.0, 3.0), (-4.0, 7.0, -1.0)] {
        assert_eq!(p.sample(x, y, z), 0.0);
    }
}

#[test]
fn noise_is_deterministic_and_bounded() {
    let a = Perlin::reference();
    let b = Perlin::reference();
    for i in 0..20 {
        for j in 0..20 {
            for k in 0..5 {
                let (x, y, z) = (i as f32 * 0.37, j as f32 * 0.41 - 3.0, k as f32 * 1.13);
                let n = a.sample(x, y, z);
                assert_eq!(n, b.sample(x, y, z));
                assert!(n.abs() <= 1.1, "n={n} at ({x},{y},{z})");
            }
        }
    }
}

#[test]
fn fbm_stays_in_unit_range() {
    let p = Perlin::seeded(11);
    for i in 0..200 {
        let t = i as f32 * 0.173;
        let n = p.fbm(t, t * 0.5 + 1.0, -t, 5);
        assert!(n.abs() <= 1.1, "fbm={n}");
    }
}

#[test]
fn seeds_produce_different_fields() {
    let a = Perlin::seeded(1);
    let b = Perlin::seeded(2);
    let differs = (0..64).any(|i| {
        let x = i as f32 * 0.29 + 0.5;
        (a.sample(x, 0.3, 0.7) - b.sample(x, 0.3, 0.7)).abs() > 1e-4
    });
    assert!(differs);
}

#[test]
fn zero_noise_keeps_unit_point() {
    let base = Vec3::new(0.6, 0.8, 0.0);
    let p = displaced_position(base, &ConstantNoise(0.0), 3.7);
    assert!(approx_vec(p, base, 1e-6));
}

#[test]
fn displaced_magnitude_is_the_noise_ratio() {
    for (base, n) in [
        (Vec3::new(0.0, 0.0, 5.0), 0.5),
        (Vec3::new(3.0, 4.0, 0.0), -0.5),
        (Vec3::new(-0.1, 0.2, 0.3), 1.0),
        (Vec3::new(1.0, 1.0, 1.0), -5.0),
    ] {
        let p = displaced_position(base, &ConstantNoise(n), 0.0);
        let expected = (n * DISPLACEMENT_AMPLITUDE + 1.0).abs();
        assert!((p.length() - expected).abs() < 1e-5, "base={base} n={n}");
    }
}

#[test]
fn displaced_direction_follows_base() {
    let base = Vec3::new(2.0, -1.0, 0.5);
    let p = displaced_position(base, &ConstantNoise(0.25), 1.0);
    assert!(approx_vec(p.normalize(), base.normalize(), 1e-5));

    // a negative ratio flips the point through the origin
    let flipped = displaced_position(base, &ConstantNoise(-5.0), 1.0);
    assert!(approx_vec(flipped.normalize(), -base.normalize(), 1e-5));
}

#[test]
fn zero_base_stays_at_origin() {
    let p = displaced_position(Vec3::ZERO, &ConstantNoise(0.9), 2.0);
    assert_eq!(p, Vec3::ZERO);
}

#[test]
fn uv_sphere_counts() {
    let mesh = BlobMesh::uv_sphere(1.0, 16, 8);
    assert_eq!(mesh.vertex_count(), 17 * 9);
    assert_eq!(mesh.triangle_count(), 2 * 16 * 7);
    assert_eq!(mesh.uvs().len(), mesh.vertex_count());
    assert!(mesh
        .indices()
        .iter()
        .all(|&i| (i as usize) < mesh.vertex_count()));
}

#[test]
fn uv_sphere_segments_are_clamped() {
    let mesh = BlobMesh::uv_sphere(1.0, 0, 0);
    assert_eq!(mesh.vertex_count(), 4 * 3);
    assert_eq!(mesh.triangle_count(), 2 * 3);
}

#[test]
fn uv_sphere_lies_on_radius() {
    let mesh = BlobMesh::uv_sphere(2.5, 24, 12);
    for p in mesh.base_positions() {
        assert!((p.length() - 2.5).abs() < 1e-4);
    }
    assert!((mesh.bounds().radius - 2.5).abs() < 1e-3);
}

#[test]
fn normals_point_outward() {
    let mesh = BlobMesh::uv_sphere(1.0, 16, 8);
    for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(n.dot(*p) > 0.9, "p={p} n={n}");
    }
}

#[test]
fn seam_duplicates_share_normals() {
    let mesh = BlobMesh::uv_sphere(1.0, 16, 8);
    let row = 17;
    for iy in 0..9 {
        let first = iy * row;
        let last = iy * row + 16;
        assert_eq!(mesh.positions()[first], mesh.positions()[last]);
        assert_eq!(mesh.normals()[first], mesh.normals()[last]);
    }
}

#[test]
fn displacement_keeps_topology_and_base() {
    let mut mesh = BlobMesh::uv_sphere(1.0, 16, 8);
    let indices = mesh.indices().to_vec();
    let base = mesh.base_positions().to_vec();
    let uvs = mesh.uvs().to_vec();

    mesh.displace(&Perlin::reference(), 1.3);
    mesh.displace(&Perlin::reference(), 2.6);

    assert_eq!(mesh.indices(), indices.as_slice());
    assert_eq!(mesh.base_positions(), base.as_slice());
    assert_eq!(mesh.uvs(), uvs.as_slice());
}

#[test]
fn displacement_is_recomputed_from_base() {
    let noise = Perlin::reference();
    let mut a = BlobMesh::uv_sphere(1.0, 16, 8);
    let mut b = a.clone();
    a.displace(&noise, 0.5);
    a.displace(&noise, 4.0);
    b.displace(&noise, 4.0);
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn animated_displacement_moves_vertices() {
    let mut mesh = BlobMesh::uv_sphere(1.0, 16, 8);
    mesh.displace(&Perlin::reference(), 1.3);
    let moved = mesh
        .positions()
        .iter()
        .zip(mesh.base_positions())
        .any(|(p, b)| p.distance(*b) > 1e-3);
    assert!(moved);
    for p in mesh.positions() {
        let r = p.length();
        assert!(r > 0.5 && r < 1.5, "r={r}");
    }
}

#[test]
fn constant_zero_noise_flattens_to_unit_radius() {
    let mut unit = BlobMesh::uv_sphere(1.0, 12, 6);
    unit.displace(&ConstantNoise(0.0), 9.0);
    for (p, b) in unit.positions().iter().zip(unit.base_positions()) {
        assert!(approx_vec(*p, *b, 1e-5));
    }

    let mut big = BlobMesh::uv_sphere(3.0, 12, 6);
    big.displace(&ConstantNoise(0.0), 9.0);
    for p in big.positions() {
        assert!((p.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn bounds_contain_displaced_vertices() {
    let mut mesh = BlobMesh::uv_sphere(1.0, 32, 16);
    for t in [0.0, 0.7, 3.1, 12.5] {
        mesh.displace(&Perlin::reference(), t);
        let bounds = mesh.bounds();
        assert!(mesh.positions().iter().all(|p| bounds.contains(*p, 1e-4)));
    }
}

#[test]
fn bounds_of_empty_set_are_degenerate() {
    let b = BoundingSphere::from_points(&[]);
    assert_eq!(b.center, Vec3::ZERO);
    assert_eq!(b.radius, 0.0);
}

#[test]
fn dirty_flag_tracks_uploads() {
    let mut mesh = BlobMesh::uv_sphere(1.0, 8, 4);
    assert!(mesh.is_dirty());
    assert!(mesh.take_dirty());
    assert!(!mesh.take_dirty());

    mesh.displace(&ConstantNoise(0.2), 1.0);
    assert!(mesh.take_dirty());
    assert!(!mesh.is_dirty());
}

#[test]
fn gpu_vertices_mirror_mesh_state() {
    let mut mesh = BlobMesh::uv_sphere(1.0, 8, 4);
    mesh.displace(&ConstantNoise(0.5), 0.0);
    let mut out = Vec::new();
    mesh.write_gpu_vertices(&mut out);
    assert_eq!(out.len(), mesh.vertex_count());
    for (i, v) in out.iter().enumerate() {
        assert_eq!(v.position, mesh.positions()[i].to_array());
        assert_eq!(v.normal, mesh.normals()[i].to_array());
        assert_eq!(v.uv, mesh.uvs()[i]);
    }
    assert_eq!(std::mem::size_of_val(&out[0]), 32);
}
