use crate::core::camera::Camera;
use crate::core::constants::{
    BLOB_HEIGHT_SEGMENTS, BLOB_RADIUS, BLOB_WIDTH_SEGMENTS, DEFAULT_BLOB_COLOR, DISTANCE_STEP,
    MAX_DISTANCE, MIN_DISTANCE,
};
use crate::core::controls::OrbitControls;
use crate::core::environment::{Environment, EnvironmentCycle};
use crate::core::mesh::{BlobMesh, BoundingSphere};
use crate::core::noise::Perlin;
use glam::{Mat4, Quat, Vec3};
use rand::prelude::*;
use rand::rngs::StdRng;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::TAU;

/// Discrete changes to the view that user input can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    RandomizeColor,
    ResetColor,
    /// Pauses or resumes the blob animation; camera auto-rotation follows it.
    ToggleAnimation,
    NextEnvironment,
    PreviousEnvironment,
}

/// View actions bound to a `KeyboardEvent.key` value.
pub fn actions_for_key(key: &str) -> SmallVec<[ViewAction; 2]> {
    match key {
        "z" | "Z" => smallvec![ViewAction::RandomizeColor],
        "x" | "X" => smallvec![ViewAction::ResetColor],
        " " => smallvec![ViewAction::ToggleAnimation],
        "ArrowRight" => smallvec![ViewAction::NextEnvironment],
        "ArrowLeft" => smallvec![ViewAction::PreviousEnvironment],
        _ => SmallVec::new(),
    }
}

/// Key handling for a keydown event. Keys typed into a form control (the
/// debug panel slider) stay with that control.
pub fn actions_for_keydown(key: &str, target_is_input: bool) -> SmallVec<[ViewAction; 2]> {
    if target_is_input {
        SmallVec::new()
    } else {
        actions_for_key(key)
    }
}

/// Snap a requested camera distance to the panel's step grid and bounds.
pub fn snap_distance(distance: f32) -> f32 {
    if !distance.is_finite() {
        return MIN_DISTANCE;
    }
    let steps = ((distance - MIN_DISTANCE) / DISTANCE_STEP).round();
    (MIN_DISTANCE + steps * DISTANCE_STEP).clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Everything the view mutates: the blob, the camera rig and the user toggles.
pub struct ViewState {
    pub mesh: BlobMesh,
    pub noise: Perlin,
    pub controls: OrbitControls,
    pub camera: Camera,
    environments: EnvironmentCycle,
    animate: bool,
    blob_color: [f32; 3],
    blob_rotation: Quat,
    rng: StdRng,
}

impl ViewState {
    pub fn new(seed: u64) -> Self {
        // animation starts on, and auto-rotation follows it
        let mut controls = OrbitControls::default();
        controls.auto_rotate = true;
        let camera = Camera {
            eye: controls.eye(),
            target: controls.target,
            ..Camera::default()
        };
        Self {
            mesh: BlobMesh::uv_sphere(BLOB_RADIUS, BLOB_WIDTH_SEGMENTS, BLOB_HEIGHT_SEGMENTS),
            noise: Perlin::reference(),
            controls,
            camera,
            environments: EnvironmentCycle::default(),
            animate: true,
            blob_color: DEFAULT_BLOB_COLOR,
            blob_rotation: Quat::IDENTITY,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_mesh(mut self, mesh: BlobMesh) -> Self {
        self.mesh = mesh;
        self
    }

    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn blob_color(&self) -> [f32; 3] {
        self.blob_color
    }

    pub fn environment_index(&self) -> usize {
        self.environments.index()
    }

    pub fn environment(&self) -> &'static Environment {
        self.environments.environment()
    }

    pub fn camera_distance(&self) -> f32 {
        self.controls.distance()
    }

    /// Applies one action. Returns whether any state changed.
    pub fn apply(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::RandomizeColor => {
                self.blob_color = [self.rng.gen(), self.rng.gen(), self.rng.gen()];
                true
            }
            ViewAction::ResetColor => {
                let changed = self.blob_color != DEFAULT_BLOB_COLOR;
                self.blob_color = DEFAULT_BLOB_COLOR;
                changed
            }
            ViewAction::ToggleAnimation => {
                self.animate = !self.animate;
                self.controls.auto_rotate = self.animate;
                true
            }
            ViewAction::NextEnvironment => {
                let before = self.environments.index();
                self.environments.next() != before
            }
            ViewAction::PreviousEnvironment => {
                let before = self.environments.index();
                self.environments.previous() != before
            }
        }
    }

    /// Debug panel write: snapped to the step grid, clamped to the bounds.
    /// Returns the distance actually applied.
    pub fn set_camera_distance(&mut self, distance: f32) -> f32 {
        let d = snap_distance(distance);
        self.controls.set_distance(d);
        self.sync_camera();
        d
    }

    /// Turns the blob under a pointer drag: horizontal motion spins it about
    /// the camera's up axis, vertical motion about the camera's right axis.
    pub fn rotate_blob(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let yaw = Quat::from_axis_angle(self.camera.true_up(), TAU * dx / h);
        let pitch = Quat::from_axis_angle(self.camera.right(), TAU * dy / h);
        if yaw.is_finite() && pitch.is_finite() {
            self.blob_rotation = (yaw * pitch * self.blob_rotation).normalize();
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.blob_rotation)
    }

    /// Bounding sphere of the blob in world space.
    pub fn blob_world_bounds(&self) -> BoundingSphere {
        let b = self.mesh.bounds();
        BoundingSphere {
            center: self.blob_rotation * b.center,
            radius: b.radius,
        }
    }

    /// Per-frame update, in order: vertex displacement (only while animating)
    /// at `elapsed_sec`, then the camera rig. Returns whether the mesh changed.
    pub fn step(&mut self, elapsed_sec: f32, dt_sec: f32) -> bool {
        if self.animate {
            self.mesh.displace(&self.noise, elapsed_sec);
        }
        self.controls.update(dt_sec);
        self.sync_camera();
        self.animate
    }

    fn sync_camera(&mut self) {
        self.camera.eye = self.controls.eye();
        self.camera.target = self.controls.target;
    }

    pub fn camera_eye(&self) -> Vec3 {
        self.camera.eye
    }
}
