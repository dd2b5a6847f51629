use crate::core::constants::{CAMERA_START_DISTANCE, MAX_DISTANCE, MIN_DISTANCE};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

// Keeps the polar angle off the poles so the look-at basis stays defined.
const POLAR_EPSILON: f32 = 1.0e-6;
// Zoom factor per wheel notch.
const ZOOM_SCALE_PER_NOTCH: f32 = 0.95;

/// Orbit camera rig: the eye sits on a sphere around `target`.
///
/// Drag and auto-rotation accumulate into pending angle deltas which
/// [`OrbitControls::update`] applies. With damping enabled only a fraction of
/// the pending delta is applied per update and the remainder decays, which
/// gives the camera its glide after the pointer is released.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    radius: f32,
    // polar angle from +Y
    phi: f32,
    // azimuth around +Y, zero on +Z
    theta: f32,
    pending_theta: f32,
    pending_phi: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, CAMERA_START_DISTANCE), Vec3::ZERO)
    }
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let (phi, theta) = if radius > 0.0 {
            (
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
                offset.x.atan2(offset.z),
            )
        } else {
            (PI * 0.5, 0.0)
        };
        Self {
            target,
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            radius,
            phi: phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON),
            theta,
            pending_theta: 0.0,
            pending_phi: 0.0,
        }
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.radius = distance.clamp(self.min_distance, self.max_distance);
    }

    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    pub fn azimuth_angle(&self) -> f32 {
        self.theta
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_phi * self.theta.sin(),
                    self.phi.cos(),
                    sin_phi * self.theta.cos(),
                )
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.pending_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.pending_phi -= angle;
    }

    /// Pointer drag of `dx`, `dy` pixels on a viewport `viewport_height` pixels
    /// tall. A drag across the full height turns the rig one revolution.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.rotate_left(TAU * dx / h * self.rotate_speed);
        self.rotate_up(TAU * dy / h * self.rotate_speed);
    }

    /// Positive notches move away from the target, negative move closer.
    /// Applied immediately and clamped to the distance limits.
    pub fn zoom(&mut self, notches: f32) {
        let scale = ZOOM_SCALE_PER_NOTCH.powf(notches);
        self.set_distance(self.radius / scale);
    }

    /// Advances the rig by `dt_sec`. Returns whether the eye moved.
    /// Zoom does not go through here, see [`OrbitControls::zoom`].
    pub fn update(&mut self, dt_sec: f32) -> bool {
        let before = (self.phi, self.theta);

        if self.auto_rotate {
            self.rotate_left(TAU / 60.0 * self.auto_rotate_speed * dt_sec.max(0.0));
        }

        let gain = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        self.theta += self.pending_theta * gain;
        self.phi = (self.phi + self.pending_phi * gain).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.theta = wrap_angle(self.theta);

        if self.enable_damping {
            self.pending_theta *= 1.0 - self.damping_factor;
            self.pending_phi *= 1.0 - self.damping_factor;
        } else {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
        }

        const EPS: f32 = 1.0e-6;
        (self.phi - before.0).abs() > EPS || (self.theta - before.1).abs() > EPS
    }
}

#[inline]
fn wrap_angle(a: f32) -> f32 {
    if (-PI..=PI).contains(&a) {
        a
    } else {
        (a + PI).rem_euclid(TAU) - PI
    }
}
