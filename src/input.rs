use crate::constants::{WHEEL_LINES_PER_NOTCH, WHEEL_PIXELS_PER_NOTCH};
use glam::{Vec2, Vec3};
use web_sys as web;

/// What a pointer press turned into.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Idle,
    Orbit,
    Blob,
}

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub mode: DragMode,
    pub last: Vec2,
    pub pointer_id: i32,
}

impl DragState {
    pub fn active(&self) -> bool {
        self.mode != DragMode::Idle
    }

    /// Starts a drag at `pos`; `hits_blob` decides whether the blob or the camera moves.
    pub fn begin(&mut self, pos: Vec2, pointer_id: i32, hits_blob: bool) {
        self.mode = if hits_blob {
            DragMode::Blob
        } else {
            DragMode::Orbit
        };
        self.last = pos;
        self.pointer_id = pointer_id;
    }

    /// Pointer motion since the previous call; zero when no drag is active.
    pub fn advance(&mut self, pos: Vec2) -> Vec2 {
        if !self.active() {
            return Vec2::ZERO;
        }
        let delta = pos - self.last;
        self.last = pos;
        delta
    }

    pub fn end(&mut self) -> DragMode {
        std::mem::take(&mut self.mode)
    }
}

/// Distance along the ray to the first sphere hit. An origin inside the
/// sphere counts as a hit at 0.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Zoom notches for a wheel delta; `delta_mode` follows `WheelEvent.deltaMode`
/// (0 pixels, 1 lines, 2 pages). Positive means zoom out.
#[inline]
pub fn wheel_notches(delta_y: f64, delta_mode: u32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        0 => d / WHEEL_PIXELS_PER_NOTCH,
        1 => d / WHEEL_LINES_PER_NOTCH,
        _ if d == 0.0 => 0.0,
        _ => d.signum(),
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
