use crate::core::ViewState;
use crate::input::{self, DragMode};
use crate::{dom, overlay};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub view: Rc<RefCell<ViewState>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_dblclick(&w);
}

/// Does the camera ray through canvas pixel `pos` hit the blob's bounds?
fn hits_blob(view: &ViewState, canvas: &web::HtmlCanvasElement, pos: Vec2) -> bool {
    let (ro, rd) = view.camera.screen_to_world_ray(
        canvas.width() as f32,
        canvas.height() as f32,
        pos.x,
        pos.y,
    );
    let bounds = view.blob_world_bounds();
    input::ray_sphere(ro, rd, bounds.center, bounds.radius).is_some()
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let Some(wnd) = web::window() else {
        return;
    };
    dom::add_listener(&wnd, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let (mode, delta) = {
            let mut ds = w.drag_state.borrow_mut();
            (ds.mode, ds.advance(pos))
        };
        let height = w.canvas.height() as f32;
        match mode {
            DragMode::Orbit => {
                w.view
                    .borrow_mut()
                    .controls
                    .rotate_by_pixels(delta.x, delta.y, height);
            }
            DragMode::Blob => {
                w.view.borrow_mut().rotate_blob(delta.x, delta.y, height);
            }
            DragMode::Idle => {
                // hover feedback only
                let over = hits_blob(&w.view.borrow(), &w.canvas, pos);
                _ = w.canvas.class_list().toggle_with_force("over-blob", over);
            }
        }
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    dom::add_listener(
        &canvas_for_listener,
        "pointerdown",
        move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_px(&ev, &w.canvas);
            let on_blob = hits_blob(&w.view.borrow(), &w.canvas, pos);
            w.drag_state
                .borrow_mut()
                .begin(pos, ev.pointer_id(), on_blob);
            if on_blob {
                log::info!("[mouse] begin blob drag");
            }
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        },
    );
}

// Release and cancel both end the drag; a cancelled touch never sends pointerup.
fn wire_pointerup(w: &InputWiring) {
    let Some(wnd) = web::window() else {
        return;
    };
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        dom::add_listener(&wnd, event, move |ev: web::PointerEvent| {
            let ended = {
                let mut ds = w.drag_state.borrow_mut();
                let id = ds.pointer_id;
                (ds.end(), id)
            };
            if ended.0 != DragMode::Idle {
                _ = w.canvas.release_pointer_capture(ended.1);
            }
            if ended.0 == DragMode::Blob {
                log::info!("[mouse] end blob drag");
            }
            ev.prevent_default();
        });
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    dom::add_listener(&canvas_for_listener, "wheel", move |ev: web::WheelEvent| {
        let notches = input::wheel_notches(ev.delta_y(), ev.delta_mode());
        if notches == 0.0 {
            return;
        }
        let distance = {
            let mut v = w.view.borrow_mut();
            v.controls.zoom(notches);
            v.camera_distance()
        };
        if let Some(doc) = dom::window_document() {
            overlay::sync_panel_distance(&doc, distance);
        }
        ev.prevent_default();
    });
}

fn wire_dblclick(w: &InputWiring) {
    let canvas = w.canvas.clone();
    let canvas_for_listener = w.canvas.clone();
    dom::add_listener(&canvas_for_listener, "dblclick", move |_ev: web::MouseEvent| {
        dom::toggle_fullscreen(&canvas);
    });
}
