#![cfg(target_arch = "wasm32")]
use crate::core::ViewState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move |_ev: web::Event| {
            let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
            log::debug!("[resize] backing {}x{}", w, h);
        });
    }
}

// Seed for color randomization; differs per page load
fn session_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blob-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let view = Rc::new(RefCell::new(ViewState::new(session_seed())));
    {
        let v = view.borrow();
        log::info!(
            "[view] blob vertices={} triangles={} environment={}",
            v.mesh.vertex_count(),
            v.mesh.triangle_count(),
            v.environment().name
        );
    }

    let gpu = frame::init_gpu(&canvas, &view).await;

    // Keyboard controls and overlays
    events::wire_global_keydown(view.clone(), canvas.clone());
    events::wire_help_toggle_h(&document);
    overlay::mount_debug_panel(&document, view.clone());
    {
        let v = view.borrow();
        overlay::update_hint(&document, v.environment().name, v.animate());
    }

    // Orbit/blob drag, wheel zoom, double-click fullscreen
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        view: view.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    // Displacement + controls + draw, driven by requestAnimationFrame
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        view,
        canvas,
        gpu,
        start_instant: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
