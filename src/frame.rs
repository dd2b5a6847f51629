use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::ViewState;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub view: Rc<RefCell<ViewState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub start_instant: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    /// One animation frame: displacement (if enabled), controls, draw.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let elapsed_sec = (now - self.start_instant).as_secs_f32();

        let mut view = self.view.borrow_mut();
        view.step(elapsed_sec, dt_sec);

        let w = self.canvas.width();
        let h = self.canvas.height();
        view.camera.set_viewport(w, h);

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(w, h);
        if view.mesh.take_dirty() {
            g.upload_blob(&view.mesh);
        }
        let params = render::DrawParams {
            view_proj: view.camera.view_projection(),
            model: view.model_matrix(),
            eye: view.camera_eye(),
            tint: view.blob_color(),
            environment: view.environment_index(),
            time_sec: elapsed_sec,
        };
        drop(view);
        match g.render(&params) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost; reconfiguring");
                g.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    view: &Rc<RefCell<ViewState>>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let result = {
        let v = view.borrow();
        render::GpuState::new(leaked_canvas, &v.mesh).await
    };
    match result {
        Ok(g) => {
            log::info!("[gpu] ready {:?}", g.size());
            Some(g)
        }
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
