use crate::dom;
use crate::overlay::PageChrome;
use crate::render;
use crate::showcase::ShowcaseView;
use backdrop_core::{FrameSnapshot, InputPort, ParticleField, SharedInput};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub field: ParticleField,
    pub input: SharedInput,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub showcase: Option<ShowcaseView>,
    pub chrome: PageChrome,
    pub start: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let now_ms = (now - self.start).as_secs_f64() * 1000.0;

        let input = self.input.poll();

        if let Some(gpu) = self.gpu.as_mut() {
            if let Some(canvas) = &self.canvas {
                let (w, h) = (canvas.width(), canvas.height());
                gpu.resize_if_needed(w, h);
            }
            self.field.tick(dt_sec, &input);
            match gpu.render(&self.field.snapshot(gpu.size())) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(e) => log::error!("[frame] render error: {:?}", e),
            }
        }

        if let Some(showcase) = self.showcase.as_mut() {
            showcase.update(input.viewport.y);
        }
        self.chrome.frame(now_ms, &input);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    snapshot: &FrameSnapshot<'_>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    dom::sync_canvas_backing_size(leaked_canvas);
    match render::GpuState::new(leaked_canvas, snapshot).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let slot = tick.borrow();
    let (Some(w), Some(cb)) = (web::window(), slot.as_ref()) else {
        return;
    };
    if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::error!("[frame] requestAnimationFrame: {:?}", e);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
