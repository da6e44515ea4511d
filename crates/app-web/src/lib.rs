#![cfg(target_arch = "wasm32")]
use backdrop_core::{Choreography, FieldConfig, FrameInput, ParticleField, SharedInput};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod showcase;
mod style;

use constants::{CANVAS_ID, PRESET_ATTR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

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

    let preset = document
        .body()
        .and_then(|b| b.get_attribute(PRESET_ATTR))
        .unwrap_or_default();
    let field = ParticleField::new(FieldConfig::preset(&preset))
        .map_err(|e| anyhow::anyhow!("field config: {e}"))?;

    // The canvas is optional; without it the page chrome still animates.
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    if canvas.is_none() {
        log::warn!("missing #{}; backdrop disabled", CANVAS_ID);
    }

    let viewport = dom::viewport_css();
    let input = SharedInput::new(FrameInput {
        scroll_y: dom::scroll_y(),
        viewport,
        ..FrameInput::default()
    });
    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        input: input.clone(),
    });
    events::wire_mobile_menu(&document);

    let gpu = match &canvas {
        Some(c) => frame::init_gpu(c, &field.snapshot(Vec2::ONE)).await,
        None => None,
    };

    let showcase = showcase::ShowcaseView::find(&document, Choreography::showcase());
    let start = Instant::now();
    let chrome = overlay::PageChrome::new(&document, 0.0);

    log::info!(
        "[init] preset={:?} particles={} gpu={} showcase={}",
        if preset.is_empty() { "home" } else { preset.as_str() },
        field.particles().len(),
        gpu.is_some(),
        showcase.is_some()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        input,
        gpu,
        canvas,
        showcase,
        chrome,
        start,
        last_instant: start,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
