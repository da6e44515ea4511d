use fnv::FnvHashMap;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the new backing size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}

/// Window inner size in CSS pixels.
pub fn viewport_css() -> Vec2 {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Vec2::new(width as f32, height as f32)
        })
        .unwrap_or(Vec2::ZERO)
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

pub fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All `HtmlElement`s under `root` matching `selector`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_text(el: &web::HtmlElement, text: &str) {
    el.set_text_content(Some(text));
}

/// Lookups resolved once and reused every frame. Misses are remembered too;
/// the page markup is static.
pub struct ElementCache {
    document: web::Document,
    by_id: FnvHashMap<&'static str, Option<web::HtmlElement>>,
    by_class: FnvHashMap<&'static str, Vec<web::HtmlElement>>,
}

impl ElementCache {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            by_id: FnvHashMap::default(),
            by_class: FnvHashMap::default(),
        }
    }

    pub fn id(&mut self, id: &'static str) -> Option<&web::HtmlElement> {
        let document = &self.document;
        self.by_id
            .entry(id)
            .or_insert_with(|| by_id(document, id))
            .as_ref()
    }

    /// Elements carrying `class` inside `scope`.
    pub fn class_in(&mut self, scope: &web::Element, class: &'static str) -> &[web::HtmlElement] {
        self.by_class
            .entry(class)
            .or_insert_with(|| query_all(scope, &format!(".{class}")))
    }
}
