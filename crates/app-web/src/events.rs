use crate::constants::*;
use crate::dom;
use backdrop_core::{client_to_ndc, MobileMenu, SharedInput};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Listeners only record the newest sample; the frame loop consumes it.
#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub input: SharedInput,
}

pub fn wire_input_handlers(w: InputWiring) {
    w.input.set_scroll(dom::scroll_y());
    let vp = dom::viewport_css();
    w.input.set_viewport(vp.x, vp.y);

    wire_mousemove(&w);
    wire_hover(&w);
    wire_scroll(&w);
    wire_resize(&w);
}

fn listen(target: &web::EventTarget, kind: &str, closure: Closure<dyn FnMut(web::MouseEvent)>) {
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
        log::warn!("[events] {} listener: {:?}", kind, e);
    }
    closure.forget();
}

/// Tracks whether the pointer sits inside any hover target. `mouseover`
/// bubbles, so one document listener covers nested targets.
fn wire_hover(w: &InputWiring) {
    let input = w.input.clone();
    let over = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(HOVER_SELECTOR).ok().flatten())
            .is_some();
        input.set_hovering(inside);
    }) as Box<dyn FnMut(_)>);
    listen(&w.document, "mouseover", over);

    let input = w.input.clone();
    let out = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // leaving the window
        if ev.related_target().is_none() {
            input.set_hovering(false);
        }
    }) as Box<dyn FnMut(_)>);
    listen(&w.document, "mouseout", out);
}

fn wire_mousemove(w: &InputWiring) {
    let input = w.input.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let vp = dom::viewport_css();
        input.set_pointer(client, client_to_ndc(client.x, client.y, vp.x, vp.y));
    }) as Box<dyn FnMut(_)>);
    listen(&w.document, "mousemove", closure);
}

fn wire_scroll(w: &InputWiring) {
    let input = w.input.clone();
    let closure = Closure::wrap(Box::new(move || {
        input.set_scroll(dom::scroll_y());
    }) as Box<dyn FnMut()>);
    if let Err(e) = w
        .window
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] scroll listener: {:?}", e);
    }
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let input = w.input.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let vp = dom::viewport_css();
        input.set_viewport(vp.x, vp.y);
        if let Some(c) = &canvas {
            dom::sync_canvas_backing_size(c);
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) = w
        .window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] resize listener: {:?}", e);
    }
    closure.forget();
}

fn apply_menu(menu: &MobileMenu, document: &web::Document) {
    let open = menu.is_open();
    for id in [HAMBURGER_ID, MOBILE_MENU_ID] {
        if let Some(el) = dom::by_id(document, id) {
            dom::set_class(&el, CLASS_ACTIVE, open);
        }
    }
    if let Some(body) = document.body() {
        dom::set_style(&body, "overflow", menu.body_overflow());
    }
}

/// Hamburger toggles the mobile menu; any menu link closes it. Clicks act
/// immediately rather than on the next frame.
pub fn wire_mobile_menu(document: &web::Document) {
    let Some(hamburger) = dom::by_id(document, HAMBURGER_ID) else {
        return;
    };
    let menu = Rc::new(RefCell::new(MobileMenu::default()));

    let (state, doc) = (menu.clone(), document.clone());
    let toggle = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        let mut m = state.borrow_mut();
        m.toggle();
        apply_menu(&m, &doc);
    }) as Box<dyn FnMut(_)>);
    listen(&hamburger, "click", toggle);

    let links = document
        .document_element()
        .map(|root| dom::query_all(&root, MOBILE_LINK_SELECTOR))
        .unwrap_or_default();
    for link in &links {
        let (state, doc) = (menu.clone(), document.clone());
        let close = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            let mut m = state.borrow_mut();
            m.close();
            apply_menu(&m, &doc);
        }) as Box<dyn FnMut(_)>);
        listen(link, "click", close);
    }
    log::info!("[events] mobile menu wired with {} links", links.len());
}
