// CSS text for choreography styles and page chrome.
// Pure string formatting so it can be tested on the host.

use crate::constants::CSS_DECIMALS;
use backdrop_core::ElementStyle;
use glam::Vec2;

/// Shortest decimal form with at most `CSS_DECIMALS` places: `0.8`, `-20`, `1.3`.
pub fn css_number(v: f32) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let s = format!("{:.*}", CSS_DECIMALS, v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

pub fn transform_css(s: &ElementStyle) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(v) = s.scale {
        parts.push(format!("scale({})", css_number(v)));
    }
    if let Some(v) = s.translate_x {
        parts.push(format!("translateX({}px)", css_number(v)));
    }
    if let Some(v) = s.translate_y {
        parts.push(format!("translateY({}px)", css_number(v)));
    }
    (!parts.is_empty()).then(|| parts.join(" "))
}

pub fn filter_css(s: &ElementStyle) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(v) = s.brightness {
        parts.push(format!("brightness({})", css_number(v)));
    }
    if let Some(v) = s.contrast {
        parts.push(format!("contrast({})", css_number(v)));
    }
    (!parts.is_empty()).then(|| parts.join(" "))
}

/// Every `(property, value)` pair an element style sets.
pub fn declarations(s: &ElementStyle) -> Vec<(&'static str, String)> {
    let mut out = Vec::with_capacity(4);
    if let Some(v) = s.opacity {
        out.push(("opacity", css_number(v)));
    }
    if let Some(t) = transform_css(s) {
        out.push(("transform", t));
    }
    if let Some(f) = filter_css(s) {
        out.push(("filter", f));
    }
    if let Some(h) = s.height_pct {
        out.push(("height", format!("{}%", css_number(h))));
    }
    out
}

pub fn translate_px(p: Vec2) -> String {
    format!("translate({}px, {}px)", css_number(p.x), css_number(p.y))
}

pub fn percent(v: f32) -> String {
    format!("{}%", css_number(v))
}

pub fn fps_text(fps: u32) -> String {
    format!("{} FPS", fps)
}
