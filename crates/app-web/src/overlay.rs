use crate::constants::*;
use crate::dom;
use crate::style;
use backdrop_core::{
    clock_text, group_thousands, navbar_scrolled, parse_delay_ms, visible_fraction, ActiveSection,
    CountUp, CursorFollower, FpsMeter, FrameInput, Loader, LoaderStage, RevealOnce, WordReveal,
};
use web_sys as web;

struct Counter {
    el: web::HtmlElement,
    count: CountUp,
    finished: bool,
}

struct Reveal {
    el: web::HtmlElement,
    state: RevealOnce,
}

struct NavLink {
    el: web::HtmlElement,
    section: String,
}

struct LoaderView {
    root: web::HtmlElement,
    fill: Option<web::HtmlElement>,
    percent: Option<web::HtmlElement>,
    loader: Loader,
}

/// Page chrome that animates on the frame loop: cursor, loader, hero words,
/// HUD readouts, navbar state, scroll reveals and counters. Every element is
/// optional.
pub struct PageChrome {
    body: Option<web::HtmlElement>,
    cursor_el: Option<web::HtmlElement>,
    cursor: CursorFollower,
    hover_on: Option<bool>,
    loader: Option<LoaderView>,
    words: Vec<web::HtmlElement>,
    reveal: WordReveal,
    shown_words: usize,
    fps_el: Option<web::HtmlElement>,
    time_el: Option<web::HtmlElement>,
    fps: FpsMeter,
    last_clock: String,
    navbar: Option<web::HtmlElement>,
    navbar_on: Option<bool>,
    sections: Vec<web::HtmlElement>,
    nav_links: Vec<NavLink>,
    active: ActiveSection,
    reveals: Vec<Reveal>,
    counters: Vec<Counter>,
}

impl PageChrome {
    pub fn new(document: &web::Document, now_ms: f64) -> Self {
        let loader = dom::by_id(document, LOADER_ID).map(|root| LoaderView {
            root,
            fill: dom::by_id(document, LOADER_FILL_ID),
            percent: dom::by_id(document, LOADER_PERCENT_ID),
            loader: Loader::new(now_ms),
        });
        let mut reveal = WordReveal::default();
        if loader.is_none() {
            reveal.trigger(now_ms + WORDS_WITHOUT_LOADER_MS);
        }

        let counters: Vec<Counter> = document
            .document_element()
            .map(|root| dom::query_all(&root, COUNTER_SELECTOR))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|el| {
                let target = el.get_attribute(COUNT_ATTR)?.trim().parse::<u64>().ok()?;
                Some(Counter {
                    el,
                    count: CountUp::new(target),
                    finished: false,
                })
            })
            .collect();

        let all = |selector: &str| {
            document
                .document_element()
                .map(|root| dom::query_all(&root, selector))
                .unwrap_or_default()
        };
        let words = all(HERO_WORD_SELECTOR);
        let reveals: Vec<Reveal> = all(REVEAL_SELECTOR)
            .into_iter()
            .map(|el| {
                let delay = el.get_attribute(DELAY_ATTR).map_or(0.0, |d| parse_delay_ms(&d));
                Reveal {
                    el,
                    state: RevealOnce::new(delay),
                }
            })
            .collect();
        let nav_links: Vec<NavLink> = all(NAV_LINK_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let section = el.get_attribute(NAV_SECTION_ATTR)?;
                Some(NavLink { el, section })
            })
            .collect();
        let sections = all(SECTION_SELECTOR);

        log::info!(
            "[chrome] loader={} words={} reveals={} sections={} nav_links={} counters={}",
            loader.is_some(),
            words.len(),
            reveals.len(),
            sections.len(),
            nav_links.len(),
            counters.len()
        );

        Self {
            body: document.body(),
            cursor_el: dom::by_id(document, CURSOR_ID),
            cursor: CursorFollower::default(),
            hover_on: None,
            loader,
            words,
            reveal,
            shown_words: 0,
            fps_el: dom::by_id(document, HUD_FPS_ID),
            time_el: dom::by_id(document, HUD_TIME_ID),
            fps: FpsMeter::new(now_ms),
            last_clock: String::new(),
            navbar: dom::by_id(document, NAVBAR_ID),
            navbar_on: None,
            sections,
            nav_links,
            active: ActiveSection::default(),
            reveals,
            counters,
        }
    }

    pub fn frame(&mut self, now_ms: f64, input: &FrameInput) {
        self.step_cursor(input);
        self.step_loader(now_ms);
        self.step_words(now_ms);
        self.step_hud(now_ms);
        self.step_navbar(input.scroll_y);
        self.step_nav_links(input.viewport.y);
        self.step_reveals(now_ms, input.viewport.y);
        self.step_counters(now_ms, input.viewport.y);
    }

    fn step_cursor(&mut self, input: &FrameInput) {
        let pos = self.cursor.step(input.pointer_px);
        if let Some(el) = &self.cursor_el {
            dom::set_style(el, "transform", &style::translate_px(pos));
        }
        if self.hover_on != Some(input.hovering) {
            if let Some(body) = &self.body {
                dom::set_class(body, CLASS_CURSOR_HOVER, input.hovering);
            }
            self.hover_on = Some(input.hovering);
        }
    }

    fn step_loader(&mut self, now_ms: f64) {
        let Some(view) = &mut self.loader else {
            return;
        };
        if view.loader.stage() == LoaderStage::Dismissed {
            return;
        }
        let dismissed = view.loader.tick(now_ms);
        if let Some(fill) = &view.fill {
            dom::set_style(fill, "width", &style::percent(view.loader.percent()));
        }
        if let Some(label) = &view.percent {
            dom::set_text(label, &format!("{}%", view.loader.label()));
        }
        if dismissed {
            dom::set_class(&view.root, CLASS_LOADED, true);
            self.reveal.trigger(now_ms);
            log::info!("[chrome] loader dismissed");
        }
    }

    fn step_words(&mut self, now_ms: f64) {
        let visible = self.reveal.visible_count(self.words.len(), now_ms);
        if visible <= self.shown_words {
            return;
        }
        for word in &self.words[self.shown_words..visible] {
            dom::set_class(word, CLASS_VISIBLE, true);
        }
        self.shown_words = visible;
    }

    fn step_hud(&mut self, now_ms: f64) {
        if let Some(el) = &self.time_el {
            let d = js_sys::Date::new_0();
            let text = clock_text(d.get_hours(), d.get_minutes(), d.get_seconds());
            if text != self.last_clock {
                dom::set_text(el, &text);
                self.last_clock = text;
            }
        }
        if let Some(fps) = self.fps.frame(now_ms) {
            if let Some(el) = &self.fps_el {
                dom::set_text(el, &style::fps_text(fps));
            }
        }
    }

    fn step_navbar(&mut self, scroll_y: f32) {
        let Some(nav) = &self.navbar else {
            return;
        };
        let on = navbar_scrolled(scroll_y);
        if self.navbar_on != Some(on) {
            dom::set_class(nav, CLASS_SCROLLED, on);
            self.navbar_on = Some(on);
        }
    }

    fn step_nav_links(&mut self, view_h: f32) {
        if self.nav_links.is_empty() {
            return;
        }
        let rects: Vec<(f32, f32)> = self
            .sections
            .iter()
            .map(|s| {
                let r = s.get_bounding_client_rect();
                (r.top() as f32, r.height() as f32)
            })
            .collect();
        let Some(section) = self
            .active
            .update(&rects, view_h)
            .and_then(|i| self.sections.get(i))
        else {
            return;
        };
        let id = section.id();
        for link in &self.nav_links {
            dom::set_class(&link.el, CLASS_ACTIVE, link.section == id);
        }
    }

    fn step_reveals(&mut self, now_ms: f64, view_h: f32) {
        self.reveals.retain_mut(|r| {
            let rect = r.el.get_bounding_client_rect();
            if r.state
                .step(rect.top() as f32, rect.height() as f32, view_h, now_ms)
            {
                dom::set_class(&r.el, CLASS_ANIMATED, true);
            }
            !r.state.is_done()
        });
    }

    fn step_counters(&mut self, now_ms: f64, view_h: f32) {
        for c in self.counters.iter_mut().filter(|c| !c.finished) {
            if !c.count.is_started() {
                let rect = c.el.get_bounding_client_rect();
                c.count
                    .observe(visible_fraction(rect.top() as f32, rect.height() as f32, view_h), now_ms);
            }
            if let Some(v) = c.count.value(now_ms) {
                dom::set_text(&c.el, &group_thousands(v));
                c.finished = c.count.is_done(now_ms);
            }
        }
    }
}
