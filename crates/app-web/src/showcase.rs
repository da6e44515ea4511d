use crate::constants::SHOWCASE_SECTION_IDS;
use crate::dom::{self, ElementCache};
use crate::style;
use backdrop_core::{section_progress, Choreography, Target};
use web_sys as web;

/// Drives the showcase section's elements from scroll position.
pub struct ShowcaseView {
    section: web::HtmlElement,
    choreography: Choreography,
    elements: ElementCache,
    last_progress: Option<f32>,
}

impl ShowcaseView {
    /// `None` when the page has no showcase section.
    pub fn find(document: &web::Document, choreography: Choreography) -> Option<Self> {
        let section = SHOWCASE_SECTION_IDS
            .iter()
            .find_map(|id| dom::by_id(document, id))?;
        log::info!(
            "[showcase] section #{} with {} tracks",
            section.id(),
            choreography.tracks.len()
        );
        Some(Self {
            section,
            choreography,
            elements: ElementCache::new(document.clone()),
            last_progress: None,
        })
    }

    pub fn progress(&self, view_h: f32) -> f32 {
        let rect = self.section.get_bounding_client_rect();
        section_progress(
            rect.top() as f32,
            self.section.offset_height() as f32,
            view_h,
        )
    }

    /// Write styles for the current scroll position. Skips the DOM work when
    /// progress has not changed since the last write.
    pub fn update(&mut self, view_h: f32) {
        let p = self.progress(view_h);
        if self.last_progress == Some(p) {
            return;
        }
        self.last_progress = Some(p);

        let scope: &web::Element = self.section.as_ref();
        for (target, styles) in self.choreography.evaluate(p) {
            let decls = style::declarations(&styles);
            let els: &[web::HtmlElement] = match target {
                Target::Id(id) => match self.elements.id(id) {
                    Some(el) => std::slice::from_ref(el),
                    None => continue,
                },
                Target::Class(class) => self.elements.class_in(scope, class),
            };
            for el in els {
                for (prop, value) in &decls {
                    dom::set_style(el, prop, value);
                }
            }
        }
    }
}
