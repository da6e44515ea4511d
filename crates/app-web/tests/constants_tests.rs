// Host-side checks on DOM hook names and presentation constants.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn selectors_are_well_formed() {
    assert!(HERO_WORD_SELECTOR.starts_with('.'));
    assert!(COUNTER_SELECTOR.starts_with('.'));
    assert!(COUNTER_SELECTOR.contains(COUNT_ATTR));
    assert!(PRESET_ATTR.starts_with("data-"));
    assert!(COUNT_ATTR.starts_with("data-"));
    assert!(REVEAL_SELECTOR.starts_with('[') && REVEAL_SELECTOR.ends_with(']'));
    assert!(DELAY_ATTR.starts_with("data-"));
    assert!(NAV_SECTION_ATTR.starts_with("data-"));
    assert!(NAV_LINK_SELECTOR.starts_with('.'));
    assert!(SECTION_SELECTOR.starts_with('.'));
    assert!(MOBILE_LINK_SELECTOR.starts_with('.'));
}

#[test]
fn hover_selector_lists_targets_of_both_pages() {
    let parts: Vec<&str> = HOVER_SELECTOR.split(',').map(str::trim).collect();
    assert!(parts.iter().all(|p| !p.is_empty() && !p.contains(char::is_whitespace)));
    for expected in ["a", "button", ".service-card", ".ppf-faq-question"] {
        assert!(parts.contains(&expected), "{expected}");
    }
}

#[test]
fn element_ids_are_distinct() {
    let mut ids = vec![
        CANVAS_ID,
        CURSOR_ID,
        LOADER_ID,
        LOADER_FILL_ID,
        LOADER_PERCENT_ID,
        HUD_FPS_ID,
        HUD_TIME_ID,
        NAVBAR_ID,
        HAMBURGER_ID,
        MOBILE_MENU_ID,
    ];
    ids.extend(SHOWCASE_SECTION_IDS);
    let n = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n);
    assert!(ids.iter().all(|id| !id.starts_with('#') && !id.is_empty()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn presentation_values_in_range() {
    assert!(WORDS_WITHOUT_LOADER_MS > 0.0);
    assert!(CSS_DECIMALS >= 2);
    assert_eq!(CLEAR_RGBA[3], 0.0);
}
