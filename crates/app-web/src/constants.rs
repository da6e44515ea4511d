// DOM hooks and presentation constants for the page front-end

// Backdrop canvas and preset selection (`<body data-backdrop="detail">`)
pub const CANVAS_ID: &str = "three-canvas";
pub const PRESET_ATTR: &str = "data-backdrop";

// Showcase section; the landing and detail pages use different ids
pub const SHOWCASE_SECTION_IDS: [&str; 2] = ["showcase", "ppf-showcase"];

// Page chrome
pub const CURSOR_ID: &str = "cursor";
pub const LOADER_ID: &str = "loader";
pub const LOADER_FILL_ID: &str = "loader-fill";
pub const LOADER_PERCENT_ID: &str = "loader-percent";
pub const HERO_WORD_SELECTOR: &str = ".title-word";
pub const HUD_FPS_ID: &str = "hud-fps";
pub const HUD_TIME_ID: &str = "hud-time";
pub const NAVBAR_ID: &str = "navbar";
pub const COUNTER_SELECTOR: &str = ".tele-value[data-count]";
pub const COUNT_ATTR: &str = "data-count";
pub const REVEAL_SELECTOR: &str = "[data-animate=\"reveal\"]";
pub const DELAY_ATTR: &str = "data-delay";

// Navigation; each link names its section in `data-section`
pub const SECTION_SELECTOR: &str = ".section";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_SECTION_ATTR: &str = "data-section";
pub const HAMBURGER_ID: &str = "hamburger";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_LINK_SELECTOR: &str = ".mobile-link";

// Elements that grow the custom cursor, across both pages
pub const HOVER_SELECTOR: &str = "a, button, input, textarea, select, .service-card, \
.gallery-item, .filter-btn, .slider-btn, .social-link, .ppf-benefit-card, .ppf-package-card, \
.ppf-faq-question";

// Classes toggled on page chrome
pub const CLASS_LOADED: &str = "loaded";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ANIMATED: &str = "animated";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_CURSOR_HOVER: &str = "cursor-hover";

// Pages without a loader reveal hero words this long after start
pub const WORDS_WITHOUT_LOADER_MS: f64 = 300.0;

// Decimal places kept in generated CSS numbers
pub const CSS_DECIMALS: usize = 4;

// Surface clear; transparent so the page background shows through
pub const CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
