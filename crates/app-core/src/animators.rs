//! Frame-driven page chrome: cursor, loader, hero words, HUD meter, navbar,
//! scroll reveals, the mobile menu and count-up counters. Times are
//! milliseconds on a monotonic clock supplied by the host.

use crate::constants::*;
use crate::easing::{clamp01, ease_out_quart};
use crate::pointer::Smoothed2;
use glam::Vec2;

/// Custom cursor trailing the raw pointer in CSS pixels.
#[derive(Clone, Copy, Debug)]
pub struct CursorFollower {
    pos: Smoothed2,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            pos: Smoothed2::new(CURSOR_SMOOTHING),
        }
    }
}

impl CursorFollower {
    pub fn step(&mut self, raw_px: Option<Vec2>) -> Vec2 {
        if let Some(p) = raw_px {
            self.pos.set_target(p);
        }
        self.pos.step()
    }

    pub fn position(&self) -> Vec2 {
        self.pos.value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderStage {
    /// Waiting out the initial delay.
    Idle,
    Filling,
    /// Full; waiting before the overlay is dismissed.
    Holding,
    Dismissed,
}

/// Page loader: an asymptotic fill with a constant floor so it always
/// finishes, then a short hold before dismissal.
#[derive(Clone, Copy, Debug)]
pub struct Loader {
    value: f32,
    stage: LoaderStage,
    start_at: f64,
    full_at: f64,
}

impl Loader {
    pub fn new(now_ms: f64) -> Self {
        Self {
            value: 0.0,
            stage: LoaderStage::Idle,
            start_at: now_ms + LOADER_START_DELAY_MS,
            full_at: f64::INFINITY,
        }
    }

    /// One fill step. Returns the new value, never above 100.
    pub fn advance(value: f32) -> f32 {
        (value + (100.0 - value) * LOADER_RATE + LOADER_STEP).min(100.0)
    }

    /// Advance one frame. Returns `true` on the frame the loader is
    /// dismissed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.stage {
            LoaderStage::Idle if now_ms >= self.start_at => {
                self.stage = LoaderStage::Filling;
                self.fill(now_ms);
                false
            }
            LoaderStage::Filling => {
                self.fill(now_ms);
                false
            }
            LoaderStage::Holding if now_ms - self.full_at >= LOADER_HOLD_MS => {
                self.stage = LoaderStage::Dismissed;
                true
            }
            _ => false,
        }
    }

    fn fill(&mut self, now_ms: f64) {
        self.value = Self::advance(self.value);
        if self.value >= LOADER_DONE_AT {
            self.value = 100.0;
            self.stage = LoaderStage::Holding;
            self.full_at = now_ms;
        }
    }

    pub fn stage(&self) -> LoaderStage {
        self.stage
    }

    /// Fill width in percent.
    pub fn percent(&self) -> f32 {
        self.value
    }

    /// Integer label shown next to the bar.
    pub fn label(&self) -> u32 {
        self.value.floor() as u32
    }
}

/// Delay after the reveal trigger at which hero word `index` appears.
#[inline]
pub fn word_reveal_delay_ms(index: usize) -> f64 {
    index as f64 * WORD_STAGGER_MS + WORD_DELAY_MS
}

/// Staggered hero headline reveal.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordReveal {
    triggered_at: Option<f64>,
}

impl WordReveal {
    pub fn trigger(&mut self, now_ms: f64) {
        self.triggered_at.get_or_insert(now_ms);
    }

    /// How many of `total` words should be visible at `now_ms`.
    pub fn visible_count(&self, total: usize, now_ms: f64) -> usize {
        let Some(t0) = self.triggered_at else {
            return 0;
        };
        (0..total)
            .take_while(|&i| now_ms - t0 >= word_reveal_delay_ms(i))
            .count()
    }
}

/// Frames-per-second over windows of at least one second.
#[derive(Clone, Copy, Debug)]
pub struct FpsMeter {
    frames: u32,
    window_start: f64,
    last: Option<u32>,
}

impl FpsMeter {
    pub fn new(now_ms: f64) -> Self {
        Self {
            frames: 0,
            window_start: now_ms,
            last: None,
        }
    }

    /// Count a frame. Returns a fresh reading when a window closes.
    pub fn frame(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        let elapsed = now_ms - self.window_start;
        if elapsed < FPS_WINDOW_MS {
            return None;
        }
        let fps = (self.frames as f64 * 1000.0 / elapsed).round() as u32;
        self.frames = 0;
        self.window_start = now_ms;
        self.last = Some(fps);
        self.last
    }

    pub fn last(&self) -> Option<u32> {
        self.last
    }
}

/// `HH:MM:SS` for a wall-clock time of day.
pub fn clock_text(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours % 24, minutes % 60, seconds % 60)
}

#[inline]
pub fn navbar_scrolled(scroll_y: f32) -> bool {
    scroll_y > NAVBAR_SCROLLED_PX
}

/// Fraction of an element's height inside the viewport.
pub fn visible_fraction(rect_top: f32, rect_height: f32, view_h: f32) -> f32 {
    let bottom = rect_top + rect_height;
    let shown = bottom.min(view_h) - rect_top.max(0.0);
    clamp01(shown / rect_height)
}

/// Whether enough of an element shows above the reveal margin.
pub fn reveal_visible(rect_top: f32, rect_height: f32, view_h: f32) -> bool {
    visible_fraction(rect_top, rect_height, view_h - REVEAL_BOTTOM_MARGIN_PX) >= REVEAL_VISIBLE
}

/// Leading integer of a `data-delay` value in milliseconds. Anything
/// unparsable or negative is 0.
pub fn parse_delay_ms(raw: &str) -> f64 {
    let s = raw.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && matches!(c, '-' | '+'))))
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse::<i64>().map_or(0.0, |v| v.max(0) as f64)
}

/// One-shot reveal: armed the first frame the element is visible enough,
/// fired once its delay has passed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealOnce {
    Waiting { delay_ms: f64 },
    Scheduled { at: f64 },
    Done,
}

impl RevealOnce {
    pub fn new(delay_ms: f64) -> Self {
        Self::Waiting {
            delay_ms: if delay_ms.is_finite() { delay_ms.max(0.0) } else { 0.0 },
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// True on the single frame the element should be revealed.
    pub fn step(&mut self, rect_top: f32, rect_height: f32, view_h: f32, now_ms: f64) -> bool {
        if let Self::Waiting { delay_ms } = *self {
            if reveal_visible(rect_top, rect_height, view_h) {
                *self = Self::Scheduled { at: now_ms + delay_ms };
            }
        }
        match *self {
            Self::Scheduled { at } if now_ms >= at => {
                *self = Self::Done;
                true
            }
            _ => false,
        }
    }
}

/// Section crossing the middle band of the viewport, given `(top, height)`
/// client rects. Overlaps are strict; the largest one wins and later
/// sections win ties.
pub fn section_in_band(rects: &[(f32, f32)], view_h: f32) -> Option<usize> {
    let lo = view_h * NAV_BAND_START;
    let hi = view_h * NAV_BAND_END;
    let mut best: Option<(usize, f32)> = None;
    for (i, &(top, height)) in rects.iter().enumerate() {
        let overlap = (top + height).min(hi) - top.max(lo);
        if overlap > 0.0 && best.map_or(true, |(_, o)| overlap >= o) {
            best = Some((i, overlap));
        }
    }
    best.map(|(i, _)| i)
}

/// Nav highlight that holds the last section while none crosses the band.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActiveSection {
    current: Option<usize>,
}

impl ActiveSection {
    /// Returns the new index when the highlight moves.
    pub fn update(&mut self, rects: &[(f32, f32)], view_h: f32) -> Option<usize> {
        let next = section_in_band(rects, view_h)?;
        if self.current == Some(next) {
            return None;
        }
        self.current = Some(next);
        self.current
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }
}

/// Mobile menu open state. Scrolling the page is locked while it is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the body's `overflow` style; empty clears it.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

/// Eased count from 0 to a target, started once when the element is at
/// least half visible.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    pub target: u64,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            started_at: None,
        }
    }

    /// Start when `visible` crosses the threshold; later calls are no-ops.
    pub fn observe(&mut self, visible: f32, now_ms: f64) {
        if self.started_at.is_none() && visible >= COUNT_UP_VISIBLE {
            self.started_at = Some(now_ms);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.started_at
            .is_some_and(|t0| now_ms - t0 >= COUNT_UP_MS)
    }

    /// Displayed value, `None` before the count starts.
    pub fn value(&self, now_ms: f64) -> Option<u64> {
        let t0 = self.started_at?;
        let p = ((now_ms - t0) / COUNT_UP_MS).clamp(0.0, 1.0) as f32;
        if p >= 1.0 {
            return Some(self.target);
        }
        Some((self.target as f64 * ease_out_quart(p) as f64).floor() as u64)
    }
}

/// Decimal with `,` thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
