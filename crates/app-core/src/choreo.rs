//! Scroll-driven phase choreography for the showcase section.
//!
//! A single progress scalar in `[0, 1]` is mapped through overlapping phase
//! windows. Each window re-normalizes progress to its own `[0, 1]`, eases it,
//! and interpolates one visual channel of one element. Evaluation is a pure
//! function of progress, so any progress value can be re-applied at any time.

use crate::easing::{clamp01, lerp, ratio01, Easing};
use crate::error::ConfigError;

/// Sub-range of section progress within which a track animates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseWindow {
    pub start: f32,
    pub end: f32,
}

impl PhaseWindow {
    pub const FULL: Self = Self::new(0.0, 1.0);

    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Progress re-normalized into this window, clamped to `[0, 1]`.
    #[inline]
    pub fn progress(&self, p: f32) -> f32 {
        ratio01(p - self.start, self.end - self.start)
    }

    #[inline]
    pub fn eased(&self, p: f32, easing: Easing) -> f32 {
        easing.apply(self.progress(p))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.start >= 0.0 && self.end <= 1.0 && self.end > self.start;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidPhaseWindow {
                start: self.start,
                end: self.end,
            })
        }
    }
}

/// How far the viewport has scrolled through a section taller than the
/// viewport: 0 when its top meets the viewport top, 1 when its bottom meets
/// the viewport bottom.
pub fn section_progress(rect_top: f32, section_h: f32, view_h: f32) -> f32 {
    ratio01(-rect_top, section_h - view_h)
}

/// Which DOM nodes a track writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// `getElementById`
    Id(&'static str),
    /// Every element with this class inside the section.
    Class(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Opacity,
    Scale,
    /// Pixels.
    TranslateX,
    /// Pixels.
    TranslateY,
    Brightness,
    Contrast,
    /// Percent of the parent's height.
    HeightPct,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub target: Target,
    pub window: PhaseWindow,
    pub easing: Easing,
    pub channel: Channel,
    pub from: f32,
    pub to: f32,
}

impl Track {
    pub const fn new(
        target: Target,
        window: PhaseWindow,
        easing: Easing,
        channel: Channel,
        from: f32,
        to: f32,
    ) -> Self {
        Self {
            target,
            window,
            easing,
            channel,
            from,
            to,
        }
    }

    /// A channel pinned to `value` at every progress.
    pub const fn constant(target: Target, channel: Channel, value: f32) -> Self {
        Self::new(target, PhaseWindow::FULL, Easing::Linear, channel, value, value)
    }

    #[inline]
    pub fn value(&self, p: f32) -> f32 {
        let t = self.window.eased(p, self.easing);
        lerp(self.from, self.to, t)
    }
}

/// Channel values for one element. `None` means no track touches it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementStyle {
    pub opacity: Option<f32>,
    pub scale: Option<f32>,
    pub translate_x: Option<f32>,
    pub translate_y: Option<f32>,
    pub brightness: Option<f32>,
    pub contrast: Option<f32>,
    pub height_pct: Option<f32>,
}

impl ElementStyle {
    fn slot(&mut self, channel: Channel) -> &mut Option<f32> {
        match channel {
            Channel::Opacity => &mut self.opacity,
            Channel::Scale => &mut self.scale,
            Channel::TranslateX => &mut self.translate_x,
            Channel::TranslateY => &mut self.translate_y,
            Channel::Brightness => &mut self.brightness,
            Channel::Contrast => &mut self.contrast,
            Channel::HeightPct => &mut self.height_pct,
        }
    }

    /// Contributions to the same channel sum.
    pub fn add(&mut self, channel: Channel, value: f32) {
        let slot = self.slot(channel);
        *slot = Some(slot.unwrap_or(0.0) + value);
    }

    pub fn get(&self, channel: Channel) -> Option<f32> {
        match channel {
            Channel::Opacity => self.opacity,
            Channel::Scale => self.scale,
            Channel::TranslateX => self.translate_x,
            Channel::TranslateY => self.translate_y,
            Channel::Brightness => self.brightness,
            Channel::Contrast => self.contrast,
            Channel::HeightPct => self.height_pct,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Choreography {
    pub tracks: Vec<Track>,
}

impl Choreography {
    pub fn new(tracks: Vec<Track>) -> Result<Self, ConfigError> {
        let c = Self { tracks };
        c.validate()?;
        Ok(c)
    }

    /// The car showcase: reveal, HUD, data strip, detail inset and a late
    /// brightness punch layered over the reveal.
    #[rustfmt::skip]
    pub fn showcase() -> Self {
        use Channel::*;
        use Easing::{Linear, OutCubic};
        let car = Target::Id("showcase-car");
        let top_left = Target::Class("shud-top-left");
        let center = Target::Class("shud-center");
        let data = Target::Id("shud-data");
        let detail = Target::Id("showcase-detail");
        let reveal = PhaseWindow::new(0.0, 0.4);
        let hud = PhaseWindow::new(0.3, 0.6);
        let title = PhaseWindow::new(0.35, 0.65);
        let strip = PhaseWindow::new(0.55, 0.85);
        let inset = PhaseWindow::new(0.6, 0.9);
        Self {
            tracks: vec![
                Track::new(Target::Id("showcase-progress-bar"), PhaseWindow::FULL, Linear, HeightPct, 0.0, 100.0),
                Track::new(car, reveal, OutCubic, Scale, 1.3, 1.0),
                Track::new(car, reveal, OutCubic, Opacity, 0.0, 1.0),
                Track::new(car, reveal, OutCubic, Brightness, 0.4, 0.8),
                Track::new(car, PhaseWindow::new(0.8, 1.0), Linear, Brightness, 0.0, 0.15),
                Track::constant(car, Contrast, 1.1),
                Track::new(top_left, hud, OutCubic, Opacity, 0.0, 1.0),
                Track::new(top_left, hud, OutCubic, TranslateX, -20.0, 0.0),
                Track::new(center, title, OutCubic, Opacity, 0.0, 1.0),
                Track::new(center, title, OutCubic, TranslateY, 30.0, 0.0),
                Track::new(Target::Class("shud-bracket"), PhaseWindow::new(0.4, 0.65), Linear, Opacity, 0.0, 0.5),
                Track::new(data, strip, OutCubic, Opacity, 0.0, 1.0),
                Track::new(data, strip, OutCubic, TranslateY, 20.0, 0.0),
                Track::new(detail, inset, OutCubic, Opacity, 0.0, 1.0),
                Track::new(detail, inset, OutCubic, TranslateX, 40.0, 0.0),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tracks.iter().try_for_each(|t| t.window.validate())
    }

    /// Styles for every target at `progress`, in first-appearance order.
    pub fn evaluate(&self, progress: f32) -> Vec<(Target, ElementStyle)> {
        let p = clamp01(progress);
        let mut out: Vec<(Target, ElementStyle)> = Vec::new();
        for track in &self.tracks {
            let value = track.value(p);
            match out.iter_mut().find(|(t, _)| *t == track.target) {
                Some((_, style)) => style.add(track.channel, value),
                None => {
                    let mut style = ElementStyle::default();
                    style.add(track.channel, value);
                    out.push((track.target, style));
                }
            }
        }
        out
    }

    /// Style of a single target, if any track drives it.
    pub fn style_of(&self, target: Target, progress: f32) -> Option<ElementStyle> {
        self.evaluate(progress)
            .into_iter()
            .find_map(|(t, s)| (t == target).then_some(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn window_progress_matches_scenario() {
        let hud = PhaseWindow::new(0.3, 0.6);
        assert!(close(hud.progress(0.5), 0.6667));
        assert!(close(hud.eased(0.5, Easing::OutCubic), 0.963));
        assert_eq!(PhaseWindow::new(0.0, 0.4).progress(0.5), 1.0);
    }

    #[test]
    fn section_progress_clamps_and_guards() {
        assert_eq!(section_progress(100.0, 3000.0, 1000.0), 0.0);
        assert!(close(section_progress(-1000.0, 3000.0, 1000.0), 0.5));
        assert_eq!(section_progress(-5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(section_progress(-10.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn showcase_endpoints() {
        let c = Choreography::showcase();
        let car = Target::Id("showcase-car");
        let start = c.style_of(car, 0.0).unwrap();
        assert_eq!(start.opacity, Some(0.0));
        assert!(close(start.scale.unwrap(), 1.3));
        assert!(close(start.brightness.unwrap(), 0.4));
        assert!(close(start.contrast.unwrap(), 1.1));

        let end = c.style_of(car, 1.0).unwrap();
        assert!(close(end.scale.unwrap(), 1.0));
        assert!(close(end.brightness.unwrap(), 0.95));

        let mid = c.style_of(car, 0.9).unwrap();
        assert!(close(mid.brightness.unwrap(), 0.875));

        let bar = c.style_of(Target::Id("showcase-progress-bar"), 0.25).unwrap();
        assert!(close(bar.height_pct.unwrap(), 25.0));
    }

    #[test]
    fn brackets_are_linear_and_subtle() {
        let c = Choreography::showcase();
        let s = c.style_of(Target::Class("shud-bracket"), 0.525).unwrap();
        assert!(close(s.opacity.unwrap(), 0.25));
    }

    #[test]
    fn evaluate_is_idempotent() {
        let c = Choreography::showcase();
        for i in 0..=20 {
            let p = i as f32 / 20.0;
            assert_eq!(c.evaluate(p), c.evaluate(p));
        }
        let forward: Vec<_> = (0..=10).map(|i| c.evaluate(i as f32 / 10.0)).collect();
        let again = c.evaluate(0.3);
        assert_eq!(again, forward[3]);
    }

    #[test]
    fn continuous_at_window_edges() {
        let c = Choreography::showcase();
        let eps = 1e-4;
        for track in &c.tracks {
            for edge in [track.window.start, track.window.end] {
                let below = track.value(edge - eps);
                let above = track.value(edge + eps);
                let range = (track.to - track.from).abs().max(1.0);
                assert!(
                    (below - above).abs() / range < 1e-2,
                    "{:?} at {edge}",
                    track.channel
                );
            }
        }
    }

    #[test]
    fn non_finite_progress_is_start() {
        let c = Choreography::showcase();
        assert_eq!(c.evaluate(f32::NAN), c.evaluate(0.0));
    }

    #[test]
    fn showcase_validates_and_bad_windows_fail() {
        assert!(Choreography::showcase().validate().is_ok());
        let bad = Track::new(
            Target::Id("x"),
            PhaseWindow::new(0.6, 0.3),
            Easing::Linear,
            Channel::Opacity,
            0.0,
            1.0,
        );
        assert!(matches!(
            Choreography::new(vec![bad]),
            Err(ConfigError::InvalidPhaseWindow { .. })
        ));
    }
}
