//! Scroll-driven opacity for the whole particle field.

use crate::config::FadeParams;

/// Opacity at `scroll_y` for a viewport `viewport_h` tall: 1 until the start
/// threshold, then linear down to the floor at the end threshold.
pub fn field_opacity(params: &FadeParams, scroll_y: f32, viewport_h: f32) -> f32 {
    let start = viewport_h * params.start_vh;
    let end = viewport_h * params.end_vh;
    if !(scroll_y > start) {
        return 1.0;
    }
    let span = end - start;
    if !(span > 0.0) {
        return params.floor;
    }
    (1.0 - (scroll_y - start) / span).max(params.floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_before_start_floor_after_end() {
        let p = FadeParams::default();
        assert_eq!(field_opacity(&p, 0.0, 1000.0), 1.0);
        assert_eq!(field_opacity(&p, 300.0, 1000.0), 1.0);
        assert_eq!(field_opacity(&p, 2500.0, 1000.0), p.floor);
        assert_eq!(field_opacity(&p, 99_999.0, 1000.0), p.floor);
    }

    #[test]
    fn linear_between_thresholds() {
        let p = FadeParams::default();
        // halfway between 300 and 2500
        let v = field_opacity(&p, 1400.0, 1000.0);
        assert!((v - 0.5).abs() < 1e-5);
    }

    #[test]
    fn zero_height_viewport_degrades_to_floor() {
        let p = FadeParams::default();
        assert_eq!(field_opacity(&p, 10.0, 0.0), p.floor);
        assert_eq!(field_opacity(&p, f32::NAN, 800.0), 1.0);
    }
}
