//! Input ports polled once per frame.
//!
//! Event listeners never touch simulation state. They write the newest
//! sample into a port, and the frame loop reads it once per tick
//! (last write wins).

use glam::Vec2;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Environment sample consumed by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Latest raw pointer in NDC, `None` until the pointer has moved.
    pub pointer_ndc: Option<Vec2>,
    /// Latest raw pointer in client CSS pixels.
    pub pointer_px: Option<Vec2>,
    /// Vertical scroll offset in CSS pixels.
    pub scroll_y: f32,
    /// Viewport size in CSS pixels.
    pub viewport: Vec2,
    /// Pointer is over an interactive element.
    pub hovering: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            pointer_ndc: None,
            pointer_px: None,
            scroll_y: 0.0,
            viewport: Vec2::new(1280.0, 720.0),
            hovering: false,
        }
    }
}

pub trait InputPort {
    fn poll(&mut self) -> FrameInput;
}

/// Shared last-write-wins cell for single-threaded hosts.
#[derive(Clone, Debug, Default)]
pub struct SharedInput(Rc<RefCell<FrameInput>>);

impl SharedInput {
    pub fn new(initial: FrameInput) -> Self {
        Self(Rc::new(RefCell::new(initial)))
    }

    pub fn set_pointer(&self, client: Vec2, ndc: Vec2) {
        let mut s = self.0.borrow_mut();
        s.pointer_px = Some(client);
        s.pointer_ndc = Some(ndc);
    }

    pub fn set_scroll(&self, scroll_y: f32) {
        if scroll_y.is_finite() {
            self.0.borrow_mut().scroll_y = scroll_y;
        }
    }

    pub fn set_viewport(&self, width: f32, height: f32) {
        self.0.borrow_mut().viewport = Vec2::new(width, height);
    }

    pub fn set_hovering(&self, hovering: bool) {
        self.0.borrow_mut().hovering = hovering;
    }

    pub fn snapshot(&self) -> FrameInput {
        *self.0.borrow()
    }
}

impl InputPort for SharedInput {
    fn poll(&mut self) -> FrameInput {
        self.snapshot()
    }
}

/// Replays a fixed sequence, then repeats the last sample.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<FrameInput>,
    last: FrameInput,
}

impl ScriptedInput {
    pub fn new(samples: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            queue: samples.into_iter().collect(),
            last: FrameInput::default(),
        }
    }
}

impl InputPort for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_input_is_last_write_wins() {
        let port = SharedInput::default();
        let writer = port.clone();
        writer.set_scroll(10.0);
        writer.set_scroll(25.0);
        writer.set_pointer(Vec2::new(5.0, 5.0), Vec2::new(-0.5, 0.5));
        let mut reader = port;
        let s = reader.poll();
        assert_eq!(s.scroll_y, 25.0);
        assert_eq!(s.pointer_ndc, Some(Vec2::new(-0.5, 0.5)));
    }

    #[test]
    fn non_finite_scroll_is_dropped() {
        let port = SharedInput::default();
        port.set_scroll(40.0);
        port.set_scroll(f32::NAN);
        assert_eq!(port.snapshot().scroll_y, 40.0);
    }

    #[test]
    fn hover_flag_follows_last_write() {
        let port = SharedInput::default();
        assert!(!port.snapshot().hovering);
        port.set_hovering(true);
        assert!(port.snapshot().hovering);
        port.set_hovering(false);
        assert!(!port.snapshot().hovering);
    }

    #[test]
    fn scripted_input_repeats_tail() {
        let a = FrameInput {
            scroll_y: 1.0,
            ..FrameInput::default()
        };
        let b = FrameInput {
            scroll_y: 2.0,
            ..FrameInput::default()
        };
        let mut port = ScriptedInput::new([a, b]);
        assert_eq!(port.poll().scroll_y, 1.0);
        assert_eq!(port.poll().scroll_y, 2.0);
        assert_eq!(port.poll().scroll_y, 2.0);
    }
}
