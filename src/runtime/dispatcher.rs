//! Raw event dispatch.
//!
//! The windowing backend owns the real input loop and forwards every raw
//! event into an [`EventSink`]. The dispatcher is the only writer of the
//! shared input state; the host polls it from another thread through the
//! window. Nothing here blocks: every mutation is a single atomic store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::KeyBinding;
use crate::core::action::ActionRegistry;
use crate::core::geometry::{CellPosition, CoordinateMapper, PixelPosition};

/// Mouse buttons with a click latch. Maps onto the `button1..button3` action
/// keys of the reference implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

    pub fn action_key(self) -> &'static str {
        match self {
            MouseButton::Left => "button1",
            MouseButton::Middle => "button2",
            MouseButton::Right => "button3",
        }
    }

    fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
        }
    }
}

/// Normalized raw event stream consumed by the dispatcher.
///
/// Implementing this for a dispatcher instance is the whole contract between
/// a windowing backend and the crate; positions arrive in the backend's
/// pixel space, key codes in its native encoding.
pub trait EventSink {
    fn on_key_down(&mut self, raw_code: u32);
    fn on_key_up(&mut self, raw_code: u32);
    fn on_mouse_move(&mut self, x: i32, y: i32);
    fn on_mouse_down(&mut self, button: MouseButton, x: i32, y: i32);
    fn on_mouse_up(&mut self, button: MouseButton, x: i32, y: i32);
}

fn pack_pixels(px: PixelPosition) -> u64 {
    ((px.x as u32 as u64) << 32) | (px.y as u32 as u64)
}

fn unpack_pixels(raw: u64) -> PixelPosition {
    PixelPosition {
        x: (raw >> 32) as u32 as i32,
        y: raw as u32 as i32,
    }
}

/// Shared mutable input state: the key and click registries plus the packed
/// continuous pointer position. Owned behind an `Arc`; the dispatcher writes,
/// the window reads.
#[derive(Debug)]
pub(crate) struct InputState {
    pub(crate) keys: ActionRegistry<bool>,
    pub(crate) clicks: ActionRegistry<Option<CellPosition>>,
    pointer: AtomicU64,
}

impl InputState {
    pub(crate) fn new(keys: ActionRegistry<bool>, clicks: ActionRegistry<Option<CellPosition>>) -> Self {
        Self {
            keys,
            clicks,
            pointer: AtomicU64::new(pack_pixels(PixelPosition::new(0, 0))),
        }
    }

    pub(crate) fn set_pointer(&self, px: PixelPosition) {
        self.pointer.store(pack_pixels(px), Ordering::SeqCst);
    }

    pub(crate) fn pointer(&self) -> PixelPosition {
        unpack_pixels(self.pointer.load(Ordering::SeqCst))
    }
}

/// Translates raw events into latch mutations.
///
/// Click-vs-drag disambiguation happens in cell space: a release only
/// registers as a click when it lands in the same cell the press was
/// recorded in. The pending press cells live on the event thread only, so
/// they are plain fields.
pub struct EventDispatcher {
    input: Arc<InputState>,
    bindings: Vec<KeyBinding>,
    mapper: CoordinateMapper,
    track_mouse: bool,
    pending: [Option<CellPosition>; 3],
}

impl EventDispatcher {
    pub(crate) fn new(
        input: Arc<InputState>,
        bindings: Vec<KeyBinding>,
        mapper: CoordinateMapper,
        track_mouse: bool,
    ) -> Self {
        Self {
            input,
            bindings,
            mapper,
            track_mouse,
            pending: [None; 3],
        }
    }

    fn action_for(&self, raw_code: u32) -> Option<&str> {
        self.bindings
            .iter()
            .find(|binding| binding.raw_code == raw_code)
            .map(|binding| binding.action.as_str())
    }
}

impl EventSink for EventDispatcher {
    fn on_key_down(&mut self, raw_code: u32) {
        match self.action_for(raw_code) {
            Some(action) => self.input.keys.press(action),
            None => tracing::trace!(raw_code, "key down for unbound raw code ignored"),
        }
    }

    fn on_key_up(&mut self, raw_code: u32) {
        match self.action_for(raw_code) {
            Some(action) => self.input.keys.release(action),
            None => tracing::trace!(raw_code, "key up for unbound raw code ignored"),
        }
    }

    fn on_mouse_move(&mut self, x: i32, y: i32) {
        // With mouse tracking off no listener exists, so the pointer stays
        // at its initial position.
        if !self.track_mouse {
            return;
        }
        // Unconditional, last-writer-wins. The pending press cell is NOT
        // updated here: a held-then-dragged button must not become a click.
        self.input.set_pointer(PixelPosition::new(x, y));
    }

    fn on_mouse_down(&mut self, button: MouseButton, x: i32, y: i32) {
        if !self.track_mouse {
            return;
        }
        let slot = &mut self.pending[button.index()];
        if slot.is_none() {
            *slot = Some(self.mapper.to_cell(PixelPosition::new(x, y)));
        }
    }

    fn on_mouse_up(&mut self, button: MouseButton, x: i32, y: i32) {
        if !self.track_mouse {
            return;
        }
        let release_cell = self.mapper.to_cell(PixelPosition::new(x, y));
        let pending = self.pending[button.index()].take();
        match pending {
            Some(press_cell) if press_cell == release_cell => {
                self.input
                    .clicks
                    .set(button.action_key(), Some(release_cell));
            }
            Some(press_cell) => {
                tracing::debug!(
                    ?press_cell,
                    ?release_cell,
                    "release in a different cell, click suppressed as drag"
                );
            }
            None => {}
        }
    }
}
