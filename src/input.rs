//! Backend-neutral input events and held-key tracking.
//!
//! Instead of acting on each key event individually, `KeyTracker` records the
//! frame of the last press/repeat for every key.  A key counts as held while
//! that frame is recent enough.  This covers two classes of terminal:
//! * keyboard-enhancement capable ones report `Release` → keys drop at once;
//! * classic ones only repeat `Press` → keys expire after `HOLD_WINDOW`
//!   frames of silence, shorter than any OS repeat interval.

use std::collections::HashMap;

use crate::geometry::Point;

/// ≈133 ms at 60 FPS.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer click at a logical position.
    Click(Point),
    /// Pointer moved; only used for button hover.
    PointerMoved(Point),
    Key { key: Key, action: KeyAction },
    /// Window close / quit request.
    Quit,
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<Key, u64>,
    frame: u64,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once at the start of every frame, before recording events.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    pub fn record(&mut self, key: Key, action: KeyAction) {
        match action {
            KeyAction::Press | KeyAction::Repeat => {
                self.key_frame.insert(key, self.frame);
            }
            KeyAction::Release => {
                self.key_frame.remove(&key);
            }
        }
    }

    /// True if `key` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: Key) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Forget every key, e.g. when leaving the playfield.
    pub fn clear(&mut self) {
        self.key_frame.clear();
    }
}
