//! Just-pressed edge detection for terminal key events.
//!
//! The game core only reacts to the frame in which a key goes down. Holding a
//! key does not repeat the action. `KeyTracker` remembers which actions are
//! currently held and latches an edge the first time each one is pressed.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{map_key, Command};
use crate::types::{ActionSet, GameAction};

// In terminals without key-release events, a short timeout prevents a single tap
// from staying "held" forever and swallowing the next press.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone)]
pub struct KeyTracker {
    held: ActionSet,
    latched: ActionSet,
    last_press_ms: [u64; GameAction::ALL.len()],
    key_release_timeout_ms: u64,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: ActionSet::empty(),
            latched: ActionSet::empty(),
            last_press_ms: [0; GameAction::ALL.len()],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    /// Record a key-down. Returns true if this is a new edge.
    pub fn press(&mut self, action: GameAction, now_ms: u64) -> bool {
        self.last_press_ms[action as usize] = now_ms;
        if self.held.contains(action) {
            return false;
        }
        self.held.insert(action);
        self.latched.insert(action);
        true
    }

    pub fn release(&mut self, action: GameAction) {
        self.held.remove(action);
    }

    /// Feed one terminal key event.
    ///
    /// Play keys update the held/latched state. Session commands are returned
    /// to the caller on press only; repeats and releases of them are dropped.
    pub fn handle_event(&mut self, key: KeyEvent, now_ms: u64) -> Option<Command> {
        let command = map_key(key)?;
        match (command, key.kind) {
            (Command::Play(action), KeyEventKind::Press) => {
                self.press(action, now_ms);
                None
            }
            (Command::Play(action), KeyEventKind::Release) => {
                self.release(action);
                None
            }
            // Repeat means still held: keep the auto-release from firing.
            (Command::Play(action), KeyEventKind::Repeat) => {
                if self.held.contains(action) {
                    self.last_press_ms[action as usize] = now_ms;
                }
                None
            }
            (other, KeyEventKind::Press) => Some(other),
            _ => None,
        }
    }

    /// Actions that went down since the previous frame.
    ///
    /// Also releases keys whose last press is older than the timeout.
    pub fn take_frame(&mut self, now_ms: u64) -> ActionSet {
        for action in GameAction::ALL {
            let since = now_ms.saturating_sub(self.last_press_ms[action as usize]);
            if self.held.contains(action) && since > self.key_release_timeout_ms {
                self.held.remove(action);
            }
        }
        std::mem::take(&mut self.latched)
    }

    /// Actions currently considered held down
    pub fn held(&self) -> ActionSet {
        self.held
    }

    /// Forget everything (focus loss, pause, restart)
    pub fn reset(&mut self) {
        self.held = ActionSet::empty();
        self.latched = ActionSet::empty();
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
