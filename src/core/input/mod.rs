//=========================================================================
// Input State
//=========================================================================
//
// Per-tick input snapshot read by objects and scene scripts.
//
// Architecture:
//   PlatformEvent::Inputs → begin_frame() → apply() → query
//
// Held keys/buttons persist across ticks; pressed/released sets only
// describe transitions observed during the current tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, MouseButton};

//=== InputState ==========================================================

/// Keyboard and mouse state as seen by the current tick.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    //--- Persistent State ------------------------------------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Tick Deltas ------------------------------------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
}

impl InputState {
    /// Creates a state with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Forgets the previous tick's transitions. Held state is kept.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    /// Folds a batch of events into the state, in order.
    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                // Auto-repeat must not re-trigger a press
                if self.keys_down.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }
            InputEvent::KeyUp(key) => {
                if self.keys_down.remove(&key) {
                    self.keys_released.insert(key);
                }
            }
            InputEvent::MouseButtonDown(button) => {
                if self.buttons_down.insert(button) {
                    self.buttons_pressed.insert(button);
                }
            }
            InputEvent::MouseButtonUp(button) => {
                if self.buttons_down.remove(&button) {
                    self.buttons_released.insert(button);
                }
            }
            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (x, y);
            }
        }
    }

    //--- Query API --------------------------------------------------------

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` only on the tick the key went down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns `true` only on the tick the key went up.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Last known cursor position in window coordinates.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Unit-free movement axis from the arrow keys, `(-1..=1, -1..=1)`.
    ///
    /// Opposing keys cancel out. Positive y points down.
    pub fn arrow_axis(&self) -> (f32, f32) {
        let axis = |neg: KeyCode, pos: KeyCode| {
            (self.is_key_down(pos) as i8 - self.is_key_down(neg) as i8) as f32
        };
        (
            axis(KeyCode::ArrowLeft, KeyCode::ArrowRight),
            axis(KeyCode::ArrowUp, KeyCode::ArrowDown),
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
