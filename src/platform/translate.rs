//=========================================================================
// Event Translation
//=========================================================================
//
// Winit window events → engine `InputEvent`s.
//
// Only physical key codes are kept; keys winit cannot identify and OS
// auto-repeat are dropped here.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{ElementState, MouseButton};
use winit::keyboard::PhysicalKey;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== Translation =========================================================

/// Keyboard input → `KeyDown`/`KeyUp`, or `None` for repeats and
/// unidentified keys.
pub(super) fn key(physical: PhysicalKey, state: ElementState, repeat: bool) -> Option<InputEvent> {
    if repeat {
        return None;
    }

    let PhysicalKey::Code(code) = physical else {
        return None;
    };

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(code),
        ElementState::Released => InputEvent::KeyUp(code),
    })
}

pub(super) fn mouse_button(button: MouseButton, state: ElementState) -> InputEvent {
    match state {
        ElementState::Pressed => InputEvent::MouseButtonDown(button),
        ElementState::Released => InputEvent::MouseButtonUp(button),
    }
}

pub(super) fn cursor(x: f64, y: f64) -> InputEvent {
    InputEvent::MouseMoved {
        x: x as f32,
        y: y as f32,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
