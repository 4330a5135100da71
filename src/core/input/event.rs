//=========================================================================
// Input Events
//
// Engine-side representation of the input the platform layer forwards
// to the frame driver.
//
// Key and button identifiers are winit's own physical codes; the
// platform layer only filters and batches, it does not remap.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputState (folded once per tick)
//         ↓
//    GameObject::update via UpdateContext::input()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Coordinates of `MouseMoved` are in window space (pixels, top-left
/// origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),
    MouseMoved { x: f32, y: f32 },
}
