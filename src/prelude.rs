//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_stage::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::core::FramePresenter;
pub use crate::engine::{Engine, EngineBuilder};

// Scene system
pub use crate::core::error::StackError;
pub use crate::core::scene::{
    Backdrop, GameObject, ObjectId, Scene, SceneId, SceneScript, SceneStack, UpdateContext,
};

// Geometry and drawing
pub use crate::core::geometry::{Body, Rect};
pub use crate::core::render::{Color, DrawCommand, DrawList, Surface};

// Input
pub use crate::core::input::{InputEvent, InputState, KeyCode, MouseButton};

// Stock objects
pub use crate::objects::{Door, Walker};
