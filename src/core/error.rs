//=========================================================================
// Stack Errors
//=========================================================================
//
// Usage errors raised by scene stack operations invoked on invalid state.
//
// None of these are fatal. The stack logs the error, leaves itself
// untouched and returns it; the frame loop keeps running.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::scene::SceneId;

//=== StackError ==========================================================

/// A scene stack operation that could not be applied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `pop()` on a stack without scenes.
    #[error("tried to pop a scene although the stack is empty")]
    Empty,

    /// `replace()` / `remove()` target does not occur in the stack.
    #[error("scene {0:?} is not on the stack")]
    NotInStack(SceneId),

    /// Scene must leave the stack before it can be discarded.
    #[error("scene {0:?} is still on the stack")]
    StillOnStack(SceneId),

    /// Handle does not belong to this stack's scene arena.
    #[error("scene {0:?} is not registered with this stack")]
    UnknownScene(SceneId),
}
