//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages sent from the platform thread to the frame driver, and the
// errors the platform layer can fail with.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to the frame driver.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlatformEvent {
    /// Input gathered between two redraws, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested; the driver stops after this.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Fatal platform failures. Without an event loop there is no frame.
#[derive(Debug, Error)]
pub(crate) enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),
}
