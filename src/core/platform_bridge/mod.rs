//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the windowing layer and the frame driver.
//
// Components:
// - `interface`: messages and errors crossing the thread boundary
// - `event_collector`: driver-side draining of those messages into
//   the tick's `InputState`
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{PlatformError, PlatformEvent};
