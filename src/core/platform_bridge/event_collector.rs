//=========================================================================
// Event Collector
//=========================================================================
//
// Drains platform events at the start of each tick.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_into() → InputState → TickControl
//
// Draining is bounded so a flooded channel cannot starve the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputState;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Driver-side end of the platform channel.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
}

impl EventCollector {
    const MAX_MESSAGES_PER_TICK: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self { receiver }
    }

    /// Starts a new input frame and folds every pending batch into it.
    ///
    /// Returns `Exit` on `WindowClosed` or when the platform side hung up.
    pub(crate) fn collect_into(&mut self, input: &mut InputState) -> TickControl {
        input.begin_frame();

        let mut drained = 0;
        while drained < Self::MAX_MESSAGES_PER_TICK {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => {
                    trace!(target: "engine", "Applying {} input events", batch.len());
                    input.apply(&batch);
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_MESSAGES_PER_TICK {
            warn!(target: "engine", "Platform backlog: drained {} batches this tick", drained);
        }

        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);
        let mut input = InputState::new();

        assert_eq!(collector.collect_into(&mut input), TickControl::Continue);
        assert!(!input.is_key_down(KeyCode::KeyA));
    }

    #[test]
    fn collect_applies_all_batches_in_order() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut input = InputState::new();

        tx.send(PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::KeyA)]))
            .unwrap();
        tx.send(PlatformEvent::Inputs(vec![
            InputEvent::MouseMoved { x: 10.0, y: 20.0 },
            InputEvent::KeyUp(KeyCode::KeyA),
        ]))
        .unwrap();

        assert_eq!(collector.collect_into(&mut input), TickControl::Continue);
        assert!(input.is_key_pressed(KeyCode::KeyA));
        assert!(input.is_key_released(KeyCode::KeyA));
        assert!(!input.is_key_down(KeyCode::KeyA));
        assert_eq!(input.mouse_position(), (10.0, 20.0));
    }

    #[test]
    fn collect_starts_new_input_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);
        let mut input = InputState::new();

        tx.send(PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::Space)]))
            .unwrap();
        collector.collect_into(&mut input);
        assert!(input.is_key_pressed(KeyCode::Space));

        collector.collect_into(&mut input);
        assert!(!input.is_key_pressed(KeyCode::Space));
        assert!(input.is_key_down(KeyCode::Space));
    }

    #[test]
    fn collect_returns_exit_on_window_closed() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_into(&mut InputState::new()), TickControl::Exit);
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_into(&mut InputState::new()), TickControl::Exit);
    }
}
