//=========================================================================
// Platform Subsystem
//
// Runs the winit event loop on the main thread and forwards input to the
// frame driver over the bounded channel.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  FrameDriver         │
//  │   ↓                      │    │   ├─ InputState      │
//  │  translate::*            │    │   ├─ SceneStack      │
//  │   ↓                      │    │   │   update → draw  │
//  │  pending: Vec<InputEvent>│    │   └─ FramePresenter  │
//  │   ↓ RedrawRequested      │    └──────────────────────┘
//  │  Channel ────────────────┼──────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// Notes:
// - RedrawRequested is the flush point; empty batches are not sent.
// - A disconnected channel (driver gone) is logged, never fatal, so the
//   user can still close the window.
// - Winit requires the main thread on macOS/iOS, so this runs on the
//   thread that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod translate;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};

//=== WindowConfig ========================================================

/// Window settings taken from the engine builder.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

//=== Platform ============================================================

/// Window owner and input forwarder.
///
/// Not `Send`: lives and dies on the main thread.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,

    config: WindowConfig,

    /// Input seen since the last redraw.
    pending: Vec<InputEvent>,

    event_sender: Sender<PlatformEvent>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(event_sender: Sender<PlatformEvent>, config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            config,
            pending: Vec::with_capacity(64),
            event_sender,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    fn queue(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Sends everything queued since the last redraw as one batch.
    fn flush_input(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let batch = std::mem::take(&mut self.pending);
        let count = batch.len();
        trace!(target: "platform::input", "Flushing {} input events", count);

        if self.event_sender.send(PlatformEvent::Inputs(batch)).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} input events",
                count
            );
        }
    }

    fn notify_closed(&self) {
        // Driver may already be gone; nothing left to tell then
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.notify_closed();
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.notify_closed();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match translate::key(key_event.physical_key, key_event.state, key_event.repeat) {
                    Some(event) => self.queue(event),
                    None => trace!(target: "platform::input", "Key event ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.queue(translate::mouse_button(button, state));
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.queue(translate::cursor(position.x, position.y));
            }

            WindowEvent::RedrawRequested => {
                self.flush_input();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::unbounded;

    fn config() -> WindowConfig {
        WindowConfig {
            title: "test".into(),
            width: 320,
            height: 240,
        }
    }

    #[test]
    fn platform_creation_is_lazy() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx, config());
        assert!(platform.window().is_none(), "Window should be created lazily");
    }

    #[test]
    fn flush_empty_queue_sends_nothing() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());

        platform.flush_input();

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_queued_events_as_one_batch() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());

        platform.queue(InputEvent::KeyDown(KeyCode::Space));
        platform.queue(InputEvent::MouseMoved { x: 1.0, y: 2.0 });
        platform.flush_input();

        assert_eq!(
            rx.try_recv(),
            Ok(PlatformEvent::Inputs(vec![
                InputEvent::KeyDown(KeyCode::Space),
                InputEvent::MouseMoved { x: 1.0, y: 2.0 },
            ]))
        );
    }

    #[test]
    fn repeated_flush_sends_once() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());

        platform.queue(InputEvent::KeyDown(KeyCode::KeyA));
        platform.flush_input();
        platform.flush_input();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_survives_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());

        platform.queue(InputEvent::KeyDown(KeyCode::KeyA));
        drop(rx);

        platform.flush_input();
        assert!(platform.pending.is_empty());
    }

    #[test]
    fn notify_closed_sends_window_closed() {
        let (tx, rx) = unbounded();
        let platform = Platform::new(tx, config());

        platform.notify_closed();
        assert_eq!(rx.try_recv(), Ok(PlatformEvent::WindowClosed));
    }
}
