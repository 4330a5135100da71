//=========================================================================
// Aetheric Stage
//
// Main entry point: wires the platform window to the frame driver.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init()           stack setup
//         ├─ with_channel_capacity() ├─ with_presenter() frame sink
//         ├─ with_title()            └─ run()            spawns logic thread
//         └─ with_window_size()                          runs platform
//                                                        blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformEvent;
use crate::core::scene::SceneStack;
use crate::core::{FrameDriver, FramePresenter};
use crate::platform::{Platform, WindowConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window**: "Aetheric Stage", 800x600
///
/// # Examples
///
/// ```no_run
/// use aetheric_stage::prelude::*;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_title("Dungeon")
///     .with_window_size(1024, 768)
///     .build()
///     .init(|stack| {
///         let hall = stack.add_scene(Scene::new());
///         stack.push(hall).expect("fresh stack accepts a push");
///     })
///     .run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowConfig {
                title: "Aetheric Stage".to_string(),
                width: 800,
                height: 600,
            },
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Sets the logical window size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be positive, got {}x{}",
            width,
            height
        );
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Consumes the builder and produces an [`Engine`] with an empty
    /// scene stack.
    pub fn build(self) -> Engine {
        info!(
            target: "engine",
            "Building engine (TPS: {}, channel: {})",
            self.tps,
            self.channel_capacity
        );

        Engine {
            driver: FrameDriver::new(),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Stage runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► FrameDriver (Logic Thread @ TPS)
///   │     └─► SceneStack update → draw → FramePresenter
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Translation
///
/// Communication: bounded channel (PlatformEvent)
/// ```
pub struct Engine {
    driver: FrameDriver,
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Sets up the scene stack before the runtime starts: register
    /// scenes, spawn objects, push the first scene.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut SceneStack),
    {
        info!(target: "engine", "Initializing scene stack");

        init_fn(self.driver.stack_mut());

        info!(
            target: "engine",
            "Initialization complete ({} scenes on stack)",
            self.driver.stack_mut().len()
        );
        self
    }

    /// Installs the sink that receives every finished frame.
    ///
    /// Without one, frames are only traced.
    pub fn with_presenter<P>(mut self, presenter: P) -> Self
    where
        P: FramePresenter + 'static,
    {
        self.driver.set_presenter(Box::new(presenter));
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded platform → core channel
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: `WindowClosed` is sent, the logic thread exits
    ///
    /// Platform failures and a panicking logic thread are logged; the
    /// engine still shuts down in order.
    pub fn run(self) {
        info!(target: "engine", "Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.driver.spawn_core_thread(rx, self.tps);
        info!(target: "engine", "Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window);

        if let Err(e) = platform.run() {
            error!(target: "engine", "Platform error: {}", e);
        }

        info!(target: "engine", "Platform event loop exited");

        //--- 4. Cleanup: wait for the logic thread ------------------------
        // The sender died with the platform, so the collector sees a
        // disconnect even if WindowClosed never made it through.
        match core_handle.join() {
            Ok(()) => info!(target: "engine", "Core thread terminated cleanly"),
            Err(e) => error!(target: "engine", "Core thread panicked: {:?}", e),
        }

        info!(target: "engine", "Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
