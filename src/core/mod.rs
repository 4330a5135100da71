//=========================================================================
// Frame Driver
//
// Owns the scene stack on the logic thread and runs the per-tick
// pipeline at a fixed rate.
//
// Responsibilities:
// - Drain platform input into the tick's `InputState`
// - Run the logic pass (`SceneStack::update`)
// - Run the draw pass into a reusable `DrawList`
// - Hand the finished frame to the installed `FramePresenter`
//
// Notes:
// Everything inside a tick is synchronous and runs to completion on one
// thread. The platform layer only talks to the driver through the
// bounded channel drained by `EventCollector`.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::Receiver;
use log::{info, trace};

//=== Module Declarations =================================================
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scene;

pub(crate) mod platform_bridge;

//=== Internal Modules ====================================================
use input::InputState;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::DrawList;
use scene::SceneStack;

//=== FramePresenter ======================================================

/// Receives every finished frame, bottom layer first.
///
/// Implemented for any `FnMut(&DrawList) + Send` closure.
pub trait FramePresenter: Send {
    fn present(&mut self, frame: &DrawList);
}

impl<F> FramePresenter for F
where
    F: FnMut(&DrawList) + Send,
{
    fn present(&mut self, frame: &DrawList) {
        self(frame)
    }
}

/// Default presenter: reports frame size and discards it.
struct TracePresenter;

impl FramePresenter for TracePresenter {
    fn present(&mut self, frame: &DrawList) {
        trace!(target: "engine", "Frame ready: {} draw commands", frame.len());
    }
}

//=== FrameDriver =========================================================

pub(crate) struct FrameDriver {
    stack: SceneStack,
    input: InputState,
    frame: DrawList,
    presenter: Box<dyn FramePresenter>,
    ticks: u64,
}

impl FrameDriver {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            stack: SceneStack::new(),
            input: InputState::new(),
            frame: DrawList::new(),
            presenter: Box::new(TracePresenter),
            ticks: 0,
        }
    }

    pub(crate) fn stack_mut(&mut self) -> &mut SceneStack {
        &mut self.stack
    }

    pub(crate) fn set_presenter(&mut self, presenter: Box<dyn FramePresenter>) {
        self.presenter = presenter;
    }

    //--- tick() -----------------------------------------------------------
    //
    // One frame: logic pass over the stack, then draw pass over the live
    // stack, then present. Input must already be collected.
    //
    pub(crate) fn tick(&mut self) {
        self.stack.update(&self.input);

        self.frame.clear();
        self.stack.draw(&mut self.frame);
        self.presenter.present(&self.frame);

        self.ticks += 1;
    }

    //--- spawn_core_thread() ----------------------------------------------
    //
    // Moves the driver onto its own thread and ticks it at `tps`.
    //
    // Each tick:
    //  1. Collects pending platform input (or exits on shutdown)
    //  2. Runs update + draw + present
    //  3. Sleeps out the rest of the frame budget
    //
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_into(&mut self.input) == TickControl::Exit {
                    info!(target: "engine", "Core thread exiting after {} ticks", self.ticks);
                    break;
                }

                //--- Step 2: Update and draw -------------------------------
                self.tick();

                //--- Step 3: Maintain fixed pacing -------------------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
