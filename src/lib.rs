//=========================================================================
// Aetheric Stage Library Root
//
// A small 2D scene layer: an ordered stack of scenes (rooms, menus,
// overlays), each holding movable objects, driven once per tick through a
// logic pass and a draw pass.
//
// Responsibilities:
// - Expose the scene model (`core::scene`) and its supporting types
// - Expose the runtime facade (`EngineBuilder` / `Engine`)
// - Keep the windowing layer (`platform`) out of the public API
//
// Typical usage:
// ```no_run
// use aetheric_stage::prelude::*;
//
// fn main() {
//     EngineBuilder::new()
//         .build()
//         .init(|stack| {
//             let hall = stack.add_scene(Scene::new());
//             let _ = stack.push(hall);
//         })
//         .run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the scene stack, geometry, input state and draw surface.
// `objects` holds ready-made objects built on top of it.
//
pub mod core;
pub mod objects;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit window and event loop and is not part of the
// public API surface. `engine` wires it to the frame driver.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::error::StackError;
pub use crate::core::render::Color;
pub use crate::core::FramePresenter;
pub use engine::{Engine, EngineBuilder};
