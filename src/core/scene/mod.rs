//=========================================================================
// Scene System
//=========================================================================
//
// Scenes, the objects living in them, and the stack that orders scenes
// and drives their logic and draw passes.
//
// Architecture:
//   SceneStack
//     ├─ scenes: SlotMap<SceneId, Scene>
//     │            └─ objects: Vec<ObjectId>, cover flags, script
//     ├─ objects: Objects
//     └─ order: Vec<SceneId>
//
// Flow:
//   update() → snapshot → Scene (unless covered + paused)
//                           → GameObject::update(UpdateContext)
//                           → SceneScript::update(UpdateContext)
//   draw()   → Scene (unless covered + hidden) → backdrop → objects
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::render::{Color, Surface};
use crate::core::geometry::Rect;

//=== Module Declarations =================================================

mod context;
mod object;
#[allow(clippy::module_inception)]
mod scene;
mod scene_stack;

//=== Public API ==========================================================

pub use context::UpdateContext;
pub use object::{GameObject, ObjectId, Objects};
pub use scene::Scene;
pub use scene_stack::{SceneId, SceneStack};

//=== SceneScript Trait ===================================================

/// Scene-level behavior: backdrop and logic that belongs to the room
/// rather than to any object in it.
///
/// Both hooks default to doing nothing:
///
/// ```rust
/// # use aetheric_stage::prelude::*;
/// struct Counter(u32);
///
/// impl SceneScript for Counter {
///     fn update(&mut self, _ctx: &mut UpdateContext<'_>) {
///         self.0 += 1;
///     }
/// }
///
/// let scene = Scene::with_script(Counter(0));
/// ```
pub trait SceneScript: Send {
    /// Runs after every object of the scene was updated this tick.
    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {}

    /// Paints below every object of the scene.
    fn draw_backdrop(&self, _surface: &mut dyn Surface) {}
}

//=== Backdrop ============================================================

/// Ready-made script painting a static background.
#[derive(Debug, Clone, PartialEq)]
pub enum Backdrop {
    Solid { bounds: Rect, color: Color },
    Sprite { bounds: Rect, sprite: String },
}

impl SceneScript for Backdrop {
    fn draw_backdrop(&self, surface: &mut dyn Surface) {
        match self {
            Backdrop::Solid { bounds, color } => surface.fill_rect(*bounds, *color),
            Backdrop::Sprite { bounds, sprite } => surface.draw_sprite(sprite, *bounds),
        }
    }
}
