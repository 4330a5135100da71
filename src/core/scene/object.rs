//=========================================================================
// Game Objects
//=========================================================================
//
// Movable entities living inside scenes, and the arena that owns them.
//
// Architecture:
//   Objects
//     └─ slots: SlotMap<ObjectId, Option<Box<dyn GameObject>>>
//
// A slot is `None` only while its object is running its own update:
// the object is detached so it can receive `&mut SceneStack` without
// aliasing itself.
//
//=========================================================================

//=== External Dependencies ===============================================

use slotmap::{new_key_type, SlotMap};

//=== Internal Dependencies ===============================================

use super::context::UpdateContext;
use crate::core::geometry::Rect;
use crate::core::render::Surface;

//=== Object Handle =======================================================

new_key_type! {
    /// Stable handle of an object. Identity is handle identity.
    pub struct ObjectId;
}

//=== GameObject Trait ====================================================

/// Behavior of anything placed in a scene.
///
/// Only `draw()` and `hitbox()` are required; `update()` defaults to doing
/// nothing (static props).
///
/// ```rust
/// # use aetheric_stage::prelude::*;
/// struct Crate {
///     body: Body,
/// }
///
/// impl GameObject for Crate {
///     fn hitbox(&self) -> Option<Rect> {
///         self.body.hitbox()
///     }
///
///     fn draw(&self, surface: &mut dyn Surface) {
///         surface.draw_sprite("crate", self.body.bounds());
///     }
/// }
/// ```
pub trait GameObject: Send {
    /// Axis-aligned collision box, or `None` if the object never collides.
    fn hitbox(&self) -> Option<Rect>;

    /// Draws the object. Must not change scene membership.
    fn draw(&self, surface: &mut dyn Surface);

    /// Per-tick logic.
    ///
    /// `this` is the object's own handle. The context gives access to the
    /// scene being updated and to the whole stack: objects may add or
    /// remove objects, move between scenes, or push/pop/replace scenes.
    fn update(&mut self, _this: ObjectId, _ctx: &mut UpdateContext<'_>) {}
}

//=== Objects Arena =======================================================

/// Owner of every object, keyed by [`ObjectId`].
///
/// Scenes only hold handles; the arena holds the objects themselves.
#[derive(Default)]
pub struct Objects {
    slots: SlotMap<ObjectId, Option<Box<dyn GameObject>>>,
}

impl Objects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: Box<dyn GameObject>) -> ObjectId {
        self.slots.insert(Some(object))
    }

    /// Drops the object. Returns `false` for stale handles.
    ///
    /// Despawning an object that is currently detached for its own update
    /// drops it as soon as that update returns.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        self.slots.remove(id).is_some()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.slots.contains_key(id)
    }

    /// Returns the object, or `None` if the handle is stale or the object is
    /// detached for its own update.
    pub fn get(&self, id: ObjectId) -> Option<&dyn GameObject> {
        self.slots.get(id)?.as_deref()
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut (dyn GameObject + 'static)> {
        self.slots.get_mut(id)?.as_deref_mut()
    }

    /// Current hitbox of a live, attached object.
    pub fn hitbox(&self, id: ObjectId) -> Option<Rect> {
        self.get(id)?.hitbox()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    //--- Detach / Reattach ------------------------------------------------

    pub(crate) fn detach(&mut self, id: ObjectId) -> Option<Box<dyn GameObject>> {
        self.slots.get_mut(id)?.take()
    }

    /// Puts a detached object back. Despawned-while-detached objects are
    /// dropped here.
    pub(crate) fn reattach(&mut self, id: ObjectId, object: Box<dyn GameObject>) {
        if let Some(slot) = self.slots.get_mut(id) {
            *slot = Some(object);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
