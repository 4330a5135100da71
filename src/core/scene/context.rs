//=========================================================================
// Update Context
//=========================================================================
//
// Handed to objects and scene scripts during the logic pass.
//
// Gives mutable access to the whole `SceneStack` (scene transitions,
// spawning, moving objects between scenes) plus the tick's input.
// Structural changes made through it land in the live collections;
// the pass in progress keeps iterating its snapshots.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::object::{GameObject, ObjectId};
use super::scene::Scene;
use super::scene_stack::{SceneId, SceneStack};
use crate::core::error::StackError;
use crate::core::geometry::Rect;
use crate::core::input::InputState;

//=== UpdateContext =======================================================

/// Per-update view of the stack, anchored at the scene being updated.
pub struct UpdateContext<'a> {
    stack: &'a mut SceneStack,
    scene: SceneId,
    input: &'a InputState,
}

impl<'a> UpdateContext<'a> {
    pub(crate) fn new(stack: &'a mut SceneStack, scene: SceneId, input: &'a InputState) -> Self {
        Self { stack, scene, input }
    }

    //--- Accessors --------------------------------------------------------

    /// Handle of the scene currently being updated.
    pub fn scene_id(&self) -> SceneId {
        self.scene
    }

    /// The scene being updated, or `None` if it was discarded during this
    /// update.
    pub fn scene(&self) -> Option<&Scene> {
        self.stack.scene(self.scene)
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.stack.scene_mut(self.scene)
    }

    pub fn stack(&self) -> &SceneStack {
        self.stack
    }

    /// Full stack access: push, pop, replace, remove, spawn, transfer.
    pub fn stack_mut(&mut self) -> &mut SceneStack {
        self.stack
    }

    pub fn input(&self) -> &InputState {
        self.input
    }

    //--- Queries ----------------------------------------------------------

    /// Objects in the current scene overlapping `hitbox`, excluding `this`.
    ///
    /// The updating object is detached from the arena while it runs, so it
    /// passes its own current hitbox.
    pub fn overlapping(&self, this: ObjectId, hitbox: Option<Rect>) -> Vec<ObjectId> {
        match self.stack.scene(self.scene) {
            Some(scene) => scene.overlapping(self.stack.objects(), this, hitbox),
            None => Vec::new(),
        }
    }

    //--- Mutation Shortcuts -----------------------------------------------

    /// Spawns an object into the current scene.
    ///
    /// It is first updated on the next tick.
    pub fn spawn<T>(&mut self, object: T) -> Result<ObjectId, StackError>
    where
        T: GameObject + 'static,
    {
        self.stack.spawn_in(self.scene, object)
    }

    /// Removes an object from every scene and drops it.
    pub fn despawn(&mut self, id: ObjectId) -> bool {
        self.stack.despawn(id)
    }
}
