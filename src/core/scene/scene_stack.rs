//=========================================================================
// Scene Stack
//=========================================================================
//
// Owns every scene and object, keeps the ordered stack of active scenes
// and drives the per-tick logic and draw passes.
//
// Architecture:
//   SceneStack
//     ├─ scenes:  SlotMap<SceneId, Scene>
//     ├─ objects: Objects (SlotMap<ObjectId, ..>)
//     └─ order:   Vec<SceneId>          bottom → top
//
// Flow:
//   update() → snapshot(order) → update_scene() → snapshot(objects)
//                                      → GameObject::update()
//                                      → SceneScript::update()
//   draw()   → live order → Scene::draw() → GameObject::draw()
//
// Cover state: push/pop (and removal of the top) re-derive `is_covered`
// at the top of the stack. insert/replace/remove below the top leave all
// cover flags untouched; `refresh_cover()` re-derives them on demand.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace, warn};
use slotmap::{new_key_type, SlotMap};

//=== Internal Dependencies ===============================================

use super::context::UpdateContext;
use super::object::{GameObject, ObjectId, Objects};
use super::scene::Scene;
use crate::core::error::StackError;
use crate::core::input::InputState;
use crate::core::render::Surface;

//=== Scene Handle ========================================================

new_key_type! {
    /// Stable handle of a scene. Identity is handle identity.
    pub struct SceneId;
}

//=== SceneStack ==========================================================

/// Ordered stack of scenes plus the arenas holding scenes and objects.
///
/// One instance is owned by the frame driver and lent to objects through
/// [`UpdateContext`] while they update.
///
/// # Example
///
/// ```rust
/// # use aetheric_stage::prelude::*;
/// let mut stack = SceneStack::new();
/// let world = stack.add_scene(Scene::new());
/// let pause = stack.add_scene(Scene::new());
///
/// stack.push(world).unwrap();
/// stack.push(pause).unwrap();
/// assert!(stack.scene(world).unwrap().is_covered());
///
/// stack.pop().unwrap();
/// assert!(!stack.scene(world).unwrap().is_covered());
/// ```
#[derive(Default)]
pub struct SceneStack {
    scenes: SlotMap<SceneId, Scene>,
    objects: Objects,
    order: Vec<SceneId>,
}

impl SceneStack {
    //--- Construction -----------------------------------------------------

    /// Creates an empty stack with empty arenas.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Scene Arena ------------------------------------------------------

    /// Registers a scene. It stays inert until pushed or inserted.
    pub fn add_scene(&mut self, scene: Scene) -> SceneId {
        let id = self.scenes.insert(scene);
        trace!(target: "scene", "Registered scene {:?}", id);
        id
    }

    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(id)
    }

    pub fn scene_mut(&mut self, id: SceneId) -> Option<&mut Scene> {
        self.scenes.get_mut(id)
    }

    /// Drops a scene that is no longer on the stack.
    ///
    /// Objects it holds are dropped too, unless another scene still holds
    /// them; those stay alive in the other scene.
    pub fn discard_scene(&mut self, id: SceneId) -> Result<Scene, StackError> {
        if self.order.contains(&id) {
            return reject(StackError::StillOnStack(id));
        }

        let Some(scene) = self.scenes.remove(id) else {
            return reject(StackError::UnknownScene(id));
        };

        for &object in scene.objects() {
            let shared = self.scenes.values().any(|other| other.contains(object));
            if !shared {
                self.objects.remove(object);
            }
        }

        debug!(
            target: "scene",
            "Discarded scene {:?} with {} objects",
            id,
            scene.objects().len()
        );
        Ok(scene)
    }

    //--- Object Arena -----------------------------------------------------

    pub fn objects(&self) -> &Objects {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&dyn GameObject> {
        self.objects.get(id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut (dyn GameObject + 'static)> {
        self.objects.get_mut(id)
    }

    /// Adds an object to the arena without placing it in any scene.
    pub fn spawn<T>(&mut self, object: T) -> ObjectId
    where
        T: GameObject + 'static,
    {
        self.objects.insert(Box::new(object))
    }

    /// Adds an object and appends it to `scene`'s membership.
    pub fn spawn_in<T>(&mut self, scene: SceneId, object: T) -> Result<ObjectId, StackError>
    where
        T: GameObject + 'static,
    {
        if !self.scenes.contains_key(scene) {
            return reject(StackError::UnknownScene(scene));
        }

        let id = self.spawn(object);
        if let Some(target) = self.scenes.get_mut(scene) {
            target.add_object(id);
        }
        Ok(id)
    }

    /// Removes an object from every scene and drops it.
    ///
    /// Returns `false` for stale handles.
    pub fn despawn(&mut self, id: ObjectId) -> bool {
        if !self.objects.remove(id) {
            return false;
        }

        for scene in self.scenes.values_mut() {
            while scene.remove_object(id) {}
        }
        true
    }

    /// Moves `id` from `from` to the top of `to`'s paint order.
    ///
    /// Both halves happen in this call, so no other object can observe the
    /// object in both scenes or in neither. Returns `false`, and changes
    /// nothing, if either scene is unknown or `id` is not in `from`.
    pub fn transfer_object(&mut self, id: ObjectId, from: SceneId, to: SceneId) -> bool {
        if !self.scenes.contains_key(to) {
            warn!(
                target: "scene",
                "Cannot move object {:?} to {:?}: unknown scene",
                id, to
            );
            return false;
        }

        let removed = self
            .scenes
            .get_mut(from)
            .is_some_and(|source| source.remove_object(id));
        if !removed {
            warn!(
                target: "scene",
                "Cannot move object {:?}: not a member of {:?}",
                id, from
            );
            return false;
        }

        if let Some(target) = self.scenes.get_mut(to) {
            target.add_object(id);
        }

        trace!(target: "scene", "Moved object {:?} from {:?} to {:?}", id, from, to);
        true
    }

    /// Objects of `scene` whose hitbox intersects `object`'s, excluding
    /// `object` itself.
    ///
    /// Linear scan over the scene's membership.
    pub fn overlapping_objects(&self, scene: SceneId, object: ObjectId) -> Vec<ObjectId> {
        match self.scenes.get(scene) {
            Some(s) => s.overlapping(&self.objects, object, self.objects.hitbox(object)),
            None => Vec::new(),
        }
    }

    //--- Stack Queries ----------------------------------------------------

    /// Scenes on the stack, bottom first.
    pub fn order(&self) -> &[SceneId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The topmost scene, if any.
    pub fn top(&self) -> Option<SceneId> {
        self.order.last().copied()
    }

    /// Lowest position of `scene` on the stack.
    pub fn position(&self, scene: SceneId) -> Option<usize> {
        self.order.iter().position(|&s| s == scene)
    }

    pub fn contains(&self, scene: SceneId) -> bool {
        self.order.contains(&scene)
    }

    //--- Stack Operations -------------------------------------------------

    /// Puts `scene` on top of the stack, covering the previous top.
    pub fn push(&mut self, scene: SceneId) -> Result<(), StackError> {
        self.ensure_registered(scene)?;

        if let Some(top) = self.top() {
            self.set_covered(top, true);
        }
        self.set_covered(scene, false);

        debug!(target: "scene", "Pushing scene {:?} at depth {}", scene, self.order.len());
        self.order.push(scene);
        Ok(())
    }

    /// Removes the topmost scene and uncovers the one below it.
    pub fn pop(&mut self) -> Result<SceneId, StackError> {
        let Some(popped) = self.order.pop() else {
            return reject(StackError::Empty);
        };

        if let Some(top) = self.top() {
            self.set_covered(top, false);
        }

        debug!(target: "scene", "Popped scene {:?}, depth now {}", popped, self.order.len());
        Ok(popped)
    }

    /// Inserts `scene` so that it ends up at `index`.
    ///
    /// Scenes from `index` upward shift one position up. An index at (or
    /// past) the end behaves exactly like [`push`](Self::push). Inserting
    /// below the top does not touch any cover flag.
    pub fn insert(&mut self, scene: SceneId, index: usize) -> Result<(), StackError> {
        if index >= self.order.len() {
            return self.push(scene);
        }

        self.ensure_registered(scene)?;

        debug!(target: "scene", "Inserting scene {:?} at position {}", scene, index);
        self.order.insert(index, scene);
        Ok(())
    }

    /// Replaces the lowest occurrence of `to_be_replaced` with
    /// `replacement`, in place. Returns the position.
    ///
    /// Cover flags are not transferred; the replacement keeps whatever
    /// `is_covered` it had.
    pub fn replace(
        &mut self,
        to_be_replaced: SceneId,
        replacement: SceneId,
    ) -> Result<usize, StackError> {
        self.ensure_registered(replacement)?;

        let Some(pos) = self.position(to_be_replaced) else {
            return reject(StackError::NotInStack(to_be_replaced));
        };

        debug!(
            target: "scene",
            "Replacing scene {:?} with {:?} at position {}",
            to_be_replaced, replacement, pos
        );
        self.order[pos] = replacement;
        Ok(pos)
    }

    /// Removes the lowest occurrence of `scene`. Returns its position.
    ///
    /// Removing the top behaves like [`pop`](Self::pop); removing from
    /// below leaves every cover flag as it was.
    pub fn remove(&mut self, scene: SceneId) -> Result<usize, StackError> {
        let Some(pos) = self.position(scene) else {
            return reject(StackError::NotInStack(scene));
        };

        if pos + 1 == self.order.len() {
            self.pop()?;
        } else {
            debug!(target: "scene", "Removing scene {:?} from position {}", scene, pos);
            self.order.remove(pos);
        }
        Ok(pos)
    }

    /// Removes every scene from the stack. The scenes stay registered.
    pub fn clear(&mut self) {
        debug!(target: "scene", "Clearing {} scenes from stack", self.order.len());
        self.order.clear();
    }

    /// Re-derives `is_covered` for every scene on the stack from its
    /// position: only the top is uncovered.
    pub fn refresh_cover(&mut self) {
        let len = self.order.len();
        for i in 0..len {
            let id = self.order[i];
            self.set_covered(id, i + 1 < len);
        }
    }

    //--- Logic Pass -------------------------------------------------------

    /// Runs one logic tick over the stack, bottom to top.
    ///
    /// Iterates a snapshot of the order taken on entry: stack changes made
    /// by objects apply from the next tick. A scene removed mid-pass may
    /// therefore still be updated once in this pass. Scenes that are
    /// covered and pause logic when covered are skipped.
    pub fn update(&mut self, input: &InputState) {
        let snapshot = self.order.clone();
        trace!(target: "scene", "Logic pass over {} scenes", snapshot.len());

        for id in snapshot {
            let paused = self.scenes.get(id).map_or(true, Scene::is_logic_paused);
            if paused {
                continue;
            }
            self.update_scene(id, input);
        }
    }

    /// Updates one scene regardless of its cover state.
    ///
    /// Each object in the membership snapshot is updated once, in order,
    /// followed by the scene's script. Objects added meanwhile wait for the
    /// next tick; objects removed from the membership (but not despawned)
    /// before their turn are still updated in this pass.
    pub fn update_scene(&mut self, scene: SceneId, input: &InputState) {
        let Some(snapshot) = self.scenes.get(scene).map(|s| s.objects().to_vec()) else {
            return;
        };

        for id in snapshot {
            let Some(mut object) = self.objects.detach(id) else {
                continue;
            };
            object.update(id, &mut UpdateContext::new(self, scene, input));
            self.objects.reattach(id, object);
        }

        let Some(mut script) = self.scenes.get_mut(scene).and_then(|s| s.script.take()) else {
            return;
        };
        script.update(&mut UpdateContext::new(self, scene, input));
        if let Some(s) = self.scenes.get_mut(scene) {
            s.script.get_or_insert(script);
        }
    }

    //--- Draw Pass --------------------------------------------------------

    /// Draws the stack bottom to top over the live order, skipping scenes
    /// that are covered and hide when covered.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for &id in &self.order {
            if let Some(scene) = self.scenes.get(id) {
                if !scene.is_hidden() {
                    scene.draw(&self.objects, surface);
                }
            }
        }
    }

    /// Draws one scene regardless of its cover state.
    pub fn draw_scene(&self, scene: SceneId, surface: &mut dyn Surface) {
        if let Some(s) = self.scenes.get(scene) {
            s.draw(&self.objects, surface);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn ensure_registered(&self, scene: SceneId) -> Result<(), StackError> {
        if self.scenes.contains_key(scene) {
            Ok(())
        } else {
            reject(StackError::UnknownScene(scene))
        }
    }

    fn set_covered(&mut self, scene: SceneId, covered: bool) {
        if let Some(s) = self.scenes.get_mut(scene) {
            s.set_covered(covered);
        }
    }
}

/// Logs a usage error and hands it back to the caller.
fn reject<T>(error: StackError) -> Result<T, StackError> {
    warn!(target: "scene", "{}", error);
    Err(error)
}

//=========================================================================
// Unit Tests
//=========================================================================
