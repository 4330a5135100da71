//=========================================================================
// Scene
//=========================================================================
//
// A screen or room: an ordered set of object handles, cover flags and an
// optional script deciding backdrop and scene-level logic.
//
// Membership order is paint order. It is stable within a tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::object::{ObjectId, Objects};
use super::SceneScript;
use crate::core::geometry::Rect;
use crate::core::render::Surface;

//=== Scene ===============================================================

/// A scene owned by a [`SceneStack`](super::SceneStack).
///
/// `is_covered` is maintained by the stack and is read-only here. The
/// three `cover_*` flags are policy set by application code.
pub struct Scene {
    objects: Vec<ObjectId>,
    is_covered: bool,

    /// Skip drawing while another scene sits above this one.
    pub cover_disables_drawing: bool,

    /// Skip logic updates while another scene sits above this one.
    pub cover_pauses_logic: bool,

    /// Audio should pause while covered. Carried for audio backends; the
    /// stack itself does not act on it.
    pub cover_pauses_audio: bool,

    pub(crate) script: Option<Box<dyn SceneScript>>,
}

impl Scene {
    //--- Construction -----------------------------------------------------

    /// Creates an empty scene with all cover flags off.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            is_covered: false,
            cover_disables_drawing: false,
            cover_pauses_logic: false,
            cover_pauses_audio: false,
            script: None,
        }
    }

    /// Creates an empty scene driven by `script`.
    pub fn with_script<T>(script: T) -> Self
    where
        T: SceneScript + 'static,
    {
        Self {
            script: Some(Box::new(script)),
            ..Self::new()
        }
    }

    pub fn disables_drawing_when_covered(mut self, value: bool) -> Self {
        self.cover_disables_drawing = value;
        self
    }

    pub fn pauses_logic_when_covered(mut self, value: bool) -> Self {
        self.cover_pauses_logic = value;
        self
    }

    pub fn pauses_audio_when_covered(mut self, value: bool) -> Self {
        self.cover_pauses_audio = value;
        self
    }

    //--- Cover State ------------------------------------------------------

    /// Whether at least one scene sits above this one in the stack.
    ///
    /// Undefined for scenes that are not on the stack.
    pub fn is_covered(&self) -> bool {
        self.is_covered
    }

    pub(crate) fn set_covered(&mut self, covered: bool) {
        self.is_covered = covered;
    }

    /// `true` if the logic pass must skip this scene.
    pub fn is_logic_paused(&self) -> bool {
        self.is_covered && self.cover_pauses_logic
    }

    /// `true` if the draw pass must skip this scene.
    pub fn is_hidden(&self) -> bool {
        self.is_covered && self.cover_disables_drawing
    }

    //--- Membership -------------------------------------------------------

    /// Object handles in paint order (first is drawn underneath).
    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    /// Appends `id` on top of the paint order.
    pub fn add_object(&mut self, id: ObjectId) {
        self.objects.push(id);
    }

    /// Removes the first occurrence of `id`. Returns `false` if absent.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        match self.objects.iter().position(|&o| o == id) {
            Some(pos) => {
                self.objects.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains(&id)
    }

    //--- Overlap Query ----------------------------------------------------

    /// Objects of this scene whose hitbox intersects `hitbox`, excluding
    /// `exclude` by identity.
    ///
    /// A `None` reference hitbox yields nothing without scanning. Objects
    /// without a hitbox (or detached for their own update) never match.
    pub(crate) fn overlapping(
        &self,
        objects: &Objects,
        exclude: ObjectId,
        hitbox: Option<Rect>,
    ) -> Vec<ObjectId> {
        let Some(reference) = hitbox else {
            return Vec::new();
        };

        self.objects
            .iter()
            .copied()
            .filter(|&id| id != exclude)
            .filter(|&id| {
                objects
                    .hitbox(id)
                    .is_some_and(|other| other.intersects(&reference))
            })
            .collect()
    }

    //--- Draw -------------------------------------------------------------

    /// Draws the backdrop, then every live object in membership order.
    pub(crate) fn draw(&self, objects: &Objects, surface: &mut dyn Surface) {
        if let Some(script) = &self.script {
            script.draw_backdrop(surface);
        }

        for &id in &self.objects {
            if let Some(object) = objects.get(id) {
                object.draw(surface);
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("objects", &self.objects.len())
            .field("is_covered", &self.is_covered)
            .field("cover_disables_drawing", &self.cover_disables_drawing)
            .field("cover_pauses_logic", &self.cover_pauses_logic)
            .field("cover_pauses_audio", &self.cover_pauses_audio)
            .field("scripted", &self.script.is_some())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Body;
    use crate::core::render::{DrawCommand, DrawList};
    use crate::core::scene::GameObject;

    struct Block {
        body: Body,
        sprite: &'static str,
    }

    impl GameObject for Block {
        fn hitbox(&self) -> Option<Rect> {
            self.body.hitbox()
        }

        fn draw(&self, surface: &mut dyn Surface) {
            surface.draw_sprite(self.sprite, self.body.bounds());
        }
    }

    fn block(objects: &mut Objects, body: Body, sprite: &'static str) -> ObjectId {
        objects.insert(Box::new(Block { body, sprite }))
    }

    //--- Membership -------------------------------------------------------

    #[test]
    fn remove_object_only_first_occurrence() {
        let mut objects = Objects::new();
        let id = block(&mut objects, Body::new(0.0, 0.0, 1.0, 1.0), "a");

        let mut scene = Scene::new();
        scene.add_object(id);
        scene.add_object(id);

        assert!(scene.remove_object(id));
        assert_eq!(scene.objects(), &[id]);
        assert!(scene.remove_object(id));
        assert!(!scene.remove_object(id));
    }

    #[test]
    fn new_scene_flags_are_off() {
        let scene = Scene::new();
        assert!(!scene.is_covered());
        assert!(!scene.cover_disables_drawing);
        assert!(!scene.cover_pauses_logic);
        assert!(!scene.cover_pauses_audio);
    }

    #[test]
    fn paused_and_hidden_require_cover() {
        let mut scene = Scene::new()
            .pauses_logic_when_covered(true)
            .disables_drawing_when_covered(true);

        assert!(!scene.is_logic_paused());
        assert!(!scene.is_hidden());

        scene.set_covered(true);
        assert!(scene.is_logic_paused());
        assert!(scene.is_hidden());
    }

    //--- Overlap ----------------------------------------------------------

    #[test]
    fn overlapping_excludes_reference_and_disjoint() {
        let mut objects = Objects::new();
        let me = block(&mut objects, Body::new(0.0, 0.0, 10.0, 10.0), "me");
        let near = block(&mut objects, Body::new(5.0, 5.0, 10.0, 10.0), "near");
        let far = block(&mut objects, Body::new(50.0, 50.0, 10.0, 10.0), "far");

        let mut scene = Scene::new();
        for id in [me, near, far] {
            scene.add_object(id);
        }

        let hits = scene.overlapping(&objects, me, objects.hitbox(me));
        assert_eq!(hits, vec![near]);
    }

    #[test]
    fn overlapping_skips_objects_without_hitbox() {
        let mut objects = Objects::new();
        let me = block(&mut objects, Body::new(0.0, 0.0, 10.0, 10.0), "me");
        let ghost = block(&mut objects, Body::intangible(0.0, 0.0, 10.0, 10.0), "ghost");

        let mut scene = Scene::new();
        scene.add_object(me);
        scene.add_object(ghost);

        assert!(scene.overlapping(&objects, me, objects.hitbox(me)).is_empty());
    }

    #[test]
    fn overlapping_with_no_reference_hitbox_is_empty() {
        let mut objects = Objects::new();
        let ghost = block(&mut objects, Body::intangible(0.0, 0.0, 10.0, 10.0), "ghost");
        let solid = block(&mut objects, Body::new(0.0, 0.0, 10.0, 10.0), "solid");

        let mut scene = Scene::new();
        scene.add_object(ghost);
        scene.add_object(solid);

        assert!(scene.overlapping(&objects, ghost, None).is_empty());
    }

    #[test]
    fn overlapping_ignores_objects_of_other_scenes() {
        let mut objects = Objects::new();
        let me = block(&mut objects, Body::new(0.0, 0.0, 10.0, 10.0), "me");
        let elsewhere = block(&mut objects, Body::new(0.0, 0.0, 10.0, 10.0), "elsewhere");

        let mut scene = Scene::new();
        scene.add_object(me);

        let mut other = Scene::new();
        other.add_object(elsewhere);

        assert!(scene.overlapping(&objects, me, objects.hitbox(me)).is_empty());
    }

    //--- Draw -------------------------------------------------------------

    #[test]
    fn draw_follows_membership_order() {
        let mut objects = Objects::new();
        let under = block(&mut objects, Body::new(0.0, 0.0, 1.0, 1.0), "under");
        let over = block(&mut objects, Body::new(0.0, 0.0, 1.0, 1.0), "over");

        let mut scene = Scene::new();
        scene.add_object(under);
        scene.add_object(over);

        let mut list = DrawList::new();
        scene.draw(&objects, &mut list);

        let names: Vec<_> = list
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Sprite { sprite, .. } => sprite.as_str(),
                DrawCommand::FillRect { .. } => "fill",
            })
            .collect();
        assert_eq!(names, vec!["under", "over"]);
    }

    #[test]
    fn draw_skips_stale_handles() {
        let mut objects = Objects::new();
        let gone = block(&mut objects, Body::new(0.0, 0.0, 1.0, 1.0), "gone");
        objects.remove(gone);

        let mut scene = Scene::new();
        scene.add_object(gone);

        let mut list = DrawList::new();
        scene.draw(&objects, &mut list);
        assert!(list.is_empty());
    }
}
