//=========================================================================
// Door
//=========================================================================
//
// Scene transition trigger. When the traveller's hitbox overlaps the
// door, the destination scene is built, the traveller is moved into it
// and the door's scene is replaced by it at the same stack position.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Body, Rect};
use crate::core::render::Surface;
use crate::core::scene::{GameObject, ObjectId, SceneId, SceneStack, UpdateContext};

//=== Destination =========================================================

/// Builds (or looks up) the scene a door leads to.
///
/// Called once per crossing, with the stack the door lives in.
pub type Destination = Box<dyn FnMut(&mut SceneStack) -> SceneId + Send>;

//=== Door ================================================================

pub struct Door {
    body: Body,
    sprite: String,
    traveller: ObjectId,
    destination: Destination,
    discard_origin: bool,
}

impl Door {
    /// A door at `body` that sends `traveller` to whatever `destination`
    /// returns. An intangible body makes the door inert.
    pub fn new<F>(body: Body, sprite: impl Into<String>, traveller: ObjectId, destination: F) -> Self
    where
        F: FnMut(&mut SceneStack) -> SceneId + Send + 'static,
    {
        Self {
            body,
            sprite: sprite.into(),
            traveller,
            destination: Box::new(destination),
            discard_origin: false,
        }
    }

    /// Drops the scene the door stood in after the crossing, together
    /// with the objects left behind (the door included).
    pub fn discarding_origin(mut self) -> Self {
        self.discard_origin = true;
        self
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Swaps the scenes and moves the traveller. Returns `false`, with
    /// nothing built or moved, if the door's scene already left the stack
    /// or the stack refused the destination.
    fn cross(&mut self, ctx: &mut UpdateContext<'_>) -> bool {
        let origin = ctx.scene_id();
        let stack = ctx.stack_mut();

        // Scene was removed earlier in this pass and only finishes its tick
        if !stack.contains(origin) {
            trace!(target: "scene", "Door in {:?} ignored: scene left the stack", origin);
            return false;
        }

        let destination = (self.destination)(stack);
        if stack.replace(origin, destination).is_err() {
            return false;
        }

        // Traveller was found among the origin's objects, so this holds
        stack.transfer_object(self.traveller, origin, destination);

        debug!(
            target: "scene",
            "Door moved {:?} from {:?} to {:?}",
            self.traveller, origin, destination
        );

        if self.discard_origin && !stack.contains(origin) {
            if let Err(e) = stack.discard_scene(origin) {
                warn!(target: "scene", "Door could not discard its scene: {}", e);
            }
        }
        true
    }
}

impl GameObject for Door {
    fn hitbox(&self) -> Option<Rect> {
        self.body.hitbox()
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_sprite(&self.sprite, self.body.bounds());
    }

    fn update(&mut self, this: ObjectId, ctx: &mut UpdateContext<'_>) {
        if ctx.overlapping(this, self.hitbox()).contains(&self.traveller) {
            self.cross(ctx);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
