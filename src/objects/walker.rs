//=========================================================================
// Walker
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Body, Rect};
use crate::core::render::Surface;
use crate::core::scene::{GameObject, ObjectId, UpdateContext};

//=== Walker ==============================================================

/// Player-style object steered by the arrow keys.
///
/// Moves `speed` units per tick along each held axis; diagonal movement is
/// not normalized.
#[derive(Debug, Clone)]
pub struct Walker {
    pub body: Body,
    pub speed: f32,
    sprite: String,
}

impl Walker {
    pub fn new(body: Body, speed: f32, sprite: impl Into<String>) -> Self {
        Self {
            body,
            speed,
            sprite: sprite.into(),
        }
    }
}

impl GameObject for Walker {
    fn hitbox(&self) -> Option<Rect> {
        self.body.hitbox()
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_sprite(&self.sprite, self.body.bounds());
    }

    fn update(&mut self, _this: ObjectId, ctx: &mut UpdateContext<'_>) {
        let (dx, dy) = ctx.input().arrow_axis();
        self.body.translate(dx * self.speed, dy * self.speed);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, InputState, KeyCode};
    use crate::core::scene::{Scene, SceneStack};

    fn walker_position(stack: &SceneStack, id: ObjectId) -> Rect {
        stack.object(id).and_then(|o| o.hitbox()).unwrap()
    }

    #[test]
    fn walks_along_held_arrows() {
        let mut stack = SceneStack::new();
        let field = stack.add_scene(Scene::new());
        stack.push(field).unwrap();
        let id = stack
            .spawn_in(field, Walker::new(Body::new(0.0, 0.0, 1.0, 1.0), 2.0, "hero"))
            .unwrap();

        let mut input = InputState::new();
        input.apply(&[
            InputEvent::KeyDown(KeyCode::ArrowRight),
            InputEvent::KeyDown(KeyCode::ArrowDown),
        ]);

        stack.update(&input);
        stack.update(&input);

        let at = walker_position(&stack, id);
        assert_eq!((at.x(), at.y()), (4.0, 4.0));
    }

    #[test]
    fn opposing_arrows_cancel() {
        let mut stack = SceneStack::new();
        let field = stack.add_scene(Scene::new());
        stack.push(field).unwrap();
        let id = stack
            .spawn_in(field, Walker::new(Body::new(3.0, 3.0, 1.0, 1.0), 1.0, "hero"))
            .unwrap();

        let mut input = InputState::new();
        input.apply(&[
            InputEvent::KeyDown(KeyCode::ArrowLeft),
            InputEvent::KeyDown(KeyCode::ArrowRight),
        ]);
        stack.update(&input);

        let at = walker_position(&stack, id);
        assert_eq!((at.x(), at.y()), (3.0, 3.0));
    }
}
