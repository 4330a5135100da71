//=========================================================================
// Render Surface
//=========================================================================
//
// The drawing seam between scenes and whatever backend presents a frame.
//
// Architecture:
//   SceneStack::draw() → Scene → GameObject::draw(&mut dyn Surface)
//                                          ↓
//                                   DrawList (records)
//                                          ↓
//                                 FramePresenter (backend)
//
// Scenes never interpret the surface. Call order is paint order:
// whatever is drawn first ends up underneath.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::geometry::Rect;

//=== Color ===============================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

//=== Surface =============================================================

/// Drawing target handed to scenes and objects during the draw pass.
///
/// Sprite names are opaque keys resolved by the backend; asset loading is
/// not this crate's concern.
pub trait Surface {
    /// Fills `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws the sprite registered under `sprite`, scaled into `rect`.
    fn draw_sprite(&mut self, sprite: &str, rect: Rect);
}

//=== DrawCommand =========================================================

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    Sprite { sprite: String, rect: Rect },
}

//=== DrawList ============================================================

/// Surface that records draw calls in paint order.
///
/// The frame driver clears and refills one list per tick, then hands it to
/// the presenter. Capacity is kept across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, bottom layer first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_sprite(&mut self, sprite: &str, rect: Rect) {
        self.commands.push(DrawCommand::Sprite {
            sprite: sprite.to_owned(),
            rect,
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_list_records_in_call_order() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 8.0, 8.0);

        list.fill_rect(rect, Color::BLACK);
        list.draw_sprite("door", rect);

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::FillRect { rect, color: Color::BLACK },
                DrawCommand::Sprite { sprite: "door".into(), rect },
            ]
        );
    }

    #[test]
    fn clear_empties_list() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        assert_eq!(list.len(), 1);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn color_constructors() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
        assert_eq!(Color::TRANSPARENT.a, 0);
    }
}
