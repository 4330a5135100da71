//=========================================================================
// Geometry
//=========================================================================
//
// Axis-aligned rectangles for hitboxes and draw bounds, plus the `Body`
// helper most objects embed to carry their position and size.
//
// Coordinates are screen space: origin top-left, y grows downward.
//
//=========================================================================

//=== External Dependencies ===============================================

use nalgebra::Vector2;

//=== Rect ================================================================

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vector2<f32>,
    pub size: Vector2<f32>,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vector2::new(x, y),
            size: Vector2::new(w, h),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Right edge (exclusive).
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.x
    }

    /// Bottom edge (exclusive).
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// A rectangle with no area never intersects anything.
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Returns `true` if the interiors of both rectangles overlap.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.origin.x < other.max_x()
            && other.origin.x < self.max_x()
            && self.origin.y < other.max_y()
            && other.origin.y < self.max_y()
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.origin.x && x < self.max_x() && y >= self.origin.y && y < self.max_y()
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            origin: self.origin + Vector2::new(dx, dy),
            size: self.size,
        }
    }
}

//=== Body ================================================================

/// Position and size of an object, with an optional hitbox.
///
/// The hitbox is derived from position and size. Non-solid bodies report
/// no hitbox and therefore never take part in overlap queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector2<f32>,
    pub size: Vector2<f32>,
    pub solid: bool,
}

impl Body {
    /// Creates a solid body.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            position: Vector2::new(x, y),
            size: Vector2::new(w, h),
            solid: true,
        }
    }

    /// Creates a body without a hitbox (decoration, backdrop props).
    pub fn intangible(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            solid: false,
            ..Self::new(x, y, w, h)
        }
    }

    /// Screen-space bounds, regardless of solidity.
    pub fn bounds(&self) -> Rect {
        Rect {
            origin: self.position,
            size: self.size,
        }
    }

    pub fn hitbox(&self) -> Option<Rect> {
        self.solid.then(|| self.bounds())
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position += Vector2::new(dx, dy);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn empty_rect_never_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let flat = Rect::new(2.0, 2.0, 5.0, 0.0);
        assert!(flat.is_empty());
        assert!(!a.intersects(&flat));
        assert!(!flat.intersects(&a));
    }

    #[test]
    fn contains_point_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(0.0, 0.0));
        assert!(r.contains_point(9.9, 9.9));
        assert!(!r.contains_point(10.0, 5.0));
    }

    #[test]
    fn translated_keeps_size() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).translated(10.0, -2.0);
        assert_eq!(r, Rect::new(11.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn body_hitbox_follows_position() {
        let mut body = Body::new(0.0, 0.0, 4.0, 4.0);
        body.translate(3.0, 1.0);
        assert_eq!(body.hitbox(), Some(Rect::new(3.0, 1.0, 4.0, 4.0)));
    }

    #[test]
    fn intangible_body_has_no_hitbox() {
        let body = Body::intangible(0.0, 0.0, 4.0, 4.0);
        assert_eq!(body.hitbox(), None);
        assert_eq!(body.bounds(), Rect::new(0.0, 0.0, 4.0, 4.0));
    }
}
