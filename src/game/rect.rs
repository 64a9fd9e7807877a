//! Axis-aligned rectangles for sprite bounds and hitboxes

use macroquad::math::Vec2;

/// A rectangle defined by top-left position and size, in display pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size placed at `pos`
    pub fn at(pos: Vec2, w: f32, h: f32) -> Self {
        Self::new(pos.x, pos.y, w, h)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shrink by padding on all sides.
    /// Size never goes negative; an over-padded rect collapses to a point.
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Strict intersection test: shared edges do not count as overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn to_macroquad(self) -> macroquad::math::Rect {
        macroquad::math::Rect::new(self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_shrinks_every_side() {
        let r = Rect::new(10.0, 20.0, 200.0, 120.0).pad(50.0);
        assert_eq!(r, Rect::new(60.0, 70.0, 100.0, 20.0));
    }

    #[test]
    fn test_pad_collapses_to_point() {
        let r = Rect::new(0.0, 0.0, 60.0, 100.0).pad(50.0);
        assert_eq!(r, Rect::new(50.0, 50.0, 0.0, 0.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_point_inside_rect_overlaps() {
        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(point.overlaps(&r));
    }
}
