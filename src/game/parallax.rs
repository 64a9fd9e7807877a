//! Parallax background scrolling
//!
//! Each layer is drawn twice side by side at `scale`, so the offset wraps
//! after one scaled layer width has scrolled past.

use macroquad::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    /// Unscaled texture width
    pub width: f32,
    /// Leftward scroll speed (pixels per second)
    pub speed: f32,
    /// Draw scale applied to both axes
    pub scale: f32,
    /// Current horizontal offset, always in `(-width * scale, 0]`
    pub offset: f32,
}

impl ParallaxLayer {
    pub fn new(width: f32, speed: f32, scale: f32) -> Self {
        Self { width, speed, scale, offset: 0.0 }
    }

    /// Width of one scaled copy of the layer
    pub fn span(&self) -> f32 {
        self.width * self.scale
    }

    pub fn scroll(&mut self, delta_time: f32) {
        self.offset -= self.speed * delta_time;
        if self.offset <= -self.span() {
            self.offset = 0.0;
        }
    }

    /// Top-left positions of the two copies to draw this frame
    pub fn draw_positions(&self) -> [Vec2; 2] {
        [
            Vec2::new(self.offset, 0.0),
            Vec2::new(self.offset + self.span(), 0.0),
        ]
    }
}

/// The back, mid and foreground layers, scrolled together
#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    pub layers: [ParallaxLayer; 3],
}

impl Parallax {
    pub fn new(layers: [ParallaxLayer; 3]) -> Self {
        Self { layers }
    }

    pub fn scroll(&mut self, delta_time: f32) {
        for layer in &mut self.layers {
            layer.scroll(delta_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 64.0;

    #[test]
    fn test_offset_is_minus_speed_times_time_before_wrap() {
        let mut layer = ParallaxLayer::new(256.0, 20.0, 2.0);
        for _ in 0..64 * 10 {
            layer.scroll(DT);
        }
        assert!((layer.offset + 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_offset_wraps_to_zero() {
        let mut layer = ParallaxLayer::new(256.0, 80.0, 2.0);
        layer.offset = -511.0;
        // 8px step crosses the 512px span: reset, no remainder carried
        layer.scroll(0.1);
        assert_eq!(layer.offset, 0.0);
    }

    #[test]
    fn test_offset_exactly_on_span_wraps() {
        let mut layer = ParallaxLayer::new(256.0, 80.0, 2.0);
        layer.offset = -502.0;
        // 10px step lands exactly on -512
        layer.scroll(0.125);
        assert_eq!(layer.offset, 0.0);
        layer.scroll(0.125);
        assert_eq!(layer.offset, -10.0);
    }

    #[test]
    fn test_offset_stays_in_half_open_range() {
        let mut layer = ParallaxLayer::new(100.0, 40.0, 2.0);
        for i in 0..10_000 {
            layer.scroll(if i % 3 == 0 { 0.1 } else { 0.013 });
            assert!(layer.offset <= 0.0);
            assert!(layer.offset > -layer.span());
        }
    }

    #[test]
    fn test_second_copy_abuts_first() {
        let mut layer = ParallaxLayer::new(256.0, 40.0, 2.0);
        layer.scroll(1.0);
        let [a, b] = layer.draw_positions();
        assert_eq!(a.x, -40.0);
        assert_eq!(b.x, a.x + 512.0);
        assert_eq!(a.y, 0.0);
    }

    #[test]
    fn test_layers_scroll_independently() {
        let mut parallax = Parallax::new([
            ParallaxLayer::new(256.0, 20.0, 2.0),
            ParallaxLayer::new(256.0, 40.0, 2.0),
            ParallaxLayer::new(256.0, 80.0, 2.0),
        ]);
        parallax.scroll(0.5);
        let offsets: Vec<f32> = parallax.layers.iter().map(|l| l.offset).collect();
        assert_eq!(offsets, vec![-10.0, -20.0, -40.0]);
    }
}
