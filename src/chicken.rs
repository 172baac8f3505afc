use crate::animation::FrameCycle;
use crate::sprite::{SpriteSheet, CELL_SIZE};
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const CHICKEN_MAX_SPEED: f64 = 3.0;
pub const CHICKEN_ACCELERATION: f64 = 0.5;

/// Draw scale applied to the 24x24 cell
const DRAW_SCALE: u32 = 3;

/// A chicken running from the left edge to the right
#[derive(Debug, Clone, PartialEq)]
pub struct Chicken {
    pub x: f64,
    pub y: f64, // Fixed at spawn
    pub speed: f64,
    animation: FrameCycle,
}

impl Chicken {
    /// A stationary chicken at the left edge, on row `y`
    pub fn new(y: f64) -> Self {
        Chicken {
            x: 0.0,
            y,
            speed: 0.0,
            animation: FrameCycle::running(),
        }
    }

    /// Speed up by one step (capped), then move by the new speed
    pub fn update(&mut self) {
        self.speed = (self.speed + CHICKEN_ACCELERATION).min(CHICKEN_MAX_SPEED);
        self.x += self.speed;
    }

    pub fn has_crossed(&self, right_edge: f64) -> bool {
        self.x >= right_edge
    }

    /// Where the chicken is drawn. The row is doubled on screen, so the
    /// spawn band in the upper half of the play area covers its full height.
    pub fn screen_position(&self) -> Point {
        Point::new(self.x as i32, (self.y * 2.0) as i32)
    }

    /// Draw the next walk-cycle frame, 3x scale, centred on the screen position
    pub fn render(&mut self, canvas: &mut Canvas<Window>, sheet: &SpriteSheet) -> Result<(), String> {
        let size = CELL_SIZE * DRAW_SCALE;
        let dest_rect = Rect::from_center(self.screen_position(), size, size);
        let frame = self.animation.next_frame();
        sheet.render_frame(canvas, frame, dest_rect)
    }

    #[cfg(test)]
    pub fn animation(&self) -> &FrameCycle {
        &self.animation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_at_rest_on_left_edge() {
        let chicken = Chicken::new(42.0);
        assert_eq!(chicken.x, 0.0);
        assert_eq!(chicken.y, 42.0);
        assert_eq!(chicken.speed, 0.0);
        assert_eq!(chicken.animation().cursor(), 0);
    }

    #[test]
    fn test_speed_follows_capped_ramp() {
        let mut chicken = Chicken::new(0.0);
        for n in 1..=20 {
            chicken.update();
            let expected = (CHICKEN_ACCELERATION * n as f64).min(CHICKEN_MAX_SPEED);
            assert_eq!(chicken.speed, expected, "tick {}", n);
        }
    }

    #[test]
    fn test_position_is_sum_of_speeds() {
        let mut chicken = Chicken::new(100.0);
        for _ in 0..6 {
            chicken.update();
        }
        assert_eq!(chicken.speed, 3.0);
        assert_eq!(chicken.x, 10.5);
        assert_eq!(chicken.y, 100.0);

        // At top speed each tick adds exactly 3
        chicken.update();
        assert_eq!(chicken.x, 13.5);
    }

    #[test]
    fn test_crossing_is_inclusive() {
        let mut chicken = Chicken::new(0.0);
        chicken.x = 1023.9;
        assert!(!chicken.has_crossed(1024.0));
        chicken.x = 1024.0;
        assert!(chicken.has_crossed(1024.0));
        chicken.x = 1030.0;
        assert!(chicken.has_crossed(1024.0));
    }

    #[test]
    fn test_screen_position_doubles_row() {
        let mut chicken = Chicken::new(100.0);
        chicken.x = 12.5;
        assert_eq!(chicken.screen_position(), Point::new(12, 200));
    }
}
