//! The set of chickens currently on screen
//!
//! Chickens enter at the left edge when spawned, run right with a capped
//! acceleration, and are removed for points the tick after they reach the
//! right edge of the play area.

use crate::chicken::Chicken;
use crate::sprite::SpriteSheet;
use rand::Rng;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::debug;

/// Points awarded for each chicken that makes it across
pub const SCORE_PER_CHICKEN: u32 = 10;

/// Visible area chickens run across, read from the window every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

impl PlayArea {
    pub fn new(width: u32, height: u32) -> Self {
        PlayArea {
            width: width as f64,
            height: height as f64,
        }
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    pub fn right_edge(&self) -> f64 {
        self.width
    }
}

#[derive(Debug, Default)]
pub struct Flock {
    chickens: Vec<Chicken>,
}

impl Flock {
    pub fn new() -> Self {
        Flock {
            chickens: Vec::new(),
        }
    }

    /// Add a chicken at the left edge on a random row in `[0, half_height)`
    pub fn spawn(&mut self, area: PlayArea, rng: &mut impl Rng) {
        let unit: f64 = rng.gen_range(0.0..1.0);
        let y = area.half_height() * unit;
        debug!(y, count = self.chickens.len() + 1, "spawned chicken");
        self.chickens.push(Chicken::new(y));
    }

    /// Advance one tick and return the points earned.
    ///
    /// Chickens already at or past the right edge are dropped first (order of
    /// the rest is kept), then every survivor accelerates and moves.
    pub fn update(&mut self, area: PlayArea) -> u32 {
        let right_edge = area.right_edge();
        let before = self.chickens.len();
        self.chickens.retain(|chicken| !chicken.has_crossed(right_edge));
        let crossed = (before - self.chickens.len()) as u32;

        for chicken in &mut self.chickens {
            chicken.update();
        }

        if crossed > 0 {
            debug!(crossed, remaining = self.chickens.len(), "chickens made it across");
        }
        crossed * SCORE_PER_CHICKEN
    }

    /// Draw every chicken, stepping each one's walk cycle
    pub fn render(&mut self, canvas: &mut Canvas<Window>, sheet: &SpriteSheet) -> Result<(), String> {
        for chicken in &mut self.chickens {
            chicken.render(canvas, sheet)?;
        }
        Ok(())
    }

    pub fn chickens(&self) -> &[Chicken] {
        &self.chickens
    }

    pub fn len(&self) -> usize {
        self.chickens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chickens.is_empty()
    }

    #[cfg(test)]
    pub fn push(&mut self, chicken: Chicken) {
        self.chickens.push(chicken);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn area() -> PlayArea {
        PlayArea::new(1024, 768)
    }

    fn chicken_at(x: f64, y: f64) -> Chicken {
        let mut chicken = Chicken::new(y);
        chicken.x = x;
        chicken
    }

    #[test]
    fn test_spawn_lands_in_upper_band() {
        let mut rng = create_test_rng();
        let mut flock = Flock::new();

        for _ in 0..1000 {
            flock.spawn(area(), &mut rng);
        }

        assert_eq!(flock.len(), 1000);
        for chicken in flock.chickens() {
            assert_eq!(chicken.x, 0.0);
            assert_eq!(chicken.speed, 0.0);
            assert!(chicken.y >= 0.0 && chicken.y < 384.0, "y = {}", chicken.y);
        }
    }

    #[test]
    fn test_spawn_band_follows_window_height() {
        let mut rng = create_test_rng();
        let mut flock = Flock::new();
        let small = PlayArea::new(200, 100);

        for _ in 0..200 {
            flock.spawn(small, &mut rng);
        }
        assert!(flock.chickens().iter().all(|c| c.y < 50.0));
    }

    #[test]
    fn test_update_moves_without_scoring() {
        let mut flock = Flock::new();
        flock.push(Chicken::new(100.0));

        let mut points = 0;
        for _ in 0..6 {
            points += flock.update(area());
        }

        assert_eq!(points, 0);
        assert_eq!(flock.chickens()[0].speed, 3.0);
        assert_eq!(flock.chickens()[0].x, 10.5);
    }

    #[test]
    fn test_crossing_chicken_scores_once() {
        let mut flock = Flock::new();
        flock.push(chicken_at(1022.0, 5.0));

        // Not yet at the edge: moves to 1022.5
        assert_eq!(flock.update(area()), 0);
        assert_eq!(flock.len(), 1);

        flock.push(chicken_at(0.0, 6.0));

        // 1022.5 -> 1023.5 -> 1025.0, removed on the tick after it crosses
        assert_eq!(flock.update(area()), 0);
        assert_eq!(flock.update(area()), 0);
        assert!(flock.chickens()[0].has_crossed(1024.0));
        assert_eq!(flock.update(area()), SCORE_PER_CHICKEN);
        assert_eq!(flock.len(), 1);
        assert_eq!(flock.update(area()), 0);
    }

    #[test]
    fn test_exact_edge_counts_as_crossed() {
        let mut flock = Flock::new();
        flock.push(chicken_at(1024.0, 1.0));
        assert_eq!(flock.update(area()), 10);
        assert!(flock.is_empty());
    }

    #[test]
    fn test_removal_keeps_survivor_order() {
        let mut flock = Flock::new();
        flock.push(chicken_at(10.0, 1.0));
        flock.push(chicken_at(2000.0, 2.0));
        flock.push(chicken_at(20.0, 3.0));
        flock.push(chicken_at(1024.0, 4.0));
        flock.push(chicken_at(30.0, 5.0));

        assert_eq!(flock.update(area()), 20);

        let rows: Vec<f64> = flock.chickens().iter().map(|c| c.y).collect();
        assert_eq!(rows, vec![1.0, 3.0, 5.0]);
        // Survivors still moved this tick
        assert!(flock.chickens().iter().all(|c| c.speed == 0.5));
    }

    #[test]
    fn test_narrower_window_scores_sooner() {
        let mut flock = Flock::new();
        flock.push(chicken_at(600.0, 1.0));
        assert_eq!(flock.update(PlayArea::new(640, 480)), 0);
        assert_eq!(flock.update(PlayArea::new(500, 480)), 10);
    }

    #[test]
    fn test_play_area_edges() {
        let area = area();
        assert_eq!(area.right_edge(), 1024.0);
        assert_eq!(area.half_height(), 384.0);
    }
}
