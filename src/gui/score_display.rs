use crate::config::Rgb;
use crate::text::{draw_simple_text, GLYPH_HEIGHT};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Text shown for `score`
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Score readout pinned to the bottom-left corner
pub struct ScoreDisplay {
    margin: i32,
    scale: u32,
    color: Rgb,
}

impl ScoreDisplay {
    pub fn new() -> Self {
        ScoreDisplay {
            margin: 10,
            scale: 2,
            color: Rgb::new(255, 255, 255),
        }
    }

    /// Top edge of the text on a screen `screen_height` pixels tall
    fn text_y(&self, screen_height: u32) -> i32 {
        screen_height as i32 - self.margin - (GLYPH_HEIGHT * self.scale) as i32
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, score: u32) -> Result<(), String> {
        let (_, screen_height) = canvas.output_size()?;
        draw_simple_text(
            canvas,
            &score_text(score),
            self.margin,
            self.text_y(screen_height),
            self.color.into(),
            self.scale,
        )
    }
}

impl Default for ScoreDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_format() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(120), "Score: 120");
    }

    #[test]
    fn test_sits_above_bottom_margin() {
        let display = ScoreDisplay::new();
        // 7 rows at scale 2 plus a 10px margin
        assert_eq!(display.text_y(768), 768 - 10 - 14);
    }
}
