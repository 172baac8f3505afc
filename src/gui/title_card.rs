use crate::scene::GameText;
use crate::text::draw_simple_text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Where card text goes on screen
#[derive(Debug, Clone)]
pub struct TitleCardStyle {
    /// Left edge of the text
    pub x: i32,
    /// Top edge of the text
    pub y: i32,
    pub scale: u32,
}

impl Default for TitleCardStyle {
    fn default() -> Self {
        TitleCardStyle {
            x: 50,
            y: 240,
            scale: 4,
        }
    }
}

/// Fills the screen with a card's background and writes its text
pub struct TitleCard {
    style: TitleCardStyle,
}

impl TitleCard {
    pub fn new() -> Self {
        TitleCard {
            style: TitleCardStyle::default(),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, card: &GameText) -> Result<(), String> {
        canvas.set_draw_color(Color::from(card.background));
        canvas.clear();

        draw_simple_text(
            canvas,
            &card.text,
            self.style.x,
            self.style.y,
            card.foreground.into(),
            self.style.scale,
        )
    }
}

impl Default for TitleCard {
    fn default() -> Self {
        Self::new()
    }
}
