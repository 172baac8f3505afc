use crate::error::GameError;
use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::info;

/// Edge length of one square cell in the sprite sheet, in pixels
pub const CELL_SIZE: u32 = 24;

/// Source rectangle of one animation frame inside the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Frame { x, y, width, height }
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Partition a `width` x `height` image into `cell`-sized frames.
///
/// Frames are ordered column by column: every cell of the first column top
/// to bottom, then the next column. A trailing partial row or column still
/// gets a full-size frame starting inside the image.
pub fn slice_grid(width: u32, height: u32, cell: u32) -> Vec<Frame> {
    if cell == 0 {
        return Vec::new();
    }

    let mut frames = Vec::new();
    for x in (0..width).step_by(cell as usize) {
        for y in (0..height).step_by(cell as usize) {
            frames.push(Frame::new(x as i32, y as i32, cell, cell));
        }
    }
    frames
}

/// A decoded sprite sheet and the frames cut from it
pub struct SpriteSheet<'a> {
    texture: Texture<'a>,
    frames: Vec<Frame>,
}

impl<'a> SpriteSheet<'a> {
    /// Decode the image at `path` and slice it into [`CELL_SIZE`] cells.
    ///
    /// Fails if the file cannot be read or decoded, or if it yields fewer
    /// than `required_frames` cells.
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        path: &str,
        required_frames: usize,
    ) -> Result<Self, GameError> {
        let texture = texture_creator
            .load_texture(path)
            .map_err(|reason| GameError::Asset {
                path: path.to_string(),
                reason,
            })?;

        let query = texture.query();
        let frames = slice_grid(query.width, query.height, CELL_SIZE);

        if frames.len() < required_frames {
            return Err(GameError::Asset {
                path: path.to_string(),
                reason: format!(
                    "{}x{} sheet has {} cells, need at least {}",
                    query.width,
                    query.height,
                    frames.len(),
                    required_frames
                ),
            });
        }

        info!(
            path,
            width = query.width,
            height = query.height,
            cells = frames.len(),
            "loaded sprite sheet"
        );

        Ok(SpriteSheet { texture, frames })
    }

    /// Copy frame `index` onto the canvas, stretched to `dest_rect`
    pub fn render_frame(
        &self,
        canvas: &mut Canvas<Window>,
        index: usize,
        dest_rect: Rect,
    ) -> Result<(), String> {
        let frame = self
            .frames
            .get(index)
            .ok_or_else(|| format!("No frame {} in sheet of {}", index, self.frames.len()))?;

        canvas.copy(&self.texture, Some(frame.to_rect()), Some(dest_rect))
    }
}
