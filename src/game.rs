//! Game state and per-tick dispatch
//!
//! [`Game`] owns everything that changes while the window is open: the
//! active scene, the score and the chickens. The main loop feeds it one
//! [`TickInput`] per frame and then asks it to draw.

use crate::config::{GameConfig, Rgb, GREEN};
use crate::flock::{Flock, PlayArea};
use crate::gui::{ScoreDisplay, TitleCard};
use crate::input_system::GameAction;
use crate::scene::{GameText, Scene};
use crate::sprite::SpriteSheet;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::info;

const PLAY_BACKGROUND: Rgb = GREEN;

/// Input gathered for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Advance key was freshly pressed since the last tick
    pub advance: bool,
    /// Spawn key is down right now
    pub spawn_held: bool,
}

impl TickInput {
    pub fn from_actions(actions: &[GameAction], spawn_held: bool) -> Self {
        TickInput {
            advance: actions.contains(&GameAction::Advance),
            spawn_held,
        }
    }
}

pub struct Game {
    scene: Scene,
    intro: Vec<GameText>,
    menu: GameText,
    score: u32,
    flock: Flock,
    title_card: TitleCard,
    score_display: ScoreDisplay,
}

impl Game {
    pub fn new(intro: Vec<GameText>, menu: GameText) -> Self {
        Game {
            scene: Scene::start(),
            intro,
            menu,
            score: 0,
            flock: Flock::new(),
            title_card: TitleCard::new(),
            score_display: ScoreDisplay::new(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.intro.clone(), config.menu.clone())
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    /// Text card for the current scene, if it shows one
    pub fn current_card(&self) -> Option<&GameText> {
        match self.scene {
            Scene::Intro { position } => self.intro.get(position),
            Scene::Menu => Some(&self.menu),
            Scene::Play => None,
        }
    }

    /// Run one tick of whichever scene is active
    pub fn update(&mut self, input: TickInput, area: PlayArea, rng: &mut impl Rng) {
        match self.scene {
            Scene::Intro { .. } | Scene::Menu => {
                if input.advance {
                    self.advance();
                }
            }
            Scene::Play => {
                if input.spawn_held {
                    self.flock.spawn(area, rng);
                }
                let points = self.flock.update(area);
                self.score = self.score.saturating_add(points);
            }
        }
    }

    fn advance(&mut self) {
        let next = self.scene.advance(self.intro.len());
        if next != self.scene {
            info!(from = self.scene.name(), to = next.name(), "scene changed");
            self.scene = next;
        }
    }

    /// Draw the current scene. Drawing steps each chicken's walk cycle.
    pub fn render(&mut self, canvas: &mut Canvas<Window>, sheet: &SpriteSheet) -> Result<(), String> {
        match self.scene {
            Scene::Intro { .. } | Scene::Menu => {
                let card = self.current_card().cloned().unwrap_or_default();
                self.title_card.render(canvas, &card)
            }
            Scene::Play => {
                canvas.set_draw_color(Color::from(PLAY_BACKGROUND));
                canvas.clear();
                self.flock.render(canvas, sheet)?;
                self.score_display.render(canvas, self.score)
            }
        }
    }
}
