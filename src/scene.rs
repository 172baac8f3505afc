//! Top-level game modes
//!
//! The game is always in exactly one [`Scene`]: it starts on the intro
//! cards, moves to the menu after the last card, and stays in play until the
//! window closes.

use crate::config::Rgb;
use serde::{Deserialize, Serialize};

/// A full-screen line of text with its own colours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameText {
    pub text: String,
    pub foreground: Rgb,
    pub background: Rgb,
}

impl GameText {
    pub fn new(text: &str, foreground: Rgb, background: Rgb) -> Self {
        GameText {
            text: text.to_string(),
            foreground,
            background,
        }
    }
}

impl Default for GameText {
    fn default() -> Self {
        GameText::new("", Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Showing intro card `position`
    Intro { position: usize },
    Menu,
    Play,
}

impl Scene {
    pub fn start() -> Self {
        Scene::Intro { position: 0 }
    }

    /// Scene after the advance key is pressed, given `intro_len` intro cards.
    ///
    /// Intro steps through the cards and leaves for the menu from the last
    /// one (or straight away if there are none). Play ignores advance.
    pub fn advance(self, intro_len: usize) -> Scene {
        match self {
            Scene::Intro { position } if position + 1 < intro_len => Scene::Intro {
                position: position + 1,
            },
            Scene::Intro { .. } => Scene::Menu,
            Scene::Menu => Scene::Play,
            Scene::Play => Scene::Play,
        }
    }

    pub fn is_intro(&self) -> bool {
        matches!(self, Scene::Intro { .. })
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, Scene::Menu)
    }

    pub fn in_play(&self) -> bool {
        matches!(self, Scene::Play)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scene::Intro { .. } => "intro",
            Scene::Menu => "menu",
            Scene::Play => "play",
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exactly_one_mode(scene: Scene) -> bool {
        [scene.is_intro(), scene.is_menu(), scene.in_play()]
            .iter()
            .filter(|flag| **flag)
            .count()
            == 1
    }

    #[test]
    fn test_starts_on_first_intro_card() {
        assert_eq!(Scene::start(), Scene::Intro { position: 0 });
        assert_eq!(Scene::default(), Scene::start());
    }

    #[test]
    fn test_full_transition_table() {
        let mut scene = Scene::start();
        let mut seen = vec![scene];
        for _ in 0..6 {
            scene = scene.advance(3);
            seen.push(scene);
        }

        assert_eq!(
            seen,
            vec![
                Scene::Intro { position: 0 },
                Scene::Intro { position: 1 },
                Scene::Intro { position: 2 },
                Scene::Menu,
                Scene::Play,
                Scene::Play,
                Scene::Play,
            ]
        );
    }

    #[test]
    fn test_last_card_leaves_for_menu_once() {
        let last = Scene::Intro { position: 2 };
        let menu = last.advance(3);
        assert_eq!(menu, Scene::Menu);
        // Next press starts play rather than re-entering the menu
        assert_eq!(menu.advance(3), Scene::Play);
    }

    #[test]
    fn test_no_intro_cards_goes_to_menu() {
        assert_eq!(Scene::start().advance(0), Scene::Menu);
    }

    #[test]
    fn test_modes_are_exclusive() {
        let mut scene = Scene::start();
        for _ in 0..10 {
            assert!(exactly_one_mode(scene), "{:?}", scene);
            scene = scene.advance(3);
        }
    }

    #[test]
    fn test_scene_names() {
        assert_eq!(Scene::start().name(), "intro");
        assert_eq!(Scene::Menu.name(), "menu");
        assert_eq!(Scene::Play.name(), "play");
    }
}
