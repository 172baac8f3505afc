use crate::scene::Scene;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::EventPump;

/// Actions produced by discrete input events
///
/// Spawning is not here: it follows whether the key is held, which is read
/// from the keyboard state each tick rather than from events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Next intro card, or leave the menu
    Advance,
    Quit,
}

/// Which keys mean something right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Intro,
    Menu,
    Playing,
}

impl InputContext {
    pub fn for_scene(scene: &Scene) -> Self {
        match scene {
            Scene::Intro { .. } => InputContext::Intro,
            Scene::Menu => InputContext::Menu,
            Scene::Play => InputContext::Playing,
        }
    }
}

/// Translates SDL2 events into [`GameAction`]s for the current scene
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Intro,
        }
    }

    /// Call before [`InputSystem::poll_events`] so keys are read for the right scene
    pub fn update_context(&mut self, scene: &Scene) {
        self.context = InputContext::for_scene(scene);
    }

    /// Drain pending SDL2 events into actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat,
                    ..
                } => {
                    if let Some(action) = self.handle_keydown(key, repeat) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }

        actions
    }

    /// Advance is edge-triggered, so auto-repeat from a held key is ignored
    fn handle_keydown(&self, key: Keycode, repeat: bool) -> Option<GameAction> {
        match key {
            Keycode::Escape => Some(GameAction::Quit),
            Keycode::Space if !repeat => match self.context {
                InputContext::Intro | InputContext::Menu => Some(GameAction::Advance),
                InputContext::Playing => None,
            },
            _ => None,
        }
    }

    /// Whether the spawn key is down at this instant
    pub fn spawn_held(event_pump: &EventPump) -> bool {
        event_pump
            .keyboard_state()
            .is_scancode_pressed(Scancode::Space)
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
