use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod animation;
mod chicken;
mod config;
mod error;
mod flock;
mod frame_clock;
mod game;
mod gui;
mod input_system;
mod scene;
mod sprite;
mod text;

use config::{GameConfig, CONFIG_PATH};
use error::GameError;
use flock::PlayArea;
use frame_clock::FrameClock;
use game::{Game, TickInput};
use input_system::{GameAction, InputSystem};
use sprite::SpriteSheet;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run().map_err(|e| {
        error!("{}", e);
        e.to_string()
    })
}

fn run() -> Result<(), GameError> {
    let config = GameConfig::load_or_default(CONFIG_PATH)?;

    let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(GameError::Sdl)?;

    let mut window_builder =
        video_subsystem.window(&config.window.title, config.window.width, config.window.height);
    window_builder.position_centered();
    if config.window.resizable {
        window_builder.resizable();
    }
    let window = window_builder
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

    let sheet = SpriteSheet::load(
        &texture_creator,
        &config.sprite_sheet,
        animation::frames_required(),
    )?;

    let mut game = Game::from_config(&config);
    let mut input = InputSystem::new();
    let mut rng = rand::thread_rng();
    let mut clock = FrameClock::new(config.frames_per_second);

    info!(
        width = config.window.width,
        height = config.window.height,
        fps = config.frames_per_second,
        "window open, press space"
    );

    'running: loop {
        input.update_context(&game.scene());
        let actions = input.poll_events(&mut event_pump);
        if actions.contains(&GameAction::Quit) {
            break 'running;
        }

        // The window can be resized, so the play area is read every tick
        let (width, height) = canvas.output_size().map_err(GameError::Sdl)?;
        let area = PlayArea::new(width, height);
        let tick = TickInput::from_actions(&actions, InputSystem::spawn_held(&event_pump));

        game.update(tick, area, &mut rng);
        game.render(&mut canvas, &sheet).map_err(GameError::Sdl)?;
        canvas.present();

        clock.wait();
    }

    info!(
        score = game.score(),
        chickens = game.flock().len(),
        "window closed"
    );
    Ok(())
}
