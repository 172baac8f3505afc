use std::fmt;

/// Errors that stop the game from starting
///
/// Everything here is fatal: `main` reports the message and exits.
/// Steady-state frame logic has no error paths of its own, only SDL
/// draw calls can fail once the loop is running.
#[derive(Debug)]
pub enum GameError {
    /// SDL context, window, canvas or event pump creation failed
    Sdl(String),

    /// Sprite sheet could not be opened, decoded or sliced
    Asset { path: String, reason: String },

    /// Config file was unreadable or held invalid values
    Config(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Sdl(msg) => write!(f, "SDL error: {}", msg),
            GameError::Asset { path, reason } => {
                write!(f, "Failed to load {}: {}", path, reason)
            }
            GameError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err.to_string())
    }
}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}
