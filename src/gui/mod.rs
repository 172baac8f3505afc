//! Screen-space drawing for the scenes
//!
//! - [`TitleCard`] - one full-screen line of text for the intro and menu
//! - [`ScoreDisplay`] - the `Score: <n>` readout shown during play

pub mod score_display;
pub mod title_card;

pub use score_display::ScoreDisplay;
pub use title_card::TitleCard;
