//! Demo - the elf jump game, a small platformer built on the engine
//!
//! Arrow keys walk, left Ctrl runs, Space jumps (hold for height). Controllers
//! send `LEFT` / `RIGHT` / `RUN` / `JUMP`.

pub mod gift;
pub mod jump_game;
pub mod player;

pub use gift::Gift;
pub use jump_game::{JumpGame, DEFAULT_LEVEL};
pub use player::Player;

use crate::core::EngineResult;
use crate::simulation::{FrameOrchestrator, Game, GameConfig};

pub const TILE_SIZE: f32 = 32.0;

pub const BOX_IMAGE: &str = "box";
pub const ELF_SPRITE: &str = "elf";
pub const GIFT_SPRITE: &str = "gift";

/// Ready-to-tick jump game for `layout`, room sized to the level.
pub fn build(layout: &str) -> EngineResult<FrameOrchestrator<JumpGame>> {
    let director = JumpGame::new(layout)?;
    let game = Game::new(director.config());
    Ok(FrameOrchestrator::new(game, director))
}

/// Same as [`build`] with host-chosen settings.
pub fn build_with_config(layout: &str, config: GameConfig) -> EngineResult<FrameOrchestrator<JumpGame>> {
    config.validate()?;
    let director = JumpGame::new(layout)?;
    Ok(FrameOrchestrator::new(Game::new(config), director))
}
