use crate::core::{EngineError, EngineResult};

use super::config::validate_fps;
use super::Game;

pub(super) fn set_view(game: &mut Game, x: i32, y: i32, width: u32, height: u32) -> EngineResult<()> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidConfig {
            field: "view",
            reason: format!("{width}x{height} view has no area"),
        });
    }
    game.config.view_x = x;
    game.config.view_y = y;
    game.config.view_width = width;
    game.config.view_height = height;
    Ok(())
}

pub(super) fn set_view_position(game: &mut Game, x: i32, y: i32) {
    game.config.view_x = x;
    game.config.view_y = y;
}

pub(super) fn set_target_fps(game: &mut Game, fps: f32) -> EngineResult<()> {
    validate_fps(fps)?;
    if fps != game.config.target_fps {
        log::info!("target frame rate {} -> {fps}", game.config.target_fps);
    }
    game.config.target_fps = fps;
    Ok(())
}

pub(super) fn get_target_fps(game: &Game) -> f32 {
    game.config.target_fps
}
