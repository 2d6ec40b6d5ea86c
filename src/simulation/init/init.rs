use crate::domain::AssetCatalog;
use crate::input::InputState;
use crate::systems::NoSolids;

use super::config::GameConfig;
use super::entities::EntityRegistry;
use super::Game;

pub(super) fn create_game(config: GameConfig) -> Game {
    // xorshift32 is stuck at zero.
    let rng_state = if config.seed == 0 { GameConfig::default().seed } else { config.seed };
    Game {
        config,
        input: InputState::new(),
        entities: EntityRegistry::new(),
        solids: Box::new(NoSolids),
        assets: AssetCatalog::new(),
        rng_state,
        frame: 0,
    }
}
