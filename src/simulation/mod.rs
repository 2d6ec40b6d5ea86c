//! Simulation - one game instance and its frame loop
//!
//! `Game` owns every piece of mutable state: input buffers, the entity
//! registry, the level's solidity oracle, asset descriptors and the random
//! source. `FrameOrchestrator` drives it one tick at a time; nothing in here
//! keeps time or sleeps.

use crate::domain::{AssetCatalog, Body};
use crate::input::InputState;
use crate::systems::SolidityOracle;
use crate::core::EngineResult;

pub mod entities;

#[path = "init/config.rs"]
mod config;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "render/draw_list.rs"]
mod draw_list;
#[path = "render/draw.rs"]
mod draw;
#[path = "step/step.rs"]
mod step;
mod frame;

pub use config::GameConfig;
pub use draw_list::{DrawCommand, DrawList};
pub use entities::{Behavior, DrawCtx, EntityCtx, EntityId, EntityKind, EntityRegistry, Spawn};
pub use frame::{Director, FrameOrchestrator, NoDirector};
pub use frame_stats::FrameStats;

use perf_timer::PerfTimer;

pub struct Game {
    config: GameConfig,
    input: InputState,
    entities: EntityRegistry,
    solids: Box<dyn SolidityOracle>,
    assets: AssetCatalog,
    rng_state: u32,
    frame: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Fresh game with no entities and no solids.
    pub fn new(config: GameConfig) -> Self {
        init::create_game(config)
    }

    /// Replace the level's solidity oracle.
    pub fn set_solids(&mut self, solids: impl SolidityOracle + 'static) {
        self.solids = Box::new(solids);
    }

    pub fn with_solids(mut self, solids: impl SolidityOracle + 'static) -> Self {
        self.set_solids(solids);
        self
    }

    #[inline]
    pub fn solids(&self) -> &dyn SolidityOracle {
        self.solids.as_ref()
    }

    /// Is `(x, y)` solid according to the level?
    pub fn is_solid_at(&self, x: f32, y: f32) -> bool {
        self.solids.is_solid_at(x, y)
    }

    // === Settings ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn room_size(&self) -> (u32, u32) {
        (self.config.room_width, self.config.room_height)
    }

    /// `(x, y, width, height)`
    pub fn view(&self) -> (i32, i32, u32, u32) {
        (
            self.config.view_x,
            self.config.view_y,
            self.config.view_width,
            self.config.view_height,
        )
    }

    pub fn set_view(&mut self, x: i32, y: i32, width: u32, height: u32) -> EngineResult<()> {
        settings::set_view(self, x, y, width, height)
    }

    pub fn set_view_position(&mut self, x: i32, y: i32) {
        settings::set_view_position(self, x, y)
    }

    pub fn target_fps(&self) -> f32 {
        settings::get_target_fps(self)
    }

    /// Pacing hint for the host driver.
    pub fn set_target_fps(&mut self, fps: f32) -> EngineResult<()> {
        settings::set_target_fps(self, fps)
    }

    // === State ===

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[inline]
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    #[inline]
    pub fn entities(&self) -> &EntityRegistry {
        &self.entities
    }

    #[inline]
    pub(crate) fn entities_mut(&mut self) -> &mut EntityRegistry {
        &mut self.entities
    }

    #[inline]
    pub fn assets(&self) -> &AssetCatalog {
        &self.assets
    }

    #[inline]
    pub fn assets_mut(&mut self) -> &mut AssetCatalog {
        &mut self.assets
    }

    /// Completed ticks
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn random_u32(&mut self) -> u32 {
        random::xorshift32(&mut self.rng_state)
    }

    /// Uniform in `[0, 1)`
    pub fn random_f32(&mut self) -> f32 {
        random::unit_f32(&mut self.rng_state)
    }

    // === Entities ===

    /// Build a `T` through its factory, place it at `(x, y)`, append it to the
    /// live list and run its create hook.
    pub fn create<T: Spawn>(&mut self, x: f32, y: f32) -> EntityId {
        let behavior = T::spawn(self);
        self.create_with(x, y, behavior)
    }

    /// Same as `create` with an already built behavior.
    pub fn create_with<T: Behavior>(&mut self, x: f32, y: f32, behavior: T) -> EntityId {
        let id = self
            .entities
            .insert(EntityKind::of::<T>(), Body::new(x, y), Box::new(behavior));
        entities::run_hook(self, id, |behavior, ctx| behavior.on_create(ctx));
        id
    }

    /// Remove from the live list. No-op (returns `false`) if not live.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        self.entities.destroy(id)
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.entities.body(id)
    }

    /// Direct access outside hooks (setup, tests, directors).
    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.entities.body_mut(id)
    }

    // === Phases ===

    /// Every live entity's draw hook, in list order.
    pub fn draw_entities(&self, out: &mut DrawList) {
        draw::draw_entities(self, out)
    }

    /// Step hook plus integration for each id of `snapshot`.
    pub fn step_entities(&mut self, snapshot: &[EntityId]) {
        step::step_entities(self, snapshot)
    }

    /// Input swap, record purge and frame advance. Returns purged count.
    pub fn end_step(&mut self) -> usize {
        step::end_step(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
