//! Frame orchestrator - one draw phase then one simulate phase per tick
//!
//! Draw renders the state left by the previous tick. Simulate then samples
//! the mouse, snapshots the live list, runs the director's step hook, steps
//! every snapshotted entity and finally swaps input buffers exactly once.
//! An entity created during simulate is first drawn on the next tick.

use super::{DrawList, FrameStats, Game, PerfTimer};
use crate::core::EngineResult;

/// Game-level hooks. Each runs before the entity hooks of its phase.
pub trait Director {
    /// Runs once, before the first tick.
    fn on_start(&mut self, _game: &mut Game) {}

    fn on_step(&mut self, _game: &mut Game) {}

    fn on_draw(&mut self, _game: &Game, _out: &mut DrawList) {}
}

impl<D: Director + ?Sized> Director for Box<D> {
    fn on_start(&mut self, game: &mut Game) {
        (**self).on_start(game)
    }

    fn on_step(&mut self, game: &mut Game) {
        (**self).on_step(game)
    }

    fn on_draw(&mut self, game: &Game, out: &mut DrawList) {
        (**self).on_draw(game, out)
    }
}

/// Director without game-level logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDirector;

impl Director for NoDirector {}

pub struct FrameOrchestrator<D: Director = NoDirector> {
    game: Game,
    director: D,
    started: bool,
    stats: FrameStats,
}

impl<D: Director> FrameOrchestrator<D> {
    pub fn new(game: Game, director: D) -> Self {
        Self {
            game,
            director,
            started: false,
            stats: FrameStats::default(),
        }
    }

    /// Run the director's start hook. Idempotent; `tick` calls it on demand.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        log::info!(
            "game started: room {}x{}, target {} fps",
            self.game.config().room_width,
            self.game.config().room_height,
            self.game.target_fps()
        );
        self.director.on_start(&mut self.game);
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Advance by one tick, replacing `out` with this tick's draw requests.
    pub fn tick(&mut self, out: &mut DrawList) {
        self.start();
        out.clear();
        let mut timer = PerfTimer::start();

        // Draw phase
        self.director.on_draw(&self.game, out);
        self.game.draw_entities(out);
        let draw_ms = timer.lap_ms();

        // Simulate phase
        self.game.input_mut().begin_frame();
        let snapshot = self.game.entities().snapshot();
        self.director.on_step(&mut self.game);
        self.game.step_entities(&snapshot);
        let purged = self.game.end_step();
        let step_ms = timer.lap_ms();

        self.stats = FrameStats {
            frame: self.game.frame(),
            draw_ms,
            step_ms,
            entity_count: self.game.entities().count() as u32,
            draw_commands: out.len() as u32,
            purged: purged as u32,
        };
    }

    /// `tick` into a fresh list.
    pub fn tick_to_list(&mut self) -> DrawList {
        let mut out = DrawList::new();
        self.tick(&mut out);
        out
    }

    #[inline]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Between ticks only (host events, setup).
    #[inline]
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    #[inline]
    pub fn director(&self) -> &D {
        &self.director
    }

    #[inline]
    pub fn director_mut(&mut self) -> &mut D {
        &mut self.director
    }

    pub fn target_fps(&self) -> f32 {
        self.game.target_fps()
    }

    pub fn set_target_fps(&mut self, fps: f32) -> EngineResult<()> {
        self.game.set_target_fps(fps)
    }

    pub fn into_parts(self) -> (Game, D) {
        (self.game, self.director)
    }
}

impl Default for FrameOrchestrator<NoDirector> {
    fn default() -> Self {
        Self::new(Game::default(), NoDirector)
    }
}
