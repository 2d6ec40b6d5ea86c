//! Entity behaviors and the contexts their hooks receive
//!
//! An entity is a `Body` owned by the registry plus one `Behavior` value
//! holding its kind-specific state. Hooks never see the registry directly:
//! `EntityCtx` and `DrawCtx` pass through the queries an entity needs.

use std::any::Any;

use crate::core::Angle;
use crate::domain::{AssetCatalog, Body};
use crate::input::InputState;
use crate::simulation::DrawList;
use crate::simulation::Game;
use crate::systems::{self, Resolution};

use super::registry::EntityId;

/// Object-safe access to the concrete behavior type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Per-kind entity logic. Every hook is optional.
pub trait Behavior: AsAny {
    /// Runs once, right after the entity joined the live list.
    fn on_create(&mut self, _ctx: &mut EntityCtx<'_>) {}

    /// Runs once per tick before kinematic integration.
    fn on_step(&mut self, _ctx: &mut EntityCtx<'_>) {}

    /// Issues draw requests. Draws the body's sprite frame by default and
    /// nothing when there is no sprite.
    fn on_draw(&self, ctx: &DrawCtx<'_>, out: &mut DrawList) {
        ctx.draw_sprite(out);
    }
}

/// Factory for `Game::create::<T>()`: builds a fresh behavior with access to
/// the owning game (assets, settings, random source).
pub trait Spawn: Behavior + Sized {
    fn spawn(game: &mut Game) -> Self;
}

/// Mutable view of one entity and its game during `on_create` / `on_step`.
///
/// The entity's body is checked out of the registry for the duration of the
/// hook and written back afterwards. Lookups of this entity from elsewhere in
/// the meantime see its state from before the hook.
pub struct EntityCtx<'a> {
    game: &'a mut Game,
    id: EntityId,
    body: Body,
}

impl<'a> EntityCtx<'a> {
    fn enter(game: &'a mut Game, id: EntityId) -> Option<Self> {
        let body = game.entities().body(id)?.clone();
        Some(Self { game, id, body })
    }

    fn commit(self) {
        if let Some(slot) = self.game.entities_mut().body_mut(self.id) {
            *slot = self.body;
        }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[inline]
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    #[inline]
    pub fn game(&self) -> &Game {
        self.game
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        self.game.input()
    }

    #[inline]
    pub fn assets(&self) -> &AssetCatalog {
        self.game.assets()
    }

    /// Body of another entity (live or destroyed this tick)
    pub fn body_of(&self, other: EntityId) -> Option<&Body> {
        if other == self.id {
            return Some(&self.body);
        }
        self.game.entities().body(other)
    }

    // === Collision ===

    /// Would this entity's box be clear of solids at `(x, y)`?
    pub fn is_point_free(&self, x: f32, y: f32) -> bool {
        systems::is_point_free(&self.body, self.game.solids(), x, y)
    }

    pub fn move_contact_solid(&mut self, direction: Angle, max_distance: f32, resolution: Resolution) -> bool {
        systems::move_contact_solid(&mut self.body, self.game.solids(), direction, max_distance, resolution)
    }

    pub fn move_contact_solid_by(&mut self, dx: f32, dy: f32, resolution: Resolution) -> bool {
        systems::move_contact_solid_by(&mut self.body, self.game.solids(), dx, dy, resolution)
    }

    pub fn move_outside_solid(&mut self, direction: Angle, max_distance: f32, resolution: Resolution) -> bool {
        systems::move_outside_solid(&mut self.body, self.game.solids(), direction, max_distance, resolution)
    }

    pub fn move_outside_solid_by(&mut self, dx: f32, dy: f32, resolution: Resolution) -> bool {
        systems::move_outside_solid_by(&mut self.body, self.game.solids(), dx, dy, resolution)
    }

    /// Live entities of kind `T` overlapping this one (open interval test).
    pub fn colliding_with<T: 'static>(&self) -> Vec<EntityId> {
        match self.body.world_box() {
            Some(own) => self.game.entities().overlapping::<T>(own, self.id),
            None => Vec::new(),
        }
    }

    pub fn of_type<T: 'static>(&self) -> Vec<EntityId> {
        self.game.entities().of_type::<T>().collect()
    }

    // === Lifecycle ===

    pub fn create<T: Spawn>(&mut self, x: f32, y: f32) -> EntityId {
        self.game.create::<T>(x, y)
    }

    pub fn create_with<T: Behavior>(&mut self, x: f32, y: f32, behavior: T) -> EntityId {
        self.game.create_with(x, y, behavior)
    }

    /// No-op for entities that are not live.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        self.game.destroy(id)
    }

    pub fn destroy_self(&mut self) -> bool {
        self.game.destroy(self.id)
    }

    /// Next value of the game's shared random source in `[0, 1)`
    pub fn random_f32(&mut self) -> f32 {
        self.game.random_f32()
    }

    /// Post-hook integration: animation, contact-limited move, acceleration.
    pub(crate) fn integrate(&mut self) {
        systems::integrate(&mut self.body, self.game.solids());
    }
}

/// Read-only view of one entity during the draw phase.
pub struct DrawCtx<'a> {
    game: &'a Game,
    id: EntityId,
    body: &'a Body,
}

impl<'a> DrawCtx<'a> {
    pub(crate) fn new(game: &'a Game, id: EntityId, body: &'a Body) -> Self {
        Self { game, id, body }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn body(&self) -> &Body {
        self.body
    }

    #[inline]
    pub fn game(&self) -> &Game {
        self.game
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        self.game.input()
    }

    pub fn is_point_free(&self, x: f32, y: f32) -> bool {
        systems::is_point_free(self.body, self.game.solids(), x, y)
    }

    /// Current sprite frame at the body's position; nothing without a sprite.
    pub fn draw_sprite(&self, out: &mut DrawList) {
        if let Some(sprite) = &self.body.sprite {
            out.sprite(sprite, self.body.image_index(), self.body.x, self.body.y);
        }
    }
}

/// Run one hook of `id` with its behavior and body checked out.
/// Returns `false` if the entity has no record or its hook is already running.
pub(crate) fn run_hook<F>(game: &mut Game, id: EntityId, hook: F) -> bool
where
    F: FnOnce(&mut dyn Behavior, &mut EntityCtx<'_>),
{
    let Some(mut behavior) = game.entities_mut().take_behavior(id) else {
        return false;
    };
    if let Some(mut ctx) = EntityCtx::enter(game, id) {
        hook(&mut *behavior, &mut ctx);
        ctx.commit();
    }
    game.entities_mut().restore_behavior(id, behavior);
    true
}
