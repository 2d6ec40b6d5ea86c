use std::f32::consts::TAU;

use crate::core::BoundingBox;
use crate::simulation::{Behavior, DrawCtx, DrawList, EntityCtx, Game, Spawn};

use super::GIFT_SPRITE;

/// Bob cycles per step
const BOB_RATE: f32 = 0.02;
/// Bob height in world units
const BOB_AMPLITUDE: f32 = 2.0;

/// Pickup that bobs in place until the player touches it.
#[derive(Debug)]
pub struct Gift {
    /// Position in the bob cycle, `[0, 1)`
    phase: f32,
}

impl Gift {
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Vertical draw offset for the current phase
    pub fn bob_offset(&self) -> f32 {
        (self.phase * TAU).sin() * BOB_AMPLITUDE
    }
}

impl Spawn for Gift {
    fn spawn(game: &mut Game) -> Self {
        // Random start so neighbouring gifts bob out of step.
        Gift { phase: game.random_f32() }
    }
}

impl Behavior for Gift {
    fn on_create(&mut self, ctx: &mut EntityCtx<'_>) {
        let sprite = ctx.assets().sprite(GIFT_SPRITE);
        let body = ctx.body_mut();
        body.sprite = sprite;
        body.bounding_box = Some(BoundingBox::new(0.0, 0.0, 32.0, 32.0));
    }

    fn on_step(&mut self, _ctx: &mut EntityCtx<'_>) {
        self.phase = (self.phase + BOB_RATE) % 1.0;
    }

    fn on_draw(&self, ctx: &DrawCtx<'_>, out: &mut DrawList) {
        let body = ctx.body();
        if let Some(sprite) = &body.sprite {
            out.sprite(sprite, 0, body.x, body.y + self.bob_offset());
        }
    }
}
