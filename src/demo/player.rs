use crate::core::{Angle, BoundingBox};
use crate::simulation::{Behavior, DrawCtx, DrawList, EntityCtx, Game, Spawn};
use crate::systems::Resolution;

use super::gift::Gift;
use super::ELF_SPRITE;

pub const WALK_SPEED: f32 = 4.0;
pub const RUN_SPEED: f32 = 6.0;
pub const JUMP_SPEED: f32 = -12.0;
pub const MAX_FALL_SPEED: f32 = 10.0;
pub const GRAVITY: f32 = 0.8;
const WALK_ANIMATION_SPEED: f32 = 0.25;
/// Sheet frame shown while airborne
const JUMP_FRAME: u32 = 1;

/// Keyboard codes and controller input names the player listens to
pub mod controls {
    pub const KEY_LEFT: &str = "ArrowLeft";
    pub const KEY_RIGHT: &str = "ArrowRight";
    pub const KEY_JUMP: &str = "Space";
    pub const KEY_RUN: &str = "ControlLeft";

    pub const PAD_LEFT: &str = "LEFT";
    pub const PAD_RIGHT: &str = "RIGHT";
    pub const PAD_JUMP: &str = "JUMP";
    pub const PAD_RUN: &str = "RUN";
}

/// The elf: runs, jumps with variable height and collects gifts.
#[derive(Debug)]
pub struct Player {
    /// 1 facing right, -1 facing left
    facing: f32,
    collected: u32,
    correction: Resolution,
}

impl Player {
    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }
}

impl Default for Player {
    fn default() -> Self {
        Self {
            facing: 1.0,
            collected: 0,
            correction: Resolution::new(0.1).unwrap_or_default(),
        }
    }
}

impl Spawn for Player {
    fn spawn(_game: &mut Game) -> Self {
        Player::default()
    }
}

struct Intent {
    running: bool,
    left: bool,
    right: bool,
    jump: bool,
    hold_jump: bool,
}

impl Intent {
    fn read(ctx: &EntityCtx<'_>) -> Self {
        use controls::*;
        let input = ctx.input();
        Self {
            running: input.key_down(KEY_RUN) || input.any_controller_down(PAD_RUN),
            left: input.key_down(KEY_LEFT) || input.any_controller_down(PAD_LEFT),
            right: input.key_down(KEY_RIGHT) || input.any_controller_down(PAD_RIGHT),
            jump: input.key_pressed(KEY_JUMP) || input.any_controller_pressed(PAD_JUMP),
            hold_jump: input.key_down(KEY_JUMP) || input.any_controller_down(PAD_JUMP),
        }
    }
}

impl Behavior for Player {
    fn on_create(&mut self, ctx: &mut EntityCtx<'_>) {
        let sprite = ctx.assets().sprite(ELF_SPRITE);
        let body = ctx.body_mut();
        body.sprite = sprite;
        body.v_accel = 0.1;
        body.bounding_box = Some(BoundingBox::new(-16.0, -8.0, 32.0, 32.0));
    }

    fn on_step(&mut self, ctx: &mut EntityCtx<'_>) {
        let intent = Intent::read(ctx);
        let (x, y) = (ctx.body().x, ctx.body().y);

        // Gravity and ground correction
        if ctx.is_point_free(x, y + 1.0) {
            ctx.body_mut().v_accel = GRAVITY;
            if !ctx.is_point_free(x, y - 1.0) {
                // Head inside a ceiling
                ctx.move_outside_solid_by(0.0, 1.0, self.correction);
                let body = ctx.body_mut();
                body.v_speed = body.v_speed.max(0.0);
            }
        } else {
            ctx.move_outside_solid_by(0.0, -1.0, self.correction);
            ctx.body_mut().v_speed = 0.0;
        }

        let body = ctx.body_mut();
        body.v_speed = body.v_speed.min(MAX_FALL_SPEED);

        for gift in ctx.colliding_with::<Gift>() {
            if ctx.destroy(gift) {
                self.collected += 1;
            }
        }

        let speed = if intent.running { RUN_SPEED } else { WALK_SPEED };
        ctx.body_mut().image_speed = 0.0;

        if intent.left {
            self.walk(ctx, -1.0, speed);
        }
        if intent.right {
            self.walk(ctx, 1.0, speed);
        }
        if ctx.body().image_speed == 0.0 {
            ctx.body_mut().set_image_index(0);
        }

        let (x, y) = (ctx.body().x, ctx.body().y);
        if intent.jump && !ctx.is_point_free(x, y + 2.0) {
            ctx.body_mut().v_speed = JUMP_SPEED;
        }

        // Releasing jump early cuts the ascent.
        if ctx.is_point_free(x, y + 2.0) && ctx.body().v_speed < 0.0 && !intent.hold_jump {
            ctx.body_mut().v_speed = 0.0;
        }
    }

    fn on_draw(&self, ctx: &DrawCtx<'_>, out: &mut DrawList) {
        let body = ctx.body();
        let Some(sprite) = &body.sprite else {
            return;
        };
        let frame = if ctx.is_point_free(body.x, body.y + 2.0) {
            JUMP_FRAME
        } else {
            body.image_index()
        };
        out.sprite_ext(sprite, frame, body.x, body.y, self.facing, 1.0, Angle::ZERO);
    }
}

impl Player {
    fn walk(&mut self, ctx: &mut EntityCtx<'_>, direction: f32, speed: f32) {
        self.facing = direction;
        ctx.body_mut().image_speed = WALK_ANIMATION_SPEED;

        let (x, y) = (ctx.body().x, ctx.body().y);
        let target = x + direction * speed;
        if ctx.is_point_free(target, y) {
            ctx.body_mut().x = target;
        }
    }
}
