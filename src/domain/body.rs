//! Body - kinematic and visual state of one entity
//!
//! Coordinates are y-down (screen space). Polar helpers treat "up" as a
//! positive angle, so the vertical component is negated on the way in and out.

use std::sync::Arc;

use crate::core::{Angle, BoundingBox};

use super::assets::SpriteAsset;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    /// Position the entity was created at
    pub origin_x: f32,
    pub origin_y: f32,

    pub h_speed: f32,
    pub v_speed: f32,
    pub h_accel: f32,
    pub v_accel: f32,

    pub sprite: Option<Arc<SpriteAsset>>,
    /// Fractional frame index, advanced by `image_speed` every step
    image_index: f32,
    pub image_speed: f32,

    /// Entities without a box never collide
    pub bounding_box: Option<BoundingBox>,
}

impl Body {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            origin_x: x,
            origin_y: y,
            ..Self::default()
        }
    }

    /// Current animation frame (fraction truncated)
    pub fn image_index(&self) -> u32 {
        self.image_index.max(0.0) as u32
    }

    pub fn set_image_index(&mut self, index: u32) {
        self.image_index = index as f32;
    }

    /// Advance the animation by `image_speed`, wrapping on the sprite's frame count.
    /// No-op without a sprite.
    pub fn advance_animation(&mut self) {
        if let Some(sprite) = &self.sprite {
            let frames = sprite.frame_count() as f32;
            self.image_index = (self.image_index + self.image_speed).rem_euclid(frames);
        }
    }

    /// World-space box, if the entity has one
    pub fn world_box(&self) -> Option<BoundingBox> {
        self.bounding_box.map(|b| b.translated(self.x, self.y))
    }

    // === Polar velocity ===

    pub fn speed(&self) -> f32 {
        (self.h_speed * self.h_speed + self.v_speed * self.v_speed).sqrt()
    }

    pub fn direction(&self) -> Angle {
        Angle::atan2(-self.v_speed, self.h_speed)
    }

    /// Keeps the direction, rescales the magnitude
    pub fn set_speed(&mut self, speed: f32) {
        let direction = self.direction();
        self.set_velocity_polar(direction, speed);
    }

    /// Keeps the magnitude, rotates the vector
    pub fn set_direction(&mut self, direction: Angle) {
        let speed = self.speed();
        self.set_velocity_polar(direction, speed);
    }

    pub fn set_velocity_polar(&mut self, direction: Angle, speed: f32) {
        self.h_speed = direction.cos() * speed;
        self.v_speed = -direction.sin() * speed;
    }

    // === Polar acceleration ===

    pub fn acceleration(&self) -> f32 {
        (self.h_accel * self.h_accel + self.v_accel * self.v_accel).sqrt()
    }

    pub fn acceleration_direction(&self) -> Angle {
        Angle::atan2(-self.v_accel, self.h_accel)
    }

    pub fn set_acceleration(&mut self, magnitude: f32) {
        let direction = self.acceleration_direction();
        self.set_acceleration_polar(direction, magnitude);
    }

    pub fn set_acceleration_direction(&mut self, direction: Angle) {
        let magnitude = self.acceleration();
        self.set_acceleration_polar(direction, magnitude);
    }

    pub fn set_acceleration_polar(&mut self, direction: Angle, magnitude: f32) {
        self.h_accel = direction.cos() * magnitude;
        self.v_accel = -direction.sin() * magnitude;
    }
}
