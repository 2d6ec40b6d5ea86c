//! Declarative draw requests
//!
//! The core never touches pixels. Each tick fills a `DrawList` in issue order
//! and the host replays it onto its canvas. Coordinates are world units.

use serde::Serialize;

use crate::core::Angle;
use crate::domain::{AssetId, ImageAsset, SourceRect, SpriteAsset};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawCommand {
    /// Frame of a sprite sheet drawn with its origin at `(x, y)`
    #[serde(rename_all = "camelCase")]
    Sprite {
        asset: AssetId,
        frame: u32,
        source: SourceRect,
        x: f32,
        y: f32,
        origin_x: i32,
        origin_y: i32,
        scale_x: f32,
        scale_y: f32,
        /// Radians, counter-clockwise
        rotation: f32,
    },
    /// Whole image, top-left at `(x, y)`
    #[serde(rename_all = "camelCase")]
    Image {
        asset: AssetId,
        x: f32,
        y: f32,
        width: u32,
        height: u32,
    },
    /// Solid rectangle in any CSS color
    #[serde(rename_all = "camelCase")]
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Unscaled, unrotated sprite frame
    pub fn sprite(&mut self, sprite: &SpriteAsset, frame: u32, x: f32, y: f32) {
        self.sprite_ext(sprite, frame, x, y, 1.0, 1.0, Angle::ZERO);
    }

    /// Frame index wraps on the sprite's frame count.
    #[allow(clippy::too_many_arguments)]
    pub fn sprite_ext(
        &mut self,
        sprite: &SpriteAsset,
        frame: u32,
        x: f32,
        y: f32,
        scale_x: f32,
        scale_y: f32,
        rotation: Angle,
    ) {
        let frame = frame % sprite.frame_count();
        self.commands.push(DrawCommand::Sprite {
            asset: sprite.id,
            frame,
            source: sprite.frame_source(frame),
            x,
            y,
            origin_x: sprite.origin_x,
            origin_y: sprite.origin_y,
            scale_x,
            scale_y,
            rotation: rotation.to_radians(),
        });
    }

    pub fn image(&mut self, image: &ImageAsset, x: f32, y: f32) {
        self.commands.push(DrawCommand::Image {
            asset: image.id,
            x,
            y,
            width: image.width,
            height: image.height,
        });
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: impl Into<String>) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color: color.into(),
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// JSON array of commands, each tagged with `"kind"`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_frame_wraps_and_carries_sheet_geometry() {
        let mut sheet = SpriteAsset::new("/res/elf.png", 32, 32).with_frames(4, 2).with_origin(16, 24);
        sheet.id = AssetId(3);

        let mut list = DrawList::new();
        list.sprite(&sheet, 5, 10.0, 20.0);

        match &list.commands()[0] {
            DrawCommand::Sprite { asset, frame, source, origin_x, origin_y, .. } => {
                assert_eq!(*asset, AssetId(3));
                assert_eq!(*frame, 1);
                assert_eq!((source.x, source.y), (32, 0));
                assert_eq!((*origin_x, *origin_y), (16, 24));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn json_is_tagged_and_camel_cased() {
        let mut list = DrawList::new();
        list.fill_rect(0.0, 0.0, 800.0, 600.0, "hsl(0, 100%, 50%)");
        list.sprite_ext(&SpriteAsset::new("/res/elf.png", 32, 32), 0, 1.0, 2.0, -1.0, 1.0, Angle::ZERO);

        let json: serde_json::Value = serde_json::from_str(&list.to_json()).unwrap();
        assert_eq!(json[0]["kind"], "fillRect");
        assert_eq!(json[0]["color"], "hsl(0, 100%, 50%)");
        assert_eq!(json[1]["kind"], "sprite");
        assert_eq!(json[1]["scaleX"], -1.0);
        assert_eq!(json[1]["source"]["width"], 32);
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut list = DrawList::new();
        list.image(&ImageAsset::new("/res/box.png", 32, 32), 0.0, 0.0);
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.to_json(), "[]");
    }
}
