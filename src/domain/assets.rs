//! Asset descriptors
//!
//! The engine never loads pixels. Descriptors carry just enough geometry to
//! turn "frame K of sprite A" into a source rectangle the host can blit.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Host-side handle of an image or sprite sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub u32);

/// Rectangle inside a source image, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    #[serde(default)]
    pub id: AssetId,
    pub source: String,
    pub width: u32,
    pub height: u32,
}

impl ImageAsset {
    pub fn new(source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: AssetId::default(),
            source: source.into(),
            width,
            height,
        }
    }
}

/// Sprite sheet laid out as a grid of equally sized frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteAsset {
    #[serde(default)]
    pub id: AssetId,
    pub source: String,
    /// Size of one frame
    pub width: u32,
    pub height: u32,
    #[serde(default = "one")]
    pub image_count: u32,
    #[serde(default = "one")]
    pub images_per_row: u32,
    /// Drawing origin inside the frame (drawn at entity position)
    #[serde(default)]
    pub origin_x: i32,
    #[serde(default)]
    pub origin_y: i32,
    /// Spacing between frames in the sheet
    #[serde(default)]
    pub x_gap: u32,
    #[serde(default)]
    pub y_gap: u32,
    /// Offset of the first frame in the sheet
    #[serde(default)]
    pub x_offset: u32,
    #[serde(default)]
    pub y_offset: u32,
}

fn one() -> u32 {
    1
}

impl SpriteAsset {
    /// Single-frame sprite.
    pub fn new(source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: AssetId::default(),
            source: source.into(),
            width,
            height,
            image_count: 1,
            images_per_row: 1,
            origin_x: 0,
            origin_y: 0,
            x_gap: 0,
            y_gap: 0,
            x_offset: 0,
            y_offset: 0,
        }
    }

    pub fn with_frames(mut self, image_count: u32, images_per_row: u32) -> Self {
        self.image_count = image_count.max(1);
        self.images_per_row = images_per_row.max(1);
        self
    }

    pub fn with_origin(mut self, origin_x: i32, origin_y: i32) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    pub fn with_spacing(mut self, x_gap: u32, y_gap: u32, x_offset: u32, y_offset: u32) -> Self {
        self.x_gap = x_gap;
        self.y_gap = y_gap;
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Frame count used for animation wrap-around. Never zero.
    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.image_count.max(1)
    }

    /// Where frame `index` sits inside the sheet.
    pub fn frame_source(&self, index: u32) -> SourceRect {
        let per_row = self.images_per_row.max(1);
        SourceRect {
            x: (index % per_row) * (self.width + self.x_gap) + self.x_offset,
            y: (index / per_row) * (self.height + self.y_gap) + self.y_offset,
            width: self.width,
            height: self.height,
        }
    }
}

/// Named descriptors handed to entity factories.
#[derive(Debug, Default, Clone)]
pub struct AssetCatalog {
    sprites: HashMap<String, Arc<SpriteAsset>>,
    images: HashMap<String, Arc<ImageAsset>>,
    next_id: u32,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> AssetId {
        self.next_id = self.next_id.saturating_add(1);
        AssetId(self.next_id)
    }

    /// Registers (or replaces) a sprite under `name` and assigns its id.
    pub fn register_sprite(&mut self, name: &str, mut sprite: SpriteAsset) -> Arc<SpriteAsset> {
        sprite.id = self.allocate_id();
        let sprite = Arc::new(sprite);
        self.sprites.insert(name.to_owned(), Arc::clone(&sprite));
        sprite
    }

    pub fn register_image(&mut self, name: &str, mut image: ImageAsset) -> Arc<ImageAsset> {
        image.id = self.allocate_id();
        let image = Arc::new(image);
        self.images.insert(name.to_owned(), Arc::clone(&image));
        image
    }

    pub fn sprite(&self, name: &str) -> Option<Arc<SpriteAsset>> {
        self.sprites.get(name).cloned()
    }

    pub fn image(&self, name: &str) -> Option<Arc<ImageAsset>> {
        self.images.get(name).cloned()
    }

    /// Every descriptor as `{ "sprites": {...}, "images": {...} }` so the host
    /// can map ids to loaded elements.
    pub fn manifest_json(&self) -> String {
        #[derive(Serialize)]
        struct Manifest<'a> {
            sprites: HashMap<&'a str, &'a SpriteAsset>,
            images: HashMap<&'a str, &'a ImageAsset>,
        }
        let manifest = Manifest {
            sprites: self.sprites.iter().map(|(k, v)| (k.as_str(), v.as_ref())).collect(),
            images: self.images.iter().map(|(k, v)| (k.as_str(), v.as_ref())).collect(),
        };
        serde_json::to_string(&manifest).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_source_walks_rows_with_gaps_and_offset() {
        let sheet = SpriteAsset::new("/res/elf.png", 32, 32)
            .with_frames(6, 4)
            .with_spacing(2, 3, 1, 5);

        assert_eq!(
            sheet.frame_source(0),
            SourceRect { x: 1, y: 5, width: 32, height: 32 }
        );
        assert_eq!(sheet.frame_source(3).x, 3 * 34 + 1);
        let second_row = sheet.frame_source(5);
        assert_eq!((second_row.x, second_row.y), (34 + 1, 35 + 5));
    }

    #[test]
    fn frame_count_never_zero() {
        let mut sprite = SpriteAsset::new("/res/box.png", 32, 32);
        sprite.image_count = 0;
        assert_eq!(sprite.frame_count(), 1);
    }

    #[test]
    fn catalog_assigns_distinct_ids() {
        let mut catalog = AssetCatalog::new();
        let box_image = catalog.register_image("box", ImageAsset::new("/res/box.png", 32, 32));
        let elf = catalog.register_sprite("elf", SpriteAsset::new("/res/elf.png", 32, 32));

        assert_ne!(box_image.id, elf.id);
        assert_eq!(catalog.sprite("elf").map(|s| s.id), Some(elf.id));
        assert!(catalog.image("missing").is_none());

        let manifest: serde_json::Value = serde_json::from_str(&catalog.manifest_json()).unwrap();
        assert_eq!(manifest["sprites"]["elf"]["imageCount"], 1);
        assert_eq!(manifest["images"]["box"]["source"], "/res/box.png");
    }

    #[test]
    fn sprite_descriptor_defaults_when_deserialized() {
        let sprite: SpriteAsset =
            serde_json::from_str(r#"{"source":"/res/gift.png","width":32,"height":32}"#).unwrap();
        assert_eq!(sprite.image_count, 1);
        assert_eq!(sprite.images_per_row, 1);
        assert_eq!(sprite.origin_x, 0);
    }
}
