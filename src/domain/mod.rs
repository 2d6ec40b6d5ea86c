//! Domain - entity state, asset descriptors and level tiles

pub mod assets;
pub mod body;
pub mod tiles;

pub use assets::{AssetCatalog, AssetId, ImageAsset, SourceRect, SpriteAsset};
pub use body::Body;
pub use tiles::TileGrid;
