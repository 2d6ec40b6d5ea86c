use crate::core::EngineResult;
use crate::domain::{ImageAsset, SpriteAsset, TileGrid};
use crate::simulation::{Director, DrawList, Game, GameConfig};

use super::gift::Gift;
use super::player::Player;
use super::{BOX_IMAGE, ELF_SPRITE, GIFT_SPRITE, TILE_SIZE};

/// `#` wall, `P` player start, `G` gift
pub const DEFAULT_LEVEL: &str = "\
#####################
#                   #
#   G     G     G   #
#                   #
#       #####       #
#P                  #
#####################
";

const PLAYER_MARKER: char = 'P';
const GIFT_MARKER: char = 'G';

/// Player position whose box exactly covers tile `(column, row)`
fn player_spot(column: usize, row: usize) -> (f32, f32) {
    (column as f32 * TILE_SIZE + 16.0, row as f32 * TILE_SIZE + 8.0)
}

/// Game-level logic: builds the level, spawns the cast and paints the
/// background, tiles and mouse cursor.
#[derive(Debug)]
pub struct JumpGame {
    level: TileGrid,
    player_start: (f32, f32),
    gift_spots: Vec<(f32, f32)>,
    /// Background hue, one degree per drawn frame
    hue: u32,
}

impl JumpGame {
    pub fn new(layout: &str) -> EngineResult<Self> {
        let level = TileGrid::from_ascii(layout, TILE_SIZE)?;

        let mut player_start = player_spot(2, 2);
        let mut gift_spots = Vec::new();
        // Same row numbering as the grid: leading blank lines do not count.
        let rows = layout.lines().skip_while(|l| l.trim().is_empty());
        for (row, line) in rows.enumerate() {
            for (column, ch) in line.chars().enumerate() {
                match ch {
                    PLAYER_MARKER => player_start = player_spot(column, row),
                    GIFT_MARKER => gift_spots.push((column as f32 * TILE_SIZE, row as f32 * TILE_SIZE)),
                    _ => {}
                }
            }
        }

        Ok(Self {
            level,
            player_start,
            gift_spots,
            hue: 0,
        })
    }

    /// Room sized to the level, view showing all of it
    pub fn config(&self) -> GameConfig {
        let (width, height) = self.level.world_size();
        GameConfig {
            room_width: width as u32,
            room_height: height as u32,
            view_width: width as u32,
            view_height: height as u32,
            ..GameConfig::default()
        }
    }

    pub fn level(&self) -> &TileGrid {
        &self.level
    }

    pub fn player_start(&self) -> (f32, f32) {
        self.player_start
    }

    pub fn gift_spots(&self) -> &[(f32, f32)] {
        &self.gift_spots
    }

    /// Descriptors the cast looks up by name.
    pub fn register_assets(game: &mut Game) {
        let assets = game.assets_mut();
        assets.register_image(BOX_IMAGE, ImageAsset::new("/res/box.png", 32, 32));
        assets.register_sprite(
            ELF_SPRITE,
            SpriteAsset::new("/res/elf.png", 32, 32).with_frames(4, 4).with_origin(16, 8),
        );
        assets.register_sprite(GIFT_SPRITE, SpriteAsset::new("/res/gift.png", 32, 32));
    }
}

impl Director for JumpGame {
    fn on_start(&mut self, game: &mut Game) {
        Self::register_assets(game);
        game.set_solids(self.level.clone());

        let (x, y) = self.player_start;
        game.create::<Player>(x, y);
        for &(x, y) in &self.gift_spots {
            game.create::<Gift>(x, y);
        }
        log::info!("level ready: {} gifts", self.gift_spots.len());
    }

    fn on_draw(&mut self, game: &Game, out: &mut DrawList) {
        let (view_x, view_y, width, height) = game.view();
        out.fill_rect(
            view_x as f32,
            view_y as f32,
            width as f32,
            height as f32,
            format!("hsl({}, 100%, 50%)", self.hue),
        );
        self.hue = (self.hue + 1) % 360;

        if let Some(tile) = game.assets().image(BOX_IMAGE) {
            let size = self.level.tile_size();
            for (column, row) in self.level.solid_tiles() {
                out.image(&tile, column as f32 * size, row as f32 * size);
            }
        }

        let mouse = game.input().mouse();
        out.fill_rect(mouse.x - 20.0, mouse.y - 20.0, 40.0, 40.0, "white");
    }
}
