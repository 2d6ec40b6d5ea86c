//! Tile grid - level solidity from an ASCII layout
//!
//! `#` marks a solid tile, anything else is empty. Rows shorter than the
//! widest one are padded with empty tiles. Points outside the grid are solid,
//! so a level is always closed.

use crate::core::{EngineError, EngineResult};
use crate::systems::SolidityOracle;

pub const SOLID_TILE: char = '#';

#[derive(Clone, Debug, PartialEq)]
pub struct TileGrid {
    columns: usize,
    rows: usize,
    tile_size: f32,
    solid: Vec<bool>,
}

impl TileGrid {
    /// Parse a layout. Blank lines before the first and after the last row
    /// are ignored.
    pub fn from_ascii(layout: &str, tile_size: f32) -> EngineResult<Self> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(EngineError::InvalidLevel(format!("tile size {tile_size} must be positive")));
        }

        let lines: Vec<&str> = layout.lines().map(|l| l.trim_end_matches('\r')).collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let (first, last) = match (first, last) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(EngineError::InvalidLevel("layout has no rows".into())),
        };
        let lines = &lines[first..=last];

        let columns = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = lines.len();
        let mut solid = vec![false; columns * rows];
        for (row, line) in lines.iter().enumerate() {
            for (column, ch) in line.chars().enumerate() {
                solid[row * columns + column] = ch == SOLID_TILE;
            }
        }

        Ok(Self { columns, rows, tile_size, solid })
    }

    /// Fully empty grid.
    pub fn empty(columns: usize, rows: usize, tile_size: f32) -> EngineResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(EngineError::InvalidLevel(format!("grid {columns}x{rows} has no tiles")));
        }
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(EngineError::InvalidLevel(format!("tile size {tile_size} must be positive")));
        }
        Ok(Self {
            columns,
            rows,
            tile_size,
            solid: vec![false; columns * rows],
        })
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// World extent in units
    pub fn world_size(&self) -> (f32, f32) {
        (self.columns as f32 * self.tile_size, self.rows as f32 * self.tile_size)
    }

    #[inline]
    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| row * self.columns + column)
    }

    /// Out-of-range tiles are solid.
    pub fn is_solid_tile(&self, column: usize, row: usize) -> bool {
        self.index(column, row).map_or(true, |i| self.solid[i])
    }

    /// Returns `false` for out-of-range tiles (nothing changed).
    pub fn set_solid_tile(&mut self, column: usize, row: usize, solid: bool) -> bool {
        match self.index(column, row) {
            Some(i) => {
                self.solid[i] = solid;
                true
            }
            None => false,
        }
    }

    /// Solid tiles in row-major order as `(column, row)`
    pub fn solid_tiles(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.solid
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s)
            .map(move |(i, _)| (i % columns, i / columns))
    }

    /// Layout in the same format `from_ascii` reads
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.columns + 1) * self.rows);
        for row in 0..self.rows {
            if row > 0 {
                out.push('\n');
            }
            for column in 0..self.columns {
                out.push(if self.is_solid_tile(column, row) { SOLID_TILE } else { ' ' });
            }
        }
        out
    }
}

impl SolidityOracle for TileGrid {
    fn is_solid_at(&self, x: f32, y: f32) -> bool {
        // NaN fails both comparisons and lands here too.
        if !(x >= 0.0 && y >= 0.0) {
            return true;
        }
        let column = (x / self.tile_size).floor() as usize;
        let row = (y / self.tile_size).floor() as usize;
        self.is_solid_tile(column, row)
    }
}
