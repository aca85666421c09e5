//! Tile module - one pentomino of a game's set
//!
//! A tile is its handle, the template it was built from, and its current
//! orientation. Interaction state (locked, pending rotation) is kept by whoever
//! drives the game, keyed by [`TileId`].

use std::fmt;

use crate::error::CoreError;
use crate::grid::Grid;
use crate::shape::{shape_name, Shape};
use crate::types::{TileId, TILE_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    template: usize,
    shape: Shape,
}

impl Tile {
    /// Build tile `index` of the standard set; the id equals the template index
    pub fn new(index: usize) -> Result<Self, CoreError> {
        let shape = Shape::from_index(index)?;
        Ok(Self {
            id: TileId(index as u8),
            template: index,
            shape,
        })
    }

    /// The full set of twelve tiles, ids 0..12
    pub fn all() -> Vec<Tile> {
        (0..TILE_COUNT).filter_map(|i| Tile::new(i).ok()).collect()
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    /// Template index this tile was built from
    pub fn template(&self) -> usize {
        self.template
    }

    /// Pentomino letter
    pub fn name(&self) -> char {
        shape_name(self.template).unwrap_or('?')
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Quarter turn clockwise
    pub fn rotate(&mut self) {
        self.shape.rotate();
    }

    /// Mirror left to right
    pub fn reflect(&mut self) {
        self.shape.reflect();
    }
}

impl Grid for Tile {
    fn rows(&self) -> &[Vec<bool>] {
        self.shape.rows()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}
