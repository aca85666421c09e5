//! Board module - the playing surface and its placed tiles
//!
//! The board is a `(height + 8) x (width + 8)` matrix: the playable area sits inside a
//! border of [`BOARD_PADDING`] permanently occupied cells on every side. The border
//! lets a tile's 5x5 frame hang past the playable edge while its occupied cells are
//! still rejected by the plain occupancy check.
//!
//! The list of placed tiles is the single source of truth. The occupancy matrix is
//! rebuilt from the empty template and that list whenever the list changes, so the two
//! can never disagree.
//!
//! Coordinates: `(row, column)` over the padded matrix. The top-left playable cell is
//! `(4, 4)`.

use std::fmt;

use tracing::{debug, trace};

use crate::grid::Grid;
use crate::snapshot::BoardSnapshot;
use crate::tile::Tile;
use crate::types::{BoardSize, Field, Point, TileId, BOARD_PADDING};

/// A tile recorded on the board, with the board field of its local (0, 0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTile {
    pub anchor: Field,
    pub tile: Tile,
}

impl PlacedTile {
    /// Board fields covered by the tile
    pub fn board_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.tile
            .occupied_fields()
            .map(move |cell| cell.offset_by(self.anchor))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    /// Derived occupancy, always `empty_board` plus every placed tile
    rows: Vec<Vec<bool>>,
    /// Padding occupied, playable area free
    empty_board: Vec<Vec<bool>>,
    placed: Vec<PlacedTile>,
}

impl Board {
    /// Create an empty board with the given playable size
    pub fn new(size: BoardSize) -> Self {
        let padded_width = size.padded_width();
        let mut empty_board = Vec::with_capacity(size.padded_height());
        for _ in 0..BOARD_PADDING {
            empty_board.push(vec![true; padded_width]);
        }
        for _ in 0..size.height {
            let mut row = vec![true; padded_width];
            for cell in &mut row[BOARD_PADDING..BOARD_PADDING + size.width] {
                *cell = false;
            }
            empty_board.push(row);
        }
        for _ in 0..BOARD_PADDING {
            empty_board.push(vec![true; padded_width]);
        }

        Self {
            size,
            rows: empty_board.clone(),
            empty_board,
            placed: Vec::new(),
        }
    }

    /// Playable size (padding excluded)
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// True if every occupied cell of `tile`, offset by `field`, lands on a free cell
    ///
    /// Cells outside the padded matrix and padding cells both fail the check. Empty
    /// cells of the tile's frame are not checked.
    pub fn allowed_position<G: Grid + ?Sized>(&self, tile: &G, field: Field) -> bool {
        for cell in tile.occupied_fields() {
            let board_cell = cell.offset_by(field);
            if self.field_occupied(board_cell) != Ok(false) {
                trace!(anchor = %field, blocked = %board_cell, "position rejected");
                return false;
            }
        }
        true
    }

    /// Nearest legal anchor to `point`, looking only at the cell under it and its eight
    /// neighbours
    ///
    /// The cell under the point wins outright when legal. Otherwise the legal neighbour
    /// whose origin is closest to `point` is returned; ties keep the first candidate in
    /// row-major order. A `cell_size` that is not a positive finite number finds nothing.
    pub fn allowed_drop_location<G: Grid + ?Sized>(
        &self,
        tile: &G,
        point: Point,
        cell_size: f64,
    ) -> Option<Field> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            trace!(cell_size, "drop search skipped");
            return None;
        }
        let target = self.field_at(point, cell_size);
        if self.allowed_position(tile, target) {
            return Some(target);
        }

        let mut best: Option<(f64, Field)> = None;
        for candidate in self.fields_surrounding(target) {
            if !self.allowed_position(tile, candidate) {
                continue;
            }
            let distance = self
                .point_at_origin_of(candidate, cell_size)
                .distance_squared(point);
            if best.map_or(true, |(closest, _)| distance < closest) {
                best = Some((distance, candidate));
            }
        }
        trace!(cell = %target, found = ?best.map(|(_, f)| f), "drop search");
        best.map(|(_, field)| field)
    }

    /// Validate and record `tile` at `field`
    ///
    /// Returns false, leaving the board untouched, if the position is illegal or a tile
    /// with the same id is already on the board.
    pub fn position(&mut self, tile: &Tile, field: Field) -> bool {
        if self.contains(tile.id()) {
            debug!(tile = %tile.id(), "tile already placed");
            return false;
        }
        if !self.allowed_position(tile, field) {
            return false;
        }
        self.record_placement(PlacedTile {
            anchor: field,
            tile: tile.clone(),
        });
        debug!(
            tile = %tile.id(),
            anchor = %field,
            placed = self.placed.len(),
            "tile placed"
        );
        true
    }

    /// The placed tile covering `field`, if any
    pub fn tile_at(&self, field: Field) -> Option<&Tile> {
        self.placed
            .iter()
            .find(|placed| {
                let local = field.offset_by(-placed.anchor);
                placed.tile.field_occupied(local) == Ok(true)
            })
            .map(|placed| &placed.tile)
    }

    /// Take the tile with handle `id` off the board
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let index = self.placed.iter().position(|p| p.tile.id() == id)?;
        let removed = self.record_removal(index);
        debug!(
            tile = %id,
            anchor = %removed.anchor,
            placed = self.placed.len(),
            "tile removed"
        );
        Some(removed.tile)
    }

    /// Placed tiles in insertion order
    pub fn placed_tiles(&self) -> &[PlacedTile] {
        &self.placed
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.placed.iter().any(|p| p.tile.id() == id)
    }

    /// Anchor of the placed tile with handle `id`
    pub fn anchor_of(&self, id: TileId) -> Option<Field> {
        self.placed
            .iter()
            .find(|p| p.tile.id() == id)
            .map(|p| p.anchor)
    }

    /// Interior cells, row-major, tagged with their occupancy
    pub fn playable_fields(&self) -> impl Iterator<Item = Field> + '_ {
        let rows = BOARD_PADDING..BOARD_PADDING + self.size.height;
        let columns = BOARD_PADDING..BOARD_PADDING + self.size.width;
        self.fields().filter(move |f| {
            rows.contains(&(f.row as usize)) && columns.contains(&(f.column as usize))
        })
    }

    /// Interior cells not covered by any tile
    pub fn free_playable_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.playable_fields().filter(|f| f.occupied == Some(false))
    }

    /// True once no interior cell is free
    pub fn is_full(&self) -> bool {
        self.free_playable_fields().next().is_none()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self)
    }

    fn record_placement(&mut self, placed: PlacedTile) {
        self.placed.push(placed);
        self.update_rows();
    }

    fn record_removal(&mut self, index: usize) -> PlacedTile {
        let removed = self.placed.remove(index);
        self.update_rows();
        removed
    }

    /// Rebuild occupancy from the empty template and the placed tiles
    fn update_rows(&mut self) {
        self.rows.clone_from(&self.empty_board);
        for placed in &self.placed {
            for cell in placed.board_fields() {
                if cell.row < 0 || cell.column < 0 {
                    continue;
                }
                if let Some(value) = self
                    .rows
                    .get_mut(cell.row as usize)
                    .and_then(|row| row.get_mut(cell.column as usize))
                {
                    *value = true;
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::DEFAULT)
    }
}

impl Grid for Board {
    fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}
