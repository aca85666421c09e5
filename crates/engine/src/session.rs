//! Session module - one round of play over a board and a full tile set
//!
//! The session owns the board, the twelve tiles and each tile's interaction state.
//! It enforces the lock rule: a tile that is on the board is locked and can only be
//! picked up again, never rotated, reflected, or placed a second time.

use tracing::debug;

use katamino_core::types::{BoardSize, Field, Point, TileId};
use katamino_core::{Board, Tile};

use crate::error::PlaceError;

/// Interaction state of one tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementState {
    /// On the board and not movable
    pub locked: bool,
    /// The next release should rotate the tile instead of dropping it
    pub pending_rotation: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    tiles: Vec<Tile>,
    states: Vec<PlacementState>,
}

impl Session {
    /// A fresh round: empty board, all tiles unplaced in template orientation
    pub fn new(size: BoardSize) -> Self {
        let tiles = Tile::all();
        let states = vec![PlacementState::default(); tiles.len()];
        Self {
            board: Board::new(size),
            tiles,
            states,
        }
    }

    /// Start over with a fresh board of the same size and a fresh tile set
    pub fn reset(&mut self) {
        debug!(size = %self.board.size(), "session reset");
        *self = Session::new(self.board.size());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    pub fn state(&self, id: TileId) -> Option<PlacementState> {
        self.states.get(id.index()).copied()
    }

    /// Rotate an unlocked tile a quarter turn clockwise
    pub fn rotate(&mut self, id: TileId) -> Result<(), PlaceError> {
        let slot = self.unlocked(id)?;
        self.tiles[slot].rotate();
        self.states[slot].pending_rotation = false;
        Ok(())
    }

    /// Mirror an unlocked tile
    pub fn reflect(&mut self, id: TileId) -> Result<(), PlaceError> {
        let slot = self.unlocked(id)?;
        self.tiles[slot].reflect();
        Ok(())
    }

    pub fn set_pending_rotation(&mut self, id: TileId, pending: bool) -> Result<(), PlaceError> {
        let slot = self.slot(id)?;
        self.states[slot].pending_rotation = pending;
        Ok(())
    }

    /// Whether the next release of `id` should rotate it
    pub fn pending_rotation(&self, id: TileId) -> Result<bool, PlaceError> {
        let slot = self.slot(id)?;
        Ok(self.states[slot].pending_rotation)
    }

    /// Place an unlocked tile at the legal anchor nearest to `point` and lock it
    pub fn drop_at(&mut self, id: TileId, point: Point, cell_size: f64) -> Result<Field, PlaceError> {
        let slot = self.unlocked(id)?;
        let field = self
            .board
            .allowed_drop_location(&self.tiles[slot], point, cell_size)
            .ok_or(PlaceError::NoDropLocation(id))?;
        self.commit(slot, field)?;
        Ok(field)
    }

    /// Place an unlocked tile at exactly `field` and lock it
    pub fn place(&mut self, id: TileId, field: Field) -> Result<(), PlaceError> {
        let slot = self.unlocked(id)?;
        self.commit(slot, field)
    }

    /// Lift a placed tile off the board and unlock it; returns the anchor it left
    pub fn pick_up(&mut self, id: TileId) -> Result<Field, PlaceError> {
        let slot = self.slot(id)?;
        let anchor = self.board.anchor_of(id).ok_or(PlaceError::NotPlaced(id))?;
        self.board.remove(id);
        self.states[slot] = PlacementState::default();
        Ok(anchor)
    }

    /// True while at least one tile is not locked on the board
    pub fn tiles_left(&self) -> bool {
        self.states.iter().any(|s| !s.locked)
    }

    /// Ids of tiles not on the board
    pub fn unplaced(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles
            .iter()
            .zip(&self.states)
            .filter(|(_, state)| !state.locked)
            .map(|(tile, _)| tile.id())
    }

    /// Every playable cell is covered
    pub fn is_solved(&self) -> bool {
        self.board.is_full()
    }

    fn slot(&self, id: TileId) -> Result<usize, PlaceError> {
        if id.index() < self.tiles.len() {
            Ok(id.index())
        } else {
            Err(PlaceError::UnknownTile(id))
        }
    }

    fn unlocked(&self, id: TileId) -> Result<usize, PlaceError> {
        let slot = self.slot(id)?;
        if self.states[slot].locked {
            return Err(PlaceError::Locked(id));
        }
        Ok(slot)
    }

    fn commit(&mut self, slot: usize, field: Field) -> Result<(), PlaceError> {
        let tile = &self.tiles[slot];
        if !self.board.position(tile, field) {
            return Err(PlaceError::Blocked {
                tile: tile.id(),
                field,
            });
        }
        self.states[slot] = PlacementState {
            locked: true,
            pending_rotation: false,
        };
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BoardSize::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katamino_core::Grid;

    #[test]
    fn place_locks_and_pick_up_unlocks() {
        let mut s = Session::default();
        let id = TileId(0);
        s.place(id, Field::new(4, 2)).unwrap();
        assert_eq!(s.state(id).map(|st| st.locked), Some(true));
        assert!(matches!(s.rotate(id), Err(PlaceError::Locked(_))));
        assert!(matches!(s.reflect(id), Err(PlaceError::Locked(_))));
        assert!(matches!(
            s.place(id, Field::new(4, 3)),
            Err(PlaceError::Locked(_))
        ));

        assert_eq!(s.pick_up(id), Ok(Field::new(4, 2)));
        assert_eq!(s.state(id), Some(PlacementState::default()));
        assert_eq!(s.board().placed_count(), 0);
        assert!(s.rotate(id).is_ok());
    }

    #[test]
    fn pick_up_unplaced_tile() {
        let mut s = Session::default();
        let before = s.board().clone();
        assert_eq!(s.pick_up(TileId(3)), Err(PlaceError::NotPlaced(TileId(3))));
        assert_eq!(s.board(), &before);
    }

    #[test]
    fn unknown_tile_rejected() {
        let mut s = Session::default();
        let err = s.rotate(TileId(12)).unwrap_err();
        assert_eq!(err, PlaceError::UnknownTile(TileId(12)));
        assert_eq!(err.code(), "unknown_tile");
        assert!(s.tile(TileId(12)).is_none());
    }

    #[test]
    fn blocked_place_leaves_tile_unlocked() {
        let mut s = Session::default();
        let err = s.place(TileId(1), Field::new(0, 0)).unwrap_err();
        assert_eq!(err.code(), "invalid_place");
        assert_eq!(err.tile(), TileId(1));
        assert_eq!(s.state(TileId(1)).map(|st| st.locked), Some(false));
        assert!(s.tiles_left());
    }

    #[test]
    fn drop_clears_pending_rotation() {
        let mut s = Session::default();
        s.set_pending_rotation(TileId(1), true).unwrap();
        let field = s
            .drop_at(TileId(1), Point::new(205.0, 165.0), 40.0)
            .unwrap();
        assert_eq!(field, Field::new(4, 5));
        assert_eq!(
            s.state(TileId(1)),
            Some(PlacementState {
                locked: true,
                pending_rotation: false
            })
        );
        assert_eq!(s.unplaced().count(), 11);
    }

    #[test]
    fn reset_restores_template_orientation() {
        let mut s = Session::new(BoardSize::SIX_BY_TEN);
        s.rotate(TileId(2)).unwrap();
        s.place(TileId(0), Field::new(4, 2)).unwrap();
        s.reset();
        assert_eq!(s.board().size(), BoardSize::SIX_BY_TEN);
        assert_eq!(s.board().placed_count(), 0);
        assert_eq!(
            s.tile(TileId(2)).map(|t| t.render_text()),
            Tile::new(2).ok().map(|t| t.render_text())
        );
        assert!(s.unplaced().eq(TileId::all()));
    }
}
