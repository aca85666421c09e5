//! Snapshot module - a serializable view of a board
//!
//! Snapshots are detached copies: rendered rows for humans, the placement list for
//! tools. They are what the binary prints with `--json`.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::grid::Grid;
use crate::types::{BoardSize, Field, TileId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedSnapshot {
    pub tile: TileId,
    /// Index into the shape templates
    pub template: usize,
    pub name: char,
    pub anchor: Field,
    /// Board fields covered by the tile
    pub cells: Vec<Field>,
}

/// Serializable view of a board: rendered rows plus the placement list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: BoardSize,
    pub rows: Vec<String>,
    pub placed: Vec<PlacedSnapshot>,
    pub free_cells: usize,
    pub full: bool,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let placed = board
            .placed_tiles()
            .iter()
            .map(|p| PlacedSnapshot {
                tile: p.tile.id(),
                template: p.tile.template(),
                name: p.tile.name(),
                anchor: p.anchor,
                cells: p.board_fields().collect(),
            })
            .collect();
        let free_cells = board.free_playable_fields().count();
        Self {
            size: board.size(),
            rows: board.render_text().lines().map(str::to_owned).collect(),
            placed,
            free_cells,
            full: free_cells == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    #[test]
    fn test_snapshot_lists_placements() {
        let mut board = Board::new(BoardSize::SIX_BY_TEN);
        let tile = Tile::new(0).unwrap();
        assert!(board.position(&tile, Field::new(4, 2)));

        let snap = board.snapshot();
        assert_eq!(snap.size, BoardSize::SIX_BY_TEN);
        assert_eq!(snap.rows.len(), 14);
        assert_eq!(snap.placed.len(), 1);
        assert_eq!(snap.placed[0].template, 0);
        assert_eq!(snap.placed[0].name, 'I');
        assert_eq!(snap.placed[0].cells[0], Field::new(4, 4));
        assert_eq!(snap.free_cells, 55);
        assert!(!snap.full);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snap = Board::new(BoardSize::new(1, 2)).snapshot();
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["size"]["height"], 1);
        assert_eq!(json["size"]["width"], 2);
        assert_eq!(json["free_cells"], 2);
        assert_eq!(json["rows"][4], "xxxx  xxxx");

        let back: BoardSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_snapshot_json_carries_template() {
        let mut board = Board::default();
        let mut tile = Tile::new(7).unwrap();
        tile.rotate();
        assert!(board.position(&tile, Field::new(4, 4)));

        let json = serde_json::to_value(board.snapshot()).unwrap();
        assert_eq!(json["placed"][0]["tile"], 7);
        assert_eq!(json["placed"][0]["template"], 7);
        assert_eq!(json["placed"][0]["name"], "V");
        assert_eq!(json["placed"][0]["cells"].as_array().map(Vec::len), Some(5));
    }
}
