//! Property tests for the placement engine.
//!
//! Invariants covered:
//! - Placed tiles never share a board cell and never cover padding.
//! - Board occupancy always equals padding plus the cells of the placed tiles.
//! - A rejected placement or removal leaves the board unchanged.
//! - Reflect is an involution; four rotations are the identity.
//! - Field/point conversion round-trips on cell boundaries.

use std::collections::HashSet;

use proptest::prelude::*;

use katamino::core::{Board, Grid, Tile};
use katamino::types::{BoardSize, Field, Point, TileId, BOARD_PADDING};

#[derive(Debug, Clone)]
enum Op {
    Place {
        tile: usize,
        reflect: bool,
        turns: u8,
        row: i32,
        column: i32,
    },
    Remove {
        tile: u8,
    },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..12, any::<bool>(), 0u8..4, -2i32..18, -2i32..22).prop_map(
            |(tile, reflect, turns, row, column)| Op::Place {
                tile,
                reflect,
                turns,
                row,
                column,
            }
        ),
        1 => (0u8..12).prop_map(|tile| Op::Remove { tile }),
    ]
}

fn size_strategy() -> impl Strategy<Value = BoardSize> {
    prop::sample::select(BoardSize::PRESETS.to_vec())
}

fn is_padding(size: BoardSize, f: Field) -> bool {
    let pad = BOARD_PADDING as i32;
    f.row < pad
        || f.column < pad
        || f.row >= pad + size.height as i32
        || f.column >= pad + size.width as i32
}

fn assert_consistent(board: &Board) {
    let size = board.size();
    let mut covered = HashSet::new();
    for placed in board.placed_tiles() {
        for cell in placed.board_fields() {
            assert!(!is_padding(size, cell), "tile covers padding at {cell}");
            assert!(covered.insert(cell), "cell {cell} covered twice");
        }
    }
    for field in board.fields() {
        let expected = is_padding(size, field) || covered.contains(&field);
        assert_eq!(field.occupied, Some(expected), "cell {field}");
    }
}

fn oriented(index: usize, reflect: bool, turns: u8) -> Tile {
    let mut tile = Tile::new(index).unwrap();
    if reflect {
        tile.reflect();
    }
    for _ in 0..turns {
        tile.rotate();
    }
    tile
}

proptest! {
    #[test]
    fn placements_stay_disjoint_and_consistent(
        size in size_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..60),
    ) {
        let mut board = Board::new(size);
        for op in ops {
            let before = board.clone();
            match op {
                Op::Place { tile, reflect, turns, row, column } => {
                    let t = oriented(tile, reflect, turns);
                    let anchor = Field::new(row, column);
                    let allowed = board.allowed_position(&t, anchor)
                        && !board.contains(t.id());
                    let placed = board.position(&t, anchor);
                    prop_assert_eq!(placed, allowed);
                    if placed {
                        prop_assert_eq!(board.anchor_of(t.id()), Some(anchor));
                    } else {
                        prop_assert_eq!(&board, &before);
                    }
                }
                Op::Remove { tile } => {
                    let id = TileId(tile);
                    let was_placed = board.contains(id);
                    let removed = board.remove(id);
                    prop_assert_eq!(removed.is_some(), was_placed);
                    if !was_placed {
                        prop_assert_eq!(&board, &before);
                    }
                }
            }
            assert_consistent(&board);
        }
    }

    #[test]
    fn tile_at_agrees_with_placed_cells(
        ops in prop::collection::vec(op_strategy(), 1..30),
    ) {
        let mut board = Board::default();
        for op in ops {
            if let Op::Place { tile, reflect, turns, row, column } = op {
                board.position(&oriented(tile, reflect, turns), Field::new(row, column));
            }
        }
        for field in board.playable_fields() {
            let owner = board
                .placed_tiles()
                .iter()
                .find(|p| p.board_fields().any(|c| c == field))
                .map(|p| p.tile.id());
            prop_assert_eq!(board.tile_at(field).map(Tile::id), owner);
            prop_assert_eq!(field.is_occupied(), owner.is_some());
        }
    }

    #[test]
    fn reflect_twice_is_identity(tile in 0usize..12, turns in 0u8..4) {
        let original = oriented(tile, false, turns);
        let mut t = original.clone();
        t.reflect();
        t.reflect();
        prop_assert_eq!(t, original);
    }

    #[test]
    fn four_rotations_are_identity(tile in 0usize..12, reflect in any::<bool>()) {
        let original = oriented(tile, reflect, 0);
        let mut t = original.clone();
        for _ in 0..4 {
            t.rotate();
            prop_assert_eq!(t.shape().cell_count(), 5);
        }
        prop_assert_eq!(t, original);
    }

    #[test]
    fn field_point_round_trip(row in -50i32..50, column in -50i32..50, cell in 1u32..100) {
        let board = Board::default();
        let cell_size = cell as f64;
        let field = Field::new(row, column);
        let origin = board.point_at_origin_of(field, cell_size);
        prop_assert_eq!(board.field_at(origin, cell_size), field);
    }

    #[test]
    fn point_snaps_into_its_cell(x in -2000i32..2000, y in -2000i32..2000, cell in 1u32..100) {
        let board = Board::default();
        let cell_size = cell as f64;
        let point = Point::new(x as f64, y as f64);
        let origin = board.point_at_origin_of(board.field_at(point, cell_size), cell_size);
        prop_assert!(origin.x <= point.x && point.x - origin.x < cell_size);
        prop_assert!(origin.y <= point.y && point.y - origin.y < cell_size);
    }

    #[test]
    fn drop_location_is_legal_and_local(
        tile in 0usize..12,
        x in 0.0f64..640.0,
        y in 0.0f64..640.0,
    ) {
        let mut board = Board::default();
        board.position(&Tile::new(1).unwrap(), Field::new(5, 5));
        let t = Tile::new(tile).unwrap();
        let target = board.field_at(Point::new(x, y), 40.0);
        if let Some(found) = board.allowed_drop_location(&t, Point::new(x, y), 40.0) {
            prop_assert!(board.allowed_position(&t, found));
            prop_assert!((found.row - target.row).abs() <= 1);
            prop_assert!((found.column - target.column).abs() <= 1);
        } else {
            for f in board.fields_surrounding(target) {
                prop_assert!(!board.allowed_position(&t, f));
            }
        }
    }
}
