//! Core placement logic - pure, deterministic, and testable
//!
//! This crate holds the geometry of the game and nothing else. It has **no**
//! dependencies on rendering, input, timers or persistence.
//!
//! # Module Structure
//!
//! - [`grid`]: the [`Grid`] trait, shared by tiles and boards (bounds, occupancy,
//!   iteration, point/cell conversion, text rendering)
//! - [`shape`]: the twelve pentomino templates, rotation and reflection
//! - [`tile`]: a shape with a stable [`TileId`](types::TileId)
//! - [`board`]: the padded playing surface, placement checks and the drop search
//! - [`snapshot`]: serializable board view
//!
//! # Example
//!
//! ```
//! use katamino_core::{Board, Grid, Tile};
//! use katamino_core::types::{BoardSize, Field, Point};
//!
//! let mut board = Board::new(BoardSize::DEFAULT);
//! let bar = Tile::new(0).unwrap();
//!
//! // The bar occupies column 2 of its frame; anchor (4, 2) puts it on column 4,
//! // the first playable column.
//! assert!(board.allowed_position(&bar, Field::new(4, 2)));
//! assert!(board.position(&bar, Field::new(4, 2)));
//! assert_eq!(board.tile_at(Field::new(8, 4)).map(Tile::id), Some(bar.id()));
//!
//! // Pointer drops snap to the nearest legal anchor within one cell.
//! let cross = Tile::new(1).unwrap();
//! let drop = board.allowed_drop_location(&cross, Point::new(205.0, 165.0), 40.0);
//! assert_eq!(drop, Some(Field::new(4, 5)));
//! ```

pub mod board;
pub mod error;
pub mod grid;
pub mod shape;
pub mod snapshot;
pub mod tile;

pub use katamino_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, PlacedTile};
pub use error::CoreError;
pub use grid::{Fields, Grid};
pub use shape::{shape_name, Shape, SHAPE_NAMES};
pub use snapshot::{BoardSnapshot, PlacedSnapshot};
pub use tile::Tile;
