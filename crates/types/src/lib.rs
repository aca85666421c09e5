//! Core types module - shared value types and constants
//!
//! This module defines the fundamental types used throughout the placement engine.
//! All types are plain values with no behaviour beyond arithmetic and parsing, making
//! them usable in any context (grid queries, board state, scripts, snapshots).
//!
//! # Coordinates
//!
//! Cells are addressed by [`Field`] as `(row, column)`, row 0 at the top, column 0 at
//! the left. Continuous pointer positions are [`Point`]s in the same orientation:
//! `x` grows with the column, `y` grows with the row.
//!
//! # Board Dimensions
//!
//! Every preset has a playable area of 60 cells, the combined area of the twelve
//! pentominoes:
//!
//! | Preset | Rows x Columns |
//! |--------|----------------|
//! | `DEFAULT` | 8 x 8 (4 cells left over) |
//! | `SIX_BY_TEN` | 6 x 10 |
//! | `FIVE_BY_TWELVE` | 5 x 12 |
//! | `FOUR_BY_FIFTEEN` | 4 x 15 |
//! | `THREE_BY_TWENTY` | 3 x 20 |
//!
//! The board surrounds the playable area with [`BOARD_PADDING`] permanently occupied
//! cells on each side.
//!
//! # Examples
//!
//! ```
//! use katamino_types::{BoardSize, Field};
//!
//! let anchor = Field::new(4, 2);
//! let cell = Field::new(1, 2).offset_by(anchor);
//! assert_eq!(cell, Field::new(5, 4));
//! assert_eq!(cell.offset_by(-anchor), Field::new(1, 2));
//!
//! let size: BoardSize = "6x10".parse().unwrap();
//! assert_eq!(size, BoardSize::SIX_BY_TEN);
//! assert_eq!(size.area(), 60);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Permanently occupied border cells on each side of the playable area
pub const BOARD_PADDING: usize = 4;

/// Side length of the square frame every tile shape is authored in
pub const SHAPE_FRAME: usize = 5;

/// Number of distinct tiles in one game
pub const TILE_COUNT: usize = 12;

/// Cells covered by a single pentomino
pub const PENTOMINO_CELLS: usize = 5;

/// Glyph used for occupied cells in the text rendering
pub const OCCUPIED_GLYPH: char = 'x';

/// Glyph used for free cells in the text rendering
pub const FREE_GLYPH: char = ' ';

/// A grid coordinate, optionally tagged with the occupancy of the cell it was read from
///
/// - `occupied == None`: pure coordinate (offsets, anchors, pointer lookups)
/// - `occupied == Some(_)`: produced by grid iteration, carries the cell value
///
/// Equality and hashing only look at `row` and `column`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Field {
    pub row: i32,
    pub column: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupied: Option<bool>,
}

impl Field {
    /// Create a pure coordinate
    pub const fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            occupied: None,
        }
    }

    /// Create a coordinate tagged with the occupancy of its cell
    pub const fn with_occupancy(row: i32, column: i32, occupied: bool) -> Self {
        Self {
            row,
            column,
            occupied: Some(occupied),
        }
    }

    /// Componentwise sum, saturating at the `i32` range. The result is a pure coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use katamino_types::Field;
    ///
    /// let moved = Field::with_occupancy(2, 3, true).offset_by(Field::new(-1, 4));
    /// assert_eq!(moved, Field::new(1, 7));
    /// assert_eq!(moved.occupied, None);
    /// ```
    pub const fn offset_by(self, other: Field) -> Field {
        Field::new(
            self.row.saturating_add(other.row),
            self.column.saturating_add(other.column),
        )
    }

    /// True if this field was produced from an occupied cell
    pub fn is_occupied(&self) -> bool {
        self.occupied == Some(true)
    }
}

impl Neg for Field {
    type Output = Field;

    fn neg(self) -> Field {
        Field::new(self.row.saturating_neg(), self.column.saturating_neg())
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A continuous position in the same orientation as the grid (points, not cells)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Playable size of a board (padding excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    pub height: usize,
    pub width: usize,
}

impl BoardSize {
    /// 8x8, the size a new game starts with
    pub const DEFAULT: BoardSize = BoardSize::new(8, 8);
    pub const SIX_BY_TEN: BoardSize = BoardSize::new(6, 10);
    pub const FIVE_BY_TWELVE: BoardSize = BoardSize::new(5, 12);
    pub const FOUR_BY_FIFTEEN: BoardSize = BoardSize::new(4, 15);
    pub const THREE_BY_TWENTY: BoardSize = BoardSize::new(3, 20);

    /// All supported presets, default first
    pub const PRESETS: [BoardSize; 5] = [
        BoardSize::DEFAULT,
        BoardSize::SIX_BY_TEN,
        BoardSize::FIVE_BY_TWELVE,
        BoardSize::FOUR_BY_FIFTEEN,
        BoardSize::THREE_BY_TWENTY,
    ];

    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Number of playable cells
    pub const fn area(&self) -> usize {
        self.height * self.width
    }

    /// Row count including padding
    pub const fn padded_height(&self) -> usize {
        self.height + 2 * BOARD_PADDING
    }

    /// Column count including padding
    pub const fn padded_width(&self) -> usize {
        self.width + 2 * BOARD_PADDING
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        BoardSize::DEFAULT
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Error returned when a board size string is not `HxW` with positive dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoardSizeError(String);

impl fmt::Display for ParseBoardSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid board size {:?}, expected HEIGHTxWIDTH", self.0)
    }
}

impl std::error::Error for ParseBoardSizeError {}

impl FromStr for BoardSize {
    type Err = ParseBoardSizeError;

    /// Parse `"HxW"` (case-insensitive separator, surrounding whitespace ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseBoardSizeError(s.to_string());
        let lower = s.trim().to_lowercase();
        let (h, w) = lower.split_once('x').ok_or_else(err)?;
        let height: usize = h.trim().parse().map_err(|_| err())?;
        let width: usize = w.trim().parse().map_err(|_| err())?;
        if height == 0 || width == 0 {
            return Err(err());
        }
        Ok(BoardSize::new(height, width))
    }
}

/// Stable handle of a tile within one game (index into the tile set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All ids of a full tile set, in order
    pub fn all() -> impl Iterator<Item = TileId> {
        (0..TILE_COUNT as u8).map(TileId)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
