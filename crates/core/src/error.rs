//! Error types for grid access and tile construction

use katamino_types::TILE_COUNT;

/// Failures of the core grid operations.
///
/// Illegal placements are not errors; they are reported as `false`/`None` by the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A field was read outside the matrix
    #[error("field ({row}, {column}) is outside the grid")]
    OutOfBounds { row: i32, column: i32 },
    /// A tile was requested for a template index that does not exist
    #[error("unknown shape index {0}, expected less than {}", TILE_COUNT)]
    UnknownShape(usize),
}
