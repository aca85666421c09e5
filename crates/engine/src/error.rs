use katamino_core::types::{Field, TileId};

/// Why a session refused a tile operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("tile {0} does not exist")]
    UnknownTile(TileId),
    #[error("tile {0} is locked on the board")]
    Locked(TileId),
    #[error("tile {0} is not on the board")]
    NotPlaced(TileId),
    #[error("tile {tile} cannot be placed at {field}")]
    Blocked { tile: TileId, field: Field },
    #[error("no legal drop location for tile {0}")]
    NoDropLocation(TileId),
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::UnknownTile(_) => "unknown_tile",
            PlaceError::Locked(_) => "tile_locked",
            PlaceError::NotPlaced(_) => "not_placed",
            PlaceError::Blocked { .. } | PlaceError::NoDropLocation(_) => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::UnknownTile(_) => "tile id is outside the tile set",
            PlaceError::Locked(_) => "tile is placed and cannot be moved or transformed",
            PlaceError::NotPlaced(_) => "tile is not on the board",
            PlaceError::Blocked { .. } => "tile would overlap another tile or leave the board",
            PlaceError::NoDropLocation(_) => "no free position within one cell of the pointer",
        }
    }

    /// The tile the failed operation was about
    pub fn tile(self) -> TileId {
        match self {
            PlaceError::UnknownTile(id)
            | PlaceError::Locked(id)
            | PlaceError::NotPlaced(id)
            | PlaceError::NoDropLocation(id)
            | PlaceError::Blocked { tile: id, .. } => id,
        }
    }
}
