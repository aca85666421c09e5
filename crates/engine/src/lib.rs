//! Session layer over the core placement logic
//!
//! [`Session`] is what an interactive front end drives: it picks tiles by
//! [`TileId`](katamino_core::types::TileId), applies rotations and reflections,
//! drops tiles at pointer positions, and lifts them off again. Failures come back as
//! [`PlaceError`] with a stable [`code`](PlaceError::code).

pub mod error;
pub mod session;

pub use katamino_core as core;
pub use katamino_core::types;

pub use error::PlaceError;
pub use session::{PlacementState, Session};
