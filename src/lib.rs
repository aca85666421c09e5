//! Katamino (workspace facade crate).
//!
//! Re-exports the member crates as `katamino::{types, core, engine}` and adds the
//! TOML play scripts used by the `katamino` binary.

pub use katamino_core as core;
pub use katamino_engine as engine;
pub use katamino_types as types;

pub mod script;
