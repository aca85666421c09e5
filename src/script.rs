//! Play scripts - a TOML list of tile operations replayed against a session
//!
//! ```toml
//! size = "6x10"
//! cell_size = 40.0
//!
//! [[step]]
//! action = "rotate"
//! tile = 2
//! times = 2
//!
//! [[step]]
//! action = "place"
//! tile = 2
//! row = 4
//! column = 3
//!
//! [[step]]
//! action = "drop"
//! tile = 1
//! x = 205.0
//! y = 165.0
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::engine::{PlaceError, Session};
use crate::types::{BoardSize, Field, ParseBoardSizeError, Point, TileId};

/// Cell size used for `drop` steps when neither the script nor the caller sets one
pub const DEFAULT_CELL_SIZE: f64 = 40.0;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Size(#[from] ParseBoardSizeError),
    #[error("cell size must be a positive finite number, got {0}")]
    CellSize(f64),
    #[error("step {step}: {source}")]
    Step { step: usize, source: PlaceError },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Place { tile: u8, row: i32, column: i32 },
    Drop { tile: u8, x: f64, y: f64 },
    Rotate {
        tile: u8,
        #[serde(default = "one")]
        times: u8,
    },
    Reflect { tile: u8 },
    PickUp { tile: u8 },
}

fn one() -> u8 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayScript {
    /// Board size as `HxW`
    pub size: Option<String>,
    pub cell_size: Option<f64>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl PlayScript {
    pub fn from_toml_str(content: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The board size requested by the script, if any
    pub fn board_size(&self) -> Result<Option<BoardSize>, ScriptError> {
        match &self.size {
            Some(s) => Ok(Some(s.parse()?)),
            None => Ok(None),
        }
    }

    /// Cell size for `drop` steps: `requested`, else the script's own, else
    /// [`DEFAULT_CELL_SIZE`]
    pub fn cell_size(&self, requested: Option<f64>) -> Result<f64, ScriptError> {
        let cell_size = requested.or(self.cell_size).unwrap_or(DEFAULT_CELL_SIZE);
        validate_cell_size(cell_size)
    }

    /// Apply every step in order. Stops at the first failing step; steps before it stay
    /// applied. Returns the number of steps applied.
    pub fn run(&self, session: &mut Session, cell_size: Option<f64>) -> Result<usize, ScriptError> {
        let cell_size = self.cell_size(cell_size)?;
        for (i, step) in self.steps.iter().enumerate() {
            let step_no = i + 1;
            apply(session, step, cell_size).map_err(|source| ScriptError::Step {
                step: step_no,
                source,
            })?;
            debug!(step = step_no, ?step, "step applied");
        }
        Ok(self.steps.len())
    }
}

/// Accept only positive finite cell sizes
pub fn validate_cell_size(cell_size: f64) -> Result<f64, ScriptError> {
    if cell_size.is_finite() && cell_size > 0.0 {
        Ok(cell_size)
    } else {
        Err(ScriptError::CellSize(cell_size))
    }
}

fn apply(session: &mut Session, step: &Step, cell_size: f64) -> Result<(), PlaceError> {
    match *step {
        Step::Place { tile, row, column } => session.place(TileId(tile), Field::new(row, column)),
        Step::Drop { tile, x, y } => session
            .drop_at(TileId(tile), Point::new(x, y), cell_size)
            .map(|_| ()),
        Step::Rotate { tile, times } => {
            for _ in 0..times {
                session.rotate(TileId(tile))?;
            }
            Ok(())
        }
        Step::Reflect { tile } => session.reflect(TileId(tile)),
        Step::PickUp { tile } => session.pick_up(TileId(tile)).map(|_| ()),
    }
}
