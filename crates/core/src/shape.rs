//! Shapes module - the twelve pentomino templates and their quarter-turn/mirror transforms
//!
//! Every shape lives in a fixed 5x5 frame. Empty rows and columns of the frame are part
//! of the shape, so a tile's local (0, 0) is always the frame corner, not the first
//! occupied cell.

use crate::error::CoreError;
use crate::grid::Grid;
use crate::types::{SHAPE_FRAME, TILE_COUNT};

/// A template row, `x` marks an occupied cell
type TemplateRow = &'static str;

/// Shape templates, indexed by tile number
const TEMPLATES: [[TemplateRow; SHAPE_FRAME]; TILE_COUNT] = [
    // 0: I
    ["  x  ", "  x  ", "  x  ", "  x  ", "  x  "],
    // 1: X
    ["     ", "  x  ", " xxx ", "  x  ", "     "],
    // 2: L
    ["     ", " xx  ", "  x  ", "  x  ", "  x  "],
    // 3: F
    ["     ", "  xx ", " xx  ", "  x  ", "     "],
    // 4: P
    ["     ", "  xx ", "  xx ", "  x  ", "     "],
    // 5: T
    ["     ", " xxx ", "  x  ", "  x  ", "     "],
    // 6: U
    ["     ", "     ", " x x ", " xxx ", "     "],
    // 7: V
    ["     ", " x   ", " x   ", " xxx ", "     "],
    // 8: W
    ["     ", " x   ", " xx  ", "  xx ", "     "],
    // 9: Y
    ["     ", "  x  ", " xx  ", "  x  ", "  x  "],
    // 10: Z
    ["     ", " xx  ", "  x  ", "  xx ", "     "],
    // 11: N
    ["  x  ", "  xx ", "   x ", "   x ", "     "],
];

/// Conventional pentomino letters, same order as the templates
pub const SHAPE_NAMES: [char; TILE_COUNT] =
    ['I', 'X', 'L', 'F', 'P', 'T', 'U', 'V', 'W', 'Y', 'Z', 'N'];

/// Letter of the template at `index`
pub fn shape_name(index: usize) -> Option<char> {
    SHAPE_NAMES.get(index).copied()
}

/// A boolean matrix holding one polyomino
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: Vec<Vec<bool>>,
}

impl Shape {
    /// Build the template at `index` (0..12)
    pub fn from_index(index: usize) -> Result<Self, CoreError> {
        let template = TEMPLATES.get(index).ok_or(CoreError::UnknownShape(index))?;
        Ok(Self::from_pattern(template))
    }

    /// Build a shape from text rows, `x` occupied, anything else free
    pub fn from_pattern(pattern: &[&str]) -> Self {
        let rows = pattern
            .iter()
            .map(|line| line.chars().map(|c| c == 'x').collect())
            .collect();
        Self { rows }
    }

    /// Quarter turn clockwise
    pub fn rotate(&mut self) {
        self.rows = rotate_matrix(&self.rows);
    }

    /// Mirror left to right
    pub fn reflect(&mut self) {
        self.rows = reflect_matrix(&self.rows);
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c).count()
    }

    /// Occupied cells as `(row, column)`, shifted so the smallest row and column are 0,
    /// sorted row-major.
    ///
    /// Two shapes with equal normalized cells are the same polyomino in the same
    /// orientation, wherever they sit inside their frames.
    pub fn normalized_cells(&self) -> Vec<(i32, i32)> {
        let cells: Vec<(i32, i32)> = self
            .occupied_fields()
            .map(|f| (f.row, f.column))
            .collect();
        let min_row = cells.iter().map(|c| c.0).min().unwrap_or(0);
        let min_column = cells.iter().map(|c| c.1).min().unwrap_or(0);
        let mut out: Vec<_> = cells
            .into_iter()
            .map(|(r, c)| (r - min_row, c - min_column))
            .collect();
        out.sort_unstable();
        out
    }
}

impl Grid for Shape {
    fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }
}

/// Transpose, then reverse each row: a clockwise quarter turn
pub fn rotate_matrix<T: Clone>(input: &[Vec<T>]) -> Vec<Vec<T>> {
    let Some(first) = input.first() else {
        return Vec::new();
    };
    let mut out: Vec<Vec<T>> = vec![Vec::with_capacity(input.len()); first.len()];
    for row in input {
        for (column, value) in row.iter().enumerate() {
            if let Some(target) = out.get_mut(column) {
                target.push(value.clone());
            }
        }
    }
    for row in &mut out {
        row.reverse();
    }
    out
}

/// Reverse each row independently, keeping row order
pub fn reflect_matrix<T: Clone>(input: &[Vec<T>]) -> Vec<Vec<T>> {
    input
        .iter()
        .map(|row| row.iter().rev().cloned().collect())
        .collect()
}
