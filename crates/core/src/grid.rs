//! Grid module - the rectangular occupancy matrix shared by tiles and boards
//!
//! Anything that can hand out its rows as `&[Vec<bool>]` gets the full field-based
//! query surface: bounds checks, occupancy reads, row-major iteration, the 3x3
//! neighbourhood used by the drop search, and the conversions between continuous
//! points and cells.
//!
//! Rows are expected to be rectangular. Column counts are still read per row so a
//! malformed matrix never indexes out of range.

use arrayvec::ArrayVec;

use crate::error::CoreError;
use crate::types::{Field, Point, FREE_GLYPH, OCCUPIED_GLYPH};

/// Occupied fields of a grid, in row-major order
pub type OccupiedFields<'a> = std::iter::Filter<Fields<'a>, fn(&Field) -> bool>;

/// Read access to a rectangular boolean occupancy matrix
pub trait Grid {
    /// The matrix, row-major
    fn rows(&self) -> &[Vec<bool>];

    /// Number of rows
    fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Number of columns in `row` (0 for a row that does not exist)
    fn column_count(&self, row: usize) -> usize {
        self.rows().get(row).map_or(0, Vec::len)
    }

    /// True iff `0 <= row < row_count` and `0 <= column < column_count(row)`
    fn field_within_grid(&self, field: Field) -> bool {
        if field.row < 0 || field.column < 0 {
            return false;
        }
        let row = field.row as usize;
        row < self.row_count() && (field.column as usize) < self.column_count(row)
    }

    /// Occupancy of the cell at `field`
    ///
    /// Returns [`CoreError::OutOfBounds`] when the field is not within the grid.
    fn field_occupied(&self, field: Field) -> Result<bool, CoreError> {
        if !self.field_within_grid(field) {
            return Err(CoreError::OutOfBounds {
                row: field.row,
                column: field.column,
            });
        }
        Ok(self.rows()[field.row as usize][field.column as usize])
    }

    /// Every cell in row-major order, tagged with its occupancy
    fn fields(&self) -> Fields<'_> {
        Fields::new(self.rows())
    }

    /// The cells whose occupancy is `true`
    fn occupied_fields(&self) -> OccupiedFields<'_> {
        self.fields().filter(Field::is_occupied as fn(&Field) -> bool)
    }

    /// The cells whose occupancy equals `occupied`
    fn fields_with(&self, occupied: bool) -> Vec<Field> {
        self.fields()
            .filter(|f| f.occupied == Some(occupied))
            .collect()
    }

    /// The 3x3 block centred on `field`, row-major, without bounds filtering
    fn fields_surrounding(&self, field: Field) -> ArrayVec<Field, 9> {
        let mut out = ArrayVec::new();
        for dr in -1..=1 {
            for dc in -1..=1 {
                out.push(field.offset_by(Field::new(dr, dc)));
            }
        }
        out
    }

    /// The cell under `point` for square cells of side `cell_size`
    ///
    /// Coordinates beyond the `i32` range saturate; a NaN quotient maps to 0.
    fn field_at(&self, point: Point, cell_size: f64) -> Field {
        Field::new(
            (point.y / cell_size).floor() as i32,
            (point.x / cell_size).floor() as i32,
        )
    }

    /// Top-left corner of `field`; inverse of [`Grid::field_at`] on cell boundaries
    fn point_at_origin_of(&self, field: Field, cell_size: f64) -> Point {
        Point::new(
            field.column as f64 * cell_size,
            field.row as f64 * cell_size,
        )
    }

    /// Extent of the whole matrix as `(width, height)`
    fn size_for_grid(&self, cell_size: f64) -> (f64, f64) {
        let width = self.column_count(0) as f64;
        let height = self.row_count() as f64;
        (width * cell_size, height * cell_size)
    }

    /// One line per row, occupied cells as `x`, free cells as spaces
    fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|&occupied| {
                if occupied {
                    OCCUPIED_GLYPH
                } else {
                    FREE_GLYPH
                }
            }));
        }
        out
    }
}

/// Row-major walk over a matrix, created by [`Grid::fields`]
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rows: &'a [Vec<bool>],
    row: usize,
    column: usize,
}

impl<'a> Fields<'a> {
    fn new(rows: &'a [Vec<bool>]) -> Self {
        Self {
            rows,
            row: 0,
            column: 0,
        }
    }
}

impl Iterator for Fields<'_> {
    type Item = Field;

    fn next(&mut self) -> Option<Field> {
        loop {
            let row = self.rows.get(self.row)?;
            if let Some(&occupied) = row.get(self.column) {
                let field = Field::with_occupancy(self.row as i32, self.column as i32, occupied);
                self.column += 1;
                return Some(field);
            }
            self.row += 1;
            self.column = 0;
        }
    }
}
