use serde::{Deserialize, Serialize};

use crate::*;

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Magnitude exponent stored per cell, the displayed tile is `2^exponent` and `0` is empty.
pub type Exponent = u8;

/// Accumulated score type.
pub type Score = u64;

/// Displayed value of a tile with the given exponent, `0` for an empty cell.
pub const fn exponent_value(exponent: Exponent) -> Score {
    if exponent == 0 {
        return 0;
    }
    match (1 as Score).checked_shl(exponent as u32) {
        Some(value) => value,
        None => Score::MAX,
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// A position on the field, both coordinates are always inside `[0, SIZE)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(Coord, Coord)", into = "(Coord, Coord)")]
pub struct Cell {
    row: Coord,
    column: Coord,
}

impl Cell {
    pub fn at(row: Coord, column: Coord) -> Result<Self> {
        if usize::from(row) < SIZE && usize::from(column) < SIZE {
            Ok(Self { row, column })
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub(crate) const fn new_unchecked(row: Coord, column: Coord) -> Self {
        Self { row, column }
    }

    pub const fn row(self) -> Coord {
        self.row
    }

    pub const fn column(self) -> Coord {
        self.column
    }

    /// Steps once along `dir`, returning a value only when it remains on the field.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let column = self.column.checked_add_signed(dc)?;
        Self::at(row, column).ok()
    }

    /// Every cell of the field in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SIZE as Coord)
            .flat_map(|row| (0..SIZE as Coord).map(move |column| Self::new_unchecked(row, column)))
    }
}

impl ToNdIndex for Cell {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), self.column.into()]
    }
}

impl TryFrom<(Coord, Coord)> for Cell {
    type Error = GameError;

    fn try_from((row, column): (Coord, Coord)) -> Result<Self> {
        Self::at(row, column)
    }
}

impl From<Cell> for (Coord, Coord) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.column)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit `(row, column)` delta of a single step.
    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }
}

/// Visit order for one axis: start at the edge the delta points toward.
pub(crate) fn scan_order(delta: i8) -> [Coord; SIZE] {
    let mut order = [0; SIZE];
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = (if delta > 0 { SIZE - 1 - i } else { i }) as Coord;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_rejects_out_of_bounds() {
        assert_eq!(Cell::at(4, 0), Err(GameError::InvalidCoords));
        assert_eq!(Cell::at(0, 4), Err(GameError::InvalidCoords));
        assert!(Cell::at(3, 3).is_ok());
    }

    #[test]
    fn cell_equality_uses_both_coordinates() {
        assert_eq!(Cell::at(1, 2).unwrap(), Cell::at(1, 2).unwrap());
        assert_ne!(Cell::at(1, 2).unwrap(), Cell::at(2, 1).unwrap());
    }

    #[test]
    fn step_stops_at_edges() {
        let corner = Cell::at(0, 0).unwrap();
        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Down), Some(Cell::at(1, 0).unwrap()));
        assert_eq!(corner.step(Direction::Right), Some(Cell::at(0, 1).unwrap()));

        let far = Cell::at(3, 3).unwrap();
        assert_eq!(far.step(Direction::Down), None);
        assert_eq!(far.step(Direction::Right), None);
    }

    #[test]
    fn all_cells_are_row_major() {
        let cells: alloc::vec::Vec<_> = Cell::all().map(<(Coord, Coord)>::from).collect();
        assert_eq!(cells.len(), SIZE * SIZE);
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[1], (0, 1));
        assert_eq!(cells[4], (1, 0));
        assert_eq!(cells[15], (3, 3));
    }

    #[test]
    fn exponent_value_is_power_of_two() {
        assert_eq!(exponent_value(0), 0);
        assert_eq!(exponent_value(1), 2);
        assert_eq!(exponent_value(2), 4);
        assert_eq!(exponent_value(11), 2048);
        assert_eq!(exponent_value(64), Score::MAX);
    }

    #[test]
    fn scan_order_starts_at_destination_edge() {
        assert_eq!(scan_order(-1), [0, 1, 2, 3]);
        assert_eq!(scan_order(0), [0, 1, 2, 3]);
        assert_eq!(scan_order(1), [3, 2, 1, 0]);
    }

    #[test]
    fn cell_deserialization_checks_bounds() {
        let cell: Cell = serde_json::from_str("[2,3]").unwrap();
        assert_eq!(cell, Cell::at(2, 3).unwrap());
        assert!(serde_json::from_str::<Cell>("[5,0]").is_err());
    }
}
