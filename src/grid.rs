//! Column-major syllable grid.
//!
//! Columns are stored bottom-up: row 0 is the first element of a column and
//! refill cells are appended at the end, so consumed cells let the ones above
//! them drop down once they are removed.

use crate::{SimpleRng, SyllableTable};

/// Process-unique cell identity. Never reused, even after the cell is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub text: &'static str,
    pub id: CellId,
}

impl Cell {
    pub fn new(text: &'static str, id: CellId) -> Self {
        Self { text, id }
    }
}

/// Grid coordinates: column first, as the grid is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    columns: Vec<Vec<Cell>>,
    next_id: u64,
}

impl Grid {
    /// `n` columns of `n` freshly drawn cells.
    pub fn generate(n: usize, table: &SyllableTable, rng: &mut SimpleRng) -> Self {
        let mut grid = Self {
            size: n,
            columns: Vec::with_capacity(n),
            next_id: 0,
        };
        for _ in 0..n {
            let column = (0..n).map(|_| grid.fresh_cell(table, rng)).collect();
            grid.columns.push(column);
        }
        grid
    }

    fn fresh_cell(&mut self, table: &SyllableTable, rng: &mut SimpleRng) -> Cell {
        self.next_id += 1;
        Cell::new(table.draw(rng), CellId(self.next_id))
    }

    /// Nominal side length. Columns may briefly exceed it between a refill and
    /// the matching removal.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn columns(&self) -> &[Vec<Cell>] {
        &self.columns
    }

    pub fn column(&self, col: usize) -> Option<&[Cell]> {
        self.columns.get(col).map(Vec::as_slice)
    }

    pub fn column_len(&self, col: usize) -> usize {
        self.columns.get(col).map_or(0, Vec::len)
    }

    /// The cell at a playable position (rows past the nominal size are refill
    /// cells waiting to drop in and cannot be picked).
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if pos.row >= self.size {
            return None;
        }
        self.columns.get(pos.col)?.get(pos.row)
    }

    /// Append `count` fresh cells to the end of column `col`.
    pub fn refill_column(
        &mut self,
        col: usize,
        count: usize,
        table: &SyllableTable,
        rng: &mut SimpleRng,
    ) {
        if col >= self.columns.len() {
            return;
        }
        for _ in 0..count {
            let cell = self.fresh_cell(table, rng);
            self.columns[col].push(cell);
        }
    }

    /// Remove every cell of column `col` whose id is in `ids`, keeping the
    /// order of the rest. Returns how many were removed.
    pub fn remove_cells_by_id(&mut self, col: usize, ids: &[CellId]) -> usize {
        let Some(column) = self.columns.get_mut(col) else {
            return 0;
        };
        let before = column.len();
        column.retain(|c| !ids.contains(&c.id));
        before - column.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn table() -> SyllableTable {
        let weights = HashMap::from([
            ("ka".to_string(), 2.0),
            ("pu".to_string(), 1.0),
            ("ā".to_string(), 1.0),
        ]);
        SyllableTable::new(&weights).unwrap()
    }

    fn all_ids(grid: &Grid) -> Vec<CellId> {
        grid.columns().iter().flatten().map(|c| c.id).collect()
    }

    #[test]
    fn generate_is_square_with_distinct_ids() {
        let table = table();
        for n in [1, 3, 10] {
            let grid = Grid::generate(n, &table, &mut SimpleRng::new(n as u32));
            assert_eq!(grid.columns().len(), n);
            assert!(grid.columns().iter().all(|c| c.len() == n));
            let ids = all_ids(&grid);
            let unique: HashSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), n * n);
        }
    }

    #[test]
    fn generated_text_comes_from_weighted_syllables() {
        let grid = Grid::generate(10, &table(), &mut SimpleRng::new(3));
        for cell in grid.columns().iter().flatten() {
            assert!(["ka", "pu", "ā"].contains(&cell.text), "{}", cell.text);
        }
    }

    #[test]
    fn refill_then_remove_restores_column_length() {
        let table = table();
        let mut rng = SimpleRng::new(11);
        let mut grid = Grid::generate(10, &table, &mut rng);
        let consumed: Vec<CellId> = grid.column(4).unwrap()[2..5].iter().map(|c| c.id).collect();

        grid.refill_column(4, consumed.len(), &table, &mut rng);
        assert_eq!(grid.column_len(4), 13);

        assert_eq!(grid.remove_cells_by_id(4, &consumed), 3);
        assert_eq!(grid.column_len(4), 10);
        let remaining: Vec<CellId> = grid.column(4).unwrap().iter().map(|c| c.id).collect();
        assert!(consumed.iter().all(|id| !remaining.contains(id)));
    }

    #[test]
    fn removal_preserves_relative_order() {
        let table = table();
        let mut grid = Grid::generate(5, &table, &mut SimpleRng::new(5));
        let column: Vec<CellId> = grid.column(0).unwrap().iter().map(|c| c.id).collect();
        grid.remove_cells_by_id(0, &[column[1], column[3]]);
        let after: Vec<CellId> = grid.column(0).unwrap().iter().map(|c| c.id).collect();
        assert_eq!(after, vec![column[0], column[2], column[4]]);
    }

    #[test]
    fn ids_are_never_reused_after_removal() {
        let table = table();
        let mut rng = SimpleRng::new(8);
        let mut grid = Grid::generate(4, &table, &mut rng);
        let max_before = all_ids(&grid).into_iter().max().unwrap();
        let top = grid.column(1).unwrap()[3].id;
        grid.refill_column(1, 1, &table, &mut rng);
        grid.remove_cells_by_id(1, &[top]);
        let fresh = grid.column(1).unwrap()[3].id;
        assert!(fresh > max_before);
    }

    #[test]
    fn cell_lookup_only_covers_playable_rows() {
        let table = table();
        let mut rng = SimpleRng::new(2);
        let mut grid = Grid::generate(3, &table, &mut rng);
        grid.refill_column(0, 1, &table, &mut rng);
        assert!(grid.cell(Position::new(0, 2)).is_some());
        assert!(grid.cell(Position::new(0, 3)).is_none());
        assert!(grid.cell(Position::new(3, 0)).is_none());
    }

    #[test]
    fn out_of_range_columns_are_ignored() {
        let table = table();
        let mut rng = SimpleRng::new(2);
        let mut grid = Grid::generate(2, &table, &mut rng);
        grid.refill_column(9, 2, &table, &mut rng);
        assert_eq!(grid.remove_cells_by_id(9, &[CellId(1)]), 0);
        assert_eq!(all_ids(&grid).len(), 4);
    }
}
