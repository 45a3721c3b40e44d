//! The player's in-progress word: an ordered stack of picked cells.

use crate::{Cell, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEntry {
    pub position: Position,
    pub cell: Cell,
}

impl SelectionEntry {
    pub fn new(position: Position, cell: Cell) -> Self {
        Self { position, cell }
    }
}

/// What a click did to the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The last entry was clicked again and removed.
    Popped,
    /// An earlier entry was clicked; everything after it was dropped.
    Truncated { removed: usize },
    Pushed,
    /// Not adjacent to the active cell; nothing changed.
    Ignored,
}

/// King-move adjacency: at most one step in each axis, and not the same cell.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    let dc = a.col.abs_diff(b.col);
    let dr = a.row.abs_diff(b.row);
    dc.max(dr) == 1
}

#[derive(Debug, Clone, Default)]
pub struct Path {
    entries: Vec<SelectionEntry>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click. Entries are matched by position, not by cell identity.
    pub fn toggle(&mut self, entry: SelectionEntry) -> Toggle {
        let last = self.entries.len().checked_sub(1);
        match self.index_of(entry.position) {
            Some(i) if Some(i) == last => {
                self.entries.pop();
                Toggle::Popped
            }
            Some(i) => {
                let removed = self.entries.len() - (i + 1);
                self.entries.truncate(i + 1);
                Toggle::Truncated { removed }
            }
            None => match self.entries.last() {
                Some(active) if !is_adjacent(active.position, entry.position) => Toggle::Ignored,
                _ => {
                    self.entries.push(entry);
                    Toggle::Pushed
                }
            },
        }
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        self.entries.iter().position(|e| e.position == pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    pub fn is_last(&self, pos: Position) -> bool {
        self.entries.last().is_some_and(|e| e.position == pos)
    }

    /// The word spelled so far.
    pub fn text(&self) -> String {
        self.entries.iter().map(|e| e.cell.text).collect()
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellId, SimpleRng};

    fn entry(col: usize, row: usize) -> SelectionEntry {
        let id = (col * 100 + row) as u64;
        SelectionEntry::new(Position::new(col, row), Cell::new("ka", CellId(id)))
    }

    fn positions(path: &Path) -> Vec<(usize, usize)> {
        path.entries()
            .iter()
            .map(|e| (e.position.col, e.position.row))
            .collect()
    }

    #[test]
    fn adjacency_is_eight_neighbour() {
        let centre = Position::new(4, 4);
        for dc in -1i32..=1 {
            for dr in -1i32..=1 {
                let other = Position::new((4 + dc) as usize, (4 + dr) as usize);
                assert_eq!(is_adjacent(centre, other), (dc, dr) != (0, 0));
            }
        }
        assert!(!is_adjacent(centre, Position::new(6, 4)));
        assert!(!is_adjacent(centre, Position::new(5, 6)));
        assert!(is_adjacent(Position::new(0, 0), Position::new(1, 1)));
    }

    #[test]
    fn first_click_is_always_accepted() {
        let mut path = Path::new();
        assert_eq!(path.toggle(entry(7, 2)), Toggle::Pushed);
        assert_eq!(positions(&path), vec![(7, 2)]);
    }

    #[test]
    fn non_adjacent_click_is_ignored() {
        let mut path = Path::new();
        path.toggle(entry(0, 0));
        assert_eq!(path.toggle(entry(2, 0)), Toggle::Ignored);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn reclicking_last_pops_it() {
        let mut path = Path::new();
        path.toggle(entry(0, 0));
        path.toggle(entry(1, 1));
        assert_eq!(path.toggle(entry(1, 1)), Toggle::Popped);
        assert_eq!(positions(&path), vec![(0, 0)]);
        assert_eq!(path.toggle(entry(0, 0)), Toggle::Popped);
        assert!(path.is_empty());
    }

    #[test]
    fn reclicking_earlier_entry_truncates_after_it() {
        let mut path = Path::new();
        for (c, r) in [(0, 0), (1, 0), (2, 1), (3, 2)] {
            assert_eq!(path.toggle(entry(c, r)), Toggle::Pushed);
        }
        assert_eq!(path.toggle(entry(1, 0)), Toggle::Truncated { removed: 2 });
        assert_eq!(positions(&path), vec![(0, 0), (1, 0)]);
        assert!(path.is_last(Position::new(1, 0)));
    }

    #[test]
    fn matching_is_by_position_not_cell() {
        let mut path = Path::new();
        path.toggle(entry(3, 3));
        let replaced = SelectionEntry::new(Position::new(3, 3), Cell::new("pu", CellId(999)));
        assert_eq!(path.toggle(replaced), Toggle::Popped);
    }

    #[test]
    fn text_concatenates_in_path_order() {
        let mut path = Path::new();
        path.toggle(SelectionEntry::new(Position::new(0, 0), Cell::new("ku", CellId(1))));
        path.toggle(SelectionEntry::new(Position::new(0, 1), Cell::new("pu", CellId(2))));
        assert_eq!(path.text(), "kupu");
        path.clear();
        assert_eq!(path.text(), "");
    }

    #[test]
    fn random_clicks_keep_path_unique_and_connected() {
        let mut rng = SimpleRng::new(2024);
        let mut path = Path::new();
        for _ in 0..5_000 {
            let col = (rng.next_f64() * 5.0) as usize;
            let row = (rng.next_f64() * 5.0) as usize;
            let before = path.len();
            let was_last = path.is_last(Position::new(col, row));
            path.toggle(entry(col, row));
            if was_last {
                assert_eq!(path.len(), before - 1);
            }

            let ps = path.entries();
            for (i, a) in ps.iter().enumerate() {
                for b in &ps[i + 1..] {
                    assert_ne!(a.position, b.position);
                }
            }
            for pair in ps.windows(2) {
                assert!(is_adjacent(pair[0].position, pair[1].position));
            }
        }
    }
}
