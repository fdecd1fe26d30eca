//! Reopening dead branches when the frontier runs dry below the minimum.

use log::debug;

use crate::grid::Grid;
use crate::types::{Cell, Direction};

impl Grid {
    /// Push the most recently decided interior cell that still borders
    /// undecided space back onto the frontier, opening it if it was closed.
    ///
    /// Entries passed over on the way can never become eligible again and are
    /// dropped from the history. Returns false when no candidate is left.
    pub(super) fn breakthrough(&mut self) -> bool {
        while let Some(&index) = self.history.last() {
            if !self.on_border(self.pos_of(index)) && self.has_unvisited_neighbour(index) {
                if self.cells[index] != Cell::Open {
                    self.cells[index] = Cell::Open;
                    self.open_count += 1;
                }
                self.frontier.push(index);
                self.last_opened = Some(index);
                debug!(
                    "breakthrough at {:?} with {} open cells",
                    self.pos_of(index),
                    self.open_count
                );
                return true;
            }
            self.history.pop();
        }
        false
    }

    fn has_unvisited_neighbour(&self, index: usize) -> bool {
        !self.unvisited_neighbours(index, Direction::East).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::types::{Cell, Direction, Pos};

    #[test]
    fn reopens_the_newest_eligible_cell() {
        let mut grid = Grid::new(7, 7, 1);
        grid.frontier.clear();
        let older = grid.index_of(2, 3);
        let newer = grid.index_of(4, 3);
        grid.mark_closed(older, Direction::West);
        grid.mark_closed(newer, Direction::East);

        assert!(grid.breakthrough());
        assert_eq!(grid.get(Pos::new(4, 3)), Some(Cell::Open));
        assert_eq!(grid.get(Pos::new(2, 3)), Some(Cell::Closed));
        assert_eq!(grid.open_count(), 2);
        assert_eq!(grid.frontier, vec![newer]);
        assert_eq!(grid.end(), Some(Pos::new(4, 3)));
    }

    #[test]
    fn skips_border_cells_and_drops_exhausted_entries() {
        let mut grid = Grid::new(5, 5, 1);
        grid.frontier.clear();
        let interior = grid.index_of(2, 1);
        grid.mark_closed(interior, Direction::North);
        let border = grid.index_of(2, 0);
        grid.mark_closed(border, Direction::North);

        assert!(grid.breakthrough());
        assert_eq!(grid.history, vec![interior]);
        assert_eq!(grid.frontier, vec![interior]);
    }

    #[test]
    fn reports_failure_when_nothing_borders_undecided_space() {
        let mut grid = Grid::new(3, 3, 1);
        grid.frontier.clear();
        for (x, y, direction) in [
            (1, 0, Direction::North),
            (2, 1, Direction::East),
            (1, 2, Direction::South),
            (0, 1, Direction::West),
        ] {
            let index = grid.index_of(x, y);
            grid.mark_closed(index, direction);
        }

        assert!(!grid.breakthrough());
        assert!(grid.history.is_empty());
        assert_eq!(grid.open_count(), 1);
    }
}
