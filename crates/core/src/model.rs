//! Owned, serializable result of a generation run.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::grid::{cell_role, in_bounds};
use crate::types::{Cell, CellRole, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMap {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
    pub start: Option<Pos>,
    pub end: Option<Pos>,
    pub open_count: usize,
}

impl GeneratedMap {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.cells.len() + 32);
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                Cell::Unvisited => 0,
                Cell::Open => 1,
                Cell::Closed => 2,
            });
        }
        for pos in [self.start, self.end] {
            let pos = pos.unwrap_or(Pos { y: -1, x: -1 });
            bytes.extend(pos.y.to_le_bytes());
            bytes.extend(pos.x.to_le_bytes());
        }
        bytes.extend((self.open_count as u32).to_le_bytes());
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn cell_at(&self, pos: Pos) -> Option<Cell> {
        in_bounds(self.width, self.height, pos)
            .then(|| self.cells[(pos.y as usize) * self.width + (pos.x as usize)])
    }

    pub fn role_at(&self, pos: Pos) -> Option<CellRole> {
        let cell = self.cell_at(pos)?;
        let to_index = |pos: Pos| (pos.y as usize) * self.width + (pos.x as usize);
        cell_role(cell, to_index(pos), self.start.map(to_index), self.end.map(to_index))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&candidate| candidate == cell).count()
    }

    /// Row-major positions, top row first.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ConfigPatch;
    use crate::grid::Grid;
    use crate::types::{Cell, CellRole, Pos};

    fn sample(seed: u64) -> super::GeneratedMap {
        let mut grid = Grid::new(24, 18, seed);
        grid.configure(&ConfigPatch::new().min(60_u32).density(0.35).linearity(0.5));
        grid.generate()
    }

    #[test]
    fn same_seed_produces_identical_fingerprints() {
        let left = sample(123_456);
        let right = sample(123_456);
        assert_eq!(left.canonical_bytes(), right.canonical_bytes());
        assert_eq!(left.fingerprint(), right.fingerprint());
    }

    #[test]
    fn different_seeds_change_the_layout() {
        assert_ne!(sample(1).fingerprint(), sample(2).fingerprint());
    }

    #[test]
    fn open_count_matches_cells() {
        let map = sample(77);
        assert_eq!(map.count(Cell::Open), map.open_count);
        assert_eq!(map.positions().count(), map.width * map.height);
    }

    #[test]
    fn roles_mark_start_and_end() {
        let map = sample(5);
        let start = map.start.expect("non-empty grid has a start");
        let end = map.end.expect("non-empty grid has an end");
        assert_ne!(start, end);
        assert_eq!(map.role_at(start), Some(CellRole::Start));
        assert_eq!(map.role_at(end), Some(CellRole::End));
        assert_eq!(map.role_at(Pos::new(-1, 0)), None);
    }

    #[test]
    fn map_survives_json_serialization() {
        let map = sample(9);
        let json = serde_json::to_string(&map).expect("map should serialize");
        let decoded: super::GeneratedMap = serde_json::from_str(&json).expect("map should parse");
        assert_eq!(decoded, map);
    }
}
