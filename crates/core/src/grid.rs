//! Grid state: cell storage, index/coordinate mapping and read-only queries.

use log::warn;

use crate::config::{ConfigPatch, GenerationConfig};
use crate::model::GeneratedMap;
use crate::rng::GenRng;
use crate::types::{Cell, CellRole, Direction, Phase, Pos};

/// A growing cave/maze layout.
///
/// The grid is created with its seed cell already open. Call
/// [`Grid::configure`] before the first [`Grid::step`], then step until
/// [`Grid::is_completed`] reports true.
#[derive(Clone, Debug)]
pub struct Grid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) open_count: usize,
    pub(crate) frontier: Vec<usize>,
    pub(crate) history: Vec<usize>,
    pub(crate) directions: Vec<Option<Direction>>,
    pub(crate) start: Option<usize>,
    pub(crate) last_opened: Option<usize>,
    pub(crate) config: GenerationConfig,
    pub(crate) phase: Phase,
    pub(crate) rng: GenRng,
}

impl Grid {
    /// Dimensions whose area overflows `usize` produce an empty grid.
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        let (width, height, area) = match width.checked_mul(height) {
            Some(area) => (width, height, area),
            None => {
                warn!("grid of {width}x{height} cells is too large, using an empty grid");
                (0, 0, 0)
            }
        };
        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::Unvisited; area],
            open_count: 0,
            frontier: Vec::new(),
            history: Vec::new(),
            directions: vec![None; area],
            start: None,
            last_opened: None,
            config: GenerationConfig::default(),
            phase: Phase::Unconfigured,
            rng: GenRng::seeded(seed),
        };

        if area > 0 {
            let seed_index = grid.index_of(width / 2, height / 2);
            grid.mark_open(seed_index, None);
            grid.start = Some(seed_index);
        }
        grid
    }

    /// Build from untrusted dimensions: fractions are floored, negative and
    /// NaN values become zero.
    pub fn from_loose_dimensions(width: f64, height: f64, seed: u64) -> Self {
        Self::new(loose_dimension(width), loose_dimension(height), seed)
    }

    /// Merge generation parameters. Ignored once generation has started.
    pub fn configure(&mut self, patch: &ConfigPatch) {
        match self.phase {
            Phase::Unconfigured | Phase::Configured => {
                self.config.apply(patch);
                self.phase = Phase::Configured;
            }
            Phase::Generating | Phase::Completed => {
                warn!("ignoring configuration change after generation started");
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Number of cells still waiting to expand.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index_at(pos).map(|index| self.cells[index])
    }

    pub fn is_open(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Cell::Open)
    }

    pub fn start(&self) -> Option<Pos> {
        self.start.map(|index| self.pos_of(index))
    }

    /// The most recently opened cell.
    pub fn end(&self) -> Option<Pos> {
        self.last_opened.map(|index| self.pos_of(index))
    }

    pub fn role_at(&self, pos: Pos) -> Option<CellRole> {
        let index = self.index_at(pos)?;
        cell_role(self.cells[index], index, self.start, self.last_opened)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn snapshot(&self) -> GeneratedMap {
        GeneratedMap {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
            start: self.start(),
            end: self.end(),
            open_count: self.open_count,
        }
    }

    pub(crate) fn index_of(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    pub(crate) fn pos_of(&self, index: usize) -> Pos {
        Pos { y: (index / self.width) as i32, x: (index % self.width) as i32 }
    }

    pub(crate) fn index_at(&self, pos: Pos) -> Option<usize> {
        in_bounds(self.width, self.height, pos)
            .then(|| self.index_of(pos.x as usize, pos.y as usize))
    }

    pub(crate) fn on_border(&self, pos: Pos) -> bool {
        pos.x <= 0
            || pos.y <= 0
            || pos.x >= self.width as i32 - 1
            || pos.y >= self.height as i32 - 1
    }

    /// In-bounds neighbours of `index` that are still undecided, walking the
    /// cardinal directions starting at `first`.
    pub(crate) fn unvisited_neighbours(
        &self,
        index: usize,
        first: Direction,
    ) -> Vec<(usize, Direction)> {
        let origin = self.pos_of(index);
        first
            .rotation()
            .into_iter()
            .filter_map(|direction| {
                let neighbour = self.index_at(origin.step(direction))?;
                (self.cells[neighbour] == Cell::Unvisited).then_some((neighbour, direction))
            })
            .collect()
    }

    pub(crate) fn mark_open(&mut self, index: usize, direction: Option<Direction>) {
        self.cells[index] = Cell::Open;
        self.directions[index] = direction;
        self.open_count += 1;
        self.frontier.push(index);
        self.last_opened = Some(index);
    }

    pub(crate) fn mark_closed(&mut self, index: usize, direction: Direction) {
        self.cells[index] = Cell::Closed;
        self.directions[index] = Some(direction);
        self.history.push(index);
    }
}

pub(crate) fn in_bounds(width: usize, height: usize, pos: Pos) -> bool {
    pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < width && (pos.y as usize) < height
}

pub(crate) fn cell_role(
    cell: Cell,
    index: usize,
    start: Option<usize>,
    end: Option<usize>,
) -> Option<CellRole> {
    match cell {
        Cell::Unvisited => None,
        _ if start == Some(index) => Some(CellRole::Start),
        _ if end == Some(index) => Some(CellRole::End),
        Cell::Open => Some(CellRole::Open),
        Cell::Closed => Some(CellRole::Closed),
    }
}

fn loose_dimension(value: f64) -> usize {
    if value.is_nan() { 0 } else { value.floor().max(0.0) as usize }
}
