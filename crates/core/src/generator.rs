//! Growth state machine: batches of propagations driven by `Grid::step`.

mod breakthrough;

use log::debug;

use crate::grid::Grid;
use crate::model::GeneratedMap;
use crate::types::{Direction, Phase, StepReport};

impl Grid {
    /// Run up to `speed` propagations. Once a propagation reports that no
    /// further progress is possible the grid is completed and every later
    /// call is a no-op.
    pub fn step(&mut self) -> StepReport {
        if self.phase == Phase::Completed {
            return StepReport { propagations: 0, completed: true };
        }
        self.phase = Phase::Generating;

        let mut propagations = 0;
        for _ in 0..self.config.speed {
            if !self.propagate() {
                self.complete();
                break;
            }
            propagations += 1;
        }

        StepReport { propagations, completed: self.is_completed() }
    }

    /// Step until completed.
    pub fn generate(&mut self) -> GeneratedMap {
        self.generate_with(|_| {})
    }

    /// Step until completed, handing the grid to `update` after each batch.
    pub fn generate_with<F>(&mut self, mut update: F) -> GeneratedMap
    where
        F: FnMut(&Grid),
    {
        while !self.is_completed() {
            self.step();
            update(self);
        }
        self.snapshot()
    }

    /// One growth step. Returns false when generation cannot continue.
    pub(crate) fn propagate(&mut self) -> bool {
        if self.phase == Phase::Completed {
            return false;
        }

        if self.frontier.is_empty() && !(self.expanding() && self.breakthrough()) {
            return false;
        }
        // A breakthrough may have opened a cell, so decide again.
        let expanding = self.expanding();

        let picked = self.rng.index(self.frontier.len());
        let index = self.frontier.swap_remove(picked);

        let inherited = self.directions[index];
        let primary = match inherited {
            Some(direction) if self.rng.chance(self.config.linearity) => direction,
            _ => Direction::from_index(self.rng.index(Direction::ALL.len())),
        };

        let mut candidates = self.unvisited_neighbours(index, primary);
        candidates.retain(|&(neighbour, direction)| {
            if self.on_border(self.pos_of(neighbour)) {
                self.mark_closed(neighbour, direction);
                false
            } else {
                true
            }
        });

        if expanding && !candidates.is_empty() {
            let forced = match candidates.first() {
                Some(&(_, direction)) if direction == primary => 0,
                _ => self.rng.index(candidates.len()),
            };
            let (neighbour, direction) = candidates.remove(forced);
            self.open_neighbour(neighbour, direction);
        }

        self.rng.shuffle(&mut candidates);
        for (neighbour, direction) in candidates {
            let closing = self.config.is_capped(self.open_count);
            if !closing && self.rng.chance(self.config.density) {
                self.open_neighbour(neighbour, direction);
            } else {
                self.mark_closed(neighbour, direction);
            }
        }

        true
    }

    /// Below `min` and still under the cap: growth must not stall.
    fn expanding(&self) -> bool {
        self.open_count < self.config.min && !self.config.is_capped(self.open_count)
    }

    fn open_neighbour(&mut self, index: usize, direction: Direction) {
        self.mark_open(index, Some(direction));
        self.history.push(index);
    }

    fn complete(&mut self) {
        debug!(
            "generation completed with {} open cells (min {}, max {:?})",
            self.open_count, self.config.min, self.config.max
        );
        self.phase = Phase::Completed;
        self.frontier = Vec::new();
        self.history = Vec::new();
        self.directions = Vec::new();
    }
}
