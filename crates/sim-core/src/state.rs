use rand::{Rng, RngCore};
use types::{GridDim, TopologyMode};

use crate::topology;

pub const DEAD: f32 = 0.0;
pub const ALIVE: f32 = 1.0;

/// One f32 state entry per vertex of the current topology, kept as the flat
/// array the renderer uploads. Length always derives from the live grid
/// dimension and mode; any topology change reallocates it.
#[derive(Debug, Clone, Default)]
pub struct CellStateBuffer {
    states: Vec<f32>,
}

impl CellStateBuffer {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![DEAD; len],
        }
    }

    /// Reallocate for a new topology. Every cell starts dead.
    pub fn resize(&mut self, len: usize) {
        self.states.clear();
        self.states.resize(len, DEAD);
    }

    /// Kill every cell without changing the allocation.
    pub fn clear(&mut self) {
        self.states.fill(DEAD);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.states
    }

    /// Write `value` to every vertex slot of cell (x, y). In shared-vertex
    /// mode the 4 corners are shared with neighbors; last writer wins.
    pub fn set_cell(&mut self, dim: GridDim, mode: TopologyMode, x: u32, y: u32, value: f32) {
        for slot in topology::cell_vertex_slots(dim, mode, x, y) {
            self.states[slot] = value;
        }
    }

    /// State of cell (x, y), read from its first vertex slot.
    pub fn cell(&self, dim: GridDim, mode: TopologyMode, x: u32, y: u32) -> f32 {
        self.states[topology::cell_vertex_slots(dim, mode, x, y)[0]]
    }

    pub fn toggle_cell(&mut self, dim: GridDim, mode: TopologyMode, x: u32, y: u32) {
        let value = if self.cell(dim, mode, x, y) == DEAD {
            ALIVE
        } else {
            DEAD
        };
        self.set_cell(dim, mode, x, y, value);
    }

    /// Independent fair coin per cell, duplicated across the cell's vertex
    /// slots.
    pub fn randomize<R: Rng + ?Sized>(&mut self, dim: GridDim, mode: TopologyMode, rng: &mut R) {
        let n = dim.get();
        for y in 0..n {
            for x in 0..n {
                let value = if rng.random_bool(0.5) { ALIVE } else { DEAD };
                self.set_cell(dim, mode, x, y, value);
            }
        }
    }

    /// Fraction of cells alive.
    pub fn alive_fraction(&self, dim: GridDim, mode: TopologyMode) -> f64 {
        let n = dim.get();
        let mut alive = 0usize;
        for y in 0..n {
            for x in 0..n {
                if self.cell(dim, mode, x, y) == ALIVE {
                    alive += 1;
                }
            }
        }
        alive as f64 / dim.cell_count() as f64
    }
}

/// Pluggable per-tick state update. A genuine neighbor-counting rule slots
/// in here; the shipped `RandomizeRule` is a placeholder, not a faithful
/// cellular-automaton step.
pub trait StepRule {
    fn step(
        &mut self,
        states: &mut CellStateBuffer,
        dim: GridDim,
        mode: TopologyMode,
        rng: &mut dyn RngCore,
    );
}

/// Placeholder "simulation": every tick redraws each cell independently.
pub struct RandomizeRule;

impl StepRule for RandomizeRule {
    fn step(
        &mut self,
        states: &mut CellStateBuffer,
        dim: GridDim,
        mode: TopologyMode,
        rng: &mut dyn RngCore,
    ) {
        states.randomize(dim, mode, rng);
    }
}
