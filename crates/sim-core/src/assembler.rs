use log::info;
use rand::Rng;
use types::{GridDim, TopologyMode};

use crate::state::CellStateBuffer;
use crate::topology::{self, GridMesh};

/// Combines topology output and cell states into the flat arrays handed to
/// the render backend. Distinguishes the full rebuild (dimension or mode
/// changed: positions, indices, and a reallocated all-dead state array) from
/// the per-tick partial refresh (states only).
pub struct GeometryAssembler {
    dim: GridDim,
    mode: TopologyMode,
    mesh: GridMesh,
    states: CellStateBuffer,
}

impl GeometryAssembler {
    pub fn new(dim: GridDim, mode: TopologyMode) -> Self {
        Self {
            dim,
            mode,
            mesh: topology::generate(dim, mode),
            states: CellStateBuffer::new(mode.state_len(dim)),
        }
    }

    pub fn dim(&self) -> GridDim {
        self.dim
    }

    pub fn mode(&self) -> TopologyMode {
        self.mode
    }

    /// Positions and optional indices of the current topology.
    pub fn mesh(&self) -> &GridMesh {
        &self.mesh
    }

    /// The state sub-array for the partial refresh path.
    pub fn states(&self) -> &[f32] {
        self.states.as_slice()
    }

    pub fn state_buffer_mut(&mut self) -> &mut CellStateBuffer {
        &mut self.states
    }

    /// Full rebuild. Regenerates the topology and reallocates the state
    /// array to all-dead. Only needed when the dimension or mode changes.
    pub fn rebuild(&mut self, dim: GridDim, mode: TopologyMode) {
        self.dim = dim;
        self.mode = mode;
        self.mesh = topology::generate(dim, mode);
        self.states.resize(mode.state_len(dim));
        info!(
            "grid rebuilt: {0}x{0} cells, {1:?}, {2} vertices",
            dim.get(),
            mode,
            self.mesh.vertex_count
        );
    }

    pub fn set_cell(&mut self, x: u32, y: u32, value: f32) {
        self.states.set_cell(self.dim, self.mode, x, y, value);
    }

    pub fn toggle_cell(&mut self, x: u32, y: u32) {
        self.states.toggle_cell(self.dim, self.mode, x, y);
    }

    pub fn clear_states(&mut self) {
        self.states.clear();
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.states.randomize(self.dim, self.mode, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ALIVE, DEAD};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dim(n: u32) -> GridDim {
        GridDim::new(n).unwrap()
    }

    #[test]
    fn state_len_tracks_topology() {
        let mut asm = GeometryAssembler::new(dim(2), TopologyMode::SharedVertex);
        assert_eq!(asm.states().len(), 9);
        asm.rebuild(dim(3), TopologyMode::PerCell);
        assert_eq!(asm.states().len(), 54);
        assert_eq!(asm.mesh().vertex_count, 54);
    }

    #[test]
    fn rebuild_resets_states_to_dead() {
        let mut asm = GeometryAssembler::new(dim(4), TopologyMode::PerCell);
        asm.set_cell(1, 1, ALIVE);
        asm.rebuild(dim(4), TopologyMode::PerCell);
        assert!(asm.states().iter().all(|&s| s == DEAD));
    }

    #[test]
    fn refresh_reflects_cell_writes_without_rebuild() {
        let mut asm = GeometryAssembler::new(dim(2), TopologyMode::PerCell);
        let positions_before = asm.mesh().positions.clone();
        asm.set_cell(0, 0, ALIVE);
        assert_eq!(&asm.states()[..6], &[ALIVE; 6]);
        // Positions untouched by a state-only update.
        assert_eq!(asm.mesh().positions, positions_before);
    }

    #[test]
    fn initial_n2_shared_scenario() {
        let asm = GeometryAssembler::new(dim(2), TopologyMode::SharedVertex);
        assert_eq!(asm.mesh().vertex_count, 9);
        assert_eq!(asm.mesh().indices.as_ref().unwrap().len(), 24);
        assert_eq!(asm.states(), &[DEAD; 9]);
    }

    #[test]
    fn randomize_goes_through_current_topology() {
        let mut asm = GeometryAssembler::new(dim(8), TopologyMode::SharedVertex);
        asm.randomize(&mut StdRng::seed_from_u64(11));
        assert_eq!(asm.states().len(), 81);
        assert!(asm.states().iter().any(|&s| s == ALIVE));
    }
}
