use thiserror::Error;

pub const MIN_GRID_DIM: u32 = 2;
pub const MAX_GRID_DIM: u32 = 128;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridDimError {
    #[error("grid dimension {0} outside supported range {MIN_GRID_DIM}..={MAX_GRID_DIM}")]
    OutOfRange(u32),
}

/// Cells per side of the square grid. Construction enforces the [2, 128]
/// range, so every `GridDim` in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDim(u32);

impl GridDim {
    pub fn new(n: u32) -> Result<Self, GridDimError> {
        if (MIN_GRID_DIM..=MAX_GRID_DIM).contains(&n) {
            Ok(Self(n))
        } else {
            Err(GridDimError::OutOfRange(n))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn cell_count(self) -> usize {
        (self.0 * self.0) as usize
    }

    /// Cell edge length in normalized [0, 1] space.
    pub fn cell_size(self) -> f32 {
        1.0 / self.0 as f32
    }
}

impl Default for GridDim {
    /// Startup default of the settings overlay.
    fn default() -> Self {
        Self(10)
    }
}

/// Grid mesh representation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyMode {
    /// (n+1)² corner vertices shared between adjacent cells via an index
    /// buffer: 6 indices (2 triangles) per cell.
    SharedVertex,
    /// 6 unshared vertices per cell, no index buffer. A cell's state is
    /// duplicated across all 6 vertices.
    PerCell,
}

impl TopologyMode {
    pub fn vertex_count(self, dim: GridDim) -> usize {
        let n = dim.get() as usize;
        match self {
            Self::SharedVertex => (n + 1) * (n + 1),
            Self::PerCell => 6 * n * n,
        }
    }

    pub fn index_count(self, dim: GridDim) -> Option<usize> {
        match self {
            Self::SharedVertex => Some(6 * dim.cell_count()),
            Self::PerCell => None,
        }
    }

    /// State array length: one f32 per vertex in both modes.
    pub fn state_len(self, dim: GridDim) -> usize {
        self.vertex_count(dim)
    }
}

/// Convert 2D cell coordinates to linear cell index. Row-major, row 0 at
/// the visual top of the grid.
#[inline]
pub fn cell_index(x: u32, y: u32, dim: GridDim) -> usize {
    (y * dim.get() + x) as usize
}

/// Convert linear cell index back to 2D coordinates.
#[inline]
pub fn cell_coords(index: usize, dim: GridDim) -> (u32, u32) {
    let n = dim.get();
    let index = index as u32;
    (index % n, index / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_accepts_full_range() {
        assert!(GridDim::new(2).is_ok());
        assert!(GridDim::new(128).is_ok());
    }

    #[test]
    fn dim_rejects_out_of_range() {
        assert_eq!(GridDim::new(0), Err(GridDimError::OutOfRange(0)));
        assert_eq!(GridDim::new(1), Err(GridDimError::OutOfRange(1)));
        assert_eq!(GridDim::new(129), Err(GridDimError::OutOfRange(129)));
    }

    #[test]
    fn cell_index_roundtrip() {
        let dim = GridDim::new(16).unwrap();
        for &(x, y) in &[(0, 0), (1, 2), (15, 0), (0, 15), (15, 15)] {
            let idx = cell_index(x, y, dim);
            assert_eq!(cell_coords(idx, dim), (x, y), "roundtrip failed for ({x},{y})");
        }
    }

    #[test]
    fn shared_vertex_counts() {
        let dim = GridDim::new(2).unwrap();
        assert_eq!(TopologyMode::SharedVertex.vertex_count(dim), 9);
        assert_eq!(TopologyMode::SharedVertex.index_count(dim), Some(24));
        assert_eq!(TopologyMode::SharedVertex.state_len(dim), 9);
    }

    #[test]
    fn per_cell_counts() {
        let dim = GridDim::new(3).unwrap();
        assert_eq!(TopologyMode::PerCell.vertex_count(dim), 54);
        assert_eq!(TopologyMode::PerCell.index_count(dim), None);
        assert_eq!(TopologyMode::PerCell.state_len(dim), 54);
    }

    #[test]
    fn cell_size_is_reciprocal() {
        let dim = GridDim::new(128).unwrap();
        assert_eq!(dim.cell_size(), 1.0 / 128.0);
        assert_eq!(dim.cell_count(), 128 * 128);
    }
}
