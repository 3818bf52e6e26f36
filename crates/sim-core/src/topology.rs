use types::{cell_index, GridDim, TopologyMode};

/// Flat mesh arrays laid out for direct upload: 2 f32 per vertex position,
/// u32 indices only in shared-vertex mode.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMesh {
    pub positions: Vec<f32>,
    pub indices: Option<Vec<u32>>,
    pub vertex_count: usize,
}

impl GridMesh {
    /// Element count for the draw call: index count when indexed, vertex
    /// count otherwise.
    pub fn draw_count(&self) -> u32 {
        match &self.indices {
            Some(indices) => indices.len() as u32,
            None => self.vertex_count as u32,
        }
    }
}

/// Map a corner coordinate in [0, n] to NDC x.
#[inline]
fn corner_x(i: u32, n: u32) -> f32 {
    (i as f32 / n as f32) * 2.0 - 1.0
}

/// Map a corner coordinate in [0, n] to NDC y. Flipped so row 0 is the
/// visual top of the grid.
#[inline]
fn corner_y(i: u32, n: u32) -> f32 {
    -((i as f32 / n as f32) * 2.0 - 1.0)
}

/// Generate the grid mesh for `dim` cells per side. Pure and deterministic;
/// cells tile [-1,1]² exactly. Dimensions below 2 are unrepresentable by
/// construction of `GridDim`.
pub fn generate(dim: GridDim, mode: TopologyMode) -> GridMesh {
    match mode {
        TopologyMode::SharedVertex => generate_shared(dim),
        TopologyMode::PerCell => generate_per_cell(dim),
    }
}

fn generate_shared(dim: GridDim) -> GridMesh {
    let n = dim.get();
    let vertex_count = TopologyMode::SharedVertex.vertex_count(dim);

    let mut positions = Vec::with_capacity(vertex_count * 2);
    for y in 0..=n {
        for x in 0..=n {
            positions.push(corner_x(x, n));
            positions.push(corner_y(y, n));
        }
    }

    let mut indices = Vec::with_capacity(6 * dim.cell_count());
    for y in 0..n {
        for x in 0..n {
            let top_left = y * (n + 1) + x;
            let top_right = top_left + 1;
            let bottom_left = (y + 1) * (n + 1) + x;
            let bottom_right = bottom_left + 1;
            indices.extend_from_slice(&[top_left, bottom_left, top_right]);
            indices.extend_from_slice(&[bottom_left, bottom_right, top_right]);
        }
    }

    GridMesh {
        positions,
        indices: Some(indices),
        vertex_count,
    }
}

fn generate_per_cell(dim: GridDim) -> GridMesh {
    let n = dim.get();
    let vertex_count = TopologyMode::PerCell.vertex_count(dim);

    let mut positions = Vec::with_capacity(vertex_count * 2);
    for y in 0..n {
        for x in 0..n {
            let x1 = corner_x(x, n);
            let x2 = corner_x(x + 1, n);
            let y1 = corner_y(y, n);
            let y2 = corner_y(y + 1, n);
            #[rustfmt::skip]
            positions.extend_from_slice(&[
                x1, y1,  x2, y1,  x1, y2, // first triangle
                x2, y1,  x2, y2,  x1, y2, // second triangle
            ]);
        }
    }

    GridMesh {
        positions,
        indices: None,
        vertex_count,
    }
}

/// Vertex slots carrying cell (x, y)'s state: its 4 shared corners, or its
/// 6 duplicated vertices. Writing the same value to every slot keeps the
/// quad uniformly shaded in both modes.
pub fn cell_vertex_slots(dim: GridDim, mode: TopologyMode, x: u32, y: u32) -> Vec<usize> {
    let n = dim.get();
    debug_assert!(x < n && y < n);
    match mode {
        TopologyMode::SharedVertex => {
            let top_left = (y * (n + 1) + x) as usize;
            let bottom_left = ((y + 1) * (n + 1) + x) as usize;
            vec![top_left, top_left + 1, bottom_left, bottom_left + 1]
        }
        TopologyMode::PerCell => {
            let base = cell_index(x, y, dim) * 6;
            (base..base + 6).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim(n: u32) -> GridDim {
        GridDim::new(n).unwrap()
    }

    #[test]
    fn shared_n2_scenario() {
        // 9 vertices, 24 indices, 4 cells.
        let mesh = generate(dim(2), TopologyMode::SharedVertex);
        assert_eq!(mesh.vertex_count, 9);
        assert_eq!(mesh.positions.len(), 18);
        assert_eq!(mesh.indices.as_ref().unwrap().len(), 24);
        assert_eq!(mesh.draw_count(), 24);
    }

    #[test]
    fn per_cell_n3_scenario() {
        // 9 cells × 6 vertices, no indices.
        let mesh = generate(dim(3), TopologyMode::PerCell);
        assert_eq!(mesh.vertex_count, 54);
        assert_eq!(mesh.positions.len(), 108);
        assert!(mesh.indices.is_none());
        assert_eq!(mesh.draw_count(), 54);
    }

    #[test]
    fn counts_match_formulas_across_range() {
        for n in [2u32, 3, 7, 64, 128] {
            let d = dim(n);
            let shared = generate(d, TopologyMode::SharedVertex);
            assert_eq!(shared.vertex_count, ((n + 1) * (n + 1)) as usize);
            assert_eq!(
                shared.indices.as_ref().unwrap().len(),
                (6 * n * n) as usize
            );
            let per_cell = generate(d, TopologyMode::PerCell);
            assert_eq!(per_cell.vertex_count, (6 * n * n) as usize);
        }
    }

    #[test]
    fn shared_winding_first_cell() {
        // Cell (0,0) of a 2-grid: topLeft=0, topRight=1, bottomLeft=3,
        // bottomRight=4, wound (tl, bl, tr) then (bl, br, tr).
        let mesh = generate(dim(2), TopologyMode::SharedVertex);
        let indices = mesh.indices.unwrap();
        assert_eq!(&indices[..6], &[0, 3, 1, 3, 4, 1]);
    }

    #[test]
    fn positions_stay_in_ndc() {
        for mode in [TopologyMode::SharedVertex, TopologyMode::PerCell] {
            let mesh = generate(dim(5), mode);
            for p in &mesh.positions {
                assert!((-1.0..=1.0).contains(p), "{p} escapes NDC");
            }
        }
    }

    #[test]
    fn grid_tiles_ndc_exactly() {
        // Shared mode: corner (0,0) is top-left (-1, 1), corner (n,n) is
        // bottom-right (1, -1).
        let mesh = generate(dim(4), TopologyMode::SharedVertex);
        assert_eq!(&mesh.positions[..2], &[-1.0, 1.0]);
        let last = mesh.positions.len() - 2;
        assert_eq!(&mesh.positions[last..], &[1.0, -1.0]);
    }

    #[test]
    fn adjacent_per_cell_quads_share_edges() {
        // Right edge of cell (0,0) coincides with left edge of cell (1,0):
        // no gaps or overlaps.
        let d = dim(4);
        let mesh = generate(d, TopologyMode::PerCell);
        let right_x_of_first = mesh.positions[2]; // x2 of cell (0,0)
        let left_x_of_second = mesh.positions[12]; // x1 of cell (1,0)
        assert_eq!(right_x_of_first, left_x_of_second);
    }

    #[test]
    fn shared_cell_slots_are_corners() {
        let d = dim(2);
        assert_eq!(
            cell_vertex_slots(d, TopologyMode::SharedVertex, 0, 0),
            vec![0, 1, 3, 4]
        );
        assert_eq!(
            cell_vertex_slots(d, TopologyMode::SharedVertex, 1, 1),
            vec![4, 5, 7, 8]
        );
    }

    #[test]
    fn per_cell_slots_are_six_consecutive() {
        let d = dim(3);
        assert_eq!(
            cell_vertex_slots(d, TopologyMode::PerCell, 1, 2),
            vec![42, 43, 44, 45, 46, 47]
        );
    }
}
