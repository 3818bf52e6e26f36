use types::RenderMode;

/// The narrow surface the core drives. Uploads are blocking and happen at
/// most twice per frame: the full geometry after a rebuild, the state
/// sub-array after a due tick. A rebuild upload, when present, always
/// precedes the state refresh, and both precede `draw`.
pub trait RenderBackend {
    fn upload_vertices(&mut self, positions: &[f32]);

    /// Only called for indexed (shared-vertex) topologies.
    fn upload_indices(&mut self, indices: &[u32]);

    /// Partial refresh: one f32 per vertex.
    fn upload_states(&mut self, states: &[f32]);

    fn set_render_mode(&mut self, mode: RenderMode);

    /// `draw_count` is the index count for indexed meshes, the vertex count
    /// otherwise.
    fn draw(&mut self, draw_count: u32, uses_indices: bool);
}
