use crate::{GridDim, TopologyMode};

pub const MAX_FPS: u32 = 60;

/// Fill vs wireframe rasterization, toggled by the window host's key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Fill,
    Wireframe,
}

/// Overlay-controlled parameters, owned by the top-level `App` instead of
/// process-wide statics. The overlay reads current values from here; writes
/// go through the command queue so they land at a fixed point in the frame.
#[derive(Debug, Clone)]
pub struct UiParams {
    pub paused: bool,
    /// Simulation ticks per second, 0..=60. 0 means "never tick".
    pub fps: u32,
    pub grid_dim: GridDim,
    pub topology_mode: TopologyMode,
    pub render_mode: RenderMode,
}

impl Default for UiParams {
    fn default() -> Self {
        Self {
            paused: true,
            fps: 1,
            grid_dim: GridDim::default(),
            topology_mode: TopologyMode::PerCell,
            render_mode: RenderMode::Fill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_overlay_startup() {
        let p = UiParams::default();
        assert!(p.paused);
        assert_eq!(p.fps, 1);
        assert_eq!(p.grid_dim.get(), 10);
        assert_eq!(p.render_mode, RenderMode::Fill);
    }
}
