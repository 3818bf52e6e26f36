use crate::RenderMode;

/// Overlay and window-host commands. Queued by the embedder, drained by the
/// host at the start of each frame so all mutation happens between frame
/// begin and draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetPaused(bool),
    /// Tick rate in Hz, clamped to 0..=60 when applied.
    SetFps(u32),
    /// Raw slider value; validated against [2, 128] when applied. A rejected
    /// value keeps the prior topology.
    SetGridDim(u32),
    SetTopologyMode(crate::TopologyMode),
    SetRenderMode(RenderMode),
    /// Flip one cell between dead and alive.
    ToggleCell { x: u32, y: u32 },
    /// Pause and clear every cell to dead.
    Reset,
    Close,
}
