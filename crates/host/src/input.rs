use types::{Command, RenderMode, TopologyMode};

use crate::App;

/// Overlay and window-host entry points. Everything is queued and applied
/// at the start of the next frame, never mid-mutation.
impl App {
    pub fn queue_command(&mut self, cmd: Command) {
        self.pending_commands.push(cmd);
    }

    /// Play/Pause toggle of the settings overlay.
    pub fn set_paused(&mut self, paused: bool) {
        self.queue_command(Command::SetPaused(paused));
    }

    /// FPS slider, 0..=60.
    pub fn set_fps(&mut self, fps: u32) {
        self.queue_command(Command::SetFps(fps));
    }

    /// Grid-dimension slider "edited" transition. Out-of-range values are
    /// rejected when applied.
    pub fn set_grid_dim(&mut self, n: u32) {
        self.queue_command(Command::SetGridDim(n));
    }

    pub fn set_topology_mode(&mut self, mode: TopologyMode) {
        self.queue_command(Command::SetTopologyMode(mode));
    }

    pub fn toggle_cell(&mut self, x: u32, y: u32) {
        self.queue_command(Command::ToggleCell { x, y });
    }

    /// Reset button: pause and clear the grid.
    pub fn reset(&mut self) {
        self.queue_command(Command::Reset);
    }

    pub fn request_close(&mut self) {
        self.queue_command(Command::Close);
    }

    /// Key bindings of the original window host: 1 = wireframe, 2 = fill,
    /// Escape = quit.
    pub fn on_key_down(&mut self, key: &str) {
        match key {
            "1" => self.queue_command(Command::SetRenderMode(RenderMode::Wireframe)),
            "2" => self.queue_command(Command::SetRenderMode(RenderMode::Fill)),
            "Escape" => self.request_close(),
            _ => {}
        }
    }
}
