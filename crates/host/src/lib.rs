pub mod input;

use anyhow::{Context, Result};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::{GridRenderer, RenderBackend};
use sim_core::{GeometryAssembler, RandomizeRule, StepRule, StepScheduler};
use types::{Command, GridDim, UiParams, MAX_FPS};

/// Top-level application object. Owns the UI parameter struct, the pending
/// command queue, the scheduler, the assembler, and the RNG — no
/// process-wide mutable state. The window host drives it with one `frame`
/// call per rendered frame, passing its monotonic clock in seconds.
pub struct App {
    pub params: UiParams,
    assembler: GeometryAssembler,
    scheduler: StepScheduler,
    rule: Box<dyn StepRule>,
    pending_commands: Vec<Command>,
    rng: StdRng,
    geometry_dirty: bool,
    states_dirty: bool,
    close_requested: bool,
}

impl App {
    pub fn new(params: UiParams, seed: u64, now: f64) -> Self {
        let assembler = GeometryAssembler::new(params.grid_dim, params.topology_mode);
        let mut scheduler = StepScheduler::new(params.fps, now);
        scheduler.set_paused(params.paused, now);
        Self {
            params,
            assembler,
            scheduler,
            rule: Box::new(RandomizeRule),
            pending_commands: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            geometry_dirty: true,
            states_dirty: false,
            close_requested: false,
        }
    }

    /// Swap in a different per-tick update rule.
    pub fn set_step_rule(&mut self, rule: Box<dyn StepRule>) {
        self.rule = rule;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn assembler(&self) -> &GeometryAssembler {
        &self.assembler
    }

    /// One frame: drain commands, then in fixed order — full geometry
    /// re-upload if the topology changed, tick-driven state refresh if due,
    /// draw. All mutation happens here, on the caller's thread, between
    /// frame begin and draw.
    pub fn frame<B: RenderBackend>(&mut self, now: f64, backend: &mut B) {
        let commands: Vec<Command> = self.pending_commands.drain(..).collect();
        for cmd in commands {
            self.apply(cmd, now);
        }

        if self.geometry_dirty {
            let mesh = self.assembler.mesh();
            backend.upload_vertices(&mesh.positions);
            if let Some(indices) = &mesh.indices {
                backend.upload_indices(indices);
            }
            backend.upload_states(self.assembler.states());
            self.geometry_dirty = false;
            self.states_dirty = false;
        }

        if self.scheduler.tick_due(now) {
            let (dim, mode) = (self.assembler.dim(), self.assembler.mode());
            self.rule
                .step(self.assembler.state_buffer_mut(), dim, mode, &mut self.rng);
            self.states_dirty = true;
        }

        if self.states_dirty {
            backend.upload_states(self.assembler.states());
            self.states_dirty = false;
        }

        backend.set_render_mode(self.params.render_mode);
        let mesh = self.assembler.mesh();
        backend.draw(mesh.draw_count(), mesh.indices.is_some());
    }

    fn apply(&mut self, cmd: Command, now: f64) {
        match cmd {
            Command::SetPaused(paused) => {
                self.params.paused = paused;
                self.scheduler.set_paused(paused, now);
            }
            Command::SetFps(fps) => {
                self.params.fps = fps.min(MAX_FPS);
                self.scheduler.set_fps(fps);
            }
            Command::SetGridDim(n) => match GridDim::new(n) {
                Ok(dim) if dim != self.params.grid_dim => {
                    self.params.grid_dim = dim;
                    self.assembler.rebuild(dim, self.params.topology_mode);
                    self.geometry_dirty = true;
                }
                Ok(_) => {}
                // Rejected: keep the prior topology.
                Err(e) => warn!("ignoring grid dimension request: {e}"),
            },
            Command::SetTopologyMode(mode) => {
                if mode != self.params.topology_mode {
                    self.params.topology_mode = mode;
                    self.assembler.rebuild(self.params.grid_dim, mode);
                    self.geometry_dirty = true;
                }
            }
            Command::SetRenderMode(mode) => {
                self.params.render_mode = mode;
            }
            Command::ToggleCell { x, y } => {
                let n = self.params.grid_dim.get();
                if x < n && y < n {
                    self.assembler.toggle_cell(x, y);
                    self.states_dirty = true;
                } else {
                    warn!("toggle outside grid: ({x},{y}) with dimension {n}");
                }
            }
            Command::Reset => {
                // Reset pauses and clears every cell to dead.
                self.params.paused = true;
                self.scheduler.set_paused(true, now);
                self.assembler.clear_states();
                self.states_dirty = true;
            }
            Command::Close => {
                self.close_requested = true;
            }
        }
    }
}

/// Full startup: GPU bring-up, grid pipelines, and the application object.
/// GPU or pipeline failure aborts initialization instead of limping on with
/// broken render state.
pub async fn init(
    target: impl Into<wgpu::SurfaceTarget<'static>>,
    width: u32,
    height: u32,
    params: UiParams,
    seed: u64,
    now: f64,
) -> Result<(App, GridRenderer)> {
    let gpu = renderer::init_gpu(target, width, height)
        .await
        .map_err(anyhow::Error::msg)
        .context("GPU context initialization failed")?;
    let grid_renderer = GridRenderer::new(gpu);
    let app = App::new(params, seed, now);
    info!(
        "initialized: {0}x{0} grid, {1:?}, {2} fps",
        app.params.grid_dim.get(),
        app.params.topology_mode,
        app.params.fps
    );
    Ok((app, grid_renderer))
}
