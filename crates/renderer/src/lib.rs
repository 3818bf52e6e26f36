pub mod backend;
pub mod gpu;
pub mod pipeline;

pub use backend::RenderBackend;
pub use gpu::{init_gpu, GpuContext};

use log::warn;
use pipeline::GridPipelines;
use types::RenderMode;
use wgpu::util::DeviceExt;

// Background from the original visualizer.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.4,
    b: 0.4,
    a: 1.0,
};

/// wgpu implementation of `RenderBackend`: owns the GPU context, the grid
/// pipelines, and the vertex/state/index buffers. Geometry buffers are
/// recreated on rebuild (their size changes with the dimension); the state
/// buffer is rewritten in place on the per-tick refresh.
pub struct GridRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    pipelines: GridPipelines,
    vertex_buf: Option<wgpu::Buffer>,
    state_buf: Option<wgpu::Buffer>,
    index_buf: Option<wgpu::Buffer>,
    render_mode: RenderMode,
    wireframe_supported: bool,
}

impl GridRenderer {
    pub fn new(gpu: GpuContext) -> Self {
        let pipelines = GridPipelines::new(
            &gpu.device,
            gpu.surface_config.format,
            gpu.wireframe_supported,
        );
        if !gpu.wireframe_supported {
            warn!("POLYGON_MODE_LINE unavailable; wireframe mode renders filled");
        }
        Self {
            device: gpu.device,
            queue: gpu.queue,
            surface: gpu.surface,
            surface_config: gpu.surface_config,
            pipelines,
            vertex_buf: None,
            state_buf: None,
            index_buf: None,
            render_mode: RenderMode::Fill,
            wireframe_supported: gpu.wireframe_supported,
        }
    }

    /// Window host callback on framebuffer resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width.max(1);
        self.surface_config.height = height.max(1);
        self.surface.configure(&self.device, &self.surface_config);
    }

    fn create_f32_buffer(&self, label: &str, data: &[f32], usage: wgpu::BufferUsages) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(data),
                usage,
            })
    }
}

impl RenderBackend for GridRenderer {
    fn upload_vertices(&mut self, positions: &[f32]) {
        self.vertex_buf = Some(self.create_f32_buffer(
            "grid_positions",
            positions,
            wgpu::BufferUsages::VERTEX,
        ));
    }

    fn upload_indices(&mut self, indices: &[u32]) {
        self.index_buf = Some(self.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("grid_indices"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
    }

    fn upload_states(&mut self, states: &[f32]) {
        let byte_len = (states.len() * 4) as u64;
        match &self.state_buf {
            Some(buf) if buf.size() == byte_len => {
                self.queue.write_buffer(buf, 0, bytemuck::cast_slice(states));
            }
            _ => {
                self.state_buf = Some(self.create_f32_buffer(
                    "grid_states",
                    states,
                    wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                ));
            }
        }
    }

    fn set_render_mode(&mut self, mode: RenderMode) {
        if mode == RenderMode::Wireframe && !self.wireframe_supported && self.render_mode != mode {
            warn!("wireframe requested but unsupported; drawing filled");
        }
        self.render_mode = mode;
    }

    fn draw(&mut self, draw_count: u32, uses_indices: bool) {
        let (Some(vertex_buf), Some(state_buf)) = (&self.vertex_buf, &self.state_buf) else {
            warn!("draw before geometry upload; skipping frame");
            return;
        };

        // Don't panic on surface errors (teacher idiom): reconfigure on
        // Lost, skip the frame otherwise.
        let surface_texture = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost) => {
                self.surface.configure(&self.device, &self.surface_config);
                return;
            }
            Err(_) => return,
        };

        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("grid_frame_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("grid_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let pipeline = match (self.render_mode, &self.pipelines.wireframe) {
                (RenderMode::Wireframe, Some(wire)) => wire,
                _ => &self.pipelines.fill,
            };
            pass.set_pipeline(pipeline);
            pass.set_vertex_buffer(0, vertex_buf.slice(..));
            pass.set_vertex_buffer(1, state_buf.slice(..));
            if uses_indices {
                let Some(index_buf) = &self.index_buf else {
                    warn!("indexed draw requested without an index buffer");
                    return;
                };
                pass.set_index_buffer(index_buf.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..draw_count, 0, 0..1);
            } else {
                pass.draw(0..draw_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }
}
