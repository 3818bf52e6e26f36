use wgpu;

const GRID_WGSL: &str = include_str!("../../../shaders/grid.wgsl");

// Two vertex buffers: positions at location 0, cell states at location 1.
const VERTEX_LAYOUTS: [wgpu::VertexBufferLayout<'static>; 2] = [
    wgpu::VertexBufferLayout {
        array_stride: 8, // 2 * f32
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: 0,
        }],
    },
    wgpu::VertexBufferLayout {
        array_stride: 4, // 1 * f32
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32,
            offset: 0,
            shader_location: 1,
        }],
    },
];

pub struct GridPipelines {
    pub fill: wgpu::RenderPipeline,
    /// Present only when the device has POLYGON_MODE_LINE.
    pub wireframe: Option<wgpu::RenderPipeline>,
}

impl GridPipelines {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        wireframe_supported: bool,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("grid"),
            source: wgpu::ShaderSource::Wgsl(GRID_WGSL.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("grid_pl"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let fill = build_pipeline(
            device,
            &shader,
            &pipeline_layout,
            surface_format,
            wgpu::PolygonMode::Fill,
            "grid_fill_pipeline",
        );

        let wireframe = wireframe_supported.then(|| {
            build_pipeline(
                device,
                &shader,
                &pipeline_layout,
                surface_format,
                wgpu::PolygonMode::Line,
                "grid_wireframe_pipeline",
            )
        });

        Self { fill, wireframe }
    }
}

fn build_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    surface_format: wgpu::TextureFormat,
    polygon_mode: wgpu::PolygonMode,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &VERTEX_LAYOUTS,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            polygon_mode,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
