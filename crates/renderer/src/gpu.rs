use log::info;
use wgpu;

pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub wireframe_supported: bool,
}

/// Bring up the GPU for a window surface provided by the embedding window
/// host. Adapter, device, or surface failure is fatal here; the caller
/// aborts initialization instead of rendering with broken state.
pub async fn init_gpu(
    target: impl Into<wgpu::SurfaceTarget<'static>>,
    width: u32,
    height: u32,
) -> Result<GpuContext, String> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let surface = instance
        .create_surface(target)
        .map_err(|e| format!("Failed to create surface: {e}"))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .map_err(|e| format!("No suitable GPU adapter: {e}"))?;

    let info = adapter.get_info();
    info!(
        "GPU adapter: {} ({:?}), backend: {:?}",
        info.name, info.device_type, info.backend
    );

    // Wireframe rasterization needs an optional feature; fall back to fill
    // when the adapter lacks it.
    let wireframe_supported = adapter
        .features()
        .contains(wgpu::Features::POLYGON_MODE_LINE);
    let required_features = if wireframe_supported {
        wgpu::Features::POLYGON_MODE_LINE
    } else {
        wgpu::Features::empty()
    };

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("grid_device"),
            required_features,
            required_limits: wgpu::Limits::default(),
            experimental_features: wgpu::ExperimentalFeatures::default(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await
        .map_err(|e| format!("Failed to create device: {e}"))?;

    let surface_caps = surface.get_capabilities(&adapter);
    let format = surface_caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .copied()
        .unwrap_or(surface_caps.formats[0]);

    let surface_config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: wgpu::CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &surface_config);

    info!("Surface configured: {width}x{height}, format: {format:?}");

    Ok(GpuContext {
        device,
        queue,
        surface,
        surface_config,
        wireframe_supported,
    })
}
