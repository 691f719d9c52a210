// src/app.rs

use std::sync::Arc;

use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

use crate::config::DemoConfig;
use crate::demo_scene::Demo;
use crate::error::InitError;
use crate::logging;
use crate::rendering_lib::{RenderContext, Renderer, ShaderProgram, ShaderSources, WgpuUploader};

pub struct DemoApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    renderer: Renderer,
    clear_color: wgpu::Color,
}

impl DemoApp {
    pub async fn new(
        window: Arc<Window>,
        demo: Demo,
        settings: &DemoConfig,
    ) -> Result<Self, InitError> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: settings.gpu.backends,
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: settings.gpu.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(InitError::NoAdapter(settings.gpu.backends))?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?}, {:?})", info.name, info.backend, info.device_type);
        log::info!("vendor: {:#06x}, driver: {} {}", info.vendor, info.driver, info.driver_info);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Demo Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await?;
        device.on_uncaptured_error(Box::new(|error| log::error!("uncaptured GPU error: {error}")));

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb() == settings.gpu.prefer_srgb)
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(InitError::IncompatibleSurface)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: settings.gpu.present_mode,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::debug!("surface configured: {:?} {}x{}", config.format, config.width, config.height);

        let sources = ShaderSources::load(&settings.shaders)?;
        let program = ShaderProgram::compile(&device, &sources, config.format).await?;

        let shapes = demo.shapes()?;
        let context = RenderContext::from_shapes(&mut WgpuUploader::new(&device), &shapes)?;
        log::info!("{demo:?}: {} shapes uploaded", context.len());

        Ok(Self {
            surface, device, queue, config, size,
            renderer: Renderer::new(program, context),
            clear_color: settings.clear_color,
        })
    }

    pub fn get_size(&self) -> PhysicalSize<u32> { self.size }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        self.renderer.render_frame(&mut encoder, &view, self.clear_color);

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();
        Ok(())
    }
}

/// Opens the window for `demo` and redraws until it is closed.
pub async fn run(demo: Demo) -> Result<(), InitError> {
    let settings = DemoConfig::from_env(demo);

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(settings.window.title.as_str())
            .with_inner_size(LogicalSize::new(settings.window.width, settings.window.height))
            .build(&event_loop)?,
    );

    let mut app_state = DemoApp::new(window.clone(), demo, &settings).await?;

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    target.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    app_state.resize(*physical_size);
                }
                WindowEvent::RedrawRequested => { /* In AboutToWait */ }
                _ => {}
            },
            Event::AboutToWait => {
                match app_state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app_state.resize(app_state.get_size());
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        target.exit();
                    }
                    Err(e) => log::warn!("surface error: {e:?}"),
                }

                if !target.exiting() {
                    window.request_redraw();
                }
            }
            Event::LoopExiting => {
                log::info!("window closed, releasing GPU resources");
            }
            _ => {}
        }
    })?;
    Ok(())
}

/// Entry point shared by the demo binaries. Startup failures exit with −1.
pub async fn launch(demo: Demo) {
    logging::init_logging();
    if let Err(error) = run(demo).await {
        log::error!("{error}");
        std::process::exit(-1);
    }
}
