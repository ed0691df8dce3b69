mod bindings;
mod context;

use anyhow::{Context as _, Result, anyhow};
use clap::Parser;
use context::AppContext;
use cottage_assets::TextureTable;
use cottage_common::{AppConfig, FrameClock};
use cottage_render_wgpu::WgpuRenderer;
use cottage_scene::Scene;
use egui::Context as EguiContext;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "cottage-desktop", about = "Walk around a textured cottage")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file; defaults are used for anything it leaves out
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the scene textures (overrides the config)
    #[arg(long)]
    texture_dir: Option<PathBuf>,
}

/// Window, surface and GPU resources. Created once the event loop resumes.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Gpu {
    fn new(
        event_loop: &ActiveEventLoop,
        config: &AppConfig,
        ctx: &AppContext,
        textures: &TextureTable,
        egui_ctx: &EguiContext,
    ) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow!("no compatible GPU adapter"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("cottage_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("failed to create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let renderer = WgpuRenderer::new(
            &device,
            &queue,
            surface_format,
            (surface_config.width, surface_config.height),
            &ctx.scene,
            textures,
        )?;

        // Mouse look needs the pointer captured; not every platform
        // supports both grab modes.
        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        {
            tracing::warn!("could not capture the cursor: {e}");
        }
        window.set_cursor_visible(false);

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        let info = adapter.get_info();
        tracing::info!(
            "GPU initialized: {} ({} backend)",
            info.name,
            info.backend.to_str()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config: surface_config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    /// Draw the scene and the HUD overlay, then present.
    fn redraw(&mut self, ctx: &AppContext, egui_ctx: &EguiContext) {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let plan = ctx.frame_plan();
        self.renderer
            .render(&self.device, &self.queue, &view, &plan);

        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = egui_ctx.run(raw_input, |ui_ctx| ctx.draw_hud(ui_ctx));
        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        output.present();
    }
}

struct GpuApp {
    config: AppConfig,
    ctx: AppContext,
    textures: TextureTable,
    clock: FrameClock,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
    /// Fatal startup error, returned from `main` after the loop exits.
    error: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(config: AppConfig, scene: Scene, textures: TextureTable) -> Self {
        Self {
            ctx: AppContext::new(&config, scene),
            config,
            textures,
            clock: FrameClock::new(),
            gpu: None,
            egui_ctx: EguiContext::default(),
            error: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match Gpu::new(
            event_loop,
            &self.config,
            &self.ctx,
            &self.textures,
            &self.egui_ctx,
        ) {
            Ok(gpu) => {
                let size = gpu.window.inner_size();
                self.ctx.resize(size.width, size.height);
                self.gpu = Some(gpu);
                self.clock = FrameClock::new();
            }
            Err(e) => {
                tracing::error!("startup failed: {e:#}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
        if response.consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                gpu.resize(new_size.width, new_size.height);
                self.ctx.resize(new_size.width, new_size.height);
            }
            WindowEvent::Focused(focused) => {
                self.ctx.focus_changed(focused);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(action) = bindings::action_for(key) {
                    self.ctx.key(action, state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput { button, state, .. } => {
                tracing::info!("mouse {button:?} {state:?}");
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.ctx.scroll_lines(y),
                MouseScrollDelta::PixelDelta(pos) => self.ctx.scroll_pixels(pos.y),
            },
            WindowEvent::RedrawRequested => {
                let dt = self.clock.tick();
                self.ctx.advance(dt);
                if self.ctx.quit_requested() {
                    event_loop.exit();
                    return;
                }
                gpu.redraw(&self.ctx, &self.egui_ctx);
                gpu.window.request_redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.gpu.is_some() {
                self.ctx.pointer_motion(delta.0, delta.1);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("cottage-desktop starting");

    let mut config = AppConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(dir) = cli.texture_dir {
        config.texture_dir = dir;
    }

    let scene = Scene::house();
    scene.validate().context("scene table is inconsistent")?;

    let textures = TextureTable::load_all(
        &config.texture_dir,
        scene.textures().iter().map(|t| (t.name, t.file)),
    )
    .context("failed to load textures")?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config, scene, textures);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
