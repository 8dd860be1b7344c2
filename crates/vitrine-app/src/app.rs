//! Window, surface and frame loop.

use std::rc::Rc;
use std::sync::Arc;

use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use vitrine_core::KeyHook;
#[cfg(not(target_arch = "wasm32"))]
use vitrine_core::{KeyHookRegistry, ESCAPE_KEY};
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::dpi::LogicalSize;
#[cfg(not(target_arch = "wasm32"))]
use winit::event::ElementState;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
#[cfg(not(target_arch = "wasm32"))]
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::page::LandingPage;
use crate::shortcuts::GestureRegistry;

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    page: LandingPage,
    background: vello::wgpu::Color,
}

impl AppState {
    /// Run the UI and present one frame.
    fn redraw(&mut self, render_cx: &RenderContext) {
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let page = &mut self.page;
        let egui_output = self.egui_ctx.run(egui_input, |ctx| page.show(ctx));

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match self.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };
        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface.config.width, self.surface.config.height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        let mut encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
            label: Some("egui encoder"),
        });
        self.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &egui_primitives,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Clear(self.background),
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu needs a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        // The web key hook cannot wake the loop, so keep polling while open
        if self.page.is_viewer_open() || self.egui_ctx.has_requested_repaint() {
            self.window.request_redraw();
        }
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
    /// Window waiting for async surface creation (WASM only)
    pending_window: Option<Arc<Window>>,
    /// Flag to indicate async init is in progress
    #[cfg(target_arch = "wasm32")]
    init_in_progress: std::cell::Cell<bool>,
    /// Escape listeners fed from winit key events
    #[cfg(not(target_arch = "wasm32"))]
    key_registry: KeyHookRegistry,
    /// First fatal error, reported when the loop exits
    error: Option<AppError>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            pending_window: None,
            #[cfg(target_arch = "wasm32")]
            init_in_progress: std::cell::Cell::new(false),
            #[cfg(not(target_arch = "wasm32"))]
            key_registry: KeyHookRegistry::new(),
            error: None,
        }
    }

    /// Run the application until the window closes.
    pub async fn run(config: AppConfig) -> AppResult<()> {
        let event_loop = EventLoop::new()?;
        Self::drive(event_loop, App::with_config(config))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn drive(event_loop: EventLoop<()>, mut app: App) -> AppResult<()> {
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn drive(event_loop: EventLoop<()>, app: App) -> AppResult<()> {
        use winit::platform::web::EventLoopExtWebSys;
        event_loop.spawn_app(app);
        Ok(())
    }

    /// Key hook handed to the viewer.
    fn key_hook(&self) -> Rc<dyn KeyHook> {
        #[cfg(not(target_arch = "wasm32"))]
        let hook: Rc<dyn KeyHook> = Rc::new(self.key_registry.clone());
        #[cfg(target_arch = "wasm32")]
        let hook: Rc<dyn KeyHook> = Rc::new(crate::web::WindowKeyHook);
        hook
    }

    /// Record a fatal error and stop the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn window_attributes(&self) -> AppResult<winit::window::WindowAttributes> {
        #[cfg(not(target_arch = "wasm32"))]
        let attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        // On WASM, draw into a canvas filling the viewport
        #[cfg(target_arch = "wasm32")]
        let attrs = {
            use winit::platform::web::WindowAttributesExtWebSys;

            let canvas = crate::web::attach_canvas()?;
            Window::default_attributes()
                .with_title(&self.config.title)
                .with_canvas(Some(canvas))
        };

        Ok(attrs)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn init_surface(&mut self, window: Arc<Window>, width: u32, height: u32) -> AppResult<()> {
        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);

        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| AppError::Surface(format!("{:?}", e)))?;

        // SAFETY: the surface holds an Arc of the window, which App keeps
        // alive for as long as the surface exists
        let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };
        self.finish_init(window, surface)
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) -> AppResult<()> {
        let render_cx = self
            .render_cx
            .as_ref()
            .ok_or_else(|| AppError::Surface("render context not initialized".to_string()))?;
        let device = &render_cx.devices[surface.dev_id].device;

        let egui_ctx = egui::Context::default();
        egui_extras::install_image_loaders(&egui_ctx);
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let page = LandingPage::new(&self.config, self.key_hook())?;
        let [r, g, b, a] = self.config.background_color().components;

        log::info!(
            "Vitrine initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );
        GestureRegistry::log_all();

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            egui_ctx,
            egui_state,
            egui_renderer,
            page,
            background: vello::wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
        });
        self.pending_window = None;

        window.request_redraw();
        Ok(())
    }

    /// Start async surface creation (WASM).
    #[cfg(target_arch = "wasm32")]
    fn begin_async_init(&mut self, window: Arc<Window>) {
        if self.init_in_progress.get() || self.error.is_some() {
            return;
        }
        self.init_in_progress.set(true);

        let (width, height) = crate::web::viewport_physical_size()
            .unwrap_or((self.config.width, self.config.height));

        // Raw pointer to self for the async callback
        let self_ptr = self as *mut Self;
        let window_clone = window.clone();

        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Creating surface asynchronously...");

            let mut render_cx = RenderContext::new();
            let result = render_cx
                .create_surface(window_clone.clone(), width, height, PresentMode::AutoVsync)
                .await;

            // SAFETY: WASM is single-threaded and the event loop keeps the
            // App alive for the lifetime of the page
            let app = unsafe { &mut *self_ptr };
            match result {
                Ok(surface) => {
                    let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };
                    app.render_cx = Some(render_cx);
                    if let Err(e) = app.finish_init(window_clone, surface) {
                        log::error!("{}", e);
                        app.error = Some(e);
                    }
                }
                Err(e) => {
                    log::error!("Failed to create surface: {:?}", e);
                    app.init_in_progress.set(false);
                }
            }
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.pending_window.is_some() || self.error.is_some() {
            return;
        }

        log::info!("Creating window...");

        let window = match self
            .window_attributes()
            .and_then(|attrs| event_loop.create_window(attrs).map_err(AppError::from))
        {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        // On native, block on surface creation
        #[cfg(not(target_arch = "wasm32"))]
        {
            let size = window.inner_size();
            let (width, height) = if size.width == 0 || size.height == 0 {
                (self.config.width, self.config.height)
            } else {
                (size.width, size.height)
            };
            log::info!("Surface size: {}x{}", width, height);

            if let Err(e) = self.init_surface(window, width, height) {
                self.fail(event_loop, e);
            }
        }

        // On WASM, initialize on the first window event
        #[cfg(target_arch = "wasm32")]
        {
            self.pending_window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        #[cfg(target_arch = "wasm32")]
        if self.state.is_none() {
            if let Some(window) = self.pending_window.clone() {
                self.begin_async_init(window.clone());
                // Keep the event loop running until the surface exists
                window.request_redraw();
            }
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            #[cfg(not(target_arch = "wasm32"))]
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                    && self.key_registry.dispatch_key(ESCAPE_KEY)
                {
                    state.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                state.redraw(render_cx);
            }

            _ => {}
        }
    }
}
