use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::assets::TextureSlot;
use crate::coords::Viewport;
use crate::core::{FrameScheduler, Scene, TextureSource};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::platform;
use crate::input::{Key, KeyPhase};
use crate::render::{QuadRenderer, RenderCtx, RenderTarget};
use crate::time::FrameClock;

/// Window/runtime configuration.
///
/// Sizes are logical pixels. Plain floats rather than winit types so
/// frontends can fill this without a winit dependency of their own.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "quadrille".to_string(),
            width: 900.0,
            height: 700.0,
        }
    }
}

/// Entry point for the runtime.
///
/// Blocks on the event loop until the window closes or an unbound Escape
/// press exits. One tick runs per `RedrawRequested`; `about_to_wait` re-arms
/// the redraw, so ticks arrive at display-refresh cadence with no overlap.
pub struct Runtime;

impl Runtime {
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit, scene: Scene) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, scene);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,

    scheduler: FrameScheduler,
    clock: FrameClock,
    renderer: QuadRenderer,
    texture_source: TextureSource,
    clear_color: wgpu::Color,

    entry: Option<WindowEntry>,
    texture: Option<TextureSlot>,
    exit_requested: bool,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, scene: Scene) -> Self {
        let [r, g, b, a] = scene.clear_color;
        Self {
            config,
            gpu_init,
            scheduler: FrameScheduler::new(scene.bindings, scene.initial_transform),
            clock: FrameClock::new(),
            renderer: QuadRenderer::new(),
            texture_source: scene.texture,
            clear_color: wgpu::Color { r, g, b, a },
            entry: None,
            texture: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Default handling for presses no binding consumed: Escape closes the
    /// demo, everything else falls through untouched.
    fn default_key_action(&mut self, key: Key) {
        if key == Key::Escape {
            log::debug!("unbound Escape; exiting");
            self.request_exit();
        }
    }

    fn redraw(&mut self) {
        let Some(entry) = self.entry.as_mut() else { return };
        let Some(texture) = self.texture.as_mut() else { return };

        // Split borrows so the ouroboros closure doesn't capture `self`.
        let scheduler = &mut self.scheduler;
        let renderer = &mut self.renderer;
        let clock = &mut self.clock;
        let clear_color = self.clear_color;
        let mut fatal = false;

        entry.with_mut(|fields| {
            let ft = clock.tick();
            log::trace!("tick {} dt={:.4}s", ft.frame_index, ft.dt);

            texture.poll(fields.gpu.device(), fields.gpu.queue());
            let snapshot = scheduler.tick();

            let mut frame = match fields.gpu.begin_frame() {
                Ok(frame) => frame,
                Err(err) => {
                    if fields.gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                        log::error!("surface out of memory; exiting");
                        fatal = true;
                    }
                    return;
                }
            };

            let size = fields.gpu.size();
            let ctx = RenderCtx::new(
                fields.gpu.device(),
                fields.gpu.queue(),
                fields.gpu.surface_format(),
                Viewport::new(size.width as f32, size.height as f32),
            );

            // RenderTarget borrows frame.encoder; dropped before submit()
            // takes frame.
            {
                let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
                renderer.render(&ctx, &mut target, snapshot, texture, clear_color);
            }

            fields.window.pre_present_notify();
            fields.gpu.submit(frame);
        });

        if fatal {
            self.request_exit();
            return;
        }

        if let Some(fps) = self.clock.take_fps_sample() {
            let title = format!("{} · {:.0} fps", self.config.title, fps);
            if let Some(entry) = self.entry.as_ref() {
                entry.with_window(|w| w.set_title(&title));
            }
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(err) => {
                log::error!("failed to create window: {err}");
                self.request_exit();
                event_loop.exit();
                return;
            }
        };

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryBuilder {
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).expect("GPU initialization failed")
            },
        }
        .build();

        let texture = entry.with_gpu(|gpu| match self.texture_source.path.as_deref() {
            Some(path) => TextureSlot::load(
                gpu.device(),
                gpu.queue(),
                path,
                self.texture_source.placeholder,
            ),
            None => TextureSlot::placeholder(
                gpu.device(),
                gpu.queue(),
                self.texture_source.placeholder,
            ),
        });

        self.texture = Some(texture);
        self.entry = Some(entry);

        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Re-arm: one redraw per loop turn gives continuous ticking at
        // display-refresh cadence.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::KeyboardInput { .. } => {
                if let Some(key_event) = platform::winit::translate_key_event(&event) {
                    let consumed = self.scheduler.key_event(key_event);

                    if key_event.phase == KeyPhase::Pressed && !key_event.repeat {
                        log::trace!("key {:?} consumed={consumed}", key_event.key);
                    }
                    if key_event.phase == KeyPhase::Pressed && !consumed {
                        self.default_key_action(key_event.key);
                    }
                }
            }

            WindowEvent::Focused(false) => {
                // Releases can be swallowed while unfocused; clearing keeps
                // keys from sticking down across a refocus.
                self.scheduler.focus_lost();
            }

            WindowEvent::CloseRequested => {
                self.request_exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
