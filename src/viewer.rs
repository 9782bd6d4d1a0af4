//! Standalone window that runs the idle choreography.
//!
//! ```no_run
//! # use lull::viewer::Viewer;
//! # use lull::options::Options;
//! Viewer::builder()
//!     .with_options(Options::default())
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::ChoreographyEngine,
    error::LullError,
    gpu::{RenderContext, SceneRenderer},
    input::{InputEvent, MouseButton},
    options::Options,
};

/// How often the measured frame rate is logged.
const FPS_LOG_INTERVAL: Duration = Duration::from_secs(5);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with the default options and title "Lull".
    fn new() -> Self {
        Self {
            options: Options::default(),
            title: "Lull".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window whose camera drifts into autorotate and scripted moves when
/// left alone.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`LullError::Viewer`] if the event loop fails and
    /// [`LullError::Gpu`] if no GPU context could be created.
    pub fn run(self) -> Result<(), LullError> {
        let event_loop =
            EventLoop::new().map_err(|e| LullError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            scene: None,
            options: Some(self.options),
            title: self.title,
            last_fps_log: Instant::now(),
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| LullError::Viewer(e.to_string()))?;
        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Engine plus the sink it draws into.
struct Scene {
    engine: ChoreographyEngine,
    renderer: SceneRenderer,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    scene: Option<Scene>,
    /// Taken when the scene is built on first resume.
    options: Option<Options>,
    title: String,
    last_fps_log: Instant,
    /// First fatal error, reported from [`Viewer::run`].
    error: Option<LullError>,
}

/// Compute the wgpu surface size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

#[allow(clippy::cast_precision_loss)]
fn aspect((width, height): (u32, u32)) -> f32 {
    width as f32 / height as f32
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: LullError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_window(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<Arc<Window>, LullError> {
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| LullError::Viewer(format!("window creation: {e}")))
    }

    fn forward(&mut self, event: InputEvent) {
        if let Some(scene) = &mut self.scene {
            scene.engine.handle_input(event, Instant::now());
        }
    }

    fn redraw(&mut self) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        let now = Instant::now();
        match scene.engine.frame(now, &mut scene.renderer) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                if let Some(w) = &self.window {
                    let (vp_w, vp_h) = viewport_size(w.inner_size());
                    scene.renderer.resize(vp_w, vp_h);
                    scene.engine.resize(vp_w, vp_h);
                }
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }

        if now.duration_since(self.last_fps_log) >= FPS_LOG_INTERVAL {
            log::debug!("{:.1} fps", scene.engine.frame_timing.fps());
            self.last_fps_log = now;
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(w) => w,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let context =
            match pollster::block_on(RenderContext::new(window.clone(), size))
            {
                Ok(c) => c,
                Err(e) => {
                    self.fail(event_loop, e.into());
                    return;
                }
            };

        let options = self.options.take().unwrap_or_default();
        let engine =
            ChoreographyEngine::new(options, aspect(size), Instant::now());
        self.scene = Some(Scene {
            engine,
            renderer: SceneRenderer::new(context),
        });

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and scene must be initialised.
        if self.window.is_none() || self.scene.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(scene) = &mut self.scene {
                    scene.renderer.resize(vp_w, vp_h);
                    scene.engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.forward(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.forward(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.forward(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    self.forward(InputEvent::KeyDown);
                }
            }

            WindowEvent::Touch(touch) => {
                if touch.phase == TouchPhase::Started {
                    self.forward(InputEvent::TouchStart);
                }
            }

            _ => (),
        }
    }
}
