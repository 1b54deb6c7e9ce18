use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::config::WindowConfig;
use crate::error::Error;
use crate::renderer::{Renderer, Surface};

/// What the loop does in response to a window event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    Resize(u32, u32),
    Redraw,
    Ignore,
}

pub fn classify(event: &WindowEvent) -> Action {
    match event {
        WindowEvent::CloseRequested => Action::Exit,
        WindowEvent::Resized(size) => Action::Resize(size.width, size.height),
        WindowEvent::RedrawRequested => Action::Redraw,
        _ => Action::Ignore,
    }
}

// Renderer is declared first so GL objects go before the context they live in.
struct Graphics {
    renderer: Renderer,
    surface: Surface,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, Error> {
        let surface = Surface::new(event_loop, config)?;
        let renderer = Renderer::new(surface.gl.clone())?;
        Ok(Graphics { renderer, surface })
    }

    fn draw(&self) -> Result<(), Error> {
        self.renderer.render();
        self.surface.swap_buffers()?;
        self.surface.request_redraw();
        Ok(())
    }
}

pub struct App {
    config: WindowConfig,
    graphics: Option<Graphics>,
    error: Option<Error>,
}

impl App {
    pub fn new(config: WindowConfig) -> Self {
        App {
            config,
            graphics: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        self.graphics = None;
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() || self.error.is_some() {
            return;
        }

        log::info!("creating window \"{}\"", self.config.title);
        match Graphics::new(event_loop, &self.config) {
            Ok(graphics) => self.graphics = Some(graphics),
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let graphics = match &self.graphics {
            Some(graphics) => graphics,
            None => return,
        };

        match classify(&event) {
            Action::Exit => {
                log::info!("close requested");
                event_loop.exit();
            }
            Action::Resize(width, height) => {
                log::debug!("resized to {}x{}", width, height);
                graphics.surface.resize(width, height);
                graphics.renderer.resize(width, height);
            }
            Action::Redraw => {
                if let Err(err) = graphics.draw() {
                    self.fail(event_loop, err);
                }
            }
            Action::Ignore => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.surface.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // GPU objects, then context and window, while the event loop is still alive.
        self.graphics = None;
    }
}

/// Opens the window and renders until it is closed.
pub fn run(config: WindowConfig) -> Result<(), Error> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn close_request_exits() {
        assert_eq!(classify(&WindowEvent::CloseRequested), Action::Exit);
    }

    #[test]
    fn resize_carries_physical_size() {
        let event = WindowEvent::Resized(PhysicalSize::new(1024, 768));
        assert_eq!(classify(&event), Action::Resize(1024, 768));
    }

    #[test]
    fn redraw_draws() {
        assert_eq!(classify(&WindowEvent::RedrawRequested), Action::Redraw);
    }

    #[test]
    fn other_input_is_ignored() {
        assert_eq!(classify(&WindowEvent::Focused(true)), Action::Ignore);
        assert_eq!(classify(&WindowEvent::Destroyed), Action::Ignore);
    }

    #[test]
    fn app_starts_without_graphics() {
        let app = App::new(WindowConfig::default());
        assert!(app.graphics.is_none());
        assert!(app.error.is_none());
    }
}
