use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{Display, GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface as GlutinSurface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use std::ffi::CStr;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::config::WindowConfig;
use crate::error::Error;

/// Entry points the renderer cannot do without. If the loader cannot
/// resolve them the driver does not offer a usable 3.x core context.
const REQUIRED_ENTRY_POINTS: [&CStr; 4] = [
    c"glGenVertexArrays",
    c"glGenBuffers",
    c"glCreateShader",
    c"glDrawArrays",
];

/// Window, GL context and presentable surface.
///
/// Fields drop top to bottom: loaded functions, surface, context, window.
pub struct Surface {
    pub gl: Rc<glow::Context>,
    gl_surface: GlutinSurface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: Window,
}

impl Surface {
    pub fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, Error> {
        let window_attributes = Window::default_attributes()
            .with_title(config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        let template = ConfigTemplateBuilder::new().with_single_buffering(false);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(event_loop, template, pick_config)
            .map_err(Error::Window)?;
        let window =
            window.ok_or_else(|| Error::Window("display builder returned no window".into()))?;

        let raw_window_handle = window.window_handle().ok().map(|handle| handle.as_raw());
        let gl_display = gl_config.display();

        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(raw_window_handle);

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let surface_attributes = window.build_surface_attributes(Default::default())?;
        let gl_surface =
            unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };
        let gl_context = not_current.make_current(&gl_surface)?;

        if config.vsync {
            if let Err(err) =
                gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                log::warn!("could not enable vsync: {}", err);
            }
        }

        let gl = load(&gl_display)?;
        log::info!(
            "created OpenGL {}.{} context ({})",
            gl.version().major,
            gl.version().minor,
            gl.version().vendor_info
        );

        Ok(Surface {
            gl: Rc::new(gl),
            gl_surface,
            gl_context,
            window,
        })
    }

    pub fn resize(&self, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.gl_surface.resize(&self.gl_context, w, h);
        }
    }

    pub fn swap_buffers(&self) -> Result<(), Error> {
        self.gl_surface.swap_buffers(&self.gl_context)?;
        Ok(())
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, config| {
            if config.hardware_accelerated() && !best.hardware_accelerated() {
                config
            } else {
                best
            }
        })
        .expect("display offered no GL configs")
}

fn load(display: &Display) -> Result<glow::Context, Error> {
    for name in REQUIRED_ENTRY_POINTS {
        if display.get_proc_address(name).is_null() {
            return Err(Error::Loader(name.to_string_lossy().into_owned()));
        }
    }

    Ok(unsafe { glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name)) })
}
