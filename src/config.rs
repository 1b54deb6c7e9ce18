/// Background the framebuffer is cleared to before every draw.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

const DIMS: (u32, u32) = (800, 600);

/// Window and context parameters. Fixed at compile time.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    /// Requested core-profile version as `(major, minor)`.
    pub gl_version: (u8, u8),
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "OpenGL Triangle",
            width: DIMS.0,
            height: DIMS.1,
            resizable: true,
            gl_version: (3, 3),
            vsync: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "OpenGL Triangle");
        assert_eq!((config.width, config.height), (800, 600));
        assert!(config.resizable);
        assert_eq!(config.gl_version, (3, 3));
    }

    #[test]
    fn clears_to_opaque_black() {
        assert_eq!(CLEAR_COLOR, [0.0, 0.0, 0.0, 1.0]);
    }
}
