use thiserror::Error;

/// Everything that can stop the triangle from showing up. All of it is fatal.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize platform: {0}")]
    Platform(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(Box<dyn std::error::Error>),

    #[error("OpenGL context error: {0}")]
    Context(#[from] glutin::error::Error),

    #[error("window handle unavailable: {0}")]
    Handle(#[from] raw_window_handle::HandleError),

    #[error("OpenGL loader failed: {0} is not available")]
    Loader(String),

    #[error("failed to create {kind}: {message}")]
    Object { kind: &'static str, message: String },

    #[error("{stage} failed to compile: {log}")]
    Compile { stage: &'static str, log: String },

    #[error("program failed to link: {0}")]
    Link(String),

    #[error("shader program has no active attribute `{0}`")]
    MissingAttribute(&'static str),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::error::EventLoopError;

    #[test]
    fn platform_failure_carries_platform_text() {
        let platform = EventLoopError::RecreationAttempt;
        let text = platform.to_string();
        let err = Error::from(platform);

        assert_eq!(err.exit_code(), -1);
        assert!(err.to_string().contains(&text));
    }

    #[test]
    fn window_failure_carries_platform_text() {
        let err = Error::Window("cannot open display :0".into());
        assert_eq!(err.exit_code(), -1);
        assert_eq!(
            err.to_string(),
            "window creation failed: cannot open display :0"
        );
    }

    #[test]
    fn shader_errors_include_driver_log() {
        let err = Error::Compile {
            stage: "vertex shader",
            log: "0:3(1): error: syntax error".to_string(),
        };
        assert_eq!(err.exit_code(), -1);
        assert!(err.to_string().starts_with("vertex shader failed to compile"));
        assert!(err.to_string().contains("syntax error"));

        let err = Error::Link("Color not written".to_string());
        assert!(err.to_string().contains("Color not written"));
    }

    #[test]
    fn loader_failure_names_entry_point() {
        let err = Error::Loader("glGenVertexArrays".to_string());
        assert_eq!(err.exit_code(), -1);
        assert!(err.to_string().contains("glGenVertexArrays"));
    }
}
