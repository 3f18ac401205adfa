use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failures surfaced by listeners and render targets.
///
/// Neither listener registration nor notification can fail; these errors
/// are produced by callbacks and are logged and skipped by the list.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("render target `{target}` failed: {message}")]
    Render { target: String, message: String },

    #[error("listener failed: {message}")]
    Listener { message: String },
}

impl RuntimeError {
    #[must_use]
    pub fn render(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            target: target.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn listener(message: impl Into<String>) -> Self {
        Self::Listener {
            message: message.into(),
        }
    }
}
