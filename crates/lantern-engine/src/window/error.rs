use thiserror::Error;

/// Failures while acquiring native window resources.
///
/// Construction failure is fatal to the calling scope and never retried here;
/// a missing display or driver does not fix itself. Window *loss* after
/// construction is not an error at all; the event stream ends instead.
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("invalid window settings: {0}")]
    InvalidSettings(String),

    #[error("event loop unavailable: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("native window creation failed: {0}")]
    Os(#[from] winit::error::OsError),

    /// The platform event loop ran but never delivered a window, which
    /// happens on headless hosts.
    #[error("event loop never delivered a window")]
    NotCreated,
}
