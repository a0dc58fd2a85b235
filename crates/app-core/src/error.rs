use thiserror::Error;

/// Failures that can occur while bringing the hero animation up.
///
/// None of these surface to the page: front-ends log them and fall back to
/// the static hero. Degenerate geometry and post-teardown events are handled
/// locally where they occur and never become errors.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The mount element is absent from the document.
    #[error("mount surface `{0}` not found")]
    MountMissing(String),
    /// The mount region exists but has not been laid out yet.
    #[error("mount surface is zero-sized ({width}x{height})")]
    ZeroSizedSurface { width: u32, height: u32 },
    /// Structural invariant violation in the animation parameters.
    #[error("invalid curve parameters: {0}")]
    InvalidParameters(String),
}
