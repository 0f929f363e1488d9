//! Content surface execution channel.
//!
//! The projection engine is the only component that touches the surface,
//! and it does so exclusively through this trait — which keeps the rest
//! of the pipeline testable without a real WebView.

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("script evaluation failed: {0}")]
    Evaluation(String),
}

/// An embedded renderer that can execute injected script.
///
/// Execution is fire-and-forget: implementations must preserve call order
/// but are not expected to report whether the content applied the update.
pub trait ContentSurface {
    fn evaluate(&self, script: &str) -> Result<(), SurfaceError>;
}

#[cfg(feature = "wry")]
impl ContentSurface for wry::WebView {
    fn evaluate(&self, script: &str) -> Result<(), SurfaceError> {
        self.evaluate_script(script)
            .map_err(|e| SurfaceError::Evaluation(e.to_string()))
    }
}
