//! HTML template rendering port.

use thiserror::Error;

/// Renders named templates against a JSON context.
pub trait TemplateRenderer: Send + Sync {
    /// Renders `name` with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when the template is unknown or rendering
    /// fails.
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String, TemplateError>;
}

/// Errors returned by template renderers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// No template is registered under the name.
    #[error("template not found: {0}")]
    NotFound(String),
    /// The template failed to render.
    #[error("failed to render template {name}: {reason}")]
    Render {
        /// Template name.
        name: String,
        /// Renderer message.
        reason: String,
    },
}
