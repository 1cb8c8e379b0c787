//! `MiniJinja` template renderer.

use crate::notification::{
    domain::STATUS_CHANGE_TEMPLATE,
    ports::{TemplateError, TemplateRenderer},
};
use minijinja::{Environment, ErrorKind};

const STATUS_CHANGE_SOURCE: &str =
    include_str!("../../../templates/emails/task_status_change.html");

/// Renders the bundled email templates with `MiniJinja`.
///
/// Templates ending in `.html` are auto-escaped.
#[derive(Debug)]
pub struct MiniJinjaRenderer {
    environment: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the bundled templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Render`] if a bundled template fails to
    /// parse.
    pub fn new() -> Result<Self, TemplateError> {
        let mut environment = Environment::new();
        environment
            .add_template(STATUS_CHANGE_TEMPLATE, STATUS_CHANGE_SOURCE)
            .map_err(|err| render_error(STATUS_CHANGE_TEMPLATE, &err))?;
        Ok(Self { environment })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String, TemplateError> {
        let template = self.environment.get_template(name).map_err(|err| {
            if err.kind() == ErrorKind::TemplateNotFound {
                TemplateError::NotFound(name.to_owned())
            } else {
                render_error(name, &err)
            }
        })?;
        template
            .render(context)
            .map_err(|err| render_error(name, &err))
    }
}

fn render_error(name: &str, err: &minijinja::Error) -> TemplateError {
    TemplateError::Render {
        name: name.to_owned(),
        reason: err.to_string(),
    }
}
