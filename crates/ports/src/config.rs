//! Controller configuration - the markup contract with the hosting page.
//!
//! Every field has a default matching the to-do page's markup, so an empty
//! object (or no object at all) configures the stock page.

use serde::Deserialize;
use thiserror::Error;

/// What `attach_handlers` does when the create button or create form is
/// missing from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingElementPolicy {
    /// Skip the reveal binding; the edit-form delegation is still attached.
    #[default]
    Ignore,
    /// Abort attaching with an error before any listener is bound.
    Fail,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration field `{0}` cannot be empty")]
    EmptyField(&'static str),

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControllerConfig {
    pub create_button_id: String,
    pub create_form_id: String,
    pub edit_trigger_class: String,
    pub todo_id_attribute: String,
    pub edit_form_id_prefix: String,
    pub missing_create_elements: MissingElementPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            create_button_id: "create-todo-btn".to_string(),
            create_form_id: "create-todo-form".to_string(),
            edit_trigger_class: "edit-button".to_string(),
            todo_id_attribute: "data-todo-id".to_string(),
            edit_form_id_prefix: "update-form-".to_string(),
            missing_create_elements: MissingElementPolicy::Ignore,
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("createButtonId", &self.create_button_id),
            ("createFormId", &self.create_form_id),
            ("editTriggerClass", &self.edit_trigger_class),
            ("todoIdAttribute", &self.todo_id_attribute),
            ("editFormIdPrefix", &self.edit_form_id_prefix),
        ];
        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((name, _)) => Err(ConfigError::EmptyField(*name)),
            None => Ok(()),
        }
    }
}
