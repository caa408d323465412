use thiserror::Error;
use todoform_ports::outbound::ListenerError;
use todoform_ports::ConfigError;

/// Failures while attaching the controller to a page.
///
/// Nothing after a successful attach can fail: lookups on the click path
/// degrade to no-ops.
#[derive(Debug, Error)]
pub enum AttachError {
    #[error("Invalid controller configuration: {0}")]
    Config(#[from] ConfigError),

    /// A fixed element is absent and the policy is `Fail`
    #[error("Required element not found: #{id}")]
    MissingElement { id: String },

    #[error(transparent)]
    Listener(#[from] ListenerError),
}

impl AttachError {
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}
