//! todoform Runner - composition root
//!
//! Wires the web-sys document adapter into the form visibility controller
//! and exposes `attachHandlers` to the hosting page. The page calls it once
//! after load; nothing is bound on import.

use std::rc::Rc;
use std::sync::Once;

use todoform_app::{AttachError, FormVisibilityController};
use todoform_ports::outbound::{DocumentPort, ElementRef};
use todoform_ports::ControllerConfig;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::AttachedHandlers;

static LOGGING: Once = Once::new();

/// Install the panic hook and tracing subscriber. Safe to call repeatedly.
pub fn init_logging() {
    LOGGING.call_once(|| {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                        "todoform=debug".into()
                    }),
                )
                .with(tracing_subscriber::fmt::layer())
                .try_init();
        }

        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            tracing_wasm::set_as_global_default();
        }
    });
}

/// Attach the controller to `root`, using defaults when no config is given.
pub fn attach_handlers(
    document: Rc<dyn DocumentPort>,
    root: &ElementRef,
    config: Option<ControllerConfig>,
) -> Result<Rc<FormVisibilityController>, AttachError> {
    let config = config.unwrap_or_default();
    tracing::debug!(
        create_button = %config.create_button_id,
        edit_trigger = %config.edit_trigger_class,
        policy = ?config.missing_create_elements,
        "Attaching form handlers"
    );
    FormVisibilityController::attach(document, root, config)
}
