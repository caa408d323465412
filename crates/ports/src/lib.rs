//! Port definitions and shared configuration for the form controller.

pub mod config;
pub mod outbound;

pub use config::{ConfigError, ControllerConfig, MissingElementPolicy};
