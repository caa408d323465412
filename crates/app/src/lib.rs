//! Application layer: the form visibility controller and its registry.

pub mod application;

pub use application::{AttachError, FormVisibilityController};
