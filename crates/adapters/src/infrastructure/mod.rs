//! Platform-specific implementations of the document ports.
//!
//! The correct adapter is selected at compile time based on the target
//! architecture. The in-memory document stays available on native targets
//! for tests.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub mod testing;

#[cfg(target_arch = "wasm32")]
pub use web::{WebDocument, WebElement};
