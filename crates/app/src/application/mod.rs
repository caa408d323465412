pub mod error;
mod form_registry;
pub mod form_visibility;

#[cfg(test)]
mod tests;

pub use error::AttachError;
pub(crate) use form_registry::EditFormRegistry;
pub use form_visibility::FormVisibilityController;
