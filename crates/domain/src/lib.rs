//! Core domain types for the to-do page form behavior.
//!
//! Nothing here touches the DOM. The types describe which to-do item a
//! trigger refers to and the two-state visibility of its edit form.

pub mod error;
pub mod ids;
pub mod visibility;

pub use error::DomainError;
pub use ids::TodoId;
pub use visibility::Visibility;
