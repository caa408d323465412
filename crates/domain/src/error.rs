//! Error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A to-do identifier was empty
    #[error("To-do identifier cannot be empty")]
    EmptyTodoId,
}
