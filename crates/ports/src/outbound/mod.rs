//! Outbound ports - Interfaces for the hosting document
//!
//! The controller only ever talks to the page through these traits, so the
//! same code runs against the browser DOM (web-sys adapter) and against the
//! in-memory document used by tests.

pub mod document_port;

pub use document_port::{ClickHandler, DocumentPort, ElementPort, ElementRef, ListenerError};

#[cfg(any(test, feature = "testing"))]
pub use document_port::{MockDocumentPort, MockElementPort};
