//! Test-only infrastructure fakes.
//!
//! An in-memory document tree implementing the document ports, with click
//! dispatch that bubbles from the target to the root like the browser does.
//! Only available on non-WASM targets since tests run on desktop.

mod fake_document;

pub use fake_document::{FakeDocument, FakeElement};
