//! Document adapters: the browser DOM on wasm32 and an in-memory document
//! for native tests.

pub mod infrastructure;
