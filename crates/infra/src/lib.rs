//! Infrastructure layer: durable slots, catalog/stock clients, notice sinks.
//!
//! Everything here implements a port from `forgecart-cart`. The in-memory
//! implementations are intended for tests/dev; the file slot and the HTTP
//! client are the production wiring.

pub mod catalog;
pub mod notify;
pub mod storage;

#[cfg(test)]
mod integration_tests;

pub use catalog::{HttpCatalog, InMemoryCatalog};
pub use notify::{RecordingNotifier, TracingNotifier};
pub use storage::{InMemoryCartStorage, JsonFileCartStorage};
