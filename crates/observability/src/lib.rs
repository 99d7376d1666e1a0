//! Tracing/logging setup shared by anything hosting a cart store.

pub mod tracing;

pub use self::tracing::init;
