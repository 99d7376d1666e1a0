//! Durable slot implementations.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryCartStorage;
pub use json_file::JsonFileCartStorage;
