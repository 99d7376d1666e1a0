//! Notice sink implementations.

pub mod recording;
pub mod tracing;

pub use self::recording::RecordingNotifier;
pub use self::tracing::TracingNotifier;
