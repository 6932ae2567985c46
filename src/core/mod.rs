//! The core of the model serving layer.
//!
//! This module contains:
//! - Session configuration (acceleration mode, engine tuning knobs)
//! - Error handling
//! - Shape validation helpers
//! - The ONNX Runtime session wrapper
//!
//! It also re-exports the commonly used types for convenience.

pub mod config;
pub mod errors;
pub mod inference;
pub mod validation;

pub use config::{AccelerationMode, ExecutionPath, GraphOptLevel, SessionOptions};
pub use errors::{InferenceError, LoadError};
pub use inference::InferenceSession;

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and
/// formatting layer. It's typically called at the start of an application
/// to enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
