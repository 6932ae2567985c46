//! # ONNX Host
//!
//! A small on-device model serving core around ONNX Runtime: session
//! lifecycle, shape validation, and synchronous inference invocation.
//!
//! Each [`InferenceSession`] owns one loaded model with exactly one input
//! and one output tensor. The session exposes the declared tensor names
//! and shapes, and a blocking [`run`](InferenceSession::run) call that
//! validates the input against the declared shape before the engine is
//! ever invoked. Model parsing, graph execution, and accelerator dispatch
//! all stay inside ONNX Runtime; this crate is the safety-focused layer in
//! front of it.
//!
//! ## Design
//!
//! - **Exclusive ownership.** A session is released by dropping it, exactly
//!   once. `run` takes `&mut self`, so a call can never overlap another
//!   call or the release.
//! - **Silent accelerator fallback.** Requesting
//!   [`AccelerationMode::HardwareAccelerated`] prefers a platform
//!   execution provider (behind the `coreml`, `directml`, `tensorrt`, and
//!   `cuda` cargo features); when none is available the session falls back
//!   to the CPU path and records that in
//!   [`execution_path`](InferenceSession::execution_path).
//! - **Typed errors.** Loading fails with [`LoadError`], inference with
//!   [`InferenceError`]; neither is retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use onnx_host::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = InferenceSession::load(
//!     "models/wake_word.onnx",
//!     AccelerationMode::HardwareAccelerated,
//! )?;
//!
//! println!(
//!     "{} {:?} -> {} {:?} ({})",
//!     session.input_name(),
//!     session.input_shape(),
//!     session.output_name(),
//!     session.output_shape(),
//!     session.execution_path(),
//! );
//!
//! let samples = vec![0.0_f32; 16000];
//! let scores = session.run(&samples, 2)?;
//! assert_eq!(scores.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod core;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use onnx_host::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{
        AccelerationMode, ExecutionPath, GraphOptLevel, InferenceError, InferenceSession,
        LoadError, SessionOptions,
    };
}
