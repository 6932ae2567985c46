//! ONNX Runtime session wrapper: lifecycle, metadata, synchronous inference.
//!
//! [`InferenceSession`] owns one loaded model. Construction lives in
//! `builders`, the inference call in `execution`, and the raw session
//! loading helper in `session`.

mod builders;
mod execution;
mod session;

#[cfg(test)]
mod tests;

use crate::core::config::ExecutionPath;
use ort::session::Session;
use std::path::{Path, PathBuf};

/// One loaded, runnable model instance.
///
/// The session exclusively owns the underlying engine handle; the handle
/// is released exactly once, when the value is dropped. [`run`] borrows
/// the session mutably, so one call at a time per session is enforced at
/// compile time and no call can race the drop. Independent sessions share
/// no state and may run in parallel.
///
/// [`run`]: InferenceSession::run
pub struct InferenceSession {
    /// The underlying ONNX Runtime session.
    pub(crate) session: Session,
    /// The path to the model file.
    pub(crate) model_path: PathBuf,
    /// The model name for logging and error context.
    pub(crate) model_name: String,
    /// Name of the model's single input tensor.
    pub(crate) input_name: String,
    /// Name of the model's single output tensor.
    pub(crate) output_name: String,
    /// Declared input shape; a dimension value of -1 is dynamic.
    pub(crate) input_shape: Vec<i64>,
    /// Declared output shape; a dimension value of -1 is dynamic.
    pub(crate) output_shape: Vec<i64>,
    /// The execution path the engine was actually configured with.
    pub(crate) execution_path: ExecutionPath,
}

impl std::fmt::Debug for InferenceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceSession")
            .field("model_path", &self.model_path)
            .field("model_name", &self.model_name)
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("input_shape", &self.input_shape)
            .field("output_shape", &self.output_shape)
            .field("execution_path", &self.execution_path)
            .finish_non_exhaustive()
    }
}

impl InferenceSession {
    /// Returns the path to the model file.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Returns the name of the model's single input tensor.
    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// Returns the name of the model's single output tensor.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Returns the declared input shape.
    ///
    /// Dimension values of -1 are dynamic and excluded from input length
    /// validation.
    pub fn input_shape(&self) -> &[i64] {
        &self.input_shape
    }

    /// Returns the declared output shape.
    pub fn output_shape(&self) -> &[i64] {
        &self.output_shape
    }

    /// Returns the execution path the session was configured with.
    ///
    /// When hardware acceleration was requested but unavailable this
    /// reports [`ExecutionPath::Cpu`], making the silent fallback
    /// observable.
    pub fn execution_path(&self) -> ExecutionPath {
        self.execution_path
    }
}
