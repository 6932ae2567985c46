//! Error types for the model serving core.
//!
//! Two terminal error kinds exist: [`LoadError`] for everything that can go
//! wrong while bringing a model up, and [`InferenceError`] for a single
//! inference invocation. Neither is retried automatically; every failure is
//! returned at the call site that caused it. A use-after-release condition
//! has no error value at all: releasing a session is dropping it, and the
//! borrow checker rules out calls racing the drop.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a model into a session.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The model file is missing, unreadable, or not a regular file.
    #[error("model file '{}': {message}", .path.display())]
    ModelFile {
        /// The path that was rejected.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
        /// The underlying IO error, when one was observed.
        #[source]
        source: Option<std::io::Error>,
    },

    /// ONNX Runtime rejected the artifact during session creation.
    #[error("failed to load model '{}': {context}", .path.display())]
    Session {
        /// The path of the artifact the engine rejected.
        path: PathBuf,
        /// Additional context about the failure.
        context: String,
        /// The engine error.
        #[source]
        source: ort::Error,
    },

    /// The model does not declare exactly one input and one output tensor.
    ///
    /// This serving core binds a single input to a single output; models
    /// with any other signature are rejected at load time.
    #[error(
        "model '{}' declares {inputs} input(s) and {outputs} output(s), expected exactly one of each",
        .path.display()
    )]
    UnsupportedSignature {
        /// The path of the rejected artifact.
        path: PathBuf,
        /// Number of declared input tensors.
        inputs: usize,
        /// Number of declared output tensors.
        outputs: usize,
    },

    /// Declared input/output metadata is missing or not a tensor type.
    #[error("model '{}': {message}", .path.display())]
    Metadata {
        /// The path of the rejected artifact.
        path: PathBuf,
        /// What was wrong with the metadata.
        message: String,
    },

    /// Error from the ONNX Runtime environment itself.
    #[error(transparent)]
    Engine(#[from] ort::Error),
}

impl LoadError {
    /// Creates a LoadError for a missing or unreadable model file.
    pub fn model_file(
        path: impl AsRef<Path>,
        message: impl Into<String>,
        source: Option<std::io::Error>,
    ) -> Self {
        Self::ModelFile {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source,
        }
    }

    /// Creates a LoadError for a failed session creation.
    pub fn session(path: impl AsRef<Path>, context: impl Into<String>, source: ort::Error) -> Self {
        Self::Session {
            path: path.as_ref().to_path_buf(),
            context: context.into(),
            source,
        }
    }

    /// Creates a LoadError for invalid declared tensor metadata.
    pub fn metadata(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Metadata {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

/// Errors raised by a single inference invocation.
#[derive(Error, Debug)]
pub enum InferenceError {
    /// Input element count does not match the declared input shape.
    ///
    /// Raised before the engine is invoked; a mismatched call has no side
    /// effect.
    #[error("input '{name}': shape {shape:?} requires {expected} element(s), got {actual}")]
    InputShapeMismatch {
        /// Name of the model's input tensor.
        name: String,
        /// The declared input shape.
        shape: Vec<i64>,
        /// Element count the shape requires.
        expected: usize,
        /// Element count the caller provided.
        actual: usize,
    },

    /// Requested output length does not match the declared output shape.
    ///
    /// Only raised when the output shape is fully concrete; with dynamic
    /// output dimensions the length is checked after execution instead.
    #[error(
        "output '{name}': declared shape {shape:?} yields {expected} element(s), but {requested} were requested"
    )]
    OutputRequestMismatch {
        /// Name of the model's output tensor.
        name: String,
        /// The declared output shape.
        shape: Vec<i64>,
        /// Element count the shape yields.
        expected: usize,
        /// Element count the caller requested.
        requested: usize,
    },

    /// The engine produced an output whose size differs from the requested length.
    #[error("output '{name}': engine returned {actual} element(s), expected {expected}")]
    OutputSizeMismatch {
        /// Name of the model's output tensor.
        name: String,
        /// Element count the caller requested.
        expected: usize,
        /// Element count the engine produced.
        actual: usize,
    },

    /// ONNX Runtime failed while executing the model.
    #[error("inference failed for model '{model}': {context}")]
    Execution {
        /// The model name, for error context.
        model: String,
        /// Additional context about the failing call.
        context: String,
        /// The engine error.
        #[source]
        source: ort::Error,
    },

    /// Input could not be marshaled into the engine's tensor representation.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },
}

impl InferenceError {
    /// Creates an InferenceError for a failed engine call.
    pub fn execution(model: &str, context: impl Into<String>, source: ort::Error) -> Self {
        Self::Execution {
            model: model.to_string(),
            context: context.into(),
            source,
        }
    }

    /// Creates an InferenceError for invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_file_display() {
        let err = LoadError::model_file("models/missing.onnx", "model file is missing", None);
        let text = err.to_string();
        assert!(text.contains("models/missing.onnx"));
        assert!(text.contains("missing"));
    }

    #[test]
    fn test_unsupported_signature_display() {
        let err = LoadError::UnsupportedSignature {
            path: PathBuf::from("multi.onnx"),
            inputs: 2,
            outputs: 1,
        };
        let text = err.to_string();
        assert!(text.contains("2 input(s)"));
        assert!(text.contains("1 output(s)"));
        assert!(text.contains("exactly one"));
    }

    #[test]
    fn test_input_shape_mismatch_display() {
        let err = InferenceError::InputShapeMismatch {
            name: "x".to_string(),
            shape: vec![1, 16000],
            expected: 16000,
            actual: 8000,
        };
        let text = err.to_string();
        assert!(text.contains("'x'"));
        assert!(text.contains("16000"));
        assert!(text.contains("8000"));
    }

    #[test]
    fn test_output_size_mismatch_display() {
        let err = InferenceError::OutputSizeMismatch {
            name: "logits".to_string(),
            expected: 2,
            actual: 4,
        };
        let text = err.to_string();
        assert!(text.contains("expected 2"));
        assert!(text.contains("returned 4"));
    }

    #[test]
    fn test_invalid_input_constructor() {
        let err = InferenceError::invalid_input("empty tensor");
        assert!(matches!(err, InferenceError::InvalidInput { .. }));
        assert!(err.to_string().contains("empty tensor"));
    }
}
