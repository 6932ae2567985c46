//! Session construction: options, execution providers, model metadata.

use super::{InferenceSession, session};
use crate::core::config::{AccelerationMode, ExecutionPath, GraphOptLevel, SessionOptions};
use crate::core::errors::LoadError;
use ort::execution_providers::ExecutionProviderDispatch;
use ort::logging::LogLevel;
use ort::session::{Session, builder::SessionBuilder};
use ort::value::ValueType;
use std::path::Path;
use tracing::{info, warn};

impl InferenceSession {
    /// Loads a model with default options and the given acceleration mode.
    pub fn load(
        model_path: impl AsRef<Path>,
        acceleration: AccelerationMode,
    ) -> Result<Self, LoadError> {
        Self::from_options(
            model_path,
            &SessionOptions::new().with_acceleration(acceleration),
        )
    }

    /// Loads a model applying the full session options.
    ///
    /// The path is checked before the engine is touched, so a missing file
    /// fails deterministically. On success the session carries the names
    /// and shapes of the model's single input and output tensor; models
    /// with any other signature are rejected.
    pub fn from_options(
        model_path: impl AsRef<Path>,
        options: &SessionOptions,
    ) -> Result<Self, LoadError> {
        let path = model_path.as_ref();
        check_model_file(path)?;

        let (providers, execution_path) = resolve_execution_path(options.acceleration);
        let session = session::load_session_with(path, |builder| {
            let builder = apply_options(builder, options)?;
            if providers.is_empty() {
                Ok(builder)
            } else {
                builder.with_execution_providers(providers)
            }
        })?;

        let (input_name, input_shape, output_name, output_shape) =
            extract_signature(&session, path)?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown_model")
            .to_string();

        info!(
            model = %model_name,
            input = %input_name,
            output = %output_name,
            ?input_shape,
            ?output_shape,
            execution_path = %execution_path,
            "model loaded"
        );

        Ok(InferenceSession {
            session,
            model_path: path.to_path_buf(),
            model_name,
            input_name,
            output_name,
            input_shape,
            output_shape,
            execution_path,
        })
    }
}

/// Rejects empty, missing, and non-regular-file paths up front.
fn check_model_file(path: &Path) -> Result<(), LoadError> {
    if path.as_os_str().is_empty() {
        return Err(LoadError::model_file(path, "model path is empty", None));
    }
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(LoadError::model_file(
            path,
            "model path is not a regular file",
            None,
        )),
        Err(e) => Err(LoadError::model_file(
            path,
            "model file is missing or unreadable",
            Some(e),
        )),
    }
}

/// Applies the tuning knobs from [`SessionOptions`] to a session builder.
fn apply_options(
    mut builder: SessionBuilder,
    options: &SessionOptions,
) -> Result<SessionBuilder, ort::Error> {
    builder = builder.with_log_level(LogLevel::Error)?;
    if let Some(intra) = options.intra_threads {
        builder = builder.with_intra_threads(intra)?;
    }
    if let Some(inter) = options.inter_threads {
        builder = builder.with_inter_threads(inter)?;
    }
    if let Some(level) = options.optimization_level {
        use ort::session::builder::GraphOptimizationLevel as GOL;
        let mapped = match level {
            GraphOptLevel::DisableAll => GOL::Disable,
            GraphOptLevel::Level1 => GOL::Level1,
            GraphOptLevel::Level2 => GOL::Level2,
            GraphOptLevel::Level3 | GraphOptLevel::All => GOL::Level3,
        };
        builder = builder.with_optimization_level(mapped)?;
    }
    Ok(builder)
}

/// Resolves the acceleration mode into execution providers to register and
/// the execution path to record on the session.
///
/// Fallback policy: when acceleration is requested but no accelerator is
/// compiled in or available, the session is built on the CPU path and a
/// warning is emitted. The caller can observe the outcome via
/// [`InferenceSession::execution_path`].
fn resolve_execution_path(
    mode: AccelerationMode,
) -> (Vec<ExecutionProviderDispatch>, ExecutionPath) {
    match mode {
        AccelerationMode::Default => (Vec::new(), ExecutionPath::Cpu),
        AccelerationMode::HardwareAccelerated => match accelerator_provider() {
            Some(provider) => (vec![provider], ExecutionPath::Accelerated),
            None => {
                warn!(
                    "hardware acceleration requested but no accelerator is available, \
                     falling back to the CPU execution path"
                );
                (Vec::new(), ExecutionPath::Cpu)
            }
        },
    }
}

/// Returns the first compiled-in accelerator that reports itself available.
///
/// Probe order: CoreML, DirectML, TensorRT, CUDA. Each provider is behind
/// a cargo feature mapped to the matching `ort` feature; a default build
/// compiles none of them and always falls back to the CPU path.
fn accelerator_provider() -> Option<ExecutionProviderDispatch> {
    #[cfg(feature = "coreml")]
    {
        use ort::ep::ExecutionProvider;
        use ort::execution_providers::CoreMLExecutionProvider;
        let ep = CoreMLExecutionProvider::default();
        if ep.is_available().unwrap_or(false) {
            return Some(ep.build());
        }
    }
    #[cfg(feature = "directml")]
    {
        use ort::ep::ExecutionProvider;
        use ort::execution_providers::DirectMLExecutionProvider;
        let ep = DirectMLExecutionProvider::default();
        if ep.is_available().unwrap_or(false) {
            return Some(ep.build());
        }
    }
    #[cfg(feature = "tensorrt")]
    {
        use ort::ep::ExecutionProvider;
        use ort::execution_providers::TensorRTExecutionProvider;
        let ep = TensorRTExecutionProvider::default();
        if ep.is_available().unwrap_or(false) {
            return Some(ep.build());
        }
    }
    #[cfg(feature = "cuda")]
    {
        use ort::ep::ExecutionProvider;
        use ort::execution_providers::CUDAExecutionProvider;
        let ep = CUDAExecutionProvider::default();
        if ep.is_available().unwrap_or(false) {
            return Some(ep.build());
        }
    }
    None
}

/// Reads the declared single input/output tensor metadata off a freshly
/// loaded session.
fn extract_signature(
    session: &Session,
    path: &Path,
) -> Result<(String, Vec<i64>, String, Vec<i64>), LoadError> {
    let inputs = session.inputs();
    let outputs = session.outputs();
    if inputs.len() != 1 || outputs.len() != 1 {
        return Err(LoadError::UnsupportedSignature {
            path: path.to_path_buf(),
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }

    let input = &inputs[0];
    let output = &outputs[0];
    let input_shape = declared_tensor_shape(input.dtype(), path, input.name(), "input")?;
    let output_shape = declared_tensor_shape(output.dtype(), path, output.name(), "output")?;

    Ok((
        input.name().to_string(),
        input_shape,
        output.name().to_string(),
        output_shape,
    ))
}

fn declared_tensor_shape(
    value_type: &ValueType,
    path: &Path,
    name: &str,
    role: &str,
) -> Result<Vec<i64>, LoadError> {
    value_type
        .tensor_shape()
        .map(|shape| shape.iter().copied().collect())
        .ok_or_else(|| {
            LoadError::metadata(path, format!("declared {role} '{name}' is not a tensor"))
        })
}
