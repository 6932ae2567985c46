//! Helpers for working directly with ONNX Runtime sessions.

use crate::core::errors::LoadError;
use ort::session::{Session, builder::SessionBuilder};
use std::path::Path;

const SESSION_CREATION_FAILURE: &str = "failed to create ONNX session";

/// Builds a session using a caller-provided builder configuration.
pub(crate) fn load_session_with<F>(model_path: &Path, configure_builder: F) -> Result<Session, LoadError>
where
    F: FnOnce(SessionBuilder) -> Result<SessionBuilder, ort::Error>,
{
    let builder = Session::builder()?;
    let builder = configure_builder(builder)?;
    builder
        .commit_from_file(model_path)
        .map_err(|e| LoadError::session(model_path, SESSION_CREATION_FAILURE, e))
}
