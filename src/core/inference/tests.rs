use super::*;
use crate::core::config::{AccelerationMode, GraphOptLevel, SessionOptions};
use crate::core::errors::LoadError;

#[test]
fn test_load_missing_path_fails() {
    let result = InferenceSession::load("no_such_model.onnx", AccelerationMode::Default);
    assert!(matches!(result, Err(LoadError::ModelFile { .. })));
}

#[test]
fn test_load_empty_path_fails() {
    let result = InferenceSession::load("", AccelerationMode::Default);
    match result {
        Err(LoadError::ModelFile { message, .. }) => {
            assert!(message.contains("empty"));
        }
        other => panic!("expected ModelFile error, got: {other:?}"),
    }
}

#[test]
fn test_load_directory_path_fails() {
    let result = InferenceSession::load(std::env::temp_dir(), AccelerationMode::Default);
    match result {
        Err(LoadError::ModelFile { message, .. }) => {
            assert!(message.contains("not a regular file"));
        }
        other => panic!("expected ModelFile error, got: {other:?}"),
    }
}

#[test]
fn test_from_options_missing_path_fails() {
    let options = SessionOptions::new()
        .with_acceleration(AccelerationMode::HardwareAccelerated)
        .with_intra_threads(2)
        .with_optimization_level(GraphOptLevel::Level2);

    let result = InferenceSession::from_options("dummy_path.onnx", &options);
    assert!(result.is_err());
}
