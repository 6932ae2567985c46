//! Shape validation for inference inputs and outputs.
//!
//! These helpers run before any engine call, so a shape mismatch is
//! rejected without side effects. A dimension value of zero or below marks
//! a dynamic (unbound) dimension, following the ONNX convention of -1.

use crate::core::errors::InferenceError;

/// Returns true when a dimension value is dynamic (unbound).
#[inline]
pub fn is_dynamic(dim: i64) -> bool {
    dim <= 0
}

/// Returns true when any dimension of the shape is dynamic.
#[inline]
pub fn has_dynamic_dims(shape: &[i64]) -> bool {
    shape.iter().copied().any(is_dynamic)
}

/// Product of the concrete (non-dynamic) dimensions of a shape.
///
/// An empty shape denotes a scalar and yields 1.
pub fn element_count(shape: &[i64]) -> usize {
    shape
        .iter()
        .filter(|&&dim| !is_dynamic(dim))
        .map(|&dim| dim as usize)
        .product()
}

/// The shape with dynamic dimensions bound to 1, usable for a single call.
pub fn bound_shape(shape: &[i64]) -> Vec<i64> {
    shape
        .iter()
        .map(|&dim| if is_dynamic(dim) { 1 } else { dim })
        .collect()
}

/// Validates a flat input buffer against the declared input shape.
pub fn validate_input_len(
    actual: usize,
    shape: &[i64],
    name: &str,
) -> Result<(), InferenceError> {
    let expected = element_count(shape);
    if actual != expected {
        return Err(InferenceError::InputShapeMismatch {
            name: name.to_string(),
            shape: shape.to_vec(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validates a requested output length against the declared output shape.
///
/// With dynamic output dimensions the declared shape cannot pin down a
/// length, so the check is deferred to the real output tensor after the
/// run.
pub fn validate_expected_output_len(
    requested: usize,
    shape: &[i64],
    name: &str,
) -> Result<(), InferenceError> {
    if has_dynamic_dims(shape) {
        return Ok(());
    }
    let expected = element_count(shape);
    if requested != expected {
        return Err(InferenceError::OutputRequestMismatch {
            name: name.to_string(),
            shape: shape.to_vec(),
            expected,
            requested,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_dynamic() {
        assert!(is_dynamic(-1));
        assert!(is_dynamic(0));
        assert!(!is_dynamic(1));
        assert!(!is_dynamic(16000));
    }

    #[test]
    fn test_element_count() {
        assert_eq!(element_count(&[1, 16000]), 16000);
        assert_eq!(element_count(&[2, 3, 4]), 24);
        assert_eq!(element_count(&[-1, 16000]), 16000);
        assert_eq!(element_count(&[-1, -1]), 1);
        assert_eq!(element_count(&[]), 1);
    }

    #[test]
    fn test_has_dynamic_dims() {
        assert!(has_dynamic_dims(&[-1, 16000]));
        assert!(has_dynamic_dims(&[1, 0]));
        assert!(!has_dynamic_dims(&[1, 16000]));
        assert!(!has_dynamic_dims(&[]));
    }

    #[test]
    fn test_bound_shape() {
        assert_eq!(bound_shape(&[-1, 16000]), vec![1, 16000]);
        assert_eq!(bound_shape(&[1, 2]), vec![1, 2]);
        assert_eq!(bound_shape(&[-1, -1, 3]), vec![1, 1, 3]);
    }

    #[test]
    fn test_validate_input_len() {
        assert!(validate_input_len(16000, &[1, 16000], "x").is_ok());
        assert!(validate_input_len(16000, &[-1, 16000], "x").is_ok());
        assert!(validate_input_len(8000, &[1, 16000], "x").is_err());
        assert!(validate_input_len(0, &[1, 16000], "x").is_err());
    }

    #[test]
    fn test_validate_input_len_error_details() {
        let err = validate_input_len(8000, &[1, 16000], "x").unwrap_err();
        match err {
            InferenceError::InputShapeMismatch {
                name,
                shape,
                expected,
                actual,
            } => {
                assert_eq!(name, "x");
                assert_eq!(shape, vec![1, 16000]);
                assert_eq!(expected, 16000);
                assert_eq!(actual, 8000);
            }
            other => panic!("expected InputShapeMismatch, got: {other}"),
        }
    }

    #[test]
    fn test_validate_expected_output_len_concrete() {
        assert!(validate_expected_output_len(2, &[1, 2], "logits").is_ok());
        assert!(validate_expected_output_len(4, &[1, 2], "logits").is_err());
    }

    #[test]
    fn test_validate_expected_output_len_dynamic_defers() {
        // Dynamic output shapes cannot be checked up front.
        assert!(validate_expected_output_len(7, &[-1, 2], "logits").is_ok());
    }
}
