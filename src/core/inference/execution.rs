//! Synchronous inference execution.

use super::InferenceSession;
use crate::core::errors::InferenceError;
use crate::core::validation;
use ort::value::TensorRef;
use tracing::debug;

impl InferenceSession {
    /// Runs one synchronous inference call.
    ///
    /// `input` must hold exactly as many elements as the product of the
    /// declared input shape's concrete dimensions; dynamic dimensions are
    /// bound to 1 for the call. Both `input` and `expected_output_len` are
    /// validated before the engine is invoked, so a mismatched call has no
    /// side effect. The call blocks until the engine returns; there is no
    /// retry and no cancellation.
    ///
    /// The output tensor must be f32 and contain exactly
    /// `expected_output_len` elements, returned as a flat vector.
    pub fn run(
        &mut self,
        input: &[f32],
        expected_output_len: usize,
    ) -> Result<Vec<f32>, InferenceError> {
        validation::validate_input_len(input.len(), &self.input_shape, &self.input_name)?;
        validation::validate_expected_output_len(
            expected_output_len,
            &self.output_shape,
            &self.output_name,
        )?;

        let dims = validation::bound_shape(&self.input_shape);
        let input_tensor = TensorRef::from_array_view((dims, input)).map_err(|e| {
            InferenceError::invalid_input(format!(
                "failed to create input tensor for '{}': {}",
                self.input_name, e
            ))
        })?;

        debug!(
            model = %self.model_name,
            elements = input.len(),
            "running inference"
        );

        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .map_err(|e| {
                InferenceError::execution(
                    &self.model_name,
                    format!("forward pass with input '{}'", self.input_name),
                    e,
                )
            })?;

        let (_, data) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| {
                InferenceError::execution(
                    &self.model_name,
                    format!("failed to extract output tensor '{}' as f32", self.output_name),
                    e,
                )
            })?;

        if data.len() != expected_output_len {
            return Err(InferenceError::OutputSizeMismatch {
                name: self.output_name.clone(),
                expected: expected_output_len,
                actual: data.len(),
            });
        }

        Ok(data.to_vec())
    }
}
