use crate::error::ClassifyError;
use crate::preprocess::tensor::InputTensor;

/// Runs a forward pass over one preprocessed image and returns the raw class
/// scores of batch row 0.
pub trait InferenceEngine {
    fn infer(&self, input: &InputTensor) -> Result<Vec<f32>, ClassifyError>;
}
