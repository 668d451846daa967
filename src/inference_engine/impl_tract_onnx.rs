use crate::error::ClassifyError;
use crate::inference_engine::interface::InferenceEngine;
use crate::library::logger::interface::Logger;
use crate::preprocess::tensor::InputTensor;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::*;

pub struct InferenceEngineTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceEngineTractOnnx {
    pub fn new(
        model_path: &Path,
        input_shape: [usize; 4],
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        let logger = logger.with_namespace("engine.tract");

        let model = Self::load(model_path, input_shape).map_err(|e| ClassifyError::Load {
            what: "model",
            path: model_path.to_path_buf(),
            message: format!("{:#}", e),
        })?;

        let _ = logger.info(&format!("loaded model {}", model_path.display()));

        Ok(Self { model, logger })
    }

    fn load(
        model_path: &Path,
        input_shape: [usize; 4],
    ) -> TractResult<SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>> {
        tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(0, f32::fact(input_shape).into())?
            .into_optimized()?
            .into_runnable()
    }
}

impl InferenceEngine for InferenceEngineTractOnnx {
    fn infer(&self, input: &InputTensor) -> Result<Vec<f32>, ClassifyError> {
        let inference_error = |e: TractError| ClassifyError::Inference(format!("{:#}", e));

        let tensor = Tensor::from_shape::<f32>(&input.shape(), input.as_slice())
            .map_err(inference_error)?;

        let started = Instant::now();
        let outputs = self
            .model
            .run(tvec!(tensor.into_tvalue()))
            .map_err(inference_error)?;
        let _ = self
            .logger
            .info(&format!("forward pass took {:?}", started.elapsed()));

        let output = outputs
            .first()
            .ok_or_else(|| ClassifyError::Inference("model produced no outputs".to_string()))?;
        let scores = output.to_array_view::<f32>().map_err(inference_error)?;

        row_zero(scores)
    }
}

/// Class scores of the single batch row; anything but `[1, N]` is rejected.
fn row_zero(scores: tract_ndarray::ArrayViewD<f32>) -> Result<Vec<f32>, ClassifyError> {
    match scores.shape() {
        &[1, _] => Ok(scores.iter().copied().collect()),
        shape => Err(ClassifyError::Inference(format!(
            "expected output of shape [1, num_classes], got {:?}",
            shape
        ))),
    }
}
