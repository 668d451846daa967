use crate::config::Config;
use crate::error::ClassifyError;
use crate::image_classifier::interface::Classification;
use crate::inference_engine::interface::InferenceEngine;
use crate::labels::LabelTable;
use crate::library::logger::interface::Logger;
use crate::postprocess::{softmax, top_k};
use crate::preprocess::image::{load_image, resize};
use crate::preprocess::tensor::image_to_tensor;
use image::RgbImage;
use std::path::Path;
use std::sync::Arc;

/// Loader -> Resizer -> Normalizer -> engine -> Postprocessor, with the label
/// table consulted only when naming the winners.
pub struct ImageClassifier {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    engine: Arc<dyn InferenceEngine + Send + Sync>,
    labels: LabelTable,
}

impl ImageClassifier {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        engine: Arc<dyn InferenceEngine + Send + Sync>,
        labels: LabelTable,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("classifier"),
            engine,
            labels,
        }
    }

    pub fn classify_path(&self, path: &Path) -> Result<Vec<Classification>, ClassifyError> {
        let image = load_image(path)?;
        let _ = self.logger.info(&format!(
            "decoded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        ));

        self.classify(&image)
    }

    pub fn classify(&self, image: &RgbImage) -> Result<Vec<Classification>, ClassifyError> {
        let resized = resize(
            image,
            self.config.input_width,
            self.config.input_height,
            self.config.resize_filter,
        );
        let _ = self.logger.info(&format!(
            "resized to {}x{}",
            resized.width(),
            resized.height()
        ));

        let input = image_to_tensor(&resized, &self.config.normalization);
        let _ = self
            .logger
            .info(&format!("input tensor shape {:?}", input.shape()));

        let logits = self.engine.infer(&input)?;
        if logits.is_empty() {
            return Err(ClassifyError::Inference(
                "model returned no class scores".to_string(),
            ));
        }
        let _ = self
            .logger
            .info(&format!("received {} class scores", logits.len()));

        let probabilities = softmax(&logits);

        let classifications = top_k(&probabilities, self.config.top_k)
            .into_iter()
            .map(|index| Classification {
                index,
                label: self.labels.label(index),
                confidence: probabilities[index],
            })
            .collect::<Vec<_>>();

        if let Some(best) = classifications.first() {
            let _ = self.logger.info(&format!(
                "best match is class {} ({})",
                best.index, best.label
            ));
        }

        Ok(classifications)
    }
}
