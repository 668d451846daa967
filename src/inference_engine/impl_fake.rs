use crate::error::ClassifyError;
use crate::inference_engine::interface::InferenceEngine;
use crate::preprocess::tensor::InputTensor;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct InferenceEngineFake {
    logits: Vec<f32>,
    expected_shape: [usize; 4],
    calls: AtomicUsize,
}

impl InferenceEngineFake {
    pub fn new(logits: Vec<f32>, expected_shape: [usize; 4]) -> Self {
        Self {
            logits,
            expected_shape,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn random(num_classes: usize, seed: u64, expected_shape: [usize; 4]) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let dist = Uniform::new(-8.0f32, 8.0f32).unwrap();
        let logits = (0..num_classes).map(|_| dist.sample(&mut rng)).collect();

        Self::new(logits, expected_shape)
    }

    pub fn logits(&self) -> &[f32] {
        &self.logits
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl InferenceEngine for InferenceEngineFake {
    fn infer(&self, input: &InputTensor) -> Result<Vec<f32>, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if input.shape() != self.expected_shape {
            return Err(ClassifyError::Inference(format!(
                "input shape mismatch: expected {:?}, got {:?}",
                self.expected_shape,
                input.shape()
            )));
        }

        Ok(self.logits.clone())
    }
}
