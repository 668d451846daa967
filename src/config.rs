use crate::preprocess::image::ResizeFilter;
use crate::preprocess::tensor::Normalization;
use chrono::Offset;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub input_width: u32,
    pub input_height: u32,
    pub normalization: Normalization,
    pub resize_filter: ResizeFilter,
    pub top_k: usize,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/resnet50.onnx"),
            labels_path: PathBuf::from("models/imagenet_class_index.json"),
            input_width: 224,
            input_height: 224,
            normalization: Normalization::IMAGENET,
            resize_filter: ResizeFilter::Nearest,
            top_k: 5,
            logger_timezone: local_offset(),
        }
    }
}

impl Config {
    /// `[batch, channels, height, width]` the engine is fed.
    pub fn input_shape(&self) -> [usize; 4] {
        [1, 3, self.input_height as usize, self.input_width as usize]
    }
}

fn local_offset() -> chrono::FixedOffset {
    chrono::Local::now().offset().fix()
}
