use image::RgbImage;

/// Per-channel statistics the network was trained with, in R, G, B order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Normalization {
    pub const IMAGENET: Normalization = Normalization {
        mean: [0.485, 0.456, 0.406],
        std: [0.229, 0.224, 0.225],
    };

    pub fn apply(&self, channel: usize, raw: u8) -> f32 {
        (raw as f32 / 255.0 - self.mean[channel]) / self.std[channel]
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::IMAGENET
    }
}

/// Batch of one planar (NCHW) f32 image.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    shape: [usize; 4],
    data: Vec<f32>,
}

impl InputTensor {
    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[cfg(test)]
    pub fn get(&self, channel: usize, y: usize, x: usize) -> f32 {
        let [_, _, height, width] = self.shape;
        self.data[channel * height * width + y * width + x]
    }
}

pub fn image_to_tensor(image: &RgbImage, normalization: &Normalization) -> InputTensor {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let plane = width * height;
    let mut data = vec![0.0f32; 3 * plane];

    for (x, y, pixel) in image.enumerate_pixels() {
        let offset = y as usize * width + x as usize;
        for c in 0..3 {
            data[c * plane + offset] = normalization.apply(c, pixel[c]);
        }
    }

    InputTensor {
        shape: [1, 3, height, width],
        data,
    }
}
