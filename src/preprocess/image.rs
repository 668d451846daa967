use crate::error::ClassifyError;
use image::{imageops, ImageReader, RgbImage};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    #[default]
    Nearest,
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl From<ResizeFilter> for imageops::FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => imageops::FilterType::Nearest,
            ResizeFilter::Triangle => imageops::FilterType::Triangle,
            ResizeFilter::CatmullRom => imageops::FilterType::CatmullRom,
            ResizeFilter::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

/// Decodes the file at `path` into 8-bit RGB. The format is sniffed from the
/// file contents; alpha and extra bit depth are dropped.
pub fn load_image(path: &Path) -> Result<RgbImage, ClassifyError> {
    let decode = || -> Result<RgbImage, image::ImageError> {
        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(image.to_rgb8())
    };

    decode().map_err(|source| ClassifyError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Stretches `image` to exactly `width` x `height`, ignoring aspect ratio.
pub fn resize(image: &RgbImage, width: u32, height: u32, filter: ResizeFilter) -> RgbImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }

    imageops::resize(image, width, height, filter.into())
}
