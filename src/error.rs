use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("{0}")]
    Argument(String),

    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to load {what} from {path}: {message}")]
    Load {
        what: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("failed to parse label file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ClassifyError {
    pub fn stage(&self) -> &'static str {
        match self {
            ClassifyError::Argument(_) => "arguments",
            ClassifyError::Decode { .. } => "image loader",
            ClassifyError::Load { .. } => "loader",
            ClassifyError::Inference(_) => "inference engine",
            ClassifyError::Parse { .. } => "label table",
            ClassifyError::Output(_) => "report",
        }
    }
}
