use clap::error::ErrorKind;
use clap::Parser;
use config::Config;
use error::ClassifyError;
use image_classifier::interface::Classification;
use image_classifier::main::ImageClassifier;
use inference_engine::impl_tract_onnx::InferenceEngineTractOnnx;
use labels::LabelTable;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use preprocess::image::ResizeFilter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

mod config;
mod error;
mod image_classifier;
mod inference_engine;
mod labels;
mod library;
mod postprocess;
mod preprocess;
mod report;

/// Classify an image with a pretrained ImageNet network and print the most
/// probable labels.
#[derive(Parser, Debug)]
#[command(name = "imagenet-classifier", version)]
struct Cli {
    /// Path to the image to classify
    image: PathBuf,

    /// ONNX model to run [default: models/resnet50.onnx]
    #[arg(long)]
    model: Option<PathBuf>,

    /// Class index file mapping indices to names [default: models/imagenet_class_index.json]
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Number of predictions to report
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    top_k: Option<u32>,

    /// Interpolation used when stretching the image to the network input size
    #[arg(long, value_enum)]
    filter: Option<FilterArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum FilterArg {
    Nearest,
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl From<FilterArg> for ResizeFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResizeFilter::Nearest,
            FilterArg::Triangle => ResizeFilter::Triangle,
            FilterArg::CatmullRom => ResizeFilter::CatmullRom,
            FilterArg::Lanczos3 => ResizeFilter::Lanczos3,
        }
    }
}

impl Cli {
    fn into_config(self, mut config: Config) -> (Config, PathBuf) {
        if let Some(model) = self.model {
            config.model_path = model;
        }
        if let Some(labels) = self.labels {
            config.labels_path = labels;
        }
        if let Some(top_k) = self.top_k {
            config.top_k = top_k as usize;
        }
        if let Some(filter) = self.filter {
            config.resize_filter = filter.into();
        }
        (config, self.image)
    }
}

fn classify(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_path: &Path,
) -> Result<Vec<Classification>, ClassifyError> {
    let engine = Arc::new(InferenceEngineTractOnnx::new(
        &config.model_path,
        config.input_shape(),
        logger.clone(),
    )?);

    let labels = LabelTable::load(&config.labels_path)?;
    let _ = logger.info(&format!("loaded {} labels", labels.len()));

    let image_classifier = ImageClassifier::new(config, logger, engine, labels);
    image_classifier.classify_path(image_path)
}

fn run(config: Config, image_path: PathBuf) -> Result<(), ClassifyError> {
    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let mut stdout = std::io::stdout().lock();
    report::write_paths(
        &mut stdout,
        &config.model_path,
        &config.labels_path,
        &image_path,
    )?;

    let top_k = config.top_k;
    match classify(config, logger.clone(), &image_path) {
        Ok(classifications) => {
            report::write_predictions(&mut stdout, top_k, &classifications)?;
            Ok(())
        }
        Err(e) => {
            let _ = logger.error(&format!("{} failed: {}", e.stage(), e));
            Err(e)
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                    ExitCode::SUCCESS
                }
                _ => {
                    eprint!("{}", ClassifyError::Argument(e.render().to_string()));
                    ExitCode::from(1)
                }
            };
        }
    };

    let (config, image_path) = cli.into_config(Config::default());

    match run(config, image_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
