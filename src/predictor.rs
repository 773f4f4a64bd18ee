use crate::config::{Backend, Config};
use crate::image_classifier::device::Device;
use crate::image_classifier::distribution::Distribution;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("image file not found: {}", path.display())]
    MissingInput { path: PathBuf },
    #[error("prediction failed")]
    PredictionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PredictError {
    fn failed(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        PredictError::PredictionFailed(error.into())
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, PredictError::MissingInput { .. })
    }
}

/// Maps one image to a lesion category and a confidence, using a model that
/// was loaded once and is shared read-only between calls.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn ImageClassifier + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Predictor {
    pub fn new(
        classifier: Arc<dyn ImageClassifier + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            classifier,
            logger: logger.with_namespace("predictor"),
        }
    }

    /// Builds the backend named in the config. For tract this loads the model
    /// directory; any failure here is fatal for the caller.
    pub fn load(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let classifier: Arc<dyn ImageClassifier + Send + Sync> = match config.backend {
            Backend::TractOnnx => Arc::new(ImageClassifierTractOnnx::load(
                &config.model_dir,
                config.device_preference,
                logger.clone(),
            )?),
            Backend::Fake => {
                logger.info("using the fake classifier, predictions are not medical output")?;
                Arc::new(ImageClassifierFake::new())
            }
        };

        Ok(Self::new(classifier, logger))
    }

    pub fn device(&self) -> Device {
        self.classifier.device()
    }

    pub fn predict_path(&self, path: impl AsRef<Path>) -> Result<Classification, PredictError> {
        let path = path.as_ref();
        let result = read_image(path).and_then(|image| self.predict_image(&image));
        match &result {
            Ok(classification) => {
                let _ = self.logger.info(&format!(
                    "{}: {} ({:.4})",
                    path.display(),
                    classification.category,
                    classification.confidence
                ));
            }
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("{}: {}", path.display(), error_chain(e)));
            }
        }
        result
    }

    pub fn predict_image(&self, image: &DynamicImage) -> Result<Classification, PredictError> {
        Ok(self.distribution(image)?.top())
    }

    pub fn distribution(&self, image: &DynamicImage) -> Result<Distribution, PredictError> {
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        let logits = self
            .classifier
            .logits(&rgb)
            .map_err(PredictError::PredictionFailed)?;
        Distribution::from_logits(&logits).map_err(PredictError::failed)
    }

    pub fn distribution_for_path(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Distribution, PredictError> {
        self.distribution(&read_image(path.as_ref())?)
    }
}

fn read_image(path: &Path) -> Result<DynamicImage, PredictError> {
    let missing = || PredictError::MissingInput {
        path: path.to_path_buf(),
    };

    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => {}
        _ => return Err(missing()),
    }

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => missing(),
        _ => PredictError::failed(e),
    })?;

    image::load_from_memory(&bytes).map_err(PredictError::failed)
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
