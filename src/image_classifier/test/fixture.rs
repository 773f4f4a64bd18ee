use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::impl_fake::LoggerFake;
use crate::predictor::Predictor;
use image::DynamicImage;
use std::path::PathBuf;
use std::sync::Arc;

pub struct Fixture {
    pub logger: LoggerFake,
    pub predictor: Predictor,
    pub dir: tempfile::TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_classifier(ImageClassifierFake::new())
    }

    pub fn with_classifier(classifier: impl ImageClassifier + 'static) -> Self {
        let logger = LoggerFake::new();
        let predictor = Predictor::new(Arc::new(classifier), Arc::new(logger.clone()));
        let dir = tempfile::tempdir().unwrap();

        Self {
            logger,
            predictor,
            dir,
        }
    }

    pub fn write_image(&self, name: &str, image: &DynamicImage) -> PathBuf {
        let path = self.dir.path().join(name);
        image.save(&path).unwrap();
        path
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }
}
