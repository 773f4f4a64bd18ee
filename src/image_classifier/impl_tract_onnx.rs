use crate::image_classifier::device::{Device, DevicePreference};
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::preprocessor::{ImagePreprocessor, PREPROCESSOR_FILE};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub const MODEL_FILE: &str = "model.onnx";

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    preprocessor: ImagePreprocessor,
    device: Device,
}

impl ImageClassifierTractOnnx {
    /// tract executes on the host CPU only.
    pub const ACCELERATOR_AVAILABLE: bool = false;

    pub fn load(
        model_dir: &Path,
        preference: DevicePreference,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("tract_onnx");

        let preprocessor = ImagePreprocessor::from_path(model_dir.join(PREPROCESSOR_FILE))?;
        let (height, width) = preprocessor.input_size();

        let device = Device::resolve(preference, Self::ACCELERATOR_AVAILABLE);
        if device.is_fallback(preference) {
            logger.error("accelerator requested but not available, running on cpu")?;
        }

        let model_path = model_dir.join(MODEL_FILE);
        let model = tract_onnx::onnx()
            .model_for_path(&model_path)
            .map_err(|e| format!("failed to load {}: {}", model_path.display(), e))?
            .with_input_fact(
                0,
                f32::fact([1, 3, height as usize, width as usize]).into(),
            )?
            .into_optimized()?
            .into_runnable()?;

        logger.info(&format!(
            "loaded {} ({}x{} input) on {}",
            model_path.display(),
            width,
            height,
            device
        ))?;

        Ok(Self {
            model,
            preprocessor,
            device,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn logits(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let input = self.preprocessor.to_tensor(image)?;

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;

        let output = outputs
            .first()
            .ok_or("model produced no outputs")?
            .to_array_view::<f32>()?;

        Ok(output.iter().copied().collect())
    }

    fn device(&self) -> Device {
        self.device
    }
}
