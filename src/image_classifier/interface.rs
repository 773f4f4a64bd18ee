use crate::image_classifier::device::Device;
use crate::lesion::category::Category;
use image::DynamicImage;

/// One prediction: the most probable category and its probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub confidence: f32,
}

/// A loaded model together with its paired preprocessor.
///
/// Implementations are read-only after construction and are shared across
/// callers behind an `Arc`.
pub trait ImageClassifier: Send + Sync {
    /// Runs one forward pass and returns the raw, unnormalized class scores.
    fn logits(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;

    fn device(&self) -> Device;
}
