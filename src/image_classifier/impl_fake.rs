use crate::image_classifier::device::Device;
use crate::image_classifier::interface::ImageClassifier;
use crate::lesion::category::Category;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hash::{DefaultHasher, Hash, Hasher};

enum Behavior {
    FromPixels,
    Fixed(Vec<f32>),
    Fail(String),
}

/// Stands in for a real model. By default the scores are derived from the
/// image pixels, so the same image always gets the same scores.
pub struct ImageClassifierFake {
    behavior: Behavior,
}

impl ImageClassifierFake {
    pub fn new() -> Self {
        Self {
            behavior: Behavior::FromPixels,
        }
    }

    pub fn with_logits(logits: Vec<f32>) -> Self {
        Self {
            behavior: Behavior::Fixed(logits),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            behavior: Behavior::Fail(message.to_string()),
        }
    }

    fn pixel_logits(
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let rgb = image.to_rgb8();
        let mut hasher = DefaultHasher::new();
        rgb.dimensions().hash(&mut hasher);
        rgb.as_raw().hash(&mut hasher);

        let mut rng = StdRng::seed_from_u64(hasher.finish());
        let score_dist = Uniform::new(-4.0f32, 4.0)?;

        Ok((0..Category::COUNT)
            .map(|_| score_dist.sample(&mut rng))
            .collect())
    }
}

impl Default for ImageClassifierFake {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn logits(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        match &self.behavior {
            Behavior::FromPixels => Self::pixel_logits(image),
            Behavior::Fixed(logits) => Ok(logits.clone()),
            Behavior::Fail(message) => Err(message.clone().into()),
        }
    }

    fn device(&self) -> Device {
        Device::Cpu
    }
}
