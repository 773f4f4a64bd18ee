use image::{imageops, DynamicImage};
use serde::Deserialize;
use std::path::Path;
use tract_onnx::prelude::*;

pub const PREPROCESSOR_FILE: &str = "preprocessor_config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ImageSize {
    HeightWidth { height: u32, width: u32 },
    ShortestEdge { shortest_edge: u32 },
}

impl Default for ImageSize {
    fn default() -> Self {
        ImageSize::HeightWidth {
            height: 224,
            width: 224,
        }
    }
}

/// The paired image processor configuration shipped next to the model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreprocessorConfig {
    pub do_resize: bool,
    pub size: ImageSize,
    pub resample: u32,
    pub do_rescale: bool,
    pub rescale_factor: f32,
    pub do_normalize: bool,
    pub image_mean: Vec<f32>,
    pub image_std: Vec<f32>,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            do_resize: true,
            size: ImageSize::default(),
            resample: 2,
            do_rescale: true,
            rescale_factor: 1.0 / 255.0,
            do_normalize: true,
            image_mean: vec![0.5, 0.5, 0.5],
            image_std: vec![0.5, 0.5, 0.5],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreprocessor {
    config: PreprocessorConfig,
    height: u32,
    width: u32,
    mean: [f32; 3],
    std: [f32; 3],
}

impl ImagePreprocessor {
    pub fn new(
        config: PreprocessorConfig,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mean = channel_triple("image_mean", &config.image_mean)?;
        let std = channel_triple("image_std", &config.image_std)?;

        if std.iter().any(|value| *value == 0.0) {
            return Err("image_std entries must be non-zero".into());
        }

        let (height, width) = match config.size {
            ImageSize::HeightWidth { height, width } => (height, width),
            // An aspect-preserving resize needs a crop the model config does not describe.
            ImageSize::ShortestEdge { .. } => {
                return Err(
                    "size.shortest_edge is not supported, give size.height and size.width".into(),
                );
            }
        };
        if height == 0 || width == 0 {
            return Err(format!("invalid preprocessor size {}x{}", width, height).into());
        }

        Ok(Self {
            config,
            height,
            width,
            mean,
            std,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let config: PreprocessorConfig = serde_json::from_str(json)?;
        Self::new(config)
    }

    pub fn from_path(
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
    }

    pub fn config(&self) -> &PreprocessorConfig {
        &self.config
    }

    /// (height, width) of the tensor handed to the model.
    pub fn input_size(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    fn filter(&self) -> imageops::FilterType {
        match self.config.resample {
            0 => imageops::FilterType::Nearest,
            1 => imageops::FilterType::Lanczos3,
            3 => imageops::FilterType::CatmullRom,
            _ => imageops::FilterType::Triangle,
        }
    }

    pub fn resize_image(&self, image: &DynamicImage) -> DynamicImage {
        if !self.config.do_resize {
            return image.clone();
        }
        let (height, width) = self.input_size();
        if image.width() == width && image.height() == height {
            return image.clone();
        }
        image.resize_exact(width, height, self.filter())
    }

    fn normalize(&self, channel: usize, value: u8) -> f32 {
        let mut value = value as f32;
        if self.config.do_rescale {
            value *= self.config.rescale_factor;
        }
        if self.config.do_normalize {
            value = (value - self.mean[channel]) / self.std[channel];
        }
        value
    }

    /// Converts any image into the `[1, 3, H, W]` f32 tensor the model expects.
    pub fn to_tensor(
        &self,
        image: &DynamicImage,
    ) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
        let rgb = self.resize_image(image).to_rgb8();
        let (width, height) = rgb.dimensions();

        let tensor = tract_ndarray::Array4::from_shape_fn(
            (1, 3, height as usize, width as usize),
            |(_, c, y, x)| {
                let pixel = rgb.get_pixel(x as u32, y as u32);
                self.normalize(c, pixel[c])
            },
        );

        Ok(tensor.into_tensor())
    }
}

fn channel_triple(
    name: &str,
    values: &[f32],
) -> Result<[f32; 3], Box<dyn std::error::Error + Send + Sync>> {
    match values {
        [r, g, b] => Ok([*r, *g, *b]),
        _ => Err(format!("{} must have 3 entries, found {}", name, values.len()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, Rgb, Rgba, RgbaImage};

    fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut img = ImageBuffer::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_defaults_from_empty_config() {
        let preprocessor = ImagePreprocessor::from_json_str("{}").unwrap();

        assert_eq!(preprocessor.config(), &PreprocessorConfig::default());
        assert_eq!(preprocessor.input_size(), (224, 224));
    }

    #[test]
    fn test_parses_vit_config() {
        let json = r#"{
            "do_normalize": true,
            "do_rescale": true,
            "do_resize": true,
            "image_mean": [0.485, 0.456, 0.406],
            "image_processor_type": "ViTImageProcessor",
            "image_std": [0.229, 0.224, 0.225],
            "resample": 3,
            "rescale_factor": 0.00392156862745098,
            "size": {"height": 384, "width": 256}
        }"#;

        let preprocessor = ImagePreprocessor::from_json_str(json).unwrap();

        assert_eq!(preprocessor.input_size(), (384, 256));
        assert_eq!(preprocessor.config().resample, 3);
        assert_eq!(preprocessor.config().image_mean, vec![0.485, 0.456, 0.406]);
    }

    #[test]
    fn test_rejects_shortest_edge() {
        let err = ImagePreprocessor::from_json_str(r#"{"size": {"shortest_edge": 160}}"#)
            .unwrap_err();

        assert!(err.to_string().contains("shortest_edge"));
    }

    #[test]
    fn test_rejects_bad_mean_and_std() {
        assert!(ImagePreprocessor::from_json_str(r#"{"image_mean": [0.5, 0.5]}"#).is_err());
        assert!(ImagePreprocessor::from_json_str(r#"{"image_std": [0.5, 0.0, 0.5]}"#).is_err());
        assert!(
            ImagePreprocessor::from_json_str(r#"{"size": {"height": 0, "width": 224}}"#).is_err()
        );
        assert!(ImagePreprocessor::from_json_str("not json").is_err());
    }

    #[test]
    fn test_tensor_shape_and_channels() {
        let preprocessor = ImagePreprocessor::new(PreprocessorConfig::default()).unwrap();

        let tensor = preprocessor
            .to_tensor(&solid_rgb(100, 60, [255, 0, 0]))
            .unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);

        let slice = tensor.as_slice::<f32>().unwrap();
        // (1.0 - 0.5) / 0.5 for red, (0.0 - 0.5) / 0.5 for green and blue
        assert!((slice[0] - 1.0).abs() < 1e-6);
        assert!((slice[224 * 224] + 1.0).abs() < 1e-6);
        assert!((slice[2 * 224 * 224] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rescale_without_normalize() {
        let config = PreprocessorConfig {
            do_normalize: false,
            size: ImageSize::HeightWidth {
                height: 8,
                width: 8,
            },
            ..PreprocessorConfig::default()
        };
        let preprocessor = ImagePreprocessor::new(config).unwrap();

        let tensor = preprocessor
            .to_tensor(&solid_rgb(8, 8, [128, 128, 128]))
            .unwrap();
        let slice = tensor.as_slice::<f32>().unwrap();

        let expected = 128.0 / 255.0;
        assert!(slice.iter().all(|v| (v - expected).abs() < 1e-4));
    }

    #[test]
    fn test_grayscale_and_alpha_become_three_channels() {
        let preprocessor = ImagePreprocessor::new(PreprocessorConfig::default()).unwrap();

        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(32, 32, Luma([255])));
        let tensor = preprocessor.to_tensor(&gray).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
        let slice = tensor.as_slice::<f32>().unwrap();
        assert!((slice[0] - 1.0).abs() < 1e-6);
        assert!((slice[2 * 224 * 224] - 1.0).abs() < 1e-6);

        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(32, 32, Rgba([0, 0, 255, 0])));
        let tensor = preprocessor.to_tensor(&rgba).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
        let slice = tensor.as_slice::<f32>().unwrap();
        assert!((slice[0] + 1.0).abs() < 1e-6);
        assert!((slice[2 * 224 * 224] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_resize_keeps_source_size() {
        let config = PreprocessorConfig {
            do_resize: false,
            ..PreprocessorConfig::default()
        };
        let preprocessor = ImagePreprocessor::new(config).unwrap();

        let tensor = preprocessor
            .to_tensor(&solid_rgb(20, 10, [0, 0, 0]))
            .unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 10, 20]);
    }
}
