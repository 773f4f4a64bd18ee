use crate::image_classifier::device::DevicePreference;
use crate::lesion::metadata::Language;
use chrono::{Offset, Utc};
use std::path::PathBuf;

pub const BACKEND_ENV: &str = "SKIN_LESION_BACKEND";

/// Which `ImageClassifier` the front-ends build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// `model.onnx` from the model directory, run with tract.
    #[default]
    TractOnnx,
    /// Pixel-seeded scores, no model directory needed.
    Fake,
}

impl Backend {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tract" | "onnx" | "tract_onnx" => Some(Backend::TractOnnx),
            "fake" => Some(Backend::Fake),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model_dir: PathBuf,
    pub test_image_path: PathBuf,
    pub backend: Backend,
    pub device_preference: DevicePreference,
    pub language: Language,
    pub logger_timezone: chrono::FixedOffset,
}

impl Config {
    /// Defaults, with the backend overridable through `SKIN_LESION_BACKEND`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(backend) = lookup(BACKEND_ENV).as_deref().and_then(Backend::parse) {
            self.backend = backend;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("./Model"),
            test_image_path: PathBuf::from("Test/image.png"),
            backend: Backend::TractOnnx,
            device_preference: DevicePreference::Auto,
            language: Language::Vietnamese,
            logger_timezone: indochina_time(),
        }
    }
}

fn indochina_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(7 * 3600).unwrap_or_else(|| Utc.fix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend_is_tract() {
        assert_eq!(Config::default().backend, Backend::TractOnnx);
    }

    #[test]
    fn test_backend_override() {
        let config = Config::default().with_overrides(|key| {
            (key == BACKEND_ENV).then(|| " Fake ".to_string())
        });
        assert_eq!(config.backend, Backend::Fake);

        let config = Config::default().with_overrides(|_| Some("gpu-magic".to_string()));
        assert_eq!(config.backend, Backend::TractOnnx);

        let config = Config::default().with_overrides(|_| None);
        assert_eq!(config.backend, Backend::TractOnnx);
    }
}
