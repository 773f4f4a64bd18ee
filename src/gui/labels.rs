use crate::image_classifier::interface::Classification;
use crate::lesion::metadata::{metadata, Language};
use crate::report::format_percentage;
use std::path::PathBuf;

/// What the result panel currently shows. Kept so a language switch can
/// re-render it without running the model again.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Empty,
    Classified(Classification),
    MissingInput(PathBuf),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFields {
    pub result: String,
    pub confidence: String,
    pub danger: String,
}

impl ResultFields {
    pub fn render(outcome: &Outcome, language: Language) -> Self {
        let (result_prefix, confidence_prefix, danger_prefix) = match language {
            Language::Vietnamese => ("Kết quả", "Độ tin cậy", "Mức độ nguy hiểm"),
            Language::English => ("Result", "Confidence", "Danger Level"),
        };

        let (result, confidence, danger) = match outcome {
            Outcome::Classified(classification) => {
                let entry = metadata(classification.category);
                (
                    entry.name(language).to_string(),
                    format_percentage(classification.confidence),
                    entry.danger_label(language).to_string(),
                )
            }
            Outcome::Empty => (not_available(language).to_string(), "-".into(), "-".into()),
            Outcome::MissingInput(_) => (
                match language {
                    Language::Vietnamese => "Không tìm thấy tệp ảnh.",
                    Language::English => "Image file not found.",
                }
                .to_string(),
                "-".into(),
                "-".into(),
            ),
            Outcome::Failed => (
                match language {
                    Language::Vietnamese => "Lỗi khi dự đoán.",
                    Language::English => "Error in prediction.",
                }
                .to_string(),
                "-".into(),
                "-".into(),
            ),
        };

        Self {
            result: format!("{}: {}", result_prefix, result),
            confidence: format!("{}: {}", confidence_prefix, confidence),
            danger: format!("{}: {}", danger_prefix, danger),
        }
    }
}

fn not_available(language: Language) -> &'static str {
    match language {
        Language::Vietnamese => "Chưa có",
        Language::English => "Not available",
    }
}

pub fn window_title(language: Language) -> &'static str {
    match language {
        Language::Vietnamese => "Chẩn đoán ung thư da",
        Language::English => "Skin Cancer Diagnosis",
    }
}

pub fn drop_hint(language: Language) -> &'static str {
    match language {
        Language::Vietnamese => "Thả ảnh vào đây hoặc nhấn 'Chọn ảnh'",
        Language::English => "Drop an image here or click 'Select Image'",
    }
}

pub fn select_button(language: Language) -> &'static str {
    match language {
        Language::Vietnamese => "Chọn ảnh từ máy",
        Language::English => "Select Image",
    }
}

pub fn info_button(language: Language) -> &'static str {
    match language {
        Language::Vietnamese => "Thông tin loại bệnh",
        Language::English => "Disease Info",
    }
}

/// Names the language the button switches to.
pub fn language_button(language: Language) -> &'static str {
    match language {
        Language::Vietnamese => "Tiếng Anh (English)",
        Language::English => "Vietnamese (Tiếng Việt)",
    }
}

pub fn info_title(language: Language) -> &'static str {
    match language {
        Language::Vietnamese => "🧾 Thông tin chi tiết các loại bệnh",
        Language::English => "🧾 Disease Information",
    }
}

pub fn danger_heading(language: Language) -> &'static str {
    match language {
        Language::Vietnamese => "⚠ Mức độ nguy hiểm:",
        Language::English => "⚠ Danger Level:",
    }
}

pub fn browser_title(language: Language) -> &'static str {
    match language {
        Language::Vietnamese => "Chọn ảnh",
        Language::English => "Select Image",
    }
}
