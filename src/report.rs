use crate::image_classifier::interface::Classification;
use crate::lesion::metadata::{metadata, Language};
use crate::predictor::PredictError;
use std::path::Path;

pub fn format_confidence(confidence: f32) -> String {
    format!("{:.4}", confidence)
}

pub fn format_percentage(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// The three lines the command line tool prints after a successful prediction.
pub fn cli_summary(path: &Path, classification: &Classification, language: Language) -> String {
    let name = metadata(classification.category).bilingual_name();
    let confidence = format_confidence(classification.confidence);
    match language {
        Language::Vietnamese => format!(
            "Ảnh: {}\nDự đoán: {}\nĐộ tự tin: {}",
            path.display(),
            name,
            confidence
        ),
        Language::English => format!(
            "Image: {}\nPrediction: {}\nConfidence: {}",
            path.display(),
            name,
            confidence
        ),
    }
}

/// User-facing message for a failed prediction. Failure details stay in the log.
pub fn cli_error(error: &PredictError, language: Language) -> String {
    match (error, language) {
        (PredictError::MissingInput { path }, Language::Vietnamese) => format!(
            "Lỗi: Không tìm thấy tệp ảnh tại đường dẫn '{}'. Vui lòng kiểm tra lại đường dẫn.",
            path.display()
        ),
        (PredictError::MissingInput { path }, Language::English) => format!(
            "Error: image file not found at '{}'. Please check the path.",
            path.display()
        ),
        (PredictError::PredictionFailed(_), Language::Vietnamese) => {
            "Đã xảy ra lỗi khi dự đoán.".to_string()
        }
        (PredictError::PredictionFailed(_), Language::English) => {
            "An error occurred during prediction.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesion::category::Category;
    use std::path::PathBuf;

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.87654), "0.8765");
        assert_eq!(format_confidence(1.0), "1.0000");
        assert_eq!(format_percentage(0.87654), "87.65%");
        assert_eq!(format_percentage(0.5), "50.00%");
    }

    #[test]
    fn test_cli_summary() {
        let classification = Classification {
            category: Category::Mel,
            confidence: 0.91234,
        };

        let summary = cli_summary(Path::new("Test/image.png"), &classification, Language::English);

        assert_eq!(
            summary,
            "Image: Test/image.png\nPrediction: Melanoma (Ung thư hắc tố)\nConfidence: 0.9123"
        );

        let summary =
            cli_summary(Path::new("Test/image.png"), &classification, Language::Vietnamese);
        assert!(summary.starts_with("Ảnh: Test/image.png\n"));
        assert!(summary.ends_with("Độ tự tin: 0.9123"));
    }

    #[test]
    fn test_cli_error_hides_details() {
        let missing = PredictError::MissingInput {
            path: PathBuf::from("nope.png"),
        };
        assert_eq!(
            cli_error(&missing, Language::Vietnamese),
            "Lỗi: Không tìm thấy tệp ảnh tại đường dẫn 'nope.png'. Vui lòng kiểm tra lại đường dẫn."
        );
        assert!(cli_error(&missing, Language::English).contains("'nope.png'"));

        let failed = PredictError::PredictionFailed("shape mismatch [1, 1000]".into());
        assert_eq!(
            cli_error(&failed, Language::English),
            "An error occurred during prediction."
        );
        assert!(!cli_error(&failed, Language::Vietnamese).contains("shape"));
    }
}
