use crate::lesion::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Vietnamese,
    English,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Vietnamese => Language::English,
            Language::English => Language::Vietnamese,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangerLevel {
    Benign,
    LowRisk,
    PreCancerous,
    MildCancer,
    VeryDangerous,
}

impl DangerLevel {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (DangerLevel::Benign, Language::English) => "Benign",
            (DangerLevel::Benign, Language::Vietnamese) => "Lành tính",
            (DangerLevel::LowRisk, Language::English) => "Low risk",
            (DangerLevel::LowRisk, Language::Vietnamese) => "Ít nguy hiểm",
            (DangerLevel::PreCancerous, Language::English) => "Pre-cancerous",
            (DangerLevel::PreCancerous, Language::Vietnamese) => "Tiền ung thư",
            (DangerLevel::MildCancer, Language::English) => "Mild cancer",
            (DangerLevel::MildCancer, Language::Vietnamese) => "Ung thư nhẹ",
            (DangerLevel::VeryDangerous, Language::English) => "Very dangerous",
            (DangerLevel::VeryDangerous, Language::Vietnamese) => "Rất nguy hiểm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMetadata {
    pub category: Category,
    pub name_english: &'static str,
    pub name_vietnamese: &'static str,
    pub danger: DangerLevel,
}

impl CategoryMetadata {
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.name_english,
            Language::Vietnamese => self.name_vietnamese,
        }
    }

    pub fn danger_label(&self, language: Language) -> &'static str {
        self.danger.label(language)
    }

    /// "English (Vietnamese)", as printed by the command line tool.
    pub fn bilingual_name(&self) -> String {
        format!("{} ({})", self.name_english, self.name_vietnamese)
    }
}

const METADATA: [CategoryMetadata; Category::COUNT] = [
    CategoryMetadata {
        category: Category::Bkl,
        name_english: "Benign keratosis-like lesions",
        name_vietnamese: "Tổn thương giống dày sừng lành tính",
        danger: DangerLevel::Benign,
    },
    CategoryMetadata {
        category: Category::Bcc,
        name_english: "Basal cell carcinoma",
        name_vietnamese: "Ung thư biểu mô tế bào đáy",
        danger: DangerLevel::MildCancer,
    },
    CategoryMetadata {
        category: Category::Akiec,
        name_english: "Actinic keratoses and intraepithelial carcinoma",
        name_vietnamese: "Dày sừng quang hóa và ung thư biểu mô tại chỗ",
        danger: DangerLevel::PreCancerous,
    },
    CategoryMetadata {
        category: Category::Vasc,
        name_english: "Vascular lesions",
        name_vietnamese: "Tổn thương mạch máu",
        danger: DangerLevel::LowRisk,
    },
    CategoryMetadata {
        category: Category::Nv,
        name_english: "Melanocytic nevi",
        name_vietnamese: "Nốt ruồi sắc tố",
        danger: DangerLevel::Benign,
    },
    CategoryMetadata {
        category: Category::Mel,
        name_english: "Melanoma",
        name_vietnamese: "Ung thư hắc tố",
        danger: DangerLevel::VeryDangerous,
    },
    CategoryMetadata {
        category: Category::Df,
        name_english: "Dermatofibroma",
        name_vietnamese: "U xơ da",
        danger: DangerLevel::Benign,
    },
];

pub fn metadata(category: Category) -> &'static CategoryMetadata {
    &METADATA[category.index()]
}

pub fn all_metadata() -> &'static [CategoryMetadata] {
    &METADATA
}
