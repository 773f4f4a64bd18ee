use std::fmt;
use std::str::FromStr;

/// The seven lesion classes, in the order of the model's output scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Bkl,
    Bcc,
    Akiec,
    Vasc,
    Nv,
    Mel,
    Df,
}

impl Category {
    pub const COUNT: usize = 7;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Bkl,
        Category::Bcc,
        Category::Akiec,
        Category::Vasc,
        Category::Nv,
        Category::Mel,
        Category::Df,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            Category::Bkl => "bkl",
            Category::Bcc => "bcc",
            Category::Akiec => "akiec",
            Category::Vasc => "vasc",
            Category::Nv => "nv",
            Category::Mel => "mel",
            Category::Df => "df",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lesion category code '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order_matches_model_output() {
        let codes: Vec<&str> = Category::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["bkl", "bcc", "akiec", "vasc", "nv", "mel", "df"]);

        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), Some(*category));
        }
        assert_eq!(Category::from_index(7), None);
    }

    #[test]
    fn test_parse_code() {
        assert_eq!("mel".parse::<Category>(), Ok(Category::Mel));
        assert_eq!(" AKIEC ".parse::<Category>(), Ok(Category::Akiec));
        assert!("melanoma".parse::<Category>().is_err());
    }
}
