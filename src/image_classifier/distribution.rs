use crate::image_classifier::interface::Classification;
use crate::lesion::category::Category;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistributionError {
    #[error("expected {expected} class scores, model produced {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("model produced a non-finite class score")]
    NonFinite,
}

/// Softmax probabilities over the seven categories, indexed like `Category::ALL`.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    probabilities: [f32; Category::COUNT],
}

impl Distribution {
    pub fn from_logits(logits: &[f32]) -> Result<Self, DistributionError> {
        if logits.len() != Category::COUNT {
            return Err(DistributionError::WrongLength {
                expected: Category::COUNT,
                actual: logits.len(),
            });
        }
        if logits.iter().any(|score| !score.is_finite()) {
            return Err(DistributionError::NonFinite);
        }

        let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mut probabilities = [0.0f32; Category::COUNT];
        let mut total = 0.0f32;
        for (probability, &score) in probabilities.iter_mut().zip(logits) {
            *probability = (score - max).exp();
            total += *probability;
        }
        for probability in probabilities.iter_mut() {
            *probability /= total;
        }

        Ok(Self { probabilities })
    }

    pub fn probabilities(&self) -> &[f32; Category::COUNT] {
        &self.probabilities
    }

    pub fn probability(&self, category: Category) -> f32 {
        self.probabilities[category.index()]
    }

    /// Index of the largest probability. Ties go to the lowest index.
    pub fn argmax(&self) -> usize {
        let mut best = 0;
        for (i, &probability) in self.probabilities.iter().enumerate().skip(1) {
            if probability > self.probabilities[best] {
                best = i;
            }
        }
        best
    }

    pub fn top(&self) -> Classification {
        let index = self.argmax();
        Classification {
            category: Category::ALL[index],
            confidence: self.probabilities[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_to_one() {
        let distribution =
            Distribution::from_logits(&[0.3, -1.2, 2.5, 0.0, 4.1, -3.3, 1.0]).unwrap();

        let sum: f32 = distribution.probabilities().iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(distribution
            .probabilities()
            .iter()
            .all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_top_is_argmax() {
        let distribution =
            Distribution::from_logits(&[0.3, -1.2, 2.5, 0.0, 4.1, -3.3, 1.0]).unwrap();

        let top = distribution.top();
        assert_eq!(top.category, Category::Nv);
        assert_eq!(distribution.argmax(), top.category.index());
        assert_eq!(distribution.probability(Category::Nv), top.confidence);
        assert!(distribution.probability(Category::Mel) < distribution.probability(Category::Bkl));

        let max = distribution
            .probabilities()
            .iter()
            .copied()
            .fold(f32::MIN, f32::max);
        assert_eq!(top.confidence, max);
    }

    #[test]
    fn test_large_logits_are_stable() {
        let shifted = Distribution::from_logits(&[1000.0, 1001.0, 999.0, 998.0, 1000.5, 990.0, 1002.0])
            .unwrap();
        let plain = Distribution::from_logits(&[0.0, 1.0, -1.0, -2.0, 0.5, -10.0, 2.0]).unwrap();

        for (a, b) in shifted.probabilities().iter().zip(plain.probabilities()) {
            assert!((a - b).abs() < 1e-5);
        }
        assert_eq!(shifted.top().category, Category::Df);
    }

    #[test]
    fn test_ties_pick_first() {
        let distribution = Distribution::from_logits(&[1.0; 7]).unwrap();

        let top = distribution.top();
        assert_eq!(top.category, Category::Bkl);
        assert!((top.confidence - 1.0 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            Distribution::from_logits(&[0.1, 0.2]),
            Err(DistributionError::WrongLength {
                expected: 7,
                actual: 2
            })
        );
        assert!(Distribution::from_logits(&[0.0; 1000]).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(
            Distribution::from_logits(&[0.0, f32::NAN, 0.0, 0.0, 0.0, 0.0, 0.0]),
            Err(DistributionError::NonFinite)
        );
        assert_eq!(
            Distribution::from_logits(&[0.0, 0.0, 0.0, f32::INFINITY, 0.0, 0.0, 0.0]),
            Err(DistributionError::NonFinite)
        );
    }
}
