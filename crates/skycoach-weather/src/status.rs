use serde::{Deserialize, Serialize};

/// Recommendation tier derived from an activity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    NotRecommended,
    Caution,
    Recommended,
}

impl RecommendationStatus {
    const RECOMMENDED_FROM: i32 = 70;
    const CAUTION_FROM: i32 = 40;

    /// Classify a score. Lower bounds are inclusive.
    pub fn classify(score: i32) -> Self {
        if score >= Self::RECOMMENDED_FROM {
            Self::Recommended
        } else if score >= Self::CAUTION_FROM {
            Self::Caution
        } else {
            Self::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::Caution => "Caution",
            Self::NotRecommended => "Not Recommended",
        }
    }

    /// Style tag the presentation layer uses for the recommendation card
    pub fn style(&self) -> &'static str {
        match self {
            Self::Recommended => "recommendation-excellent",
            Self::Caution => "recommendation-caution",
            Self::NotRecommended => "recommendation-not-recommended",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Recommended => "✅",
            Self::Caution => "⚠️",
            Self::NotRecommended => "❌",
        }
    }
}

/// (label, style, icon) triple for a score
pub fn classify(score: i32) -> (&'static str, &'static str, &'static str) {
    let status = RecommendationStatus::classify(score);
    (status.label(), status.style(), status.icon())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive_upward() {
        assert_eq!(RecommendationStatus::classify(70), RecommendationStatus::Recommended);
        assert_eq!(RecommendationStatus::classify(69), RecommendationStatus::Caution);
        assert_eq!(RecommendationStatus::classify(40), RecommendationStatus::Caution);
        assert_eq!(RecommendationStatus::classify(39), RecommendationStatus::NotRecommended);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(RecommendationStatus::classify(100), RecommendationStatus::Recommended);
        assert_eq!(RecommendationStatus::classify(0), RecommendationStatus::NotRecommended);
        assert_eq!(RecommendationStatus::classify(-5), RecommendationStatus::NotRecommended);
        assert_eq!(RecommendationStatus::classify(i32::MAX), RecommendationStatus::Recommended);
    }

    #[test]
    fn test_classification_is_monotonic() {
        let mut previous = RecommendationStatus::classify(-1);
        for score in 0..=100 {
            let current = RecommendationStatus::classify(score);
            assert!(current >= previous, "tier dropped at {score}");
            previous = current;
        }
    }

    #[test]
    fn test_triples() {
        assert_eq!(classify(85), ("Recommended", "recommendation-excellent", "✅"));
        assert_eq!(classify(55), ("Caution", "recommendation-caution", "⚠️"));
        assert_eq!(
            classify(10),
            ("Not Recommended", "recommendation-not-recommended", "❌")
        );
    }
}
