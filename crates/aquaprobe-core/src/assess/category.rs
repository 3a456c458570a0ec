use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative band of a safety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityCategory {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl QualityCategory {
    /// Lower bound (inclusive) of each band, best first.
    pub const BANDS: [(u8, QualityCategory); 4] = [
        (90, QualityCategory::Excellent),
        (75, QualityCategory::Good),
        (60, QualityCategory::Fair),
        (45, QualityCategory::Poor),
    ];

    pub fn from_score(score: u8) -> QualityCategory {
        Self::BANDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, category)| *category)
            .unwrap_or(QualityCategory::VeryPoor)
    }
}

impl fmt::Display for QualityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityCategory::Excellent => write!(f, "Excellent"),
            QualityCategory::Good => write!(f, "Good"),
            QualityCategory::Fair => write!(f, "Fair"),
            QualityCategory::Poor => write!(f, "Poor"),
            QualityCategory::VeryPoor => write!(f, "Very Poor"),
        }
    }
}
