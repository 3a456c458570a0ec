pub mod category;
pub mod contamination;
pub mod details;
pub mod outcome;
pub mod recommend;
pub mod salinity;
pub mod scoring;

pub use category::QualityCategory;
pub use contamination::ContaminationType;
pub use outcome::{AssessmentResult, BatchResult, DetailEntry, DetailStatus, SampleAssessment};

use crate::model::WaterSample;
use crate::thresholds::schema::ThresholdTable;

/// Run every sub-function over one sample and assemble the result.
///
/// The sub-functions are independent apart from the category, which is
/// derived from the score alone.
pub fn assess_sample(sample: &WaterSample, table: &ThresholdTable) -> AssessmentResult {
    let classification = contamination::classify(sample);
    let breakdown = scoring::score(sample, table);
    let quality_category = QualityCategory::from_score(breakdown.score);

    tracing::debug!(
        score = breakdown.score,
        category = %quality_category,
        contamination = %classification.contamination_type,
        "sample evaluated"
    );

    AssessmentResult {
        contamination_type: classification.contamination_type,
        contamination_reason: classification.reason,
        salinity_level: salinity::estimate(sample),
        safety_score: breakdown.score,
        quality_category,
        recommendations: recommend::generate(sample, table),
        details: details::render(sample, table),
        penalties: breakdown.penalties,
    }
}
