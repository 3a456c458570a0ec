use crate::assess::category::QualityCategory;
use crate::assess::contamination::ContaminationType;
use crate::model::{Parameter, ParameterGroup, Unit};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display status of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailStatus {
    Normal,
    Warning,
    Critical,
}

/// One per-parameter display row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailEntry {
    pub parameter: Parameter,
    pub group: ParameterGroup,
    pub label: String,
    pub value: Decimal,
    pub unit: Unit,
    /// Value with its unit, e.g. "300 mg/L".
    pub display_value: String,
    pub description: String,
    pub status: DetailStatus,
}

/// A single deduction from the safety score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedPenalty {
    /// Parameter key or `source:<type>`.
    pub subject: String,
    pub points: Decimal,
    pub reason: String,
}

/// Full assessment of one water sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub contamination_type: ContaminationType,
    /// Which classifier rule matched.
    pub contamination_reason: String,
    /// Estimated salinity in parts per thousand.
    pub salinity_level: Decimal,
    /// 0 to 100, higher is safer.
    pub safety_score: u8,
    pub quality_category: QualityCategory,
    /// Advisories in evaluation order. Never empty.
    pub recommendations: Vec<String>,
    pub details: Vec<DetailEntry>,
    /// Every deduction that contributed to the score.
    pub penalties: Vec<AppliedPenalty>,
}

/// Assessment of one labelled sample in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleAssessment {
    pub sample_id: String,
    pub assessment: AssessmentResult,
}

/// Assessment results across all samples of an input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub threshold_table: String,
    pub samples: Vec<SampleAssessment>,
}
