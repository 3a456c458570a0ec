pub mod assess;
pub mod error;
pub mod model;
pub mod thresholds;

use assess::outcome::{AssessmentResult, BatchResult, SampleAssessment};
use error::AquaprobeError;
use model::{SampleRecord, WaterSample};
use serde::Deserialize;
use thresholds::schema::ThresholdTable;

/// Evaluate a sample against the standard threshold table.
///
/// Pure and deterministic. No validation is performed; use [`assess`] to
/// reject out-of-range input first.
pub fn evaluate(sample: &WaterSample) -> AssessmentResult {
    evaluate_with(sample, thresholds::builtin::standard())
}

/// Evaluate a sample against an explicit threshold table.
pub fn evaluate_with(sample: &WaterSample, table: &ThresholdTable) -> AssessmentResult {
    assess::assess_sample(sample, table)
}

/// Validate a sample, then evaluate it.
pub fn assess(
    sample: &WaterSample,
    table: &ThresholdTable,
) -> Result<AssessmentResult, AquaprobeError> {
    sample.validate("sample")?;
    Ok(evaluate_with(sample, table))
}

/// Main API entry point: validate and evaluate every record of an input file.
///
/// Fails on the first invalid record, naming it.
pub fn assess_batch(
    records: &[SampleRecord],
    table: &ThresholdTable,
) -> Result<BatchResult, AquaprobeError> {
    if records.is_empty() {
        return Err(AquaprobeError::SampleParse("no samples in input".into()));
    }

    tracing::info!(
        samples = records.len(),
        table = %table.name,
        "assessing samples"
    );

    let mut samples = Vec::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let sample_id = record.label(position);
        record.sample.validate(&sample_id)?;
        samples.push(SampleAssessment {
            assessment: evaluate_with(&record.sample, table),
            sample_id,
        });
    }

    Ok(BatchResult {
        threshold_table: table.name.clone(),
        samples,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SampleInput {
    Many(Vec<SampleRecord>),
    One(SampleRecord),
}

/// Parse samples from JSON: a single sample object or an array of them.
pub fn parse_samples(json: &str) -> Result<Vec<SampleRecord>, AquaprobeError> {
    let input: SampleInput = serde_json::from_str(json).map_err(|e| {
        AquaprobeError::SampleParse(format!(
            "{e}. Expected a sample object or an array of samples with quoted decimal values"
        ))
    })?;
    Ok(match input {
        SampleInput::Many(records) => records,
        SampleInput::One(record) => vec![record],
    })
}
