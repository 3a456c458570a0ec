pub mod builtin;
pub mod schema;

use crate::error::AquaprobeError;
use rust_decimal::Decimal;
use schema::{PenaltyDef, ThresholdTable};
use std::collections::HashSet;
use std::path::Path;

/// Load a threshold table from a JSON file.
pub fn load_table(path: &Path) -> Result<ThresholdTable, AquaprobeError> {
    let content = std::fs::read_to_string(path).map_err(|e| AquaprobeError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_table(&content, path)
}

/// Parse a threshold table from a JSON string.
pub fn parse_table(json: &str, source: &Path) -> Result<ThresholdTable, AquaprobeError> {
    let table: ThresholdTable =
        serde_json::from_str(json).map_err(|e| AquaprobeError::TableLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_table(&table)?;
    Ok(table)
}

/// Parse a threshold table from a JSON string (no file path context).
pub fn parse_table_str(json: &str) -> Result<ThresholdTable, AquaprobeError> {
    let table: ThresholdTable = serde_json::from_str(json).map_err(AquaprobeError::Json)?;
    validate_table(&table)?;
    Ok(table)
}

/// Validate that a threshold table is well-formed.
pub fn validate_table(table: &ThresholdTable) -> Result<(), AquaprobeError> {
    if table.parameters.is_empty() {
        return Err(AquaprobeError::TableInvalid(
            "parameters must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for rule in &table.parameters {
        let key = rule.parameter.key();
        if !seen.insert(rule.parameter) {
            return Err(AquaprobeError::TableInvalid(format!(
                "parameter '{}' appears more than once",
                key
            )));
        }

        if rule.min.is_none() && rule.max.is_none() {
            return Err(AquaprobeError::TableInvalid(format!(
                "parameter '{}' needs a min or a max limit",
                key
            )));
        }

        if let (Some(min), Some(max)) = (rule.min, rule.max) {
            if min > max {
                return Err(AquaprobeError::TableInvalid(format!(
                    "parameter '{}' has min {} above max {}",
                    key, min, max
                )));
            }
        }

        if let Some(critical) = rule.critical_above {
            match rule.max {
                Some(max) if critical >= max => {}
                Some(max) => {
                    return Err(AquaprobeError::TableInvalid(format!(
                        "parameter '{}' has critical_above {} below max {}",
                        key, critical, max
                    )));
                }
                None => {
                    return Err(AquaprobeError::TableInvalid(format!(
                        "parameter '{}' sets critical_above without a max limit",
                        key
                    )));
                }
            }
        }

        if let Some(ref penalty) = rule.penalty {
            validate_penalty(key, penalty)?;
        }
    }

    let mut sources = HashSet::new();
    for sp in &table.source_penalties {
        if !sources.insert(sp.source) {
            return Err(AquaprobeError::TableInvalid(format!(
                "source '{}' appears more than once",
                sp.source.key()
            )));
        }
        if sp.points < Decimal::ZERO {
            return Err(AquaprobeError::TableInvalid(format!(
                "source '{}' has negative points",
                sp.source.key()
            )));
        }
    }

    Ok(())
}

fn validate_penalty(key: &str, penalty: &PenaltyDef) -> Result<(), AquaprobeError> {
    let negative = |name: &str| {
        AquaprobeError::TableInvalid(format!(
            "parameter '{}' has a negative penalty {}",
            key, name
        ))
    };

    match penalty {
        PenaltyDef::Flat { points } => {
            if *points < Decimal::ZERO {
                return Err(negative("points"));
            }
        }
        PenaltyDef::Stepped {
            step,
            points_per_step,
            cap,
            ..
        } => {
            if *step <= Decimal::ZERO {
                return Err(AquaprobeError::TableInvalid(format!(
                    "parameter '{}' has a non-positive step",
                    key
                )));
            }
            if *points_per_step < Decimal::ZERO {
                return Err(negative("points_per_step"));
            }
            if cap.is_some_and(|c| c < Decimal::ZERO) {
                return Err(negative("cap"));
            }
        }
        PenaltyDef::Linear { factor, cap, .. } => {
            if *factor < Decimal::ZERO {
                return Err(negative("factor"));
            }
            if cap.is_some_and(|c| c < Decimal::ZERO) {
                return Err(negative("cap"));
            }
        }
    }

    Ok(())
}
