use aquaprobe_core::error::AquaprobeError;
use aquaprobe_core::model::{Parameter, Unit};
use aquaprobe_core::thresholds::builtin;
use aquaprobe_core::thresholds::schema::ThresholdTable;
use std::path::Path;

pub fn list() -> Result<(), AquaprobeError> {
    println!("Available threshold tables:\n");
    for name in builtin::PRESETS {
        let table = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, table.name, table.version);
        if let Some(ref desc) = table.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str, file: Option<&Path>) -> Result<(), AquaprobeError> {
    let table = match file {
        Some(path) => aquaprobe_core::thresholds::load_table(path)?,
        None => builtin::load_preset(preset)?,
    };
    print_table(&table);
    Ok(())
}

fn print_table(table: &ThresholdTable) {
    println!("{} (version {})\n", table.name, table.version);

    if let Some(ref desc) = table.description {
        println!("{}\n", desc);
    }

    println!("Scoring starts at 100. Each violated limit deducts points independently;");
    println!("the total is clamped to 0-100 and rounded. Limits are strict: a value");
    println!("equal to a limit does not violate it.\n");

    let max_name = table
        .parameters
        .iter()
        .map(|r| r.parameter.key().len())
        .max()
        .unwrap_or(20);

    println!(
        "  {:<width$}  {:<8}  {:<8}  {:<9}  {:<8}  Penalty",
        "Parameter",
        "Min",
        "Max",
        "Critical",
        "Unit",
        width = max_name
    );
    println!("  {}", "-".repeat(max_name + 2 + 40 + 30));

    for rule in &table.parameters {
        let unit = match rule.parameter.unit() {
            Unit::None => "-".to_string(),
            u => u.to_string(),
        };
        let penalty = match &rule.penalty {
            Some(p) => p.describe(),
            None => rule.note.clone().unwrap_or_else(|| "none".into()),
        };
        println!(
            "  {:<width$}  {:<8}  {:<8}  {:<9}  {:<8}  {}",
            rule.parameter.key(),
            cell(rule.min),
            cell(rule.max),
            cell(rule.critical_above),
            unit,
            penalty,
            width = max_name
        );
    }

    if !table.source_penalties.is_empty() {
        println!("\nSource adjustments:");
        for sp in &table.source_penalties {
            println!("  {:<8} -{}", sp.source.key(), sp.points);
        }
    }

    println!();
}

fn cell(value: Option<impl std::fmt::Display>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

pub fn schema() -> Result<(), AquaprobeError> {
    let keys: Vec<&str> = Parameter::ALL.iter().map(|p| p.key()).collect();
    print!(
        r#"JSON Threshold Table Schema
===========================

A threshold table defines, per parameter, the limits a water sample should
stay within and how many safety-score points a violation costs. The same
limits decide the warning/critical status shown for each parameter and
which treatment recommendations are given.

Top-level fields:
  name              (string, required)  Human-readable name of the table
  description       (string, optional)  What this table is for
  version           (string, required)  Version identifier (e.g., "1.0")
  parameters        (array, required)   Parameter rules (see below)
  source_penalties  (array, optional)   Fixed deductions per source type:
                                        {{ "source": "river", "points": "5" }}
                                        Sources: tap, well, river, other

Each rule in the "parameters" array:
  parameter       (string, required)  Parameter key, one of:
                                      {keys}
  min             (string, optional)  Values strictly below this violate
  max             (string, optional)  Values strictly above this violate
                                      (at least one of min/max is required)
  critical_above  (string, optional)  Values strictly above this are shown
                                      as critical. Must be >= max.
  penalty         (object, optional)  Score deduction when violated. Omit
                                      for display-only limits.
  note            (string, optional)  Free-form remark.

Penalty kinds:
  {{ "kind": "flat", "points": "15" }}
      Deduct a fixed number of points.
  {{ "kind": "stepped", "origin": "500", "step": "100", "points_per_step": "5", "cap": "20" }}
      Deduct floor((value - origin) / step) x points_per_step, at most cap.
  {{ "kind": "linear", "factor": "30", "from_limit": false, "cap": "40" }}
      Deduct value x factor, at most cap. With "from_limit": true the
      distance past the violated limit is used instead of the raw value.

Example:
{{
  "name": "Strict private well",
  "version": "1.0",
  "parameters": [
    {{ "parameter": "ph", "min": "6.5", "max": "8.5",
      "penalty": {{ "kind": "flat", "points": "20" }} }},
    {{ "parameter": "nitrates", "max": "10",
      "penalty": {{ "kind": "linear", "factor": "3", "from_limit": true, "cap": "25" }} }},
    {{ "parameter": "bacterialContamination", "max": "0", "critical_above": "10",
      "penalty": {{ "kind": "stepped", "origin": "0", "step": "1", "points_per_step": "5", "cap": "50" }} }}
  ],
  "source_penalties": [ {{ "source": "well", "points": "2" }} ]
}}

Note: numeric values must be quoted strings, not bare numbers,
to preserve exact decimal precision (e.g., "0.5" not 0.5).

Run `aquaprobe thresholds explain` to see the standard table.
"#,
        keys = keys.join(", ")
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), AquaprobeError> {
    let table = aquaprobe_core::thresholds::load_table(file)?;

    println!("Threshold table '{}' (v{}) is valid.", table.name, table.version);
    println!("  Rules: {} parameters", table.parameters.len());
    println!("  Source adjustments: {}", table.source_penalties.len());

    // Warnings, not errors
    let mut warnings = Vec::new();
    for parameter in Parameter::ALL {
        if table.rule(parameter).is_none() {
            warnings.push(format!(
                "parameter '{}' has no rule and will always be reported as normal",
                parameter.key()
            ));
        }
    }
    for rule in &table.parameters {
        if rule.penalty.is_none() {
            warnings.push(format!(
                "parameter '{}' has no penalty and never affects the score",
                rule.parameter.key()
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
