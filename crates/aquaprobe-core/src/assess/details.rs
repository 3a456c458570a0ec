use crate::assess::outcome::{DetailEntry, DetailStatus};
use crate::model::{Parameter, Unit, WaterSample};
use crate::thresholds::schema::ThresholdTable;

/// Build one display row per parameter, primary parameters first.
///
/// Status comes from the same table the scorer uses: `critical` past a
/// rule's critical limit, `warning` when the rule is violated.
pub fn render(sample: &WaterSample, table: &ThresholdTable) -> Vec<DetailEntry> {
    Parameter::ALL
        .iter()
        .map(|&parameter| {
            let value = sample.value(parameter);
            let unit = parameter.unit();
            let status = match table.rule(parameter) {
                Some(rule) if rule.is_critical(value) => DetailStatus::Critical,
                Some(rule) if rule.violation(value).is_some() => DetailStatus::Warning,
                _ => DetailStatus::Normal,
            };
            let display_value = match unit {
                Unit::None => value.to_string(),
                _ => format!("{} {}", value, unit),
            };

            DetailEntry {
                parameter,
                group: parameter.group(),
                label: parameter.label().to_string(),
                value,
                unit,
                display_value,
                description: parameter.description().to_string(),
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::builtin::standard;
    use rust_decimal_macros::dec;

    fn status_of(rows: &[DetailEntry], parameter: Parameter) -> DetailStatus {
        rows.iter()
            .find(|r| r.parameter == parameter)
            .map(|r| r.status)
            .unwrap()
    }

    #[test]
    fn test_one_row_per_parameter_in_order() {
        let rows = render(&WaterSample::default(), standard());
        assert_eq!(rows.len(), Parameter::ALL.len());
        assert_eq!(rows[0].parameter, Parameter::Ph);
        assert_eq!(rows[14].parameter, Parameter::Turbidity);
        assert!(rows.iter().all(|r| r.status == DetailStatus::Normal));
    }

    #[test]
    fn test_unit_formatting() {
        let rows = render(&WaterSample::default(), standard());
        assert_eq!(rows[0].display_value, "7.0");
        assert_eq!(rows[1].display_value, "300 mg/L");
        assert_eq!(rows[2].display_value, "500 µS/cm");
    }

    #[test]
    fn test_heavy_metals_warning_then_critical() {
        let warn = WaterSample {
            heavy_metals: dec!(0.8),
            ..WaterSample::default()
        };
        let crit = WaterSample {
            heavy_metals: dec!(1.2),
            ..WaterSample::default()
        };
        assert_eq!(
            status_of(&render(&warn, standard()), Parameter::HeavyMetals),
            DetailStatus::Warning
        );
        assert_eq!(
            status_of(&render(&crit, standard()), Parameter::HeavyMetals),
            DetailStatus::Critical
        );
    }

    #[test]
    fn test_bacterial_critical_above_fifty() {
        let s = WaterSample {
            bacterial_contamination: dec!(51),
            ..WaterSample::default()
        };
        assert_eq!(
            status_of(&render(&s, standard()), Parameter::BacterialContamination),
            DetailStatus::Critical
        );
    }

    #[test]
    fn test_status_shares_scoring_thresholds() {
        let s = WaterSample {
            conductivity: dec!(850),
            dissolved_oxygen: dec!(5),
            ..WaterSample::default()
        };
        let rows = render(&s, standard());
        assert_eq!(status_of(&rows, Parameter::Conductivity), DetailStatus::Warning);
        assert_eq!(status_of(&rows, Parameter::DissolvedOxygen), DetailStatus::Warning);
    }

    #[test]
    fn test_display_only_limits() {
        let s = WaterSample {
            chloride: dec!(301),
            ..WaterSample::default()
        };
        let rows = render(&s, standard());
        assert_eq!(status_of(&rows, Parameter::Chloride), DetailStatus::Warning);
        assert_eq!(status_of(&rows, Parameter::Sodium), DetailStatus::Normal);
    }
}
