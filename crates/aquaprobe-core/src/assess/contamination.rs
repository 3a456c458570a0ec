use crate::model::{SourceType, WaterSample};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Also the standard table's critical levels for these two parameters.
pub(crate) const HEAVY_METAL_LIMIT: Decimal = Decimal::ONE;
pub(crate) const BACTERIAL_LIMIT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const CHLORIDE_INTRUSION: Decimal = Decimal::from_parts(300, 0, 0, false, 0);
const SODIUM_INTRUSION: Decimal = Decimal::from_parts(250, 0, 0, false, 0);
const PESTICIDE_LIMIT: Decimal = Decimal::ONE;
const INDUSTRIAL_LIMIT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
const NITRATE_RUNOFF: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
const PHOSPHATE_RUNOFF: Decimal = Decimal::TWO;
const MINIMAL_HEAVY_METALS: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
const MINIMAL_BACTERIA: Decimal = Decimal::TEN;

/// The most likely dominant pollutant class of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContaminationType {
    #[serde(rename = "Heavy Metal")]
    HeavyMetal,
    Bacterial,
    #[serde(rename = "Salt Water Intrusion")]
    SaltWaterIntrusion,
    Chemical,
    #[serde(rename = "Agricultural Runoff")]
    AgriculturalRunoff,
    Minimal,
    Mixed,
}

impl fmt::Display for ContaminationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContaminationType::HeavyMetal => "Heavy Metal",
            ContaminationType::Bacterial => "Bacterial",
            ContaminationType::SaltWaterIntrusion => "Salt Water Intrusion",
            ContaminationType::Chemical => "Chemical",
            ContaminationType::AgriculturalRunoff => "Agricultural Runoff",
            ContaminationType::Minimal => "Minimal",
            ContaminationType::Mixed => "Mixed",
        };
        f.write_str(label)
    }
}

/// A classifier rule: the label it assigns and the condition that selects it.
pub struct ContaminationRule {
    pub contamination: ContaminationType,
    pub condition: &'static str,
    pub matches: fn(&WaterSample) -> bool,
}

/// Classifier rules in priority order. The first match wins.
pub static RULES: [ContaminationRule; 6] = [
    ContaminationRule {
        contamination: ContaminationType::HeavyMetal,
        condition: "heavyMetals > 1",
        matches: |s| s.heavy_metals > HEAVY_METAL_LIMIT,
    },
    ContaminationRule {
        contamination: ContaminationType::Bacterial,
        condition: "bacterialContamination > 50",
        matches: |s| s.bacterial_contamination > BACTERIAL_LIMIT,
    },
    ContaminationRule {
        contamination: ContaminationType::SaltWaterIntrusion,
        condition: "chloride > 300 and sodium > 250",
        matches: |s| s.chloride > CHLORIDE_INTRUSION && s.sodium > SODIUM_INTRUSION,
    },
    ContaminationRule {
        contamination: ContaminationType::Chemical,
        condition: "pesticides > 1 or industrialChemicals > 0.5",
        matches: |s| s.pesticides > PESTICIDE_LIMIT || s.industrial_chemicals > INDUSTRIAL_LIMIT,
    },
    ContaminationRule {
        contamination: ContaminationType::AgriculturalRunoff,
        condition: "nitrates > 15 or phosphates > 2",
        matches: |s| s.nitrates > NITRATE_RUNOFF || s.phosphates > PHOSPHATE_RUNOFF,
    },
    ContaminationRule {
        contamination: ContaminationType::Minimal,
        condition: "tap source with heavyMetals < 0.5 and bacterialContamination < 10",
        matches: |s| {
            s.source_type == SourceType::Tap
                && s.heavy_metals < MINIMAL_HEAVY_METALS
                && s.bacterial_contamination < MINIMAL_BACTERIA
        },
    },
];

/// Classifier outcome with the condition that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub contamination_type: ContaminationType,
    pub reason: String,
}

/// Classify the dominant contamination of a sample.
pub fn classify(sample: &WaterSample) -> Classification {
    match RULES.iter().find(|rule| (rule.matches)(sample)) {
        Some(rule) => {
            tracing::debug!(
                contamination = %rule.contamination,
                condition = rule.condition,
                "classifier rule matched"
            );
            Classification {
                contamination_type: rule.contamination,
                reason: format!("{} -> {}", rule.condition, rule.contamination),
            }
        }
        None => Classification {
            contamination_type: ContaminationType::Mixed,
            reason: "no single dominant pollutant class -> Mixed".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn clean() -> WaterSample {
        WaterSample {
            heavy_metals: dec!(0.1),
            bacterial_contamination: dec!(2),
            chloride: dec!(100),
            sodium: dec!(80),
            pesticides: dec!(0.1),
            industrial_chemicals: dec!(0.05),
            nitrates: dec!(3),
            phosphates: dec!(0.2),
            ..WaterSample::default()
        }
    }

    fn kind(sample: &WaterSample) -> ContaminationType {
        classify(sample).contamination_type
    }

    #[test]
    fn test_clean_tap_is_minimal() {
        assert_eq!(kind(&clean()), ContaminationType::Minimal);
    }

    #[test]
    fn test_clean_well_is_mixed() {
        let s = WaterSample {
            source_type: SourceType::Well,
            ..clean()
        };
        assert_eq!(kind(&s), ContaminationType::Mixed);
    }

    #[test]
    fn test_heavy_metal_outranks_everything() {
        let s = WaterSample {
            heavy_metals: dec!(1.2),
            bacterial_contamination: dec!(500),
            chloride: dec!(400),
            sodium: dec!(400),
            nitrates: dec!(40),
            ..clean()
        };
        assert_eq!(kind(&s), ContaminationType::HeavyMetal);
    }

    #[test]
    fn test_boundaries_are_excluded() {
        let s = WaterSample {
            heavy_metals: dec!(1),
            bacterial_contamination: dec!(50),
            pesticides: dec!(1),
            industrial_chemicals: dec!(0.5),
            nitrates: dec!(15),
            phosphates: dec!(2),
            ..clean()
        };
        assert_eq!(kind(&s), ContaminationType::Mixed);
    }

    #[test]
    fn test_salt_water_needs_both_ions() {
        let chloride_only = WaterSample {
            chloride: dec!(350),
            ..clean()
        };
        assert_eq!(kind(&chloride_only), ContaminationType::Minimal);

        let both = WaterSample {
            chloride: dec!(350),
            sodium: dec!(300),
            ..clean()
        };
        assert_eq!(kind(&both), ContaminationType::SaltWaterIntrusion);
    }

    #[test]
    fn test_chemical_either_condition() {
        let s = WaterSample {
            industrial_chemicals: dec!(0.6),
            ..clean()
        };
        assert_eq!(kind(&s), ContaminationType::Chemical);
    }

    #[test]
    fn test_agricultural_runoff() {
        let s = WaterSample {
            phosphates: dec!(2.5),
            ..clean()
        };
        assert_eq!(kind(&s), ContaminationType::AgriculturalRunoff);
    }

    #[test]
    fn test_reason_names_condition() {
        let s = WaterSample {
            bacterial_contamination: dec!(60),
            ..clean()
        };
        let c = classify(&s);
        assert_eq!(c.contamination_type, ContaminationType::Bacterial);
        assert!(c.reason.contains("bacterialContamination > 50"));
    }

    #[test]
    fn test_labels_serialize_with_spaces() {
        let json = serde_json::to_string(&ContaminationType::SaltWaterIntrusion).unwrap();
        assert_eq!(json, "\"Salt Water Intrusion\"");
        assert_eq!(ContaminationType::AgriculturalRunoff.to_string(), "Agricultural Runoff");
    }
}
