use crate::error::AquaprobeError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PH_MAX: Decimal = Decimal::from_parts(14, 0, 0, false, 0);

/// Where a sample was drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Tap,
    Well,
    River,
    Other,
}

impl SourceType {
    pub const ALL: [SourceType; 4] = [
        SourceType::Tap,
        SourceType::Well,
        SourceType::River,
        SourceType::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SourceType::Tap => "tap",
            SourceType::Well => "well",
            SourceType::River => "river",
            SourceType::Other => "other",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::Tap => write!(f, "Tap"),
            SourceType::Well => write!(f, "Well"),
            SourceType::River => write!(f, "River"),
            SourceType::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for SourceType {
    type Err = AquaprobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        SourceType::ALL
            .into_iter()
            .find(|source| source.key() == lower)
            .ok_or_else(|| AquaprobeError::UnknownSourceType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "")]
    None,
    #[serde(rename = "mg/L")]
    MgPerL,
    #[serde(rename = "µg/L")]
    MicrogramPerL,
    #[serde(rename = "µS/cm")]
    MicrosiemensPerCm,
    #[serde(rename = "CFU/mL")]
    CfuPerMl,
    #[serde(rename = "NTU")]
    Ntu,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::None => Ok(()),
            Unit::MgPerL => write!(f, "mg/L"),
            Unit::MicrogramPerL => write!(f, "µg/L"),
            Unit::MicrosiemensPerCm => write!(f, "µS/cm"),
            Unit::CfuPerMl => write!(f, "CFU/mL"),
            Unit::Ntu => write!(f, "NTU"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterGroup {
    Primary,
    Secondary,
}

/// One measured quantity of a water sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    Ph,
    TotalDissolvedSolids,
    Conductivity,
    Chloride,
    Sodium,
    Sulphate,
    HeavyMetals,
    BacterialContamination,
    DissolvedOxygen,
    BiochemicalOxygenDemand,
    Nitrates,
    Phosphates,
    Pesticides,
    IndustrialChemicals,
    Turbidity,
}

impl Parameter {
    /// All parameters in display order: primary first, then secondary.
    pub const ALL: [Parameter; 15] = [
        Parameter::Ph,
        Parameter::TotalDissolvedSolids,
        Parameter::Conductivity,
        Parameter::Chloride,
        Parameter::Sodium,
        Parameter::Sulphate,
        Parameter::HeavyMetals,
        Parameter::BacterialContamination,
        Parameter::DissolvedOxygen,
        Parameter::BiochemicalOxygenDemand,
        Parameter::Nitrates,
        Parameter::Phosphates,
        Parameter::Pesticides,
        Parameter::IndustrialChemicals,
        Parameter::Turbidity,
    ];

    /// JSON field name of this parameter on a sample.
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::TotalDissolvedSolids => "totalDissolvedSolids",
            Parameter::Conductivity => "conductivity",
            Parameter::Chloride => "chloride",
            Parameter::Sodium => "sodium",
            Parameter::Sulphate => "sulphate",
            Parameter::HeavyMetals => "heavyMetals",
            Parameter::BacterialContamination => "bacterialContamination",
            Parameter::DissolvedOxygen => "dissolvedOxygen",
            Parameter::BiochemicalOxygenDemand => "biochemicalOxygenDemand",
            Parameter::Nitrates => "nitrates",
            Parameter::Phosphates => "phosphates",
            Parameter::Pesticides => "pesticides",
            Parameter::IndustrialChemicals => "industrialChemicals",
            Parameter::Turbidity => "turbidity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Ph => "pH Level",
            Parameter::TotalDissolvedSolids => "Total Dissolved Solids",
            Parameter::Conductivity => "Electrical Conductivity",
            Parameter::Chloride => "Chloride",
            Parameter::Sodium => "Sodium",
            Parameter::Sulphate => "Sulphate",
            Parameter::HeavyMetals => "Heavy Metals",
            Parameter::BacterialContamination => "Bacterial Contamination",
            Parameter::DissolvedOxygen => "Dissolved Oxygen",
            Parameter::BiochemicalOxygenDemand => "Biochemical Oxygen Demand",
            Parameter::Nitrates => "Nitrates",
            Parameter::Phosphates => "Phosphates",
            Parameter::Pesticides => "Pesticides",
            Parameter::IndustrialChemicals => "Industrial Chemicals",
            Parameter::Turbidity => "Turbidity",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Parameter::Ph => Unit::None,
            Parameter::Conductivity => Unit::MicrosiemensPerCm,
            Parameter::BacterialContamination => Unit::CfuPerMl,
            Parameter::Pesticides => Unit::MicrogramPerL,
            Parameter::Turbidity => Unit::Ntu,
            _ => Unit::MgPerL,
        }
    }

    pub fn group(&self) -> ParameterGroup {
        match self {
            Parameter::Ph
            | Parameter::TotalDissolvedSolids
            | Parameter::Conductivity
            | Parameter::Chloride
            | Parameter::Sodium
            | Parameter::Sulphate
            | Parameter::HeavyMetals
            | Parameter::BacterialContamination => ParameterGroup::Primary,
            _ => ParameterGroup::Secondary,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Parameter::Ph => "Measures acidity or alkalinity (optimal: 6.5-8.5)",
            Parameter::TotalDissolvedSolids => {
                "Total amount of dissolved substances (optimal: <500 mg/L)"
            }
            Parameter::Conductivity => "Ability to conduct electric current (optimal: <800 µS/cm)",
            Parameter::Chloride => "Salt component that affects taste (optimal: <250 mg/L)",
            Parameter::Sodium => "Key salinity component (optimal: <200 mg/L)",
            Parameter::Sulphate => "May cause taste issues at high levels (optimal: <250 mg/L)",
            Parameter::HeavyMetals => {
                "Toxic metals like lead, arsenic, mercury (optimal: <0.5 mg/L)"
            }
            Parameter::BacterialContamination => {
                "Presence of harmful bacteria (optimal: <10 CFU/mL)"
            }
            Parameter::DissolvedOxygen => "Oxygen available for aquatic life (optimal: >6 mg/L)",
            Parameter::BiochemicalOxygenDemand => "Measures organic pollution (optimal: <6 mg/L)",
            Parameter::Nitrates => "Nutrient from fertilizers & waste (optimal: <10 mg/L)",
            Parameter::Phosphates => "Nutrient that can cause algae blooms (optimal: <1 mg/L)",
            Parameter::Pesticides => "Agricultural chemicals (optimal: <0.5 µg/L)",
            Parameter::IndustrialChemicals => "Manufacturing byproducts (optimal: <0.2 mg/L)",
            Parameter::Turbidity => "Water cloudiness from particles (optimal: <5 NTU)",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One set of measured water-quality values submitted for evaluation.
///
/// Values are exact decimals; in JSON they are quoted strings (`"7.0"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterSample {
    // Primary
    pub total_dissolved_solids: Decimal,
    pub conductivity: Decimal,
    pub ph: Decimal,
    pub chloride: Decimal,
    pub sodium: Decimal,
    pub sulphate: Decimal,
    pub heavy_metals: Decimal,
    pub bacterial_contamination: Decimal,

    // Secondary
    pub dissolved_oxygen: Decimal,
    pub biochemical_oxygen_demand: Decimal,
    pub nitrates: Decimal,
    pub phosphates: Decimal,
    pub pesticides: Decimal,
    pub industrial_chemicals: Decimal,
    pub turbidity: Decimal,

    pub source_type: SourceType,
}

impl Default for WaterSample {
    /// The predictor form's starting values.
    fn default() -> Self {
        Self {
            total_dissolved_solids: Decimal::new(300, 0),
            conductivity: Decimal::new(500, 0),
            ph: Decimal::new(70, 1),
            chloride: Decimal::new(250, 0),
            sodium: Decimal::new(200, 0),
            sulphate: Decimal::new(250, 0),
            heavy_metals: Decimal::new(5, 1),
            bacterial_contamination: Decimal::new(10, 0),
            dissolved_oxygen: Decimal::new(8, 0),
            biochemical_oxygen_demand: Decimal::new(5, 0),
            nitrates: Decimal::new(10, 0),
            phosphates: Decimal::ONE,
            pesticides: Decimal::new(5, 1),
            industrial_chemicals: Decimal::new(2, 1),
            turbidity: Decimal::new(5, 0),
            source_type: SourceType::Tap,
        }
    }
}

impl WaterSample {
    pub fn value(&self, parameter: Parameter) -> Decimal {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::TotalDissolvedSolids => self.total_dissolved_solids,
            Parameter::Conductivity => self.conductivity,
            Parameter::Chloride => self.chloride,
            Parameter::Sodium => self.sodium,
            Parameter::Sulphate => self.sulphate,
            Parameter::HeavyMetals => self.heavy_metals,
            Parameter::BacterialContamination => self.bacterial_contamination,
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::BiochemicalOxygenDemand => self.biochemical_oxygen_demand,
            Parameter::Nitrates => self.nitrates,
            Parameter::Phosphates => self.phosphates,
            Parameter::Pesticides => self.pesticides,
            Parameter::IndustrialChemicals => self.industrial_chemicals,
            Parameter::Turbidity => self.turbidity,
        }
    }

    /// List every field that lies outside its documented domain.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for parameter in Parameter::ALL {
            let value = self.value(parameter);
            if value < Decimal::ZERO {
                problems.push(format!("{} is negative ({})", parameter.key(), value));
            }
        }
        if self.ph > PH_MAX {
            problems.push(format!("ph {} is outside 0-14", self.ph));
        }
        problems
    }

    /// Reject the sample if any field is out of range.
    pub fn validate(&self, sample: &str) -> Result<(), AquaprobeError> {
        let fields = self.problems();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(AquaprobeError::InvalidInput {
                sample: sample.to_string(),
                fields,
            })
        }
    }
}

/// A sample with an optional identifier, as read from an input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub sample: WaterSample,
}

impl SampleRecord {
    /// Identifier for display, falling back to the 1-based position.
    pub fn label(&self, position: usize) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| format!("sample {}", position + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_form_defaults() {
        let s = WaterSample::default();
        assert_eq!(s.ph, dec!(7.0));
        assert_eq!(s.heavy_metals, dec!(0.5));
        assert_eq!(s.source_type, SourceType::Tap);
    }

    #[test]
    fn test_source_type_from_str() {
        assert_eq!("River".parse::<SourceType>().unwrap(), SourceType::River);
        assert_eq!(" well ".parse::<SourceType>().unwrap(), SourceType::Well);
        assert!("lake".parse::<SourceType>().is_err());
    }

    #[test]
    fn test_value_lookup_covers_all_parameters() {
        let s = WaterSample::default();
        assert_eq!(s.value(Parameter::Ph), dec!(7.0));
        assert_eq!(s.value(Parameter::Turbidity), dec!(5));
        assert_eq!(s.value(Parameter::Conductivity), dec!(500));
    }

    #[test]
    fn test_parameter_groups() {
        let primary = Parameter::ALL
            .iter()
            .filter(|p| p.group() == ParameterGroup::Primary)
            .count();
        assert_eq!(primary, 8);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(WaterSample::default().validate("s1").is_ok());
    }

    #[test]
    fn test_validate_lists_every_offending_field() {
        let s = WaterSample {
            nitrates: dec!(-1),
            ph: dec!(15),
            ..WaterSample::default()
        };
        match s.validate("s1") {
            Err(AquaprobeError::InvalidInput { sample, fields }) => {
                assert_eq!(sample, "s1");
                assert_eq!(fields.len(), 2);
                assert!(fields[0].contains("nitrates"));
                assert!(fields[1].contains("ph"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_sample_json_uses_camel_case_strings() {
        let json = serde_json::to_value(WaterSample::default()).unwrap();
        assert_eq!(json["totalDissolvedSolids"], "300");
        assert_eq!(json["sourceType"], "tap");
    }

    #[test]
    fn test_record_flattens_sample() {
        let mut value = serde_json::to_value(WaterSample::default()).unwrap();
        value["id"] = serde_json::Value::String("W-01".into());
        let record: SampleRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.id.as_deref(), Some("W-01"));
        assert_eq!(record.label(0), "W-01");
        assert_eq!(record.sample, WaterSample::default());
    }

    #[test]
    fn test_record_label_falls_back_to_position() {
        let record = SampleRecord {
            id: None,
            sample: WaterSample::default(),
        };
        assert_eq!(record.label(2), "sample 3");
    }
}
