use crate::assess::contamination::{BACTERIAL_LIMIT, HEAVY_METAL_LIMIT};
use crate::error::AquaprobeError;
use crate::model::{Parameter, SourceType};
use crate::thresholds::schema::{ParameterRule, PenaltyDef, SourcePenalty, ThresholdTable};
use rust_decimal::Decimal;
use std::sync::OnceLock;

/// Available predefined threshold tables.
pub const PRESETS: &[&str] = &["standard"];

static STANDARD: OnceLock<ThresholdTable> = OnceLock::new();

/// The standard drinking-water table, built once and shared.
pub fn standard() -> &'static ThresholdTable {
    STANDARD.get_or_init(build_standard)
}

/// Load a predefined table by name.
pub fn load_preset(name: &str) -> Result<ThresholdTable, AquaprobeError> {
    match name {
        "standard" => Ok(standard().clone()),
        _ => Err(AquaprobeError::UnknownPreset {
            name: name.to_string(),
            available: PRESETS.join(", "),
        }),
    }
}

fn d(num: i64, scale: u32) -> Decimal {
    Decimal::new(num, scale)
}

fn linear(factor: Decimal, cap: Option<Decimal>) -> PenaltyDef {
    PenaltyDef::Linear {
        factor,
        from_limit: false,
        cap,
    }
}

fn linear_from_limit(factor: Decimal, cap: Option<Decimal>) -> PenaltyDef {
    PenaltyDef::Linear {
        factor,
        from_limit: true,
        cap,
    }
}

fn stepped(origin: Decimal, step: Decimal, points_per_step: Decimal, cap: Decimal) -> PenaltyDef {
    PenaltyDef::Stepped {
        origin,
        step,
        points_per_step,
        cap: Some(cap),
    }
}

fn build_standard() -> ThresholdTable {
    let parameters = vec![
        ParameterRule::between(Parameter::Ph, d(65, 1), d(85, 1))
            .with_penalty(PenaltyDef::Flat { points: d(15, 0) }),
        ParameterRule::above(Parameter::TotalDissolvedSolids, d(500, 0))
            .with_penalty(stepped(d(500, 0), d(100, 0), d(5, 0), d(20, 0))),
        ParameterRule::above(Parameter::Conductivity, d(800, 0))
            .with_penalty(stepped(d(800, 0), d(100, 0), d(5, 0), d(20, 0))),
        ParameterRule::above(Parameter::Chloride, d(300, 0)).with_note("display only"),
        ParameterRule::above(Parameter::Sodium, d(250, 0)).with_note("display only"),
        ParameterRule::above(Parameter::Sulphate, d(300, 0)).with_note("display only"),
        ParameterRule::above(Parameter::HeavyMetals, d(5, 1))
            .with_critical(HEAVY_METAL_LIMIT)
            .with_penalty(linear(d(30, 0), Some(d(40, 0)))),
        ParameterRule::above(Parameter::BacterialContamination, d(10, 0))
            .with_critical(BACTERIAL_LIMIT)
            .with_penalty(stepped(Decimal::ZERO, d(10, 0), d(10, 0), d(30, 0))),
        ParameterRule::below(Parameter::DissolvedOxygen, d(6, 0))
            .with_penalty(linear_from_limit(d(5, 0), None)),
        ParameterRule::above(Parameter::BiochemicalOxygenDemand, d(6, 0))
            .with_penalty(linear_from_limit(d(3, 0), None)),
        ParameterRule::above(Parameter::Nitrates, d(10, 0))
            .with_penalty(linear_from_limit(d(2, 0), Some(d(15, 0)))),
        ParameterRule::above(Parameter::Phosphates, d(1, 0))
            .with_penalty(linear(d(5, 0), Some(d(15, 0)))),
        ParameterRule::above(Parameter::Pesticides, d(5, 1))
            .with_penalty(linear(d(20, 0), Some(d(30, 0)))),
        ParameterRule::above(Parameter::IndustrialChemicals, d(2, 1))
            .with_penalty(linear(d(25, 0), Some(d(35, 0)))),
        ParameterRule::above(Parameter::Turbidity, d(5, 0))
            .with_penalty(linear(d(1, 0), Some(d(15, 0)))),
    ];

    ThresholdTable {
        name: "Standard drinking water".into(),
        description: Some(
            "Penalty thresholds for drinking and surface water safety screening".into(),
        ),
        version: "1.0".into(),
        parameters,
        source_penalties: vec![
            SourcePenalty {
                source: SourceType::River,
                points: d(5, 0),
            },
            SourcePenalty {
                source: SourceType::Well,
                points: d(2, 0),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::validate_table;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_is_valid() {
        validate_table(standard()).unwrap();
    }

    #[test]
    fn test_standard_covers_every_parameter() {
        for p in Parameter::ALL {
            assert!(standard().rule(p).is_some(), "missing rule for {p:?}");
        }
    }

    #[test]
    fn test_standard_source_penalties() {
        let t = standard();
        assert_eq!(t.source_penalty(SourceType::River), Some(dec!(5)));
        assert_eq!(t.source_penalty(SourceType::Well), Some(dec!(2)));
        assert_eq!(t.source_penalty(SourceType::Tap), None);
        assert_eq!(t.source_penalty(SourceType::Other), None);
    }

    #[test]
    fn test_display_only_rules_carry_no_penalty() {
        let t = standard();
        for p in [Parameter::Chloride, Parameter::Sodium, Parameter::Sulphate] {
            assert!(t.rule(p).unwrap().penalty.is_none());
        }
    }

    #[test]
    fn test_critical_levels_match_classifier() {
        let t = standard();
        let metals = t.rule(Parameter::HeavyMetals).unwrap();
        let bacteria = t.rule(Parameter::BacterialContamination).unwrap();
        assert_eq!(metals.critical_above, Some(dec!(1)));
        assert_eq!(bacteria.critical_above, Some(dec!(50)));
    }

    #[test]
    fn test_load_standard_preset() {
        let t = load_preset("standard").unwrap();
        assert_eq!(&t, standard());
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("ocean").is_err());
    }
}
