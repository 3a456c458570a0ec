use crate::model::{Parameter, WaterSample};
use crate::thresholds::schema::{Bound, ThresholdTable};

/// Appended when fewer than two advisories fire.
pub const GENERAL_ADVICE: &str = "Regular testing recommended to maintain water quality.";

/// A treatment advisory, triggered when any listed parameter breaks its
/// limit in the given direction.
pub struct Advisory {
    pub parameters: &'static [Parameter],
    pub bound: Bound,
    pub message: &'static str,
}

/// Advisories in output order.
pub static ADVISORIES: [Advisory; 11] = [
    Advisory {
        parameters: &[Parameter::Ph],
        bound: Bound::Below,
        message: "Consider pH adjustment treatment to increase alkalinity.",
    },
    Advisory {
        parameters: &[Parameter::Ph],
        bound: Bound::Above,
        message: "Consider pH adjustment treatment to reduce alkalinity.",
    },
    Advisory {
        parameters: &[Parameter::TotalDissolvedSolids],
        bound: Bound::Above,
        message: "Consider reverse osmosis or distillation to reduce total dissolved solids.",
    },
    Advisory {
        parameters: &[Parameter::Conductivity],
        bound: Bound::Above,
        message: "High electrical conductivity indicates elevated mineral content. Consider ion exchange treatment.",
    },
    Advisory {
        parameters: &[Parameter::HeavyMetals],
        bound: Bound::Above,
        message: "Activated carbon filtration recommended to reduce heavy metal content.",
    },
    Advisory {
        parameters: &[Parameter::BacterialContamination],
        bound: Bound::Above,
        message: "Disinfection treatment (chlorination, UV, or ozonation) recommended to address bacterial contamination.",
    },
    Advisory {
        parameters: &[Parameter::DissolvedOxygen],
        bound: Bound::Below,
        message: "Aeration may improve dissolved oxygen levels.",
    },
    Advisory {
        parameters: &[Parameter::BiochemicalOxygenDemand],
        bound: Bound::Above,
        message: "High BOD indicates organic pollution. Consider biological treatment.",
    },
    Advisory {
        parameters: &[Parameter::Nitrates, Parameter::Phosphates],
        bound: Bound::Above,
        message: "Consider ion exchange or reverse osmosis to reduce nutrient levels.",
    },
    Advisory {
        parameters: &[Parameter::Pesticides, Parameter::IndustrialChemicals],
        bound: Bound::Above,
        message: "Advanced activated carbon filtration recommended for chemical contaminant removal.",
    },
    Advisory {
        parameters: &[Parameter::Turbidity],
        bound: Bound::Above,
        message: "Filtration recommended to reduce turbidity levels.",
    },
];

impl Advisory {
    pub fn applies(&self, sample: &WaterSample, table: &ThresholdTable) -> bool {
        self.parameters.iter().any(|&p| {
            table
                .violation(sample, p)
                .is_some_and(|v| v.bound == self.bound)
        })
    }
}

/// Collect the advisories a sample triggers, in fixed order.
pub fn generate(sample: &WaterSample, table: &ThresholdTable) -> Vec<String> {
    let mut recommendations: Vec<String> = ADVISORIES
        .iter()
        .filter(|a| a.applies(sample, table))
        .map(|a| a.message.to_string())
        .collect();

    if recommendations.len() < 2 {
        recommendations.push(GENERAL_ADVICE.to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::builtin::standard;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_get_general_advice_only() {
        let r = generate(&WaterSample::default(), standard());
        assert_eq!(r, vec![GENERAL_ADVICE.to_string()]);
    }

    #[test]
    fn test_single_advisory_gets_general_advice_appended() {
        let s = WaterSample {
            ph: dec!(9),
            ..WaterSample::default()
        };
        let r = generate(&s, standard());
        assert_eq!(r.len(), 2);
        assert_eq!(r[0], "Consider pH adjustment treatment to reduce alkalinity.");
        assert_eq!(r[1], GENERAL_ADVICE);
    }

    #[test]
    fn test_evaluation_order_not_severity() {
        let s = WaterSample {
            ph: dec!(5),
            total_dissolved_solids: dec!(600),
            turbidity: dec!(10),
            heavy_metals: dec!(3),
            ..WaterSample::default()
        };
        let r = generate(&s, standard());
        assert_eq!(r.len(), 4);
        assert!(r[0].contains("increase alkalinity"));
        assert!(r[1].contains("total dissolved solids"));
        assert!(r[2].contains("heavy metal"));
        assert!(r[3].contains("turbidity"));
        assert!(!r.iter().any(|m| m == GENERAL_ADVICE));
    }

    #[test]
    fn test_combined_nutrient_message_fires_once() {
        let s = WaterSample {
            nitrates: dec!(12),
            phosphates: dec!(3),
            pesticides: dec!(0.6),
            industrial_chemicals: dec!(0.3),
            ..WaterSample::default()
        };
        let r = generate(&s, standard());
        assert_eq!(r.len(), 2);
        assert!(r[0].contains("nutrient"));
        assert!(r[1].contains("chemical contaminant"));
    }

    #[test]
    fn test_low_oxygen() {
        let s = WaterSample {
            dissolved_oxygen: dec!(5.9),
            biochemical_oxygen_demand: dec!(7),
            ..WaterSample::default()
        };
        let r = generate(&s, standard());
        assert_eq!(
            r,
            vec![
                "Aeration may improve dissolved oxygen levels.".to_string(),
                "High BOD indicates organic pollution. Consider biological treatment.".to_string(),
            ]
        );
    }

    #[test]
    fn test_display_only_rules_add_no_advice() {
        let s = WaterSample {
            chloride: dec!(900),
            sodium: dec!(900),
            sulphate: dec!(900),
            ..WaterSample::default()
        };
        assert_eq!(generate(&s, standard()), vec![GENERAL_ADVICE.to_string()]);
    }
}
