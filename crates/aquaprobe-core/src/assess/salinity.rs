use crate::model::WaterSample;
use rust_decimal::{Decimal, RoundingStrategy};

const CHLORIDE_WEIGHT: Decimal = Decimal::from_parts(3, 0, 0, false, 1);
const SODIUM_WEIGHT: Decimal = Decimal::from_parts(3, 0, 0, false, 1);
const SULPHATE_WEIGHT: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
const CONDUCTIVITY_WEIGHT: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
const ION_SCALE: Decimal = Decimal::ONE_HUNDRED;
const CONDUCTIVITY_SCALE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);
const PPT_FACTOR: Decimal = Decimal::from_parts(35, 0, 0, false, 1);

/// Estimate salinity in parts per thousand, rounded to one decimal place.
///
/// Chloride and sodium carry the most weight as the primary salinity
/// indicators.
pub fn estimate(sample: &WaterSample) -> Decimal {
    let weighted = CHLORIDE_WEIGHT * sample.chloride / ION_SCALE
        + SODIUM_WEIGHT * sample.sodium / ION_SCALE
        + SULPHATE_WEIGHT * sample.sulphate / ION_SCALE
        + CONDUCTIVITY_WEIGHT * sample.conductivity / CONDUCTIVITY_SCALE;

    (weighted * PPT_FACTOR).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_form_defaults() {
        // 0.75 + 0.6 + 0.5 + 0.2 = 2.05, x 3.5 = 7.175
        assert_eq!(estimate(&WaterSample::default()), dec!(7.2));
    }

    #[test]
    fn test_zero_inputs() {
        let s = WaterSample {
            chloride: dec!(0),
            sodium: dec!(0),
            sulphate: dec!(0),
            conductivity: dec!(0),
            ..WaterSample::default()
        };
        assert_eq!(estimate(&s), dec!(0));
    }

    #[test]
    fn test_seawater_like() {
        let s = WaterSample {
            chloride: dec!(19000),
            sodium: dec!(10500),
            sulphate: dec!(2700),
            conductivity: dec!(50000),
            ..WaterSample::default()
        };
        // 57 + 31.5 + 5.4 + 20 = 113.9, x 3.5 = 398.65
        assert_eq!(estimate(&s), dec!(398.7));
    }

    #[test]
    fn test_ignores_unrelated_parameters() {
        let a = WaterSample::default();
        let b = WaterSample {
            heavy_metals: dec!(9),
            turbidity: dec!(100),
            ..WaterSample::default()
        };
        assert_eq!(estimate(&a), estimate(&b));
    }
}
