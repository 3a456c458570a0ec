use crate::assess::outcome::AppliedPenalty;
use crate::model::WaterSample;
use crate::thresholds::schema::{Bound, ThresholdTable};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const PERFECT: Decimal = Decimal::ONE_HUNDRED;

/// Safety score and the deductions that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub score: u8,
    pub penalties: Vec<AppliedPenalty>,
}

/// Score a sample from 100 down, one independent deduction per violated rule.
///
/// Deductions are summed against the raw measurements, then the total is
/// clamped to [0, 100] and rounded to the nearest integer.
pub fn score(sample: &WaterSample, table: &ThresholdTable) -> ScoreBreakdown {
    let mut penalties = Vec::new();

    for rule in &table.parameters {
        let Some(ref penalty) = rule.penalty else {
            continue;
        };
        let value = sample.value(rule.parameter);
        let Some(violation) = rule.violation(value) else {
            continue;
        };

        let points = penalty.points(value, &violation);
        if points.is_zero() {
            continue;
        }

        let comparison = match violation.bound {
            Bound::Below => "<",
            Bound::Above => ">",
        };
        tracing::debug!(
            parameter = rule.parameter.key(),
            %value,
            %points,
            "penalty applied"
        );
        penalties.push(AppliedPenalty {
            subject: rule.parameter.key().to_string(),
            points,
            reason: format!(
                "{} {} {} {} ({})",
                rule.parameter.key(),
                value,
                comparison,
                violation.limit,
                penalty.describe()
            ),
        });
    }

    if let Some(points) = table.source_penalty(sample.source_type) {
        if !points.is_zero() {
            penalties.push(AppliedPenalty {
                subject: format!("source:{}", sample.source_type.key()),
                points,
                reason: format!("{} source (-{})", sample.source_type, points),
            });
        }
    }

    let total = penalties
        .iter()
        .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.points));
    let score = PERFECT
        .saturating_sub(total)
        .clamp(Decimal::ZERO, PERFECT)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0);

    ScoreBreakdown { score, penalties }
}
