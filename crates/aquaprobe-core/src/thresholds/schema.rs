use crate::model::{Parameter, SourceType, WaterSample};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A table of per-parameter limits and score penalties.
///
/// The same table drives the safety scorer, the recommendation generator and
/// the per-parameter status shown in assessment details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Rules in evaluation order.
    pub parameters: Vec<ParameterRule>,
    /// Fixed deductions applied by sample source.
    #[serde(default)]
    pub source_penalties: Vec<SourcePenalty>,
}

impl ThresholdTable {
    pub fn rule(&self, parameter: Parameter) -> Option<&ParameterRule> {
        self.parameters.iter().find(|r| r.parameter == parameter)
    }

    /// The limit `sample` violates for `parameter`, if any.
    pub fn violation(&self, sample: &WaterSample, parameter: Parameter) -> Option<Violation> {
        self.rule(parameter)
            .and_then(|r| r.violation(sample.value(parameter)))
    }

    pub fn source_penalty(&self, source: SourceType) -> Option<Decimal> {
        self.source_penalties
            .iter()
            .find(|p| p.source == source)
            .map(|p| p.points)
    }
}

/// Limits for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRule {
    pub parameter: Parameter,
    /// Values strictly below this violate the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Decimal>,
    /// Values strictly above this violate the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
    /// Values strictly above this are reported as critical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_above: Option<Decimal>,
    /// Score deduction when the rule is violated. Display-only rules have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<PenaltyDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ParameterRule {
    pub fn above(parameter: Parameter, max: Decimal) -> Self {
        Self {
            parameter,
            min: None,
            max: Some(max),
            critical_above: None,
            penalty: None,
            note: None,
        }
    }

    pub fn below(parameter: Parameter, min: Decimal) -> Self {
        Self {
            parameter,
            min: Some(min),
            max: None,
            critical_above: None,
            penalty: None,
            note: None,
        }
    }

    pub fn between(parameter: Parameter, min: Decimal, max: Decimal) -> Self {
        Self {
            min: Some(min),
            ..Self::above(parameter, max)
        }
    }

    pub fn with_penalty(mut self, penalty: PenaltyDef) -> Self {
        self.penalty = Some(penalty);
        self
    }

    pub fn with_critical(mut self, critical_above: Decimal) -> Self {
        self.critical_above = Some(critical_above);
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn violation(&self, value: Decimal) -> Option<Violation> {
        if let Some(min) = self.min {
            if value < min {
                return Some(Violation {
                    bound: Bound::Below,
                    limit: min,
                });
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Some(Violation {
                    bound: Bound::Above,
                    limit: max,
                });
            }
        }
        None
    }

    pub fn is_critical(&self, value: Decimal) -> bool {
        self.critical_above.is_some_and(|c| value > c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    Below,
    Above,
}

/// Which limit a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub bound: Bound,
    pub limit: Decimal,
}

impl Violation {
    /// Distance past the limit, always non-negative.
    pub fn excess(&self, value: Decimal) -> Decimal {
        match self.bound {
            Bound::Above => value.saturating_sub(self.limit),
            Bound::Below => self.limit.saturating_sub(value),
        }
    }
}

/// How many points a violated rule deducts from the safety score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PenaltyDef {
    /// A fixed deduction.
    Flat { points: Decimal },
    /// `floor((value - origin) / step) * points_per_step`, optionally capped.
    Stepped {
        origin: Decimal,
        step: Decimal,
        points_per_step: Decimal,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cap: Option<Decimal>,
    },
    /// `base * factor`, optionally capped. The base is the raw value, or the
    /// distance past the violated limit when `from_limit` is set.
    Linear {
        factor: Decimal,
        #[serde(default)]
        from_limit: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cap: Option<Decimal>,
    },
}

impl PenaltyDef {
    /// Points deducted for `value`. Never negative; arithmetic saturates
    /// instead of overflowing so extreme measurements still land on the cap.
    pub fn points(&self, value: Decimal, violation: &Violation) -> Decimal {
        let raw = match self {
            PenaltyDef::Flat { points } => *points,
            PenaltyDef::Stepped {
                origin,
                step,
                points_per_step,
                cap,
            } => {
                let steps = whole_steps(value.saturating_sub(*origin), *step);
                capped(steps.saturating_mul(*points_per_step), *cap)
            }
            PenaltyDef::Linear {
                factor,
                from_limit,
                cap,
            } => {
                let base = if *from_limit {
                    violation.excess(value)
                } else {
                    value
                };
                capped(base.saturating_mul(*factor), *cap)
            }
        };
        raw.max(Decimal::ZERO)
    }

    pub fn describe(&self) -> String {
        match self {
            PenaltyDef::Flat { points } => format!("-{points}"),
            PenaltyDef::Stepped {
                origin,
                step,
                points_per_step,
                cap,
            } => {
                let base = if origin.is_zero() {
                    "v".to_string()
                } else {
                    format!("(v-{origin})")
                };
                let expr = format!("floor({base}/{step})x{points_per_step}");
                with_cap(expr, *cap)
            }
            PenaltyDef::Linear {
                factor,
                from_limit,
                cap,
            } => {
                let base = if *from_limit { "excess" } else { "v" };
                with_cap(format!("{base}x{factor}"), *cap)
            }
        }
    }
}

/// `floor(distance / step)`, saturating on overflow. A zero step counts no steps.
fn whole_steps(distance: Decimal, step: Decimal) -> Decimal {
    if step.is_zero() {
        return Decimal::ZERO;
    }
    match distance.checked_div(step) {
        Some(q) => q.floor(),
        None if distance.is_sign_negative() == step.is_sign_negative() => Decimal::MAX,
        None => Decimal::MIN,
    }
}

fn capped(points: Decimal, cap: Option<Decimal>) -> Decimal {
    match cap {
        Some(cap) => points.min(cap),
        None => points,
    }
}

fn with_cap(expr: String, cap: Option<Decimal>) -> String {
    match cap {
        Some(cap) => format!("-min({expr}, {cap})"),
        None => format!("-{expr}"),
    }
}

/// A fixed deduction for samples from a given source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePenalty {
    pub source: SourceType,
    pub points: Decimal,
}
