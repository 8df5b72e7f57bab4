use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// The four anthropometric comparisons supported by the engine.
///
/// Declaration order is the order indicators appear in an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Indicator {
    WeightForAge,
    HeightForAge,
    WeightForHeight,
    HeadCircumferenceForAge,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::WeightForAge,
        Indicator::HeightForAge,
        Indicator::WeightForHeight,
        Indicator::HeadCircumferenceForAge,
    ];

    /// Indicators whose absence from reference coverage fails the whole analysis.
    pub const REQUIRED: [Indicator; 3] = [
        Indicator::WeightForAge,
        Indicator::HeightForAge,
        Indicator::WeightForHeight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::WeightForAge => "weight-for-age",
            Indicator::HeightForAge => "height-for-age",
            Indicator::WeightForHeight => "weight-for-height",
            Indicator::HeadCircumferenceForAge => "head-circumference-for-age",
        }
    }

    /// Short code used in reference tables.
    pub fn code(&self) -> &'static str {
        match self {
            Indicator::WeightForAge => "wfa",
            Indicator::HeightForAge => "hfa",
            Indicator::WeightForHeight => "wfh",
            Indicator::HeadCircumferenceForAge => "hcfa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Indicator::WeightForAge => "Weight-for-age",
            Indicator::HeightForAge => "Height-for-age",
            Indicator::WeightForHeight => "Weight-for-height",
            Indicator::HeadCircumferenceForAge => "Head circumference-for-age",
        }
    }

    /// Whether the indicator's table is indexed by age or by height.
    pub fn key_kind(&self) -> KeyKind {
        match self {
            Indicator::WeightForHeight => KeyKind::HeightCm,
            _ => KeyKind::AgeMonths,
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Indicator {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Indicator::ALL
            .into_iter()
            .find(|i| i.code() == normalized || i.as_str() == normalized)
            .ok_or_else(|| ValidationError::InvalidInput(format!("Unknown indicator '{}'", s)))
    }
}

/// Kind of index a reference series is tabulated by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyKind {
    AgeMonths,
    HeightCm,
}

impl KeyKind {
    pub fn unit(&self) -> &'static str {
        match self {
            KeyKind::AgeMonths => "months",
            KeyKind::HeightCm => "cm",
        }
    }
}

/// Lookup key into the reference dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ReferenceKey {
    AgeMonths(f64),
    HeightCm(f64),
}

impl ReferenceKey {
    pub fn kind(&self) -> KeyKind {
        match self {
            ReferenceKey::AgeMonths(_) => KeyKind::AgeMonths,
            ReferenceKey::HeightCm(_) => KeyKind::HeightCm,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            ReferenceKey::AgeMonths(v) | ReferenceKey::HeightCm(v) => *v,
        }
    }
}

/// Box-Cox power (L), median (M) and coefficient of variation (S).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsParameters {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsParameters {
    pub fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    /// Linear interpolation of each parameter independently, `t` in `[0, 1]`.
    pub fn interpolate(&self, other: &LmsParameters, t: f64) -> LmsParameters {
        LmsParameters {
            l: lerp(self.l, other.l, t),
            m: lerp(self.m, other.m, t),
            s: lerp(self.s, other.s, t),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.l.is_finite() && self.m.is_finite() && self.s.is_finite() && self.m > 0.0 && self.s > 0.0
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// One tabulated row of a reference series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub indicator: Indicator,
    pub sex: crate::measurements::Sex,
    pub index: f64,
    pub lms: LmsParameters,
}

/// Tabulated range of one (indicator, sex) series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    pub indicator: Indicator,
    pub sex: crate::measurements::Sex,
    pub kind: KeyKind,
    pub min: f64,
    pub max: f64,
}

impl Coverage {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
