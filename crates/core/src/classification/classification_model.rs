use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::errors::{Error, Result};
use crate::reference::Indicator;

/// Position of a z-score relative to the configured cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    SevereDeficit,
    ModerateDeficit,
    Normal,
    Elevated,
    SevereElevation,
}

impl Band {
    pub const ALL: [Band; 5] = [
        Band::SevereDeficit,
        Band::ModerateDeficit,
        Band::Normal,
        Band::Elevated,
        Band::SevereElevation,
    ];
}

/// Cut points separating the five bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandThresholds {
    /// Below this is a severe deficit (default: -3)
    pub severe_low: f64,
    /// Below this is a moderate deficit (default: -2)
    pub moderate_low: f64,
    /// Above this is elevated (default: 2)
    pub elevated_high: f64,
    /// Above this is a severe elevation (default: 3)
    pub severe_high: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            severe_low: -3.0,
            moderate_low: -2.0,
            elevated_high: 2.0,
            severe_high: 3.0,
        }
    }
}

impl BandThresholds {
    /// Lower cut points are exclusive, upper cut points inclusive, so both
    /// -2 and +2 fall in the normal band.
    pub fn band_for(&self, z: f64) -> Band {
        if z < self.severe_low {
            Band::SevereDeficit
        } else if z < self.moderate_low {
            Band::ModerateDeficit
        } else if z <= self.elevated_high {
            Band::Normal
        } else if z <= self.severe_high {
            Band::Elevated
        } else {
            Band::SevereElevation
        }
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        let cuts = [
            self.severe_low,
            self.moderate_low,
            self.elevated_high,
            self.severe_high,
        ];
        if cuts.iter().any(|c| !c.is_finite()) {
            return Err("cut points must be finite".to_string());
        }
        if !cuts.windows(2).all(|w| w[0] < w[1]) {
            return Err(format!(
                "cut points must be strictly increasing, got {:?}",
                cuts
            ));
        }
        Ok(())
    }
}

/// Wording and alerting for one band of one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRule {
    /// Short machine-readable code (e.g. "stunted")
    pub code: String,
    /// Human-readable label (e.g. "Stunted")
    pub label: String,
    /// Message template; `{indicator}` and `{z}` are substituted
    pub message: String,
    /// Whether this status should raise an alert
    pub alert: bool,
}

impl StatusRule {
    pub fn new(code: &str, label: &str, message: &str, alert: bool) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            message: message.to_string(),
            alert,
        }
    }
}

/// Cut points and per-band wording for a single indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorRules {
    #[serde(default)]
    pub thresholds: BandThresholds,
    pub severe_deficit: StatusRule,
    pub moderate_deficit: StatusRule,
    pub normal: StatusRule,
    pub elevated: StatusRule,
    pub severe_elevation: StatusRule,
}

impl IndicatorRules {
    pub fn rule(&self, band: Band) -> &StatusRule {
        match band {
            Band::SevereDeficit => &self.severe_deficit,
            Band::ModerateDeficit => &self.moderate_deficit,
            Band::Normal => &self.normal,
            Band::Elevated => &self.elevated,
            Band::SevereElevation => &self.severe_elevation,
        }
    }

    /// WHO wording and alert flags for an indicator.
    pub fn who_default(indicator: Indicator) -> Self {
        let normal = StatusRule::new(
            "normal",
            "Normal",
            "{indicator} is within the normal range (z = {z}).",
            false,
        );
        let thresholds = BandThresholds::default();
        match indicator {
            Indicator::WeightForAge => Self {
                thresholds,
                severe_deficit: StatusRule::new(
                    "severely_underweight",
                    "Severely underweight",
                    "{indicator} is far below the expected range (z = {z}). Please consult a health professional.",
                    true,
                ),
                moderate_deficit: StatusRule::new(
                    "underweight",
                    "Underweight",
                    "{indicator} is below the expected range (z = {z}).",
                    true,
                ),
                normal,
                elevated: StatusRule::new(
                    "above_normal",
                    "Above normal",
                    "{indicator} is above the expected range (z = {z}). Check weight-for-height.",
                    true,
                ),
                severe_elevation: StatusRule::new(
                    "above_normal",
                    "Above normal",
                    "{indicator} is well above the expected range (z = {z}). Check weight-for-height.",
                    true,
                ),
            },
            Indicator::HeightForAge => Self {
                thresholds,
                severe_deficit: StatusRule::new(
                    "severely_stunted",
                    "Severely stunted",
                    "{indicator} is far below the expected range (z = {z}). Please consult a health professional.",
                    true,
                ),
                moderate_deficit: StatusRule::new(
                    "stunted",
                    "Stunted",
                    "{indicator} is below the expected range (z = {z}).",
                    true,
                ),
                normal,
                elevated: StatusRule::new(
                    "tall",
                    "Tall",
                    "{indicator} is above average (z = {z}).",
                    false,
                ),
                severe_elevation: StatusRule::new(
                    "very_tall",
                    "Very tall",
                    "{indicator} is far above the expected range (z = {z}). Consider checking for endocrine causes.",
                    true,
                ),
            },
            Indicator::WeightForHeight => Self {
                thresholds,
                severe_deficit: StatusRule::new(
                    "severely_wasted",
                    "Severely wasted",
                    "{indicator} is far below the expected range (z = {z}). Please consult a health professional.",
                    true,
                ),
                moderate_deficit: StatusRule::new(
                    "wasted",
                    "Wasted",
                    "{indicator} is below the expected range (z = {z}).",
                    true,
                ),
                normal,
                elevated: StatusRule::new(
                    "overweight",
                    "Overweight",
                    "{indicator} is above the expected range (z = {z}).",
                    true,
                ),
                severe_elevation: StatusRule::new(
                    "obese",
                    "Obese",
                    "{indicator} is far above the expected range (z = {z}). Please consult a health professional.",
                    true,
                ),
            },
            Indicator::HeadCircumferenceForAge => Self {
                thresholds,
                severe_deficit: StatusRule::new(
                    "severe_microcephaly",
                    "Severe microcephaly",
                    "{indicator} is far below the expected range (z = {z}). Please consult a health professional.",
                    true,
                ),
                moderate_deficit: StatusRule::new(
                    "microcephaly",
                    "Microcephaly",
                    "{indicator} is below the expected range (z = {z}).",
                    true,
                ),
                normal,
                elevated: StatusRule::new(
                    "macrocephaly",
                    "Macrocephaly",
                    "{indicator} is above the expected range (z = {z}).",
                    true,
                ),
                severe_elevation: StatusRule::new(
                    "severe_macrocephaly",
                    "Severe macrocephaly",
                    "{indicator} is far above the expected range (z = {z}). Please consult a health professional.",
                    true,
                ),
            },
        }
    }

    fn validate(&self, indicator: Indicator) -> Result<()> {
        self.thresholds
            .validate()
            .map_err(|msg| Error::InvalidConfigValue(format!("{}: {}", indicator, msg)))?;
        for band in Band::ALL {
            if self.rule(band).code.trim().is_empty() {
                return Err(Error::InvalidConfigValue(format!(
                    "{}: status code for {:?} must not be empty",
                    indicator, band
                )));
            }
        }
        Ok(())
    }
}

/// Per-indicator classification rules.
///
/// A serialized table may name only some indicators; the rest keep their
/// WHO defaults. Each indicator listed replaces its default rules whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClassificationTable {
    rules: BTreeMap<Indicator, IndicatorRules>,
}

impl<'de> Deserialize<'de> for ClassificationTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = BTreeMap::<Indicator, IndicatorRules>::deserialize(deserializer)?;
        let mut table = Self::default();
        table.rules.extend(overrides);
        Ok(table)
    }
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self {
            rules: Indicator::ALL
                .into_iter()
                .map(|i| (i, IndicatorRules::who_default(i)))
                .collect(),
        }
    }
}

impl ClassificationTable {
    pub fn rules_for(&self, indicator: Indicator) -> Result<&IndicatorRules> {
        self.rules.get(&indicator).ok_or_else(|| {
            Error::InvalidConfigValue(format!("No classification rules for {}", indicator))
        })
    }

    /// Replaces the rules of one indicator.
    pub fn set_rules(&mut self, indicator: Indicator, rules: IndicatorRules) {
        self.rules.insert(indicator, rules);
    }

    /// Every indicator needs rules with strictly increasing cut points.
    pub fn validate(&self) -> Result<()> {
        for indicator in Indicator::ALL {
            self.rules_for(indicator)?.validate(indicator)?;
        }
        Ok(())
    }
}

/// Classification outcome for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthStatus {
    pub code: String,
    pub label: String,
    pub band: Band,
    pub message: String,
    pub alert: bool,
}
