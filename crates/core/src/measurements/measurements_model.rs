use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// Biological sex used to select the reference population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "boy" | "1" => Ok(Sex::Male),
            "female" | "f" | "girl" | "2" => Ok(Sex::Female),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown sex '{}'",
                other
            ))),
        }
    }
}

/// A single anthropometric measurement of a child.
///
/// Field aliases accept the record shape produced by the persistence layer
/// (`childSex`, `childBirthDate`, `date`, `weight`, `height`,
/// `headCircumference`). Any `ageInMonths` sent along is ignored: age is
/// always re-derived from the two dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "childSex")]
    pub sex: Sex,
    #[serde(alias = "childBirthDate")]
    pub birth_date: NaiveDate,
    #[serde(alias = "date")]
    pub observation_date: NaiveDate,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    #[serde(alias = "height")]
    pub height_cm: f64,
    #[serde(
        default,
        alias = "headCircumference",
        skip_serializing_if = "Option::is_none"
    )]
    pub head_circumference_cm: Option<f64>,
}

impl Measurement {
    pub fn new(
        sex: Sex,
        birth_date: NaiveDate,
        observation_date: NaiveDate,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Self {
            id: None,
            sex,
            birth_date,
            observation_date,
            weight_kg,
            height_cm,
            head_circumference_cm: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_head_circumference(mut self, head_circumference_cm: f64) -> Self {
        self.head_circumference_cm = Some(head_circumference_cm);
        self
    }

    /// Checks the measurement invariants against the given reference date.
    ///
    /// Dates are checked before values so that a record with both a bad date
    /// and a bad value reports the date first.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        if self.observation_date < self.birth_date {
            return Err(ValidationError::ObservationBeforeBirth {
                birth_date: self.birth_date,
                observation_date: self.observation_date,
            });
        }
        if self.observation_date > today {
            return Err(ValidationError::FutureObservation {
                observation_date: self.observation_date,
                today,
            });
        }

        check_positive("weight", self.weight_kg)?;
        check_positive("height", self.height_cm)?;
        if let Some(head) = self.head_circumference_cm {
            check_positive("headCircumference", head)?;
        }
        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue(field.to_string()));
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
