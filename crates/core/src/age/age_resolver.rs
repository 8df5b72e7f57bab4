use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::AVERAGE_DAYS_PER_MONTH;
use crate::errors::ValidationError;

/// Rule used to turn elapsed days into months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeConvention {
    /// Days divided by 30.4375, kept at full precision (WHO convention).
    #[default]
    AverageDaysPerMonth,
    /// Whole calendar months elapsed, day-of-month aware.
    CompletedCalendarMonths,
}

/// Age of a child at one observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildAge {
    pub days: i64,
    pub months: f64,
    pub convention: AgeConvention,
}

/// Resolves the age at `observation_date` for a child born on `birth_date`.
pub fn resolve_age(
    birth_date: NaiveDate,
    observation_date: NaiveDate,
    convention: AgeConvention,
) -> Result<ChildAge, ValidationError> {
    if observation_date < birth_date {
        return Err(ValidationError::ObservationBeforeBirth {
            birth_date,
            observation_date,
        });
    }

    let days = (observation_date - birth_date).num_days();
    let months = match convention {
        AgeConvention::AverageDaysPerMonth => days as f64 / AVERAGE_DAYS_PER_MONTH,
        AgeConvention::CompletedCalendarMonths => {
            completed_months(birth_date, observation_date)? as f64
        }
    };

    Ok(ChildAge {
        days,
        months,
        convention,
    })
}

/// Whole months between the two dates. Adding months to a late birth day
/// clamps to the end of shorter months, so Jan 31 -> Feb 29 is one month.
fn completed_months(birth: NaiveDate, observed: NaiveDate) -> Result<u32, ValidationError> {
    let span = (observed.year() - birth.year()) * 12 + observed.month() as i32
        - birth.month() as i32;
    let mut months = span.max(0) as u32;

    while months > 0 {
        let anniversary = birth
            .checked_add_months(Months::new(months))
            .ok_or_else(|| {
                ValidationError::InvalidInput(format!(
                    "Cannot add {} months to {}",
                    months, birth
                ))
            })?;
        if anniversary <= observed {
            break;
        }
        months -= 1;
    }
    Ok(months)
}
