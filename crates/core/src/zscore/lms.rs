//! LMS (Box-Cox power exponential) transform.
//!
//! For a measurement `y` and parameters (L, M, S):
//!
//! ```text
//! L != 0:  z = ((y / M)^L - 1) / (L * S)
//! L == 0:  z = ln(y / M) / S
//! ```
//!
//! The inverse gives the measurement at a given SD score and is used both
//! for the tail restatement and for drawing reference curves.

use crate::constants::{LMS_L_ZERO_EPSILON, TAIL_RESTATEMENT_CUTOFF};
use crate::errors::{Result, ValidationError};
use crate::reference::LmsParameters;

/// Raw LMS z-score, without any tail restatement.
pub fn score(value: f64, lms: &LmsParameters) -> Result<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue("measurement".to_string()).into());
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue {
            field: "measurement".to_string(),
            value,
        }
        .into());
    }
    Ok(raw_z(value, lms))
}

fn raw_z(value: f64, lms: &LmsParameters) -> f64 {
    let ratio = value / lms.m;
    if lms.l.abs() < LMS_L_ZERO_EPSILON {
        ratio.ln() / lms.s
    } else {
        (ratio.powf(lms.l) - 1.0) / (lms.l * lms.s)
    }
}

/// Measurement value lying `z` SDs from the median.
///
/// Returns NaN when `1 + L*S*z <= 0`, where the transform has no inverse.
pub fn value_at_z(z: f64, lms: &LmsParameters) -> f64 {
    if lms.l.abs() < LMS_L_ZERO_EPSILON {
        return lms.m * (lms.s * z).exp();
    }
    let base = 1.0 + lms.l * lms.s * z;
    if base <= 0.0 {
        return f64::NAN;
    }
    lms.m * base.powf(1.0 / lms.l)
}

/// z-score with the WHO restatement applied beyond +/-3 SD.
///
/// Past the cutoff the distance from the 3 SD value is measured in units of
/// the 2 SD to 3 SD interval on the same side, which keeps the score linear
/// in the measurement where the LMS curve compresses the tails.
pub fn score_restated(value: f64, lms: &LmsParameters) -> Result<f64> {
    let z = score(value, lms)?;
    Ok(restate_tail(value, z, lms))
}

fn restate_tail(value: f64, z: f64, lms: &LmsParameters) -> f64 {
    let cutoff = TAIL_RESTATEMENT_CUTOFF;
    if z > cutoff {
        let sd3 = value_at_z(cutoff, lms);
        let sd2 = value_at_z(cutoff - 1.0, lms);
        let width = sd3 - sd2;
        if width.is_finite() && width > 0.0 {
            return cutoff + (value - sd3) / width;
        }
    } else if z < -cutoff {
        let sd3 = value_at_z(-cutoff, lms);
        let sd2 = value_at_z(-(cutoff - 1.0), lms);
        let width = sd2 - sd3;
        if width.is_finite() && width > 0.0 {
            return -cutoff + (value - sd3) / width;
        }
    }
    z
}
