use super::classification_model::{ClassificationTable, GrowthStatus};
use crate::errors::{Result, ValidationError};
use crate::reference::Indicator;

/// Classifies a z-score for an indicator using the given rule table.
pub fn classify(table: &ClassificationTable, indicator: Indicator, z: f64) -> Result<GrowthStatus> {
    if !z.is_finite() {
        return Err(ValidationError::NonFiniteValue(format!("{} z-score", indicator)).into());
    }

    let rules = table.rules_for(indicator)?;
    let band = rules.thresholds.band_for(z);
    let rule = rules.rule(band);

    Ok(GrowthStatus {
        code: rule.code.clone(),
        label: rule.label.clone(),
        band,
        message: render_message(&rule.message, indicator, z),
        alert: rule.alert,
    })
}

fn render_message(template: &str, indicator: Indicator, z: f64) -> String {
    template
        .replace("{indicator}", indicator.label())
        .replace("{z}", &format!("{:.2}", z))
}
