#[cfg(test)]
mod tests {
    use crate::classification::{
        classify, Band, BandThresholds, ClassificationTable, IndicatorRules,
    };
    use crate::errors::Error;
    use crate::reference::Indicator;

    fn code(indicator: Indicator, z: f64) -> String {
        classify(&ClassificationTable::default(), indicator, z)
            .unwrap()
            .code
    }

    #[test]
    fn test_band_edges() {
        let t = BandThresholds::default();
        assert_eq!(t.band_for(-3.0000001), Band::SevereDeficit);
        assert_eq!(t.band_for(-3.0), Band::ModerateDeficit);
        assert_eq!(t.band_for(-2.0000001), Band::ModerateDeficit);
        assert_eq!(t.band_for(-2.0), Band::Normal);
        assert_eq!(t.band_for(0.0), Band::Normal);
        assert_eq!(t.band_for(2.0), Band::Normal);
        assert_eq!(t.band_for(2.0000001), Band::Elevated);
        assert_eq!(t.band_for(3.0), Band::Elevated);
        assert_eq!(t.band_for(3.0000001), Band::SevereElevation);
    }

    #[test]
    fn test_minus_two_is_normal() {
        assert_eq!(code(Indicator::HeightForAge, -2.0), "normal");
        assert_eq!(code(Indicator::HeightForAge, -2.0000001), "stunted");
    }

    #[test]
    fn test_indicator_vocabulary() {
        assert_eq!(code(Indicator::WeightForAge, -3.5), "severely_underweight");
        assert_eq!(code(Indicator::WeightForAge, 2.5), "above_normal");
        assert_eq!(code(Indicator::WeightForAge, 3.5), "above_normal");
        assert_eq!(code(Indicator::HeightForAge, 3.5), "very_tall");
        assert_eq!(code(Indicator::WeightForHeight, -2.5), "wasted");
        assert_eq!(code(Indicator::WeightForHeight, 2.5), "overweight");
        assert_eq!(code(Indicator::WeightForHeight, 3.5), "obese");
        assert_eq!(
            code(Indicator::HeadCircumferenceForAge, -3.5),
            "severe_microcephaly"
        );
        assert_eq!(code(Indicator::HeadCircumferenceForAge, 2.5), "macrocephaly");
    }

    #[test]
    fn test_alert_flags() {
        let table = ClassificationTable::default();
        assert!(!classify(&table, Indicator::HeightForAge, 2.5).unwrap().alert);
        assert!(classify(&table, Indicator::HeightForAge, 3.5).unwrap().alert);
        assert!(classify(&table, Indicator::WeightForAge, 2.5).unwrap().alert);
        assert!(classify(&table, Indicator::WeightForHeight, -2.5).unwrap().alert);
        assert!(!classify(&table, Indicator::WeightForHeight, 0.0).unwrap().alert);
    }

    #[test]
    fn test_message_interpolation() {
        let status =
            classify(&ClassificationTable::default(), Indicator::WeightForHeight, 0.123).unwrap();
        assert_eq!(
            status.message,
            "Weight-for-height is within the normal range (z = 0.12)."
        );
    }

    #[test]
    fn test_non_finite_z_is_rejected() {
        let err = classify(&ClassificationTable::default(), Indicator::WeightForAge, f64::NAN)
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_custom_thresholds_are_used() {
        let mut table = ClassificationTable::default();
        let mut rules = IndicatorRules::who_default(Indicator::WeightForHeight);
        rules.thresholds.elevated_high = 1.0;
        table.set_rules(Indicator::WeightForHeight, rules);
        table.validate().unwrap();

        assert_eq!(
            classify(&table, Indicator::WeightForHeight, 1.5).unwrap().code,
            "overweight"
        );
    }

    #[test]
    fn test_non_increasing_thresholds_fail_validation() {
        let mut table = ClassificationTable::default();
        let mut rules = IndicatorRules::who_default(Indicator::HeightForAge);
        rules.thresholds.moderate_low = -3.0;
        table.set_rules(Indicator::HeightForAge, rules);

        let err = table.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_band_serialization() {
        assert_eq!(
            serde_json::to_string(&Band::SevereDeficit).unwrap(),
            "\"severe_deficit\""
        );
    }
}
