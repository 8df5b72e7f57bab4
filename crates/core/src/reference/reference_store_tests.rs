//! Tests for reference lookup, interpolation and dataset validation.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::measurements::Sex;
    use crate::reference::{
        load_reference_file, parse_reference_csv, Indicator, KeyKind, LmsParameters,
        ReferenceData, ReferenceDataError, ReferenceEntry, ReferenceKey,
    };
    use std::io::Write;

    const EPS: f64 = 1e-12;

    /// Two rows per series; weight-for-height indexed 45-110 cm, everything
    /// else 0-60 months.
    fn minimal_entries() -> Vec<ReferenceEntry> {
        let mut entries = Vec::new();
        for indicator in Indicator::ALL {
            for sex in Sex::ALL {
                let (lo, hi) = match indicator.key_kind() {
                    KeyKind::AgeMonths => (0.0, 60.0),
                    KeyKind::HeightCm => (45.0, 110.0),
                };
                entries.push(ReferenceEntry {
                    indicator,
                    sex,
                    index: lo,
                    lms: LmsParameters::new(0.2, 3.0, 0.14),
                });
                entries.push(ReferenceEntry {
                    indicator,
                    sex,
                    index: hi,
                    lms: LmsParameters::new(-0.2, 18.0, 0.12),
                });
            }
        }
        entries
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let data = ReferenceData::who_2006().unwrap();
        assert_eq!(data.version(), crate::constants::WHO_2006_DATASET_VERSION);
        assert_eq!(data.coverage_report().len(), 8);

        let wfa = data.coverage(Indicator::WeightForAge, Sex::Female).unwrap();
        assert_eq!((wfa.min, wfa.max), (0.0, 60.0));
        let wfh = data.coverage(Indicator::WeightForHeight, Sex::Male).unwrap();
        assert_eq!(wfh.kind, KeyKind::HeightCm);
        assert_eq!((wfh.min, wfh.max), (45.0, 120.0));
    }

    #[test]
    fn test_exact_row_returns_row_parameters() {
        let data = ReferenceData::who_2006().unwrap();
        let lms = data
            .lookup_by_age(Indicator::WeightForAge, Sex::Female, 6.0)
            .unwrap();
        assert_eq!(lms, LmsParameters::new(-0.0756, 7.2970, 0.12204));
    }

    #[test]
    fn test_boundary_rows_are_inclusive() {
        let data = ReferenceData::who_2006().unwrap();
        assert!(data
            .lookup_by_age(Indicator::HeightForAge, Sex::Male, 0.0)
            .is_ok());
        assert!(data
            .lookup_by_age(Indicator::HeightForAge, Sex::Male, 60.0)
            .is_ok());
        assert!(data
            .lookup_by_height(Indicator::WeightForHeight, Sex::Female, 120.0)
            .is_ok());
    }

    #[test]
    fn test_midpoint_interpolation_is_componentwise_mean() {
        let data = ReferenceData::who_2006().unwrap();
        let a = data
            .lookup_by_age(Indicator::WeightForAge, Sex::Male, 3.0)
            .unwrap();
        let b = data
            .lookup_by_age(Indicator::WeightForAge, Sex::Male, 4.0)
            .unwrap();
        let mid = data
            .lookup_by_age(Indicator::WeightForAge, Sex::Male, 3.5)
            .unwrap();
        assert!((mid.l - (a.l + b.l) / 2.0).abs() < EPS);
        assert!((mid.m - (a.m + b.m) / 2.0).abs() < EPS);
        assert!((mid.s - (a.s + b.s) / 2.0).abs() < EPS);
    }

    #[test]
    fn test_height_indexed_interpolation() {
        let data = ReferenceData::from_entries("test", minimal_entries()).unwrap();
        let lms = data
            .lookup_by_height(Indicator::WeightForHeight, Sex::Female, 77.5)
            .unwrap();
        assert!((lms.l - 0.0).abs() < EPS);
        assert!((lms.m - 10.5).abs() < EPS);
        assert!((lms.s - 0.13).abs() < EPS);
    }

    #[test]
    fn test_out_of_range_is_reported_not_extrapolated() {
        let data = ReferenceData::who_2006().unwrap();
        let err = data
            .lookup_by_age(Indicator::WeightForAge, Sex::Female, 200.0)
            .unwrap_err();
        match err {
            Error::OutOfRange(e) => {
                assert_eq!(e.indicator, Indicator::WeightForAge);
                assert_eq!(e.value, 200.0);
                assert_eq!(e.max, 60.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = data
            .lookup_by_height(Indicator::WeightForHeight, Sex::Male, 44.9)
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange(_)));
    }

    #[test]
    fn test_key_kind_mismatch_is_rejected() {
        let data = ReferenceData::who_2006().unwrap();
        let err = data
            .lookup(
                Indicator::WeightForHeight,
                Sex::Male,
                ReferenceKey::AgeMonths(6.0),
            )
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_missing_series_fails_at_load() {
        let entries: Vec<_> = minimal_entries()
            .into_iter()
            .filter(|e| {
                !(e.indicator == Indicator::HeadCircumferenceForAge && e.sex == Sex::Male)
            })
            .collect();
        let err = ReferenceData::from_entries("test", entries).unwrap_err();
        assert_eq!(
            err,
            ReferenceDataError::MissingSeries {
                indicator: Indicator::HeadCircumferenceForAge,
                sex: Sex::Male
            }
        );
    }

    #[test]
    fn test_unordered_rows_fail_at_load() {
        let mut entries = minimal_entries();
        entries.swap(0, 1);
        let err = ReferenceData::from_entries("test", entries).unwrap_err();
        assert!(matches!(err, ReferenceDataError::UnorderedIndex { .. }));
    }

    #[test]
    fn test_duplicate_rows_fail_at_load() {
        let mut entries = minimal_entries();
        let dup = entries[0];
        entries.insert(1, dup);
        let err = ReferenceData::from_entries("test", entries).unwrap_err();
        assert!(matches!(err, ReferenceDataError::UnorderedIndex { .. }));
    }

    #[test]
    fn test_non_positive_median_fails_at_load() {
        let mut entries = minimal_entries();
        entries[3].lms.m = 0.0;
        let err = ReferenceData::from_entries("test", entries).unwrap_err();
        assert!(matches!(err, ReferenceDataError::InvalidParameters { .. }));
    }

    #[test]
    fn test_single_row_series_fails_at_load() {
        let mut entries = minimal_entries();
        entries.remove(1);
        let err = ReferenceData::from_entries("test", entries).unwrap_err();
        assert!(matches!(
            err,
            ReferenceDataError::InsufficientRows { rows: 1, .. }
        ));
    }

    #[test]
    fn test_empty_version_fails_at_load() {
        let err = ReferenceData::from_entries("  ", minimal_entries()).unwrap_err();
        assert_eq!(err, ReferenceDataError::MissingVersion);
    }

    #[test]
    fn test_csv_with_unknown_indicator_is_malformed() {
        let csv = "indicator,sex,index,l,m,s\nbmi,female,0,1,2,0.1\n";
        let err = parse_reference_csv(csv.as_bytes(), "test").unwrap_err();
        assert!(matches!(err, ReferenceDataError::MalformedRow { .. }));
    }

    #[test]
    fn test_csv_with_bad_number_is_malformed() {
        let csv = "indicator,sex,index,l,m,s\nwfa,female,zero,1,2,0.1\n";
        let err = parse_reference_csv(csv.as_bytes(), "test").unwrap_err();
        assert!(matches!(err, ReferenceDataError::MalformedRow { .. }));
    }

    #[test]
    fn test_load_reference_file_uses_file_stem_as_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom-table.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# custom table").unwrap();
        writeln!(file, "indicator,sex,index,l,m,s").unwrap();
        for e in minimal_entries() {
            writeln!(
                file,
                "{},{},{},{},{},{}",
                e.indicator.code(),
                e.sex,
                e.index,
                e.lms.l,
                e.lms.m,
                e.lms.s
            )
            .unwrap();
        }
        drop(file);

        let data = load_reference_file(&path, None).unwrap();
        assert_eq!(data.version(), "custom-table");
        assert_eq!(data.row_count(), 16);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_reference_file("/nonexistent/table.csv", Some("x")).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Io(_)));
    }

    #[test]
    fn test_curves_median_line_matches_table() {
        let data = ReferenceData::who_2006().unwrap();
        let curves = data.curves(Indicator::HeightForAge, Sex::Female).unwrap();
        assert_eq!(curves.sd_lines.len(), 7);
        let first = &curves.points[0];
        assert_eq!(first.index, 0.0);
        assert!((first.values[3] - 49.1477).abs() < 1e-9);
        assert!(first.values.windows(2).all(|w| w[0] < w[1]));
    }
}
