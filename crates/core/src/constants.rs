/// Average days per month used by the WHO growth standards (365.25 / 12).
pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.4375;

/// |L| below this is treated as L = 0 (log-normal form of the LMS transform)
pub const LMS_L_ZERO_EPSILON: f64 = 1e-7;

/// SD score beyond which the WHO tail restatement applies
pub const TAIL_RESTATEMENT_CUTOFF: f64 = 3.0;

/// Version tag of the bundled reference dataset
pub const WHO_2006_DATASET_VERSION: &str = "who-2006-condensed-1";

/// SD lines returned for reference charts
pub const CHART_SD_LINES: [f64; 7] = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
