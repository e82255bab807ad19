use tempora_types::{AnalysisConfig, Confidence, ConflictResolution, DataPoint, TimeUnits};

#[test]
fn analysis_config_roundtrip() {
    let cfg = AnalysisConfig {
        conflict_resolution: ConflictResolution::Maximum,
        time_units: TimeUnits::Minutes,
        day_start_offset_seconds: 3_600,
        outlier_confidence: Confidence::C99p9,
        wilson_confidence: 0.9,
    };

    let json = serde_json::to_string(&cfg).expect("serialize analysis config");
    let de: AnalysisConfig = serde_json::from_str(&json).expect("deserialize analysis config");

    assert_eq!(de, cfg);
    assert_eq!(de.day_start_offset().num_hours(), 1);
}

#[test]
fn analysis_config_defaults() {
    let cfg = AnalysisConfig::default();
    assert_eq!(cfg.conflict_resolution, ConflictResolution::Average);
    assert_eq!(cfg.time_units, TimeUnits::Milliseconds);
    assert_eq!(cfg.day_start_offset().num_hours(), -7);
    assert_eq!(cfg.outlier_confidence, Confidence::C95);
}

#[test]
fn data_point_roundtrip() {
    let ts = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let p = DataPoint::new(ts, 4.25);
    let json = serde_json::to_string(&p).expect("serialize data point");
    let de: DataPoint = serde_json::from_str(&json).expect("deserialize data point");
    assert_eq!(de, p);
    let pair: (chrono::DateTime<chrono::Utc>, f64) = de.into();
    assert_eq!(pair, (ts, 4.25));
}
