use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");

    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.output_dir, PathBuf::from("."));
    assert_eq!(
        cfg.fedreg_base_url,
        "https://www.federalregister.gov/api/v1/"
    );
    assert_eq!(cfg.lookback_days, 365);
    assert_eq!(cfg.per_page, 100);
    assert_eq!(cfg.request_timeout_secs, 20);
    assert_eq!(cfg.user_agent, "rulewatch/0.1 (regulatory-tracking)");
    assert_eq!(cfg.rolling_window, 7);
    assert_eq!(cfg.months, 12);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("RULEWATCH_OUTPUT_DIR", "/tmp/rulewatch");
    map.insert("RULEWATCH_LOOKBACK_DAYS", "30");
    map.insert("RULEWATCH_PER_PAGE", "50");
    map.insert("RULEWATCH_REQUEST_TIMEOUT_SECS", "5");
    map.insert("RULEWATCH_ROLLING_WINDOW", "14");
    map.insert("RULEWATCH_MONTHS", "6");
    map.insert("RULEWATCH_LOG_LEVEL", "debug");

    let cfg = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(cfg.output_dir, PathBuf::from("/tmp/rulewatch"));
    assert_eq!(cfg.lookback_days, 30);
    assert_eq!(cfg.per_page, 50);
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.rolling_window, 14);
    assert_eq!(cfg.months, 6);
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn build_app_config_rejects_non_numeric_per_page() {
    let mut map = HashMap::new();
    map.insert("RULEWATCH_PER_PAGE", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RULEWATCH_PER_PAGE"),
        "expected InvalidEnvVar(RULEWATCH_PER_PAGE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_lookback() {
    let mut map = HashMap::new();
    map.insert("RULEWATCH_LOOKBACK_DAYS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, ref reason }) if var == "RULEWATCH_LOOKBACK_DAYS" && reason.contains("greater than zero")),
        "expected InvalidEnvVar(RULEWATCH_LOOKBACK_DAYS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_lookback_beyond_u32() {
    let mut map = HashMap::new();
    map.insert("RULEWATCH_LOOKBACK_DAYS", "99999999999");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn output_paths_are_rooted_at_output_dir() {
    let mut map = HashMap::new();
    map.insert("RULEWATCH_OUTPUT_DIR", "out");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.raw_csv_path(),
        PathBuf::from("out/data/raw/epa_prorule_raw.csv")
    );
    assert_eq!(
        cfg.normalized_csv_path(),
        PathBuf::from("out/data/processed/epa_prorule_normalized.csv")
    );
    assert_eq!(cfg.qa_report_path(), PathBuf::from("out/reports/qa_report.md"));
    assert_eq!(cfg.output_dirs()[3], PathBuf::from("out/visuals"));
}
