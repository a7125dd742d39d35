//! Tests for config module.

use super::*;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

// ==================== Duration parsing tests ====================

#[test]
fn test_parse_duration_seconds() {
    assert_eq!(duration::parse_duration("1s").unwrap(), Duration::from_secs(1));
}

#[test]
fn test_parse_duration_minutes() {
    assert_eq!(duration::parse_duration("2m").unwrap(), Duration::from_secs(120));
}

#[test]
fn test_parse_duration_hours() {
    assert_eq!(duration::parse_duration("1h").unwrap(), Duration::from_secs(3600));
}

#[test]
fn test_parse_duration_milliseconds() {
    assert_eq!(
        duration::parse_duration("250ms").unwrap(),
        Duration::from_millis(250)
    );
}

#[test]
fn test_parse_duration_fractional() {
    assert_eq!(duration::parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
}

#[test]
fn test_parse_duration_requires_unit() {
    let result = duration::parse_duration("3");
    assert!(result.unwrap_err().contains("needs a unit"));
}

#[test]
fn test_parse_duration_unknown_unit() {
    let result = duration::parse_duration("10d");
    assert!(result.unwrap_err().contains("needs a unit"));
}

#[test]
fn test_parse_duration_invalid_number() {
    let result = duration::parse_duration("1.2.3s");
    assert!(result.unwrap_err().contains("no valid amount"));
}

#[test]
fn test_parse_duration_rejects_zero() {
    let result = duration::parse_duration("0ms");
    assert!(result.unwrap_err().contains("must be positive"));
}

#[test]
fn test_parse_duration_out_of_range() {
    let result = duration::parse_duration("99999999999999999999999h");
    assert!(result.unwrap_err().contains("out of range"));
}

// ==================== YAML field loading tests ====================

fn minimal_valid_yaml() -> String {
    r#"
app:
  name: kids-site
"#
    .to_string()
}

#[test]
fn test_minimal_config_uses_defaults() {
    let cfg = Config::from_yaml(&minimal_valid_yaml()).unwrap();

    assert_eq!(cfg.app.name, "kids-site");
    assert!(cfg.app.log_level.is_none());
    assert_eq!(cfg.source.kind, SourceKind::File);
    assert_eq!(cfg.source.base, ".");
    assert!(cfg.source.timeout.is_none());
    assert!(cfg.countdown.interval.is_none());
    assert!(cfg.countdown.default_days.is_none());
    assert!(cfg.countdown.halt_on_expiry.is_none());
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_load_all_fields() {
    let yaml = r#"
app:
  name: kids-site
  log_level: debug

source:
  kind: http
  base: https://kids.example
  timeout: 5s

countdown:
  interval: 500ms
  default_days: 14
  halt_on_expiry: false
  max_ticks: 10
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.app.log_level.as_deref(), Some("debug"));
    assert_eq!(cfg.source.kind, SourceKind::Http);
    assert_eq!(cfg.source.base, "https://kids.example");
    assert_eq!(cfg.source.timeout, Some(Duration::from_secs(5)));
    assert_eq!(cfg.countdown.interval, Some(Duration::from_millis(500)));
    assert_eq!(cfg.countdown.default_days, Some(14));
    assert_eq!(cfg.countdown.halt_on_expiry, Some(false));
    assert_eq!(cfg.countdown.max_ticks, Some(10));
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_missing_app_section_fails_to_parse() {
    let result = Config::from_yaml("source:\n  kind: file\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_unknown_source_kind_fails_to_parse() {
    let yaml = format!("{}source:\n  kind: ftp\n", minimal_valid_yaml());
    assert!(matches!(Config::from_yaml(&yaml), Err(ConfigError::Parse(_))));
}

#[test]
fn test_invalid_duration_fails_to_parse() {
    let yaml = format!("{}countdown:\n  interval: soon\n", minimal_valid_yaml());
    assert!(matches!(Config::from_yaml(&yaml), Err(ConfigError::Parse(_))));
}

#[test]
fn test_huge_interval_is_a_parse_error() {
    let yaml = format!(
        "{}countdown:\n  interval: 99999999999999999999999h\n",
        minimal_valid_yaml()
    );
    assert!(matches!(Config::from_yaml(&yaml), Err(ConfigError::Parse(_))));
}

#[test]
fn test_zero_timeout_is_a_parse_error() {
    let yaml = format!("{}source:\n  timeout: 0s\n", minimal_valid_yaml());
    assert!(matches!(Config::from_yaml(&yaml), Err(ConfigError::Parse(_))));
}

// ==================== Validation tests ====================

fn validation_message(yaml: &str) -> String {
    match Config::from_yaml(yaml).unwrap().validate() {
        Err(ConfigError::Validation(msg)) => msg,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_validate_empty_name() {
    assert!(validation_message("app:\n  name: \"\"\n").contains("app.name"));
}

#[test]
fn test_validate_http_source_requires_url() {
    let yaml = format!("{}source:\n  kind: http\n  base: ./public\n", minimal_valid_yaml());
    assert!(validation_message(&yaml).contains("http(s) URL"));
}

#[test]
fn test_validate_negative_default_days() {
    let yaml = format!("{}countdown:\n  default_days: -1\n", minimal_valid_yaml());
    assert!(validation_message(&yaml).contains("default_days"));
}

#[test]
fn test_validate_default_days_too_large() {
    let yaml = format!(
        "{}countdown:\n  default_days: 9000000000000\n",
        minimal_valid_yaml()
    );
    assert!(validation_message(&yaml).contains("default_days"));
}

#[test]
fn test_validate_default_days_upper_bound_accepted() {
    let yaml = format!(
        "{}countdown:\n  default_days: {}\n",
        minimal_valid_yaml(),
        MAX_DEFAULT_DAYS
    );
    assert!(Config::from_yaml(&yaml).unwrap().validate().is_ok());
}

#[test]
fn test_validate_zero_max_ticks() {
    let yaml = format!("{}countdown:\n  max_ticks: 0\n", minimal_valid_yaml());
    assert!(validation_message(&yaml).contains("max_ticks"));
}

// ==================== Override and file loading tests ====================

#[test]
fn test_source_override_replaces_base() {
    let mut cfg = Config::from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.apply_source_override(Some("/srv/site".into()));
    assert_eq!(cfg.source.base, "/srv/site");
}

#[test]
fn test_blank_source_override_is_ignored() {
    let mut cfg = Config::from_yaml(&minimal_valid_yaml()).unwrap();
    cfg.apply_source_override(Some("   ".into()));
    cfg.apply_source_override(None);
    assert_eq!(cfg.source.base, ".");
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", minimal_valid_yaml()).unwrap();

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.app.name, "kids-site");
}

#[test]
fn test_load_missing_file() {
    let result = Config::load("/nonexistent/site.yaml");
    assert!(matches!(result, Err(ConfigError::ReadFile(_))));
}
