//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables hold `ENV_MUTEX` to avoid
//! interference between tests.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use veil::config::{load_config, load_config_or_default};
use veil::domain::VeilError;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("VEIL_APPLICATION_LOG_LEVEL");
    std::env::remove_var("VEIL_GENERATOR_NUM_RECORDS");
    std::env::remove_var("VEIL_GENERATOR_SEED");
    std::env::remove_var("VEIL_ANONYMIZER_DRY_RUN");
    std::env::remove_var("VEIL_ANONYMIZER_AUDIT_ENABLED");
    std::env::remove_var("VEIL_VALIDATOR_REPORT_PATH");
    std::env::remove_var("TEST_VEIL_DATA_DIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[generator]
num_records = 250
seed = 7
min_age = 21
max_age = 65
output_path = "data/raw.csv"

[anonymizer]
input_path = "data/raw.csv"
output_path = "data/anon.csv"
dry_run = true
sample_size = 3

[anonymizer.audit]
enabled = false
log_path = "logs/audit.log"
json_format = false

[validator]
input_path = "data/anon.csv"
report_path = "results/report.txt"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "never"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");

    assert_eq!(config.generator.num_records, 250);
    assert_eq!(config.generator.seed, Some(7));
    assert_eq!(config.generator.min_age, 21);
    assert_eq!(config.generator.max_age, 65);
    assert_eq!(config.generator.output_path, PathBuf::from("data/raw.csv"));

    assert_eq!(config.anonymizer.input_path, PathBuf::from("data/raw.csv"));
    assert_eq!(config.anonymizer.output_path, PathBuf::from("data/anon.csv"));
    assert!(config.anonymizer.dry_run);
    assert_eq!(config.anonymizer.sample_size, 3);
    assert!(!config.anonymizer.audit.enabled);
    assert!(!config.anonymizer.audit.json_format);

    assert_eq!(
        config.validator.report_path,
        PathBuf::from("results/report.txt")
    );

    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "never");
}

#[test]
fn test_load_empty_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.generator.num_records, 100);
    assert_eq!(config.generator.seed, None);
    assert_eq!(
        config.generator.output_path,
        PathBuf::from("2_data/synthetic_data.csv")
    );
    assert_eq!(
        config.anonymizer.output_path,
        PathBuf::from("2_data/anonymized_data_gdpr.csv")
    );
    assert_eq!(
        config.anonymizer.audit.log_path,
        PathBuf::from("5_logs/anonymization_audit.log")
    );
    assert_eq!(
        config.validator.report_path,
        PathBuf::from("3_results/validation_report.txt")
    );
    assert_eq!(config.logging.local_path, PathBuf::from("5_logs"));
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_VEIL_DATA_DIR", "/srv/veil");

    let temp_file = write_config(
        r#"
[generator]
output_path = "${TEST_VEIL_DATA_DIR}/synthetic.csv"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(
        config.generator.output_path,
        PathBuf::from("/srv/veil/synthetic.csv")
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_is_config_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[validator]
report_path = "${TEST_VEIL_DATA_DIR}/report.txt"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, VeilError::Configuration(_)));
    assert!(err.to_string().contains("TEST_VEIL_DATA_DIR"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("VEIL_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("VEIL_GENERATOR_NUM_RECORDS", "42");
    std::env::set_var("VEIL_GENERATOR_SEED", "1234");
    std::env::set_var("VEIL_ANONYMIZER_DRY_RUN", "true");
    std::env::set_var("VEIL_ANONYMIZER_AUDIT_ENABLED", "false");
    std::env::set_var("VEIL_VALIDATOR_REPORT_PATH", "out/report.txt");

    let temp_file = write_config(
        r#"
[application]
log_level = "info"

[generator]
num_records = 500
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.generator.num_records, 42);
    assert_eq!(config.generator.seed, Some(1234));
    assert!(config.anonymizer.dry_run);
    assert!(!config.anonymizer.audit.enabled);
    assert_eq!(config.validator.report_path, PathBuf::from("out/report.txt"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("VEIL_GENERATOR_NUM_RECORDS", "many");

    let temp_file = write_config("");
    let result = load_config(temp_file.path());
    assert!(matches!(result, Err(VeilError::Configuration(_))));

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let cases = [
        "[application]\nlog_level = \"loud\"\n",
        "[generator]\nnum_records = 0\n",
        "[generator]\nmin_age = 60\nmax_age = 40\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
        "[anonymizer]\ninput_path = \"same.csv\"\noutput_path = \"same.csv\"\n",
    ];

    for contents in cases {
        let temp_file = write_config(contents);
        let result = load_config(temp_file.path());
        assert!(
            matches!(result, Err(VeilError::Configuration(_))),
            "expected configuration error for {contents:?}"
        );
    }
}

#[test]
fn test_malformed_toml_is_config_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[generator\nnum_records = ");
    let err = load_config(temp_file.path()).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_explicit_missing_path_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = load_config_or_default(Some(missing.to_str().unwrap()));
    assert!(matches!(result, Err(VeilError::Configuration(_))));
}
