//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::VeilConfig;
use crate::domain::errors::VeilError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Default configuration file name
pub const DEFAULT_CONFIG_PATH: &str = "veil.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`VeilConfig`]
/// 4. Applies environment variable overrides (`VEIL_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`VeilError::Configuration`] if the file is missing or unreadable,
/// a referenced environment variable is unset, the TOML is malformed, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use veil::config::loader::load_config;
///
/// let config = load_config("veil.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<VeilConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VeilError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        VeilError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: VeilConfig = toml::from_str(&contents)
        .map_err(|e| VeilError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finalize(config)
}

/// Loads configuration, falling back to defaults when no file is available
///
/// An explicitly requested path must exist. Without one, `veil.toml` in the
/// working directory is used if present, otherwise the built-in defaults.
/// Environment overrides and validation apply in every case.
pub fn load_config_or_default(path: Option<&str>) -> Result<VeilConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            finalize(VeilConfig::default())
        }
    }
}

fn finalize(mut config: VeilConfig) -> Result<VeilConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        VeilError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is a valid regex")
    })
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced environment variable that is
/// not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(VeilError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        VeilError::Configuration(format!("Invalid value for {name}: '{value}'"))
    })
}

/// Applies environment variable overrides using the `VEIL_*` prefix
///
/// Variables follow the pattern `VEIL_<SECTION>_<KEY>`, for example
/// `VEIL_GENERATOR_NUM_RECORDS` or `VEIL_VALIDATOR_REPORT_PATH`.
fn apply_env_overrides(config: &mut VeilConfig) -> Result<()> {
    if let Ok(val) = std::env::var("VEIL_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Generator
    if let Ok(val) = std::env::var("VEIL_GENERATOR_NUM_RECORDS") {
        config.generator.num_records = parse_env("VEIL_GENERATOR_NUM_RECORDS", &val)?;
    }
    if let Ok(val) = std::env::var("VEIL_GENERATOR_SEED") {
        config.generator.seed = Some(parse_env("VEIL_GENERATOR_SEED", &val)?);
    }
    if let Ok(val) = std::env::var("VEIL_GENERATOR_MIN_AGE") {
        config.generator.min_age = parse_env("VEIL_GENERATOR_MIN_AGE", &val)?;
    }
    if let Ok(val) = std::env::var("VEIL_GENERATOR_MAX_AGE") {
        config.generator.max_age = parse_env("VEIL_GENERATOR_MAX_AGE", &val)?;
    }
    if let Ok(val) = std::env::var("VEIL_GENERATOR_OUTPUT_PATH") {
        config.generator.output_path = val.into();
    }

    // Anonymizer
    config
        .anonymizer
        .apply_env_overrides()
        .map_err(|e| VeilError::Configuration(format!("{e:#}")))?;

    // Validator
    if let Ok(val) = std::env::var("VEIL_VALIDATOR_INPUT_PATH") {
        config.validator.input_path = val.into();
    }
    if let Ok(val) = std::env::var("VEIL_VALIDATOR_REPORT_PATH") {
        config.validator.report_path = val.into();
    }

    // Logging
    if let Ok(val) = std::env::var("VEIL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("VEIL_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("VEIL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val.into();
    }
    if let Ok(val) = std::env::var("VEIL_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("VEIL_LOADER_TEST_VAR", "test_value");
        let input = "path = \"${VEIL_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "path = \"test_value\"\n");
        std::env::remove_var("VEIL_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("VEIL_LOADER_MISSING_VAR");
        let input = "path = \"${VEIL_LOADER_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("VEIL_LOADER_COMMENTED_VAR");
        let input = "# path = \"${VEIL_LOADER_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${VEIL_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(VeilError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[generator]
num_records = 25
seed = 7

[validator]
report_path = "out/report.txt"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.generator.num_records, 25);
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(
            config.validator.report_path,
            std::path::PathBuf::from("out/report.txt")
        );
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[generator\nnum_records = ").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
