//! YAML configuration loading
//!
//! Pipeline configuration is an untyped YAML mapping: the schema belongs to
//! the caller, not to this crate. The loader only guarantees that the file
//! was readable, that it parsed, and that the document root is a mapping.
//!
//! Every failure cause (missing file, permission denied, malformed document)
//! collapses into [`Error::Config`] carrying the underlying detail; the
//! failure is logged and then propagated unchanged. There is no retry and no
//! default fallback.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Path consulted by [`load_default_config`].
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Untyped configuration mapping: string keys to arbitrary nested YAML values.
pub type ConfigMap = serde_yaml::Mapping;

/// Load configuration from a YAML file.
///
/// On success the parsed mapping is returned and an informational event
/// naming the path is emitted. On failure an error event is emitted and the
/// failure is returned to the caller.
///
/// # Example
///
/// ```no_run
/// use preparar::config::load_config;
///
/// let config = load_config("config/config.yaml")?;
/// # Ok::<(), preparar::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ConfigMap> {
    let path = config_path.as_ref();

    let yaml_content = fs::read_to_string(path).map_err(|e| {
        error!("Error loading configuration from {}: {}", path.display(), e);
        Error::Config(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    let document: serde_yaml::Value = serde_yaml::from_str(&yaml_content).map_err(|e| {
        error!("Error loading configuration from {}: {}", path.display(), e);
        Error::Config(format!("Failed to parse YAML config: {e}"))
    })?;

    let config = match document {
        serde_yaml::Value::Mapping(mapping) => mapping,
        other => {
            let kind = yaml_kind(&other);
            error!(
                "Error loading configuration from {}: document root is {}, not a mapping",
                path.display(),
                kind
            );
            return Err(Error::Config(format!(
                "Config document root must be a mapping, got {kind}"
            )));
        }
    };

    info!("Configuration loaded from {}", path.display());
    Ok(config)
}

/// Load configuration from [`DEFAULT_CONFIG_PATH`].
pub fn load_default_config() -> Result<ConfigMap> {
    load_config(DEFAULT_CONFIG_PATH)
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let yaml = r#"
model:
  name: churn-classifier
  architecture: gradient-boosting

data:
  train: data/train.csv
  test_size: 0.2

features:
  - tenure
  - monthly_charges
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        let model = config.get(&Value::from("model")).unwrap();
        assert_eq!(
            model.get("name").unwrap(),
            &Value::from("churn-classifier")
        );

        let data = config.get(&Value::from("data")).unwrap();
        assert_eq!(data.get("test_size").unwrap(), &Value::from(0.2));

        let features = config.get(&Value::from("features")).unwrap();
        assert_eq!(features.as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("config/does_not_exist.yaml");
        assert!(matches!(result, Err(Error::Config(_))));
        if let Err(e) = result {
            assert!(e.to_string().contains("does_not_exist.yaml"));
        }
    }

    #[test]
    fn test_load_malformed_yaml() {
        let yaml = "this is not valid yaml: [}";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_non_mapping_root() {
        let yaml = "- just\n- a\n- list\n";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(Error::Config(_))));
        if let Err(e) = result {
            assert!(e.to_string().contains("mapping"));
        }
    }

    #[test]
    fn test_load_nested_structure() {
        let yaml = r#"
training:
  optimizer:
    name: adam
    lr: 0.001
  epochs: 10
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        let training = config.get(&Value::from("training")).unwrap();
        let optimizer = training.get("optimizer").unwrap();
        assert_eq!(optimizer.get("lr").unwrap(), &Value::from(0.001));
        assert_eq!(training.get("epochs").unwrap(), &Value::from(10));
    }

    #[test]
    fn test_default_path_constant() {
        assert_eq!(DEFAULT_CONFIG_PATH, "config/config.yaml");
        // No config/ directory exists relative to the test cwd, so the
        // default-path loader must fail rather than return an empty mapping.
        let result = load_default_config();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
