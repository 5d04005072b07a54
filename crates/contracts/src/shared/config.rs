use serde::{Deserialize, Serialize};

use super::section_a::{SectionAField, ANSIBLE_PACKAGE_LABEL, VIRTUAL_ENV_LABEL};
use super::url_template::DEFAULT_ENDPOINT;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PlannerConfig {
    pub endpoint: EndpointConfig,
    pub section_a: SectionAConfig,
    pub rows: RowsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SectionAConfig {
    /// Метки полей раздела A в порядке отображения
    pub labels: Vec<String>,
}

impl Default for SectionAConfig {
    fn default() -> Self {
        Self {
            labels: vec![
                ANSIBLE_PACKAGE_LABEL.to_string(),
                VIRTUAL_ENV_LABEL.to_string(),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RowsConfig {
    /// Сколько строк создать при открытии страницы
    pub initial_rows: usize,
}

impl Default for RowsConfig {
    fn default() -> Self {
        Self { initial_rows: 1 }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[endpoint]
base_url = "https://yourtool.local/execute"

[section_a]
labels = ["ansible package name", "virtual env"]

[rows]
initial_rows = 1
"#;

impl PlannerConfig {
    /// Parse configuration from a TOML document.
    /// Missing sections take their defaults.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: PlannerConfig = toml::from_str(contents)?;
        if config.endpoint.base_url.trim().is_empty() {
            anyhow::bail!("endpoint.base_url must not be empty");
        }
        Ok(config)
    }

    /// Load the embedded configuration, falling back to built-in defaults
    pub fn load() -> Self {
        match Self::from_toml_str(DEFAULT_CONFIG) {
            Ok(config) => {
                log::info!(
                    "Using embedded configuration, endpoint: {}",
                    config.endpoint.base_url
                );
                config
            }
            Err(e) => {
                log::error!("Failed to parse embedded configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Пустые поля раздела A по списку меток
    pub fn section_a_fields(&self) -> Vec<SectionAField> {
        self.section_a
            .labels
            .iter()
            .map(|label| SectionAField::empty(label.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = PlannerConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.endpoint.base_url, "https://yourtool.local/execute");
        assert_eq!(config.rows.initial_rows, 1);
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let config = PlannerConfig::from_toml_str("[rows]\ninitial_rows = 3\n").unwrap();
        assert_eq!(config.rows.initial_rows, 3);
        assert_eq!(config.endpoint, EndpointConfig::default());
        assert_eq!(config.section_a.labels.len(), 2);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = PlannerConfig::from_toml_str("[endpoint]\nbase_url = \"  \"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_section_a_fields_start_empty() {
        let fields = PlannerConfig::default().section_a_fields();
        assert_eq!(
            fields,
            vec![
                SectionAField::empty("ansible package name"),
                SectionAField::empty("virtual env"),
            ]
        );
    }
}
