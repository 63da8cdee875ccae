use crate::core::{MatchMode, Query, QuerySource};
use crate::utils::error::{PairSumError, Result};
use crate::utils::validation::{
    parse_sequence, validate_non_empty_string, validate_required_field, validate_unique_names,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub batch: BatchConfig,
    #[serde(default, rename = "query")]
    pub queries: Vec<QueryConfig>,
    /// Set from the command line, never read from the file.
    #[serde(skip)]
    pub include_pairs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub name: String,
    pub description: Option<String>,
    pub mode: Option<MatchMode>,
    pub values: Option<ValuesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub name: String,
    pub target: i64,
    pub values: Option<ValuesConfig>,
    pub mode: Option<MatchMode>,
    pub expect: Option<bool>,
}

/// A sequence written either as a TOML array or as a comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValuesConfig {
    List(Vec<i64>),
    Text(String),
}

impl ValuesConfig {
    pub fn resolve(&self) -> Result<Vec<i64>> {
        match self {
            ValuesConfig::List(values) => Ok(values.clone()),
            ValuesConfig::Text(text) => parse_sequence(text),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PairSumError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PairSumError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${VALUES})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PairSumError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_pairs(mut self, include_pairs: bool) -> Self {
        self.include_pairs = include_pairs;
        self
    }

    pub fn default_mode(&self) -> MatchMode {
        self.batch.mode.unwrap_or_default()
    }

    fn resolve_query(&self, query: &QueryConfig) -> Result<Query> {
        let configured = query.values.as_ref().or(self.batch.values.as_ref());
        let values = validate_required_field(&format!("query[{}].values", query.name), &configured)?
            .resolve()?;

        Ok(Query::new(query.name.clone(), values, query.target)
            .with_mode(query.mode.unwrap_or_else(|| self.default_mode()))
            .with_expect(query.expect))
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;

        if self.queries.is_empty() {
            return Err(PairSumError::MissingConfigError {
                field: "query".to_string(),
            });
        }

        for query in &self.queries {
            validate_non_empty_string("query.name", &query.name)?;
        }
        validate_unique_names("query.name", self.queries.iter().map(|q| q.name.as_str()))?;

        // 每個查詢都必須能解析出數列
        for query in &self.queries {
            self.resolve_query(query)?;
        }

        Ok(())
    }
}

impl QuerySource for TomlConfig {
    fn queries(&self) -> Result<Vec<Query>> {
        self.queries.iter().map(|q| self.resolve_query(q)).collect()
    }

    fn include_pairs(&self) -> bool {
        self.include_pairs
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[batch]
name = "textbook"
values = [15, 4, 11, 3, -10, 12, 7, 27]

[[query]]
name = "six"
target = 6
expect = false

[[query]]
name = "seventeen"
target = 17
values = "10, 15, 3, 7"
mode = "even-match-count"
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.batch.name, "textbook");
        assert_eq!(config.default_mode(), MatchMode::Exists);
        assert!(config.validate().is_ok());

        let queries = config.queries().unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].values, vec![15, 4, 11, 3, -10, 12, 7, 27]);
        assert_eq!(queries[0].expect, Some(false));
        assert_eq!(queries[1].values, vec![10, 15, 3, 7]);
        assert_eq!(queries[1].mode, MatchMode::EvenMatchCount);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PAIRSUM_TEST_VALUES", "3, 3");

        let toml_content = r#"
[batch]
name = "env"

[[query]]
name = "from-env"
target = 6
values = "${PAIRSUM_TEST_VALUES}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.queries().unwrap()[0].values, vec![3, 3]);

        std::env::remove_var("PAIRSUM_TEST_VALUES");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[batch]
name = "env"

[[query]]
name = "unset"
target = 6
values = "${PAIRSUM_TEST_DEFINITELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PairSumError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let no_queries = r#"
[batch]
name = "empty"
"#;
        let config = TomlConfig::from_toml_str(no_queries).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PairSumError::MissingConfigError { .. })
        ));

        let duplicate = r#"
[batch]
name = "dup"
values = [1, 2]

[[query]]
name = "a"
target = 3

[[query]]
name = "a"
target = 4
"#;
        let config = TomlConfig::from_toml_str(duplicate).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PairSumError::InvalidConfigValueError { .. })
        ));

        let no_values = r#"
[batch]
name = "nothing"

[[query]]
name = "orphan"
target = 3
"#;
        let config = TomlConfig::from_toml_str(no_values).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[batch\nname ="),
            Err(PairSumError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.batch.name, "textbook");
        assert!(!config.include_pairs());
        assert!(config.with_pairs(true).include_pairs());
    }
}
