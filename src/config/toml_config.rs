use crate::utils::error::{CounterError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub counter: CounterSection,
    #[serde(default)]
    pub process: ProcessSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterSection {
    pub start: Option<u64>,
    pub end: Option<u64>,
    pub interval_ms: Option<u64>,
    pub exit_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessSection {
    pub print_pid: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(CounterError::IoError)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content, origin)?;

        toml::from_str(&processed_content).map_err(|e| CounterError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${COUNTER_END})，未定義的變數保留原文
    fn substitute_env_vars(content: &str, origin: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CounterError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn print_pid(&self) -> bool {
        self.process.print_pid.unwrap_or(false)
    }
}
