use crate::error::{AppError, AppResult, ConfigError, FileError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 抓包根目录下存放题目的文件夹
    pub questions_dir: String,
    /// 题目文件夹下优先查找脚本的子目录
    pub net_dir: String,
    /// 题目文件夹下的音频目录
    pub media_dir: String,
    /// 脚本文件扩展名（不含点）
    pub script_extension: String,
    /// 单文件模式下依次尝试的文件名
    pub fallback_files: Vec<String>,
    /// 结果报告文件
    pub output_log_file: String,
    /// 是否写出结果报告
    pub write_report: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_dir: "questions".to_string(),
            net_dir: "net".to_string(),
            media_dir: "media".to_string(),
            script_extension: "js".to_string(),
            fallback_files: vec!["combined.js".to_string(), "page1.js".to_string()],
            output_log_file: "answers.txt".to_string(),
            write_report: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 默认配置叠加环境变量
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，缺省字段取默认值
    pub async fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        toml::from_str(&content).map_err(|e| {
            AppError::File(FileError::TomlParseFailed {
                path: path.display().to_string(),
                source: e,
            })
        })
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_env_overrides(self) -> AppResult<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// 用给定的查找函数覆盖字段，便于测试时不依赖真实环境变量
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let parse_bool = |name: &str, default: bool| -> AppResult<bool> {
            let Some(value) = lookup(name) else {
                return Ok(default);
            };
            let parsed = value.trim().parse::<bool>();
            parsed.map_err(|_| {
                ConfigError::EnvVarParseFailed {
                    var_name: name.to_string(),
                    value,
                    expected_type: "bool".to_string(),
                }
                .into()
            })
        };

        Ok(Self {
            questions_dir: lookup("QUESTIONS_DIR").unwrap_or(self.questions_dir),
            net_dir: lookup("NET_DIR").unwrap_or(self.net_dir),
            media_dir: lookup("MEDIA_DIR").unwrap_or(self.media_dir),
            script_extension: lookup("SCRIPT_EXTENSION").unwrap_or(self.script_extension),
            fallback_files: lookup("FALLBACK_FILES")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or(self.fallback_files),
            output_log_file: lookup("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
            write_report: parse_bool("WRITE_REPORT", self.write_report)?,
            verbose_logging: parse_bool("VERBOSE_LOGGING", self.verbose_logging)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let config = Config::from_toml_str(
            r#"
            questions_dir = "qs"
            fallback_files = ["all.js"]
            "#,
        )
        .unwrap();
        assert_eq!(config.questions_dir, "qs");
        assert_eq!(config.fallback_files, vec!["all.js"]);
        assert_eq!(config.net_dir, "net");
        assert!(!config.write_report);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(Config::from_toml_str("questions_dir = [").is_err());
    }

    #[test]
    fn overrides_apply() {
        let vars: HashMap<&str, &str> = [
            ("MEDIA_DIR", "audio"),
            ("FALLBACK_FILES", "a.js, b.js,"),
            ("VERBOSE_LOGGING", "true"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .with_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.media_dir, "audio");
        assert_eq!(config.fallback_files, vec!["a.js", "b.js"]);
        assert!(config.verbose_logging);
        assert_eq!(config.questions_dir, "questions");
    }

    #[test]
    fn unparsable_bool_is_reported() {
        let err = Config::default()
            .with_overrides(|name| (name == "WRITE_REPORT").then(|| "yes".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::EnvVarParseFailed { .. })
        ));
    }
}
