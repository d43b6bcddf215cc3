//! 配置管理模块
//!
//! 提供导入管线配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (dist_mesh.toml)
//!
//! ```toml
//! [import]
//! recenter = true
//! validate_on_load = false
//! # model_name = "scene"    # 省略时按文件名取名
//!
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};

/// 导入管线配置
///
/// 包含了模型导入所需的所有配置项。
/// 可以从配置文件加载，也可以通过代码构建。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 导入配置
    pub import: ImportConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 导入配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// 是否将模型平移到质心
    #[serde(default = "default_recenter")]
    pub recenter: bool,

    /// 显式指定的模型名称
    ///
    /// 省略时依次回退到文件名和内置默认名称。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    /// 加载后是否校验网格数据
    #[serde(default = "default_validate_on_load")]
    pub validate_on_load: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

// 默认值函数
fn default_recenter() -> bool { true }
fn default_validate_on_load() -> bool { false }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "dist_mesh.log".to_string() }

impl Default for Config {
    fn default() -> Self {
        Self {
            import: ImportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            recenter: default_recenter(),
            model_name: None,
            validate_on_load: default_validate_on_load(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// # 参数
    ///
    /// * `path` - 配置文件路径
    ///
    /// # 返回值
    ///
    /// 成功返回 `Config` 实例，失败返回错误
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use dist_mesh::core::Config;
    ///
    /// let config = Config::from_file("dist_mesh.toml").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在则使用默认配置
    ///
    /// # 参数
    ///
    /// * `path` - 配置文件路径
    ///
    /// # 返回值
    ///
    /// 返回 `Config` 实例
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    ///
    /// # 参数
    ///
    /// * `path` - 配置文件路径
    ///
    /// # 返回值
    ///
    /// 成功返回 `Ok(())`，失败返回错误
    #[allow(dead_code)]
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// # 参数
    ///
    /// * `args` - 命令行参数迭代器
    ///
    /// # 说明
    ///
    /// 支持的参数：
    /// - `--no-recenter`: 保留模型原始坐标，不平移到质心
    /// - `--validate`: 加载后校验网格数据
    /// - `--name <value>`: 设置模型名称
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        // 是否关闭质心平移
        if args.iter().any(|a| a == "--no-recenter") {
            self.import.recenter = false;
        }

        // 是否开启校验
        if args.iter().any(|a| a == "--validate") {
            self.import.validate_on_load = true;
        }

        // 模型名称
        if let Some(idx) = args.iter().position(|a| a == "--name") {
            if let Some(name) = args.get(idx + 1) {
                self.import.model_name = Some(name.clone());
            }
        }
    }

    /// 验证配置的有效性
    ///
    /// # 返回值
    ///
    /// 配置有效返回 `Ok(())`，否则返回错误
    pub fn validate(&self) -> Result<()> {
        // 验证模型名
        if let Some(name) = &self.import.model_name {
            if name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "import.model_name".to_string(),
                    reason: "Model name must not be empty when set".to_string(),
                }.into());
            }
        }

        // 验证日志文件路径
        if self.logging.file_output && self.logging.log_file.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.log_file".to_string(),
                reason: "Log file path must not be empty when file output is enabled".to_string(),
            }.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.import.recenter);
        assert!(config.import.model_name.is_none());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.import.model_name = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_src = "[import]\nrecenter = false\n\n[logging]\nfile_output = true\n";
        let config: Config = toml::from_str(toml_src).unwrap();

        assert!(!config.import.recenter);
        assert!(config.import.model_name.is_none());
        assert!(config.logging.file_output);
        assert_eq!(config.logging.log_file, "dist_mesh.log");
    }

    #[test]
    fn test_apply_args_override() {
        let mut config = Config::default();
        config.apply_args(["--no-recenter", "--name", "scene"]);

        assert!(!config.import.recenter);
        assert_eq!(config.import.model_name.as_deref(), Some("scene"));
    }
}
