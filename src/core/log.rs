//! 日志系统模块
//!
//! 基于 `tracing` 提供结构化的日志记录功能。
//! 类似于 C++ DistEngine 中的 spdlog 封装，但更强大。
//!
//! # 特性
//!
//! - 结构化日志：支持键值对
//! - 高性能：零成本抽象，编译时优化
//! - 灵活输出：支持控制台和文件输出
//! - 日志级别：trace, debug, info, warn, error
//!
//! # 使用示例
//!
//! ```no_run
//! use dist_mesh::core::config::LogLevel;
//! use dist_mesh::core::log;
//!
//! // 初始化日志系统
//! log::init_logger(LogLevel::Info, false, None).unwrap();
//!
//! // 使用宏记录日志
//! tracing::info!("Importer started");
//! tracing::warn!("Degenerate face skipped");
//!
//! // 结构化日志
//! tracing::info!(vertices = 8, faces = 12, "Model loaded");
//! ```

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use std::path::Path;

use super::config::LogLevel;
use super::error::{DistMeshError, Result};

/// 初始化日志系统
///
/// 必须在程序开始时调用一次，重复初始化会返回错误。
///
/// # 参数
///
/// * `level` - 日志级别
/// * `file_output` - 是否输出到文件
/// * `log_file_path` - 日志文件路径（可选，默认为 "dist_mesh.log"）
///
/// # 示例
///
/// ```no_run
/// use dist_mesh::core::config::LogLevel;
/// use dist_mesh::core::log;
///
/// // 仅控制台输出
/// log::init_logger(LogLevel::Info, false, None).unwrap();
/// ```
pub fn init_logger(level: LogLevel, file_output: bool, log_file_path: Option<&str>) -> Result<()> {
    let filter = match level {
        LogLevel::Trace => EnvFilter::new("trace"),
        LogLevel::Debug => EnvFilter::new("debug"),
        LogLevel::Info => EnvFilter::new("info"),
        LogLevel::Warn => EnvFilter::new("warn"),
        LogLevel::Error => EnvFilter::new("error"),
    };

    if file_output {
        // 解析日志文件路径
        let log_path = log_file_path.unwrap_or("dist_mesh.log");
        let path = Path::new(log_path);
        let directory = path.parent().unwrap_or(Path::new("."));
        let filename = path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("dist_mesh.log");

        // 创建滚动文件 appender（每天滚动）
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            directory,
            filename
        );

        // 创建格式化层
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(true);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(false)  // 文件不需要 ANSI 颜色
            .with_writer(file_appender);

        // 组合控制台和文件输出
        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| DistMeshError::Log(e.to_string()))
    } else {
        // 仅控制台输出
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| DistMeshError::Log(e.to_string()))
    }
}

/// 初始化简单的日志系统（仅控制台输出）
///
/// 使用默认的 Info 级别。
pub fn init_simple() -> Result<()> {
    init_logger(LogLevel::Info, false, None)
}

// 定义类似 DistEngine 的分模块日志宏

/// 导入管线日志 - Info 级别
#[macro_export]
macro_rules! import_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "dist_mesh::import", $($arg)*)
    };
}

/// 导入管线日志 - Warn 级别
#[macro_export]
macro_rules! import_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "dist_mesh::import", $($arg)*)
    };
}

/// 导入管线日志 - Error 级别
#[macro_export]
macro_rules! import_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "dist_mesh::import", $($arg)*)
    };
}

/// 应用层日志 - Info 级别
#[macro_export]
macro_rules! app_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "dist_mesh::app", $($arg)*)
    };
}

/// 应用层日志 - Warn 级别
#[macro_export]
macro_rules! app_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "dist_mesh::app", $($arg)*)
    };
}

/// 应用层日志 - Error 级别
#[macro_export]
macro_rules! app_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "dist_mesh::app", $($arg)*)
    };
}

/// 日志级别转换
impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// 日志辅助函数：检查日志级别是否启用
#[allow(dead_code)]
pub fn is_enabled(level: Level) -> bool {
    tracing::level_filters::LevelFilter::current() >= level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
    }

    #[test]
    fn test_reinit_is_rejected() {
        let _ = init_simple();
        assert!(init_simple().is_err());
    }
}
