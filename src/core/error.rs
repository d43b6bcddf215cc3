//! 错误处理模块
//!
//! 定义了导入管线中使用的统一错误类型。
//!
//! # 设计原则
//!
//! - 为每种错误类型提供清晰的上下文信息
//! - 支持错误链（error source）
//! - 易于模式匹配和错误处理
//!
//! 注意：逐行解析永远不会失败（无法识别的行会被跳过并记录诊断），
//! 因此这里的错误只覆盖 IO、配置和模型校验等入口边界。

use std::fmt;
use std::path::PathBuf;

/// 统一的 Result 类型
///
/// 所有可能返回错误的函数都应该使用这个类型。
pub type Result<T> = std::result::Result<T, DistMeshError>;

/// DistMesh 的错误类型
///
/// 包含了模型导入过程中可能遇到的各种错误情况。
#[derive(Debug)]
pub enum DistMeshError {
    /// 配置错误
    Config(ConfigError),

    /// 网格加载错误
    MeshLoading(MeshLoadError),

    /// IO 错误
    Io(std::io::Error),

    /// 日志系统错误
    Log(String),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 网格加载相关的错误
#[derive(Debug)]
pub enum MeshLoadError {
    /// 文件不存在
    FileNotFound(PathBuf),

    /// 不支持的文件格式
    UnsupportedFormat(String),

    /// 数据验证失败
    ValidationError(String),

    /// 几何数据无效
    InvalidGeometry(String),
}

impl fmt::Display for DistMeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistMeshError::Config(e) => write!(f, "Configuration error: {}", e),
            DistMeshError::MeshLoading(e) => write!(f, "Mesh loading error: {}", e),
            DistMeshError::Io(e) => write!(f, "IO error: {}", e),
            DistMeshError::Log(msg) => write!(f, "Log error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for MeshLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshLoadError::FileNotFound(path) => write!(f, "Mesh file not found: {}", path.display()),
            MeshLoadError::UnsupportedFormat(msg) => write!(f, "Unsupported mesh format: {}", msg),
            MeshLoadError::ValidationError(msg) => write!(f, "Mesh validation failed: {}", msg),
            MeshLoadError::InvalidGeometry(msg) => write!(f, "Invalid geometry data: {}", msg),
        }
    }
}

impl std::error::Error for DistMeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DistMeshError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for MeshLoadError {}

// 实现 From trait 以便于错误转换
impl From<std::io::Error> for DistMeshError {
    fn from(err: std::io::Error) -> Self {
        DistMeshError::Io(err)
    }
}

impl From<ConfigError> for DistMeshError {
    fn from(err: ConfigError) -> Self {
        DistMeshError::Config(err)
    }
}

impl From<MeshLoadError> for DistMeshError {
    fn from(err: MeshLoadError) -> Self {
        DistMeshError::MeshLoading(err)
    }
}
