//! DistMesh - OBJ 模型导入工具
//!
//! 将 Wavefront OBJ 文件解析为可渲染的三角形网格并输出统计信息。
//! 可以通过配置文件或命令行参数控制导入行为。
//!
//! # 使用方法
//!
//! ```bash
//! # 使用配置文件
//! cargo run -- model.obj
//!
//! # 保留原始坐标（命令行覆盖）
//! cargo run -- model.obj --no-recenter
//! ```
//!
//! # 架构概览
//!
//! ```text
//! ┌─────────────┐
//! │   main.rs   │  应用程序入口
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Core     │  配置 / 日志 / 错误处理
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Loader    │  OBJ 逐行解析与索引解析
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Geometry   │  模型装配与顶点缓冲交织
//! └─────────────┘
//! ```
//!
//! # 模块说明
//!
//! - `core`：核心功能模块（日志、配置、错误处理）
//! - `loader`：加载器模块，将 OBJ 文本解析为模型
//! - `geometry`：几何数据模块，装配网格并交织顶点缓冲

use anyhow::Context;
use dist_mesh::core::{log, Config};
use dist_mesh::geometry::VertexBufferBuilder;
use dist_mesh::loader::{LoadOptions, ObjLoader};
use dist_mesh::{app_info, app_warn};

/// 应用程序入口点
///
/// 初始化日志系统、加载配置、解析模型文件并输出统计信息。
///
/// # 初始化流程
///
/// 1. 加载配置文件（dist_mesh.toml）
/// 2. 应用命令行参数覆盖
/// 3. 验证配置
/// 4. 初始化日志系统
/// 5. 解析模型文件
/// 6. 输出模型统计与顶点缓冲信息
///
/// # 命令行参数
///
/// - `<path>`: 要导入的 OBJ 文件
/// - `--no-recenter`: 保留模型原始坐标，不平移到质心
/// - `--validate`: 加载后校验网格数据
/// - `--name <value>`: 覆盖模型名称
fn main() -> anyhow::Result<()> {
    // 1. 加载配置（在初始化日志之前）
    let mut config = Config::from_file_or_default("dist_mesh.toml");

    // 2. 应用命令行参数
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args);

    // 3. 验证配置
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // 4. 初始化日志系统（使用配置中的设置）
    let log_file = if config.logging.file_output {
        Some(config.logging.log_file.as_str())
    } else {
        None
    };
    log::init_logger(config.logging.level, config.logging.file_output, log_file)?;

    app_info!("DistMesh starting...");
    app_info!(version = env!("CARGO_PKG_VERSION"), "Application initialized");

    // 5. 确定输入文件
    let path = match input_path(&args) {
        Some(path) => path,
        None => {
            eprintln!("Usage: dist_mesh <model.obj> [--no-recenter] [--validate] [--name <value>]");
            std::process::exit(1);
        }
    };

    app_info!(
        path = %path,
        recenter = config.import.recenter,
        "Import configuration"
    );

    // 6. 加载模型
    let loader = ObjLoader::with_options(LoadOptions::from_config(&config.import));
    let model = loader
        .load_from_file(&path)
        .with_context(|| format!("failed to load model from {}", path))?;

    // 7. 可选的网格校验
    if config.import.validate_on_load {
        model
            .validate()
            .with_context(|| format!("mesh validation failed for {}", path))?;
        app_info!("Mesh validation passed");
    }

    // 8. 输出模型统计
    app_info!(
        model = %model.name,
        objects = model.object_count(),
        vertices = model.vertex_count,
        faces = model.face_count,
        "Model loaded"
    );

    if model.bounds.is_empty() {
        app_warn!("Model contains no vertices");
    } else {
        app_info!(
            min = ?model.bounds.min,
            max = ?model.bounds.max,
            diagonal = model.bounds.diagonal().norm(),
            "Bounding box"
        );
        app_info!(
            x = model.centroid.x,
            y = model.centroid.y,
            z = model.centroid.z,
            "Centroid"
        );
    }

    // 9. 交织顶点缓冲
    let mut builder = VertexBufferBuilder::new();
    let buffers = model.build_meshes(&mut builder);
    let total_vertices: usize = buffers.iter().map(|b| b.len()).sum();

    app_info!(
        meshes = buffers.len(),
        vertices = total_vertices,
        "Vertex buffers ready"
    );

    Ok(())
}

/// 从命令行参数中提取输入文件路径
///
/// 跳过所有 `--` 开头的选项以及 `--name` 的取值，
/// 返回第一个位置参数。
fn input_path(args: &[String]) -> Option<String> {
    let mut skip_next = false;

    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--name" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        return Some(arg.clone());
    }

    None
}
