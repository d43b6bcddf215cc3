//! DistMesh - OBJ 网格导入库
//!
//! DistMesh 将 Wavefront OBJ 文本解析为可直接送入渲染器的三角形网格
//! （非索引的扁平顶点缓冲），并附带包围盒与质心统计。
//! 本库提供解析、装配和顶点缓冲交织的完整导入管线。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（日志、配置、错误处理）
//! - `geometry`: 几何数据模块（顶点、网格对象、包围盒、模型装配）
//! - `loader`: 加载器模块（OBJ 逐行解析、索引解析、导入观察者）
//! - `math`: 数学类型别名与浮点比较工具
//!
//! # 使用示例
//!
//! ```rust
//! use dist_mesh::loader::ObjLoader;
//!
//! let source = "\
//! # 单位正方形
//! v 0 0 0
//! v 1 0 0
//! v 1 1 0
//! v 0 1 0
//! f 1 2 3 4
//! ";
//!
//! let loader = ObjLoader::new();
//! let model = loader.parse_str(source);
//!
//! // 四边形被拆分为两个三角形
//! assert_eq!(model.face_count, 2);
//! assert_eq!(model.objects[0].positions.len(), 18);
//! ```

pub mod core;
pub mod geometry;
pub mod loader;
pub mod math;
