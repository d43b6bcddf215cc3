/// 几何体数据和装配模块
///
/// 提供3D模型导入产出的全部几何数据结构。
/// 包含顶点定义、网格对象以及模型装配工具。
///
/// # 模块结构
///
/// - `vertex`: 顶点数据结构定义
/// - `mesh`: 网格对象结构
/// - `bounds`: 包围盒与几何统计
/// - `model`: 模型装配与校验
/// - `builder`: 网格构建后端
///
/// # 架构设计
///
/// ```text
/// 文本 (OBJ)
///     ↓
/// ObjLoader (逐行解析)
///     ↓
/// MeshObject / Model (CPU侧数据)
///     ↓
/// MeshBackend (交织顶点缓冲)
/// ```
///
/// # 使用示例
///
/// ```rust,no_run
/// use dist_mesh::loader::ObjLoader;
///
/// // 加载OBJ模型
/// let loader = ObjLoader::new();
/// let model = loader.load_from_file("model.obj")?;
///
/// println!("顶点数: {}", model.vertex_count);
/// println!("三角形数: {}", model.face_count);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```

pub mod vertex;
pub mod mesh;
pub mod bounds;
pub mod model;
pub mod builder;

// 重新导出常用类型
pub use bounds::{BoundingBox, GeometryAccumulator};
pub use builder::{MeshBackend, VertexBufferBuilder};
pub use mesh::MeshObject;
pub use model::Model;
pub use vertex::Vertex;
