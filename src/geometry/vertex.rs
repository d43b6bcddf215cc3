/// 几何体顶点定义模块
///
/// 定义用于3D模型加载的顶点结构，包含位置、法线和UV坐标。
/// 对应 DistEngine 的 Vertex 结构。

use bytemuck::{Pod, Zeroable};

use crate::math::{Vector2, Vector3};

/// 渲染用的3D顶点结构
///
/// 包含导入管线产出的全部顶点属性，用于支持光照和纹理映射。
/// 内存布局与GPU兼容，使用 `#[repr(C)]` 保证顺序和对齐。
///
/// # 内存布局
///
/// - position: 12 bytes (3 * f32)
/// - normal: 12 bytes (3 * f32)
/// - texcoord: 8 bytes (2 * f32)
/// - **总计**: 32 bytes
///
/// # 示例
///
/// ```rust
/// use dist_mesh::geometry::Vertex;
///
/// let vertex = Vertex {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     texcoord: [0.5, 0.5],
/// };
/// ```
#[repr(C)]
#[derive(Default, Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// 顶点位置 (x, y, z)
    ///
    /// 3D空间中的顶点坐标。
    pub position: [f32; 3],

    /// 法线向量 (nx, ny, nz)
    ///
    /// 用于光照计算的表面法线，应该是归一化的单位向量。
    pub normal: [f32; 3],

    /// 纹理坐标 (u, v)
    ///
    /// UV坐标用于纹理映射，通常范围在 [0.0, 1.0]。
    pub texcoord: [f32; 2],
}

impl Vertex {
    /// 创建一个新的顶点
    ///
    /// # 参数
    ///
    /// - `position`: 3D位置坐标
    /// - `normal`: 法线向量
    /// - `texcoord`: UV纹理坐标
    #[inline]
    pub fn new(position: [f32; 3], normal: [f32; 3], texcoord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            texcoord,
        }
    }

    /// 从 nalgebra 向量创建顶点
    #[inline]
    pub fn from_vectors(position: Vector3, normal: Vector3, texcoord: Vector2) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            texcoord: texcoord.into(),
        }
    }
}
