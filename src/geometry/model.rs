/// 模型装配模块
///
/// 将解析阶段产出的网格对象集合与几何统计装配为最终的 `Model`。
/// 对应 DistEngine 的场景模型根节点。

use super::bounds::{BoundingBox, GeometryAccumulator};
use super::builder::MeshBackend;
use super::mesh::MeshObject;
use crate::core::error::{MeshLoadError, Result};
use crate::math::Vector3;

/// 装配完成的模型
///
/// 包含有序的网格对象列表、全模型统计以及原始坐标系下的包围盒与质心。
///
/// # 坐标约定
///
/// 包围盒和质心总是在装配时从原始坐标一次性冻结；
/// 居中平移只改写各对象存储的位置数据，不回写统计值。
///
/// # 示例
///
/// ```rust
/// use dist_mesh::geometry::{GeometryAccumulator, MeshObject, Model};
///
/// let mut object = MeshObject::new("tri");
/// object.positions.extend_from_slice(&[
///     0.0, 0.0, 0.0,
///     2.0, 0.0, 0.0,
///     0.0, 2.0, 0.0,
/// ]);
/// object.vertex_count = 3;
/// object.face_count = 1;
///
/// let mut acc = GeometryAccumulator::new();
/// acc.record(0.0, 0.0, 0.0);
/// acc.record(2.0, 0.0, 0.0);
/// acc.record(0.0, 2.0, 0.0);
///
/// let model = Model::assemble("demo", vec![object], 3, 1, acc, true);
/// assert!(model.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// 模型显示名称
    pub name: String,

    /// 网格对象列表，按文件声明顺序排列
    pub objects: Vec<MeshObject>,

    /// 全模型的源顶点记录总数
    pub vertex_count: usize,

    /// 全模型的三角形总数
    pub face_count: usize,

    /// 原始坐标系下的包围盒
    pub bounds: BoundingBox,

    /// 原始坐标系下的质心（X/Y 均值，Z 最大值）
    pub centroid: Vector3,
}

impl Model {
    /// 装配模型
    ///
    /// 从累加器派生质心与包围盒，可选地将所有对象的位置数据
    /// 平移到质心。统计值在平移前冻结。
    ///
    /// # 参数
    ///
    /// * `name` - 模型显示名称
    /// * `objects` - 解析产出的网格对象
    /// * `vertex_count` - 源顶点记录总数
    /// * `face_count` - 三角形总数
    /// * `accumulator` - 解析阶段填充的几何统计
    /// * `recenter` - 是否执行居中平移
    pub fn assemble(
        name: impl Into<String>,
        mut objects: Vec<MeshObject>,
        vertex_count: usize,
        face_count: usize,
        accumulator: GeometryAccumulator,
        recenter: bool,
    ) -> Self {
        let centroid = accumulator.centroid();
        let bounds = accumulator.into_bounds();

        if recenter {
            Self::recenter_objects(&mut objects, &centroid);
        }

        Self {
            name: name.into(),
            objects,
            vertex_count,
            face_count,
            bounds,
            centroid,
        }
    }

    /// 将所有对象的位置数据平移到质心
    ///
    /// 按 0,1,2 轴序遍历展开缓冲区，逐分量减去质心坐标。
    fn recenter_objects(objects: &mut [MeshObject], centroid: &Vector3) {
        for object in objects {
            for corner in object.positions.chunks_exact_mut(3) {
                corner[0] -= centroid.x;
                corner[1] -= centroid.y;
                corner[2] -= centroid.z;
            }
        }
    }

    /// 网格对象数量
    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// 是否为空模型（没有任何三角形）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.face_count == 0
    }

    /// 验证模型数据的有效性
    ///
    /// 逐对象校验缓冲区对齐，并交叉检查全模型统计与各对象计数之和。
    pub fn validate(&self) -> Result<()> {
        let mut vertex_total = 0;
        let mut face_total = 0;

        for object in &self.objects {
            object.validate().map_err(MeshLoadError::ValidationError)?;
            vertex_total += object.vertex_count;
            face_total += object.face_count;
        }

        if vertex_total != self.vertex_count || face_total != self.face_count {
            return Err(MeshLoadError::InvalidGeometry(format!(
                "模型统计与对象数据不一致: 顶点 {}/{}, 面 {}/{}",
                vertex_total, self.vertex_count, face_total, self.face_count
            ))
            .into());
        }

        Ok(())
    }

    /// 将所有网格对象交给后端构建
    ///
    /// 按对象声明顺序调用后端，返回构建产物列表。
    pub fn build_meshes<B: MeshBackend>(&self, backend: &mut B) -> Vec<B::Output> {
        self.objects.iter().map(|object| backend.build(object)).collect()
    }
}
