/// 包围盒与几何统计模块
///
/// 提供轴对齐包围盒以及模型质心的增量统计。
/// 统计数据在解析阶段随顶点插入实时更新，装配阶段一次性冻结。

use crate::math::{Point3, Vector3};

/// 轴对齐包围盒
///
/// 最小/最大点以原始坐标（未平移）记录。空包围盒以正负无穷初始化，
/// 首次扩展任何真实坐标都会立即覆盖初始值。
///
/// # 示例
///
/// ```rust
/// use dist_mesh::geometry::BoundingBox;
///
/// let mut bounds = BoundingBox::empty();
/// bounds.extend(1.0, 2.0, 3.0);
/// bounds.extend(-1.0, 0.0, 0.5);
///
/// assert_eq!(bounds.min.x, -1.0);
/// assert_eq!(bounds.max.z, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// 每轴最小值
    pub min: Point3<f32>,

    /// 每轴最大值
    pub max: Point3<f32>,
}

impl BoundingBox {
    /// 创建一个空包围盒
    ///
    /// min 初始化为正无穷，max 初始化为负无穷。
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// 是否为空包围盒（尚未扩展过任何点）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// 扩展包围盒以包含给定点
    #[inline]
    pub fn extend(&mut self, x: f32, y: f32, z: f32) {
        self.min.x = self.min.x.min(x);
        self.min.y = self.min.y.min(y);
        self.min.z = self.min.z.min(z);
        self.max.x = self.max.x.max(x);
        self.max.y = self.max.y.max(y);
        self.max.z = self.max.z.max(z);
    }

    /// 检查点是否位于包围盒内（含边界）
    #[inline]
    pub fn contains(&self, x: f32, y: f32, z: f32) -> bool {
        x >= self.min.x
            && x <= self.max.x
            && y >= self.min.y
            && y <= self.max.y
            && z >= self.min.z
            && z <= self.max.z
    }

    /// 获取包围盒中心点
    pub fn center(&self) -> Point3<f32> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// 获取包围盒对角线向量
    pub fn diagonal(&self) -> Vector3 {
        self.max - self.min
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

/// 几何统计累加器
///
/// 在解析阶段跟踪全模型的包围盒、坐标和与顶点计数，
/// 解析结束后派生模型质心。
///
/// # 质心定义
///
/// - X/Y 取所有顶点的算术平均
/// - Z 取所有顶点的最大值
///
/// 这一不对称定义沿用自 DistEngine 的模型居中行为，
/// 使模型贴靠其最高点所在平面。
#[derive(Debug, Clone)]
pub struct GeometryAccumulator {
    bounds: BoundingBox,
    sum: Vector3,
    count: usize,
}

impl GeometryAccumulator {
    /// 创建一个空的累加器
    pub fn new() -> Self {
        Self {
            bounds: BoundingBox::empty(),
            sum: Vector3::zeros(),
            count: 0,
        }
    }

    /// 记录一个顶点位置
    ///
    /// 更新包围盒、坐标和与顶点计数。
    #[inline]
    pub fn record(&mut self, x: f32, y: f32, z: f32) {
        self.bounds.extend(x, y, z);
        self.sum += Vector3::new(x, y, z);
        self.count += 1;
    }

    /// 已记录的顶点数量
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// 当前的包围盒
    #[inline]
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// 派生模型质心
    ///
    /// X/Y 为均值，Z 为最大值。没有记录任何顶点时返回原点，
    /// 避免除零产生非有限值。
    pub fn centroid(&self) -> Vector3 {
        if self.count == 0 {
            return Vector3::zeros();
        }

        let n = self.count as f32;
        Vector3::new(self.sum.x / n, self.sum.y / n, self.bounds.max.z)
    }

    /// 拆出最终的包围盒
    pub fn into_bounds(self) -> BoundingBox {
        self.bounds
    }
}

impl Default for GeometryAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
