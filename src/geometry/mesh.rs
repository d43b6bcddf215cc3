/// 网格数据结构模块
///
/// 定义CPU侧的网格数据容器，用于存储从文件加载的原始几何数据。
/// 对应 DistEngine 的 MeshData 结构。

/// 单个命名网格对象
///
/// 存储一个 `g` 分组产出的几何数据。顶点数据按三角形角点展开（非索引化），
/// 每个三角形写入9个位置分量；法线和UV仅在源数据提供时填充。
///
/// 计数器独立于缓冲区长度维护：`vertex_count` 统计归属于该对象的
/// 源顶点记录数，`face_count` 统计实际产出的三角形数。
///
/// # 示例
///
/// ```rust
/// use dist_mesh::geometry::MeshObject;
///
/// let mut object = MeshObject::new("cube");
/// object.positions.extend_from_slice(&[
///     0.0, 0.0, 0.0,
///     1.0, 0.0, 0.0,
///     0.0, 1.0, 0.0,
/// ]);
/// object.face_count = 1;
///
/// assert!(object.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshObject {
    /// 对象名称
    ///
    /// 来自 `g` 指令，可能为空字符串。
    pub name: String,

    /// 材质名称（可选）
    ///
    /// 来自 `usemtl` 指令，材质本身不做解析。
    pub material: Option<String>,

    /// 位置数据 (x, y, z)
    ///
    /// 每个三角形9个分量，按角点顺序展开。
    pub positions: Vec<f32>,

    /// 法线数据 (nx, ny, nz)
    ///
    /// 每个三角形9个分量；源数据不含法线时为空。
    pub normals: Vec<f32>,

    /// 纹理坐标数据 (u, v)
    ///
    /// 每个三角形6个分量；源数据不含UV时为空。
    pub texcoords: Vec<f32>,

    /// 归属于该对象的源顶点记录数
    pub vertex_count: usize,

    /// 三角形数量
    pub face_count: usize,
}

impl MeshObject {
    /// 创建一个空的网格对象
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            material: None,
            positions: Vec::new(),
            normals: Vec::new(),
            texcoords: Vec::new(),
            vertex_count: 0,
            face_count: 0,
        }
    }

    /// 是否包含法线数据
    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// 是否包含纹理坐标数据
    #[inline]
    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }

    /// 是否为空对象（没有产出任何三角形）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.face_count == 0
    }

    /// 获取展开后的角点数量
    ///
    /// 每个三角形3个角点，角点数量 = face_count * 3。
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.face_count * 3
    }

    /// 验证网格对象数据的有效性
    ///
    /// 检查：
    /// - 位置数据与三角形数量一致（每个三角形9个分量）
    /// - 法线数据按3分量成组，且不超过位置数据覆盖的角点数
    /// - 纹理坐标按2分量成组，且不超过位置数据覆盖的角点数
    ///
    /// 同一对象内允许部分面携带法线或UV而其余面没有，
    /// 因此这两个缓冲区可以短于位置数据。
    ///
    /// # 返回
    ///
    /// - `Ok(())`: 数据有效
    /// - `Err(String)`: 数据无效，返回错误描述
    pub fn validate(&self) -> Result<(), String> {
        // 检查位置数据长度
        if self.positions.len() != self.face_count * 9 {
            return Err(format!(
                "对象 '{}' 的位置数据与三角形数不一致: {} 分量, {} 三角形",
                self.name,
                self.positions.len(),
                self.face_count
            ));
        }

        // 检查法线数据对齐
        if self.normals.len() % 3 != 0 || self.normals.len() > self.positions.len() {
            return Err(format!(
                "对象 '{}' 的法线数据未对齐: {} 法线分量, {} 位置分量",
                self.name,
                self.normals.len(),
                self.positions.len()
            ));
        }

        // 检查纹理坐标对齐
        if self.texcoords.len() % 2 != 0 || self.texcoords.len() / 2 > self.positions.len() / 3 {
            return Err(format!(
                "对象 '{}' 的纹理坐标未对齐: {} UV分量, {} 位置分量",
                self.name,
                self.texcoords.len(),
                self.positions.len()
            ));
        }

        Ok(())
    }
}
