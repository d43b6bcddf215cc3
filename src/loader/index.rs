/// 索引解析模块
///
/// OBJ 面指令中的索引为 1 基，负数索引相对于引用发生时刻的池长度。
/// 本模块将原始索引换算为展开缓冲区中的 0 基分量偏移。

/// 将原始索引解析为分量偏移
///
/// 正索引按 1 基处理；负索引相对于当前池长度（以条目数计）。
/// 结果可能为负或越界，由调用方检查（参见 [`checked_offset`]）。
///
/// # 参数
///
/// * `raw` - 原始索引（可为负）
/// * `component_len` - 池的当前分量总数
/// * `stride` - 每条目的分量数（位置/法线为 3，UV 为 2）
///
/// # 返回值
///
/// 条目在池中的起始分量偏移
///
/// # 示例
///
/// ```rust
/// use dist_mesh::loader::index::resolve;
///
/// // 第 2 个顶点（1 基），每条目 3 个分量
/// assert_eq!(resolve(2, 9, 3), 3);
///
/// // 倒数第 1 个顶点
/// assert_eq!(resolve(-1, 9, 3), 6);
/// ```
#[inline]
pub fn resolve(raw: i32, component_len: usize, stride: usize) -> isize {
    if raw >= 0 {
        (raw as isize - 1) * stride as isize
    } else {
        (raw as isize + (component_len / stride) as isize) * stride as isize
    }
}

/// 解析索引并检查偏移是否落在池内
///
/// 越界（偏移为负，或条目超出池尾）返回 `None`。
#[inline]
pub fn checked_offset(raw: i32, pool: &[f32], stride: usize) -> Option<usize> {
    let offset = resolve(raw, pool.len(), stride);
    if offset >= 0 && (offset as usize) + stride <= pool.len() {
        Some(offset as usize)
    } else {
        None
    }
}
