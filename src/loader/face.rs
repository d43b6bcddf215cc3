/// 面记录解析模块
///
/// 将 `f` 指令的顶点字段解析为临时的面记录，并提供三角化所需的角点表。
/// 面记录只在处理当前行时存在，不会被保留。

/// 面指令的索引语法
///
/// 四种受支持的字段形式，按优先顺序：
///
/// | 语法 | 形式 | 属性 |
/// |------|--------|------|
/// | A | `i` | 仅位置 |
/// | B | `i/t` | 位置 + UV |
/// | C | `i/t/n` | 位置 + UV + 法线 |
/// | D | `i//n` | 位置 + 法线 |
///
/// 一行内的所有字段必须使用同一种语法，混用视为无法识别的行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceSyntax {
    /// `f i i i` - 仅位置索引
    Position,
    /// `f i/t i/t i/t` - 位置和纹理坐标
    PositionTexcoord,
    /// `f i/t/n i/t/n i/t/n` - 位置、纹理坐标和法线
    PositionTexcoordNormal,
    /// `f i//n i//n i//n` - 位置和法线
    PositionNormal,
}

/// 面记录中的单个顶点引用
///
/// 索引保持原始形式（1 基，可为负），解析推迟到发射阶段，
/// 因为负索引依赖当时的池长度。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRef {
    /// 位置索引
    pub position: i32,

    /// 纹理坐标索引（语法 B/C 提供）
    pub texcoord: Option<i32>,

    /// 法线索引（语法 C/D 提供）
    pub normal: Option<i32>,
}

impl FaceRef {
    /// 解析单个顶点字段，返回引用及其匹配的语法
    ///
    /// 字段形式不合法（空分量、非整数、多余分隔符）返回 `None`。
    fn parse(token: &str) -> Option<(Self, FaceSyntax)> {
        let parts: Vec<&str> = token.split('/').collect();

        match parts.as_slice() {
            [p] => Some((
                Self {
                    position: p.parse().ok()?,
                    texcoord: None,
                    normal: None,
                },
                FaceSyntax::Position,
            )),
            [p, t] => Some((
                Self {
                    position: p.parse().ok()?,
                    texcoord: Some(t.parse().ok()?),
                    normal: None,
                },
                FaceSyntax::PositionTexcoord,
            )),
            [p, "", n] => Some((
                Self {
                    position: p.parse().ok()?,
                    texcoord: None,
                    normal: Some(n.parse().ok()?),
                },
                FaceSyntax::PositionNormal,
            )),
            [p, t, n] => Some((
                Self {
                    position: p.parse().ok()?,
                    texcoord: Some(t.parse().ok()?),
                    normal: Some(n.parse().ok()?),
                },
                FaceSyntax::PositionTexcoordNormal,
            )),
            _ => None,
        }
    }
}

/// 临时的面记录
///
/// 持有一行 `f` 指令的 3 或 4 个顶点引用及其统一语法。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFace {
    /// 该行使用的索引语法
    pub syntax: FaceSyntax,

    /// 顶点引用，按文件顺序排列（3 或 4 个）
    pub refs: Vec<FaceRef>,
}

impl RawFace {
    /// 从 `f` 指令的顶点字段解析面记录
    ///
    /// 以下情况返回 `None`（整行按无法识别处理）：
    /// - 字段数不是 3 或 4
    /// - 任一字段形式不合法
    /// - 字段间语法不一致
    pub fn parse(fields: &[&str]) -> Option<Self> {
        if !(3..=4).contains(&fields.len()) {
            return None;
        }

        let mut refs = Vec::with_capacity(fields.len());
        let mut syntax: Option<FaceSyntax> = None;

        for field in fields {
            let (face_ref, field_syntax) = FaceRef::parse(field)?;

            match syntax {
                None => syntax = Some(field_syntax),
                Some(s) if s != field_syntax => return None,
                Some(_) => {}
            }

            refs.push(face_ref);
        }

        Some(Self {
            syntax: syntax?,
            refs,
        })
    }

    /// 是否为四边形面
    #[inline]
    pub fn is_quad(&self) -> bool {
        self.refs.len() == 4
    }

    /// 三角化角点表
    ///
    /// 三角形面产出 (1,2,3)；四边形面沿顶点顺序扇形拆分，
    /// 产出 (1,2,4) 和 (2,3,4)。表中为 0 基的引用下标。
    pub fn triangle_corners(&self) -> &'static [[usize; 3]] {
        if self.is_quad() {
            &[[0, 1, 3], [1, 2, 3]]
        } else {
            &[[0, 1, 2]]
        }
    }
}
