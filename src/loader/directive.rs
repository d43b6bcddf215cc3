/// 行分类模块
///
/// 将一行修剪后的 OBJ 文本识别为指令变体。分类按固定优先顺序尝试，
/// 首个匹配生效；全部落空的行归为无法识别，由调用方上报诊断。
///
/// # 优先顺序
///
/// 空行/注释 → `v` → `vn` → `vt` → 面语法 A/B/C/D → `g` → `o`（忽略）
/// → `usemtl` → `mtllib`（忽略）→ `s`（忽略）→ 无法识别
///
/// 数值字段接受可选符号、小数点和指数标记（`e`/`E`）；
/// 整数字段接受可选负号。任何字段解析失败都会使整行落空。

use super::face::RawFace;

/// 一行 OBJ 文本的分类结果
///
/// 携带该指令的全部已提取字段，调度方无需再次扫描原始行。
#[derive(Debug, Clone, PartialEq)]
pub enum Directive<'a> {
    /// 空行
    Blank,

    /// 注释行，携带包含 `#` 标记的完整行文本
    Comment(&'a str),

    /// `v x y z` - 顶点位置
    Vertex([f32; 3]),

    /// `vn x y z` - 法线
    Normal([f32; 3]),

    /// `vt u v` - 纹理坐标
    TexCoord([f32; 2]),

    /// `f ...` - 面记录
    Face(RawFace),

    /// `g name` - 分组，名称取指令后的整行剩余部分（可为空）
    Group(&'a str),

    /// `o ...` - 对象名，接受但忽略
    ObjectName,

    /// `usemtl name` - 材质引用
    UseMaterial(&'a str),

    /// `mtllib ...` - 材质库引用，忽略
    MaterialLib,

    /// `s ...` - 平滑组，忽略
    Smoothing,

    /// 无法识别的行，携带完整行文本
    Unrecognized(&'a str),
}

/// 对一行修剪后的文本分类
///
/// 输入必须已去除首尾空白。本函数从不失败：
/// 不匹配任何指令模式的行返回 [`Directive::Unrecognized`]。
pub fn classify(line: &str) -> Directive<'_> {
    if line.is_empty() {
        return Directive::Blank;
    }
    if line.starts_with('#') {
        return Directive::Comment(line);
    }

    let mut tokens = line.split_whitespace();
    let keyword = match tokens.next() {
        Some(keyword) => keyword,
        None => return Directive::Blank,
    };
    let fields: Vec<&str> = tokens.collect();

    match keyword {
        "v" => match parse_vec3(&fields) {
            Some(components) => Directive::Vertex(components),
            None => Directive::Unrecognized(line),
        },
        "vn" => match parse_vec3(&fields) {
            Some(components) => Directive::Normal(components),
            None => Directive::Unrecognized(line),
        },
        "vt" => match parse_vec2(&fields) {
            Some(components) => Directive::TexCoord(components),
            None => Directive::Unrecognized(line),
        },
        "f" => match RawFace::parse(&fields) {
            Some(face) => Directive::Face(face),
            None => Directive::Unrecognized(line),
        },
        "g" => Directive::Group(rest_of(line)),
        "o" => Directive::ObjectName,
        "usemtl" => {
            let name = rest_of(line);
            if name.is_empty() {
                Directive::Unrecognized(line)
            } else {
                Directive::UseMaterial(name)
            }
        }
        "mtllib" => Directive::MaterialLib,
        "s" => Directive::Smoothing,
        _ => Directive::Unrecognized(line),
    }
}

/// 提取指令关键字之后的整行剩余部分（修剪空白）
fn rest_of(line: &str) -> &str {
    line.split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim())
        .unwrap_or("")
}

/// 解析前三个数值字段，多余字段忽略
fn parse_vec3(fields: &[&str]) -> Option<[f32; 3]> {
    if fields.len() < 3 {
        return None;
    }

    Some([
        fields[0].parse().ok()?,
        fields[1].parse().ok()?,
        fields[2].parse().ok()?,
    ])
}

/// 解析前两个数值字段，多余字段忽略
fn parse_vec2(fields: &[&str]) -> Option<[f32; 2]> {
    if fields.len() < 2 {
        return None;
    }

    Some([fields[0].parse().ok()?, fields[1].parse().ok()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::face::FaceSyntax;

    #[test]
    fn test_classify_blank_and_comment() {
        assert_eq!(classify(""), Directive::Blank);
        assert_eq!(classify("# a comment"), Directive::Comment("# a comment"));
    }

    #[test]
    fn test_classify_vertex_directives() {
        assert_eq!(classify("v 1 2 3"), Directive::Vertex([1.0, 2.0, 3.0]));
        assert_eq!(classify("vn 0 1 0"), Directive::Normal([0.0, 1.0, 0.0]));
        assert_eq!(classify("vt 0.5 0.25"), Directive::TexCoord([0.5, 0.25]));
    }

    #[test]
    fn test_classify_accepts_signs_and_exponents() {
        assert_eq!(
            classify("v -1.5 +2.0 3e2"),
            Directive::Vertex([-1.5, 2.0, 300.0])
        );
        assert_eq!(
            classify("v 1.0E-2 0 0"),
            Directive::Vertex([0.01, 0.0, 0.0])
        );
    }

    #[test]
    fn test_classify_ignores_extra_numeric_fields() {
        assert_eq!(
            classify("v 1 2 3 1.0"),
            Directive::Vertex([1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn test_classify_rejects_malformed_numerics() {
        assert_eq!(classify("v 1 2"), Directive::Unrecognized("v 1 2"));
        assert_eq!(
            classify("v 1 2 banana"),
            Directive::Unrecognized("v 1 2 banana")
        );
        assert_eq!(classify("vt 0.5"), Directive::Unrecognized("vt 0.5"));
    }

    #[test]
    fn test_classify_face_syntaxes() {
        match classify("f 1 2 3") {
            Directive::Face(face) => assert_eq!(face.syntax, FaceSyntax::Position),
            other => panic!("expected face, got {:?}", other),
        }
        match classify("f 1/1 2/2 3/3 4/4") {
            Directive::Face(face) => {
                assert_eq!(face.syntax, FaceSyntax::PositionTexcoord);
                assert!(face.is_quad());
            }
            other => panic!("expected face, got {:?}", other),
        }
        match classify("f 1//1 2//2 3//3") {
            Directive::Face(face) => assert_eq!(face.syntax, FaceSyntax::PositionNormal),
            other => panic!("expected face, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_face_bad_arity_is_unrecognized() {
        assert_eq!(classify("f 1 2"), Directive::Unrecognized("f 1 2"));
        assert_eq!(
            classify("f 1 2 3 4 5"),
            Directive::Unrecognized("f 1 2 3 4 5")
        );
    }

    #[test]
    fn test_classify_group_takes_line_remainder() {
        assert_eq!(classify("g left wing"), Directive::Group("left wing"));
        assert_eq!(classify("g"), Directive::Group(""));
    }

    #[test]
    fn test_classify_ignored_directives() {
        assert_eq!(classify("o whatever"), Directive::ObjectName);
        assert_eq!(classify("mtllib scene.mtl"), Directive::MaterialLib);
        assert_eq!(classify("s 1"), Directive::Smoothing);
        assert_eq!(classify("s off"), Directive::Smoothing);
    }

    #[test]
    fn test_classify_usemtl() {
        assert_eq!(classify("usemtl steel"), Directive::UseMaterial("steel"));
        assert_eq!(classify("usemtl"), Directive::Unrecognized("usemtl"));
    }

    #[test]
    fn test_classify_unknown_keyword() {
        assert_eq!(
            classify("xyz garbage"),
            Directive::Unrecognized("xyz garbage")
        );
    }
}
