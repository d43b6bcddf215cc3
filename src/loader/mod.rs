/// 模型加载器模块
///
/// 提供 OBJ 文本的逐行解析，产出装配完成的 [`Model`]。
///
/// # 支持的格式
///
/// - **OBJ**: Wavefront OBJ 的受限方言（顶点/法线/UV、三角形与四边形面、
///   负数相对索引、命名分组）
///
/// # 解析契约
///
/// 解析是尽力而为的：无法识别的行跳过并上报诊断，任何单行都不会使
/// 整次解析失败。最坏结果是一个空的或部分填充的模型加诊断日志。
///
/// # 使用示例
///
/// ```rust,no_run
/// use dist_mesh::loader::ObjLoader;
///
/// let loader = ObjLoader::new();
/// let model = loader.load_from_file("model.obj")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
use std::path::Path;

use crate::core::config::ImportConfig;
use crate::core::error::{MeshLoadError, Result};
use crate::geometry::{GeometryAccumulator, MeshObject, Model};

pub mod directive;
pub mod face;
pub mod index;
pub mod observer;

// 重新导出常用类型
pub use directive::{classify, Directive};
pub use face::{FaceRef, FaceSyntax, RawFace};
pub use observer::{ImportObserver, NullObserver};

/// 未命名模型的回退名称
pub const DEFAULT_MODEL_NAME: &str = "obj_model";

/// 导入选项
///
/// 控制单个加载器实例的装配行为。
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// 是否将模型位置平移到质心
    pub recenter: bool,

    /// 显式指定的模型名称
    ///
    /// 为 `None` 时依次回退到文件名（仅文件加载）和 [`DEFAULT_MODEL_NAME`]。
    pub model_name: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            recenter: true,
            model_name: None,
        }
    }
}

impl LoadOptions {
    /// 从导入配置构建选项
    pub fn from_config(config: &ImportConfig) -> Self {
        Self {
            recenter: config.recenter,
            model_name: config.model_name.clone(),
        }
    }
}

/// OBJ 格式加载器
///
/// 同一个实例可以安全地复用于多次顺序解析：
/// 每次调用独立持有池、对象列表和统计状态。
///
/// # 使用示例
///
/// ```rust
/// use dist_mesh::loader::ObjLoader;
///
/// let loader = ObjLoader::new();
/// let model = loader.parse_str("v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\n");
///
/// assert_eq!(model.vertex_count, 3);
/// assert_eq!(model.face_count, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjLoader {
    options: LoadOptions,
}

impl ObjLoader {
    /// 创建使用默认选项的加载器
    pub fn new() -> Self {
        Self {
            options: LoadOptions::default(),
        }
    }

    /// 创建使用给定选项的加载器
    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    /// 当前的导入选项
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// 解析 OBJ 文本
    ///
    /// 不注册观察者的便捷入口，语义与 [`parse_str_with`](Self::parse_str_with) 一致。
    pub fn parse_str(&self, source: &str) -> Model {
        self.parse_str_with(source, &mut NullObserver)
    }

    /// 解析 OBJ 文本并向观察者上报事件
    ///
    /// 回调同步触发，顺序与源文本行顺序一致。
    ///
    /// # 参数
    ///
    /// * `source` - 以 `\n` 分行的 OBJ 文本
    /// * `observer` - 接收解析事件的观察者
    ///
    /// # 返回值
    ///
    /// 装配完成的模型。本方法从不失败，参见模块级文档的解析契约。
    pub fn parse_str_with<O: ImportObserver>(&self, source: &str, observer: &mut O) -> Model {
        let name = self
            .options
            .model_name
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());

        self.parse_named(source, name, observer)
    }

    /// 从文件加载模型
    ///
    /// 未显式指定名称时，模型以文件名（不含扩展名）命名。
    ///
    /// # 错误
    ///
    /// - 文件不存在
    /// - 文件无法读取
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Model> {
        let path = path.as_ref();

        // 检查文件是否存在
        if !path.exists() {
            return Err(MeshLoadError::FileNotFound(path.to_path_buf()).into());
        }

        let source = std::fs::read_to_string(path)?;

        let name = self
            .options
            .model_name
            .clone()
            .or_else(|| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());

        Ok(self.parse_named(&source, name, &mut NullObserver))
    }

    /// 获取支持的文件扩展名列表
    pub fn supported_extensions() -> &'static [&'static str] {
        &["obj"]
    }

    fn parse_named<O: ImportObserver>(
        &self,
        source: &str,
        name: String,
        observer: &mut O,
    ) -> Model {
        let mut state = ParseState::new();
        state.consume(source, observer);
        state.finish(name, self.options.recenter)
    }
}

/// 根据文件扩展名选择合适的加载器
///
/// # 参数
///
/// * `path` - 模型文件路径
///
/// # 返回值
///
/// - `Ok(Model)`: 成功加载
/// - `Err(DistMeshError)`: 不支持的格式或加载失败
///
/// # 示例
///
/// ```rust,no_run
/// use dist_mesh::loader::load_model;
///
/// let model = load_model("model.obj")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Model> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| MeshLoadError::UnsupportedFormat("无法确定文件扩展名".to_string()))?;

    match extension.as_str() {
        "obj" => ObjLoader::new().load_from_file(path),
        _ => Err(MeshLoadError::UnsupportedFormat(format!(
            "不支持的文件格式: .{}",
            extension
        ))
        .into()),
    }
}

/// 已解析的角点引用
///
/// 所有偏移均已检查过落在池内。
struct ResolvedCorner {
    position: usize,
    texcoord: Option<usize>,
    normal: Option<usize>,
}

/// 单次解析的内部状态
///
/// 池按文件顺序只增不减；对象列表与统计随指令更新。
/// 状态只在一次解析调用内存活。
struct ParseState {
    positions: Vec<f32>,
    normals: Vec<f32>,
    texcoords: Vec<f32>,
    objects: Vec<MeshObject>,
    current: Option<usize>,
    accumulator: GeometryAccumulator,
    vertex_total: usize,
    face_total: usize,
    skipped_lines: usize,
    skipped_faces: usize,
}

impl ParseState {
    fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            texcoords: Vec::new(),
            objects: Vec::new(),
            current: None,
            accumulator: GeometryAccumulator::new(),
            vertex_total: 0,
            face_total: 0,
            skipped_lines: 0,
            skipped_faces: 0,
        }
    }

    /// 逐行消费源文本
    fn consume<O: ImportObserver>(&mut self, source: &str, observer: &mut O) {
        for raw_line in source.lines() {
            let line = raw_line.trim();

            match classify(line) {
                Directive::Blank => {}
                Directive::Comment(text) => observer.on_comment(text),
                Directive::Vertex([x, y, z]) => self.record_vertex(x, y, z, observer),
                Directive::Normal(components) => self.normals.extend_from_slice(&components),
                Directive::TexCoord(components) => self.texcoords.extend_from_slice(&components),
                Directive::Face(face) => self.emit_face(&face),
                Directive::Group(name) => self.open_object(name, observer),
                Directive::UseMaterial(material) => self.apply_material(material, observer),
                Directive::ObjectName | Directive::MaterialLib | Directive::Smoothing => {}
                Directive::Unrecognized(text) => {
                    self.skipped_lines += 1;
                    crate::import_warn!(line = %text, "跳过无法识别的行");
                    observer.on_unrecognized_line(text);
                }
            }
        }
    }

    /// 记录一条顶点指令
    ///
    /// 没有当前对象时先隐式创建一个空名称对象。
    fn record_vertex<O: ImportObserver>(&mut self, x: f32, y: f32, z: f32, observer: &mut O) {
        if self.current.is_none() {
            self.open_object("", observer);
        }

        self.positions.extend_from_slice(&[x, y, z]);
        self.accumulator.record(x, y, z);
        self.vertex_total += 1;

        if let Some(index) = self.current {
            self.objects[index].vertex_count += 1;
        }
    }

    /// 打开一个新的网格对象并使其成为当前对象
    fn open_object<O: ImportObserver>(&mut self, name: &str, observer: &mut O) {
        self.objects.push(MeshObject::new(name));
        self.current = Some(self.objects.len() - 1);

        let total = self.objects.len();
        observer.on_new_mesh(&self.objects[total - 1], total);
    }

    /// 对当前对象应用 usemtl 指令
    fn apply_material<O: ImportObserver>(&mut self, material: &str, observer: &mut O) {
        match self.current {
            Some(index) => {
                self.objects[index].material = Some(material.to_string());
                observer.on_new_material(material, &self.objects[index]);
            }
            None => {
                tracing::debug!(material, "没有当前对象，忽略 usemtl 指令");
            }
        }
    }

    /// 发射一条面记录
    ///
    /// 先整体解析所有索引，任何一个越界都会原子地跳过整行，
    /// 不产生部分三角形。
    fn emit_face(&mut self, face: &RawFace) {
        let current = match self.current {
            Some(index) => index,
            None => {
                self.skipped_faces += 1;
                crate::import_warn!("没有当前对象，跳过面记录");
                return;
            }
        };

        let mut corners = Vec::with_capacity(face.refs.len());
        for face_ref in &face.refs {
            match self.resolve_ref(face_ref) {
                Some(corner) => corners.push(corner),
                None => {
                    self.skipped_faces += 1;
                    crate::import_warn!(
                        position = face_ref.position,
                        "面索引越界，跳过整条面记录"
                    );
                    return;
                }
            }
        }

        let object = &mut self.objects[current];
        for triangle in face.triangle_corners() {
            for &corner_index in triangle {
                let corner = &corners[corner_index];

                object
                    .positions
                    .extend_from_slice(&self.positions[corner.position..corner.position + 3]);

                if let Some(offset) = corner.texcoord {
                    object
                        .texcoords
                        .extend_from_slice(&self.texcoords[offset..offset + 2]);
                }

                if let Some(offset) = corner.normal {
                    object
                        .normals
                        .extend_from_slice(&self.normals[offset..offset + 3]);
                }
            }

            object.face_count += 1;
            self.face_total += 1;
        }
    }

    /// 解析单个顶点引用并检查池边界
    fn resolve_ref(&self, face_ref: &FaceRef) -> Option<ResolvedCorner> {
        let position = index::checked_offset(face_ref.position, &self.positions, 3)?;

        let texcoord = match face_ref.texcoord {
            Some(raw) => Some(index::checked_offset(raw, &self.texcoords, 2)?),
            None => None,
        };

        let normal = match face_ref.normal {
            Some(raw) => Some(index::checked_offset(raw, &self.normals, 3)?),
            None => None,
        };

        Some(ResolvedCorner {
            position,
            texcoord,
            normal,
        })
    }

    /// 装配模型并输出解析摘要
    fn finish(self, name: String, recenter: bool) -> Model {
        if self.skipped_lines > 0 || self.skipped_faces > 0 {
            crate::import_warn!(
                lines = self.skipped_lines,
                faces = self.skipped_faces,
                "解析过程中跳过了部分输入"
            );
        }

        let model = Model::assemble(
            name,
            self.objects,
            self.vertex_total,
            self.face_total,
            self.accumulator,
            recenter,
        );

        crate::import_info!(
            model = %model.name,
            objects = model.object_count(),
            vertices = model.vertex_count,
            faces = model.face_count,
            "OBJ 解析完成"
        );

        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::approx_eq_slice;
    use crate::math::{constants::EPSILON, utils::approx_eq};

    #[derive(Default)]
    struct RecordingObserver {
        meshes: Vec<(String, usize)>,
        materials: Vec<(String, String)>,
        comments: Vec<String>,
        unrecognized: Vec<String>,
    }

    impl ImportObserver for RecordingObserver {
        fn on_new_mesh(&mut self, object: &MeshObject, total_meshes: usize) {
            self.meshes.push((object.name.clone(), total_meshes));
        }

        fn on_new_material(&mut self, material: &str, object: &MeshObject) {
            self.materials.push((material.to_string(), object.name.clone()));
        }

        fn on_comment(&mut self, line: &str) {
            self.comments.push(line.to_string());
        }

        fn on_unrecognized_line(&mut self, line: &str) {
            self.unrecognized.push(line.to_string());
        }
    }

    fn raw_loader() -> ObjLoader {
        ObjLoader::with_options(LoadOptions {
            recenter: false,
            model_name: None,
        })
    }

    #[test]
    fn test_single_triangle_statistics() {
        let model = ObjLoader::new().parse_str("v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\n");

        assert_eq!(model.object_count(), 1);
        assert_eq!(model.vertex_count, 3);
        assert_eq!(model.face_count, 1);

        assert_eq!(model.bounds.min.x, 0.0);
        assert_eq!(model.bounds.max.x, 2.0);
        assert_eq!(model.bounds.min.y, 0.0);
        assert_eq!(model.bounds.max.y, 2.0);
        assert_eq!(model.bounds.min.z, 0.0);
        assert_eq!(model.bounds.max.z, 0.0);

        assert!(approx_eq(model.centroid.x, 2.0 / 3.0, EPSILON));
        assert!(approx_eq(model.centroid.y, 2.0 / 3.0, EPSILON));
        assert_eq!(model.centroid.z, 0.0);
    }

    #[test]
    fn test_triangle_preserves_corner_order() {
        let model = raw_loader().parse_str("v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\n");

        let expected = [
            0.0, 0.0, 0.0,
            2.0, 0.0, 0.0,
            0.0, 2.0, 0.0,
        ];
        assert_eq!(model.objects[0].positions, expected);
    }

    #[test]
    fn test_quad_splits_into_two_triangles() {
        let source = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let model = raw_loader().parse_str(source);

        assert_eq!(model.face_count, 2);

        // 三角形 (1,2,4) 和 (2,3,4)，共 6 个角点
        let expected = [
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
            1.0, 1.0, 0.0,
            0.0, 1.0, 0.0,
        ];
        assert_eq!(model.objects[0].positions, expected);
    }

    #[test]
    fn test_negative_indices_resolve_against_current_pools() {
        let source = "v -1 -1 -1\nvt 0.5 0.5\nf -1/1 -1/1 -1/1\n";
        let model = raw_loader().parse_str(source);

        assert_eq!(model.face_count, 1);
        assert_eq!(model.objects[0].positions, [-1.0; 9]);
        assert_eq!(model.objects[0].texcoords, [0.5; 6]);
    }

    #[test]
    fn test_negative_index_sees_pool_growth() {
        // 两个面各自引用当时的倒数第一个顶点
        let source = "v 1 0 0\nv 2 0 0\nv 3 0 0\nf 1 2 -1\nv 9 9 9\nf 1 2 -1\n";
        let model = raw_loader().parse_str(source);

        assert_eq!(model.face_count, 2);
        assert_eq!(model.objects[0].positions[6..9], [3.0, 0.0, 0.0]);
        assert_eq!(model.objects[0].positions[15..18], [9.0, 9.0, 9.0]);
    }

    #[test]
    fn test_unrecognized_line_leaves_state_untouched() {
        let mut observer = RecordingObserver::default();
        let source = "v 0 0 0\nxyz garbage\nv 2 0 0\nv 0 2 0\nf 1 2 3\n";
        let model = raw_loader().parse_str_with(source, &mut observer);

        assert_eq!(observer.unrecognized, vec!["xyz garbage"]);
        assert_eq!(model.vertex_count, 3);
        assert_eq!(model.face_count, 1);
        assert_eq!(model.objects[0].positions.len(), 9);
    }

    #[test]
    fn test_consecutive_groups_produce_empty_objects() {
        let model = ObjLoader::new().parse_str("g first\ng second\n");

        assert_eq!(model.object_count(), 2);
        assert_eq!(model.objects[0].name, "first");
        assert_eq!(model.objects[1].name, "second");
        assert!(model.objects[0].is_empty());
        assert!(model.objects[1].is_empty());
    }

    #[test]
    fn test_implicit_object_has_empty_name() {
        let mut observer = RecordingObserver::default();
        let model = ObjLoader::new().parse_str_with("v 0 0 0\n", &mut observer);

        assert_eq!(model.object_count(), 1);
        assert_eq!(model.objects[0].name, "");
        assert_eq!(observer.meshes, vec![("".to_string(), 1)]);
    }

    #[test]
    fn test_vertices_attribute_to_current_group() {
        let source = "g a\nv 0 0 0\nv 1 0 0\ng b\nv 2 0 0\n";
        let model = ObjLoader::new().parse_str(source);

        assert_eq!(model.objects[0].vertex_count, 2);
        assert_eq!(model.objects[1].vertex_count, 1);
        assert_eq!(model.vertex_count, 3);
    }

    #[test]
    fn test_out_of_range_face_is_skipped_atomically() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 99\nf 1 2 3\n";
        let model = raw_loader().parse_str(source);

        // 越界的面整条丢弃，合法的面正常发射
        assert_eq!(model.face_count, 1);
        assert_eq!(model.objects[0].positions.len(), 9);
    }

    #[test]
    fn test_out_of_range_quad_emits_no_partial_triangles() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3 99\n";
        let model = raw_loader().parse_str(source);

        assert_eq!(model.face_count, 0);
        assert!(model.objects[0].positions.is_empty());
    }

    #[test]
    fn test_zero_index_is_out_of_range() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n";
        let model = raw_loader().parse_str(source);

        assert_eq!(model.face_count, 0);
    }

    #[test]
    fn test_usemtl_tags_current_object_and_notifies() {
        let mut observer = RecordingObserver::default();
        let source = "g hull\nusemtl steel\nv 0 0 0\n";
        let model = ObjLoader::new().parse_str_with(source, &mut observer);

        assert_eq!(model.objects[0].material.as_deref(), Some("steel"));
        assert_eq!(
            observer.materials,
            vec![("steel".to_string(), "hull".to_string())]
        );
    }

    #[test]
    fn test_usemtl_without_object_is_ignored() {
        let model = ObjLoader::new().parse_str("usemtl steel\n");

        assert_eq!(model.object_count(), 0);
    }

    #[test]
    fn test_comment_callback_receives_full_line() {
        let mut observer = RecordingObserver::default();
        ObjLoader::new().parse_str_with("# hello world\n   # indented\n", &mut observer);

        assert_eq!(observer.comments, vec!["# hello world", "# indented"]);
    }

    #[test]
    fn test_full_syntax_fills_all_buffers() {
        let source = "\
v 0 0 0\nv 1 0 0\nv 0 1 0\n\
vn 0 0 1\nvn 0 0 1\nvn 0 0 1\n\
vt 0 0\nvt 1 0\nvt 0 1\n\
f 1/1/1 2/2/2 3/3/3\n";
        let model = raw_loader().parse_str(source);

        let object = &model.objects[0];
        assert_eq!(object.positions.len(), 9);
        assert_eq!(object.normals.len(), 9);
        assert_eq!(object.texcoords.len(), 6);
        assert_eq!(object.texcoords, [0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert!(object.validate().is_ok());
    }

    #[test]
    fn test_position_normal_syntax_skips_texcoords() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n";
        let model = raw_loader().parse_str(source);

        let object = &model.objects[0];
        assert_eq!(object.normals.len(), 9);
        assert!(object.texcoords.is_empty());
    }

    #[test]
    fn test_attribute_presence_varies_between_faces() {
        // 同一分组内只有第一个面携带法线和UV
        let source = "\
g part\n\
v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 0 1\nv 1 0 1\nv 0 1 1\n\
vt 0 0\nvn 0 0 1\n\
f 1/1/1 2/1/1 3/1/1\n\
f 4 5 6\n";
        let model = raw_loader().parse_str(source);

        let object = &model.objects[0];
        assert_eq!(object.face_count, 2);
        assert_eq!(object.positions.len(), 18);
        assert_eq!(object.normals.len(), 9);
        assert_eq!(object.texcoords.len(), 6);

        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_recenter_shifts_positions_by_centroid() {
        let source = "v 0 0 1\nv 2 0 3\nv 0 2 2\nf 1 2 3\n";

        let raw = raw_loader().parse_str(source);
        let centered = ObjLoader::new().parse_str(source);

        let centroid = raw.centroid;
        assert_eq!(centroid.z, 3.0);

        let mut expected = raw.objects[0].positions.clone();
        for corner in expected.chunks_exact_mut(3) {
            corner[0] -= centroid.x;
            corner[1] -= centroid.y;
            corner[2] -= centroid.z;
        }

        assert!(approx_eq_slice(&centered.objects[0].positions, &expected));
        // 统计值保持原始坐标
        assert_eq!(centered.bounds.max.z, 3.0);
        assert_eq!(centered.centroid, raw.centroid);
    }

    #[test]
    fn test_repeated_parses_are_identical() {
        let source = "g part\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";

        let first = ObjLoader::new().parse_str(source);
        let second = ObjLoader::new().parse_str(source);

        assert_eq!(first.vertex_count, second.vertex_count);
        assert_eq!(first.face_count, second.face_count);
        assert_eq!(first.bounds, second.bounds);
        assert_eq!(first.objects, second.objects);
    }

    #[test]
    fn test_empty_source_yields_empty_model() {
        let model = ObjLoader::new().parse_str("");

        assert!(model.is_empty());
        assert_eq!(model.object_count(), 0);
        assert!(model.bounds.is_empty());
        assert_eq!(model.centroid.x, 0.0);
        assert_eq!(model.name, DEFAULT_MODEL_NAME);
    }

    #[test]
    fn test_explicit_model_name_wins() {
        let loader = ObjLoader::with_options(LoadOptions {
            recenter: true,
            model_name: Some("station".to_string()),
        });

        let model = loader.parse_str("v 0 0 0\n");
        assert_eq!(model.name, "station");
    }

    #[test]
    fn test_load_from_file_derives_name_from_stem() {
        let path = std::env::temp_dir().join(format!("dist_mesh_stem_{}.obj", std::process::id()));
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let model = ObjLoader::new().load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(
            model.name,
            format!("dist_mesh_stem_{}", std::process::id())
        );
        assert_eq!(model.face_count, 1);
    }

    #[test]
    fn test_load_from_file_missing() {
        let result = ObjLoader::new().load_from_file("definitely_missing.obj");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_model_rejects_unknown_extension() {
        assert!(load_model("model.fbx").is_err());
        assert!(load_model("model").is_err());
    }

    #[test]
    fn test_supported_extensions() {
        assert_eq!(ObjLoader::supported_extensions(), &["obj"]);
    }

    #[test]
    fn test_new_mesh_callback_counts_cumulatively() {
        let mut observer = RecordingObserver::default();
        ObjLoader::new().parse_str_with("g a\ng b\ng c\n", &mut observer);

        assert_eq!(
            observer.meshes,
            vec![
                ("a".to_string(), 1),
                ("b".to_string(), 2),
                ("c".to_string(), 3),
            ]
        );
    }
}
