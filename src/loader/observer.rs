//! 导入观察者模块
//!
//! 提供解析过程中的同步通知机制，参考 DistEngine 的 Event/EventDispatcher 设计。
//! 宿主应用可以借此跟踪导入进度、收集诊断或挂接资源管理逻辑。
//!
//! # 设计原则
//!
//! - **即发即弃**：所有回调同步调用、按文件顺序触发，返回值不影响解析
//! - **默认空操作**：trait 的每个方法都有空实现，按需覆盖
//! - **非侵入**：不注册观察者时解析行为完全一致
//!
//! # 与 DistEngine 的对比
//!
//! | 特性 | DistEngine (C++) | dist_mesh (Rust) |
//! |------|------------------|------------------|
//! | 通知机制 | 回调函数指针 | trait 默认方法 |
//! | 生命周期 | 手动管理 | 借用检查保证 |
//! | 未注册开销 | 空指针判断 | 静态分发，零开销 |
//!
//! # 使用示例
//!
//! ```
//! use dist_mesh::loader::{ImportObserver, ObjLoader};
//!
//! struct CommentPrinter;
//!
//! impl ImportObserver for CommentPrinter {
//!     fn on_comment(&mut self, line: &str) {
//!         println!("注释: {}", line);
//!     }
//! }
//!
//! let loader = ObjLoader::new();
//! let mut observer = CommentPrinter;
//! let model = loader.parse_str_with("# header\nv 0 0 0\n", &mut observer);
//! assert_eq!(model.vertex_count, 1);
//! ```

use crate::geometry::MeshObject;

/// 解析过程的事件观察者
///
/// 所有方法默认空操作。回调在解析线程上同步触发，
/// 顺序与源文本中的行顺序一致。
pub trait ImportObserver {
    /// 新网格对象创建时触发
    ///
    /// 在显式 `g` 分组或首个顶点的隐式创建之后调用。
    /// `total_meshes` 为包含新对象在内的对象总数。
    fn on_new_mesh(&mut self, _object: &MeshObject, _total_meshes: usize) {}

    /// `usemtl` 指令设置材质标签后触发
    fn on_new_material(&mut self, _material: &str, _object: &MeshObject) {}

    /// 注释行触发，携带包含 `#` 标记的完整行文本
    fn on_comment(&mut self, _line: &str) {}

    /// 无法识别的行触发，仅用于诊断
    fn on_unrecognized_line(&mut self, _line: &str) {}
}

/// 空观察者
///
/// 不注册任何回调时使用的默认实现。
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ImportObserver for NullObserver {}
