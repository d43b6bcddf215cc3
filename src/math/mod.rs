//! 统一的数学库模块
//!
//! 提供几何导入常用的数学类型和函数。
//! 基于 `nalgebra` 但提供了更友好的 API。
//!
//! # 模块组织
//!
//! - **基础类型**：Vector2/3, Point3
//! - **常量**：EPSILON 等
//! - **工具函数**：approx_eq 等
//!
//! # 设计理念
//!
//! 参考 C++ DistEngine 的数学库设计：
//! - 简洁的类型名称（Vector2, Vector3 等）
//! - 零成本抽象，性能与手写代码相当

pub use nalgebra::{Point3, Vector2 as Vec2, Vector3 as Vec3};

// 类型别名，使用更简洁的名称
pub type Vector2 = Vec2<f32>;
pub type Vector3 = Vec3<f32>;

/// 数学常量
pub mod constants {
    /// 浮点数比较的 epsilon
    pub const EPSILON: f32 = 1e-6;
}

/// 数学工具函数
pub mod utils {
    use super::constants::EPSILON;

    /// 检查两个浮点数是否近似相等
    pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    /// 检查两个浮点数组是否逐元素近似相等
    pub fn approx_eq_slice(a: &[f32], b: &[f32]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| approx_eq(*x, *y, EPSILON))
    }
}

// 注意：由于 Rust 的孤儿规则，我们不能为 nalgebra 的 Vector 类型实现 bytemuck traits
// 顶点结构使用原始数组，但提供了 from_vectors() 便利方法来使用 Vector 类型
