/// OBJ 模型加载示例
///
/// 演示如何使用 DistMesh 的 loader 模块解析 OBJ 数据并交织顶点缓冲。
///
/// 运行方式：
/// ```
/// cargo run --example load_obj              # 解析内置示例数据
/// cargo run --example load_obj model.obj    # 解析指定文件
/// ```

use dist_mesh::geometry::VertexBufferBuilder;
use dist_mesh::loader::{load_model, ObjLoader};

/// 内置的示例数据：一个单位立方体的底面和顶面
const SAMPLE: &str = "\
# 示例立方体（仅两个面）
g bottom
v 0 0 0
v 1 0 0
v 1 0 1
v 0 0 1
f 1 2 3 4
g top
v 0 1 0
v 1 1 0
v 1 1 1
v 0 1 1
f -4 -3 -2 -1
";

fn main() {
    // 初始化日志系统
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== DistMesh OBJ 加载器示例 ===\n");

    let model = match std::env::args().nth(1) {
        Some(path) => {
            println!("正在加载: {}", path);
            match load_model(&path) {
                Ok(model) => model,
                Err(e) => {
                    eprintln!("\n✗ 加载失败: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("未指定文件，解析内置示例数据");
            ObjLoader::new().parse_str(SAMPLE)
        }
    };

    println!("\n✓ 加载成功！\n");

    println!("模型信息:");
    println!("  名称: {}", model.name);
    println!("  对象数: {}", model.object_count());
    println!("  顶点数: {}", model.vertex_count);
    println!("  三角形数: {}", model.face_count);
    println!(
        "  包围盒: [{:.3}, {:.3}, {:.3}] - [{:.3}, {:.3}, {:.3}]",
        model.bounds.min.x, model.bounds.min.y, model.bounds.min.z,
        model.bounds.max.x, model.bounds.max.y, model.bounds.max.z,
    );
    println!(
        "  质心: [{:.3}, {:.3}, {:.3}]",
        model.centroid.x, model.centroid.y, model.centroid.z,
    );

    // 显示每个对象的信息
    println!("\n对象信息:");
    for (i, object) in model.objects.iter().enumerate() {
        println!("  对象 {}:", i);
        let display_name = if object.name.is_empty() { "(未命名)" } else { object.name.as_str() };
        println!("    名称: {}", display_name);
        println!("    材质: {}", object.material.as_deref().unwrap_or("(无)"));
        println!("    顶点数: {}", object.vertex_count);
        println!("    三角形数: {}", object.face_count);
    }

    // 交织顶点缓冲
    let mut builder = VertexBufferBuilder::new();
    let buffers = model.build_meshes(&mut builder);

    println!("\n顶点缓冲（第一个对象的前 3 个顶点）:");
    if let Some(first) = buffers.first() {
        for (i, vertex) in first.iter().take(3).enumerate() {
            println!("  顶点 {}:", i);
            println!(
                "    位置: [{:.3}, {:.3}, {:.3}]",
                vertex.position[0], vertex.position[1], vertex.position[2]
            );
            println!(
                "    法线: [{:.3}, {:.3}, {:.3}]",
                vertex.normal[0], vertex.normal[1], vertex.normal[2]
            );
            println!(
                "    UV: [{:.3}, {:.3}]",
                vertex.texcoord[0], vertex.texcoord[1]
            );
        }
    }

    // 验证数据
    match model.validate() {
        Ok(()) => println!("\n✓ 数据验证通过"),
        Err(e) => println!("\n✗ 数据验证失败: {}", e),
    }

    println!("\n=== 示例完成 ===");
}
