//! Mesh construction backends
//!
//! This module defines the seam between parsed geometry and renderer-facing
//! mesh resources, similar to the DistEngine C++ MeshBuilder. The parser
//! hands each finished object to a backend; what comes back is up to the
//! host renderer.

use tracing::debug;

use super::mesh::MeshObject;
use super::vertex::Vertex;

/// Backend that turns a parsed mesh object into a renderable resource
///
/// Implementations receive flat attribute buffers (positions stride 3,
/// optional normals stride 3, optional texcoords stride 2) and return
/// whatever handle the host renderer uses.
///
/// # Example
///
/// ```rust
/// use dist_mesh::geometry::{MeshBackend, MeshObject};
///
/// struct TriangleCounter;
///
/// impl MeshBackend for TriangleCounter {
///     type Output = usize;
///
///     fn build(&mut self, object: &MeshObject) -> usize {
///         object.face_count
///     }
/// }
/// ```
pub trait MeshBackend {
    /// The mesh resource type produced by this backend
    type Output;

    /// Build one mesh resource from a parsed object
    fn build(&mut self, object: &MeshObject) -> Self::Output;
}

/// Backend that interleaves flat attribute buffers into packed vertices
///
/// Produces a GPU-uploadable `Vec<Vertex>` per object. Attributes the
/// source file never provided are filled with zeros so the vertex layout
/// stays fixed.
#[derive(Debug, Default)]
pub struct VertexBufferBuilder {
    // Total vertices produced across all build calls
    built_vertices: usize,
}

impl VertexBufferBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of vertices produced so far
    pub fn built_vertices(&self) -> usize {
        self.built_vertices
    }
}

impl MeshBackend for VertexBufferBuilder {
    type Output = Vec<Vertex>;

    fn build(&mut self, object: &MeshObject) -> Vec<Vertex> {
        let vertices = interleave(object);
        self.built_vertices += vertices.len();

        debug!(
            object = %object.name,
            vertices = vertices.len(),
            "Interleaved vertex buffer"
        );

        vertices
    }
}

/// Interleave an object's flat buffers into packed vertices
fn interleave(object: &MeshObject) -> Vec<Vertex> {
    let corner_count = object.positions.len() / 3;
    let mut vertices = Vec::with_capacity(corner_count);

    for corner in 0..corner_count {
        vertices.push(Vertex::new(
            fetch3(&object.positions, corner),
            fetch3(&object.normals, corner),
            fetch2(&object.texcoords, corner),
        ));
    }

    vertices
}

// Out-of-range reads interleave as zeros
fn fetch3(buffer: &[f32], corner: usize) -> [f32; 3] {
    let base = corner * 3;
    [
        buffer.get(base).copied().unwrap_or(0.0),
        buffer.get(base + 1).copied().unwrap_or(0.0),
        buffer.get(base + 2).copied().unwrap_or(0.0),
    ]
}

fn fetch2(buffer: &[f32], corner: usize) -> [f32; 2] {
    let base = corner * 2;
    [
        buffer.get(base).copied().unwrap_or(0.0),
        buffer.get(base + 1).copied().unwrap_or(0.0),
    ]
}
