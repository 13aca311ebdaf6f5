use crate::data::{LoadError, LoadResult};
use crate::math::Vec4;

/// Triangle mesh of the flying object
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vec4>,
    triangles: Vec<[u32; 3]>,
    /// Mean of all vertices, `w = 1`; the pivot the object is placed by
    center: Vec4,
}

impl Mesh {
    /// Build a mesh from homogeneous vertices and 0-based triangles.
    /// Fails on an empty vertex list, which has no center.
    pub fn new(vertices: Vec<Vec4>, triangles: Vec<[u32; 3]>) -> LoadResult<Self> {
        if vertices.is_empty() {
            return Err(LoadError::EmptyMesh);
        }

        let sum = vertices
            .iter()
            .fold(Vec4::default(), |acc, v| acc + *v);
        let center = (sum * (1.0 / vertices.len() as f32)).with_w(1.0);

        Ok(Self {
            vertices,
            triangles,
            center,
        })
    }

    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn center(&self) -> Vec4 {
        self.center
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Vertex positions as flat `x, y, z` floats for a GL buffer
    pub fn vertex_data(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.xyz().to_array())
            .collect()
    }

    /// Triangle indices as a flat list for a GL element buffer
    pub fn index_data(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
