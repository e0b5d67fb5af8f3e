//! Non-indexed triangle meshes built one quad at a time.
//!
//! Front faces wind so that `(b - a) × (c - a)` points out of the surface,
//! which is counter-clockwise in Bevy's right-handed, Y-up frame.

use bevy::{
    math::{Vec2, Vec3},
    render::{
        mesh::{Indices, Mesh},
        render_asset::RenderAssetUsages,
        render_resource::PrimitiveTopology,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<u32>,
    /// Empty, or one entry per vertex.
    pub uvs: Vec<Vec2>,
    /// One entry per vertex once [`MeshData::recalculate_normals`] has run.
    pub normals: Vec<Vec3>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn quad_count(&self) -> usize {
        self.triangle_count() / 2
    }

    /// Append corners `[a, b, c, d]` as triangles `{a, b, c}` and `{b, d, c}`.
    /// Every vertex is fresh; nothing is shared with earlier quads.
    pub fn push_quad(&mut self, corners: [Vec3; 4], uvs: Option<[Vec2; 4]>) {
        const ORDER: [usize; 6] = [0, 1, 2, 1, 3, 2];
        for k in ORDER {
            self.triangles.push(self.vertices.len() as u32);
            self.vertices.push(corners[k]);
            if let Some(uv) = uvs {
                self.uvs.push(uv[k]);
            }
        }
    }

    /// Flat per-triangle normals; every vertex of a triangle gets its face normal.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.triangles.chunks_exact(3) {
            let [ia, ib, ic] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let (a, b, c) = (self.vertices[ia], self.vertices[ib], self.vertices[ic]);
            let normal = (b - a).cross(c - a).normalize_or_zero();
            normals[ia] = normal;
            normals[ib] = normal;
            normals[ic] = normal;
        }
        self.normals = normals;
    }

    pub fn face_normal(&self, triangle: usize) -> Vec3 {
        let base = triangle * 3;
        let a = self.vertices[self.triangles[base] as usize];
        let b = self.vertices[self.triangles[base + 1] as usize];
        let c = self.vertices[self.triangles[base + 2] as usize];
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Convert into a Bevy triangle-list mesh for the renderable-surface host.
    pub fn to_bevy_mesh(&self) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        let positions: Vec<[f32; 3]> = self.vertices.iter().map(|v| v.to_array()).collect();
        let normals: Vec<[f32; 3]> = if self.normals.len() == self.vertices.len() {
            self.normals.iter().map(|n| n.to_array()).collect()
        } else {
            vec![[0.0, 1.0, 0.0]; self.vertices.len()]
        };
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        if !self.uvs.is_empty() {
            let uvs: Vec<[f32; 2]> = self.uvs.iter().map(|uv| uv.to_array()).collect();
            mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        }
        mesh.insert_indices(Indices::U32(self.triangles.clone()));
        mesh
    }
}
