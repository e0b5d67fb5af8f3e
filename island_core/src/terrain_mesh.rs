use bevy::math::{Vec2, Vec3};

use crate::{grid::Grid, mesh::MeshData};

/// Top surface: one unit quad at height 0 per land cell, centred on `(x, y)`.
///
/// Water cells leave holes. UVs map each cell onto its own texel of a
/// `size × size` texture.
pub fn build_terrain_mesh(grid: &Grid) -> MeshData {
    let size = grid.size() as f32;
    let mut mesh = MeshData::new();

    for (x, y) in grid.land_cells() {
        let (fx, fy) = (x as f32, y as f32);

        let a = Vec3::new(fx - 0.5, 0.0, fy + 0.5);
        let b = Vec3::new(fx + 0.5, 0.0, fy + 0.5);
        let c = Vec3::new(fx - 0.5, 0.0, fy - 0.5);
        let d = Vec3::new(fx + 0.5, 0.0, fy - 0.5);

        let uv_a = Vec2::new(fx / size, fy / size);
        let uv_b = Vec2::new((fx + 1.0) / size, fy / size);
        let uv_c = Vec2::new(fx / size, (fy + 1.0) / size);
        let uv_d = Vec2::new((fx + 1.0) / size, (fy + 1.0) / size);

        mesh.push_quad([a, b, c, d], Some([uv_a, uv_b, uv_c, uv_d]));
    }

    mesh.recalculate_normals();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_vertices_per_land_cell() {
        let grid = Grid::from_rows(&["#.#.", "####", "....", ".#.."]);
        let mesh = build_terrain_mesh(&grid);

        assert_eq!(grid.land_count(), 7);
        assert_eq!(mesh.vertices.len(), 6 * 7);
        assert_eq!(mesh.triangles.len(), mesh.vertices.len());
        assert_eq!(mesh.uvs.len(), mesh.vertices.len());
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
        for (i, &index) in mesh.triangles.iter().enumerate() {
            assert_eq!(index as usize, i);
        }
    }

    #[test]
    fn all_water_yields_empty_mesh() {
        let grid = Grid::from_rows(&["..", ".."]);
        let mesh = build_terrain_mesh(&grid);
        assert!(mesh.is_empty());
        assert!(mesh.triangles.is_empty());
    }

    #[test]
    fn quad_corners_and_uvs() {
        let grid = Grid::from_rows(&["..", ".#"]);
        let mesh = build_terrain_mesh(&grid);

        assert_eq!(mesh.vertices[0], Vec3::new(0.5, 0.0, 1.5));
        assert_eq!(mesh.vertices[1], Vec3::new(1.5, 0.0, 1.5));
        assert_eq!(mesh.vertices[2], Vec3::new(0.5, 0.0, 0.5));
        assert_eq!(mesh.vertices[4], Vec3::new(1.5, 0.0, 0.5));

        assert_eq!(mesh.uvs[0], Vec2::new(0.5, 0.5));
        assert_eq!(mesh.uvs[1], Vec2::new(1.0, 0.5));
        assert_eq!(mesh.uvs[2], Vec2::new(0.5, 1.0));
        assert_eq!(mesh.uvs[4], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn surface_faces_up() {
        let grid = Grid::from_rows(&["##", "#."]);
        let mesh = build_terrain_mesh(&grid);
        for tri in 0..mesh.triangle_count() {
            assert!(mesh.face_normal(tri).abs_diff_eq(Vec3::Y, 1e-6));
        }
        assert!(mesh.normals.iter().all(|n| n.abs_diff_eq(Vec3::Y, 1e-6)));
    }
}
