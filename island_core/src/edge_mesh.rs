//! Cliff walls along land/water boundaries.
//!
//! Walls hang from the top surface (height 0) down to [`WALL_DEPTH`] on the
//! edge shared by a land cell and an in-bounds water neighbour. Land cells on
//! the map border get no wall on their outward side.

use bevy::math::Vec3;

use crate::{
    grid::{Direction, Grid},
    mesh::MeshData,
};

pub const WALL_DEPTH: f32 = -1.0;

/// Corners `[a, b, c, d]` of the wall on `dir`'s side of cell `(x, y)`.
///
/// Each ordering is chosen so the face normal points away from the land cell.
pub fn wall_corners(x: u32, y: u32, dir: Direction) -> [Vec3; 4] {
    let (fx, fy) = (x as f32, y as f32);
    let (top, bottom) = (0.0, WALL_DEPTH);
    match dir {
        Direction::Left => [
            Vec3::new(fx - 0.5, top, fy + 0.5),
            Vec3::new(fx - 0.5, top, fy - 0.5),
            Vec3::new(fx - 0.5, bottom, fy + 0.5),
            Vec3::new(fx - 0.5, bottom, fy - 0.5),
        ],
        Direction::Right => [
            Vec3::new(fx + 0.5, top, fy - 0.5),
            Vec3::new(fx + 0.5, top, fy + 0.5),
            Vec3::new(fx + 0.5, bottom, fy - 0.5),
            Vec3::new(fx + 0.5, bottom, fy + 0.5),
        ],
        Direction::Down => [
            Vec3::new(fx - 0.5, top, fy - 0.5),
            Vec3::new(fx + 0.5, top, fy - 0.5),
            Vec3::new(fx - 0.5, bottom, fy - 0.5),
            Vec3::new(fx + 0.5, bottom, fy - 0.5),
        ],
        Direction::Up => [
            Vec3::new(fx + 0.5, top, fy + 0.5),
            Vec3::new(fx - 0.5, top, fy + 0.5),
            Vec3::new(fx + 0.5, bottom, fy + 0.5),
            Vec3::new(fx - 0.5, bottom, fy + 0.5),
        ],
    }
}

/// Build the wall mesh for every land/water boundary in `grid`.
///
/// The result has no UVs; it is meant for a separate cliff material.
pub fn build_edge_mesh(grid: &Grid) -> MeshData {
    let mut mesh = MeshData::new();

    for (x, y) in grid.land_cells() {
        for dir in Direction::ALL {
            let Some(neighbor) = grid.neighbor(x, y, dir) else {
                continue;
            };
            if neighbor.is_water() {
                mesh.push_quad(wall_corners(x, y, dir), None);
            }
        }
    }

    mesh.recalculate_normals();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outward(dir: Direction) -> Vec3 {
        let (dx, dy) = dir.delta();
        Vec3::new(dx as f32, 0.0, dy as f32)
    }

    #[test]
    fn walls_face_away_from_land() {
        for dir in Direction::ALL {
            let mut mesh = MeshData::new();
            mesh.push_quad(wall_corners(3, 3, dir), None);
            for tri in 0..2 {
                assert!(
                    mesh.face_normal(tri).abs_diff_eq(outward(dir), 1e-6),
                    "{dir:?} wall triangle {tri} faces {:?}",
                    mesh.face_normal(tri)
                );
            }
        }
    }

    #[test]
    fn single_water_neighbor_gets_one_wall_on_shared_edge() {
        let mut rows = vec!["##########"; 10];
        rows[5] = "####.#####";
        let grid = Grid::from_rows(&rows);
        assert!(grid.cell(5, 5).is_land());
        assert!(grid.cell(4, 5).is_water());

        let mesh = build_edge_mesh(&grid);
        // (3,5), (5,5), (4,4) and (4,6) each border the one water cell.
        assert_eq!(mesh.quad_count(), 4);

        let at_x = |x: f32| {
            (0..mesh.quad_count())
                .filter(|q| mesh.vertices[q * 6..q * 6 + 6].iter().all(|v| v.x == x))
                .collect::<Vec<_>>()
        };
        let facing_neg_x: Vec<_> = at_x(4.5)
            .into_iter()
            .filter(|q| mesh.face_normal(q * 2).abs_diff_eq(Vec3::NEG_X, 1e-6))
            .collect();
        assert_eq!(facing_neg_x.len(), 1);
        let quad = facing_neg_x[0];
        for v in &mesh.vertices[quad * 6..quad * 6 + 6] {
            assert!(v.z >= 4.5 && v.z <= 5.5);
            assert!(v.y == 0.0 || v.y == WALL_DEPTH);
        }
        assert_eq!(at_x(3.5).len(), 1);
    }

    #[test]
    fn no_walls_between_land_or_at_border() {
        let grid = Grid::from_rows(&["###", "###", "###"]);
        let mesh = build_edge_mesh(&grid);
        assert!(mesh.is_empty());

        let grid = Grid::from_rows(&["#"]);
        assert!(build_edge_mesh(&grid).is_empty());
    }

    #[test]
    fn isolated_land_cell_gets_four_walls() {
        let grid = Grid::from_rows(&["...", ".#.", "..."]);
        let mesh = build_edge_mesh(&grid);
        assert_eq!(mesh.quad_count(), 4);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangles.len(), 24);
        assert!(mesh.uvs.is_empty());

        let mut normals: Vec<Vec3> = (0..4).map(|q| mesh.face_normal(q * 2)).collect();
        normals.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap()
                .then(a.z.partial_cmp(&b.z).unwrap())
        });
        assert_eq!(normals, vec![Vec3::NEG_X, Vec3::NEG_Z, Vec3::Z, Vec3::X]);
    }

    #[test]
    fn water_cells_emit_nothing() {
        let grid = Grid::from_rows(&["#.", ".."]);
        let mesh = build_edge_mesh(&grid);
        // Only the land cell at (0,0) contributes: right and up.
        assert_eq!(mesh.quad_count(), 2);
        assert!(mesh.normals.iter().all(|n| n.y == 0.0));
    }
}
