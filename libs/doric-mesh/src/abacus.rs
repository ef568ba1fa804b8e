//! # Abacus Block
//!
//! Chamfered square slab on top of the capital. Fixed topology of 16 vertices
//! and 14 quads, built in its own arena and merged into the shaft later.

use config::constants::{ABACUS_FACE_COUNT, ABACUS_VERTEX_COUNT};
use glam::DVec3;
use tracing::{debug, instrument};

use crate::column_config::ColumnConfig;
use crate::mesh::Mesh;

/// Levels whose half-extent is inset by the chamfer length (the two caps).
const CHAMFER_INSET: [f64; 4] = [1.0, 0.0, 0.0, 1.0];

const SIGNS: [f64; 2] = [-1.0, 1.0];

/// Creates the abacus mesh for a configured column.
///
/// Vertices are ordered by x sign, then y sign, then level, so vertex
/// `8 * sx + 4 * sy + k` sits on corner `(sx, sy)` at level `k`:
///
/// ```text
/// k = 3  total_height                  inset
/// k = 2  total_height - chamfer_len    full width
/// k = 1  abacus_min + chamfer_len      full width
/// k = 0  abacus_min                    inset
/// ```
///
/// # Returns
///
/// A mesh with 16 vertices and 14 quads, already scaled.
///
/// # Example
///
/// ```rust
/// use doric_mesh::{create_abacus, ColumnConfig};
///
/// let mesh = create_abacus(&ColumnConfig::default());
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.face_count(), 14);
/// ```
#[instrument(skip_all)]
pub fn create_abacus(cfg: &ColumnConfig) -> Mesh {
    let dims = cfg.dimensions();
    let scale = cfg.scale();
    let levels = [
        dims.abacus_min,
        dims.abacus_min + dims.chamfer_len,
        cfg.total_height() - dims.chamfer_len,
        cfg.total_height(),
    ];

    let mut mesh = Mesh::with_capacity(ABACUS_VERTEX_COUNT, ABACUS_FACE_COUNT);

    for sx in SIGNS {
        for sy in SIGNS {
            for (z, inset) in levels.iter().zip(CHAMFER_INSET) {
                let half = dims.abacus_half - inset * dims.chamfer_len;
                mesh.add_vertex(DVec3::new(
                    sx * scale * half,
                    sy * scale * half,
                    z * scale,
                ));
            }
        }
    }

    // Bottom and top caps
    mesh.add_face([0, 4, 12, 8]);
    mesh.add_face([3, 7, 15, 11]);

    // Side bands: lower bevel, wall, upper bevel
    for b in 0..3 {
        mesh.add_face([b, 4 + b, 5 + b, 1 + b]);
        mesh.add_face([4 + b, 12 + b, 13 + b, 5 + b]);
        mesh.add_face([12 + b, 8 + b, 9 + b, 13 + b]);
        mesh.add_face([8 + b, b, 1 + b, 9 + b]);
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "built abacus"
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_scale() -> ColumnConfig {
        ColumnConfig::builder().scale(1.0).build().expect("valid")
    }

    #[test]
    fn test_abacus_counts() {
        let mesh = create_abacus(&ColumnConfig::default());
        assert_eq!(mesh.vertex_count(), ABACUS_VERTEX_COUNT);
        assert_eq!(mesh.face_count(), ABACUS_FACE_COUNT);
        assert!(mesh.validate());
    }

    #[test]
    fn test_abacus_spans_capital_top() {
        let cfg = unit_scale();
        let dims = cfg.dimensions();
        let (min, max) = create_abacus(&cfg).bounding_box();

        assert_relative_eq!(min.z, dims.abacus_min, epsilon = 1e-12);
        assert_relative_eq!(max.z, cfg.total_height(), epsilon = 1e-12);
        assert_relative_eq!(max.x, dims.abacus_half, epsilon = 1e-12);
        assert_relative_eq!(min.y, -dims.abacus_half, epsilon = 1e-12);
    }

    #[test]
    fn test_abacus_caps_are_inset() {
        let cfg = unit_scale();
        let dims = cfg.dimensions();
        let mesh = create_abacus(&cfg);
        let inset = dims.abacus_half - dims.chamfer_len;

        for k in [0, 3] {
            let corner = mesh.vertex(12 + k);
            assert_relative_eq!(corner.x, inset, epsilon = 1e-12);
            assert_relative_eq!(corner.y, inset, epsilon = 1e-12);
        }
        for k in [1, 2] {
            let corner = mesh.vertex(12 + k);
            assert_relative_eq!(corner.x, dims.abacus_half, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_abacus_vertex_order() {
        let mesh = create_abacus(&unit_scale());
        let v = mesh.vertex(0);
        assert!(v.x < 0.0 && v.y < 0.0);
        let v = mesh.vertex(4);
        assert!(v.x < 0.0 && v.y > 0.0);
        let v = mesh.vertex(8);
        assert!(v.x > 0.0 && v.y < 0.0);
        let v = mesh.vertex(15);
        assert!(v.x > 0.0 && v.y > 0.0);
    }

    #[test]
    fn test_abacus_caps_are_level() {
        let mesh = create_abacus(&unit_scale());
        for face in &mesh.faces()[..2] {
            let z = mesh.vertex(face.first()).z;
            assert!(face.indices.iter().all(|&i| mesh.vertex(i).z == z));
        }
    }

    #[test]
    fn test_abacus_faces_use_every_vertex() {
        let mesh = create_abacus(&ColumnConfig::default());
        let mut used = [false; ABACUS_VERTEX_COUNT];
        for face in mesh.faces() {
            for &i in &face.indices {
                used[i as usize] = true;
            }
        }
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn test_abacus_scaled() {
        let cfg = ColumnConfig::builder().scale(2.0).build().expect("valid");
        let (_, max) = create_abacus(&cfg).bounding_box();
        assert_relative_eq!(max.z, 2.0 * cfg.total_height(), epsilon = 1e-12);
    }
}
