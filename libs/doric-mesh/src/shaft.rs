//! # Shaft Mesh Builder
//!
//! Samples the [`Profile`] over a height × angle grid and stitches the grid
//! into quads. Covers the shaft, necking and echinus, i.e. everything below
//! the abacus.
//!
//! Grid cells that would hold a degenerate vertex (non-finite, or exactly
//! coinciding with a vertex already created) stay empty; quads touching an
//! empty cell are skipped. Neither aborts the build.

use std::collections::HashSet;
use std::f64::consts::PI;

use glam::DVec3;
use tracing::{debug, info, instrument, warn};

use crate::mesh::Mesh;
use crate::profile::Profile;

// =============================================================================
// VERTEX GRID
// =============================================================================

/// Sparse grid of vertex indices, `rows × cols`, wrapping around in columns.
///
/// Row 0 is the base ring, the last row is the bottom of the abacus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<u32>>,
}

impl VertexGrid {
    /// Creates a grid with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Number of height rings.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of angular samples per ring.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Vertex index at ring `row`, angular sample `col` (taken modulo `cols`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells[row * self.cols + col % self.cols]
    }

    fn set(&mut self, row: usize, col: usize, index: u32) {
        self.cells[row * self.cols + col % self.cols] = Some(index);
    }

    /// Number of cells holding a vertex.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Quad corners of cell `(row, col)`: `[g(i,j), g(i,j+1), g(i+1,j+1), g(i+1,j)]`.
    ///
    /// `None` when any corner is empty or `row` is the top ring.
    pub fn quad(&self, row: usize, col: usize) -> Option<[u32; 4]> {
        if row + 1 >= self.rows {
            return None;
        }
        Some([
            self.get(row, col)?,
            self.get(row, col + 1)?,
            self.get(row + 1, col + 1)?,
            self.get(row + 1, col)?,
        ])
    }
}

// =============================================================================
// SHAFT BUILDER
// =============================================================================

/// Counts of cells and quads dropped as degenerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShaftReport {
    /// Grid cells left empty.
    pub skipped_vertices: usize,
    /// Quads not emitted because a corner was empty.
    pub skipped_faces: usize,
}

/// Shaft mesh together with its vertex grid.
#[derive(Debug, Clone)]
pub struct ShaftMesh {
    /// Vertices in row-major grid order (empty cells omitted) and quads.
    pub mesh: Mesh,
    /// Grid of vertex indices into `mesh`.
    pub grid: VertexGrid,
    /// Degenerate cells and quads.
    pub report: ShaftReport,
}

/// Builds the curved part of the column from a profile.
///
/// # Example
///
/// ```rust
/// use doric_mesh::{ColumnConfig, Profile, ShaftMeshBuilder};
///
/// let cfg = ColumnConfig::builder().vertical_seg(10).radial_seg(16).build().unwrap();
/// let profile = Profile::new(&cfg);
/// let shaft = ShaftMeshBuilder::new(&profile).build();
/// assert_eq!(shaft.mesh.vertex_count(), 11 * 16);
/// assert_eq!(shaft.mesh.face_count(), 10 * 16);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShaftMeshBuilder<'a> {
    profile: &'a Profile,
}

impl<'a> ShaftMeshBuilder<'a> {
    /// Creates a builder sampling `profile`.
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    /// Unscaled height of ring `i`, linear over `[0, total_height - abacus_height]`.
    pub fn ring_height(&self, i: u32) -> f64 {
        let cfg = self.profile.config();
        let height_ratio = f64::from(i) / f64::from(cfg.vertical_seg());
        (cfg.total_height() - self.profile.dimensions().abacus_height) * height_ratio
    }

    /// Scaled points of ring `i`, one per angular sample.
    pub fn sample_ring(&self, i: u32) -> Vec<DVec3> {
        let cfg = self.profile.config();
        let scale = cfg.scale();
        let radial_seg = cfg.radial_seg();

        let z = self.ring_height(i);
        let r = self.profile.ring_radius(z);

        (0..radial_seg)
            .map(|j| {
                let theta = 2.0 * PI / f64::from(radial_seg) * f64::from(j);
                let fluted_r = self.profile.carve_flutes(z, r, theta);
                let x = fluted_r * theta.cos();
                let y = fluted_r * theta.sin();
                DVec3::new(x * scale, y * scale, z * scale)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn sample_rings(&self) -> Vec<Vec<DVec3>> {
        use rayon::prelude::*;

        (0..=self.profile.config().vertical_seg())
            .into_par_iter()
            .map(|i| self.sample_ring(i))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn sample_rings(&self) -> Vec<Vec<DVec3>> {
        (0..=self.profile.config().vertical_seg())
            .map(|i| self.sample_ring(i))
            .collect()
    }

    /// Samples every ring, fills the grid and stitches the quads.
    ///
    /// Vertex and face order are row-major and independent of whether rings
    /// were sampled in parallel.
    #[instrument(skip_all, fields(
        vertical_seg = self.profile.config().vertical_seg(),
        radial_seg = self.profile.config().radial_seg(),
    ))]
    pub fn build(&self) -> ShaftMesh {
        let resolution = self.profile.config().resolution();
        let rows = resolution.vertical_seg as usize + 1;
        let cols = resolution.radial_seg as usize;

        let rings = self.sample_rings();

        let mut mesh = Mesh::with_capacity(rows * cols, (rows - 1) * cols);
        let mut grid = VertexGrid::new(rows, cols);
        let mut report = ShaftReport::default();
        let mut seen: HashSet<[u64; 3]> = HashSet::with_capacity(rows * cols);

        for (i, ring) in rings.into_iter().enumerate() {
            for (j, point) in ring.into_iter().enumerate() {
                if !point.is_finite() || !seen.insert(point_key(point)) {
                    debug!(ring = i, sample = j, ?point, "skipping degenerate vertex");
                    report.skipped_vertices += 1;
                    continue;
                }
                grid.set(i, j, mesh.add_vertex(point));
            }
        }

        for i in 0..rows - 1 {
            for j in 0..cols {
                match grid.quad(i, j) {
                    Some(quad) => {
                        mesh.add_face(quad);
                    }
                    None => report.skipped_faces += 1,
                }
            }
        }

        if report.skipped_vertices > 0 {
            warn!(
                skipped_vertices = report.skipped_vertices,
                skipped_faces = report.skipped_faces,
                "shaft grid has degenerate cells"
            );
        }
        info!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "built shaft mesh"
        );

        ShaftMesh { mesh, grid, report }
    }
}

/// Exact identity of a point; `-0.0` and `0.0` compare equal.
fn point_key(point: DVec3) -> [u64; 3] {
    (point + DVec3::ZERO).to_array().map(f64::to_bits)
}

#[cfg(test)]
mod tests;
