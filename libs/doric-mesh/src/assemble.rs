//! # Mesh Assembly
//!
//! Merges the abacus into the shaft mesh and classifies shading, and hosts
//! the top-level column build.

use config::constants::ResolutionConfig;
use tracing::{info, instrument, warn};

use crate::abacus::create_abacus;
use crate::column_config::ColumnConfig;
use crate::error::ColumnResult;
use crate::mesh::Mesh;
use crate::profile::Profile;
use crate::shaft::ShaftMeshBuilder;

/// Element counts of a finished build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Vertices contributed by the shaft grid.
    pub shaft_vertices: usize,
    /// Quads contributed by the shaft grid.
    pub shaft_faces: usize,
    /// Vertices contributed by the abacus.
    pub abacus_vertices: usize,
    /// Quads contributed by the abacus.
    pub abacus_faces: usize,
    /// Grid cells left empty as degenerate.
    pub skipped_vertices: usize,
    /// Quads dropped because a corner was empty.
    pub skipped_faces: usize,
}

/// Finished column mesh with its build report.
#[derive(Debug, Clone)]
pub struct ColumnMesh {
    /// Merged, shaded mesh.
    pub mesh: Mesh,
    /// Element counts.
    pub report: BuildReport,
}

/// Appends `abacus` to `shaft` and sets every face's shading.
///
/// A face is smooth when its first vertex lies strictly below
/// `abacus_min * scale`, so the whole curved body is smooth and the abacus
/// stays flat.
pub fn assemble(shaft: Mesh, abacus: Mesh, abacus_min: f64, scale: f64) -> Mesh {
    let mut mesh = shaft;
    mesh.merge(abacus);

    let threshold = abacus_min * scale;
    mesh.apply_shading(|face, vertices| vertices[face.first() as usize].z < threshold);
    mesh
}

/// Builds the complete column mesh.
///
/// Fails when the grid resolution is outside the supported limits, which
/// keeps every vertex index within `u32`. Degenerate grid cells are not
/// errors; they are skipped and counted in the report.
///
/// # Example
///
/// ```rust
/// use doric_mesh::{build_column_mesh, ColumnConfig};
///
/// let cfg = ColumnConfig::builder().vertical_seg(8).radial_seg(12).build().unwrap();
/// let column = build_column_mesh(&cfg).unwrap();
/// assert_eq!(column.mesh.vertex_count(), 9 * 12 + 16);
/// assert_eq!(column.mesh.face_count(), 8 * 12 + 14);
/// ```
#[instrument(skip_all, fields(
    vertical_seg = cfg.vertical_seg(),
    radial_seg = cfg.radial_seg(),
))]
pub fn build_column_mesh(cfg: &ColumnConfig) -> ColumnResult<ColumnMesh> {
    ResolutionConfig::new(cfg.vertical_seg(), cfg.radial_seg())?;

    let profile = Profile::new(cfg);
    let shaft = ShaftMeshBuilder::new(&profile).build();
    let abacus = create_abacus(cfg);

    let report = BuildReport {
        shaft_vertices: shaft.mesh.vertex_count(),
        shaft_faces: shaft.mesh.face_count(),
        abacus_vertices: abacus.vertex_count(),
        abacus_faces: abacus.face_count(),
        skipped_vertices: shaft.report.skipped_vertices,
        skipped_faces: shaft.report.skipped_faces,
    };

    let mesh = assemble(
        shaft.mesh,
        abacus,
        profile.dimensions().abacus_min,
        cfg.scale(),
    );

    if report.skipped_faces > 0 {
        warn!(skipped_faces = report.skipped_faces, "column mesh has holes");
    }
    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        smooth_faces = mesh.smooth_face_count(),
        "built column mesh"
    );

    Ok(ColumnMesh { mesh, report })
}

/// Builds the complete column mesh, discarding the report.
pub fn create_column_mesh(cfg: &ColumnConfig) -> ColumnResult<Mesh> {
    build_column_mesh(cfg).map(|column| column.mesh)
}
