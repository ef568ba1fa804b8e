use super::*;
use crate::column_config::ColumnConfig;
use approx::assert_relative_eq;

fn scenario_a() -> ColumnConfig {
    ColumnConfig::builder()
        .total_height(2.0)
        .capital_height(1.0)
        .capital_distribution([1.0, 1.0, 1.0])
        .neck(0.8)
        .echinus_top_ratio(1.3)
        .entasis_amplitude(0.0)
        .flute_depth(0.0)
        .annuli(0)
        .vertical_seg(1)
        .radial_seg(4)
        .scale(1.0)
        .build()
        .expect("scenario A is valid")
}

fn small() -> ColumnConfig {
    ColumnConfig::builder()
        .vertical_seg(30)
        .radial_seg(24)
        .build()
        .expect("valid")
}

// =============================================================================
// GRID
// =============================================================================

#[test]
fn test_grid_wraps_columns() {
    let mut grid = VertexGrid::new(2, 4);
    grid.set(0, 0, 7);
    assert_eq!(grid.get(0, 4), Some(7));
    assert_eq!(grid.get(0, 1), None);
    assert_eq!(grid.occupied(), 1);
}

#[test]
fn test_grid_quad_needs_all_corners() {
    let mut grid = VertexGrid::new(2, 3);
    let mut next = 0;
    for i in 0..2 {
        for j in 0..3 {
            grid.set(i, j, next);
            next += 1;
        }
    }
    assert_eq!(grid.quad(0, 2), Some([2, 0, 3, 5]));
    assert_eq!(grid.quad(1, 0), None);

    let mut sparse = VertexGrid::new(2, 3);
    sparse.set(0, 0, 0);
    sparse.set(0, 1, 1);
    sparse.set(1, 0, 2);
    assert_eq!(sparse.quad(0, 0), None);
}

#[test]
fn test_point_key_ignores_zero_sign() {
    assert_eq!(
        point_key(DVec3::new(-0.0, 1.0, 0.0)),
        point_key(DVec3::new(0.0, 1.0, -0.0))
    );
    assert_ne!(
        point_key(DVec3::new(1.0, 1.0, 0.0)),
        point_key(DVec3::new(1.0, 1.0, f64::EPSILON))
    );
}

// =============================================================================
// BUILD
// =============================================================================

#[test]
fn test_ring_heights_span_below_abacus() {
    let cfg = ColumnConfig::default();
    let profile = Profile::new(&cfg);
    let builder = ShaftMeshBuilder::new(&profile);
    assert_eq!(builder.ring_height(0), 0.0);
    assert_relative_eq!(
        builder.ring_height(cfg.vertical_seg()),
        profile.dimensions().abacus_min,
        epsilon = 1e-12
    );
}

#[test]
fn test_scenario_a_vertices() {
    let profile = Profile::new(&scenario_a());
    let shaft = ShaftMeshBuilder::new(&profile).build();

    assert_eq!(shaft.mesh.vertex_count(), 8);
    assert_eq!(shaft.mesh.face_count(), 4);
    assert_eq!(shaft.report, ShaftReport::default());

    let base = shaft.mesh.vertex(0);
    assert_relative_eq!(base.x, 1.0);
    assert_relative_eq!(base.y, 0.0);
    assert_relative_eq!(base.z, 0.0);

    let top = shaft.mesh.vertex(4);
    assert_relative_eq!(top.x, 1.04, epsilon = 1e-12);
    assert_relative_eq!(top.y, 0.0);
    assert_relative_eq!(top.z, 5.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_counts_match_grid() {
    let cfg = small();
    let profile = Profile::new(&cfg);
    let shaft = ShaftMeshBuilder::new(&profile).build();

    assert_eq!(shaft.mesh.vertex_count(), 31 * 24);
    assert_eq!(shaft.mesh.face_count(), 30 * 24);
    assert_eq!(shaft.grid.occupied(), 31 * 24);
    assert!(shaft.mesh.validate());
}

#[test]
fn test_last_quad_of_ring_wraps_to_first_sample() {
    let cfg = small();
    let profile = Profile::new(&cfg);
    let shaft = ShaftMeshBuilder::new(&profile).build();

    let last = shaft.mesh.face(23);
    assert_eq!(last.indices, [23, 0, 24, 47]);
}

#[test]
fn test_vertices_are_scaled() {
    let cfg = ColumnConfig::builder()
        .vertical_seg(4)
        .radial_seg(8)
        .scale(2.0)
        .build()
        .expect("valid");
    let profile = Profile::new(&cfg);
    let shaft = ShaftMeshBuilder::new(&profile).build();

    let (_, max) = shaft.mesh.bounding_box();
    assert_relative_eq!(max.z, profile.dimensions().abacus_min * 2.0, epsilon = 1e-12);
}

#[test]
fn test_rings_share_height() {
    let cfg = small();
    let profile = Profile::new(&cfg);
    let builder = ShaftMeshBuilder::new(&profile);
    let ring = builder.sample_ring(7);
    let z = builder.ring_height(7) * cfg.scale();
    assert!(ring.iter().all(|p| p.z == z));
}

#[test]
fn test_build_is_deterministic() {
    let cfg = small();
    let profile = Profile::new(&cfg);
    let a = ShaftMeshBuilder::new(&profile).build();
    let b = ShaftMeshBuilder::new(&profile).build();
    assert_eq!(a.mesh, b.mesh);
}

#[test]
fn test_sampled_rings_match_sequential_order() {
    let cfg = small();
    let profile = Profile::new(&cfg);
    let builder = ShaftMeshBuilder::new(&profile);
    let sequential: Vec<Vec<DVec3>> = (0..=cfg.vertical_seg())
        .map(|i| builder.sample_ring(i))
        .collect();
    assert_eq!(builder.sample_rings(), sequential);
}

// =============================================================================
// DEGENERATE CELLS
// =============================================================================

/// Two flutes cut to full depth pull the samples at 90° and 270° onto the
/// axis, so the second of them coincides with the first on every shaft ring.
fn axis_touching() -> ColumnConfig {
    ColumnConfig::builder()
        .flutes(2)
        .flute_depth(1.0)
        .radial_seg(4)
        .vertical_seg(4)
        .build()
        .expect("valid")
}

#[test]
fn test_coincident_points_are_skipped() {
    let cfg = axis_touching();
    let profile = Profile::new(&cfg);
    let shaft = ShaftMeshBuilder::new(&profile).build();

    // Rings 0..=3 sit below the neck (full flutes); ring 4 is above the annuli.
    assert_eq!(
        shaft.report,
        ShaftReport {
            skipped_vertices: 4,
            skipped_faces: 8,
        }
    );
    assert_eq!(shaft.mesh.vertex_count(), 5 * 4 - 4);
    assert_eq!(shaft.mesh.face_count(), 4 * 4 - 8);
    assert_eq!(shaft.grid.occupied(), shaft.mesh.vertex_count());
    assert!(shaft.mesh.validate());

    for i in 0..4 {
        assert!(shaft.grid.get(i, 1).is_some());
        assert_eq!(shaft.grid.get(i, 3), None);
    }
    assert!(shaft.grid.get(4, 3).is_some());
}

#[test]
fn test_coincident_points_do_not_abort_column_build() {
    let column = crate::assemble::build_column_mesh(&axis_touching()).expect("builds");

    assert_eq!(column.report.shaft_vertices, 16);
    assert_eq!(column.report.shaft_faces, 8);
    assert_eq!(column.report.skipped_vertices, 4);
    assert_eq!(column.report.skipped_faces, 8);
    assert_eq!(column.mesh.vertex_count(), 16 + 16);
    assert_eq!(column.mesh.face_count(), 8 + 14);
    assert!(column.mesh.validate());
}
