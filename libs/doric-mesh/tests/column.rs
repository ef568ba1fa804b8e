use approx::assert_relative_eq;
use doric_mesh::{
    build_column_mesh, create_abacus, create_column_mesh, ColumnConfig, Profile, ShaftMeshBuilder,
};

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

fn with_resolution(vertical_seg: u32, radial_seg: u32) -> ColumnConfig {
    ColumnConfig::builder()
        .vertical_seg(vertical_seg)
        .radial_seg(radial_seg)
        .build()
        .expect("valid")
}

#[test]
fn test_scenario_a_hand_computed_vertices() {
    let mesh = create_column_mesh(&scenario_a()).expect("builds");

    assert_eq!(mesh.vertex_count(), 2 * 4 + 16);
    assert_eq!(mesh.face_count(), 4 + 14);

    let base = mesh.vertex(0);
    assert_relative_eq!(base.x, 1.0);
    assert_relative_eq!(base.y, 0.0);
    assert_relative_eq!(base.z, 0.0);

    let top = mesh.vertex(4);
    assert_relative_eq!(top.x, 1.04, epsilon = 1e-12);
    assert_relative_eq!(top.y, 0.0);
    assert_relative_eq!(top.z, 5.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_scenario_a_quarter_turn() {
    let mesh = create_column_mesh(&scenario_a()).expect("builds");
    let v = mesh.vertex(1);
    assert_relative_eq!(v.x, 0.0, epsilon = 1e-15);
    assert_relative_eq!(v.y, 1.0, epsilon = 1e-15);
}

#[test]
fn test_counts_for_several_resolutions() {
    for (v, r) in [(1, 3), (5, 7), (40, 64), (120, 33)] {
        let column = build_column_mesh(&with_resolution(v, r)).expect("builds");
        let (v, r) = (v as usize, r as usize);

        assert_eq!(column.report.shaft_vertices, (v + 1) * r);
        assert_eq!(column.report.shaft_faces, v * r);
        assert_eq!(column.mesh.vertex_count(), (v + 1) * r + 16);
        assert_eq!(column.mesh.face_count(), v * r + 14);
        assert!(column.mesh.validate());
    }
}

#[test]
fn test_every_ring_wraps_around() {
    let (v, r) = (10u32, 16u32);
    let mesh = create_column_mesh(&with_resolution(v, r)).expect("builds");
    let r = r as usize;

    for i in 0..v as usize {
        let face = mesh.face(i * r + r - 1);
        let row = (i * r) as u32;
        let next_row = row + r as u32;
        assert_eq!(
            face.indices,
            [row + r as u32 - 1, row, next_row, next_row + r as u32 - 1]
        );
    }
}

#[test]
fn test_scenario_b_shading() {
    let cfg = with_resolution(20, 24);
    let mesh = create_column_mesh(&cfg).expect("builds");
    let threshold = cfg.dimensions().abacus_min * cfg.scale();

    for face in mesh.faces() {
        let z = mesh.vertex(face.first()).z;
        assert_eq!(face.smooth, z < threshold);
    }

    let shaft_faces = 20 * 24;
    assert!(mesh.faces()[..shaft_faces].iter().all(|f| f.smooth));
    assert!(mesh.faces()[shaft_faces..].iter().all(|f| !f.smooth));
}

#[test]
fn test_abacus_sits_on_top_of_shaft() {
    let cfg = with_resolution(12, 20);
    let profile = Profile::new(&cfg);
    let shaft = ShaftMeshBuilder::new(&profile).build();
    let abacus = create_abacus(&cfg);

    let (_, shaft_max) = shaft.mesh.bounding_box();
    let (abacus_min, abacus_max) = abacus.bounding_box();
    assert_relative_eq!(shaft_max.z, abacus_min.z, epsilon = 1e-12);
    assert_relative_eq!(abacus_max.z, cfg.total_height() * cfg.scale(), epsilon = 1e-12);
}

#[test]
fn test_abacus_overhangs_echinus() {
    let cfg = with_resolution(12, 20);
    let mesh = create_column_mesh(&cfg).expect("builds");
    let (min, max) = mesh.bounding_box();
    let half = cfg.dimensions().abacus_half * cfg.scale();

    assert_relative_eq!(max.x, half, epsilon = 1e-12);
    assert_relative_eq!(min.x, -half, epsilon = 1e-12);
}

#[test]
fn test_rebuild_is_bit_identical() {
    let cfg = with_resolution(50, 40);
    let a = create_column_mesh(&cfg).expect("builds");
    let b = create_column_mesh(&cfg).expect("builds");

    assert_eq!(a.faces(), b.faces());
    let bits = |m: &doric_mesh::Mesh| -> Vec<[u64; 3]> {
        m.vertices()
            .iter()
            .map(|v| v.to_array().map(f64::to_bits))
            .collect()
    };
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn test_json_and_builder_agree() {
    let from_json = ColumnConfig::from_json(r#"{ "vertical_seg": 8, "radial_seg": 9, "flutes": 12 }"#)
        .expect("valid");
    let from_builder = ColumnConfig::builder()
        .vertical_seg(8)
        .radial_seg(9)
        .flutes(12)
        .build()
        .expect("valid");

    assert_eq!(
        create_column_mesh(&from_json).expect("builds"),
        create_column_mesh(&from_builder).expect("builds")
    );
}

#[test]
fn test_triangulated_export_covers_every_quad() {
    let mesh = create_column_mesh(&with_resolution(6, 10)).expect("builds");
    assert_eq!(mesh.indices_u32().len(), mesh.face_count() * 6);
    assert_eq!(mesh.vertices_f32().len(), mesh.vertex_count() * 3);
}
