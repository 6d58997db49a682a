use tui_voxel::core::{
    on_block_border, DirectionField, RayTracer, ScreenBasis, VoxelGrid, WorldBuilder,
    WorldSettings,
};
use tui_voxel::types::{Label, Vector3, ViewAngles, FOV_HORIZONTAL, FOV_VERTICAL};

const EPS: f32 = 1e-5;

fn close(a: Vector3, b: Vector3) -> bool {
    (a - b).length() < 1e-4
}

/// A spread of views, including steep pitches and wrapped yaws.
fn views() -> Vec<ViewAngles> {
    let mut out = Vec::new();
    for i in -6..=6 {
        for j in -4..=4 {
            out.push(ViewAngles::new(i as f32 * 0.25, j as f32 * 0.9));
        }
    }
    out
}

#[test]
fn every_field_direction_is_unit_length() {
    let mut field = DirectionField::new(37, 15);
    for view in views() {
        field.compute(view, FOV_VERTICAL, FOV_HORIZONTAL);
        for d in field.as_slice() {
            assert!((d.length() - 1.0).abs() < EPS, "{view:?} gave {d:?}");
        }
    }
}

#[test]
fn boundary_pixels_follow_the_screen_basis() {
    let (w, h) = (41u16, 13u16);
    let mut field = DirectionField::new(w, h);
    for view in views() {
        field.compute(view, FOV_VERTICAL, FOV_HORIZONTAL);
        let basis = ScreenBasis::new(view, FOV_VERTICAL, FOV_HORIZONTAL);
        let mid = h / 2;

        assert!(close(field.get(0, mid).unwrap(), basis.left.normalize()));
        assert!(close(field.get(w - 1, mid).unwrap(), basis.right.normalize()));

        let corner = |side: Vector3, up: f32| (side + up * basis.to_up).normalize();
        assert!(close(field.get(0, 0).unwrap(), corner(basis.left, 1.0)));
        assert!(close(field.get(w - 1, 0).unwrap(), corner(basis.right, 1.0)));
        assert!(close(field.get(0, h - 1).unwrap(), corner(basis.left, -1.0)));
        assert!(close(field.get(w - 1, h - 1).unwrap(), corner(basis.right, -1.0)));
    }
}

#[test]
fn centre_column_keeps_the_view_azimuth() {
    let (w, h) = (21u16, 11u16);
    let mut field = DirectionField::new(w, h);
    let view = ViewAngles::new(0.2, 1.1);
    field.compute(view, FOV_VERTICAL, FOV_HORIZONTAL);

    let top = field.get(w / 2, 0).unwrap();
    let bottom = field.get(w / 2, h - 1).unwrap();
    assert!((top.y.atan2(top.x) - view.phi).abs() < 1e-4);
    assert!((bottom.y.atan2(bottom.x) - view.phi).abs() < 1e-4);
    assert!(top.z > bottom.z);
}

#[test]
fn in_bounds_matches_half_open_extents() {
    let grid = VoxelGrid::new(4, 3, 2).unwrap();
    for x in -1..=4 {
        for y in -1..=3 {
            for z in -1..=2 {
                let expected = (0..4).contains(&x) && (0..3).contains(&y) && (0..2).contains(&z);
                assert_eq!(grid.in_bounds(x, y, z), expected, "({x}, {y}, {z})");
            }
        }
    }
}

#[test]
fn hits_are_always_inside_the_grid_and_bounded() {
    let grid = WorldBuilder::new(WorldSettings::default()).build().unwrap();
    let tracer = RayTracer::default();
    let limit = RayTracer::max_steps(&grid);

    let origins = [
        Vector3::new(5.0, 5.0, 5.5),
        Vector3::new(0.2, 19.7, 9.9),
        Vector3::new(19.99, 0.01, 4.01),
        Vector3::new(10.0, 10.0, 7.0),
    ];
    let mut field = DirectionField::new(25, 9);
    for origin in origins {
        for view in views() {
            field.compute(view, FOV_VERTICAL, FOV_HORIZONTAL);
            for &dir in field.as_slice() {
                let hit = tracer.trace_detailed(&grid, origin, dir);
                assert!(hit.steps <= limit, "{origin:?} {dir:?} took {}", hit.steps);
                if let Some([x, y, z]) = hit.cell {
                    assert!(grid.in_bounds(x, y, z));
                    assert!(!hit.label.is_empty());
                } else {
                    assert_eq!(hit.label, Label::EMPTY);
                }
            }
        }
    }
}

#[test]
fn axis_aligned_and_degenerate_rays_terminate() {
    let grid = WorldBuilder::new(WorldSettings::default()).build().unwrap();
    let tracer = RayTracer::default();
    let origin = Vector3::new(5.5, 5.5, 6.5);

    for dir in [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.01, 0.01, 0.01),
        Vector3::ZERO,
    ] {
        let hit = tracer.trace_detailed(&grid, origin, dir);
        assert_eq!(hit.label, Label::EMPTY, "{dir:?}");
    }
}

#[test]
fn interior_hits_report_material_and_two_axis_borders_report_edges() {
    let grid = WorldBuilder::new(WorldSettings::default()).build().unwrap();
    let tracer = RayTracer::default();
    let down = Vector3::new(0.0, 0.0, -1.0);

    // Centre of a cell top: only the z axis is near an integer.
    assert_eq!(tracer.trace(&grid, Vector3::new(3.5, 3.5, 6.0), down), Label(b'@'));
    // On a grid line: x and z are both near integers.
    assert_eq!(tracer.trace(&grid, Vector3::new(3.0, 3.5, 6.0), down), Label::EDGE);

    assert!(on_block_border(Vector3::new(2.01, 7.99, 0.5), 0.025));
    assert!(!on_block_border(Vector3::new(2.01, 7.5, 0.5), 0.025));
}
