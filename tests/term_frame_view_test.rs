use tui_voxel::core::{render, Frame, RenderSettings, WorldBuilder};
use tui_voxel::term::{encode_diff_into, encode_full_into, FrameView, Palette, Rgb, Viewport};
use tui_voxel::types::{Label, Pose};

fn spawn_frame(w: u16, h: u16) -> (Frame, Pose) {
    let world = WorldBuilder::default();
    let grid = world.build().unwrap();
    let pose = world.spawn_pose();
    (render(&pose, &grid, RenderSettings::default(), w, h), pose)
}

#[test]
fn rendered_world_maps_cell_for_cell() {
    let (frame, _) = spawn_frame(48, 16);
    let view = FrameView::default();
    let fb = view.render(&frame, None, Viewport::new(48, 16));

    for y in 0..16 {
        let expected: String = frame.row(y).unwrap().iter().map(|l| l.as_char()).collect();
        assert_eq!(fb.row_text(y), expected);
    }
    let solid = frame.count(Label(b'@'));
    assert!(solid > 0);
    let cyan = fb
        .cells()
        .iter()
        .filter(|c| c.ch == '@' && c.style.fg == Palette::default().material)
        .count();
    assert_eq!(cyan, solid);
}

#[test]
fn custom_palette_colors_edges() {
    let palette = Palette {
        edge: Rgb::new(255, 0, 0),
        ..Palette::default()
    };
    let mut frame = Frame::new(3, 1);
    frame.set(1, 0, Label::EDGE);
    let fb = FrameView::new(palette).render(&frame, None, Viewport::new(3, 1));
    assert_eq!(fb.get(1, 0).unwrap().style.fg, Rgb::new(255, 0, 0));
}

#[test]
fn a_small_change_redraws_less_than_a_full_frame() {
    let (frame, pose) = spawn_frame(60, 20);
    let view = FrameView::default().with_hud(true);
    let vp = Viewport::new(60, 20);
    let before = view.render(&frame, Some(&pose), vp);

    let mut moved = pose;
    moved.position.x += 0.25;
    let after = view.render(&frame, Some(&moved), vp);
    assert_ne!(before.row_text(19), after.row_text(19));
    assert_eq!(before.row_text(0), after.row_text(0));

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    let mut same = Vec::new();
    encode_diff_into(&after, &after, &mut same).unwrap();

    assert!(diff.len() < full.len());
    assert!(same.len() < diff.len());
}
