use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tui_voxel::core::{keep_inside, update_pose, ControlSettings, WorldBuilder};
use tui_voxel::input::InputHandler;
use tui_voxel::types::{MOVE_STEP, TILT_STEP};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

#[test]
fn keys_drive_the_camera_one_cycle_at_a_time() {
    let world = WorldBuilder::default();
    let mut pose = world.spawn_pose();
    let controls = ControlSettings::default();
    let mut handler = InputHandler::new();

    handler.handle_key(press(KeyCode::Char('w')));
    handler.handle_key(press(KeyCode::Up));
    let state = handler.finish_cycle(20);
    assert!(update_pose(&mut pose, &state, &controls));
    assert!((pose.view.theta - TILT_STEP).abs() < 1e-6);
    assert!((pose.position.x - (5.0 + MOVE_STEP)).abs() < 1e-5);

    // Nothing pressed in the next cycle.
    let state = handler.finish_cycle(20);
    assert!(!update_pose(&mut pose, &state, &controls));
}

#[test]
fn walking_off_the_world_stays_inside_the_grid() {
    let world = WorldBuilder::default();
    let grid = world.build().unwrap();
    let mut pose = world.spawn_pose();
    let controls = ControlSettings::default();
    let mut handler = InputHandler::new();

    for _ in 0..200 {
        handler.handle_key(press(KeyCode::Down));
        let state = handler.finish_cycle(20);
        if update_pose(&mut pose, &state, &controls) {
            keep_inside(&mut pose, &grid);
        }
    }
    assert!(grid.contains_point(pose.position));
    assert!(pose.position.x < 0.1);
    assert_eq!(pose.position.y, 5.0);
}

#[test]
fn quit_keys_set_the_quit_flag() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut handler = InputHandler::new();
        handler.handle_key(press(code));
        assert!(handler.finish_cycle(20).quit);
    }
    let mut handler = InputHandler::new();
    handler.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(handler.finish_cycle(20).quit);

    let mut handler = InputHandler::new();
    handler.handle_key(press(KeyCode::Char('x')));
    let state = handler.finish_cycle(20);
    assert!(!state.quit && !state.any());
}
