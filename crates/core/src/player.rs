//! Per-tick camera update from the current input state.

use crate::grid::VoxelGrid;
use crate::settings::ControlSettings;
use crate::types::{InputState, Pose, Vector3, ViewAction};

/// How far inside the grid box a moving camera is kept.
const BOUNDS_MARGIN: f32 = 0.01;

/// Apply one tick of input to `pose`. Returns true if the pose changed.
///
/// Tilt keys change theta/phi by `tilt_step`. Movement keys move along the
/// horizontal facing direction by `move_step`; "right" is the direction of
/// increasing phi, which is also the right-hand side of the rendered screen.
pub fn update_pose(pose: &mut Pose, input: &InputState, controls: &ControlSettings) -> bool {
    let before = *pose;
    let tilt = controls.tilt_step;

    if input.is_pressed(ViewAction::PitchUp) {
        pose.view.theta += tilt;
    }
    if input.is_pressed(ViewAction::PitchDown) {
        pose.view.theta -= tilt;
    }
    if input.is_pressed(ViewAction::YawLeft) {
        pose.view.phi -= tilt;
    }
    if input.is_pressed(ViewAction::YawRight) {
        pose.view.phi += tilt;
    }

    let (sin_p, cos_p) = pose.view.phi.sin_cos();
    let forward = Vector3::new(cos_p, sin_p, 0.0);
    let right = Vector3::new(-sin_p, cos_p, 0.0);

    let mut step = Vector3::ZERO;
    if input.is_pressed(ViewAction::MoveForward) {
        step = step + forward;
    }
    if input.is_pressed(ViewAction::MoveBack) {
        step = step - forward;
    }
    if input.is_pressed(ViewAction::StrafeRight) {
        step = step + right;
    }
    if input.is_pressed(ViewAction::StrafeLeft) {
        step = step - right;
    }
    if let Some(dir) = step.try_normalize() {
        pose.position = pose.position + controls.move_step * dir;
    }

    *pose != before
}

/// Clamp the camera position into the grid box.
///
/// Rays cast from outside the grid see nothing, so a moving camera is kept
/// inside it.
pub fn keep_inside(pose: &mut Pose, grid: &VoxelGrid) {
    let (x, y, z) = grid.extents();
    let clamp = |v: f32, extent: usize| v.clamp(0.0, extent as f32 - BOUNDS_MARGIN);
    pose.position = Vector3::new(
        clamp(pose.position.x, x),
        clamp(pose.position.y, y),
        clamp(pose.position.z, z),
    );
}
