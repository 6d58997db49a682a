//! Camera, world and input vocabulary shared by the voxel crates
//!
//! Plain `Copy` values: the [`Vector3`] math type, cell [`Label`]s, the
//! camera [`Pose`], and the per-cycle [`InputState`] that the input crate
//! fills and the core consumes. The constants below are the defaults the
//! other crates fall back to when a setting is not configured.
//!
//! # World Dimensions
//!
//! Default voxel world (a flat slab the player stands on):
//!
//! - **Extents**: 20 × 20 × 10 blocks (x, y, z)
//! - **Slab**: material `@` filling z in `[0, 4)`
//! - **Eye height**: 1.5 blocks above the slab top
//!
//! # Rendering Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FOV_VERTICAL` | 0.7 rad | Vertical field of view |
//! | `FOV_HORIZONTAL` | 1.0 rad | Horizontal field of view |
//! | `BLOCK_BORDER_SIZE` | 0.025 | Edge highlight tolerance |
//! | `RAY_STEP_EPSILON` | 0.02 | Push past a cell face / parallel-axis cutoff |
//! | `FRAME_INTERVAL_MS` | 20 | Fixed tick interval |
//! | `TILT_STEP` | 0.1 rad | View angle change per tick |
//! | `MOVE_STEP` | 0.3 | Position change per tick |
//!
//! # Examples
//!
//! ```
//! use tui_voxel_types::{InputState, Label, Pose, ViewAction, Vector3};
//!
//! let pose = Pose::default();
//! assert_eq!(pose.position, Vector3::new(5.0, 5.0, 5.5));
//!
//! let mut input = InputState::new();
//! input.press(ViewAction::PitchUp);
//! assert!(input.is_pressed(ViewAction::PitchUp));
//!
//! assert!(Label::EMPTY.is_empty());
//! assert_eq!(Label::from_char('@').map(Label::as_char), Some('@'));
//! ```

pub mod vector;

pub use vector::Vector3;

/// Reference frame width in pixels (terminal columns).
pub const FRAME_WIDTH: u16 = 900;

/// Reference frame height in pixels (terminal rows).
pub const FRAME_HEIGHT: u16 = 180;

/// World extent along x in blocks.
pub const X_BLOCKS: usize = 20;

/// World extent along y in blocks.
pub const Y_BLOCKS: usize = 20;

/// World extent along z (up) in blocks.
pub const Z_BLOCKS: usize = 10;

/// Height of the default ground slab in blocks.
pub const SLAB_HEIGHT: usize = 4;

/// Material character of the default ground slab.
pub const SLAB_MATERIAL: u8 = b'@';

/// Camera height above the slab top.
pub const EYE_HEIGHT: f32 = 1.5;

/// Distance to an integer coordinate (on two or more axes) at which a hit
/// counts as a voxel edge.
pub const BLOCK_BORDER_SIZE: f32 = 0.025;

/// Vertical field of view in radians.
pub const FOV_VERTICAL: f32 = 0.7;

/// Horizontal field of view in radians.
pub const FOV_HORIZONTAL: f32 = 1.0;

/// Extra distance added after each face crossing; also the magnitude below
/// which a direction component counts as parallel to its axis.
pub const RAY_STEP_EPSILON: f32 = 0.02;

/// View angle change per tick while a tilt key is held (radians).
pub const TILT_STEP: f32 = 0.1;

/// Position change per tick while a movement key is held.
pub const MOVE_STEP: f32 = 0.3;

/// Fixed tick interval in milliseconds (20ms = 50 FPS)
pub const FRAME_INTERVAL_MS: u32 = 20;


/// What a single voxel (or a single rendered pixel) shows.
///
/// A label is one printable ASCII character:
/// - `' '` ([`Label::EMPTY`]): nothing there
/// - `'-'` ([`Label::EDGE`]): a voxel edge, produced only by the ray tracer
/// - anything else: a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(pub u8);

impl Label {
    pub const EMPTY: Label = Label(b' ');
    pub const EDGE: Label = Label(b'-');

    /// Parse a label from a printable ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_graphic() || c == ' ' {
            Some(Label(c as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn is_empty(self) -> bool {
        self == Label::EMPTY
    }

    /// True for anything that is neither empty nor the edge marker.
    pub fn is_material(self) -> bool {
        self != Label::EMPTY && self != Label::EDGE
    }
}

impl Default for Label {
    fn default() -> Self {
        Label::EMPTY
    }
}

/// Camera orientation in radians.
///
/// - **theta**: elevation above the horizontal plane (pitch)
/// - **phi**: azimuth around the z axis (yaw), 0 = +x
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewAngles {
    pub theta: f32,
    pub phi: f32,
}

impl ViewAngles {
    pub const fn new(theta: f32, phi: f32) -> Self {
        Self { theta, phi }
    }

    /// Unit forward vector for these angles.
    pub fn forward(&self) -> Vector3 {
        Vector3::from_spherical(self.theta, self.phi)
    }
}

/// The camera: where it is and where it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3,
    pub view: ViewAngles,
}

impl Pose {
    pub const fn new(position: Vector3, view: ViewAngles) -> Self {
        Self { position, view }
    }
}

impl Default for Pose {
    /// Standing on the default slab at (5, 5), looking level along +x.
    fn default() -> Self {
        Self {
            position: Vector3::new(5.0, 5.0, SLAB_HEIGHT as f32 + EYE_HEIGHT),
            view: ViewAngles::default(),
        }
    }
}

/// Camera actions that can be requested by input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewAction {
    /// Tilt the view up (increase theta)
    PitchUp,
    /// Tilt the view down (decrease theta)
    PitchDown,
    /// Turn left (decrease phi)
    YawLeft,
    /// Turn right (increase phi)
    YawRight,
    /// Step along the horizontal facing direction
    MoveForward,
    /// Step against the horizontal facing direction
    MoveBack,
    StrafeLeft,
    StrafeRight,
}

impl ViewAction {
    pub const COUNT: usize = 8;

    pub const ALL: [ViewAction; ViewAction::COUNT] = [
        ViewAction::PitchUp,
        ViewAction::PitchDown,
        ViewAction::YawLeft,
        ViewAction::YawRight,
        ViewAction::MoveForward,
        ViewAction::MoveBack,
        ViewAction::StrafeLeft,
        ViewAction::StrafeRight,
    ];

    #[inline(always)]
    fn index(self) -> usize {
        self as usize
    }
}

/// Which actions were requested during the current poll cycle.
///
/// Terminals do not report key releases reliably, so state is rebuilt from
/// scratch each cycle: anything not pressed since the last [`clear`] counts
/// as released.
///
/// [`clear`]: InputState::clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pressed: [bool; ViewAction::COUNT],
    /// Set when a quit key was seen this cycle.
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn press(&mut self, action: ViewAction) {
        self.pressed[action.index()] = true;
    }

    pub fn is_pressed(&self, action: ViewAction) -> bool {
        self.pressed[action.index()]
    }

    /// True if any camera action is pressed.
    pub fn any(&self) -> bool {
        self.pressed.iter().any(|&p| p)
    }
}
