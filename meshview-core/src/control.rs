/// Orbit, pan and zoom driven by pointer and wheel input
///
/// Input sources translate their platform events into [`ControlCommand`]s;
/// [`OrbitControl::apply`] is the only place the camera pose changes in
/// response to input.
use log::trace;

use crate::camera::{Camera, Viewport};
use crate::options::ControlOptions;
use crate::rotation::Rotation;
use crate::transform::RigidTransform;
use crate::vector::Vector3;

/// Modifier keys held during a pointer move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };

    /// Shift pans, ctrl zooms, anything else rotates. Shift wins over ctrl.
    pub fn gesture(self) -> Gesture {
        if self.shift {
            Gesture::Pan
        } else if self.ctrl {
            Gesture::Zoom
        } else {
            Gesture::Rotate
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Rotate,
    Pan,
    Zoom,
}

/// Input already stripped of platform details. Positions are in pixels with
/// y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64, modifiers: Modifiers },
    Release,
    Wheel { delta_y: f64 },
    Resize(Viewport),
}

/// Camera state captured when a drag starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin: (f64, f64),
    pub scale: f64,
    pub focus: RigidTransform,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Scale multiplier for a signed zoom amount: positive zooms in, negative out
pub fn zoom_factor(delta: f64, y: f64) -> f64 {
    if delta > 0.0 {
        1.0 / (1.0 + y)
    } else {
        1.0 + y
    }
}

pub struct OrbitControl {
    state: DragState,
    viewport: Viewport,
    options: ControlOptions,
}

impl OrbitControl {
    pub fn new(options: ControlOptions) -> Self {
        Self {
            state: DragState::Idle,
            viewport: Viewport::default(),
            options,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Apply one input command to the camera
    pub fn apply(&mut self, camera: &mut Camera, command: ControlCommand) {
        trace!("control command {:?}", command);
        match command {
            ControlCommand::Press { x, y } => {
                // A press without a matching release ends the previous drag
                self.state = DragState::Dragging(DragSession {
                    origin: (x, y),
                    scale: camera.scale,
                    focus: camera.focus,
                });
            }
            ControlCommand::Move { x, y, modifiers } => {
                if let DragState::Dragging(session) = self.state {
                    self.drag(camera, &session, x, y, modifiers.gesture());
                }
            }
            ControlCommand::Release => {
                self.state = DragState::Idle;
            }
            ControlCommand::Wheel { delta_y } => {
                if self.is_dragging() {
                    trace!("wheel ignored during drag");
                    return;
                }
                let y = self.options.wheel_zoom_rate * delta_y.abs() / self.options.wheel_delta_unit;
                camera.scale *= zoom_factor(delta_y, y);
            }
            ControlCommand::Resize(viewport) => {
                self.viewport = viewport;
            }
        }
    }

    fn drag(&self, camera: &mut Camera, session: &DragSession, x: f64, y: f64, gesture: Gesture) {
        if self.viewport.is_degenerate() {
            trace!("drag ignored: degenerate viewport {:?}", self.viewport);
            return;
        }
        let dx = x - session.origin.0;
        let dy = y - session.origin.1;
        let length_per_pixel = 2.0 * session.scale / self.viewport.min_side();
        // Pointer motion in world units; screen y points down
        let motion = session
            .focus
            .rotation
            .transform(Vector3::new(dx * length_per_pixel, -dy * length_per_pixel, 0.0));

        match gesture {
            Gesture::Pan => {
                camera.focus.translation = session.focus.translation - motion;
            }
            Gesture::Zoom => {
                let y = dy.abs() / self.options.drag_zoom_pixels;
                camera.scale = zoom_factor(dy, y) * session.scale;
            }
            Gesture::Rotate => {
                let axis = motion.cross(session.focus.rotation.n());
                let angle = motion.length() / session.scale;
                camera.focus.rotation = Rotation::of_axis(axis, angle) * session.focus.rotation;
            }
        }
    }
}

impl Default for OrbitControl {
    fn default() -> Self {
        Self::new(ControlOptions::default())
    }
}
