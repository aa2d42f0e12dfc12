/// Translation of crossterm events into viewer commands
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use meshview_core::{ControlCommand, Modifiers};

/// Wheel delta reported per scroll notch, in browser-style units
pub const SCROLL_NOTCH: f64 = 100.0;

/// Keyboard shortcuts handled by the app itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Reset,
    ToggleSpin,
    Control(ZoomKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomKey {
    In,
    Out,
}

impl ZoomKey {
    pub fn command(self) -> ControlCommand {
        let delta_y = match self {
            ZoomKey::In => SCROLL_NOTCH,
            ZoomKey::Out => -SCROLL_NOTCH,
        };
        ControlCommand::Wheel { delta_y }
    }
}

/// Map a terminal cell to pseudo-pixels. Cells are `cell_aspect` times taller
/// than wide; the pointer sits in the middle of its cell.
pub fn cell_to_pixels(column: u16, row: u16, cell_aspect: f64) -> (f64, f64) {
    (f64::from(column) + 0.5, (f64::from(row) + 0.5) * cell_aspect)
}

/// Many terminals keep shift-drag for text selection, so the right and middle
/// buttons stand in for the shift and ctrl modifiers.
fn modifiers_for(button: MouseButton, keys: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: keys.contains(KeyModifiers::SHIFT) || button == MouseButton::Right,
        ctrl: keys.contains(KeyModifiers::CONTROL) || button == MouseButton::Middle,
    }
}

pub fn mouse_command(event: &MouseEvent, cell_aspect: f64) -> Option<ControlCommand> {
    let (x, y) = cell_to_pixels(event.column, event.row, cell_aspect);
    match event.kind {
        MouseEventKind::Down(_) => Some(ControlCommand::Press { x, y }),
        MouseEventKind::Drag(button) => Some(ControlCommand::Move {
            x,
            y,
            modifiers: modifiers_for(button, event.modifiers),
        }),
        MouseEventKind::Up(_) => Some(ControlCommand::Release),
        MouseEventKind::ScrollDown => Some(ControlCommand::Wheel { delta_y: SCROLL_NOTCH }),
        MouseEventKind::ScrollUp => Some(ControlCommand::Wheel { delta_y: -SCROLL_NOTCH }),
        _ => None,
    }
}

pub fn key_action(event: &KeyEvent) -> Option<KeyAction> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(KeyAction::Quit),
        KeyCode::Char('r') => Some(KeyAction::Reset),
        KeyCode::Char(' ') => Some(KeyAction::ToggleSpin),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(KeyAction::Control(ZoomKey::In)),
        KeyCode::Char('-') => Some(KeyAction::Control(ZoomKey::Out)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers,
        }
    }

    #[test]
    fn test_press_drag_release() {
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 3, 4, KeyModifiers::NONE);
        assert_eq!(mouse_command(&down, 2.0), Some(ControlCommand::Press { x: 3.5, y: 9.0 }));

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 5, 4, KeyModifiers::NONE);
        assert_eq!(
            mouse_command(&drag, 2.0),
            Some(ControlCommand::Move {
                x: 5.5,
                y: 9.0,
                modifiers: Modifiers::NONE,
            })
        );

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 5, 4, KeyModifiers::NONE);
        assert_eq!(mouse_command(&up, 2.0), Some(ControlCommand::Release));
    }

    #[test]
    fn test_buttons_and_keys_select_gesture() {
        let shift_drag = mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0, KeyModifiers::SHIFT);
        let right_drag = mouse(MouseEventKind::Drag(MouseButton::Right), 0, 0, KeyModifiers::NONE);
        let middle_drag = mouse(MouseEventKind::Drag(MouseButton::Middle), 0, 0, KeyModifiers::NONE);
        let ctrl_drag = mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0, KeyModifiers::CONTROL);

        let modifiers = |event: &MouseEvent| match mouse_command(event, 2.0) {
            Some(ControlCommand::Move { modifiers, .. }) => modifiers,
            other => panic!("expected move, got {:?}", other),
        };
        assert_eq!(modifiers(&shift_drag), Modifiers::SHIFT);
        assert_eq!(modifiers(&right_drag), Modifiers::SHIFT);
        assert_eq!(modifiers(&middle_drag), Modifiers::CTRL);
        assert_eq!(modifiers(&ctrl_drag), Modifiers::CTRL);
    }

    #[test]
    fn test_scroll_maps_to_wheel() {
        let down = mouse(MouseEventKind::ScrollDown, 0, 0, KeyModifiers::NONE);
        let up = mouse(MouseEventKind::ScrollUp, 0, 0, KeyModifiers::NONE);
        assert_eq!(mouse_command(&down, 2.0), Some(ControlCommand::Wheel { delta_y: 100.0 }));
        assert_eq!(mouse_command(&up, 2.0), Some(ControlCommand::Wheel { delta_y: -100.0 }));
        assert_eq!(ZoomKey::In.command(), ControlCommand::Wheel { delta_y: 100.0 });
    }

    #[test]
    fn test_hover_is_ignored() {
        let moved = mouse(MouseEventKind::Moved, 1, 1, KeyModifiers::NONE);
        assert_eq!(mouse_command(&moved, 2.0), None);
    }

    #[test]
    fn test_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_action(&key(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(key_action(&key(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(key_action(&key(KeyCode::Char('r'))), Some(KeyAction::Reset));
        assert_eq!(key_action(&key(KeyCode::Char(' '))), Some(KeyAction::ToggleSpin));
        assert_eq!(key_action(&key(KeyCode::Char('-'))), Some(KeyAction::Control(ZoomKey::Out)));
        assert_eq!(key_action(&key(KeyCode::Char('x'))), None);
        assert_eq!(
            key_action(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }
}
