use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode};

use crate::input::{LogicalInput, RawInput};

/// Translates winit keys and buttons into logical inputs.
pub struct InputMapper;

impl InputMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_keyboard_input(&self, input: &KeyboardInput) -> Option<RawInput> {
        input
            .virtual_keycode
            .and_then(|key_code| self.map_key(key_code, input.state))
    }

    pub fn map_key(&self, key_code: VirtualKeyCode, state: ElementState) -> Option<RawInput> {
        let logical = match key_code {
            // Escape quits on press only
            VirtualKeyCode::Escape => {
                return (state == ElementState::Pressed).then_some(RawInput::Quit);
            }
            VirtualKeyCode::Space => LogicalInput::TogglePause,
            // Lower interval means faster
            VirtualKeyCode::Up => LogicalInput::SpeedUp,
            VirtualKeyCode::Down => LogicalInput::SpeedDown,
            VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => LogicalInput::ClearBoard,
            VirtualKeyCode::S => LogicalInput::SingleStep,
            _ => return None,
        };
        Some(Self::with_state(logical, state))
    }

    pub fn map_mouse_input(&self, button: MouseButton, state: ElementState) -> Option<RawInput> {
        let logical = match button {
            MouseButton::Left => LogicalInput::PlaceCell,
            MouseButton::Right => LogicalInput::ClearCell,
            _ => return None,
        };
        Some(Self::with_state(logical, state))
    }

    /// `pixel` is the pointer position already converted to frame-buffer pixels.
    pub fn map_cursor_moved(&self, pixel: (usize, usize)) -> RawInput {
        RawInput::PointerMoved {
            x: pixel.0 as u32,
            y: pixel.1 as u32,
        }
    }

    fn with_state(logical: LogicalInput, state: ElementState) -> RawInput {
        match state {
            ElementState::Pressed => RawInput::Pressed(logical),
            ElementState::Released => RawInput::Released(logical),
        }
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_logical_inputs() {
        let mapper = InputMapper::new();
        let cases = [
            (VirtualKeyCode::Space, LogicalInput::TogglePause),
            (VirtualKeyCode::Up, LogicalInput::SpeedUp),
            (VirtualKeyCode::Down, LogicalInput::SpeedDown),
            (VirtualKeyCode::Return, LogicalInput::ClearBoard),
            (VirtualKeyCode::NumpadEnter, LogicalInput::ClearBoard),
            (VirtualKeyCode::S, LogicalInput::SingleStep),
        ];
        for (key, logical) in cases {
            assert_eq!(mapper.map_key(key, ElementState::Pressed), Some(RawInput::Pressed(logical)));
            assert_eq!(mapper.map_key(key, ElementState::Released), Some(RawInput::Released(logical)));
        }
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mapper = InputMapper::new();
        assert_eq!(mapper.map_key(VirtualKeyCode::A, ElementState::Pressed), None);
        assert_eq!(mapper.map_key(VirtualKeyCode::Left, ElementState::Pressed), None);
    }

    #[test]
    fn escape_quits_on_press() {
        let mapper = InputMapper::new();
        assert_eq!(mapper.map_key(VirtualKeyCode::Escape, ElementState::Pressed), Some(RawInput::Quit));
        assert_eq!(mapper.map_key(VirtualKeyCode::Escape, ElementState::Released), None);
    }

    #[test]
    fn mouse_buttons_paint_and_erase() {
        let mapper = InputMapper::new();
        assert_eq!(
            mapper.map_mouse_input(MouseButton::Left, ElementState::Pressed),
            Some(RawInput::Pressed(LogicalInput::PlaceCell))
        );
        assert_eq!(
            mapper.map_mouse_input(MouseButton::Right, ElementState::Released),
            Some(RawInput::Released(LogicalInput::ClearCell))
        );
        assert_eq!(mapper.map_mouse_input(MouseButton::Middle, ElementState::Pressed), None);
    }

    #[test]
    fn cursor_position_passes_through() {
        let mapper = InputMapper::new();
        assert_eq!(mapper.map_cursor_moved((42, 7)), RawInput::PointerMoved { x: 42, y: 7 });
    }
}
