use cottage_common::MoveDirection;
use cottage_input::Action;
use winit::keyboard::KeyCode;

/// Fixed key bindings.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::KeyW => Action::Move(MoveDirection::Forward),
        KeyCode::KeyS => Action::Move(MoveDirection::Backward),
        KeyCode::KeyA => Action::Move(MoveDirection::Left),
        KeyCode::KeyD => Action::Move(MoveDirection::Right),
        KeyCode::KeyQ => Action::Move(MoveDirection::Up),
        KeyCode::KeyE => Action::Move(MoveDirection::Down),
        KeyCode::KeyP => Action::ToggleProjection,
        KeyCode::KeyL => Action::ToggleLamp,
        KeyCode::F1 => Action::ToggleHud,
        KeyCode::Escape => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Key help shown in the HUD.
pub const HELP: &str = "WASD: move | Q/E: up/down | mouse: look | wheel: zoom\n\
                        P: projection | L: lamp | F1: HUD | Esc: quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys() {
        assert_eq!(
            action_for(KeyCode::KeyW),
            Some(Action::Move(MoveDirection::Forward))
        );
        assert_eq!(
            action_for(KeyCode::KeyQ),
            Some(Action::Move(MoveDirection::Up))
        );
        assert_eq!(
            action_for(KeyCode::KeyE),
            Some(Action::Move(MoveDirection::Down))
        );
    }

    #[test]
    fn toggle_keys() {
        assert_eq!(action_for(KeyCode::KeyP), Some(Action::ToggleProjection));
        assert_eq!(action_for(KeyCode::Escape), Some(Action::Quit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(action_for(KeyCode::KeyZ), None);
        assert_eq!(action_for(KeyCode::Space), None);
    }
}
