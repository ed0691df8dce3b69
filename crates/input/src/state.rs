use crate::action::Action;
use cottage_common::MoveDirection;
use std::collections::HashSet;

/// Tracks which actions are held and which toggles fired since the last poll.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Action>,
    triggered: Vec<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Returns `true` if the action was not already held.
    ///
    /// Edge-triggered actions are queued only on that transition, so key
    /// repeat while held does not fire them again.
    pub fn press(&mut self, action: Action) -> bool {
        let fresh = self.held.insert(action);
        if fresh && action.is_edge_triggered() {
            self.triggered.push(action);
        }
        fresh
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Movement directions currently held, in a fixed order.
    pub fn held_moves(&self) -> impl Iterator<Item = MoveDirection> + '_ {
        MoveDirection::ALL
            .into_iter()
            .filter(|dir| self.held.contains(&Action::Move(*dir)))
    }

    /// Drain edge-triggered actions fired since the last call, in press order.
    pub fn take_triggered(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.triggered)
    }

    /// Release everything, e.g. when the window loses focus and release
    /// events would be missed.
    pub fn clear(&mut self) {
        if !self.held.is_empty() {
            tracing::debug!("releasing {} held actions", self.held.len());
        }
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_moves_follow_press_and_release() {
        let mut input = InputState::new();
        input.press(Action::Move(MoveDirection::Left));
        input.press(Action::Move(MoveDirection::Forward));
        let moves: Vec<_> = input.held_moves().collect();
        assert_eq!(moves, [MoveDirection::Forward, MoveDirection::Left]);

        input.release(Action::Move(MoveDirection::Forward));
        let moves: Vec<_> = input.held_moves().collect();
        assert_eq!(moves, [MoveDirection::Left]);
    }

    #[test]
    fn movement_never_queues_triggers() {
        let mut input = InputState::new();
        input.press(Action::Move(MoveDirection::Up));
        assert!(input.take_triggered().is_empty());
    }

    #[test]
    fn repeated_press_toggles_once() {
        let mut input = InputState::new();
        assert!(input.press(Action::ToggleProjection));
        // Key repeat while held.
        assert!(!input.press(Action::ToggleProjection));
        assert!(!input.press(Action::ToggleProjection));
        assert_eq!(input.take_triggered(), [Action::ToggleProjection]);
        assert!(input.take_triggered().is_empty());

        input.release(Action::ToggleProjection);
        input.press(Action::ToggleProjection);
        assert_eq!(input.take_triggered(), [Action::ToggleProjection]);
    }

    #[test]
    fn triggers_keep_press_order() {
        let mut input = InputState::new();
        input.press(Action::ToggleHud);
        input.press(Action::ToggleLamp);
        input.press(Action::Quit);
        assert_eq!(
            input.take_triggered(),
            [Action::ToggleHud, Action::ToggleLamp, Action::Quit]
        );
    }

    #[test]
    fn clear_releases_everything() {
        let mut input = InputState::new();
        input.press(Action::Move(MoveDirection::Down));
        input.press(Action::ToggleLamp);
        input.clear();
        assert!(input.held_moves().next().is_none());
        assert!(!input.is_held(Action::ToggleLamp));
    }
}
