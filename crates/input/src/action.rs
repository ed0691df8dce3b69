use cottage_common::MoveDirection;

/// A high-level action produced by the desktop key bindings.
///
/// The camera and renderer consume actions, never raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the camera while held.
    Move(MoveDirection),
    /// Switch between perspective and orthographic projection.
    ToggleProjection,
    /// Show or hide the lamp marker at the light position.
    ToggleLamp,
    /// Show or hide the on-screen HUD.
    ToggleHud,
    /// Close the window.
    Quit,
}

impl Action {
    /// Whether this action fires once per press instead of every frame.
    pub fn is_edge_triggered(self) -> bool {
        !matches!(self, Action::Move(_))
    }
}
