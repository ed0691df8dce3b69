//! Input: raw keyboard and pointer events mapped to camera and view actions.
//!
//! # Invariants
//! - Movement actions are level-triggered: they apply every frame while held.
//! - Toggle actions are edge-triggered: one press flips state once, however
//!   long the key is held or repeated.
//! - The first pointer sample after start or reset only captures a baseline.

pub mod action;
pub mod pointer;
pub mod state;

pub use action::Action;
pub use pointer::PointerTracker;
pub use state::InputState;

pub fn crate_info() -> &'static str {
    "cottage-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
