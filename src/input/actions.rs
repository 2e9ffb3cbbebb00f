//! Game action definitions
//!
//! The game only ever asks three questions of the input devices: is the
//! player walking left, walking right, or asking to quit.

/// All actions that can be triggered by input
///
/// Default bindings:
/// - MoveLeft:  Left arrow / A / D-pad left / left stick left
/// - MoveRight: Right arrow / D / D-pad right / left stick right
/// - Quit:      Escape / window close / Start + Select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Quit,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Quit];

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Action::MoveLeft => "Left",
            Action::MoveRight => "Right",
            Action::Quit => "Quit",
        }
    }
}
