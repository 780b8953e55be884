//! Tool state and the raw events the presentation layer produces.

use gridpen_core::{Digit, Position};

/// Which entry tool, if any, is currently armed.
///
/// At most one tool is armed at a time. The notes tool may additionally
/// carry one pre-armed digit, meaning the next cell tap writes that note
/// directly without a separate digit-button tap.
///
/// Starts at [`ToolState::None`]; transitions only through the editor's
/// event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum ToolState {
    /// No tool armed; cell taps manage the selection.
    #[default]
    None,
    /// The "write this digit" tool is armed.
    Digit(Digit),
    /// The notes tool is armed, optionally with a digit pre-armed inside it.
    Notes(Option<Digit>),
}

/// A button on the tool panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolButton {
    /// One of the nine digit buttons.
    Digit(Digit),
    /// The notes-tool button.
    Notes,
}

/// A raw input event forwarded by the presentation layer.
///
/// These are the only two inputs the editor consumes; there is no keyboard
/// path, no drag or multi-select, no clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user tapped a cell on the board.
    CellTapped(Position),
    /// The user tapped a button on the tool panel.
    ToolButtonTapped(ToolButton),
}
