//! Input handling and session state for the gridpen puzzle editor.
//!
//! This crate implements the two state machines that give the editor its
//! behavior: the cell-value state machine (what happens to a cell's content
//! when a write lands on it) and the tool state machine (which entry tool is
//! armed, and how tool-button and cell taps move between tools, selection,
//! and writes).
//!
//! The only entry point is [`Editor`], which owns the board, the armed tool,
//! and the selection, and consumes the two raw events a presentation layer
//! can produce: a cell tap and a tool-button tap. The presentation layer
//! reads snapshots between events and re-renders when the editor reports a
//! [`Change`]; it never mutates editor state directly.
//!
//! # Examples
//!
//! ```
//! use gridpen_core::{CellValue, Digit, Position};
//! use gridpen_editor::{Editor, ToolButton, ToolState};
//!
//! let mut editor = Editor::new();
//!
//! // Arm the "write 5" tool, then tap a cell: the digit is committed.
//! editor.on_tool_button_tapped(ToolButton::Digit(Digit::D5));
//! editor.on_cell_tapped(Position::new(4, 3));
//! assert_eq!(
//!     editor.board().get(Position::new(4, 3)),
//!     CellValue::Definite(Digit::D5)
//! );
//! assert_eq!(editor.tool_state(), ToolState::Digit(Digit::D5));
//!
//! // Tapping the same cell again toggles the digit back off.
//! editor.on_cell_tapped(Position::new(4, 3));
//! assert_eq!(editor.board().get(Position::new(4, 3)), CellValue::Empty);
//! ```

mod editor;
mod tool;
mod transition;

pub use self::{
    editor::{Change, Editor},
    tool::{InputEvent, ToolButton, ToolState},
};
