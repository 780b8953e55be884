//! The editor session controller.

use std::fmt;

use gridpen_core::{Board, Position};

use crate::{
    tool::{InputEvent, ToolButton, ToolState},
    transition::{self, CellTapOutcome, ToolTapOutcome, Write},
};

/// What a committed mutation changed.
///
/// Delivered to the observer registered with [`Editor::set_observer`]. A
/// notification fires after every committed change and never for a
/// suppressed no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The value of one cell changed.
    Cell(Position),
    /// The armed tool changed.
    Tool,
    /// The selection changed.
    Selection,
}

type Observer = Box<dyn FnMut(Change)>;

/// The editor session: board, armed tool, and selection.
///
/// The editor is the sole writer of all three; the presentation layer holds
/// read access plus the two event entry points and must treat a snapshot as
/// immutable until the next [`Change`] notification. Events are handled one
/// at a time, run to completion, on a single thread.
///
/// # Examples
///
/// ```
/// use gridpen_core::{CellValue, Digit, Position};
/// use gridpen_editor::{Editor, ToolButton};
///
/// let mut editor = Editor::new();
/// let cell = Position::new(0, 0);
///
/// // Select a cell, then tap a digit button: a direct write.
/// editor.on_cell_tapped(cell);
/// editor.on_tool_button_tapped(ToolButton::Digit(Digit::D3));
/// assert_eq!(editor.board().get(cell), CellValue::Definite(Digit::D3));
/// assert_eq!(editor.selection(), Some(cell));
/// ```
#[derive(Default)]
pub struct Editor {
    board: Board,
    tool: ToolState,
    selection: Option<Position>,
    observer: Option<Observer>,
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("board", &self.board)
            .field("tool", &self.tool)
            .field("selection", &self.selection)
            .field("observer", &self.observer.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Editor {
    /// Creates an editor with an empty board, no tool armed, and no
    /// selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a read snapshot of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the currently armed tool.
    #[must_use]
    pub fn tool_state(&self) -> ToolState {
        self.tool
    }

    /// Returns the currently selected cell, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Registers the observer notified after every committed mutation.
    ///
    /// Replaces any previously registered observer.
    pub fn set_observer(&mut self, observer: impl FnMut(Change) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Routes a raw input event to the matching transition.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::CellTapped(pos) => self.on_cell_tapped(pos),
            InputEvent::ToolButtonTapped(button) => self.on_tool_button_tapped(button),
        }
    }

    /// Handles a tap on the cell at `pos`.
    ///
    /// With a concrete writing tool armed this commits a write to the cell;
    /// otherwise it toggles the selection. Tool state never changes here.
    pub fn on_cell_tapped(&mut self, pos: Position) {
        match transition::cell_tap(self.tool) {
            CellTapOutcome::Commit(write) => self.commit(pos, write),
            CellTapOutcome::ToggleSelection => self.toggle_selection(pos),
        }
    }

    /// Handles a tap on a tool-panel button.
    pub fn on_tool_button_tapped(&mut self, button: ToolButton) {
        match transition::tool_tap(button, self.tool, self.selection.is_some()) {
            ToolTapOutcome::Commit(write) => match self.selection {
                Some(pos) => self.commit(pos, write),
                None => unreachable!("direct write requires a selected cell"),
            },
            ToolTapOutcome::Arm(tool) => self.set_tool(tool),
        }
    }

    fn commit(&mut self, pos: Position, write: Write) {
        let current = self.board.get(pos);
        let merged = transition::merge(current, write);
        if merged == current {
            return;
        }
        log::debug!("commit {write:?} at {pos}: {current:?} -> {merged:?}");
        self.board.set(pos, merged);
        self.notify(Change::Cell(pos));
    }

    fn set_tool(&mut self, tool: ToolState) {
        if tool == self.tool {
            return;
        }
        log::trace!("tool {:?} -> {tool:?}", self.tool);
        self.tool = tool;
        self.notify(Change::Tool);
    }

    fn toggle_selection(&mut self, pos: Position) {
        self.selection = if self.selection == Some(pos) {
            None
        } else {
            Some(pos)
        };
        log::trace!("selection -> {:?}", self.selection);
        self.notify(Change::Selection);
    }

    fn notify(&mut self, change: Change) {
        if let Some(observer) = &mut self.observer {
            observer(change);
        }
    }
}
