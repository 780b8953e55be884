//! Pure transition functions for the editor's two state machines.
//!
//! Everything here is a total, synchronous function over closed enums; the
//! matches are exhaustive without wildcard arms over the tool/button product,
//! so a new variant cannot silently fall through.

use gridpen_core::{CellValue, Digit, DigitSet};

use crate::tool::{ToolButton, ToolState};

/// A single-cell write produced by a transition.
///
/// Incoming writes are always a single digit: a committed digit or one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Write {
    /// Commit the digit as the cell's definite value.
    Definite(Digit),
    /// Toggle the digit in the cell's note set.
    Note(Digit),
}

/// Merges an incoming write into a cell's current value.
///
/// - Writing a definite digit over the same definite digit clears the cell.
/// - Writing a note onto a notes cell toggles that digit's membership; the
///   set may end up empty, which is still a notes cell, not an empty one.
/// - Every other combination overwrites the cell with the incoming value.
pub(crate) fn merge(current: CellValue, write: Write) -> CellValue {
    match (current, write) {
        (CellValue::Definite(cur), Write::Definite(d)) if cur == d => CellValue::Empty,
        (CellValue::Notes(mut notes), Write::Note(d)) => {
            notes.toggle(d);
            CellValue::Notes(notes)
        }
        (CellValue::Empty | CellValue::Definite(_) | CellValue::Notes(_), Write::Definite(d)) => {
            CellValue::Definite(d)
        }
        (CellValue::Empty | CellValue::Definite(_), Write::Note(d)) => {
            CellValue::Notes(DigitSet::from_iter([d]))
        }
    }
}

/// What a cell tap does, given the armed tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellTapOutcome {
    /// Commit the write to the tapped cell; tool and selection unchanged.
    Commit(Write),
    /// No value change; select the tapped cell, or clear the selection if it
    /// was already selected.
    ToggleSelection,
}

/// The cell-tap transition.
///
/// A tap while a concrete writing tool is armed (a specific digit, or notes
/// with a pre-armed digit) writes immediately, bypassing the two-step
/// select-then-choose-digit flow. Otherwise the tap only manages selection.
pub(crate) fn cell_tap(tool: ToolState) -> CellTapOutcome {
    match tool {
        ToolState::Digit(d) => CellTapOutcome::Commit(Write::Definite(d)),
        ToolState::Notes(Some(d)) => CellTapOutcome::Commit(Write::Note(d)),
        ToolState::None | ToolState::Notes(None) => CellTapOutcome::ToggleSelection,
    }
}

/// What a tool-button tap does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToolTapOutcome {
    /// Commit the write to the currently selected cell; tool and selection
    /// unchanged. Only produced when a cell is selected.
    Commit(Write),
    /// Replace the tool state.
    Arm(ToolState),
}

/// The tool-tap transition.
///
/// Resolution order: direct write onto a selected cell while the tool is
/// bare, then de-arm on repeat press, then arming, cross-arming between the
/// digit and notes tools, and collapsing notes-with-digit back to the plain
/// digit tool. Once a tool carries a specific digit, a repeat press de-arms
/// instead of re-writing.
pub(crate) fn tool_tap(button: ToolButton, tool: ToolState, cell_selected: bool) -> ToolTapOutcome {
    match (button, tool) {
        // Direct write: a cell is selected and the tool is bare.
        (ToolButton::Digit(d), ToolState::None) if cell_selected => {
            ToolTapOutcome::Commit(Write::Definite(d))
        }
        (ToolButton::Digit(d), ToolState::Notes(None)) if cell_selected => {
            ToolTapOutcome::Commit(Write::Note(d))
        }
        // De-arm on repeat press.
        (ToolButton::Digit(d), ToolState::Digit(armed)) if d == armed => {
            ToolTapOutcome::Arm(ToolState::None)
        }
        (ToolButton::Notes, ToolState::Notes(None)) => ToolTapOutcome::Arm(ToolState::None),
        (ToolButton::Digit(d), ToolState::Notes(Some(armed))) if d == armed => {
            ToolTapOutcome::Arm(ToolState::Notes(None))
        }
        // Arm a tool.
        (ToolButton::Digit(d), ToolState::None | ToolState::Digit(_)) => {
            ToolTapOutcome::Arm(ToolState::Digit(d))
        }
        (ToolButton::Notes, ToolState::None) => ToolTapOutcome::Arm(ToolState::Notes(None)),
        // Cross-arm between the digit tool and the notes tool. A digit press
        // while the notes tool is armed selects that digit within it.
        (ToolButton::Notes, ToolState::Digit(d)) => ToolTapOutcome::Arm(ToolState::Notes(Some(d))),
        (ToolButton::Digit(d), ToolState::Notes(_)) => {
            ToolTapOutcome::Arm(ToolState::Notes(Some(d)))
        }
        // Collapse notes-with-digit back to the plain digit tool.
        (ToolButton::Notes, ToolState::Notes(Some(d))) => ToolTapOutcome::Arm(ToolState::Digit(d)),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn digit() -> impl Strategy<Value = Digit> {
        (1u8..=9).prop_map(Digit::from_value)
    }

    fn digit_set() -> impl Strategy<Value = DigitSet> {
        (0u16..0x200).prop_map(|bits| DigitSet::try_from_bits(bits).unwrap())
    }

    #[test]
    fn test_merge_definite_toggle_law() {
        // Same-digit definite write toggles off; a second write restores it.
        let once = merge(CellValue::Definite(Digit::D5), Write::Definite(Digit::D5));
        assert_eq!(once, CellValue::Empty);
        let twice = merge(once, Write::Definite(Digit::D5));
        assert_eq!(twice, CellValue::Definite(Digit::D5));
    }

    #[test]
    fn test_merge_overwrite_law() {
        // A different definite digit overwrites, never clears.
        let merged = merge(CellValue::Definite(Digit::D1), Write::Definite(Digit::D2));
        assert_eq!(merged, CellValue::Definite(Digit::D2));
    }

    #[test]
    fn test_merge_note_onto_non_notes_overwrites() {
        assert_eq!(
            merge(CellValue::Empty, Write::Note(Digit::D3)),
            CellValue::Notes(DigitSet::from_iter([Digit::D3]))
        );
        assert_eq!(
            merge(CellValue::Definite(Digit::D7), Write::Note(Digit::D3)),
            CellValue::Notes(DigitSet::from_iter([Digit::D3]))
        );
    }

    #[test]
    fn test_merge_definite_onto_notes_overwrites() {
        let notes = CellValue::Notes(DigitSet::from_iter([Digit::D1, Digit::D2]));
        assert_eq!(
            merge(notes, Write::Definite(Digit::D9)),
            CellValue::Definite(Digit::D9)
        );
    }

    #[test]
    fn test_merge_note_removal_leaves_notes_cell() {
        // Removing the last note yields an empty note set, not an empty cell.
        let notes = CellValue::Notes(DigitSet::from_iter([Digit::D4]));
        assert_eq!(
            merge(notes, Write::Note(Digit::D4)),
            CellValue::Notes(DigitSet::EMPTY)
        );
    }

    proptest! {
        #[test]
        fn test_merge_note_twice_returns_to_original(set in digit_set(), d in digit()) {
            let start = CellValue::Notes(set);
            let once = merge(start, Write::Note(d));
            let twice = merge(once, Write::Note(d));
            prop_assert_eq!(twice, start);
        }

        #[test]
        fn test_merge_note_toggles_membership(set in digit_set(), d in digit()) {
            let merged = merge(CellValue::Notes(set), Write::Note(d));
            let CellValue::Notes(result) = merged else {
                panic!("note merge left the notes state: {merged:?}");
            };
            prop_assert_eq!(result.contains(d), !set.contains(d));
        }

        #[test]
        fn test_merge_never_returns_its_input(set in digit_set(), cur in digit(), d in digit()) {
            // Single-digit writes always change the cell, so the editor's
            // no-op suppression can only trigger on an unchanged tool state.
            for current in [
                CellValue::Empty,
                CellValue::Definite(cur),
                CellValue::Notes(set),
            ] {
                for write in [Write::Definite(d), Write::Note(d)] {
                    prop_assert_ne!(merge(current, write), current);
                }
            }
        }
    }

    #[test]
    fn test_cell_tap_concrete_tools_write() {
        assert_eq!(
            cell_tap(ToolState::Digit(Digit::D5)),
            CellTapOutcome::Commit(Write::Definite(Digit::D5))
        );
        assert_eq!(
            cell_tap(ToolState::Notes(Some(Digit::D7))),
            CellTapOutcome::Commit(Write::Note(Digit::D7))
        );
    }

    #[test]
    fn test_cell_tap_bare_tools_manage_selection() {
        assert_eq!(cell_tap(ToolState::None), CellTapOutcome::ToggleSelection);
        assert_eq!(
            cell_tap(ToolState::Notes(None)),
            CellTapOutcome::ToggleSelection
        );
    }

    #[test]
    fn test_tool_tap_direct_write_takes_precedence() {
        // Digit press with a cell selected and no tool armed writes directly.
        assert_eq!(
            tool_tap(ToolButton::Digit(Digit::D3), ToolState::None, true),
            ToolTapOutcome::Commit(Write::Definite(Digit::D3))
        );
        // Bare notes tool armed: the digit press writes a note.
        assert_eq!(
            tool_tap(ToolButton::Digit(Digit::D3), ToolState::Notes(None), true),
            ToolTapOutcome::Commit(Write::Note(Digit::D3))
        );
    }

    #[test]
    fn test_tool_tap_de_arm_on_repeat_press() {
        assert_eq!(
            tool_tap(
                ToolButton::Digit(Digit::D2),
                ToolState::Digit(Digit::D2),
                false
            ),
            ToolTapOutcome::Arm(ToolState::None)
        );
        assert_eq!(
            tool_tap(ToolButton::Notes, ToolState::Notes(None), false),
            ToolTapOutcome::Arm(ToolState::None)
        );
        // Repeating the pre-armed digit drops it but keeps the notes tool.
        assert_eq!(
            tool_tap(
                ToolButton::Digit(Digit::D4),
                ToolState::Notes(Some(Digit::D4)),
                false
            ),
            ToolTapOutcome::Arm(ToolState::Notes(None))
        );
    }

    #[test]
    fn test_tool_tap_de_arm_wins_over_direct_write_for_armed_digit() {
        // Once a tool carries a specific digit, a repeat press de-arms even
        // with a cell selected.
        assert_eq!(
            tool_tap(
                ToolButton::Digit(Digit::D2),
                ToolState::Digit(Digit::D2),
                true
            ),
            ToolTapOutcome::Arm(ToolState::None)
        );
    }

    #[test]
    fn test_tool_tap_arms_tools() {
        assert_eq!(
            tool_tap(ToolButton::Digit(Digit::D6), ToolState::None, false),
            ToolTapOutcome::Arm(ToolState::Digit(Digit::D6))
        );
        // A different digit re-arms rather than de-arming.
        assert_eq!(
            tool_tap(
                ToolButton::Digit(Digit::D6),
                ToolState::Digit(Digit::D1),
                true
            ),
            ToolTapOutcome::Arm(ToolState::Digit(Digit::D6))
        );
        assert_eq!(
            tool_tap(ToolButton::Notes, ToolState::None, true),
            ToolTapOutcome::Arm(ToolState::Notes(None))
        );
    }

    #[test]
    fn test_tool_tap_cross_arm() {
        assert_eq!(
            tool_tap(ToolButton::Notes, ToolState::Digit(Digit::D7), false),
            ToolTapOutcome::Arm(ToolState::Notes(Some(Digit::D7)))
        );
        // Digit press with bare notes armed and nothing selected.
        assert_eq!(
            tool_tap(ToolButton::Digit(Digit::D7), ToolState::Notes(None), false),
            ToolTapOutcome::Arm(ToolState::Notes(Some(Digit::D7)))
        );
    }

    #[test]
    fn test_tool_tap_digit_press_replaces_pre_armed_note_digit() {
        assert_eq!(
            tool_tap(
                ToolButton::Digit(Digit::D3),
                ToolState::Notes(Some(Digit::D8)),
                true
            ),
            ToolTapOutcome::Arm(ToolState::Notes(Some(Digit::D3)))
        );
    }

    #[test]
    fn test_tool_tap_collapse_notes_with_digit() {
        assert_eq!(
            tool_tap(ToolButton::Notes, ToolState::Notes(Some(Digit::D9)), true),
            ToolTapOutcome::Arm(ToolState::Digit(Digit::D9))
        );
    }

    proptest! {
        #[test]
        fn test_tool_tap_commit_requires_selection(d in digit()) {
            // Without a selection, no button/tool combination may write.
            for tool in [
                ToolState::None,
                ToolState::Digit(d),
                ToolState::Notes(None),
                ToolState::Notes(Some(d)),
            ] {
                for button in [ToolButton::Digit(d), ToolButton::Notes] {
                    let outcome = tool_tap(button, tool, false);
                    prop_assert!(matches!(outcome, ToolTapOutcome::Arm(_)));
                }
            }
        }
    }
}
