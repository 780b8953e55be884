//! Gridpen application UI.
//!
//! # Design Notes
//! - Desktop-focused: a 9x9 grid with clear 3x3 boundaries and a tool panel
//!   of nine digit buttons plus the notes-tool button.
//! - Mouse/tap input only; every click becomes one of the editor's two raw
//!   events. The UI holds no editing logic of its own.
//! - Armed tools are shown by filling the matching panel button.

use std::sync::Arc;

use eframe::{
    App, CreationContext, Frame,
    egui::{Button, CentralPanel, Context, Grid, RichText, Stroke, StrokeKind, Ui, Vec2},
};
use egui_extras::{Size, StripBuilder};
use gridpen_core::{CellValue, Digit, Position};
use gridpen_editor::{Editor, ToolButton, ToolState};

#[derive(Debug)]
pub struct GridpenApp {
    editor: Editor,
}

impl GridpenApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            editor: Editor::new(),
        }
    }
}

impl App for GridpenApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(9.0 / (9.0 + 2.5)))
                .size(Size::relative(2.5 / (9.0 + 2.5)))
                .vertical(|mut strip| {
                    strip.cell(|ui| {
                        self.draw_grid(ui);
                    });
                    strip.cell(|ui| {
                        self.draw_tool_panel(ui);
                    });
                });
        });
    }
}

impl GridpenApp {
    fn draw_grid(&mut self, ui: &mut Ui) {
        let style = Arc::clone(ui.style());
        let visuals = &style.visuals;
        let border_color = visuals.widgets.inactive.fg_stroke.color;
        let definite_text_color = visuals.strong_text_color();
        let note_text_color = visuals.weak_text_color();
        let selected_bg_color = visuals.selection.bg_fill;
        let bg_color = visuals.text_edit_bg_color();

        let thin_border = Stroke::new(1.0, border_color);
        let thick_border = Stroke::new(3.0, border_color);
        let selected_border = Stroke::new(5.0, border_color);

        let board_size = ui.available_size().min_elem();
        let cell_size = board_size / 9.0;

        Grid::new(ui.id().with("outer_board"))
            .spacing((0.0, 0.0))
            .min_col_width(cell_size * 3.0)
            .min_row_height(cell_size * 3.0)
            .show(ui, |ui| {
                for box_row in 0..3 {
                    for box_col in 0..3 {
                        let grid =
                            Grid::new(ui.id().with(format!("inner_box_{box_row}_{box_col}")))
                                .spacing((0.0, 0.0))
                                .min_col_width(cell_size)
                                .min_row_height(cell_size)
                                .show(ui, |ui| {
                                    for cell_row in 0..3 {
                                        for cell_col in 0..3 {
                                            let pos = Position::new(
                                                box_col * 3 + cell_col,
                                                box_row * 3 + cell_row,
                                            );
                                            let cell = self.editor.board().get(pos);
                                            let text = match cell {
                                                CellValue::Definite(digit) => {
                                                    RichText::new(digit.as_str())
                                                        .color(definite_text_color)
                                                        .size(cell_size * 0.8)
                                                }
                                                CellValue::Notes(notes) => {
                                                    RichText::new(notes.to_string())
                                                        .color(note_text_color)
                                                        .size(cell_size * 0.25)
                                                }
                                                CellValue::Empty => RichText::new(""),
                                            };

                                            let mut button =
                                                Button::new(text).min_size(Vec2::splat(cell_size));
                                            if self.editor.selection() == Some(pos) {
                                                button = button.fill(selected_bg_color);
                                            } else {
                                                button = button.fill(bg_color);
                                            }

                                            let button = ui.add(button);
                                            let border = if self.editor.selection() == Some(pos) {
                                                selected_border
                                            } else {
                                                thin_border
                                            };
                                            ui.painter().rect_stroke(
                                                button.rect,
                                                0.0,
                                                border,
                                                StrokeKind::Inside,
                                            );
                                            if button.clicked() {
                                                self.editor.on_cell_tapped(pos);
                                            }
                                        }
                                        ui.end_row();
                                    }
                                });
                        ui.painter().rect_stroke(
                            grid.response.rect,
                            0.0,
                            thick_border,
                            StrokeKind::Inside,
                        );
                    }
                    ui.end_row();
                }
            });
    }

    fn draw_tool_panel(&mut self, ui: &mut Ui) {
        let style = Arc::clone(ui.style());
        let visuals = &style.visuals;
        let armed_bg_color = visuals.selection.bg_fill;
        let bg_color = visuals.widgets.inactive.bg_fill;

        let x_padding = 5.0;
        let y_padding = 5.0;
        let avail = ui.available_size();
        let button_size = f32::min(
            (avail.x - 4.0 * x_padding) / 5.0,
            (avail.y - y_padding) / 2.0,
        );

        let tool = self.editor.tool_state();
        let armed_digit = match tool {
            ToolState::Digit(digit) | ToolState::Notes(Some(digit)) => Some(digit),
            ToolState::None | ToolState::Notes(None) => None,
        };

        Grid::new(ui.id().with("tool_panel"))
            .spacing((x_padding, y_padding))
            .show(ui, |ui| {
                for (row, buttons) in [&Digit::ALL[..5], &Digit::ALL[5..]].into_iter().enumerate() {
                    for digit in buttons {
                        let text = RichText::new(digit.as_str()).size(button_size * 0.8);
                        let mut button = Button::new(text).min_size(Vec2::splat(button_size));
                        button = if armed_digit == Some(*digit) {
                            button.fill(armed_bg_color)
                        } else {
                            button.fill(bg_color)
                        };
                        if ui.add(button).on_hover_text("Write digit").clicked() {
                            self.editor.on_tool_button_tapped(ToolButton::Digit(*digit));
                        }
                    }
                    if row == 1 {
                        let text = RichText::new("N").size(button_size * 0.8);
                        let mut button = Button::new(text).min_size(Vec2::splat(button_size));
                        button = if tool.is_notes() {
                            button.fill(armed_bg_color)
                        } else {
                            button.fill(bg_color)
                        };
                        if ui.add(button).on_hover_text("Write notes").clicked() {
                            self.editor.on_tool_button_tapped(ToolButton::Notes);
                        }
                    }
                    ui.end_row();
                }
            });
    }
}
