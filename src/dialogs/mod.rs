//! Parameter dialogs. At most one is open at a time, and while it is open
//! the main window does not take input.

mod alert;

pub use alert::Alert;

use eframe::egui;

use crate::command::Command;
use crate::error::InputError;

/// What the user did with a dialog this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// Still open, nothing to do
    Open,
    /// Apply button or Enter
    Apply,
    /// Window closed or Escape
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Resize,
    Brightness,
    Line,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResizeForm {
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrightnessForm {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineForm {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
    pub thickness: String,
}

/// An open dialog and the text typed into its fields so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Resize(ResizeForm),
    Brightness(BrightnessForm),
    Line(LineForm),
}

fn parse_field(field: &'static str, value: &str) -> Result<i32, InputError> {
    value.trim().parse().map_err(|_| InputError::NotANumber {
        field,
        value: value.to_owned(),
    })
}

impl ResizeForm {
    pub fn command(&self) -> Result<Command, InputError> {
        Ok(Command::Resize {
            width: parse_field("Width", &self.width)?,
            height: parse_field("Height", &self.height)?,
        })
    }
}

impl BrightnessForm {
    pub fn command(&self) -> Result<Command, InputError> {
        Ok(Command::AdjustBrightness {
            delta: parse_field("Brightness", &self.value)?,
        })
    }
}

impl LineForm {
    pub fn command(&self) -> Result<Command, InputError> {
        Ok(Command::DrawLine {
            from: (parse_field("Start X", &self.x1)?, parse_field("Start Y", &self.y1)?),
            to: (parse_field("End X", &self.x2)?, parse_field("End Y", &self.y2)?),
            thickness: parse_field("Thickness", &self.thickness)?,
        })
    }
}

impl Dialog {
    pub fn new(kind: DialogKind) -> Self {
        match kind {
            DialogKind::Resize => Dialog::Resize(ResizeForm::default()),
            DialogKind::Brightness => Dialog::Brightness(BrightnessForm::default()),
            DialogKind::Line => Dialog::Line(LineForm::default()),
        }
    }

    pub fn kind(&self) -> DialogKind {
        match self {
            Dialog::Resize(_) => DialogKind::Resize,
            Dialog::Brightness(_) => DialogKind::Brightness,
            Dialog::Line(_) => DialogKind::Line,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Resize(_) => "Resize",
            Dialog::Brightness(_) => "Adjust brightness",
            Dialog::Line(_) => "Draw line",
        }
    }

    /// Parses the fields into a command. Range checks happen when the
    /// command executes.
    pub fn command(&self) -> Result<Command, InputError> {
        match self {
            Dialog::Resize(form) => form.command(),
            Dialog::Brightness(form) => form.command(),
            Dialog::Line(form) => form.command(),
        }
    }

    /// Draws the dialog window. `interactive` is false while an alert is
    /// stacked on top of it.
    pub fn show(&mut self, ctx: &egui::Context, interactive: bool) -> DialogResult {
        let mut result = DialogResult::Open;
        let mut open = true;
        let title = self.title();

        egui::Window::new(title)
            .id(egui::Id::new("parameter_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .enabled(interactive)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("parameter_dialog_fields")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| match self {
                        Dialog::Resize(form) => {
                            field_row(ui, "Width:", &mut form.width);
                            field_row(ui, "Height:", &mut form.height);
                        }
                        Dialog::Brightness(form) => {
                            field_row(ui, "Brightness (0-100):", &mut form.value);
                        }
                        Dialog::Line(form) => {
                            field_row(ui, "Start X:", &mut form.x1);
                            field_row(ui, "Start Y:", &mut form.y1);
                            field_row(ui, "End X:", &mut form.x2);
                            field_row(ui, "End Y:", &mut form.y2);
                            field_row(ui, "Thickness:", &mut form.thickness);
                        }
                    });

                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Apply").clicked() {
                        result = DialogResult::Apply;
                    }
                });
            });

        if !open {
            return DialogResult::Cancel;
        }

        if interactive && result == DialogResult::Open {
            if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)) {
                result = DialogResult::Apply;
            }
            if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)) {
                result = DialogResult::Cancel;
            }
        }

        result
    }
}

fn field_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(120.0));
    ui.end_row();
}
