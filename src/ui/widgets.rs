//! Shared form widgets
//!
//! Thin wrappers over `egui::TextEdit` with the one contract the form cares
//! about: show the current value, hand back the new string when it changes.
//! Edits flow through the document's typed operations, so these return the
//! changed text instead of binding the model directly.

use eframe::egui;

/// Single-line input with a label above it. Returns the new value on change.
pub fn labeled_input(ui: &mut egui::Ui, label: &str, value: &str) -> Option<String> {
    ui.label(label);
    let mut text = value.to_string();
    let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(f32::INFINITY));
    response.changed().then_some(text)
}

/// Multi-line input with a label above it. Returns the new value on change.
pub fn labeled_text_area(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    rows: usize,
) -> Option<String> {
    ui.label(label);
    let mut text = value.to_string();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .desired_rows(rows)
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(text)
}

/// Bare single-line input with placeholder text. Returns the new value on change.
pub fn hinted_input(ui: &mut egui::Ui, hint: &str, value: &str) -> Option<String> {
    let mut text = value.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(text)
}

/// Bare multi-line input with placeholder text. Returns the new value on change.
pub fn hinted_text_area(ui: &mut egui::Ui, hint: &str, value: &str, rows: usize) -> Option<String> {
    let mut text = value.to_string();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .hint_text(hint)
            .desired_rows(rows)
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(text)
}

/// Section card: a framed group with a heading, like the form's cards.
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.heading(title);
            ui.separator();
            add_contents(ui)
        })
        .inner
}
