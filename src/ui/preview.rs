//! Resume preview panel
//!
//! Renders the preview projection in a plain, ATS-style layout: centered
//! header, uppercase underlined section titles, no decoration the print
//! path would have to reproduce.

use eframe::egui;

use crate::core::preview::ResumePreview;

/// Resume preview panel
pub struct PreviewPanel;

impl PreviewPanel {
    /// Show the preview panel
    pub fn show(ui: &mut egui::Ui, preview: &ResumePreview, font_size: f32) {
        egui::ScrollArea::vertical()
            .id_salt("preview_scroll")
            .show(ui, |ui| {
                egui::Frame::default()
                    .fill(egui::Color32::WHITE)
                    .inner_margin(egui::Margin::same(24))
                    .show(ui, |ui| {
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_gray(40));
                        Self::header(ui, preview, font_size);
                        Self::body(ui, preview, font_size);
                    });
            });
    }

    fn header(ui: &mut egui::Ui, preview: &ResumePreview, font_size: f32) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&preview.name)
                    .size(font_size * 1.8)
                    .strong(),
            );
            for line in &preview.contact_lines {
                ui.label(egui::RichText::new(line).size(font_size));
            }
        });
        ui.add_space(12.0);
    }

    fn body(ui: &mut egui::Ui, preview: &ResumePreview, font_size: f32) {
        if let Some(summary) = &preview.summary {
            Self::section_title(ui, "PROFESSIONAL SUMMARY", font_size);
            ui.label(egui::RichText::new(summary).size(font_size));
            ui.add_space(10.0);
        }

        // Education renders even when empty; the title alone marks the slot.
        Self::section_title(ui, "EDUCATION", font_size);
        for edu in &preview.education {
            ui.label(egui::RichText::new(&edu.degree).size(font_size).strong());
            ui.label(egui::RichText::new(&edu.institution_line).size(font_size));
            ui.label(egui::RichText::new(&edu.graduation_date).size(font_size));
            if let Some(gpa) = &edu.gpa_line {
                ui.label(egui::RichText::new(gpa).size(font_size));
            }
            if let Some(courses) = &edu.coursework {
                ui.label(
                    egui::RichText::new(format!("Relevant Coursework: {courses}"))
                        .size(font_size),
                );
            }
            ui.add_space(6.0);
        }
        ui.add_space(4.0);

        if !preview.skill_lines.is_empty() {
            Self::section_title(ui, "SKILLS", font_size);
            for line in &preview.skill_lines {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!("• {}:", line.label))
                            .size(font_size)
                            .strong(),
                    );
                    ui.label(egui::RichText::new(&line.entries).size(font_size));
                });
            }
            ui.add_space(10.0);
        }

        if !preview.projects.is_empty() {
            Self::section_title(ui, "PROJECTS", font_size);
            for project in &preview.projects {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&project.title).size(font_size).strong());
                    if let Some(link) = &project.link {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(link).size(font_size * 0.85).weak(),
                                );
                            },
                        );
                    }
                });
                ui.label(egui::RichText::new(&project.description).size(font_size));
                if let Some(technologies) = &project.technologies {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new("Technologies:").size(font_size).strong(),
                        );
                        ui.label(egui::RichText::new(technologies).size(font_size));
                    });
                }
                ui.add_space(8.0);
            }
        }

        if !preview.experience.is_empty() {
            Self::section_title(ui, "EXPERIENCE", font_size);
            for exp in &preview.experience {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&exp.title).size(font_size).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&exp.date_range).size(font_size));
                    });
                });
                ui.label(egui::RichText::new(&exp.company_line).size(font_size));
                for bullet in &exp.bullets {
                    ui.label(egui::RichText::new(format!("• {bullet}")).size(font_size));
                }
                ui.add_space(8.0);
            }
        }
    }

    fn section_title(ui: &mut egui::Ui, title: &str, font_size: f32) {
        ui.label(
            egui::RichText::new(title)
                .size(font_size * 1.2)
                .strong(),
        );
        ui.separator();
        ui.add_space(4.0);
    }
}
