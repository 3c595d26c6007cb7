//! Resume form panel
//!
//! One card per section. Widgets report changed text; the changes are
//! queued as typed operations and applied to the document after the
//! widgets have run, so nothing mutates the lists mid-iteration.

use eframe::egui;

use crate::core::resume::{
    EducationField, EntryId, PersonalField, ProjectField, Resume, SkillCategory,
};
use crate::ui::widgets;

/// Resume form panel
pub struct FormPanel;

impl FormPanel {
    /// Show the form panel
    pub fn show(ui: &mut egui::Ui, resume: &mut Resume) {
        egui::ScrollArea::vertical()
            .id_salt("form_scroll")
            .show(ui, |ui| {
                widgets::card(ui, "Personal Information", |ui| {
                    Self::personal_card(ui, resume);
                });
                ui.add_space(8.0);
                widgets::card(ui, "Education", |ui| {
                    Self::education_card(ui, resume);
                });
                ui.add_space(8.0);
                widgets::card(ui, "Skills", |ui| {
                    Self::skills_card(ui, resume);
                });
                ui.add_space(8.0);
                widgets::card(ui, "Projects", |ui| {
                    Self::projects_card(ui, resume);
                });
            });
    }

    fn personal_card(ui: &mut egui::Ui, resume: &mut Resume) {
        let fields = [
            (PersonalField::FullName, "Full Name"),
            (PersonalField::Email, "Email"),
            (PersonalField::Phone, "Phone"),
            (PersonalField::Location, "Location"),
            (PersonalField::Linkedin, "LinkedIn"),
            (PersonalField::Github, "GitHub"),
        ];

        let mut pending: Vec<(PersonalField, String)> = Vec::new();

        egui::Grid::new("personal_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for pair in fields.chunks(2) {
                    for &(field, label) in pair {
                        ui.vertical(|ui| {
                            let current = Self::personal_value(resume, field);
                            if let Some(value) = widgets::labeled_input(ui, label, current) {
                                pending.push((field, value));
                            }
                        });
                    }
                    ui.end_row();
                }
            });

        let summary = resume.personal.summary.clone();
        if let Some(value) = widgets::labeled_text_area(ui, "Professional Summary", &summary, 4) {
            pending.push((PersonalField::Summary, value));
        }

        for (field, value) in pending {
            resume.set_personal(field, value);
        }
    }

    fn personal_value(resume: &Resume, field: PersonalField) -> &str {
        let personal = &resume.personal;
        match field {
            PersonalField::FullName => &personal.full_name,
            PersonalField::Email => &personal.email,
            PersonalField::Phone => &personal.phone,
            PersonalField::Location => &personal.location,
            PersonalField::Linkedin => &personal.linkedin,
            PersonalField::Github => &personal.github,
            PersonalField::Summary => &personal.summary,
        }
    }

    fn education_card(ui: &mut egui::Ui, resume: &mut Resume) {
        let mut pending: Vec<(EntryId, EducationField, String)> = Vec::new();

        for entry in &resume.education {
            let fields = [
                (EducationField::Degree, "Degree", &entry.degree),
                (EducationField::Institution, "Institution", &entry.institution),
                (EducationField::Location, "Location", &entry.location),
                (
                    EducationField::GraduationDate,
                    "Graduation Date",
                    &entry.graduation_date,
                ),
                (EducationField::Gpa, "GPA", &entry.gpa),
            ];
            for (field, label, current) in fields {
                if let Some(value) = widgets::labeled_input(ui, label, current) {
                    pending.push((entry.id, field, value));
                }
            }
        }

        for (id, field, value) in pending {
            resume.set_education(id, field, value);
        }
    }

    fn skills_card(ui: &mut egui::Ui, resume: &mut Resume) {
        enum SkillEdit {
            Add(SkillCategory),
            Set(SkillCategory, usize, String),
            Remove(SkillCategory, usize),
        }

        let mut pending: Vec<SkillEdit> = Vec::new();

        for &category in SkillCategory::ALL.iter() {
            ui.horizontal(|ui| {
                ui.strong(category.label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Add").clicked() {
                        pending.push(SkillEdit::Add(category));
                    }
                });
            });

            for (index, name) in resume.skills.list(category).iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").clicked() {
                        pending.push(SkillEdit::Remove(category, index));
                    }
                    if let Some(value) = widgets::hinted_input(ui, category.placeholder(), name) {
                        pending.push(SkillEdit::Set(category, index, value));
                    }
                });
            }
            ui.add_space(6.0);
        }

        for edit in pending {
            match edit {
                SkillEdit::Add(category) => resume.add_skill(category),
                SkillEdit::Set(category, index, value) => resume.set_skill(category, index, value),
                SkillEdit::Remove(category, index) => resume.remove_skill(category, index),
            }
        }
    }

    fn projects_card(ui: &mut egui::Ui, resume: &mut Resume) {
        let mut pending: Vec<(EntryId, ProjectField)> = Vec::new();
        let mut removed: Option<EntryId> = None;
        let mut add_clicked = false;

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Add Project").clicked() {
                add_clicked = true;
            }
        });

        for project in &resume.projects {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").clicked() {
                        removed = Some(project.id);
                    }
                    if let Some(value) = widgets::hinted_input(ui, "Project Title", &project.title)
                    {
                        pending.push((project.id, ProjectField::Title(value)));
                    }
                });
                if let Some(value) =
                    widgets::hinted_text_area(ui, "Project description...", &project.description, 3)
                {
                    pending.push((project.id, ProjectField::Description(value)));
                }
                // The technologies list is edited as one comma-separated line
                // and re-split on every change.
                let joined = project.technologies.join(", ");
                if let Some(value) =
                    widgets::hinted_input(ui, "Technologies used (comma separated)", &joined)
                {
                    pending.push((project.id, ProjectField::Technologies(value)));
                }
                if let Some(value) =
                    widgets::hinted_input(ui, "Project link (GitHub, demo, etc.)", &project.link)
                {
                    pending.push((project.id, ProjectField::Link(value)));
                }
            });
            ui.add_space(6.0);
        }

        for (id, field) in pending {
            resume.set_project(id, field);
        }
        if let Some(id) = removed {
            resume.remove_project(id);
        }
        if add_clicked {
            resume.add_project();
        }
    }
}
