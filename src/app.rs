//! Main application state and UI coordination

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::export;
use crate::core::preview::ResumePreview;
use crate::core::resume::Resume;
use crate::ui::{form::FormPanel, preview::PreviewPanel};

/// View mode for the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Form,
    Preview,
    #[default]
    Split,
}

/// Main application state
pub struct CvForgeApp {
    /// The resume document, the single source of truth
    pub resume: Resume,
    /// Application configuration
    pub config: AppConfig,
    /// Current view mode
    pub view_mode: ViewMode,
}

impl CvForgeApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_default();

        Self {
            resume: Resume::sample(),
            config,
            view_mode: ViewMode::Split,
        }
    }

    /// Export the current preview through the host environment.
    ///
    /// Fire-and-forget from the document's point of view; only the export
    /// directory is remembered for the next dialog.
    pub fn export_resume(&mut self) {
        let preview = ResumePreview::project(&self.resume);
        if let Some(path) = export::export_resume(&preview, self.config.last_export_dir.as_deref())
        {
            self.config.set_last_export_dir(&path);
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save config: {e:#}");
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Export Resume...").clicked() {
                        self.export_resume();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui
                        .selectable_label(self.view_mode == ViewMode::Form, "Form Only")
                        .clicked()
                    {
                        self.view_mode = ViewMode::Form;
                        ui.close();
                    }
                    if ui
                        .selectable_label(self.view_mode == ViewMode::Preview, "Preview Only")
                        .clicked()
                    {
                        self.view_mode = ViewMode::Preview;
                        ui.close();
                    }
                    if ui
                        .selectable_label(self.view_mode == ViewMode::Split, "Split View")
                        .clicked()
                    {
                        self.view_mode = ViewMode::Split;
                        ui.close();
                    }
                });
            });
        });
    }
}

impl eframe::App for CvForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        let mut export_requested = false;
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::E) {
                export_requested = true;
            }
        });
        if export_requested {
            self.export_resume();
        }

        // Render menu bar
        self.render_menu_bar(ctx);

        // The projection is cheap to recompute; derive it fresh every frame
        // so the preview can never lag behind an edit.
        let font_size = self.config.ui.preview_font_size;

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.view_mode {
                ViewMode::Form => {
                    FormPanel::show(ui, &mut self.resume);
                }
                ViewMode::Preview => {
                    let preview = ResumePreview::project(&self.resume);
                    PreviewPanel::show(ui, &preview, font_size);
                }
                ViewMode::Split => {
                    // Split view: form on left, preview on right
                    let available_width = ui.available_width();
                    ui.horizontal(|ui| {
                        ui.set_min_width(available_width);

                        // Form panel
                        ui.vertical(|ui| {
                            ui.set_width(available_width / 2.0 - 4.0);
                            FormPanel::show(ui, &mut self.resume);
                        });

                        ui.separator();

                        // Preview panel, projected after this frame's edits
                        ui.vertical(|ui| {
                            ui.set_width(available_width / 2.0 - 4.0);
                            let preview = ResumePreview::project(&self.resume);
                            PreviewPanel::show(ui, &preview, font_size);
                        });
                    });
                }
            }
        });
    }
}
