//! Plain-text export of the resume
//!
//! Renders the preview projection to an ATS-friendly text file, asks the
//! host for a destination via a save dialog, and hands the result to the
//! system's default opener so the user can print from there. Failures are
//! logged and swallowed; the document core never sees them.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::preview::ResumePreview;

/// Render the projection as plain text, one section per preview block.
///
/// Conditional lines follow the projection exactly; this function adds only
/// layout (headers, underlines, bullets).
pub fn render_text(preview: &ResumePreview) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", preview.name);
    for line in &preview.contact_lines {
        let _ = writeln!(out, "{line}");
    }

    if let Some(summary) = &preview.summary {
        section_header(&mut out, "PROFESSIONAL SUMMARY");
        let _ = writeln!(out, "{summary}");
    }

    section_header(&mut out, "EDUCATION");
    for edu in &preview.education {
        let _ = writeln!(out, "{}", edu.degree);
        let _ = writeln!(out, "{}", edu.institution_line);
        let _ = writeln!(out, "{}", edu.graduation_date);
        if let Some(gpa) = &edu.gpa_line {
            let _ = writeln!(out, "{gpa}");
        }
        if let Some(courses) = &edu.coursework {
            let _ = writeln!(out, "Relevant Coursework: {courses}");
        }
    }

    if !preview.skill_lines.is_empty() {
        section_header(&mut out, "SKILLS");
        for line in &preview.skill_lines {
            let _ = writeln!(out, "{}: {}", line.label, line.entries);
        }
    }

    if !preview.projects.is_empty() {
        section_header(&mut out, "PROJECTS");
        for project in &preview.projects {
            let _ = writeln!(out, "{}", project.title);
            if let Some(link) = &project.link {
                let _ = writeln!(out, "{link}");
            }
            let _ = writeln!(out, "{}", project.description);
            if let Some(technologies) = &project.technologies {
                let _ = writeln!(out, "Technologies: {technologies}");
            }
        }
    }

    if !preview.experience.is_empty() {
        section_header(&mut out, "EXPERIENCE");
        for exp in &preview.experience {
            let _ = writeln!(out, "{}", exp.title);
            let _ = writeln!(out, "{}", exp.company_line);
            let _ = writeln!(out, "{}", exp.date_range);
            for bullet in &exp.bullets {
                let _ = writeln!(out, "- {bullet}");
            }
        }
    }

    out
}

fn section_header(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
}

/// Suggested file name for the save dialog, derived from the resume name.
pub fn suggested_file_name(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if slug.is_empty() {
        "resume.txt".to_string()
    } else {
        format!("{slug}_resume.txt")
    }
}

fn write_export(preview: &ResumePreview, path: &Path) -> Result<()> {
    std::fs::write(path, render_text(preview))
        .with_context(|| format!("Failed to write export: {}", path.display()))?;
    tracing::info!("Exported resume to: {}", path.display());
    Ok(())
}

/// Export the current projection through the host environment.
///
/// Opens a save dialog (starting from `start_dir` if set), writes the text,
/// and hands the file to the system opener. Returns the chosen path so the
/// caller can remember the directory; `None` when the user cancels or the
/// export fails. Errors never propagate past this function.
pub fn export_resume(preview: &ResumePreview, start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_file_name(suggested_file_name(&preview.name))
        .add_filter("Text", &["txt"]);
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }

    let Some(path) = dialog.save_file() else {
        tracing::info!("Export cancelled");
        return None;
    };

    if let Err(e) = write_export(preview, &path) {
        tracing::error!("Export failed: {e:#}");
        return None;
    }

    if let Err(e) = open::that(&path) {
        // The file is on disk either way; the opener is best-effort.
        tracing::warn!("Could not open exported file: {e}");
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resume::{EducationField, PersonalField, Resume};

    #[test]
    fn test_render_contains_sections_in_order() {
        let text = render_text(&ResumePreview::project(&Resume::sample()));

        let summary = text.find("PROFESSIONAL SUMMARY").unwrap();
        let education = text.find("EDUCATION").unwrap();
        let skills = text.find("SKILLS").unwrap();
        let projects = text.find("PROJECTS").unwrap();
        let experience = text.find("EXPERIENCE").unwrap();
        assert!(summary < education);
        assert!(education < skills);
        assert!(skills < projects);
        assert!(projects < experience);

        assert!(text.starts_with("Sarah Johnson\n"));
        assert!(text.contains("GPA: 3.7"));
        assert!(text.contains("- Participated in code reviews"));
    }

    #[test]
    fn test_render_omits_conditional_lines() {
        let mut resume = Resume::sample();
        resume.set_personal(PersonalField::Summary, String::new());
        let edu_id = resume.education[0].id;
        resume.set_education(edu_id, EducationField::Gpa, String::new());
        resume.projects.clear();

        let text = render_text(&ResumePreview::project(&resume));
        assert!(!text.contains("PROFESSIONAL SUMMARY"));
        assert!(!text.contains("GPA:"));
        assert!(!text.contains("PROJECTS"));
        // The education section header stays even with conditional lines gone.
        assert!(text.contains("EDUCATION"));
    }

    #[test]
    fn test_empty_document_still_renders_header_block() {
        let text = render_text(&ResumePreview::project(&Resume::new()));
        // Name line plus three contact slots, all blank but present.
        assert!(text.starts_with("\n | \n\n | \n"));
        assert!(text.contains("EDUCATION"));
        assert!(!text.contains("SKILLS"));
    }

    #[test]
    fn test_suggested_file_name() {
        assert_eq!(suggested_file_name("Sarah Johnson"), "Sarah_Johnson_resume.txt");
        assert_eq!(suggested_file_name(""), "resume.txt");
    }
}
