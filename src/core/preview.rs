//! Read-only preview projection of the resume document
//!
//! `ResumePreview::project` is a pure function of the current [`Resume`];
//! both the on-screen preview and the plain-text export render from it, so
//! the two can never disagree about which lines appear.

use crate::core::resume::{Resume, SkillCategory};

/// Everything the preview shows, with all conditional lines already decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumePreview {
    pub name: String,
    /// Always three lines: "email | phone", location, "linkedin | github".
    /// Empty fields keep their slot.
    pub contact_lines: Vec<String>,
    /// Present only when the summary string is non-empty (no trimming).
    pub summary: Option<String>,
    /// The education section always renders, even when empty.
    pub education: Vec<EducationView>,
    /// One line per category with at least one non-blank entry, in fixed
    /// category order.
    pub skill_lines: Vec<SkillLine>,
    /// Empty when the project list is empty; the section is then omitted.
    pub projects: Vec<ProjectView>,
    /// Empty when the experience list is empty; the section is then omitted.
    pub experience: Vec<ExperienceView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationView {
    pub degree: String,
    /// "{institution}, {location}"
    pub institution_line: String,
    pub graduation_date: String,
    /// "GPA: {gpa}" when gpa is non-empty.
    pub gpa_line: Option<String>,
    /// Joined course list when non-empty.
    pub coursework: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLine {
    pub label: &'static str,
    /// Non-blank entries joined with ", ".
    pub entries: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    pub title: String,
    pub link: Option<String>,
    pub description: String,
    /// Non-blank technologies joined with ", ", when any remain.
    pub technologies: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceView {
    pub title: String,
    /// "{company}, {location}"
    pub company_line: String,
    /// "{start} - {end}"
    pub date_range: String,
    /// All bullets, original order, none filtered.
    pub bullets: Vec<String>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Join the non-blank entries of a list, or None when all are blank.
fn joined_non_blank(items: &[String]) -> Option<String> {
    let kept: Vec<&str> = items
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(", "))
    }
}

impl ResumePreview {
    /// Derive the projection from the current document state.
    pub fn project(resume: &Resume) -> Self {
        let personal = &resume.personal;

        let contact_lines = vec![
            format!("{} | {}", personal.email, personal.phone),
            personal.location.clone(),
            format!("{} | {}", personal.linkedin, personal.github),
        ];

        let education = resume
            .education
            .iter()
            .map(|edu| EducationView {
                degree: edu.degree.clone(),
                institution_line: format!("{}, {}", edu.institution, edu.location),
                graduation_date: edu.graduation_date.clone(),
                gpa_line: non_empty(&edu.gpa).map(|gpa| format!("GPA: {gpa}")),
                coursework: if edu.relevant_courses.is_empty() {
                    None
                } else {
                    Some(edu.relevant_courses.join(", "))
                },
            })
            .collect();

        let skill_lines = SkillCategory::ALL
            .iter()
            .filter_map(|&category| {
                joined_non_blank(resume.skills.list(category)).map(|entries| SkillLine {
                    label: category.label(),
                    entries,
                })
            })
            .collect();

        let projects = resume
            .projects
            .iter()
            .map(|project| ProjectView {
                title: project.title.clone(),
                link: non_empty(&project.link),
                description: project.description.clone(),
                technologies: joined_non_blank(&project.technologies),
            })
            .collect();

        let experience = resume
            .experience
            .iter()
            .map(|exp| ExperienceView {
                title: exp.title.clone(),
                company_line: format!("{}, {}", exp.company, exp.location),
                date_range: format!("{} - {}", exp.start_date, exp.end_date),
                bullets: exp.description.clone(),
            })
            .collect();

        Self {
            name: personal.full_name.clone(),
            contact_lines,
            summary: non_empty(&personal.summary),
            education,
            skill_lines,
            projects,
            experience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resume::{EducationField, PersonalField, ProjectField, SkillCategory};

    #[test]
    fn test_gpa_line_omitted_when_empty() {
        let mut resume = Resume::sample();
        let id = resume.education[0].id;

        resume.set_education(id, EducationField::Gpa, String::new());
        let preview = ResumePreview::project(&resume);
        assert_eq!(preview.education[0].gpa_line, None);

        resume.set_education(id, EducationField::Gpa, "3.9".to_string());
        let preview = ResumePreview::project(&resume);
        assert_eq!(preview.education[0].gpa_line, Some("GPA: 3.9".to_string()));
    }

    #[test]
    fn test_all_blank_skill_category_is_omitted() {
        let mut resume = Resume::new();
        resume.add_skill(SkillCategory::Tools);
        resume.add_skill(SkillCategory::Tools);
        resume.add_skill(SkillCategory::Backend);
        resume.set_skill(SkillCategory::Backend, 0, "Axum".to_string());

        let preview = ResumePreview::project(&resume);
        let labels: Vec<_> = preview.skill_lines.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Backend"]);
    }

    #[test]
    fn test_blank_skills_filtered_from_rendered_line() {
        let mut resume = Resume::new();
        resume.add_skill(SkillCategory::Programming);
        resume.set_skill(SkillCategory::Programming, 0, "Rust".to_string());
        resume.add_skill(SkillCategory::Programming);
        resume.add_skill(SkillCategory::Programming);
        resume.set_skill(SkillCategory::Programming, 2, "Go".to_string());

        let preview = ResumePreview::project(&resume);
        assert_eq!(preview.skill_lines[0].entries, "Rust, Go");
    }

    #[test]
    fn test_skill_categories_keep_fixed_order() {
        let preview = ResumePreview::project(&Resume::sample());
        let labels: Vec<_> = preview.skill_lines.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![
                "Programming",
                "Backend",
                "Databases",
                "Cloud & DevOps",
                "CS Concepts",
                "Tools",
                "Soft Skills"
            ]
        );
    }

    #[test]
    fn test_empty_email_keeps_its_slot_in_contact_line() {
        let mut resume = Resume::sample();
        resume.set_personal(PersonalField::Email, String::new());

        let preview = ResumePreview::project(&resume);
        assert_eq!(preview.contact_lines[0], " | +1 (555) 123-4567");
    }

    #[test]
    fn test_summary_renders_only_when_non_empty() {
        let mut resume = Resume::sample();
        resume.set_personal(PersonalField::Summary, String::new());
        assert_eq!(ResumePreview::project(&resume).summary, None);

        // A whitespace-only summary still counts as present; no trimming.
        resume.set_personal(PersonalField::Summary, " ".to_string());
        assert_eq!(
            ResumePreview::project(&resume).summary,
            Some(" ".to_string())
        );
    }

    #[test]
    fn test_new_project_appears_after_existing_with_absent_sublines() {
        let mut resume = Resume::sample();
        resume.projects.truncate(1);
        assert_eq!(resume.projects[0].title, "E-Commerce Web Application");

        let id = resume.add_project();
        resume.set_project(id, ProjectField::Title("Portfolio Site".to_string()));

        let preview = ResumePreview::project(&resume);
        assert_eq!(preview.projects.len(), 2);
        assert_eq!(preview.projects[0].title, "E-Commerce Web Application");
        assert_eq!(preview.projects[1].title, "Portfolio Site");
        assert_eq!(preview.projects[1].link, None);
        assert_eq!(preview.projects[1].description, "");
        assert_eq!(preview.projects[1].technologies, None);
    }

    #[test]
    fn test_projects_section_empty_when_no_projects() {
        let resume = Resume::new();
        let preview = ResumePreview::project(&resume);
        assert!(preview.projects.is_empty());
        assert!(preview.experience.is_empty());
        // Education section still renders, just with no entries.
        assert!(preview.education.is_empty());
    }

    #[test]
    fn test_experience_bullets_kept_in_order_unfiltered() {
        let preview = ResumePreview::project(&Resume::sample());
        let exp = &preview.experience[0];
        assert_eq!(exp.company_line, "TechStart Inc., San Francisco, CA");
        assert_eq!(exp.date_range, "Jun 2023 - Aug 2023");
        assert_eq!(exp.bullets.len(), 3);
        assert!(exp.bullets[0].starts_with("Developed and maintained"));
    }
}
