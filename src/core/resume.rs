//! The resume document and its mutation operations
//!
//! One `Resume` value is the single source of truth for the whole app.
//! Every edit goes through a typed operation on this struct; the preview
//! is derived from it each frame.

/// Identifier for a list entry (project, education, experience).
///
/// Generated from a per-document counter; unique within the document and
/// never reused after deletion.
pub type EntryId = u64;

/// Contact and summary fields. All free text, nothing validated.
#[derive(Debug, Clone)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

/// Selects a `PersonalInfo` field for [`Resume::set_personal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    Summary,
}

#[derive(Debug, Clone)]
pub struct EducationEntry {
    pub id: EntryId,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
    pub gpa: String,
    /// Rendered in the preview; no form input yet.
    pub relevant_courses: Vec<String>,
}

/// Selects an `EducationEntry` field for [`Resume::set_education`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Degree,
    Institution,
    Location,
    GraduationDate,
    Gpa,
}

/// The fixed skill categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Programming,
    Backend,
    Databases,
    CloudDevOps,
    CsConcepts,
    Tools,
    Soft,
}

impl SkillCategory {
    /// All categories, in the order the preview renders them.
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Programming,
        SkillCategory::Backend,
        SkillCategory::Databases,
        SkillCategory::CloudDevOps,
        SkillCategory::CsConcepts,
        SkillCategory::Tools,
        SkillCategory::Soft,
    ];

    /// Human-readable label shown in both the form and the preview.
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::Backend => "Backend",
            SkillCategory::Databases => "Databases",
            SkillCategory::CloudDevOps => "Cloud & DevOps",
            SkillCategory::CsConcepts => "CS Concepts",
            SkillCategory::Tools => "Tools",
            SkillCategory::Soft => "Soft Skills",
        }
    }

    /// Placeholder text for a new entry's input field.
    pub fn placeholder(self) -> &'static str {
        match self {
            SkillCategory::Programming => "Enter programming language",
            SkillCategory::Backend => "Enter backend technology",
            SkillCategory::Databases => "Enter database",
            SkillCategory::CloudDevOps => "Enter cloud/DevOps tool",
            SkillCategory::CsConcepts => "Enter CS concept",
            SkillCategory::Tools => "Enter tool",
            SkillCategory::Soft => "Enter soft skill",
        }
    }
}

/// One ordered list of skill names per category.
///
/// Entries may be blank while the user is still typing; the preview filters
/// blanks out, the form keeps them until explicitly removed.
#[derive(Debug, Clone, Default)]
pub struct Skills {
    pub programming: Vec<String>,
    pub backend: Vec<String>,
    pub databases: Vec<String>,
    pub cloud_dev_ops: Vec<String>,
    pub cs_concepts: Vec<String>,
    pub tools: Vec<String>,
    pub soft: Vec<String>,
}

impl Skills {
    pub fn list(&self, category: SkillCategory) -> &Vec<String> {
        match category {
            SkillCategory::Programming => &self.programming,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Databases => &self.databases,
            SkillCategory::CloudDevOps => &self.cloud_dev_ops,
            SkillCategory::CsConcepts => &self.cs_concepts,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Soft => &self.soft,
        }
    }

    pub fn list_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Programming => &mut self.programming,
            SkillCategory::Backend => &mut self.backend,
            SkillCategory::Databases => &mut self.databases,
            SkillCategory::CloudDevOps => &mut self.cloud_dev_ops,
            SkillCategory::CsConcepts => &mut self.cs_concepts,
            SkillCategory::Tools => &mut self.tools,
            SkillCategory::Soft => &mut self.soft,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

/// One project edit, dispatched through a closed match instead of a
/// string-keyed field name.
#[derive(Debug, Clone)]
pub enum ProjectField {
    Title(String),
    Description(String),
    /// The raw comma-separated input; split on `", "` when applied.
    Technologies(String),
    Link(String),
}

#[derive(Debug, Clone)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Bullet points, rendered in order, never filtered.
    pub description: Vec<String>,
}

/// The whole in-memory document.
#[derive(Debug, Clone)]
pub struct Resume {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    next_id: EntryId,
}

/// Split a comma-separated technologies input on the exact `", "` separator.
///
/// Lossy on purpose: an element that itself contains `", "` cannot
/// round-trip, and input without the separator parses to a single-element
/// list. Matches the form's join/split contract.
pub fn split_technologies(input: &str) -> Vec<String> {
    input.split(", ").map(str::to_string).collect()
}

impl Resume {
    /// Empty document. Seed data comes from [`Resume::sample`].
    pub fn new() -> Self {
        Self {
            personal: PersonalInfo {
                full_name: String::new(),
                email: String::new(),
                phone: String::new(),
                location: String::new(),
                linkedin: String::new(),
                github: String::new(),
                summary: String::new(),
            },
            education: Vec::new(),
            skills: Skills::default(),
            projects: Vec::new(),
            experience: Vec::new(),
            next_id: 1,
        }
    }

    fn fresh_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace one personal-info field. Total; empty strings are accepted
    /// everywhere, including the email field.
    pub fn set_personal(&mut self, field: PersonalField, value: String) {
        let personal = &mut self.personal;
        match field {
            PersonalField::FullName => personal.full_name = value,
            PersonalField::Email => personal.email = value,
            PersonalField::Phone => personal.phone = value,
            PersonalField::Location => personal.location = value,
            PersonalField::Linkedin => personal.linkedin = value,
            PersonalField::Github => personal.github = value,
            PersonalField::Summary => personal.summary = value,
        }
    }

    /// Replace one field of the education entry with `id`. No-op when the
    /// id is absent.
    pub fn set_education(&mut self, id: EntryId, field: EducationField, value: String) {
        let Some(entry) = self.education.iter_mut().find(|e| e.id == id) else {
            return;
        };
        match field {
            EducationField::Degree => entry.degree = value,
            EducationField::Institution => entry.institution = value,
            EducationField::Location => entry.location = value,
            EducationField::GraduationDate => entry.graduation_date = value,
            EducationField::Gpa => entry.gpa = value,
        }
    }

    /// Append an empty skill entry to a category, ready for typing.
    pub fn add_skill(&mut self, category: SkillCategory) {
        self.skills.list_mut(category).push(String::new());
    }

    /// Replace the name of exactly one skill. Out-of-range index is a no-op.
    pub fn set_skill(&mut self, category: SkillCategory, index: usize, name: String) {
        if let Some(entry) = self.skills.list_mut(category).get_mut(index) {
            *entry = name;
        }
    }

    /// Remove exactly one skill, keeping the order of the rest. Out-of-range
    /// index is a no-op.
    pub fn remove_skill(&mut self, category: SkillCategory, index: usize) {
        let list = self.skills.list_mut(category);
        if index < list.len() {
            list.remove(index);
        }
    }

    /// Append a blank project and return its fresh id.
    pub fn add_project(&mut self) -> EntryId {
        let id = self.fresh_id();
        self.projects.push(Project {
            id,
            title: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            link: String::new(),
        });
        id
    }

    /// Apply one edit to the project with `id`. No-op when the id is absent.
    pub fn set_project(&mut self, id: EntryId, field: ProjectField) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return;
        };
        match field {
            ProjectField::Title(value) => project.title = value,
            ProjectField::Description(value) => project.description = value,
            ProjectField::Technologies(value) => {
                project.technologies = split_technologies(&value);
            }
            ProjectField::Link(value) => project.link = value,
        }
    }

    /// Remove the project with `id`. Other entries keep their ids and order.
    /// No-op when the id is absent.
    pub fn remove_project(&mut self, id: EntryId) {
        self.projects.retain(|p| p.id != id);
    }

    /// The seed document shown on startup.
    pub fn sample() -> Self {
        let mut resume = Self::new();

        resume.personal = PersonalInfo {
            full_name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            linkedin: "linkedin.com/in/sarahjohnson".to_string(),
            github: "github.com/sarahjohnson".to_string(),
            summary: "Recent Computer Science graduate with strong foundation in \
                      full-stack development and passion for creating user-friendly \
                      applications. Experienced in modern web technologies and eager \
                      to contribute to innovative software solutions."
                .to_string(),
        };

        let edu_id = resume.fresh_id();
        resume.education.push(EducationEntry {
            id: edu_id,
            degree: "Bachelor of Science in Computer Science".to_string(),
            institution: "University of California, Berkeley".to_string(),
            location: "Berkeley, CA".to_string(),
            graduation_date: "May 2024".to_string(),
            gpa: "3.7".to_string(),
            relevant_courses: vec![
                "Data Structures".to_string(),
                "Algorithms".to_string(),
                "Database Systems".to_string(),
                "Web Development".to_string(),
                "Software Engineering".to_string(),
            ],
        });

        resume.skills = Skills {
            programming: strings(&["Java", "Go", "Python", "JavaScript", "C", "C++"]),
            backend: strings(&["Flask", "Node.js", "REST APIs", "Kafka", "SQS"]),
            databases: strings(&["MySQL", "SQLite", "MongoDB", "DynamoDB"]),
            cloud_dev_ops: strings(&["AWS (EC2, S3)", "Git", "Docker (Basics)"]),
            cs_concepts: strings(&[
                "Scalable Systems",
                "Distributed Systems",
                "Caching",
                "Elasticache",
                "Elasticsearch",
                "Data Modeling",
                "System Design",
            ]),
            tools: strings(&["Postman", "VS Code", "Jupyter Notebook"]),
            soft: strings(&[
                "Problem Solving",
                "Communication",
                "Team Collaboration",
                "Eagerness to Learn",
            ]),
        };

        let p1 = resume.fresh_id();
        resume.projects.push(Project {
            id: p1,
            title: "E-Commerce Web Application".to_string(),
            description: "Built a full-stack e-commerce platform with user \
                          authentication, product catalog, shopping cart, and payment \
                          integration. Implemented responsive design and optimized for \
                          performance."
                .to_string(),
            technologies: strings(&["React", "Node.js", "MongoDB", "Express", "Stripe API"]),
            link: "github.com/sarahjohnson/ecommerce-app".to_string(),
        });
        let p2 = resume.fresh_id();
        resume.projects.push(Project {
            id: p2,
            title: "Task Management Dashboard".to_string(),
            description: "Developed a collaborative task management application with \
                          real-time updates, drag-and-drop functionality, and team \
                          collaboration features."
                .to_string(),
            technologies: strings(&["React", "TypeScript", "Firebase", "Material-UI"]),
            link: "github.com/sarahjohnson/task-dashboard".to_string(),
        });

        let exp_id = resume.fresh_id();
        resume.experience.push(ExperienceEntry {
            id: exp_id,
            title: "Software Development Intern".to_string(),
            company: "TechStart Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            start_date: "Jun 2023".to_string(),
            end_date: "Aug 2023".to_string(),
            description: strings(&[
                "Developed and maintained React components for the company's main web application",
                "Collaborated with senior developers to implement new features and fix bugs",
                "Participated in code reviews and agile development processes",
            ]),
        });

        resume
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::sample()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_project_assigns_unique_ids() {
        let mut resume = Resume::new();
        let a = resume.add_project();
        let b = resume.add_project();
        let c = resume.add_project();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(resume.projects.len(), 3);
    }

    #[test]
    fn test_remove_project_keeps_other_ids_and_order() {
        let mut resume = Resume::new();
        let a = resume.add_project();
        let b = resume.add_project();
        let c = resume.add_project();

        resume.remove_project(b);

        let ids: Vec<_> = resume.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_ids_are_not_reused_after_deletion() {
        let mut resume = Resume::new();
        let a = resume.add_project();
        resume.remove_project(a);
        let b = resume.add_project();
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_remove_sequence_size() {
        let mut resume = Resume::new();
        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(resume.add_project());
        }
        resume.remove_project(ids[1]);
        resume.remove_project(ids[3]);
        // Removing an already-removed id counts for nothing.
        resume.remove_project(ids[1]);
        assert_eq!(resume.projects.len(), 3);
    }

    #[test]
    fn test_set_project_missing_id_is_noop() {
        let mut resume = Resume::new();
        let id = resume.add_project();
        resume.set_project(id, ProjectField::Title("Kept".to_string()));

        resume.set_project(9999, ProjectField::Title("Ignored".to_string()));

        assert_eq!(resume.projects.len(), 1);
        assert_eq!(resume.projects[0].title, "Kept");
    }

    #[test]
    fn test_set_project_does_not_touch_other_entries() {
        let mut resume = Resume::new();
        let a = resume.add_project();
        let b = resume.add_project();
        resume.set_project(a, ProjectField::Title("First".to_string()));
        resume.set_project(b, ProjectField::Title("Second".to_string()));

        resume.set_project(b, ProjectField::Description("touched".to_string()));

        assert_eq!(resume.projects[0].title, "First");
        assert_eq!(resume.projects[0].description, "");
    }

    #[test]
    fn test_technologies_split_and_rejoin() {
        let mut resume = Resume::new();
        let id = resume.add_project();
        resume.set_project(
            id,
            ProjectField::Technologies("React, Node.js, MongoDB".to_string()),
        );

        let techs = &resume.projects[0].technologies;
        assert_eq!(techs, &vec!["React", "Node.js", "MongoDB"]);
        assert_eq!(techs.join(", "), "React, Node.js, MongoDB");
    }

    #[test]
    fn test_technologies_without_separator_is_single_element() {
        assert_eq!(split_technologies("React,Node.js"), vec!["React,Node.js"]);
        assert_eq!(split_technologies(""), vec![""]);
    }

    #[test]
    fn test_remove_skill_preserves_order_of_rest() {
        let mut resume = Resume::sample();
        resume.remove_skill(SkillCategory::Programming, 1); // "Go"
        assert_eq!(
            resume.skills.programming,
            vec!["Java", "Python", "JavaScript", "C", "C++"]
        );
    }

    #[test]
    fn test_skill_index_out_of_range_is_noop() {
        let mut resume = Resume::new();
        resume.add_skill(SkillCategory::Tools);
        resume.set_skill(SkillCategory::Tools, 5, "nope".to_string());
        resume.remove_skill(SkillCategory::Tools, 5);
        assert_eq!(resume.skills.tools, vec![""]);
    }

    #[test]
    fn test_set_skill_touches_exactly_one_entry() {
        let mut resume = Resume::sample();
        resume.set_skill(SkillCategory::Databases, 0, "PostgreSQL".to_string());
        assert_eq!(
            resume.skills.databases,
            vec!["PostgreSQL", "SQLite", "MongoDB", "DynamoDB"]
        );
    }

    #[test]
    fn test_set_education_missing_id_is_noop() {
        let mut resume = Resume::sample();
        let before = resume.education[0].degree.clone();
        resume.set_education(9999, EducationField::Degree, "Ignored".to_string());
        assert_eq!(resume.education[0].degree, before);
    }

    #[test]
    fn test_set_personal_accepts_empty_email() {
        let mut resume = Resume::sample();
        resume.set_personal(PersonalField::Email, String::new());
        assert_eq!(resume.personal.email, "");
    }
}
