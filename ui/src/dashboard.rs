//! Dashboard derivations: pure functions from fetched collections to labeled
//! counts. Re-run on every selector change; nothing here touches the network.

use std::collections::HashMap;

use api::{Project, ProjectTechnology, ProjectTheme, Technology, Theme};

/// One bar of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: i64,
}

fn sorted(slices: impl IntoIterator<Item = (String, i64)>) -> Vec<Slice> {
    let mut slices: Vec<Slice> = slices
        .into_iter()
        .map(|(label, value)| Slice { label, value })
        .collect();
    // Stable presentation: biggest first, ties alphabetical.
    slices.sort_by(|a, b| b.value.cmp(&a.value).then(a.label.cmp(&b.label)));
    slices
}

fn technology_name(technologies: &[Technology], id: i64) -> String {
    technologies
        .iter()
        .find(|t| t.technology_id == id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn theme_name(themes: &[Theme], id: i64) -> String {
    themes
        .iter()
        .find(|t| t.theme_id == id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Number of projects tagged with each technology.
pub fn projects_per_technology(
    rows: &[ProjectTechnology],
    technologies: &[Technology],
) -> Vec<Slice> {
    let mut counts: HashMap<i64, i64> = HashMap::new();
    for row in rows {
        *counts.entry(row.technology_id).or_default() += 1;
    }
    sorted(
        counts
            .into_iter()
            .map(|(id, n)| (technology_name(technologies, id), n)),
    )
}

/// Number of projects tagged with each theme.
pub fn projects_per_theme(rows: &[ProjectTheme], themes: &[Theme]) -> Vec<Slice> {
    let mut counts: HashMap<i64, i64> = HashMap::new();
    for row in rows {
        *counts.entry(row.theme_id).or_default() += 1;
    }
    sorted(counts.into_iter().map(|(id, n)| (theme_name(themes, id), n)))
}

/// Sum of each project's involved-student count, grouped by theme.
pub fn students_by_theme(
    projects: &[Project],
    rows: &[ProjectTheme],
    themes: &[Theme],
) -> Vec<Slice> {
    let mut counts: HashMap<i64, i64> = HashMap::new();
    for project in projects {
        for row in rows {
            if row.project_id == Some(project.project_id) {
                *counts.entry(row.theme_id).or_default() += project.students_involved_count;
            }
        }
    }
    sorted(counts.into_iter().map(|(id, n)| (theme_name(themes, id), n)))
}

/// Number of projects in each lifecycle status.
pub fn projects_per_status(projects: &[Project]) -> Vec<Slice> {
    let mut counts: HashMap<&'static str, i64> = HashMap::new();
    for project in projects {
        *counts.entry(project.status.as_str()).or_default() += 1;
    }
    sorted(counts.into_iter().map(|(s, n)| (s.to_string(), n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ProjectStatus;

    fn tech(id: i64, name: &str) -> Technology {
        Technology {
            technology_id: id,
            name: name.to_string(),
        }
    }

    fn theme(id: i64, name: &str) -> Theme {
        Theme {
            theme_id: id,
            name: name.to_string(),
        }
    }

    fn project(id: i64, status: ProjectStatus, students: i64) -> Project {
        Project {
            project_id: id,
            owner_id: None,
            name: format!("p{id}"),
            description: String::new(),
            budget: "0.00".to_string(),
            status,
            students_involved_count: students,
            start_date: String::new(),
            end_date: String::new(),
            github_link: None,
        }
    }

    fn pt(project_id: i64, technology_id: i64) -> ProjectTechnology {
        ProjectTechnology {
            project_id: Some(project_id),
            technology_id,
        }
    }

    fn pth(project_id: i64, theme_id: i64) -> ProjectTheme {
        ProjectTheme {
            project_id: Some(project_id),
            theme_id,
        }
    }

    #[test]
    fn test_projects_per_technology_counts_and_sorts() {
        let rows = vec![pt(1, 1), pt(2, 1), pt(2, 2)];
        let technologies = vec![tech(1, "Python"), tech(2, "Go")];

        let slices = projects_per_technology(&rows, &technologies);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Python");
        assert_eq!(slices[0].value, 2);
        assert_eq!(slices[1].label, "Go");
    }

    #[test]
    fn test_unknown_reference_id_labels_unknown() {
        let rows = vec![pt(1, 99)];
        let slices = projects_per_technology(&rows, &[tech(1, "Python")]);
        assert_eq!(slices[0].label, "Unknown");
    }

    #[test]
    fn test_students_by_theme_sums_involved_counts() {
        let projects = vec![
            project(1, ProjectStatus::Ongoing, 3),
            project(2, ProjectStatus::Proposed, 5),
        ];
        let rows = vec![pth(1, 4), pth(2, 4), pth(2, 6)];
        let themes = vec![theme(4, "IoT"), theme(6, "ML")];

        let slices = students_by_theme(&projects, &rows, &themes);
        assert_eq!(slices[0].label, "IoT");
        assert_eq!(slices[0].value, 8);
        assert_eq!(slices[1].label, "ML");
        assert_eq!(slices[1].value, 5);
    }

    #[test]
    fn test_projects_per_status() {
        let projects = vec![
            project(1, ProjectStatus::Ongoing, 0),
            project(2, ProjectStatus::Ongoing, 0),
            project(3, ProjectStatus::Completed, 0),
        ];
        let slices = projects_per_status(&projects);
        assert_eq!(slices[0].label, "Ongoing");
        assert_eq!(slices[0].value, 2);
        assert_eq!(slices[1].label, "Completed");
    }

    #[test]
    fn test_empty_inputs_yield_empty_charts() {
        assert!(projects_per_theme(&[], &[]).is_empty());
        assert!(projects_per_status(&[]).is_empty());
    }
}
