//! Client-side filter predicates for the directory screens.
//!
//! Filtering is pure and synchronous over collections that are already in
//! memory; changing a filter never causes a network request. Categories
//! combine as a conjunction; a multi-select category matches when any of its
//! selected ids matches (disjunction within the category). An empty category
//! matches everything.

use api::{Faculty, Project, ProjectStatus, Student};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn any_of(selected: &[i64], record_ids: &[i64]) -> bool {
    selected.is_empty() || selected.iter().any(|id| record_ids.contains(id))
}

/// Student directory filters: name and USN substring, exact department,
/// any-of technologies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentFilter {
    pub name: String,
    pub usn: String,
    pub department_id: Option<i64>,
    pub technology_ids: Vec<i64>,
}

impl StudentFilter {
    pub fn matches(&self, student: &Student, technology_ids: &[i64]) -> bool {
        contains_ci(&student.name, &self.name)
            && contains_ci(&student.usn, &self.usn)
            && self
                .department_id
                .map_or(true, |dept| student.department_id == dept)
            && any_of(&self.technology_ids, technology_ids)
    }

    pub fn clear(&mut self) {
        *self = StudentFilter::default();
    }
}

/// Faculty directory filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacultyFilter {
    pub name: String,
    pub department_id: Option<i64>,
    pub technology_ids: Vec<i64>,
}

impl FacultyFilter {
    pub fn matches(&self, faculty: &Faculty, technology_ids: &[i64]) -> bool {
        contains_ci(&faculty.name, &self.name)
            && self
                .department_id
                .map_or(true, |dept| faculty.department_id == dept)
            && any_of(&self.technology_ids, technology_ids)
    }

    pub fn clear(&mut self) {
        *self = FacultyFilter::default();
    }
}

/// Project list filters: title substring, exact status, any-of technologies
/// and themes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectFilter {
    pub title: String,
    pub status: Option<ProjectStatus>,
    pub technology_ids: Vec<i64>,
    pub theme_ids: Vec<i64>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project, technology_ids: &[i64], theme_ids: &[i64]) -> bool {
        contains_ci(&project.name, &self.title)
            && self.status.map_or(true, |status| project.status == status)
            && any_of(&self.technology_ids, technology_ids)
            && any_of(&self.theme_ids, theme_ids)
    }

    pub fn clear(&mut self) {
        *self = ProjectFilter::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, usn: &str, department_id: i64) -> Student {
        Student {
            student_id: 1,
            user_id: Some(1),
            name: name.to_string(),
            usn: usn.to_string(),
            department_id,
            cgpa: 8.0,
            personal_email: String::new(),
            phone_no: String::new(),
            linkedin_profile: None,
            github_profile: None,
            image: None,
        }
    }

    fn project(name: &str, status: ProjectStatus) -> Project {
        Project {
            project_id: 1,
            owner_id: Some(7),
            name: name.to_string(),
            description: String::new(),
            budget: "0.00".to_string(),
            status,
            students_involved_count: 0,
            start_date: String::new(),
            end_date: String::new(),
            github_link: None,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = StudentFilter::default();
        assert!(filter.matches(&student("Asha", "1RV21CS001", 2), &[]));
    }

    #[test]
    fn test_name_match_is_case_insensitive_substring() {
        let filter = StudentFilter {
            name: "sha".to_string(),
            ..Default::default()
        };
        assert!(filter.matches(&student("Asha", "1RV21CS001", 2), &[]));
        assert!(!filter.matches(&student("Ravi", "1RV21CS002", 2), &[]));
    }

    #[test]
    fn test_categories_combine_as_conjunction() {
        let filter = StudentFilter {
            name: "a".to_string(),
            department_id: Some(2),
            technology_ids: vec![5],
            ..Default::default()
        };
        // Name and department match, technology does not: excluded.
        assert!(!filter.matches(&student("Asha", "1RV21CS001", 2), &[3]));
        // All three match: included.
        assert!(filter.matches(&student("Asha", "1RV21CS001", 2), &[5, 3]));
    }

    #[test]
    fn test_multi_select_is_disjunction_within_category() {
        let filter = StudentFilter {
            technology_ids: vec![5, 9],
            ..Default::default()
        };
        assert!(filter.matches(&student("Asha", "1RV21CS001", 2), &[9]));
        assert!(!filter.matches(&student("Asha", "1RV21CS001", 2), &[1, 2]));
    }

    #[test]
    fn test_filtered_count_never_exceeds_total() {
        let students = vec![
            student("Asha", "1RV21CS001", 2),
            student("Ravi", "1RV21CS002", 3),
            student("Maya", "1RV21EC003", 2),
        ];
        let filter = StudentFilter {
            department_id: Some(2),
            ..Default::default()
        };
        let shown = students.iter().filter(|s| filter.matches(s, &[])).count();
        assert!(shown <= students.len());
        assert_eq!(shown, 2);
    }

    #[test]
    fn test_project_filter_status_and_theme() {
        let filter = ProjectFilter {
            status: Some(ProjectStatus::Ongoing),
            theme_ids: vec![4],
            ..Default::default()
        };
        assert!(filter.matches(&project("Robo", ProjectStatus::Ongoing), &[], &[4]));
        assert!(!filter.matches(&project("Robo", ProjectStatus::Proposed), &[], &[4]));
        assert!(!filter.matches(&project("Robo", ProjectStatus::Ongoing), &[], &[1]));
    }

    #[test]
    fn test_clear_resets_all_categories() {
        let mut filter = ProjectFilter {
            title: "robo".to_string(),
            status: Some(ProjectStatus::Completed),
            technology_ids: vec![1],
            theme_ids: vec![2],
        };
        filter.clear();
        assert_eq!(filter, ProjectFilter::default());
    }
}
