//! # Canonical data model
//!
//! Defines the entities the views render and the payloads they submit. The
//! server emits inconsistent key casing for the reference tables (`name` vs
//! `technology_name` vs `Technology_Name`) and mixes numbers and numeric
//! strings for money and counts. All of that is normalized here, at the
//! serde boundary, so the rest of the workspace sees exactly one shape.
//!
//! ## Types
//!
//! | Group | Types |
//! |-------|-------|
//! | Identity | [`User`], [`Role`], [`AuthResponse`], [`SignupRequest`], [`LoginRequest`], [`SendOtpRequest`], [`VerifyOtpRequest`] |
//! | Entities | [`Student`], [`Faculty`], [`Project`], [`ProjectStatus`], [`Department`], [`Technology`], [`Theme`] |
//! | Join rows | [`ProjectTechnology`], [`ProjectTheme`], [`ProjectStudent`], [`ProjectFaculty`], [`StudentTechnology`], [`FacultyTechnology`] |
//! | Lookups | [`StudentRef`], [`FacultyRef`] |
//! | Payloads | [`NewStudent`], [`NewFaculty`], [`NewProject`], [`ProjectUpdate`], [`ReplaceTechnologies`], [`ReplaceThemes`], [`ReplaceStudents`], [`ReplaceFaculty`] |
//!
//! Join-set payloads carry the full desired id set under a named key; the
//! server replaces the set atomically. The client never diffs.

use serde::{Deserialize, Deserializer, Serialize};

/// Account role. Gates which profile and detail-completion screen renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Faculty,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub role: Role,
    #[serde(default)]
    pub college_email: Option<String>,
}

/// Project lifecycle status. The server stores the exact strings below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Proposed,
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Proposed,
        ProjectStatus::Ongoing,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Proposed => "Proposed",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<ProjectStatus> {
        match s {
            "Proposed" => Some(ProjectStatus::Proposed),
            "Ongoing" => Some(ProjectStatus::Ongoing),
            "Completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: i64,
    #[serde(default)]
    pub owner_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Two-decimal numeric string, e.g. "500.00".
    #[serde(deserialize_with = "de_money")]
    pub budget: String,
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "de_count")]
    pub students_involved_count: i64,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub github_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(alias = "USN")]
    pub usn: String,
    pub department_id: i64,
    #[serde(default, deserialize_with = "de_number")]
    pub cgpa: f64,
    #[serde(default)]
    pub personal_email: String,
    #[serde(default)]
    pub phone_no: String,
    #[serde(default)]
    pub linkedin_profile: Option<String>,
    #[serde(default)]
    pub github_profile: Option<String>,
    /// Base64-encoded photo when the record has one.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub faculty_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    pub department_id: i64,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub personal_email: String,
    #[serde(default)]
    pub phone_no: String,
    #[serde(default)]
    pub linkedin_profile: Option<String>,
    #[serde(default)]
    pub github_profile: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(alias = "id", alias = "Department_id")]
    pub department_id: i64,
    #[serde(alias = "department_name", alias = "Department_Name")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    #[serde(alias = "id", alias = "Technology_id")]
    pub technology_id: i64,
    #[serde(alias = "technology_name", alias = "Technology_Name")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(alias = "id", alias = "Theme_id")]
    pub theme_id: i64,
    #[serde(alias = "theme_name", alias = "Theme_Name")]
    pub name: String,
}

// Join rows. The server returns one row per association.

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectTechnology {
    #[serde(default)]
    pub project_id: Option<i64>,
    pub technology_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectTheme {
    #[serde(default)]
    pub project_id: Option<i64>,
    pub theme_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectStudent {
    #[serde(default)]
    pub project_id: Option<i64>,
    pub student_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectFaculty {
    #[serde(default)]
    pub project_id: Option<i64>,
    pub faculty_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentTechnology {
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(alias = "id", alias = "Technology_id")]
    pub technology_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacultyTechnology {
    #[serde(default)]
    pub faculty_id: Option<i64>,
    #[serde(alias = "id", alias = "Technology_id")]
    pub technology_id: i64,
}

/// Slim student row from `/studentsidusn`, used by pickers and name lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRef {
    pub student_id: i64,
    #[serde(alias = "USN")]
    pub usn: String,
}

/// Slim faculty row from `/facultyidname`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacultyRef {
    pub faculty_id: i64,
    #[serde(alias = "NAME")]
    pub name: String,
}

// Identity payloads.

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub college_email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub college_email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Successful identity response: the server-issued user id.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user_id: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic acknowledgement body for writes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

// Creation/update payloads.

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewStudent {
    pub user_id: i64,
    pub name: String,
    pub usn: String,
    pub department_id: i64,
    pub cgpa: f64,
    pub personal_email: String,
    pub phone_no: String,
    pub linkedin_profile: String,
    pub github_profile: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewFaculty {
    pub user_id: i64,
    pub name: String,
    pub department_id: i64,
    pub designation: String,
    pub role: String,
    pub personal_email: String,
    pub phone_no: String,
    pub linkedin_profile: String,
    pub github_profile: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProject {
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub budget: String,
    pub status: ProjectStatus,
    pub students_involved_count: i64,
    pub start_date: String,
    pub end_date: String,
    pub github_link: String,
}

/// Scalar fields of a project edit, PUT to `/projects/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectUpdate {
    pub name: String,
    pub description: String,
    pub budget: String,
    pub status: ProjectStatus,
    pub students_involved_count: i64,
    pub start_date: String,
    pub end_date: String,
    pub github_link: String,
}

impl From<&Project> for ProjectUpdate {
    fn from(p: &Project) -> Self {
        ProjectUpdate {
            name: p.name.clone(),
            description: p.description.clone(),
            budget: format_budget(&p.budget),
            status: p.status,
            students_involved_count: p.students_involved_count,
            start_date: p.start_date.clone(),
            end_date: p.end_date.clone(),
            github_link: p.github_link.clone().unwrap_or_default(),
        }
    }
}

// Join-set replacement payloads: full desired id set under a named key.

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplaceTechnologies {
    pub technology_ids: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplaceThemes {
    pub theme_ids: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplaceStudents {
    pub student_ids: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplaceFaculty {
    pub faculty_ids: Vec<i64>,
}

/// Coerce a budget form value to the two-decimal string the server expects.
/// Unparseable input becomes "0.00"; native form validation catches the rest.
pub fn format_budget(raw: &str) -> String {
    let value = raw.trim().parse::<f64>().unwrap_or(0.0);
    format!("{value:.2}")
}

/// Coerce a count form value to an integer.
pub fn parse_count(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

/// A value the server serializes sometimes as a number, sometimes as a
/// numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(f64),
    Str(String),
}

fn de_money<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match NumOrStr::deserialize(de)? {
        NumOrStr::Num(n) => format!("{n:.2}"),
        NumOrStr::Str(s) => s,
    })
}

fn de_count<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
    Ok(match NumOrStr::deserialize(de)? {
        NumOrStr::Num(n) => n as i64,
        NumOrStr::Str(s) => s.trim().parse().unwrap_or(0),
    })
}

fn de_number<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    Ok(match NumOrStr::deserialize(de)? {
        NumOrStr::Num(n) => n,
        NumOrStr::Str(s) => s.trim().parse().unwrap_or(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_technology_normalizes_all_observed_casings() {
        let lowercase: Technology =
            serde_json::from_value(json!({"id": 1, "name": "Python"})).unwrap();
        let snake: Technology =
            serde_json::from_value(json!({"technology_id": 1, "technology_name": "Python"}))
                .unwrap();
        let capitalized: Technology =
            serde_json::from_value(json!({"Technology_id": 1, "Technology_Name": "Python"}))
                .unwrap();

        assert_eq!(lowercase, snake);
        assert_eq!(snake, capitalized);
        assert_eq!(capitalized.name, "Python");
    }

    #[test]
    fn test_theme_normalizes_all_observed_casings() {
        let a: Theme = serde_json::from_value(json!({"Theme_id": 3, "Theme_Name": "IoT"})).unwrap();
        let b: Theme = serde_json::from_value(json!({"theme_id": 3, "theme_name": "IoT"})).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_accepts_numeric_or_string_budget() {
        let from_number: Project = serde_json::from_value(json!({
            "project_id": 12, "name": "Robo", "budget": 500,
            "status": "Proposed", "students_involved_count": "3"
        }))
        .unwrap();
        assert_eq!(from_number.budget, "500.00");
        assert_eq!(from_number.students_involved_count, 3);

        let from_string: Project = serde_json::from_value(json!({
            "project_id": 12, "name": "Robo", "budget": "500.00",
            "status": "Proposed", "students_involved_count": 3
        }))
        .unwrap();
        assert_eq!(from_string.budget, "500.00");
    }

    #[test]
    fn test_budget_and_count_coercion() {
        assert_eq!(format_budget("500"), "500.00");
        assert_eq!(format_budget(" 12.5 "), "12.50");
        assert_eq!(format_budget(""), "0.00");
        assert_eq!(parse_count("3"), 3);
        assert_eq!(parse_count("junk"), 0);
    }

    #[test]
    fn test_new_project_wire_shape() {
        let project = NewProject {
            owner_id: 7,
            name: "Robo".to_string(),
            description: String::new(),
            budget: format_budget("500"),
            status: ProjectStatus::Proposed,
            students_involved_count: parse_count("3"),
            start_date: "2024-01-01".to_string(),
            end_date: String::new(),
            github_link: String::new(),
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["budget"], "500.00");
        assert_eq!(value["students_involved_count"], 3);
        assert_eq!(value["owner_id"], 7);
        assert_eq!(value["status"], "Proposed");
    }

    #[test]
    fn test_replace_payloads_use_named_keys() {
        let techs = serde_json::to_value(ReplaceTechnologies {
            technology_ids: vec![2],
        })
        .unwrap();
        assert_eq!(techs, json!({"technology_ids": [2]}));

        let themes = serde_json::to_value(ReplaceThemes { theme_ids: vec![] }).unwrap();
        assert_eq!(themes, json!({"theme_ids": []}));

        let students = serde_json::to_value(ReplaceStudents {
            student_ids: vec![4, 9],
        })
        .unwrap();
        assert_eq!(students, json!({"student_ids": [4, 9]}));

        let faculty = serde_json::to_value(ReplaceFaculty {
            faculty_ids: vec![1],
        })
        .unwrap();
        assert_eq!(faculty, json!({"faculty_ids": [1]}));
    }

    #[test]
    fn test_login_request_wire_shape() {
        let req = LoginRequest {
            college_email: "a@x.edu".to_string(),
            password: "p".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"college_email": "a@x.edu", "password": "p"})
        );
    }

    #[test]
    fn test_auth_response_carries_user_id() {
        let resp: AuthResponse = serde_json::from_str(r#"{"user_id": 7}"#).unwrap();
        assert_eq!(resp.user_id, 7);
    }

    #[test]
    fn test_project_update_round_trips_editable_fields() {
        let fetched: Project = serde_json::from_value(json!({
            "project_id": 12, "owner_id": 7, "name": "Robo",
            "description": "arm", "budget": "500.00", "status": "Ongoing",
            "students_involved_count": 3, "start_date": "2024-01-01",
            "end_date": "2024-06-01", "github_link": "https://github.com/x/robo"
        }))
        .unwrap();

        // Loading an unchanged record into a draft must submit identical fields.
        let update = ProjectUpdate::from(&fetched);
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["name"], "Robo");
        assert_eq!(value["budget"], "500.00");
        assert_eq!(value["status"], "Ongoing");
        assert_eq!(value["students_involved_count"], 3);
        assert_eq!(value["start_date"], "2024-01-01");
        assert_eq!(value["end_date"], "2024-06-01");
        assert_eq!(value["github_link"], "https://github.com/x/robo");
    }

    #[test]
    fn test_student_row_with_uppercase_usn() {
        let student: StudentRef =
            serde_json::from_value(json!({"student_id": 4, "USN": "1RV21CS001"})).unwrap();
        assert_eq!(student.usn, "1RV21CS001");
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert_eq!(ProjectStatus::parse("Ongoing"), Some(ProjectStatus::Ongoing));
        assert_eq!(ProjectStatus::parse("Done"), None);
    }

    #[test]
    fn test_auth_payloads_visible_at_crate_root() {
        // The views import these from the crate root, not `api::models`.
        let signup = crate::SignupRequest {
            college_email: "a@x.edu".to_string(),
            password: "p".to_string(),
            role: crate::Role::Student,
        };
        assert_eq!(
            serde_json::to_value(&signup).unwrap(),
            json!({"college_email": "a@x.edu", "password": "p", "role": "Student"})
        );

        let send = crate::SendOtpRequest {
            email: "a@x.edu".to_string(),
        };
        let verify = crate::VerifyOtpRequest {
            email: "a@x.edu".to_string(),
            otp: "123456".to_string(),
        };
        let login = crate::LoginRequest {
            college_email: "a@x.edu".to_string(),
            password: "p".to_string(),
        };
        assert_eq!(serde_json::to_value(&send).unwrap()["college_email"], "a@x.edu");
        assert_eq!(serde_json::to_value(&verify).unwrap()["otp"], "123456");
        assert_eq!(serde_json::to_value(&login).unwrap()["password"], "p");
    }
}
