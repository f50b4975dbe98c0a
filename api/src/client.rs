//! HTTP client for the department API.
//!
//! One method per endpoint the views consume. All methods deserialize into
//! the canonical [`crate::models`] types; a body that parses as JSON but not
//! as the expected type comes back as [`ApiError::Shape`], so a list screen
//! handed a non-array sees one well-typed error instead of a crash.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{rejection_message, ApiError};
use crate::models::*;

/// Compile-time API base; the transport default everywhere else.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Thin wrapper over a shared `reqwest::Client` plus the API base URL.
/// Cheap to clone; views construct one per interaction.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL from the `API_BASE_URL` build environment, falling back to
    /// the development server.
    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Status {
                status,
                message: rejection_message(status, &body),
            });
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Shape(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    // Identity lifecycle.

    pub async fn signup(&self, req: &SignupRequest) -> Result<Ack, ApiError> {
        self.post_json("/signup", req).await
    }

    pub async fn send_otp(&self, email: &str) -> Result<Ack, ApiError> {
        self.post_json(
            "/send-otp",
            &SendOtpRequest {
                email: email.to_string(),
            },
        )
        .await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<AuthResponse, ApiError> {
        self.post_json(
            "/verify-otp",
            &VerifyOtpRequest {
                email: email.to_string(),
                otp: otp.to_string(),
            },
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post_json(
            "/login",
            &LoginRequest {
                college_email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    // Users.

    pub async fn user(&self, user_id: i64) -> Result<User, ApiError> {
        self.get_json(&format!("/users/{user_id}")).await
    }

    // Students.

    pub async fn students(&self) -> Result<Vec<Student>, ApiError> {
        self.get_json("/students").await
    }

    /// Student record looked up by the owning user id, not the student id.
    pub async fn student_by_user(&self, user_id: i64) -> Result<Student, ApiError> {
        self.get_json(&format!("/students/{user_id}")).await
    }

    pub async fn create_student(&self, student: &NewStudent) -> Result<Ack, ApiError> {
        self.post_json("/students", student).await
    }

    pub async fn update_student(&self, user_id: i64, student: &Student) -> Result<Ack, ApiError> {
        self.put_json(&format!("/students/{user_id}"), student).await
    }

    /// Resolve a user id to its student id.
    pub async fn student_id_for_user(&self, user_id: i64) -> Result<i64, ApiError> {
        let row: StudentRefId = self
            .get_json(&format!("/studentsgetstdid/{user_id}"))
            .await?;
        Ok(row.student_id)
    }

    pub async fn student_refs(&self) -> Result<Vec<StudentRef>, ApiError> {
        self.get_json("/studentsidusn").await
    }

    // Faculty.

    pub async fn faculty_members(&self) -> Result<Vec<Faculty>, ApiError> {
        self.get_json("/faculty").await
    }

    pub async fn faculty_by_user(&self, user_id: i64) -> Result<Faculty, ApiError> {
        self.get_json(&format!("/faculty/{user_id}")).await
    }

    pub async fn create_faculty(&self, faculty: &NewFaculty) -> Result<Ack, ApiError> {
        self.post_json("/faculty", faculty).await
    }

    pub async fn update_faculty(&self, user_id: i64, faculty: &Faculty) -> Result<Ack, ApiError> {
        self.put_json(&format!("/faculty/{user_id}"), faculty).await
    }

    pub async fn faculty_id_for_user(&self, user_id: i64) -> Result<i64, ApiError> {
        let row: FacultyRefId = self.get_json(&format!("/facultyid/{user_id}")).await?;
        Ok(row.faculty_id)
    }

    pub async fn faculty_refs(&self) -> Result<Vec<FacultyRef>, ApiError> {
        self.get_json("/facultyidname").await
    }

    // Projects.

    pub async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/projects").await
    }

    pub async fn project(&self, project_id: i64) -> Result<Project, ApiError> {
        self.get_json(&format!("/projects/{project_id}")).await
    }

    pub async fn create_project(&self, project: &NewProject) -> Result<Ack, ApiError> {
        self.post_json("/projects", project).await
    }

    pub async fn update_project(
        &self,
        project_id: i64,
        update: &ProjectUpdate,
    ) -> Result<Ack, ApiError> {
        self.put_json(&format!("/projects/{project_id}"), update)
            .await
    }

    /// Projects created by the given user.
    pub async fn own_projects(&self, user_id: i64) -> Result<Vec<Project>, ApiError> {
        self.get_json(&format!("/projectsown/{user_id}")).await
    }

    /// Project ids a student participates in. 404 means no rows.
    pub async fn student_projects(&self, student_id: i64) -> Result<Vec<ProjectStudent>, ApiError> {
        self.get_json(&format!("/student_projects/{student_id}"))
            .await
    }

    pub async fn faculty_projects(&self, faculty_id: i64) -> Result<Vec<ProjectFaculty>, ApiError> {
        self.get_json(&format!("/faculty_projects/{faculty_id}"))
            .await
    }

    // Reference tables.

    pub async fn departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get_json("/departments").await
    }

    pub async fn technologies(&self) -> Result<Vec<Technology>, ApiError> {
        self.get_json("/technologies").await
    }

    pub async fn themes(&self) -> Result<Vec<Theme>, ApiError> {
        self.get_json("/themes").await
    }

    // Join sets: GET reads the current rows, PUT replaces the whole set.

    pub async fn project_technologies(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectTechnology>, ApiError> {
        self.get_json(&format!("/project_technologies/{project_id}"))
            .await
    }

    pub async fn replace_project_technologies(
        &self,
        project_id: i64,
        technology_ids: Vec<i64>,
    ) -> Result<Ack, ApiError> {
        self.put_json(
            &format!("/project_technologies/{project_id}"),
            &ReplaceTechnologies { technology_ids },
        )
        .await
    }

    pub async fn project_themes(&self, project_id: i64) -> Result<Vec<ProjectTheme>, ApiError> {
        self.get_json(&format!("/project_themes/{project_id}")).await
    }

    pub async fn replace_project_themes(
        &self,
        project_id: i64,
        theme_ids: Vec<i64>,
    ) -> Result<Ack, ApiError> {
        self.put_json(
            &format!("/project_themes/{project_id}"),
            &ReplaceThemes { theme_ids },
        )
        .await
    }

    pub async fn project_students(&self, project_id: i64) -> Result<Vec<ProjectStudent>, ApiError> {
        self.get_json(&format!("/project_students/{project_id}"))
            .await
    }

    pub async fn replace_project_students(
        &self,
        project_id: i64,
        student_ids: Vec<i64>,
    ) -> Result<Ack, ApiError> {
        self.put_json(
            &format!("/project_students/{project_id}"),
            &ReplaceStudents { student_ids },
        )
        .await
    }

    pub async fn project_faculty(&self, project_id: i64) -> Result<Vec<ProjectFaculty>, ApiError> {
        self.get_json(&format!("/project_faculty/{project_id}")).await
    }

    pub async fn replace_project_faculty(
        &self,
        project_id: i64,
        faculty_ids: Vec<i64>,
    ) -> Result<Ack, ApiError> {
        self.put_json(
            &format!("/project_faculty/{project_id}"),
            &ReplaceFaculty { faculty_ids },
        )
        .await
    }

    pub async fn student_technologies(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentTechnology>, ApiError> {
        self.get_json(&format!("/student_technologies/{student_id}"))
            .await
    }

    pub async fn replace_student_technologies(
        &self,
        student_id: i64,
        technology_ids: Vec<i64>,
    ) -> Result<Ack, ApiError> {
        self.put_json(
            &format!("/student_technologies/{student_id}"),
            &ReplaceTechnologies { technology_ids },
        )
        .await
    }

    pub async fn faculty_technologies(
        &self,
        faculty_id: i64,
    ) -> Result<Vec<FacultyTechnology>, ApiError> {
        self.get_json(&format!("/faculty_technologies/{faculty_id}"))
            .await
    }

    pub async fn replace_faculty_technologies(
        &self,
        faculty_id: i64,
        technology_ids: Vec<i64>,
    ) -> Result<Ack, ApiError> {
        self.put_json(
            &format!("/faculty_technologies/{faculty_id}"),
            &ReplaceTechnologies { technology_ids },
        )
        .await
    }
}

#[derive(serde::Deserialize)]
struct StudentRefId {
    student_id: i64,
}

#[derive(serde::Deserialize)]
struct FacultyRefId {
    faculty_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/projects"), "http://localhost:8080/projects");
        assert_eq!(
            client.url("/project_technologies/12"),
            "http://localhost:8080/project_technologies/12"
        );
    }

    #[test]
    fn test_default_client_has_a_base() {
        let client = ApiClient::default();
        assert!(client.url("/login").ends_with("/login"));
        assert!(client.url("/login").starts_with("http"));
    }
}
