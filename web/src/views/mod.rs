mod login;
pub use login::Login;

mod home;
pub use home::Home;

mod student_details;
pub use student_details::StudentDetails;

mod faculty_details;
pub use faculty_details::FacultyDetails;

mod profile;
pub use profile::Profile;

mod student_profile;
pub(crate) use student_profile::StudentProfile;

mod faculty_profile;
pub(crate) use faculty_profile::FacultyProfile;

mod students;
pub use students::Students;

mod faculty_list;
pub use faculty_list::FacultyList;

mod projects;
pub use projects::Projects;

mod my_projects;
pub use my_projects::MyProjects;

mod member_projects;
pub use member_projects::MemberProjects;

mod add_project;
pub use add_project::AddProject;

mod charts;
pub use charts::Charts;
