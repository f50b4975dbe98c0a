use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AddProject, Charts, FacultyDetails, FacultyList, Home, Login, MemberProjects, MyProjects,
    Profile, Projects, StudentDetails, Students,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/home")]
    Home {},
    #[route("/studentdetails")]
    StudentDetails {},
    #[route("/facultydetails")]
    FacultyDetails {},
    #[route("/profile/:user_id")]
    Profile { user_id: i64 },
    #[route("/student-list")]
    Students {},
    #[route("/faculty-list")]
    FacultyList {},
    #[route("/projects-list")]
    Projects {},
    #[route("/myprojects/:user_id")]
    MyProjects { user_id: i64 },
    #[route("/projectsmepart/:user_id")]
    MemberProjects { user_id: i64 },
    #[route("/add-project/:user_id")]
    AddProject { user_id: i64 },
    #[route("/charts")]
    Charts {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
