//! Navigation dashboard shown after login.

use dioxus::prelude::*;

use ui::{use_session, Button, ButtonVariant};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let Some(user_id) = session.read().user_id else {
        return rsx! {
            div {
                class: "signin-prompt",
                p { "Please sign in to continue." }
                Button {
                    onclick: move |_| { nav.push(Route::Login {}); },
                    "Go to login"
                }
            }
        };
    };

    let cards = [
        ("My Profile", Route::Profile { user_id }),
        ("My Projects", Route::MyProjects { user_id }),
        ("Student Directory", Route::Students {}),
        ("Faculty Directory", Route::FacultyList {}),
        ("Project Repository", Route::Projects {}),
        ("Projects I belong to", Route::MemberProjects { user_id }),
        ("Charts", Route::Charts {}),
    ];

    rsx! {
        div {
            class: "home-page",
            header {
                class: "home-header",
                h2 { "Dashboard" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        session.write().logout();
                        nav.push(Route::Login {});
                    },
                    "Logout"
                }
            }

            div {
                class: "home-grid",
                for (title, route) in cards {
                    Link {
                        key: "{title}",
                        class: "home-card",
                        to: route.clone(),
                        h3 { "{title}" }
                    }
                }
            }
        }
    }
}
