//! Role dispatch for `/profile/:user_id`.

use api::Role;
use dioxus::prelude::*;

use ui::ErrorBanner;

use super::{FacultyProfile, StudentProfile};

#[component]
pub fn Profile(user_id: i64) -> Element {
    let user = use_resource(move || async move { ui::make_client().user(user_id).await });

    let body = match &*user.read() {
        None => rsx! { p { class: "loading", "Loading..." } },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: err.to_string() }
        },
        Some(Ok(user)) => match user.role {
            Role::Student => rsx! { StudentProfile { user_id } },
            Role::Faculty => rsx! { FacultyProfile { user_id } },
        },
    };

    body
}
