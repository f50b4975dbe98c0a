//! Post-signup detail form for faculty.

use api::NewFaculty;
use dioxus::prelude::*;

use ui::{use_session, Button, ErrorBanner, Input, Label};

use crate::Route;

#[component]
pub fn FacultyDetails() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut department_id = use_signal(|| Option::<i64>::None);
    let mut designation = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut personal_email = use_signal(String::new);
    let mut phone_no = use_signal(String::new);
    let mut linkedin_profile = use_signal(String::new);
    let mut github_profile = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let departments = use_resource(move || async move {
        ui::make_client().departments().await.unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load departments");
            Vec::new()
        })
    });

    let Some(user_id) = session.read().user_id else {
        return rsx! {
            div { class: "signin-prompt", p { "Please sign in to continue." } }
        };
    };

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Some(department_id) = department_id() else {
            error.set(Some("Please select a department.".to_string()));
            return;
        };
        busy.set(true);
        error.set(None);

        let faculty = NewFaculty {
            user_id,
            name: name(),
            department_id,
            designation: designation(),
            role: role(),
            personal_email: personal_email(),
            phone_no: phone_no(),
            linkedin_profile: linkedin_profile(),
            github_profile: github_profile(),
        };
        spawn(async move {
            match ui::make_client().create_faculty(&faculty).await {
                Ok(_) => {
                    nav.push(Route::Home {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "details-page",
            div {
                class: "details-card",
                h1 { "Faculty Details" }

                if let Some(msg) = error() {
                    ErrorBanner {
                        message: msg,
                        on_dismiss: move |_| error.set(None),
                    }
                }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        Label { html_for: "name", "Name" }
                        Input {
                            id: "name",
                            value: name(),
                            required: true,
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "department", "Department" }
                        select {
                            id: "department",
                            class: "input",
                            required: true,
                            onchange: move |evt| department_id.set(evt.value().parse().ok()),
                            option { value: "", "Select Department" }
                            for dept in departments().unwrap_or_default() {
                                option {
                                    key: "{dept.department_id}",
                                    value: "{dept.department_id}",
                                    "{dept.name}"
                                }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "designation", "Designation" }
                        Input {
                            id: "designation",
                            value: designation(),
                            required: true,
                            oninput: move |evt: FormEvent| designation.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "role", "Role" }
                        Input {
                            id: "role",
                            value: role(),
                            required: true,
                            oninput: move |evt: FormEvent| role.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "personal-email", "Personal Email" }
                        Input {
                            id: "personal-email",
                            r#type: "email",
                            value: personal_email(),
                            required: true,
                            oninput: move |evt: FormEvent| personal_email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "phone", "Phone No" }
                        Input {
                            id: "phone",
                            value: phone_no(),
                            required: true,
                            oninput: move |evt: FormEvent| phone_no.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "linkedin", "LinkedIn Profile" }
                        Input {
                            id: "linkedin",
                            value: linkedin_profile(),
                            oninput: move |evt: FormEvent| linkedin_profile.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "github", "GitHub Profile" }
                        Input {
                            id: "github",
                            value: github_profile(),
                            oninput: move |evt: FormEvent| github_profile.set(evt.value()),
                        }
                    }

                    Button {
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Saving..." } else { "Submit" }
                    }
                }
            }
        }
    }
}
