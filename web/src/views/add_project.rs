//! New-project form. Budget and student count are normalized client-side
//! before the POST; associations are added later through the edit modal.

use api::{NewProject, ProjectStatus};
use dioxus::prelude::*;

use ui::{use_session, Button, ErrorBanner, Input, Label};

use crate::Route;

#[component]
pub fn AddProject(user_id: i64) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut budget = use_signal(String::new);
    let mut status = use_signal(|| ProjectStatus::Proposed);
    let mut count = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut github_link = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    if session.read().user_id.is_none() {
        return rsx! {
            div { class: "signin-prompt", p { "Please sign in to continue." } }
        };
    }

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        error.set(None);

        let project = NewProject {
            owner_id: user_id,
            name: name(),
            description: description(),
            budget: api::format_budget(&budget()),
            status: status(),
            students_involved_count: api::parse_count(&count()),
            start_date: start_date(),
            end_date: end_date(),
            github_link: github_link(),
        };
        spawn(async move {
            match ui::make_client().create_project(&project).await {
                Ok(_) => {
                    nav.push(Route::MyProjects { user_id });
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
                h1 { "Add Project" }

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
                        Label { html_for: "name", "Project Name" }
                        Input {
                            id: "name",
                            value: name(),
                            required: true,
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "description", "Description" }
                        textarea {
                            id: "description",
                            class: "input",
                            required: true,
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "budget", "Budget" }
                        Input {
                            id: "budget",
                            r#type: "number",
                            value: budget(),
                            required: true,
                            oninput: move |evt: FormEvent| budget.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "status", "Status" }
                        select {
                            id: "status",
                            class: "input",
                            onchange: move |evt| {
                                if let Some(parsed) = ProjectStatus::parse(&evt.value()) {
                                    status.set(parsed);
                                }
                            },
                            for s in ProjectStatus::ALL {
                                option {
                                    key: "{s.as_str()}",
                                    value: "{s.as_str()}",
                                    selected: status() == s,
                                    "{s.as_str()}"
                                }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "count", "Students Involved" }
                        Input {
                            id: "count",
                            r#type: "number",
                            value: count(),
                            required: true,
                            oninput: move |evt: FormEvent| count.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "start-date", "Start Date" }
                        Input {
                            id: "start-date",
                            r#type: "date",
                            value: start_date(),
                            required: true,
                            oninput: move |evt: FormEvent| start_date.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "end-date", "End Date" }
                        Input {
                            id: "end-date",
                            r#type: "date",
                            value: end_date(),
                            required: true,
                            oninput: move |evt: FormEvent| end_date.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "github", "GitHub Link" }
                        Input {
                            id: "github",
                            value: github_link(),
                            oninput: move |evt: FormEvent| github_link.set(evt.value()),
                        }
                    }

                    Button {
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Creating..." } else { "Create Project" }
                    }
                }
            }
        }
    }
}
