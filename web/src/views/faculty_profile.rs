//! Faculty profile, the same view/edit split as the student one.

use api::{Department, Faculty, Technology};
use dioxus::prelude::*;

use ui::{
    AssociationPicker, Button, ButtonVariant, ErrorBanner, Input, Label, PendingSet, Tag,
};

#[component]
pub fn FacultyProfile(user_id: i64) -> Element {
    let mut faculty = use_signal(|| Option::<Faculty>::None);
    let mut tech_ids = use_signal(Vec::<i64>::new);
    let mut technologies = use_signal(Vec::<Technology>::new);
    let mut departments = use_signal(Vec::<Department>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let client = ui::make_client();
        match client.faculty_by_user(user_id).await {
            Ok(record) => {
                match client.faculty_technologies(record.faculty_id).await {
                    Ok(rows) => {
                        tech_ids.set(rows.into_iter().map(|r| r.technology_id).collect())
                    }
                    Err(err) => tracing::warn!(%err, "failed to load faculty technologies"),
                }
                faculty.set(Some(record));
            }
            Err(err) => load_error.set(Some(err.to_string())),
        }
        technologies.set(client.technologies().await.unwrap_or_default());
        departments.set(client.departments().await.unwrap_or_default());
        loading.set(false);
    });

    rsx! {
        div {
            class: "profile-page",
            h2 { "My Profile" }

            if loading() {
                p { class: "loading", "Loading..." }
            } else if let Some(msg) = load_error() {
                ErrorBanner { message: msg }
            } else if let Some(record) = faculty() {
                if editing() {
                    FacultyEditor {
                        user_id,
                        faculty: record,
                        tech_ids: tech_ids(),
                        technologies: technologies(),
                        on_save: move |(updated, ids): (Faculty, Vec<i64>)| {
                            faculty.set(Some(updated));
                            tech_ids.set(ids);
                            editing.set(false);
                        },
                        on_cancel: move |_| editing.set(false),
                    }
                } else {
                    FacultyView {
                        faculty: record,
                        tech_ids: tech_ids(),
                        technologies: technologies(),
                        departments: departments(),
                        on_edit: move |_| editing.set(true),
                    }
                }
            }
        }
    }
}

#[component]
fn FacultyView(
    faculty: Faculty,
    tech_ids: Vec<i64>,
    technologies: Vec<Technology>,
    departments: Vec<Department>,
    on_edit: EventHandler<()>,
) -> Element {
    let department = departments
        .iter()
        .find(|d| d.department_id == faculty.department_id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let tech_names: Vec<String> = tech_ids
        .iter()
        .map(|id| {
            technologies
                .iter()
                .find(|t| t.technology_id == *id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "Unknown".to_string())
        })
        .collect();

    rsx! {
        div {
            class: "profile-card",
            h3 { "{faculty.name}" }
            p { "Department: {department}" }
            p { "Designation: {faculty.designation}" }
            p { "Role: {faculty.role}" }
            p { "Email: {faculty.personal_email}" }
            p { "Phone: {faculty.phone_no}" }
            if let Some(link) = faculty.linkedin_profile.as_ref().filter(|l| !l.is_empty()) {
                p { a { href: "{link}", "LinkedIn" } }
            }
            if let Some(link) = faculty.github_profile.as_ref().filter(|l| !l.is_empty()) {
                p { a { href: "{link}", "GitHub" } }
            }

            div {
                class: "chip-group",
                span { class: "chip-group-label", "Technologies:" }
                if tech_names.is_empty() {
                    span { class: "chip-group-empty", "None" }
                } else {
                    for (i, name) in tech_names.iter().enumerate() {
                        span { key: "{i}", class: "chip", "{name}" }
                    }
                }
            }

            Button {
                onclick: move |_| on_edit.call(()),
                "Edit Profile"
            }
        }
    }
}

#[component]
fn FacultyEditor(
    user_id: i64,
    faculty: Faculty,
    tech_ids: Vec<i64>,
    technologies: Vec<Technology>,
    on_save: EventHandler<(Faculty, Vec<i64>)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let faculty_id = faculty.faculty_id;

    let mut name = use_signal(|| faculty.name.clone());
    let mut designation = use_signal(|| faculty.designation.clone());
    let mut role = use_signal(|| faculty.role.clone());
    let mut personal_email = use_signal(|| faculty.personal_email.clone());
    let mut phone_no = use_signal(|| faculty.phone_no.clone());
    let mut linkedin = use_signal(|| faculty.linkedin_profile.clone().unwrap_or_default());
    let mut github = use_signal(|| faculty.github_profile.clone().unwrap_or_default());

    let tech_selected = use_signal(|| {
        PendingSet::seed(tech_ids.iter().map(|id| Tag {
            id: *id,
            label: technologies
                .iter()
                .find(|t| t.technology_id == *id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
        }))
    });

    let mut save_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let base = faculty.clone();
    let handle_save = move |_| {
        if saving() {
            return;
        }
        saving.set(true);
        save_error.set(None);

        let updated = Faculty {
            name: name(),
            designation: designation(),
            role: role(),
            personal_email: personal_email(),
            phone_no: phone_no(),
            linkedin_profile: Some(linkedin()).filter(|l| !l.is_empty()),
            github_profile: Some(github()).filter(|g| !g.is_empty()),
            ..base.clone()
        };
        let ids = tech_selected.read().ids();

        spawn(async move {
            let client = ui::make_client();
            let (scalar, techs) = futures::join!(
                client.update_faculty(user_id, &updated),
                client.replace_faculty_technologies(faculty_id, ids.clone()),
            );
            if scalar.is_ok() && techs.is_ok() {
                on_save.call((updated, ids));
            } else {
                save_error.set(Some("Failed to save profile. Please try again.".to_string()));
            }
            saving.set(false);
        });
    };

    let tech_options: Vec<Tag> = technologies.iter().map(Tag::from).collect();

    rsx! {
        div {
            class: "profile-card",
            h3 { "Edit Profile" }

            if let Some(msg) = save_error() {
                ErrorBanner {
                    message: msg,
                    on_dismiss: move |_| save_error.set(None),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "name", "Name" }
                Input {
                    id: "name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "designation", "Designation" }
                Input {
                    id: "designation",
                    value: designation(),
                    oninput: move |evt: FormEvent| designation.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "role", "Role" }
                Input {
                    id: "role",
                    value: role(),
                    oninput: move |evt: FormEvent| role.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "email", "Email" }
                Input {
                    id: "email",
                    r#type: "email",
                    value: personal_email(),
                    oninput: move |evt: FormEvent| personal_email.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "phone", "Phone" }
                Input {
                    id: "phone",
                    value: phone_no(),
                    oninput: move |evt: FormEvent| phone_no.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "linkedin", "LinkedIn" }
                Input {
                    id: "linkedin",
                    value: linkedin(),
                    oninput: move |evt: FormEvent| linkedin.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "github", "GitHub" }
                Input {
                    id: "github",
                    value: github(),
                    oninput: move |evt: FormEvent| github.set(evt.value()),
                }
            }

            AssociationPicker {
                label: "Technologies",
                placeholder: "Search technologies...",
                options: tech_options,
                selected: tech_selected,
            }

            div {
                class: "form-actions",
                Button {
                    onclick: handle_save,
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
