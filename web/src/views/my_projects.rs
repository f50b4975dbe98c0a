//! Projects the user owns, with the multi-relation edit modal.
//!
//! Saving an edit issues the scalar update and the four join-set
//! replacements concurrently; local state commits only when every request
//! succeeds. On any failure the modal stays open with the draft intact.

use std::collections::HashMap;

use api::{
    FacultyRef, Project, ProjectStatus, ProjectUpdate, StudentRef, Technology, Theme,
};
use dioxus::prelude::*;

use ui::{
    use_session, AssociationPicker, Button, ButtonVariant, ErrorBanner, Label, ModalOverlay,
    PendingSet, Tag,
};

use super::projects::{load_joins, ProjectJoins};
use crate::Route;

#[component]
pub fn MyProjects(user_id: i64) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut projects = use_signal(Vec::<Project>::new);
    let mut joins = use_signal(HashMap::<i64, ProjectJoins>::new);
    let mut technologies = use_signal(Vec::<Technology>::new);
    let mut themes = use_signal(Vec::<Theme>::new);
    let mut student_refs = use_signal(Vec::<StudentRef>::new);
    let mut faculty_refs = use_signal(Vec::<FacultyRef>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<i64>::None);

    let _loader = use_resource(move || async move {
        let client = ui::make_client();
        match client.own_projects(user_id).await {
            Ok(list) => {
                let ids: Vec<i64> = list.iter().map(|p| p.project_id).collect();
                let fetched = api::fanout::fetch_map(ids, |id| {
                    let client = client.clone();
                    async move { load_joins(&client, id).await }
                })
                .await;
                projects.set(list);
                joins.set(fetched);
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load own projects");
                load_error.set(Some("Failed to load projects.".to_string()));
            }
        }

        technologies.set(client.technologies().await.unwrap_or_default());
        themes.set(client.themes().await.unwrap_or_default());
        student_refs.set(client.student_refs().await.unwrap_or_default());
        faculty_refs.set(client.faculty_refs().await.unwrap_or_default());
        loading.set(false);
    });

    if session.read().user_id.is_none() {
        return rsx! {
            div { class: "signin-prompt", p { "Please sign in to continue." } }
        };
    }

    let editing_project = editing().and_then(|id| {
        projects
            .read()
            .iter()
            .find(|p| p.project_id == id)
            .cloned()
            .map(|p| (p, joins.read().get(&id).cloned().unwrap_or_default()))
    });

    rsx! {
        div {
            class: "directory-page",
            header {
                class: "page-header",
                h2 { "My Projects" }
                Button {
                    onclick: move |_| {
                        nav.push(Route::AddProject { user_id });
                    },
                    "Add Project"
                }
            }

            if loading() {
                p { class: "loading", "Loading..." }
            } else if let Some(msg) = load_error() {
                ErrorBanner { message: msg }
            } else if projects.read().is_empty() {
                p { class: "empty-state", "You haven't created any projects yet." }
            } else {
                div {
                    class: "project-grid",
                    for project in projects.read().iter().cloned() {
                        OwnedProjectCard {
                            key: "{project.project_id}",
                            joins: joins.read().get(&project.project_id).cloned().unwrap_or_default(),
                            technologies: technologies(),
                            themes: themes(),
                            student_refs: student_refs(),
                            faculty_refs: faculty_refs(),
                            on_edit: {
                                let id = project.project_id;
                                move |_| editing.set(Some(id))
                            },
                            project,
                        }
                    }
                }
            }

            if let Some((project, current_joins)) = editing_project {
                ProjectEditor {
                    key: "{project.project_id}",
                    project: project,
                    joins: current_joins,
                    technologies: technologies(),
                    themes: themes(),
                    student_refs: student_refs(),
                    faculty_refs: faculty_refs(),
                    on_save: move |(updated, new_joins): (Project, ProjectJoins)| {
                        let id = updated.project_id;
                        projects.write().iter_mut().for_each(|p| {
                            if p.project_id == id {
                                *p = updated.clone();
                            }
                        });
                        joins.write().insert(id, new_joins);
                        editing.set(None);
                    },
                    on_cancel: move |_| editing.set(None),
                }
            }
        }
    }
}

#[component]
fn OwnedProjectCard(
    project: Project,
    joins: ProjectJoins,
    technologies: Vec<Technology>,
    themes: Vec<Theme>,
    student_refs: Vec<StudentRef>,
    faculty_refs: Vec<FacultyRef>,
    on_edit: EventHandler<()>,
) -> Element {
    let tech_names: Vec<String> = joins
        .technology_ids
        .iter()
        .map(|id| resolve(&technologies, |t| t.technology_id == *id, |t| t.name.clone()))
        .collect();
    let theme_names: Vec<String> = joins
        .theme_ids
        .iter()
        .map(|id| resolve(&themes, |t| t.theme_id == *id, |t| t.name.clone()))
        .collect();
    let student_usns: Vec<String> = joins
        .student_ids
        .iter()
        .map(|id| resolve(&student_refs, |s| s.student_id == *id, |s| s.usn.clone()))
        .collect();
    let faculty_names: Vec<String> = joins
        .faculty_ids
        .iter()
        .map(|id| resolve(&faculty_refs, |f| f.faculty_id == *id, |f| f.name.clone()))
        .collect();

    rsx! {
        div {
            class: "project-card",
            header {
                class: "project-card-header",
                h3 { "{project.name}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit.call(()),
                    "Edit"
                }
            }
            p { class: "project-status", "{project.status}" }
            p { "{project.description}" }
            p { "Budget: {project.budget}" }
            p { "Students involved: {project.students_involved_count}" }
            p { "{project.start_date} to {project.end_date}" }
            if let Some(link) = project.github_link.as_ref().filter(|l| !l.is_empty()) {
                a { href: "{link}", "GitHub" }
            }

            ChipRow { label: "Technologies", names: tech_names }
            ChipRow { label: "Themes", names: theme_names }
            ChipRow { label: "Students", names: student_usns }
            ChipRow { label: "Faculty", names: faculty_names }
        }
    }
}

fn resolve<T>(items: &[T], pred: impl Fn(&&T) -> bool, name: impl Fn(&T) -> String) -> String {
    items
        .iter()
        .find(pred)
        .map(name)
        .unwrap_or_else(|| "Unknown".to_string())
}

#[component]
fn ChipRow(label: String, names: Vec<String>) -> Element {
    rsx! {
        div {
            class: "chip-group",
            span { class: "chip-group-label", "{label}:" }
            if names.is_empty() {
                span { class: "chip-group-empty", "None" }
            } else {
                for (i, name) in names.iter().enumerate() {
                    span { key: "{i}", class: "chip", "{name}" }
                }
            }
        }
    }
}

/// Edit modal. Drafts live here so cancel is a plain unmount.
#[component]
fn ProjectEditor(
    project: Project,
    joins: ProjectJoins,
    technologies: Vec<Technology>,
    themes: Vec<Theme>,
    student_refs: Vec<StudentRef>,
    faculty_refs: Vec<FacultyRef>,
    on_save: EventHandler<(Project, ProjectJoins)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let project_id = project.project_id;

    let mut name = use_signal(|| project.name.clone());
    let mut description = use_signal(|| project.description.clone());
    let mut budget = use_signal(|| project.budget.clone());
    let mut status = use_signal(|| project.status);
    let mut count = use_signal(|| project.students_involved_count.to_string());
    let mut start_date = use_signal(|| project.start_date.clone());
    let mut end_date = use_signal(|| project.end_date.clone());
    let mut github_link = use_signal(|| project.github_link.clone().unwrap_or_default());

    let tech_selected = use_signal(|| {
        PendingSet::seed(joins.technology_ids.iter().map(|id| Tag {
            id: *id,
            label: resolve(&technologies, |t| t.technology_id == *id, |t| t.name.clone()),
        }))
    });
    let theme_selected = use_signal(|| {
        PendingSet::seed(joins.theme_ids.iter().map(|id| Tag {
            id: *id,
            label: resolve(&themes, |t| t.theme_id == *id, |t| t.name.clone()),
        }))
    });
    let student_selected = use_signal(|| {
        PendingSet::seed(joins.student_ids.iter().map(|id| Tag {
            id: *id,
            label: resolve(&student_refs, |s| s.student_id == *id, |s| s.usn.clone()),
        }))
    });
    let faculty_selected = use_signal(|| {
        PendingSet::seed(joins.faculty_ids.iter().map(|id| Tag {
            id: *id,
            label: resolve(&faculty_refs, |f| f.faculty_id == *id, |f| f.name.clone()),
        }))
    });

    let mut save_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let owner_id = project.owner_id;
    let handle_save = move |_| {
        if saving() {
            return;
        }
        saving.set(true);
        save_error.set(None);

        let update = ProjectUpdate {
            name: name(),
            description: description(),
            budget: api::format_budget(&budget()),
            status: status(),
            students_involved_count: api::parse_count(&count()),
            start_date: start_date(),
            end_date: end_date(),
            github_link: github_link(),
        };
        let new_joins = ProjectJoins {
            technology_ids: tech_selected.read().ids(),
            theme_ids: theme_selected.read().ids(),
            student_ids: student_selected.read().ids(),
            faculty_ids: faculty_selected.read().ids(),
        };

        spawn(async move {
            let client = ui::make_client();
            let (scalar, techs, themes, students, faculty) = futures::join!(
                client.update_project(project_id, &update),
                client.replace_project_technologies(project_id, new_joins.technology_ids.clone()),
                client.replace_project_themes(project_id, new_joins.theme_ids.clone()),
                client.replace_project_students(project_id, new_joins.student_ids.clone()),
                client.replace_project_faculty(project_id, new_joins.faculty_ids.clone()),
            );

            let ok = scalar.is_ok()
                && techs.is_ok()
                && themes.is_ok()
                && students.is_ok()
                && faculty.is_ok();
            if ok {
                let updated = Project {
                    project_id,
                    owner_id,
                    name: update.name.clone(),
                    description: update.description.clone(),
                    budget: update.budget.clone(),
                    status: update.status,
                    students_involved_count: update.students_involved_count,
                    start_date: update.start_date.clone(),
                    end_date: update.end_date.clone(),
                    github_link: if update.github_link.is_empty() {
                        None
                    } else {
                        Some(update.github_link.clone())
                    },
                };
                on_save.call((updated, new_joins));
            } else {
                save_error.set(Some("Failed to save changes. Please try again.".to_string()));
            }
            saving.set(false);
        });
    };

    let tech_options: Vec<Tag> = technologies.iter().map(Tag::from).collect();
    let theme_options: Vec<Tag> = themes.iter().map(Tag::from).collect();
    let student_options: Vec<Tag> = student_refs.iter().map(Tag::from).collect();
    let faculty_options: Vec<Tag> = faculty_refs.iter().map(Tag::from).collect();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),

            h3 { "Edit Project" }

            if let Some(msg) = save_error() {
                ErrorBanner {
                    message: msg,
                    on_dismiss: move |_| save_error.set(None),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "edit-name", "Name" }
                input {
                    id: "edit-name",
                    class: "input",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "edit-description", "Description" }
                textarea {
                    id: "edit-description",
                    class: "input",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "edit-budget", "Budget" }
                input {
                    id: "edit-budget",
                    class: "input",
                    value: "{budget}",
                    oninput: move |evt| budget.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "edit-status", "Status" }
                select {
                    id: "edit-status",
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
                Label { html_for: "edit-count", "Students involved" }
                input {
                    id: "edit-count",
                    class: "input",
                    r#type: "number",
                    value: "{count}",
                    oninput: move |evt| count.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "edit-start", "Start date" }
                input {
                    id: "edit-start",
                    class: "input",
                    r#type: "date",
                    value: "{start_date}",
                    oninput: move |evt| start_date.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "edit-end", "End date" }
                input {
                    id: "edit-end",
                    class: "input",
                    r#type: "date",
                    value: "{end_date}",
                    oninput: move |evt| end_date.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "edit-github", "GitHub link" }
                input {
                    id: "edit-github",
                    class: "input",
                    value: "{github_link}",
                    oninput: move |evt| github_link.set(evt.value()),
                }
            }

            AssociationPicker {
                label: "Technologies",
                placeholder: "Search technologies...",
                options: tech_options,
                selected: tech_selected,
            }
            AssociationPicker {
                label: "Themes",
                placeholder: "Search themes...",
                options: theme_options,
                selected: theme_selected,
            }
            AssociationPicker {
                label: "Students",
                placeholder: "Search by USN...",
                options: student_options,
                selected: student_selected,
            }
            AssociationPicker {
                label: "Faculty",
                placeholder: "Search faculty...",
                options: faculty_options,
                selected: faculty_selected,
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
