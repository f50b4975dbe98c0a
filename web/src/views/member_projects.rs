//! Projects the user participates in, resolved through their role.
//!
//! The load is a chain: user record, role-specific entity id, membership
//! rows, then per-project details. A failure anywhere upstream aborts the
//! chain; a 404 on the membership step just means no projects.

use std::collections::HashMap;

use api::{fanout, ApiError, Project, ProjectStatus, Role, Technology, Theme};
use dioxus::prelude::*;

use ui::{AssociationPicker, Button, ButtonVariant, ErrorBanner, PendingSet, ProjectFilter, Tag};

use super::projects::{load_joins, ProjectJoins};

#[derive(Clone)]
struct Membership {
    projects: Vec<Project>,
    technologies: Vec<Technology>,
    themes: Vec<Theme>,
    joins: HashMap<i64, ProjectJoins>,
}

async fn load_membership(user_id: i64) -> Result<Membership, ApiError> {
    let client = ui::make_client();

    let user = client.user(user_id).await?;
    let mut project_ids: Vec<i64> = match user.role {
        Role::Student => {
            let student_id = client.student_id_for_user(user_id).await?;
            match client.student_projects(student_id).await {
                Ok(rows) => rows.into_iter().filter_map(|r| r.project_id).collect(),
                Err(err) if err.is_not_found() => Vec::new(),
                Err(err) => return Err(err),
            }
        }
        Role::Faculty => {
            let faculty_id = client.faculty_id_for_user(user_id).await?;
            match client.faculty_projects(faculty_id).await {
                Ok(rows) => rows.into_iter().filter_map(|r| r.project_id).collect(),
                Err(err) if err.is_not_found() => Vec::new(),
                Err(err) => return Err(err),
            }
        }
    };

    // Membership rows can repeat a project; fetch each one once.
    let mut seen = std::collections::HashSet::new();
    project_ids.retain(|id| seen.insert(*id));

    let details = fanout::fetch_map(project_ids.clone(), |id| {
        let client = client.clone();
        async move { client.project(id).await.map(Some) }
    })
    .await;
    let projects: Vec<Project> = project_ids
        .iter()
        .filter_map(|id| details.get(id).cloned().flatten())
        .collect();

    let joins = fanout::fetch_map(project_ids, |id| {
        let client = client.clone();
        async move { load_joins(&client, id).await }
    })
    .await;

    let technologies = client.technologies().await.unwrap_or_default();
    let themes = client.themes().await.unwrap_or_default();

    Ok(Membership {
        projects,
        technologies,
        themes,
        joins,
    })
}

#[component]
pub fn MemberProjects(user_id: i64) -> Element {
    let mut title = use_signal(String::new);
    let mut status = use_signal(|| Option::<ProjectStatus>::None);
    let mut tech_filter = use_signal(PendingSet::<Tag>::default);
    let mut theme_filter = use_signal(PendingSet::<Tag>::default);

    let membership = use_resource(move || load_membership(user_id));

    let body = match &*membership.read() {
        None => rsx! { p { class: "loading", "Loading..." } },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: err.to_string() }
        },
        Some(Ok(data)) => {
            let filter = ProjectFilter {
                title: title(),
                status: status(),
                technology_ids: tech_filter.read().ids(),
                theme_ids: theme_filter.read().ids(),
            };
            let default_joins = ProjectJoins::default();
            let visible: Vec<&Project> = data
                .projects
                .iter()
                .filter(|p| {
                    let joins = data.joins.get(&p.project_id).unwrap_or(&default_joins);
                    filter.matches(p, &joins.technology_ids, &joins.theme_ids)
                })
                .collect();
            let tech_options: Vec<Tag> = data.technologies.iter().map(Tag::from).collect();
            let theme_options: Vec<Tag> = data.themes.iter().map(Tag::from).collect();

            rsx! {
                div {
                    class: "filter-bar",
                    input {
                        class: "input",
                        placeholder: "Search by title",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                    select {
                        class: "input",
                        onchange: move |evt| status.set(ProjectStatus::parse(&evt.value())),
                        option { value: "", "All Statuses" }
                        for s in ProjectStatus::ALL {
                            option {
                                key: "{s.as_str()}",
                                value: "{s.as_str()}",
                                selected: status() == Some(s),
                                "{s.as_str()}"
                            }
                        }
                    }
                    AssociationPicker {
                        label: "Technologies",
                        placeholder: "Search technologies...",
                        options: tech_options,
                        selected: tech_filter,
                    }
                    AssociationPicker {
                        label: "Themes",
                        placeholder: "Search themes...",
                        options: theme_options,
                        selected: theme_filter,
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            title.set(String::new());
                            status.set(None);
                            tech_filter.set(PendingSet::default());
                            theme_filter.set(PendingSet::default());
                        },
                        "Clear Filters"
                    }
                }

                if data.projects.is_empty() {
                    p { class: "empty-state", "You are not part of any projects." }
                } else {
                    p {
                        class: "result-count",
                        "Showing {visible.len()} of {data.projects.len()} projects"
                    }
                    div {
                        class: "project-grid",
                        for project in visible {
                            MemberProjectCard {
                                key: "{project.project_id}",
                                project: project.clone(),
                                joins: data.joins.get(&project.project_id).cloned().unwrap_or_default(),
                                technologies: data.technologies.clone(),
                                themes: data.themes.clone(),
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "directory-page",
            h2 { "Projects I Belong To" }
            {body}
        }
    }
}

#[component]
fn MemberProjectCard(
    project: Project,
    joins: ProjectJoins,
    technologies: Vec<Technology>,
    themes: Vec<Theme>,
) -> Element {
    let tech_names: Vec<String> = joins
        .technology_ids
        .iter()
        .map(|id| {
            technologies
                .iter()
                .find(|t| t.technology_id == *id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "Unknown".to_string())
        })
        .collect();
    let theme_names: Vec<String> = joins
        .theme_ids
        .iter()
        .map(|id| {
            themes
                .iter()
                .find(|t| t.theme_id == *id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "Unknown".to_string())
        })
        .collect();

    rsx! {
        div {
            class: "project-card",
            h3 { "{project.name}" }
            p { class: "project-status", "{project.status}" }
            p { "{project.description}" }
            p { "Budget: {project.budget}" }
            p { "{project.start_date} to {project.end_date}" }

            div {
                class: "chip-group",
                span { class: "chip-group-label", "Technologies:" }
                for (i, name) in tech_names.iter().enumerate() {
                    span { key: "{i}", class: "chip", "{name}" }
                }
            }
            div {
                class: "chip-group",
                span { class: "chip-group-label", "Themes:" }
                for (i, name) in theme_names.iter().enumerate() {
                    span { key: "{i}", class: "chip", "{name}" }
                }
            }
        }
    }
}
