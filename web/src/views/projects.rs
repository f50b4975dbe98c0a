//! Project repository: every project with its four association sets.

use std::collections::HashMap;

use api::{fanout, ApiError, FacultyRef, Project, ProjectStatus, StudentRef, Technology, Theme};
use dioxus::prelude::*;

use ui::{AssociationPicker, Button, ButtonVariant, ErrorBanner, PendingSet, ProjectFilter, Tag};

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ProjectJoins {
    pub technology_ids: Vec<i64>,
    pub theme_ids: Vec<i64>,
    pub student_ids: Vec<i64>,
    pub faculty_ids: Vec<i64>,
}

#[derive(Clone)]
struct RepositoryData {
    projects: Vec<Project>,
    technologies: Vec<Technology>,
    themes: Vec<Theme>,
    student_refs: Vec<StudentRef>,
    faculty_refs: Vec<FacultyRef>,
    joins: HashMap<i64, ProjectJoins>,
}

/// All four join sets for one project, fetched together.
pub(crate) async fn load_joins(
    client: &api::ApiClient,
    project_id: i64,
) -> Result<ProjectJoins, ApiError> {
    let (techs, themes, students, faculty) = futures::join!(
        client.project_technologies(project_id),
        client.project_themes(project_id),
        client.project_students(project_id),
        client.project_faculty(project_id),
    );
    Ok(ProjectJoins {
        technology_ids: techs?.into_iter().map(|r| r.technology_id).collect(),
        theme_ids: themes?.into_iter().map(|r| r.theme_id).collect(),
        student_ids: students?.into_iter().map(|r| r.student_id).collect(),
        faculty_ids: faculty?.into_iter().map(|r| r.faculty_id).collect(),
    })
}

async fn load_repository() -> Result<RepositoryData, ApiError> {
    let client = ui::make_client();
    let projects = client.projects().await?;

    let technologies = client.technologies().await.unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load technologies");
        Vec::new()
    });
    let themes = client.themes().await.unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load themes");
        Vec::new()
    });
    let student_refs = client.student_refs().await.unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load student refs");
        Vec::new()
    });
    let faculty_refs = client.faculty_refs().await.unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load faculty refs");
        Vec::new()
    });

    let ids: Vec<i64> = projects.iter().map(|p| p.project_id).collect();
    let joins = fanout::fetch_map(ids, |id| {
        let client = client.clone();
        async move { load_joins(&client, id).await }
    })
    .await;

    Ok(RepositoryData {
        projects,
        technologies,
        themes,
        student_refs,
        faculty_refs,
        joins,
    })
}

#[component]
pub fn Projects() -> Element {
    let mut title = use_signal(String::new);
    let mut status = use_signal(|| Option::<ProjectStatus>::None);
    let mut tech_filter = use_signal(PendingSet::<Tag>::default);
    let mut theme_filter = use_signal(PendingSet::<Tag>::default);

    let repository = use_resource(|| load_repository());

    let body = match &*repository.read() {
        None => rsx! { p { class: "loading", "Loading..." } },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: err.to_string() }
        },
        Some(Ok(repo)) => {
            let filter = ProjectFilter {
                title: title(),
                status: status(),
                technology_ids: tech_filter.read().ids(),
                theme_ids: theme_filter.read().ids(),
            };
            let default_joins = ProjectJoins::default();
            let visible: Vec<&Project> = repo
                .projects
                .iter()
                .filter(|p| {
                    let joins = repo.joins.get(&p.project_id).unwrap_or(&default_joins);
                    filter.matches(p, &joins.technology_ids, &joins.theme_ids)
                })
                .collect();
            let tech_options: Vec<Tag> = repo.technologies.iter().map(Tag::from).collect();
            let theme_options: Vec<Tag> = repo.themes.iter().map(Tag::from).collect();

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

                p {
                    class: "result-count",
                    "Showing {visible.len()} of {repo.projects.len()} projects"
                }

                div {
                    class: "project-grid",
                    for project in visible {
                        ProjectCard {
                            key: "{project.project_id}",
                            project: project.clone(),
                            joins: repo.joins.get(&project.project_id).cloned().unwrap_or_default(),
                            technologies: repo.technologies.clone(),
                            themes: repo.themes.clone(),
                            student_refs: repo.student_refs.clone(),
                            faculty_refs: repo.faculty_refs.clone(),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "directory-page",
            h2 { "Project Repository" }
            {body}
        }
    }
}

#[component]
fn ProjectCard(
    project: Project,
    joins: ProjectJoins,
    technologies: Vec<Technology>,
    themes: Vec<Theme>,
    student_refs: Vec<StudentRef>,
    faculty_refs: Vec<FacultyRef>,
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
    let student_usns: Vec<String> = joins
        .student_ids
        .iter()
        .map(|id| {
            student_refs
                .iter()
                .find(|s| s.student_id == *id)
                .map(|s| s.usn.clone())
                .unwrap_or_else(|| "Unknown".to_string())
        })
        .collect();
    let faculty_names: Vec<String> = joins
        .faculty_ids
        .iter()
        .map(|id| {
            faculty_refs
                .iter()
                .find(|f| f.faculty_id == *id)
                .map(|f| f.name.clone())
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
            p { "Students involved: {project.students_involved_count}" }
            p { "{project.start_date} to {project.end_date}" }
            if let Some(link) = project.github_link.as_ref().filter(|l| !l.is_empty()) {
                a { href: "{link}", "GitHub" }
            }

            ChipGroup { label: "Technologies", names: tech_names }
            ChipGroup { label: "Themes", names: theme_names }
            ChipGroup { label: "Students", names: student_usns }
            ChipGroup { label: "Faculty", names: faculty_names }
        }
    }
}

#[component]
fn ChipGroup(label: String, names: Vec<String>) -> Element {
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
