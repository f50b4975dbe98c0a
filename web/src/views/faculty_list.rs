//! Faculty directory, the same shape as the student one.

use std::collections::HashMap;

use api::{fanout, ApiError, Department, Faculty, Technology};
use dioxus::prelude::*;

use ui::{AssociationPicker, Button, ButtonVariant, ErrorBanner, FacultyFilter, PendingSet, Tag};

#[derive(Clone)]
struct Directory {
    faculty: Vec<Faculty>,
    technologies: Vec<Technology>,
    departments: Vec<Department>,
    tech_by_faculty: HashMap<i64, Vec<i64>>,
}

async fn load_directory() -> Result<Directory, ApiError> {
    let client = ui::make_client();
    let faculty = client.faculty_members().await?;

    let technologies = client.technologies().await.unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load technologies");
        Vec::new()
    });
    let departments = client.departments().await.unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load departments");
        Vec::new()
    });

    let ids: Vec<i64> = faculty.iter().map(|f| f.faculty_id).collect();
    let joins = fanout::fetch_map(ids, |id| {
        let client = client.clone();
        async move { client.faculty_technologies(id).await }
    })
    .await;
    let tech_by_faculty = joins
        .into_iter()
        .map(|(id, rows)| (id, rows.into_iter().map(|r| r.technology_id).collect()))
        .collect();

    Ok(Directory {
        faculty,
        technologies,
        departments,
        tech_by_faculty,
    })
}

#[component]
pub fn FacultyList() -> Element {
    let mut name = use_signal(String::new);
    let mut department_id = use_signal(|| Option::<i64>::None);
    let mut tech_filter = use_signal(PendingSet::<Tag>::default);

    let directory = use_resource(|| load_directory());

    let body = match &*directory.read() {
        None => rsx! { p { class: "loading", "Loading..." } },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: err.to_string() }
        },
        Some(Ok(dir)) => {
            let filter = FacultyFilter {
                name: name(),
                department_id: department_id(),
                technology_ids: tech_filter.read().ids(),
            };
            let empty: Vec<i64> = Vec::new();
            let visible: Vec<&Faculty> = dir
                .faculty
                .iter()
                .filter(|f| {
                    let techs = dir.tech_by_faculty.get(&f.faculty_id).unwrap_or(&empty);
                    filter.matches(f, techs)
                })
                .collect();
            let tech_options: Vec<Tag> = dir.technologies.iter().map(Tag::from).collect();

            rsx! {
                div {
                    class: "filter-bar",
                    input {
                        class: "input",
                        placeholder: "Search by name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    select {
                        class: "input",
                        onchange: move |evt| department_id.set(evt.value().parse().ok()),
                        option { value: "", "All Departments" }
                        for dept in dir.departments.iter() {
                            option {
                                key: "{dept.department_id}",
                                value: "{dept.department_id}",
                                selected: department_id() == Some(dept.department_id),
                                "{dept.name}"
                            }
                        }
                    }
                    AssociationPicker {
                        label: "Technologies",
                        placeholder: "Search technologies...",
                        options: tech_options,
                        selected: tech_filter,
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            name.set(String::new());
                            department_id.set(None);
                            tech_filter.set(PendingSet::default());
                        },
                        "Clear Filters"
                    }
                }

                p {
                    class: "result-count",
                    "Showing {visible.len()} of {dir.faculty.len()} faculty"
                }

                table {
                    class: "directory-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Department" }
                            th { "Designation" }
                            th { "Role" }
                            th { "Email" }
                            th { "Phone" }
                        }
                    }
                    tbody {
                        for member in visible {
                            tr {
                                key: "{member.faculty_id}",
                                td { "{member.name}" }
                                td {
                                    {dir.departments.iter()
                                        .find(|d| d.department_id == member.department_id)
                                        .map(|d| d.name.clone())
                                        .unwrap_or_else(|| "N/A".to_string())}
                                }
                                td { "{member.designation}" }
                                td { "{member.role}" }
                                td { "{member.personal_email}" }
                                td { "{member.phone_no}" }
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
            h2 { "Faculty Directory" }
            {body}
        }
    }
}
