//! Student directory: full fetch up front, pure client-side filtering.

use std::collections::HashMap;

use api::{fanout, ApiError, Department, Student, Technology};
use dioxus::prelude::*;

use ui::{AssociationPicker, Button, ButtonVariant, ErrorBanner, PendingSet, StudentFilter, Tag};

/// Everything the table needs, fetched once on mount.
#[derive(Clone)]
struct Directory {
    students: Vec<Student>,
    technologies: Vec<Technology>,
    departments: Vec<Department>,
    tech_by_student: HashMap<i64, Vec<i64>>,
}

async fn load_directory() -> Result<Directory, ApiError> {
    let client = ui::make_client();
    let students = client.students().await?;

    // Reference tables are independent of the main list; a failure there
    // degrades the filter bar, not the table.
    let technologies = client.technologies().await.unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load technologies");
        Vec::new()
    });
    let departments = client.departments().await.unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load departments");
        Vec::new()
    });

    let ids: Vec<i64> = students.iter().map(|s| s.student_id).collect();
    let joins = fanout::fetch_map(ids, |id| {
        let client = client.clone();
        async move { client.student_technologies(id).await }
    })
    .await;
    let tech_by_student = joins
        .into_iter()
        .map(|(id, rows)| (id, rows.into_iter().map(|r| r.technology_id).collect()))
        .collect();

    Ok(Directory {
        students,
        technologies,
        departments,
        tech_by_student,
    })
}

#[component]
pub fn Students() -> Element {
    let mut name = use_signal(String::new);
    let mut usn = use_signal(String::new);
    let mut department_id = use_signal(|| Option::<i64>::None);
    let mut tech_filter = use_signal(PendingSet::<Tag>::default);

    let directory = use_resource(|| load_directory());

    let body = match &*directory.read() {
        None => rsx! { p { class: "loading", "Loading..." } },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: err.to_string() }
        },
        Some(Ok(dir)) => {
            let filter = StudentFilter {
                name: name(),
                usn: usn(),
                department_id: department_id(),
                technology_ids: tech_filter.read().ids(),
            };
            let empty: Vec<i64> = Vec::new();
            let visible: Vec<&Student> = dir
                .students
                .iter()
                .filter(|s| {
                    let techs = dir.tech_by_student.get(&s.student_id).unwrap_or(&empty);
                    filter.matches(s, techs)
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
                    input {
                        class: "input",
                        placeholder: "Search by USN",
                        value: "{usn}",
                        oninput: move |evt| usn.set(evt.value()),
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
                            usn.set(String::new());
                            department_id.set(None);
                            tech_filter.set(PendingSet::default());
                        },
                        "Clear Filters"
                    }
                }

                p {
                    class: "result-count",
                    "Showing {visible.len()} of {dir.students.len()} students"
                }

                table {
                    class: "directory-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "USN" }
                            th { "Department" }
                            th { "CGPA" }
                            th { "Email" }
                            th { "Phone" }
                        }
                    }
                    tbody {
                        for student in visible {
                            tr {
                                key: "{student.student_id}",
                                td { "{student.name}" }
                                td { "{student.usn}" }
                                td {
                                    {dir.departments.iter()
                                        .find(|d| d.department_id == student.department_id)
                                        .map(|d| d.name.clone())
                                        .unwrap_or_else(|| "N/A".to_string())}
                                }
                                td { "{student.cgpa}" }
                                td { "{student.personal_email}" }
                                td { "{student.phone_no}" }
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
            h2 { "Student Directory" }
            {body}
        }
    }
}
