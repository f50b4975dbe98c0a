//! Analytics dashboard: one selector, four derivations, bars as
//! proportional-width rows. All charts are computed from data fetched once
//! on mount; switching charts never refetches.

use api::{fanout, ApiError, Project, ProjectTechnology, ProjectTheme, Technology, Theme};
use dioxus::prelude::*;

use ui::dashboard::{
    projects_per_status, projects_per_technology, projects_per_theme, students_by_theme, Slice,
};
use ui::ErrorBanner;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Chart {
    ProjectsPerTechnology,
    ProjectsPerTheme,
    StudentsByTheme,
    ProjectsPerStatus,
}

impl Chart {
    const ALL: [Chart; 4] = [
        Chart::ProjectsPerTechnology,
        Chart::ProjectsPerTheme,
        Chart::StudentsByTheme,
        Chart::ProjectsPerStatus,
    ];

    fn title(&self) -> &'static str {
        match self {
            Chart::ProjectsPerTechnology => "Projects per Technology",
            Chart::ProjectsPerTheme => "Projects per Theme",
            Chart::StudentsByTheme => "Students by Theme",
            Chart::ProjectsPerStatus => "Projects per Status",
        }
    }

    fn parse(s: &str) -> Option<Chart> {
        Chart::ALL.into_iter().find(|c| c.title() == s)
    }
}

#[derive(Clone)]
struct ChartData {
    projects: Vec<Project>,
    technologies: Vec<Technology>,
    themes: Vec<Theme>,
    tech_rows: Vec<ProjectTechnology>,
    theme_rows: Vec<ProjectTheme>,
}

async fn load_chart_data() -> Result<ChartData, ApiError> {
    let client = ui::make_client();
    let projects = client.projects().await?;
    let technologies = client.technologies().await?;
    let themes = client.themes().await?;

    let ids: Vec<i64> = projects.iter().map(|p| p.project_id).collect();
    let tech_map = fanout::fetch_map(ids.clone(), |id| {
        let client = client.clone();
        async move { client.project_technologies(id).await }
    })
    .await;
    let theme_map = fanout::fetch_map(ids, |id| {
        let client = client.clone();
        async move { client.project_themes(id).await }
    })
    .await;

    Ok(ChartData {
        projects,
        technologies,
        themes,
        tech_rows: tech_map.into_values().flatten().collect(),
        theme_rows: theme_map.into_values().flatten().collect(),
    })
}

#[component]
pub fn Charts() -> Element {
    let mut chart = use_signal(|| Chart::ProjectsPerTechnology);

    let data = use_resource(|| load_chart_data());

    let body = match &*data.read() {
        None => rsx! { p { class: "loading", "Loading..." } },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: err.to_string() }
        },
        Some(Ok(data)) => {
            let slices = match chart() {
                Chart::ProjectsPerTechnology => {
                    projects_per_technology(&data.tech_rows, &data.technologies)
                }
                Chart::ProjectsPerTheme => projects_per_theme(&data.theme_rows, &data.themes),
                Chart::StudentsByTheme => {
                    students_by_theme(&data.projects, &data.theme_rows, &data.themes)
                }
                Chart::ProjectsPerStatus => projects_per_status(&data.projects),
            };

            rsx! {
                select {
                    class: "input chart-select",
                    onchange: move |evt| {
                        if let Some(parsed) = Chart::parse(&evt.value()) {
                            chart.set(parsed);
                        }
                    },
                    for c in Chart::ALL {
                        option {
                            key: "{c.title()}",
                            value: "{c.title()}",
                            selected: chart() == c,
                            "{c.title()}"
                        }
                    }
                }

                BarChart { slices }
            }
        }
    };

    rsx! {
        div {
            class: "charts-page",
            h2 { "Charts" }
            {body}
        }
    }
}

#[component]
fn BarChart(slices: Vec<Slice>) -> Element {
    let max = slices.iter().map(|s| s.value).max().unwrap_or(0);
    let rows: Vec<(String, i64, i64)> = slices
        .iter()
        .map(|s| (s.label.clone(), s.value, percent(s.value, max)))
        .collect();

    rsx! {
        div {
            class: "bar-chart",
            if rows.is_empty() {
                p { class: "empty-state", "No data to chart yet." }
            } else {
                for (label, value, width) in rows {
                    div {
                        key: "{label}",
                        class: "bar-row",
                        span { class: "bar-label", "{label}" }
                        div {
                            class: "bar-fill",
                            style: "width: {width}%;",
                        }
                        span { class: "bar-value", "{value}" }
                    }
                }
            }
        }
    }
}

fn percent(value: i64, max: i64) -> i64 {
    if max == 0 {
        0
    } else {
        value * 100 / max
    }
}
