//! Searchable multi-select used by the project editor and the
//! profile technology pickers.

use dioxus::prelude::*;

use crate::components::TagChip;
use crate::pending::{PendingSet, Tag};

const SUGGESTION_LIMIT: usize = 5;

/// Type-to-search picker over a fixed option list. Matches are shown
/// only while the query is non-empty; picking one adds it to the
/// pending set and clears the query. Selected entries render as chips
/// that can be removed individually.
#[component]
pub fn AssociationPicker(
    label: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    options: Vec<Tag>,
    selected: Signal<PendingSet<Tag>>,
) -> Element {
    let mut query = use_signal(String::new);

    let chips: Vec<Tag> = selected.read().items().to_vec();
    let matches: Vec<Tag> = if query.read().is_empty() {
        Vec::new()
    } else {
        selected
            .read()
            .suggestions(&options, &query.read(), SUGGESTION_LIMIT)
    };

    rsx! {
        div {
            class: "picker",
            label { class: "field-label", "{label}" }
            input {
                class: "input picker-search",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            if !matches.is_empty() {
                ul {
                    class: "picker-suggestions",
                    for option in matches {
                        li {
                            key: "{option.id}",
                            class: "picker-suggestion",
                            onclick: {
                                let option = option.clone();
                                move |_| {
                                    selected.write().toggle(option.clone());
                                    query.set(String::new());
                                }
                            },
                            "{option.label}"
                        }
                    }
                }
            }
            div {
                class: "picker-chips",
                for chip in chips {
                    TagChip {
                        key: "{chip.id}",
                        label: chip.label.clone(),
                        on_remove: {
                            let id = chip.id;
                            move |_| {
                                selected.write().remove(id);
                            }
                        },
                    }
                }
            }
        }
    }
}
