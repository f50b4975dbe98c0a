//! # Draft association sets
//!
//! An edit surface holds the associations it is changing as a *pending set*:
//! seeded from the record's current associations when the editor opens,
//! mutated locally, and only written back (as one full-set replacement) on
//! save. One generic type covers technologies, themes, students, and faculty
//! instead of four parallel handler families.
//!
//! Structural invariants:
//!
//! - a key appears at most once — [`PendingSet::toggle`] removes an existing
//!   member rather than duplicating it, so remove-then-re-add nets to
//!   "present";
//! - [`PendingSet::suggestions`] never offers an item that is already
//!   selected.

/// Anything that can live in a pending set: a stable id plus a display label.
pub trait Keyed {
    fn key(&self) -> i64;
    fn label(&self) -> &str;
}

/// The common picker item: reference rows reduced to id + label, exactly the
/// shape every suggestion list and chip renders.
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub label: String,
}

impl Keyed for Tag {
    fn key(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl From<&api::Technology> for Tag {
    fn from(t: &api::Technology) -> Self {
        Tag {
            id: t.technology_id,
            label: t.name.clone(),
        }
    }
}

impl From<&api::Theme> for Tag {
    fn from(t: &api::Theme) -> Self {
        Tag {
            id: t.theme_id,
            label: t.name.clone(),
        }
    }
}

impl From<&api::StudentRef> for Tag {
    fn from(s: &api::StudentRef) -> Self {
        Tag {
            id: s.student_id,
            label: s.usn.clone(),
        }
    }
}

impl From<&api::FacultyRef> for Tag {
    fn from(f: &api::FacultyRef) -> Self {
        Tag {
            id: f.faculty_id,
            label: f.name.clone(),
        }
    }
}

/// A deduplicated, order-preserving draft of one association set.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSet<T: Keyed + Clone> {
    items: Vec<T>,
}

impl<T: Keyed + Clone> Default for PendingSet<T> {
    fn default() -> Self {
        PendingSet { items: Vec::new() }
    }
}

impl<T: Keyed + Clone> PendingSet<T> {
    /// Seed the draft from the record's current associations, dropping any
    /// duplicate keys the server may have handed back.
    pub fn seed(items: impl IntoIterator<Item = T>) -> Self {
        let mut set = PendingSet { items: Vec::new() };
        for item in items {
            if !set.contains(item.key()) {
                set.items.push(item);
            }
        }
        set
    }

    pub fn contains(&self, key: i64) -> bool {
        self.items.iter().any(|item| item.key() == key)
    }

    /// Add the item if absent, remove it if present.
    pub fn toggle(&mut self, item: T) {
        if self.contains(item.key()) {
            self.remove(item.key());
        } else {
            self.items.push(item);
        }
    }

    pub fn remove(&mut self, key: i64) {
        self.items.retain(|item| item.key() != key);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The full desired id set, ready for a replace payload.
    pub fn ids(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive substring matches from `all`, excluding anything
    /// already selected, capped at `limit`.
    pub fn suggestions(&self, all: &[T], query: &str, limit: usize) -> Vec<T> {
        let needle = query.to_lowercase();
        all.iter()
            .filter(|item| {
                item.label().to_lowercase().contains(&needle) && !self.contains(item.key())
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: i64, label: &str) -> Tag {
        Tag {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut pending = PendingSet::seed([tag(1, "Python")]);

        pending.toggle(tag(2, "Go"));
        assert!(pending.contains(2));
        assert_eq!(pending.len(), 2);

        pending.toggle(tag(1, "Python"));
        assert!(!pending.contains(1));
        assert_eq!(pending.ids(), vec![2]);
    }

    #[test]
    fn test_no_duplicate_keys_ever() {
        let mut pending = PendingSet::seed([tag(1, "Python"), tag(1, "Python")]);
        assert_eq!(pending.len(), 1);

        // Remove then re-add nets to present, once.
        pending.remove(1);
        pending.toggle(tag(1, "Python"));
        pending.toggle(tag(1, "Python"));
        pending.toggle(tag(1, "Python"));
        assert_eq!(pending.ids(), vec![1]);
    }

    #[test]
    fn test_suggestions_exclude_selected() {
        let all = vec![tag(1, "Python"), tag(2, "PyTorch"), tag(3, "Go")];
        let pending = PendingSet::seed([tag(1, "Python")]);

        let hits = pending.suggestions(&all, "py", 5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_suggestions_case_insensitive_and_capped() {
        let all: Vec<Tag> = (0..10).map(|i| tag(i, &format!("Rust{i}"))).collect();
        let pending = PendingSet::<Tag>::default();

        let hits = pending.suggestions(&all, "RUST", 5);
        assert_eq!(hits.len(), 5);
    }

    #[test]
    fn test_empty_query_suggests_everything_unselected() {
        let all = vec![tag(1, "AI"), tag(2, "ML")];
        let pending = PendingSet::seed([tag(2, "ML")]);
        let hits = pending.suggestions(&all, "", 5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }
}
