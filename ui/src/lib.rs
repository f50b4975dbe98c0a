//! This crate contains all shared UI for the workspace: the session context,
//! the pending association set, directory filter predicates, dashboard
//! derivations, and the small components the page views compose.

mod session;
pub use session::{use_session, Session, SessionProvider};

pub mod pending;
pub use pending::{PendingSet, Tag};

pub mod filters;
pub use filters::{FacultyFilter, ProjectFilter, StudentFilter};

pub mod dashboard;
pub use dashboard::Slice;

pub mod components;
pub use components::{Button, ButtonVariant, ErrorBanner, Input, Label, ModalOverlay, TagChip};

mod picker;
pub use picker::AssociationPicker;

/// Construct the API client the views talk through.
pub fn make_client() -> api::ApiClient {
    api::ApiClient::from_env()
}
