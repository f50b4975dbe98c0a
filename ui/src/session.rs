//! Session context for the logged-in user.
//!
//! The identity is memory-only and resets on reload; there is no token and no
//! persistence. Views that need a user read it through [`use_session`], and
//! the auth screen drives the login/logout lifecycle explicitly.

use dioxus::prelude::*;

/// The one piece of cross-page state: who is signed in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Session {
    pub user_id: Option<i64>,
}

impl Session {
    pub fn login(&mut self, user_id: i64) {
        tracing::info!(user_id, "session started");
        self.user_id = Some(user_id);
    }

    pub fn logout(&mut self) {
        tracing::info!("session cleared");
        self.user_id = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session signal.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(Session::default);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let mut session = Session::default();
        assert!(!session.is_logged_in());

        session.login(7);
        assert_eq!(session.user_id, Some(7));

        session.logout();
        assert!(!session.is_logged_in());
    }
}
