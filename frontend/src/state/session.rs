use crate::api::{RoleEntry, StoredUser};
use crate::utils::storage;
use leptos::*;

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<StoredUser>,
}

/// Read the persisted session. Absent or malformed entries leave the viewer
/// signed out; malformed JSON is only debug-logged, never surfaced.
pub fn load_stored_user() -> Option<StoredUser> {
    let raw = storage::get_item(storage::keys::USER)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::debug!("ignoring malformed stored session: {}", err);
            None
        }
    }
}

fn create_session_context() -> SessionContext {
    let (session, set_session) = create_signal(SessionState::default());
    set_session.update(|state| state.user = load_stored_user());
    (session, set_session)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

/// Heuristic capability check: true when any role label contains the
/// capability as a case-insensitive substring. Callers must tolerate false
/// positives on substring overlap.
pub fn has_capability(user: Option<&StoredUser>, capability: &str) -> bool {
    let Some(user) = user else { return false };
    let needle = capability.to_lowercase();
    user.roles
        .iter()
        .filter_map(RoleEntry::label)
        .any(|label| label.to_lowercase().contains(&needle))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_session_returns_default_without_context() {
        with_runtime(|| {
            let (session, _set_session) = use_session();
            assert!(session.get().user.is_none());
        });
    }

    #[test]
    fn load_stored_user_reads_valid_session() {
        storage::set_item(
            storage::keys::USER,
            r#"{"username":"alice","roles":["hr"]}"#,
        );
        let user = load_stored_user().unwrap();
        storage::remove_item(storage::keys::USER);

        assert_eq!(user.username.as_deref(), Some("alice"));
        assert!(has_capability(Some(&user), "hr"));
    }

    #[test]
    fn load_stored_user_silently_ignores_malformed_json() {
        storage::set_item(storage::keys::USER, "{not json");
        assert!(load_stored_user().is_none());
        storage::remove_item(storage::keys::USER);
    }

    #[test]
    fn load_stored_user_returns_none_when_absent() {
        assert!(load_stored_user().is_none());
    }
}
