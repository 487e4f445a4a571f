#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{RoleEntry, StoredUser};
    use crate::state::session::SessionState;
    use leptos::*;

    pub fn hr_user() -> StoredUser {
        StoredUser {
            username: Some("hr-manager".into()),
            full_name: Some("HR Manager".into()),
            roles: vec![RoleEntry::Label("HR Manager".into())],
            ..StoredUser::default()
        }
    }

    pub fn regular_user() -> StoredUser {
        StoredUser {
            username: Some("member".into()),
            full_name: Some("Regular Member".into()),
            roles: vec![RoleEntry::Label("employee".into())],
            ..StoredUser::default()
        }
    }

    pub fn provide_session(
        user: Option<StoredUser>,
    ) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
        let (session, set_session) = create_signal(SessionState { user });
        provide_context((session, set_session));
        (session, set_session)
    }
}
