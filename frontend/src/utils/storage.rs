//! Browser localStorage access.
//!
//! Off-wasm (SSR render tests and host-side HTTP tests) the same API is
//! backed by a thread-local map so tests can seed the persisted session.

pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const USER: &str = "user";
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::Storage;

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    pub fn set_item(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove_item(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove_item(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

pub fn get_item(key: &str) -> Option<String> {
    backend::get_item(key)
}

pub fn set_item(key: &str, value: &str) {
    backend::set_item(key, value)
}

pub fn remove_item(key: &str) {
    backend::remove_item(key)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_store_round_trips_values() {
        assert!(get_item("missing").is_none());

        set_item(keys::ACCESS_TOKEN, "token-1");
        assert_eq!(get_item(keys::ACCESS_TOKEN).as_deref(), Some("token-1"));

        remove_item(keys::ACCESS_TOKEN);
        assert!(get_item(keys::ACCESS_TOKEN).is_none());
    }
}
