#[cfg(target_arch = "wasm32")]
use leptos::*;
#[cfg(target_arch = "wasm32")]
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
use pages::employees::EmployeesPage;

#[cfg(target_arch = "wasm32")]
#[component]
fn App() -> impl IntoView {
    view! {
        <state::session::SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=EmployeesPage/>
                </Routes>
            </Router>
        </state::session::SessionProvider>
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting StaffDesk frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__STAFFDESK_ENV is present (env.js), it takes precedence.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    mount_to_body(|| view! { <App /> });
}
