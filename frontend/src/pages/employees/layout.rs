use leptos::*;

#[component]
pub fn EmployeesFrame(
    #[prop(into)] can_manage_hr: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-gray-900">{"Employee Management"}</h2>
                <Show when=move || can_manage_hr.get()>
                    <button
                        type="button"
                        class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg text-sm font-medium"
                    >
                        {"Add Employee"}
                    </button>
                </Show>
            </div>
            {children()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn frame_renders_heading_and_children() {
        let html = render_to_string(move || {
            view! {
                <EmployeesFrame can_manage_hr=Signal::derive(|| false)>
                    <div>{"child"}</div>
                </EmployeesFrame>
            }
        });
        assert!(html.contains("Employee Management"));
        assert!(html.contains("child"));
        assert!(!html.contains("Add Employee"));
    }

    #[test]
    fn hr_capability_reveals_the_add_button() {
        let html = render_to_string(move || {
            view! {
                <EmployeesFrame can_manage_hr=Signal::derive(|| true)>
                    <div></div>
                </EmployeesFrame>
            }
        });
        assert!(html.contains("Add Employee"));
    }
}
