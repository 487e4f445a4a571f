use leptos::*;

use crate::components::layout::Layout;
use crate::components::notification_modal::NotificationModal;

use super::components::table::EmployeeTable;
use super::layout::EmployeesFrame;
use super::view_model::use_employees_view_model;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();

    view! {
        <Layout>
            <EmployeesFrame can_manage_hr=vm.can_manage_hr>
                <EmployeeTable
                    rows=vm.rows
                    can_manage_hr=vm.can_manage_hr
                    on_action=vm.on_attendance_action
                />
            </EmployeesFrame>
            <NotificationModal
                notification=vm.notification
                on_close=vm.on_close_notification
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{hr_user, provide_session, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_frame_and_table_for_hr_viewer() {
        let html = render_to_string(move || {
            provide_session(Some(hr_user()));
            view! { <EmployeesPage /> }
        });
        assert!(html.contains("Employee Management"));
        assert!(html.contains("Add Employee"));
        assert!(html.contains("Attendance"));
    }

    #[test]
    fn regular_viewer_gets_the_table_without_hr_controls() {
        let html = render_to_string(move || {
            provide_session(Some(regular_user()));
            view! { <EmployeesPage /> }
        });
        assert!(html.contains("Employee Management"));
        assert!(!html.contains("Add Employee"));
    }

    #[test]
    fn signed_out_viewer_still_renders_the_shell() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <EmployeesPage /> }
        });
        assert!(html.contains("Employee Management"));
        assert!(!html.contains("Add Employee"));
    }
}
