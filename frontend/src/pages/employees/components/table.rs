use leptos::*;

use crate::pages::employees::attendance::AttendanceAction;
use crate::pages::employees::utils::EmployeeRow;

const HEADER_CELL_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";

#[component]
pub fn EmployeeTable(
    #[prop(into)] rows: Signal<Vec<EmployeeRow>>,
    #[prop(into)] can_manage_hr: Signal<bool>,
    on_action: Callback<(String, AttendanceAction)>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg overflow-hidden">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class=HEADER_CELL_CLASS>{"Employee"}</th>
                        <th class=HEADER_CELL_CLASS>{"Email"}</th>
                        <th class=HEADER_CELL_CLASS>{"Role"}</th>
                        <th class=HEADER_CELL_CLASS>{"Department"}</th>
                        <th class=HEADER_CELL_CLASS>{"Status"}</th>
                        <th class=HEADER_CELL_CLASS>{"Attendance"}</th>
                        <th class=HEADER_CELL_CLASS>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    <For
                        each=move || rows.get()
                        key=|row| row.key.clone()
                        children=move |row| {
                            view! {
                                <EmployeeTableRow
                                    row=row
                                    can_manage_hr=can_manage_hr
                                    on_action=on_action
                                />
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn EmployeeTableRow(
    row: EmployeeRow,
    #[prop(into)] can_manage_hr: Signal<bool>,
    on_action: Callback<(String, AttendanceAction)>,
) -> impl IntoView {
    let status_badge_class = if row.is_active {
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-green-100 text-green-800"
    } else {
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-red-100 text-red-800"
    };
    let attendance_badge_class = if row.is_present {
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-green-100 text-green-800"
    } else {
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-gray-100 text-gray-800"
    };

    // Permissions and attendance windows are fixed for the life of the row,
    // so the buttons render statically instead of through Show.
    let check_in_target = row.action_target.clone();
    let check_in_button = row.can_check_in.then(|| {
        view! {
            <button
                type="button"
                title="Check In"
                class="text-blue-600 hover:text-blue-900 text-xs font-medium"
                on:click=move |_| on_action.call((check_in_target.clone(), AttendanceAction::CheckIn))
            >
                {"In"}
            </button>
        }
    });
    let check_out_target = row.action_target.clone();
    let check_out_button = row.can_check_out.then(|| {
        view! {
            <button
                type="button"
                title="Check Out"
                class="text-orange-600 hover:text-orange-900 text-xs font-medium"
                on:click=move |_| on_action.call((check_out_target.clone(), AttendanceAction::CheckOut))
            >
                {"Out"}
            </button>
        }
    });

    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm font-medium text-gray-900">{row.name}</div>
                <div class="text-sm text-gray-500">{row.identifier}</div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{row.email}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{row.role}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{row.department}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=status_badge_class>
                    {if row.is_active { "Active" } else { "Inactive" }}
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=attendance_badge_class>{row.attendance}</span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                <div class="flex items-center gap-2">
                    {check_in_button}
                    {check_out_button}
                    <button
                        type="button"
                        title="View"
                        class="text-blue-600 hover:text-blue-900"
                    >
                        <i class="fas fa-eye"></i>
                    </button>
                    <Show when=move || can_manage_hr.get()>
                        <button
                            type="button"
                            title="Edit"
                            class="text-green-600 hover:text-green-900"
                        >
                            <i class="fas fa-edit"></i>
                        </button>
                        <button
                            type="button"
                            title="Delete"
                            class="text-red-600 hover:text-red-900"
                        >
                            <i class="fas fa-trash"></i>
                        </button>
                    </Show>
                </div>
            </td>
        </tr>
    }
}
