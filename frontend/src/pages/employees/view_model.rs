use std::rc::Rc;

use leptos::*;

use crate::api::{ApiClient, EmployeeFetchError, EmployeeRecord};
use crate::state::notification::{Notification, Severity};
use crate::state::session::{has_capability, use_session};

use super::attendance::{AttendanceAction, AttendanceError};
use super::repository::EmployeesRepository;
use super::utils::EmployeeRow;

/// Everything the employees view needs, as copyable signal handles.
#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub can_manage_hr: Memo<bool>,
    pub notification: RwSignal<Notification>,
    pub rows: Signal<Vec<EmployeeRow>>,
    pub on_attendance_action: Callback<(String, AttendanceAction)>,
    pub on_close_notification: Callback<()>,
}

/// Map a fetch failure onto the modal. A missing token stays silent, the
/// viewer simply is not signed in and an empty table is the right answer.
pub fn notification_for_fetch_error(error: &EmployeeFetchError) -> Notification {
    match error {
        EmployeeFetchError::MissingCredentials => Notification::Closed,
        EmployeeFetchError::Unauthorized(_) => Notification::open(
            "Unauthorized",
            "Please login to access employees data.",
            Severity::Error,
        ),
        EmployeeFetchError::Rejected => Notification::open(
            "Error",
            "Failed to load employees data.",
            Severity::Error,
        ),
        EmployeeFetchError::Network(_) => Notification::open(
            "Error",
            "Network error while fetching employees.",
            Severity::Error,
        ),
    }
}

pub fn notification_for_attendance_error(error: &AttendanceError) -> Notification {
    Notification::open("Info", error.to_string(), Severity::Info)
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let (session, _set_session) = use_session();
    let client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(client));

    let can_manage_hr =
        create_memo(move |_| session.with(|state| has_capability(state.user.as_ref(), "hr")));

    let notification = create_rw_signal(Notification::default());

    let reload = create_rw_signal(0u32);
    let fetch_repository = repository.clone();
    let employees_resource: Resource<u32, Result<Vec<EmployeeRecord>, EmployeeFetchError>> =
        create_resource(
            move || reload.get(),
            move |_| {
                let repository = fetch_repository.clone();
                async move { repository.fetch_employees().await }
            },
        );

    create_effect(move |_| {
        if let Some(Err(error)) = employees_resource.get() {
            log::warn!("employee fetch failed: {}", error);
            let next = notification_for_fetch_error(&error);
            if next.is_open() {
                notification.set(next);
            }
        }
    });

    let rows = Signal::derive(move || {
        employees_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, record)| EmployeeRow::from_record(index, record))
            .collect::<Vec<_>>()
    });

    let action_repository = repository.clone();
    let on_attendance_action = Callback::new(move |(employee_id, action): (String, AttendanceAction)| {
        if let Err(error) = action_repository.attendance_action(&employee_id, action) {
            log::info!("{}", error);
            notification.set(notification_for_attendance_error(&error));
        }
    });

    let on_close_notification = Callback::new(move |()| notification.set(Notification::Closed));

    EmployeesViewModel {
        can_manage_hr,
        notification,
        rows,
        on_attendance_action,
        on_close_notification,
    }
}
