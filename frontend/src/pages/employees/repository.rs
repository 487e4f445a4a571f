use std::rc::Rc;

use crate::api::{ApiClient, EmployeeFetchError, EmployeeRecord};

use super::attendance::{
    AttendanceAction, AttendanceError, AttendanceService, StubAttendanceService,
};

/// Data access for the employees page. Holds the API client plus the
/// attendance seam so the view model stays free of transport details.
#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
    attendance: Rc<dyn AttendanceService>,
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        EmployeesRepository {
            client,
            attendance: Rc::new(StubAttendanceService),
        }
    }

    #[allow(dead_code)]
    pub fn with_attendance_service(mut self, attendance: Rc<dyn AttendanceService>) -> Self {
        self.attendance = attendance;
        self
    }

    pub async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, EmployeeFetchError> {
        self.client.fetch_employees().await
    }

    pub fn attendance_action(
        &self,
        employee_id: &str,
        action: AttendanceAction,
    ) -> Result<(), AttendanceError> {
        self.attendance.perform(employee_id, action)
    }
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}
