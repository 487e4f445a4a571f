use crate::api::{EmployeeRecord, LooseId};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const NO_ID: &str = "No ID";
pub const NO_EMAIL: &str = "No email";
pub const NO_ROLE: &str = "No role";
pub const NO_DEPARTMENT: &str = "No department";
pub const DEFAULT_ATTENDANCE: &str = "absent";

/// One fully-resolved table row. Every display field is a concrete string;
/// the placeholder fallbacks are applied here so the view never reasons
/// about missing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub key: String,
    pub name: String,
    pub identifier: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub is_active: bool,
    pub attendance: String,
    pub is_present: bool,
    pub can_check_in: bool,
    pub can_check_out: bool,
    pub action_target: String,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

fn loose_id_string(value: Option<&LooseId>) -> Option<String> {
    value.map(LooseId::to_string).filter(|s| !s.is_empty())
}

impl EmployeeRow {
    pub fn from_record(index: usize, record: &EmployeeRecord) -> Self {
        let name = non_empty(record.full_name.as_ref())
            .or_else(|| non_empty(record.name.as_ref()))
            .unwrap_or(UNKNOWN_NAME)
            .to_string();

        let identifier = loose_id_string(record.employee_id.as_ref())
            .or_else(|| loose_id_string(record.user_id.as_ref()))
            .unwrap_or_else(|| NO_ID.to_string());

        let email = non_empty(record.email.as_ref())
            .unwrap_or(NO_EMAIL)
            .to_string();

        // role_names wins when it joins to something non-empty; otherwise the
        // flat string fields, oldest API shape last.
        let role = record
            .role_names
            .as_ref()
            .map(|names| names.joined())
            .filter(|joined| !joined.is_empty())
            .or_else(|| non_empty(record.roles.as_ref()).map(str::to_string))
            .or_else(|| non_empty(record.role.as_ref()).map(str::to_string))
            .unwrap_or_else(|| NO_ROLE.to_string());

        let department = non_empty(record.department.as_ref())
            .unwrap_or(NO_DEPARTMENT)
            .to_string();

        let attendance_status = record.attendance_status.as_ref();
        let attendance = attendance_status
            .and_then(|status| non_empty(status.status.as_ref()))
            .unwrap_or(DEFAULT_ATTENDANCE)
            .to_string();
        let is_present = attendance == "present";

        let can_check_in = record.can_manage_attendance
            && attendance_status.map(|s| s.can_checkin).unwrap_or(false);
        let can_check_out = record.can_manage_attendance
            && attendance_status.map(|s| s.can_checkout).unwrap_or(false);

        let action_target = loose_id_string(record.user_id.as_ref())
            .or_else(|| loose_id_string(record.employee_id.as_ref()))
            .unwrap_or_else(|| "unknown".to_string());

        let key = loose_id_string(record.id.as_ref()).unwrap_or_else(|| index.to_string());

        EmployeeRow {
            key,
            name,
            identifier,
            email,
            role,
            department,
            is_active: record.is_active != Some(false),
            attendance,
            is_present,
            can_check_in,
            can_check_out,
            action_target,
        }
    }
}
