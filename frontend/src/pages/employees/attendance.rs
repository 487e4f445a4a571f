use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceAction {
    CheckIn,
    CheckOut,
}

impl AttendanceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceAction::CheckIn => "checkin",
            AttendanceAction::CheckOut => "checkout",
        }
    }
}

impl fmt::Display for AttendanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    #[error("Attendance action \"{action}\" for employee {employee_id} is not implemented.")]
    Unimplemented {
        action: AttendanceAction,
        employee_id: String,
    },
}

/// Seam for the eventual attendance endpoint; the page only depends on this
/// trait, so swapping in a real client later is a one-line change in the
/// repository constructor.
pub trait AttendanceService {
    fn perform(&self, employee_id: &str, action: AttendanceAction) -> Result<(), AttendanceError>;
}

/// Placeholder until the attendance endpoint ships. Always refuses and names
/// the attempted action so the UI can echo it back.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAttendanceService;

impl AttendanceService for StubAttendanceService {
    fn perform(&self, employee_id: &str, action: AttendanceAction) -> Result<(), AttendanceError> {
        Err(AttendanceError::Unimplemented {
            action,
            employee_id: employee_id.to_string(),
        })
    }
}
