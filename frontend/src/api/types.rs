use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier fields arrive as strings from newer endpoints and as integers
/// from older ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LooseId {
    Text(String),
    Number(i64),
}

impl fmt::Display for LooseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseId::Text(text) => write!(f, "{}", text),
            LooseId::Number(number) => write!(f, "{}", number),
        }
    }
}

/// A role attached to the stored session. The backend has shipped both plain
/// labels and `{ "name": ... }` objects; anything else is tolerated but
/// carries no label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RoleEntry {
    Label(String),
    Named { name: String },
    Other(Value),
}

impl RoleEntry {
    pub fn label(&self) -> Option<&str> {
        match self {
            RoleEntry::Label(label) => Some(label),
            RoleEntry::Named { name } => Some(name),
            RoleEntry::Other(_) => None,
        }
    }
}

/// The viewer's session as persisted under the `user` localStorage key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoredUser {
    #[serde(default)]
    pub id: Option<LooseId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "one_or_many_roles")]
    pub roles: Vec<RoleEntry>,
}

fn one_or_many_roles<'de, D>(deserializer: D) -> Result<Vec<RoleEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<RoleEntry>),
        One(RoleEntry),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(roles) => roles,
        OneOrMany::One(role) => vec![role],
    })
}

/// Role display field that is sometimes a single label and sometimes a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RoleNames {
    One(String),
    Many(Vec<String>),
}

impl RoleNames {
    pub fn joined(&self) -> String {
        match self {
            RoleNames::One(label) => label.clone(),
            RoleNames::Many(labels) => labels.join(", "),
        }
    }
}

/// Per-employee attendance snapshot nested in the employee record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub can_checkin: bool,
    #[serde(default)]
    pub can_checkout: bool,
}

/// One employee as returned by the list endpoint. Every field is optional;
/// the table projection supplies the display fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmployeeRecord {
    #[serde(default)]
    pub id: Option<LooseId>,
    #[serde(default)]
    pub employee_id: Option<LooseId>,
    #[serde(default)]
    pub user_id: Option<LooseId>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role_names: Option<RoleNames>,
    #[serde(default)]
    pub roles: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub can_manage_attendance: bool,
    #[serde(default)]
    pub attendance_status: Option<AttendanceStatus>,
}

/// Envelope returned by `GET /employees`. Either `employees` or `data` holds
/// the collection, depending on the endpoint version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub employees: Option<Vec<EmployeeRecord>>,
    #[serde(default)]
    pub data: Option<Vec<EmployeeRecord>>,
}

impl EmployeeListResponse {
    pub fn into_records(self) -> Vec<EmployeeRecord> {
        self.employees.or(self.data).unwrap_or_default()
    }
}
