use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::client::ApiClient;
use super::types::{EmployeeListResponse, EmployeeRecord};

pub const EMPLOYEES_PAGE: u32 = 1;
pub const EMPLOYEES_PAGE_LIMIT: u32 = 50;

/// Failure classes for the employee list fetch. `MissingCredentials` is the
/// only one the UI keeps silent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum EmployeeFetchError {
    /// No bearer token in storage; no request is made.
    #[error("no access token in storage")]
    MissingCredentials,
    /// The server answered with a non-success status.
    #[error("request rejected with status {0}")]
    Unauthorized(u16),
    /// HTTP success, but the body was failure-flagged.
    #[error("server reported a failure")]
    Rejected,
    /// Transport or decode failure.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiClient {
    /// Fetch the first page of employees. Requires a stored bearer token;
    /// without one the call returns immediately and nothing hits the wire.
    pub async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, EmployeeFetchError> {
        let token =
            Self::stored_bearer_token().ok_or(EmployeeFetchError::MissingCredentials)?;
        let headers = Self::auth_headers(&token).map_err(EmployeeFetchError::Network)?;

        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/employees", base_url))
            .query(&[
                ("page", EMPLOYEES_PAGE.to_string()),
                ("limit", EMPLOYEES_PAGE_LIMIT.to_string()),
            ])
            .headers(headers)
            .send()
            .await
            .map_err(|e| EmployeeFetchError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmployeeFetchError::Unauthorized(status.as_u16()));
        }

        let body: EmployeeListResponse = response
            .json()
            .await
            .map_err(|e| EmployeeFetchError::Network(format!("Failed to parse response: {}", e)))?;
        if !body.success {
            return Err(EmployeeFetchError::Rejected);
        }
        Ok(body.into_records())
    }
}
