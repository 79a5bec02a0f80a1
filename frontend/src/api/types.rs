use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Employee creation payload. Fields travel exactly as typed; the backend
/// owns validation and identifier assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeePayload {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub joining_date: String,
}

/// Leave application payload. Dates travel as `YYYY-MM-DD` strings, unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeavePayload {
    pub id: String,
    pub employee_id: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

/// Body for approve/reject. Approve sends the id alone; reject also carries
/// the operator's reason, empty string included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionPayload {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextIdResponse {
    pub next_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub joining_date: String,
    #[serde(default)]
    pub leave_balance: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreated {
    pub message: String,
    #[serde(default)]
    pub employee: Option<EmployeeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaveRecord {
    pub id: String,
    pub employee_id: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(deserialize_with = "deserialize_days")]
    pub days: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub applied_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApplied {
    pub message: String,
    #[serde(default)]
    pub leave: Option<LeaveRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDecision {
    pub message: String,
    #[serde(default)]
    pub leave: Option<LeaveRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PendingLeavesResponse {
    #[serde(default)]
    pub pending: Vec<LeaveRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeesResponse {
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceResponse {
    pub employee_id: String,
    pub balance: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

// The Excel-backed store round-trips every column through strings, so day
// counts arrive as "3" as often as 3. Accept both, plus float encodings.
fn deserialize_days<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDays {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match RawDays::deserialize(deserializer)? {
        RawDays::Int(n) => Ok(n),
        RawDays::Float(f) => Ok(f as i64),
        RawDays::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid day count: {:?}", s))),
    }
}

/// Picks the user-facing text out of a backend body: `message` when present,
/// else `detail` (FastAPI error shape), else nothing.
pub fn surface_message(body: &Value) -> Option<String> {
    if let Some(message) = body.get("message").and_then(|v| v.as_str()) {
        return Some(message.to_string());
    }
    match body.get("detail") {
        Some(Value::String(detail)) => Some(detail.clone()),
        Some(other) if !other.is_null() => Some(other.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "PARSE_ERROR".to_string(),
            details: None,
        }
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "BACKEND_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }
}
