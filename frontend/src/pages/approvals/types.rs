use crate::api::LeaveRecord;

/// Display row for one pending leave request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRow {
    pub id: String,
    pub employee_id: String,
    pub date_range: String,
    pub days_label: String,
    pub reason: Option<String>,
}

impl PendingRow {
    pub fn from_record(record: &LeaveRecord) -> Self {
        Self {
            id: record.id.clone(),
            employee_id: record.employee_id.clone(),
            date_range: format_date_range(&record.start_date, &record.end_date),
            days_label: format_days(record.days),
            reason: record.reason.clone().filter(|r| !r.is_empty()),
        }
    }
}

pub fn format_date_range(start: &str, end: &str) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{} to {}", start, end)
    }
}

pub fn format_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

pub fn rows_from_pending(pending: &[LeaveRecord]) -> Vec<PendingRow> {
    pending.iter().map(PendingRow::from_record).collect()
}
