use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Identity of one invocation, shared by every batch and reporter of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunContext {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    /// Locale root scanned by this run, as given by config or CLI.
    pub locale_root: String,
}

impl RunContext {
    pub fn new(locale_root: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            locale_root: locale_root.into(),
        }
    }
}
