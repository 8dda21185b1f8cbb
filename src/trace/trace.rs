use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Kinds of activity the journal records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    SessionStarted,
    ListLoaded,
    ListFailed,
    Searched,
    Viewed,
    Cleared,
    Registered,
    LoggedIn,
    LoginRejected,
}

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub kind: ActivityKind,

    pub hospital_id: Option<String>,
    pub viewed_count: Option<usize>,

    pub query: Option<String>,
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(kind: ActivityKind) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            kind,
            hospital_id: None,
            viewed_count: None,
            query: None,
            detail: None,
        }
    }

    pub fn with_hospital(mut self, id: &str) -> Self {
        self.hospital_id = Some(id.to_string());
        self
    }

    pub fn with_viewed_count(mut self, count: usize) -> Self {
        self.viewed_count = Some(count);
        self
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
