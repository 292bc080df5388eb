//! History entry types.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a round was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// First generation from the user's requirement.
    Initial,
    /// Repair of the previous script after an error report.
    ErrorFix,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Initial => "initial generation",
            EntryKind::ErrorFix => "error fix",
        }
    }
}

/// One generation round. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Time-ordered UUID (v7)
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub kind: EntryKind,
    /// The user's requirement, or the error description for a fix round
    pub request: String,
    pub script: String,
    pub explanation: Option<String>,
    pub error_description: Option<String>,
    /// Error screenshot as a data URI
    pub error_image: Option<String>,
}

impl HistoryEntry {
    /// Record for a successful initial generation.
    pub fn initial(request: impl Into<String>, script: impl Into<String>) -> Self {
        Self::new(EntryKind::Initial, request.into(), script.into())
    }

    /// Record for a successful fix. The error description doubles as the request.
    pub fn error_fix(
        error_description: impl Into<String>,
        script: impl Into<String>,
        error_image: Option<String>,
    ) -> Self {
        let description = error_description.into();
        let mut entry = Self::new(EntryKind::ErrorFix, description.clone(), script.into());
        entry.error_description = Some(description);
        entry.error_image = error_image;
        entry
    }

    fn new(kind: EntryKind, request: String, script: String) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            created_at: Utc::now(),
            kind,
            request,
            script,
            explanation: None,
            error_description: None,
            error_image: None,
        }
    }

    /// Local-time timestamp as shown to the user and the model.
    pub fn display_timestamp(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }

    /// `"<n>. <kind> - <timestamp>"` for the history list; `round` is 1-based.
    pub fn summary_line(&self, round: usize) -> String {
        format!("{}. {} - {}", round, self.kind.label(), self.display_timestamp())
    }
}
