//! Log entry types for operation tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A log entry recording an operation execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry (ULID format)
    pub id: String,

    /// When the operation occurred
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "move task", "add column")
    pub op: String,

    /// The normalized input parameters (as JSON)
    pub input: Value,

    /// The result value or error (as JSON)
    pub output: Value,

    /// Who performed the operation (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// How long the operation took (milliseconds)
    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Create a log entry for a failed operation
    pub fn failure(op: impl Into<String>, input: Value, error: &str, duration_ms: u64) -> Self {
        Self::new(
            op,
            input,
            serde_json::json!({ "error": error }),
            None,
            duration_ms,
        )
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Whether this entry records a failure
    pub fn is_failure(&self) -> bool {
        self.output.get("error").is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_entry_creation() {
        let entry = LogEntry::new(
            "move task",
            json!({"taskId": "task-1"}),
            json!({"column": "column-2"}),
            None,
            3,
        );

        assert_eq!(entry.op, "move task");
        assert_eq!(entry.duration_ms, 3);
        assert!(entry.actor.is_none());
        assert!(!entry.is_failure());
        // ULID should be 26 chars
        assert_eq!(entry.id.len(), 26);
    }

    #[test]
    fn test_log_entry_with_actor() {
        let entry = LogEntry::new("add column", Value::Null, Value::Null, None, 0)
            .with_actor("alice");
        assert_eq!(entry.actor, Some("alice".into()));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["actor"], "alice");
    }

    #[test]
    fn test_failure_entry() {
        let entry = LogEntry::failure("delete column", Value::Null, "column not found: x", 0);
        assert!(entry.is_failure());
        assert_eq!(entry.output["error"], "column not found: x");

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("actor").is_none());
    }
}
