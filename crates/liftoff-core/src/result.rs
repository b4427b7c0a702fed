// result.rs — ResultRecord: the outcome of one handler invocation.
//
// A ResultRecord is created by the ExecutionEngine immediately after a
// handler returns, appended to the GoalState history, and never mutated
// again. It is the only thing a handler hands back across the boundary:
// success or failure is a field here, never an error type — a handler
// that cannot do its job returns `succeeded: false` with a message.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The outcome of a single task-handler invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Identifier of the handler that produced this record.
    pub handler_name: String,

    /// Whether the handler accomplished its step.
    pub succeeded: bool,

    /// Handler-defined output keys, merged into the shared context on success.
    pub payload: Map<String, Value>,

    /// Human-readable one-line outcome description.
    pub message: String,

    /// Advisory hint at which handler could run next. The engine's plan
    /// cursor is authoritative; this is metadata for callers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_next: Option<String>,
}

impl ResultRecord {
    /// Build a success record.
    pub fn ok(
        handler_name: impl Into<String>,
        payload: Map<String, Value>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            handler_name: handler_name.into(),
            succeeded: true,
            payload,
            message: message.into(),
            suggested_next: None,
        }
    }

    /// Build a failure record. The payload is empty — a failed step
    /// contributes nothing to the shared context.
    pub fn failure(handler_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            handler_name: handler_name.into(),
            succeeded: false,
            payload: Map::new(),
            message: message.into(),
            suggested_next: None,
        }
    }

    /// Attach the advisory next-handler hint.
    pub fn with_suggested_next(mut self, next: impl Into<String>) -> Self {
        self.suggested_next = Some(next.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_record_carries_payload() {
        let mut payload = Map::new();
        payload.insert("launch_name".to_string(), json!("Starlink 12"));
        let record = ResultRecord::ok("launch", payload, "retrieved next launch");
        assert!(record.succeeded);
        assert_eq!(record.handler_name, "launch");
        assert_eq!(record.payload["launch_name"], json!("Starlink 12"));
        assert!(record.suggested_next.is_none());
    }

    #[test]
    fn failure_record_has_empty_payload() {
        let record = ResultRecord::failure("weather", "connection refused");
        assert!(!record.succeeded);
        assert!(record.payload.is_empty());
        assert_eq!(record.message, "connection refused");
    }

    #[test]
    fn suggested_next_none_omitted_from_json() {
        let record = ResultRecord::ok("news", Map::new(), "ok");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("suggested_next"));
        let restored: ResultRecord = serde_json::from_str(&json).unwrap();
        assert!(restored.suggested_next.is_none());
    }

    #[test]
    fn suggested_next_round_trips() {
        let record = ResultRecord::ok("launch", Map::new(), "ok").with_suggested_next("weather");
        let json = serde_json::to_string(&record).unwrap();
        let restored: ResultRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.suggested_next.as_deref(), Some("weather"));
    }
}
