// goal.rs — GoalState: the mutable record of one goal run.
//
// A GoalState ties together everything about one run:
// - The original goal text (never mutated)
// - The plan produced by the planner (fixed once set)
// - A cursor over that plan and the append-only result history
// - The shared context accumulated from handler payloads
//
// The state machine enforces the lifecycle:
//   Planning → Executing → Completed
//                        → Failed (handler failure, unknown handler,
//                                  or step ceiling)
//
// The ExecutionEngine is the sole mutator; everyone else reads.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::Context;
use crate::result::ResultRecord;

/// The lifecycle state of a goal run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunState {
    /// Created, plan not yet produced.
    Planning,

    /// Walking the plan, at least one handler still to run.
    Executing,

    /// Every plan step ran and succeeded.
    Completed,

    /// The run stopped short: a handler reported failure, the plan named
    /// an unregistered handler, or the step ceiling was hit.
    Failed { reason: String },
}

impl RunState {
    /// Whether this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed { .. })
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Planning => write!(f, "planning"),
            RunState::Executing => write!(f, "executing"),
            RunState::Completed => write!(f, "completed"),
            RunState::Failed { .. } => write!(f, "failed"),
        }
    }
}

/// One goal run from planning through termination.
///
/// Invariants maintained by the engine:
/// - `cursor <= plan.len()` always
/// - `history.len()` equals the number of handlers actually invoked,
///   which may be less than `plan.len()` on early termination
/// - `terminated` is set exactly once, when there is no next handler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalState {
    /// Unique identifier for this run.
    pub goal_id: Uuid,

    /// Original goal text, set at creation.
    pub description: String,

    /// Ordered handler identifiers; empty until the planner runs, then fixed.
    pub plan: Vec<String>,

    /// Zero-based index of the next handler to execute.
    pub cursor: usize,

    /// Append-only record of every handler invocation, in execution order.
    pub history: Vec<ResultRecord>,

    /// The shared context accumulated across successful steps.
    pub context: Context,

    /// Current lifecycle state.
    pub state: RunState,

    /// True iff no further handler will run.
    pub terminated: bool,

    /// When this run was created.
    pub created_at: DateTime<Utc>,
}

impl GoalState {
    /// Create a new run in the Planning state with a seeded context.
    pub fn new(description: impl Into<String>) -> Self {
        let description = description.into();
        let context = Context::seeded(&description);
        Self {
            goal_id: Uuid::new_v4(),
            description,
            plan: Vec::new(),
            cursor: 0,
            history: Vec::new(),
            context,
            state: RunState::Planning,
            terminated: false,
            created_at: Utc::now(),
        }
    }

    /// Whether the cursor walked the whole plan.
    pub fn plan_exhausted(&self) -> bool {
        self.cursor >= self.plan.len()
    }

    /// The identifier of the next handler to run, if any.
    pub fn active_handler(&self) -> Option<&str> {
        self.plan.get(self.cursor).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GOAL_KEY;
    use serde_json::json;

    #[test]
    fn new_goal_starts_in_planning() {
        let goal = GoalState::new("find the next launch");
        assert_eq!(goal.state, RunState::Planning);
        assert!(!goal.terminated);
        assert!(goal.plan.is_empty());
        assert_eq!(goal.cursor, 0);
        assert!(goal.history.is_empty());
        assert_eq!(goal.context.get(GOAL_KEY), Some(&json!("find the next launch")));
    }

    #[test]
    fn active_handler_follows_cursor() {
        let mut goal = GoalState::new("g");
        goal.plan = vec!["launch".to_string(), "weather".to_string()];
        assert_eq!(goal.active_handler(), Some("launch"));
        goal.cursor = 1;
        assert_eq!(goal.active_handler(), Some("weather"));
        goal.cursor = 2;
        assert_eq!(goal.active_handler(), None);
        assert!(goal.plan_exhausted());
    }

    #[test]
    fn terminal_states() {
        assert!(!RunState::Planning.is_terminal());
        assert!(!RunState::Executing.is_terminal());
        assert!(RunState::Completed.is_terminal());
        assert!(RunState::Failed { reason: "x".to_string() }.is_terminal());
    }

    #[test]
    fn state_display_format() {
        assert_eq!(RunState::Planning.to_string(), "planning");
        assert_eq!(RunState::Completed.to_string(), "completed");
        assert_eq!(
            RunState::Failed { reason: "x".to_string() }.to_string(),
            "failed"
        );
    }

    #[test]
    fn serialization_round_trip() {
        let goal = GoalState::new("check bitcoin price");
        let json = serde_json::to_string_pretty(&goal).unwrap();
        let restored: GoalState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.goal_id, goal.goal_id);
        assert_eq!(restored.description, goal.description);
        assert_eq!(restored.state, RunState::Planning);
    }
}
