// eval.rs — OutcomeEvaluator: summary metrics over a finished run.
//
// Read-only and pure: evaluating a GoalState twice gives the same summary,
// and evaluating never mutates the run. An incomplete or failed run still
// evaluates without crashing — the score is just lower and `satisfied`
// is false.

use serde::{Deserialize, Serialize};

use crate::goal::{GoalState, RunState};
use crate::result::ResultRecord;

/// Summary metrics derived from one goal run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// The run terminated, reached Completed, and executed a non-empty
    /// plan in full.
    pub satisfied: bool,

    /// Number of handlers actually invoked.
    pub handlers_invoked: usize,

    /// How many of those reported success.
    pub succeeded: usize,

    /// How many reported failure.
    pub failed: usize,

    /// Handler names in execution order.
    pub trajectory: Vec<String>,

    /// The last record produced, if any handler ran at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_record: Option<ResultRecord>,

    /// succeeded / invoked × 100; 0.0 when nothing was invoked.
    pub satisfaction_score: f64,
}

/// Evaluate a finished (or abandoned) goal run.
pub fn evaluate(goal: &GoalState) -> RunSummary {
    let handlers_invoked = goal.history.len();
    let succeeded = goal.history.iter().filter(|r| r.succeeded).count();
    let failed = handlers_invoked - succeeded;

    let satisfaction_score = if handlers_invoked == 0 {
        0.0
    } else {
        succeeded as f64 / handlers_invoked as f64 * 100.0
    };

    let satisfied = goal.terminated
        && goal.state == RunState::Completed
        && !goal.plan.is_empty()
        && handlers_invoked == goal.plan.len();

    RunSummary {
        satisfied,
        handlers_invoked,
        succeeded,
        failed,
        trajectory: goal.history.iter().map(|r| r.handler_name.clone()).collect(),
        final_record: goal.history.last().cloned(),
        satisfaction_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn goal_with_history(records: Vec<ResultRecord>, state: RunState) -> GoalState {
        let mut goal = GoalState::new("test goal");
        goal.plan = records.iter().map(|r| r.handler_name.clone()).collect();
        goal.cursor = records.len();
        goal.history = records;
        goal.state = state;
        goal.terminated = true;
        goal
    }

    #[test]
    fn empty_history_scores_zero_without_crashing() {
        let mut goal = GoalState::new("test goal");
        goal.terminated = true;
        goal.state = RunState::Completed;
        let summary = evaluate(&goal);
        assert_eq!(summary.handlers_invoked, 0);
        assert_eq!(summary.satisfaction_score, 0.0);
        assert!(summary.final_record.is_none());
        // Completed with an empty plan is not satisfaction.
        assert!(!summary.satisfied);
    }

    #[test]
    fn two_of_three_successes_scores_two_thirds() {
        let goal = goal_with_history(
            vec![
                ResultRecord::ok("launch", Map::new(), "ok"),
                ResultRecord::ok("weather", Map::new(), "ok"),
                ResultRecord::failure("summarize", "boom"),
            ],
            RunState::Failed { reason: "boom".to_string() },
        );
        let summary = evaluate(&goal);
        assert_eq!(summary.handlers_invoked, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert!((summary.satisfaction_score - 66.666_666).abs() < 0.001);
        assert!(!summary.satisfied);
    }

    #[test]
    fn completed_full_plan_is_satisfied() {
        let goal = goal_with_history(
            vec![
                ResultRecord::ok("news", Map::new(), "ok"),
                ResultRecord::ok("summarize", Map::new(), "ok"),
            ],
            RunState::Completed,
        );
        let summary = evaluate(&goal);
        assert!(summary.satisfied);
        assert_eq!(summary.satisfaction_score, 100.0);
        assert_eq!(summary.trajectory, vec!["news", "summarize"]);
        assert_eq!(
            summary.final_record.as_ref().map(|r| r.handler_name.as_str()),
            Some("summarize")
        );
    }

    #[test]
    fn partial_run_is_not_satisfied_even_if_all_steps_succeeded() {
        let mut goal = goal_with_history(
            vec![ResultRecord::ok("launch", Map::new(), "ok")],
            RunState::Failed { reason: "step ceiling".to_string() },
        );
        goal.plan = vec!["launch".to_string(), "weather".to_string(), "summarize".to_string()];
        goal.cursor = 1;
        let summary = evaluate(&goal);
        assert!(!summary.satisfied);
        assert_eq!(summary.satisfaction_score, 100.0);
        assert_eq!(summary.handlers_invoked, 1);
    }

    #[test]
    fn evaluation_is_read_only() {
        let goal = goal_with_history(
            vec![ResultRecord::ok("news", Map::new(), "ok")],
            RunState::Completed,
        );
        let first = evaluate(&goal);
        let second = evaluate(&goal);
        assert_eq!(first.satisfied, second.satisfied);
        assert_eq!(first.trajectory, second.trajectory);
        assert_eq!(first.satisfaction_score, second.satisfaction_score);
    }
}
