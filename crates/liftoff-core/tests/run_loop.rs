// run_loop.rs — End-to-end test of the plan → execute → evaluate loop.
//
// This test exercises the complete core flow with scripted stub handlers:
//
//   1. Plan a multi-domain goal → handlers ordered by domain priority
//   2. Execute the plan → each handler sees the context accumulated so far
//   3. Evaluate the finished run → satisfied, full score, ordered trajectory
//
// Then the failure paths:
//   - a mid-plan failure stops the run with the failing record preserved
//   - a one-step ceiling leaves a three-step plan unsatisfied
//
// VERIFY:
//   - handlers execute in exactly plan order
//   - the context merge is shallow and last-write-wins
//   - history length always equals the number of handlers invoked

use serde_json::{json, Map, Value};

use liftoff_core::{
    evaluate, Context, ExecutionEngine, GoalState, HandlerRegistry, ResultRecord, RunState,
    TaskHandler,
};

/// A scripted handler: returns a fixed payload, or a scripted failure.
struct Scripted {
    name: &'static str,
    payload: Vec<(&'static str, Value)>,
    fail: bool,
}

impl Scripted {
    fn ok(name: &'static str, payload: Vec<(&'static str, Value)>) -> Self {
        Self { name, payload, fail: false }
    }

    fn failing(name: &'static str) -> Self {
        Self { name, payload: Vec::new(), fail: true }
    }
}

impl TaskHandler for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn execute(&self, _context: &Context) -> ResultRecord {
        if self.fail {
            return ResultRecord::failure(self.name, format!("{} exploded", self.name));
        }
        let mut payload = Map::new();
        for (key, value) in &self.payload {
            payload.insert((*key).to_string(), value.clone());
        }
        ResultRecord::ok(self.name, payload, format!("{} done", self.name))
    }
}

fn run(goal_text: &str, max_steps: usize, handlers: Vec<Box<dyn TaskHandler>>) -> GoalState {
    let mut registry = HandlerRegistry::new();
    for handler in handlers {
        registry.register(handler);
    }
    ExecutionEngine::new(registry).run(goal_text, max_steps)
}

#[test]
fn full_run_loop_plan_execute_evaluate() {
    let goal = run(
        "find the next spacex launch, check the weather there, then summarize",
        10,
        vec![
            Box::new(Scripted::ok(
                "launch",
                vec![("launch_name", json!("Starlink 12")), ("shared", json!("from-launch"))],
            )),
            Box::new(Scripted::ok(
                "weather",
                vec![("forecast", json!("clear")), ("shared", json!("from-weather"))],
            )),
            Box::new(Scripted::ok("summarize", vec![("summary", json!("all good"))])),
        ],
    );

    // Plan ordered by domain priority, summarizer appended for multi-domain.
    assert_eq!(goal.plan, vec!["launch", "weather", "summarize"]);
    assert!(goal.terminated);
    assert_eq!(goal.state, RunState::Completed);
    assert_eq!(goal.history.len(), 3);
    assert_eq!(goal.cursor, 3);

    // Last write wins on the shared key.
    assert_eq!(goal.context.get("shared"), Some(&json!("from-weather")));
    assert_eq!(goal.context.get("summary"), Some(&json!("all good")));
    assert_eq!(goal.context.get("launch_name"), Some(&json!("Starlink 12")));

    let summary = evaluate(&goal);
    assert!(summary.satisfied);
    assert_eq!(summary.handlers_invoked, 3);
    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.satisfaction_score, 100.0);
    assert_eq!(summary.trajectory, vec!["launch", "weather", "summarize"]);
}

#[test]
fn context_accumulates_across_steps() {
    let goal = run(
        "spacex launch and the weather, summarize",
        10,
        vec![
            Box::new(Scripted::ok("launch", vec![("launch_name", json!("CRS-30"))])),
            Box::new(Scripted::ok("weather", vec![("forecast", json!("rainy"))])),
            Box::new(Scripted::ok("summarize", vec![("summary", json!("ok"))])),
        ],
    );
    assert_eq!(goal.state, RunState::Completed);

    // The final context holds the goal seed plus every step's payload.
    assert!(goal.context.contains_key("goal"));
    assert!(goal.context.contains_key("launch_name"));
    assert!(goal.context.contains_key("forecast"));
    assert!(goal.context.contains_key("summary"));
}

#[test]
fn mid_plan_failure_is_fail_fast() {
    let goal = run(
        "spacex launch and the weather, summarize",
        10,
        vec![
            Box::new(Scripted::ok("launch", vec![("launch_name", json!("CRS-30"))])),
            Box::new(Scripted::failing("weather")),
            Box::new(Scripted::ok("summarize", vec![])),
        ],
    );

    assert!(goal.terminated);
    assert!(matches!(goal.state, RunState::Failed { .. }));
    // k-th handler failed in a plan of length n > k: exactly k records.
    assert_eq!(goal.history.len(), 2);
    assert!(goal.history[0].succeeded);
    assert!(!goal.history[1].succeeded);
    assert_eq!(goal.history[1].message, "weather exploded");

    let summary = evaluate(&goal);
    assert!(!summary.satisfied);
    assert_eq!(summary.handlers_invoked, 2);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 1);
    assert!((summary.satisfaction_score - 50.0).abs() < f64::EPSILON);
}

#[test]
fn one_step_ceiling_on_a_three_step_plan() {
    let goal = run(
        "spacex launch and the weather, summarize",
        1,
        vec![
            Box::new(Scripted::ok("launch", vec![])),
            Box::new(Scripted::ok("weather", vec![])),
            Box::new(Scripted::ok("summarize", vec![])),
        ],
    );

    assert_eq!(goal.plan.len(), 3);
    assert!(goal.terminated);
    assert_eq!(goal.history.len(), 1);

    let summary = evaluate(&goal);
    assert!(!summary.satisfied);
    assert_eq!(summary.handlers_invoked, 1);
}

#[test]
fn independent_runs_do_not_share_context() {
    let make_handlers = || -> Vec<Box<dyn TaskHandler>> {
        vec![
            Box::new(Scripted::ok("news", vec![("news_articles", json!([1, 2]))])),
            Box::new(Scripted::ok("summarize", vec![])),
        ]
    };

    let first = run("hello", 10, make_handlers());
    let second = run("different goal entirely", 10, make_handlers());

    assert_eq!(first.context.get("goal"), Some(&json!("hello")));
    assert_eq!(second.context.get("goal"), Some(&json!("different goal entirely")));
    assert_ne!(first.goal_id, second.goal_id);
}
