// engine.rs — ExecutionEngine: drives one goal run to termination.
//
// The engine is the sole mutator of GoalState. One run:
//
//   1. Planning: invoke the planner, fix the plan on the GoalState.
//   2. Executing: invoke the active handler with the shared context,
//      append its ResultRecord, then either
//        - failure  → Failed, stop (fail-fast, no retry)
//        - success  → shallow-merge the payload, advance the cursor,
//                     Completed when the cursor reaches the end
//   3. A hard `max_steps` ceiling bounds total executing steps across the
//      run. An identifier missing from the registry is fatal for the run:
//      no record is appended for that step.
//
// Strictly sequential: one handler at a time, in exactly plan order, and
// `history` reflects that order. The engine holds no process-wide state;
// concurrent runs each construct their own engine and registry.

use crate::error::EngineError;
use crate::goal::{GoalState, RunState};
use crate::handler::HandlerRegistry;
use crate::planner;

/// The planning-and-execution engine for goal runs.
pub struct ExecutionEngine {
    registry: HandlerRegistry,
}

impl ExecutionEngine {
    /// Create an engine over an injected handler registry.
    pub fn new(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Execute a goal from planning through termination.
    ///
    /// Always returns a fully populated GoalState with `terminated` set,
    /// whether the run completed, failed, or hit the step ceiling.
    pub fn run(&self, goal_text: &str, max_steps: usize) -> GoalState {
        let mut goal = GoalState::new(goal_text);
        tracing::info!(goal_id = %goal.goal_id, goal = goal_text, "starting goal run");

        goal.plan = planner::plan(goal_text);
        tracing::info!(plan = ?goal.plan, "plan created");

        if goal.plan.is_empty() {
            // The planner never returns an empty plan, but an empty plan is
            // a completed run with zero history, not an error.
            return Self::finish(goal, RunState::Completed);
        }
        goal.state = RunState::Executing;

        let mut steps = 0;
        loop {
            if steps >= max_steps {
                let reason = EngineError::StepCeiling {
                    max_steps,
                    remaining: goal.plan.len() - goal.cursor,
                };
                tracing::warn!(%reason, "run terminated by step ceiling");
                return Self::finish(goal, RunState::Failed { reason: reason.to_string() });
            }

            // The loop exits as soon as the cursor reaches the end of the
            // plan, so the cursor always points at a plan entry here.
            let Some(name) = goal.active_handler().map(str::to_string) else {
                return Self::finish(goal, RunState::Completed);
            };
            let Some(handler) = self.registry.get(&name) else {
                let reason = EngineError::UnknownHandler(name);
                tracing::error!(%reason, "run terminated");
                return Self::finish(goal, RunState::Failed { reason: reason.to_string() });
            };

            tracing::info!(step = steps + 1, handler = %name, "executing handler");
            let record = handler.execute(&goal.context);
            steps += 1;

            let succeeded = record.succeeded;
            let message = record.message.clone();
            if succeeded {
                goal.context.merge(&record.payload);
            }
            goal.history.push(record);

            if !succeeded {
                tracing::warn!(handler = %name, message = %message, "handler failed");
                return Self::finish(goal, RunState::Failed { reason: message });
            }

            goal.cursor += 1;
            if goal.plan_exhausted() {
                return Self::finish(goal, RunState::Completed);
            }
        }
    }

    fn finish(mut goal: GoalState, state: RunState) -> GoalState {
        tracing::info!(goal_id = %goal.goal_id, state = %state, steps = goal.history.len(), "goal run terminated");
        goal.state = state;
        goal.terminated = true;
        goal
    }
}
