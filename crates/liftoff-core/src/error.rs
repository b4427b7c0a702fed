// error.rs — Error types for the execution engine.

use thiserror::Error;

/// Fatal run conditions detected by the ExecutionEngine.
///
/// These never surface as `Err` from `run()` — a run always returns a fully
/// populated GoalState. They exist so the failure reason recorded on
/// `RunState::Failed` is formatted uniformly and classifiable by callers.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The plan references an identifier with no registered handler.
    #[error("no handler registered for identifier '{0}'")]
    UnknownHandler(String),

    /// The run consumed its step ceiling without reaching the end of the plan.
    #[error("step ceiling of {max_steps} reached with {remaining} plan step(s) left")]
    StepCeiling { max_steps: usize, remaining: usize },
}
