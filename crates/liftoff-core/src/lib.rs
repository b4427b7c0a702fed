//! # liftoff-core
//!
//! Goal planning and execution engine for Liftoff.
//!
//! Turns a free-text goal into an ordered plan of task-handler
//! identifiers, runs that plan against an injected registry of handlers,
//! accumulates their payloads into a shared context, and reports whether
//! the goal was satisfied.
//!
//! ## Key components
//!
//! - [`planner::plan`] — keyword rules → ordered handler plan
//! - [`ExecutionEngine`] — walks the plan, merges results, decides
//!   termination (fail-fast, bounded by a step ceiling)
//! - [`eval::evaluate`] — summary metrics over a finished [`GoalState`]
//! - [`TaskHandler`] / [`HandlerRegistry`] — the collaborator contract and
//!   the injected name→handler map
//! - [`ResultRecord`] / [`GoalState`] / [`Context`] — the data model
//!
//! The engine is strictly sequential and holds no process-wide state:
//! concurrent goal runs each own an independent engine, registry, and
//! context.

pub mod context;
pub mod engine;
pub mod error;
pub mod eval;
pub mod goal;
pub mod handler;
pub mod planner;
pub mod result;

pub use context::Context;
pub use engine::ExecutionEngine;
pub use error::EngineError;
pub use eval::{evaluate, RunSummary};
pub use goal::{GoalState, RunState};
pub use handler::{idents, HandlerRegistry, TaskHandler};
pub use result::ResultRecord;
