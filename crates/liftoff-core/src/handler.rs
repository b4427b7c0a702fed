// handler.rs — The TaskHandler contract and the handler registry.
//
// The engine consumes handlers, it never implements them. Each handler is
// one step-sized capability: given the shared context so far, do your one
// job and report a ResultRecord. The return type is infallible on purpose —
// a handler that hits a network error or a malformed response reports
// `succeeded: false` with a descriptive message; errors and panics must not
// cross this boundary.
//
// The registry is plain injected state: the caller builds the name→handler
// map and hands it to the engine at construction. No process-wide handler
// table exists, so concurrent goal runs can each own an independent
// registry and context.

use std::collections::HashMap;

use crate::context::Context;
use crate::result::ResultRecord;

/// Handler identifiers shared between the planner's vocabulary and the
/// registry keys. Opaque strings as far as the engine is concerned.
pub mod idents {
    /// Launch-domain handler (rocket launch lookups).
    pub const LAUNCH: &str = "launch";
    /// Weather-domain handler.
    pub const WEATHER: &str = "weather";
    /// News-domain handler.
    pub const NEWS: &str = "news";
    /// Market-domain handler (crypto prices).
    pub const MARKET: &str = "market";
    /// Terminal summarizer.
    pub const SUMMARIZE: &str = "summarize";
}

/// A single-step task capability consumed by the ExecutionEngine.
pub trait TaskHandler {
    /// The identifier this handler is registered under.
    fn name(&self) -> &str;

    /// Perform the step against the shared context.
    ///
    /// Must always return: internal failures (network, missing credential,
    /// malformed response) are reported as a failure ResultRecord, never
    /// propagated as an error or panic.
    fn execute(&self, context: &Context) -> ResultRecord;
}

/// The injected mapping from handler identifier to handler instance.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn TaskHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own name. Re-registering a name
    /// replaces the previous handler (last write wins, like the context).
    pub fn register(&mut self, handler: Box<dyn TaskHandler>) {
        self.handlers.insert(handler.name().to_string(), handler);
    }

    /// Resolve an identifier to a handler.
    pub fn get(&self, name: &str) -> Option<&dyn TaskHandler> {
        self.handlers.get(name).map(|handler| &**handler)
    }

    /// Whether an identifier is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
