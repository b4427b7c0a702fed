// context.rs — Context: the shared key/value state threaded through a run.
//
// One Context exists per goal run. It is seeded with the goal text under
// the "goal" key, passed read-only to every handler, and shallow-merged
// with each successful handler's payload. Merge is last-write-wins:
// an existing key is overwritten wholesale, nested structures are
// replaced, never deep-merged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The key under which the original goal text is seeded.
pub const GOAL_KEY: &str = "goal";

/// The accumulating state shared between handlers in one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context(Map<String, Value>);

impl Context {
    /// Create a context seeded with `{"goal": description}`.
    pub fn seeded(goal: &str) -> Self {
        let mut map = Map::new();
        map.insert(GOAL_KEY.to_string(), Value::String(goal.to_string()));
        Self(map)
    }

    /// Shallow-merge a handler payload into the context (last write wins).
    pub fn merge(&mut self, payload: &Map<String, Value>) {
        for (key, value) in payload {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether a top-level key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The underlying map, for handlers that walk several keys.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seeded_context_contains_goal() {
        let ctx = Context::seeded("check the weather");
        assert_eq!(ctx.get(GOAL_KEY), Some(&json!("check the weather")));
    }

    #[test]
    fn merge_is_shallow_and_last_write_wins() {
        let mut ctx = Context::seeded("g");
        let mut first = Map::new();
        first.insert("a".to_string(), json!(1));
        ctx.merge(&first);

        let mut second = Map::new();
        second.insert("a".to_string(), json!(2));
        second.insert("b".to_string(), json!(3));
        ctx.merge(&second);

        assert_eq!(ctx.get("a"), Some(&json!(2)));
        assert_eq!(ctx.get("b"), Some(&json!(3)));
        assert_eq!(ctx.get(GOAL_KEY), Some(&json!("g")));
        assert_eq!(ctx.as_map().len(), 3);
    }

    #[test]
    fn nested_values_are_replaced_wholesale() {
        let mut ctx = Context::seeded("g");
        let mut first = Map::new();
        first.insert("launchpad".to_string(), json!({"name": "LC-39A", "region": "Florida"}));
        ctx.merge(&first);

        let mut second = Map::new();
        second.insert("launchpad".to_string(), json!({"name": "SLC-40"}));
        ctx.merge(&second);

        // No deep merge: "region" is gone.
        assert_eq!(ctx.get("launchpad"), Some(&json!({"name": "SLC-40"})));
    }
}
