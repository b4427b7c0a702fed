// planner.rs — GoalPlanner: keyword rules → ordered handler plan.
//
// Planning is a pure function of the goal text. The rules live in a static
// dispatch table of (domain, keyword set, handler identifier, priority
// rank); the planner walks the table in rank order, so the plan is ordered
// by domain priority regardless of where the keywords appear in the text
// and regardless of future edits to the table's declaration order.
//
// Plan shape:
//   1. Every domain whose keyword set intersects the text contributes its
//      handler, in priority order: launch, weather, news, market.
//   2. The summarizer is appended when more than one domain matched, or
//      when the text asks for a summary explicitly.
//   3. A text matching nothing at all falls back to [news, summarize] —
//      the planner never returns an empty plan.

use crate::handler::idents;

/// One row of the planning dispatch table.
struct DomainRule {
    /// Domain tag, for logging.
    tag: &'static str,
    /// Any of these substrings in the lowered goal text selects the domain.
    keywords: &'static [&'static str],
    /// The handler contributed to the plan.
    handler: &'static str,
    /// Position in the fixed domain priority order (lower runs earlier).
    rank: u8,
}

static DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        tag: "launch",
        keywords: &["spacex", "launch", "rocket", "falcon", "dragon"],
        handler: idents::LAUNCH,
        rank: 0,
    },
    DomainRule {
        tag: "weather",
        keywords: &["weather", "temperature", "rain", "storm", "delay"],
        handler: idents::WEATHER,
        rank: 1,
    },
    DomainRule {
        tag: "news",
        keywords: &["news", "article", "report", "update"],
        handler: idents::NEWS,
        rank: 2,
    },
    DomainRule {
        tag: "market",
        keywords: &["bitcoin", "crypto", "btc", "eth", "price"],
        handler: idents::MARKET,
        rank: 3,
    },
];

/// Keywords that request the terminal summarizer explicitly.
static SUMMARY_KEYWORDS: &[&str] = &["summarize", "summary", "conclude"];

/// Map a goal text to an ordered list of handler identifiers.
///
/// Pure: same text in, same plan out. Never returns an empty plan.
pub fn plan(goal_text: &str) -> Vec<String> {
    let text = goal_text.to_lowercase();

    let mut rules: Vec<&DomainRule> = DOMAIN_RULES.iter().collect();
    rules.sort_by_key(|rule| rule.rank);

    let mut plan: Vec<String> = Vec::new();
    for rule in rules {
        if rule.keywords.iter().any(|kw| text.contains(kw)) {
            tracing::debug!(domain = rule.tag, handler = rule.handler, "domain matched");
            plan.push(rule.handler.to_string());
        }
    }

    let wants_summary = SUMMARY_KEYWORDS.iter().any(|kw| text.contains(kw));
    if plan.len() > 1 || wants_summary {
        plan.push(idents::SUMMARIZE.to_string());
    }

    // Nothing recognized at all: default to a news digest.
    if plan.is_empty() {
        plan = vec![idents::NEWS.to_string(), idents::SUMMARIZE.to_string()];
    }

    plan
}
