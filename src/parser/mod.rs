pub mod types;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::parser::types::ResolvedEslintConfig;
use crate::types::{NormalizedConfig, NormalizedRule, Severity};

/// Scoped plugin rule: `@typescript-eslint/no-explicit-any`. The scope may
/// contain hyphens.
static SCOPED_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(@[\w-]+)/(.+)$").unwrap());

/// Unscoped plugin rule: `react/jsx-key`.
static PLUGIN_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w-]+)/(.+)$").unwrap());

/// Split a rule identifier into plugin prefix and bare rule name.
///
/// Core rules (`no-console`) have no prefix. For prefixed rules,
/// `prefix + "/" + name` reconstructs the identifier exactly.
pub fn parse_rule_id(rule_id: &str) -> (Option<String>, String) {
    if let Some(caps) = SCOPED_RULE.captures(rule_id) {
        return (Some(caps[1].to_string()), caps[2].to_string());
    }
    if let Some(caps) = PLUGIN_RULE.captures(rule_id) {
        return (Some(caps[1].to_string()), caps[2].to_string());
    }
    (None, rule_id.to_string())
}

/// Normalize a raw severity value. ESLint accepts `0`/`1`/`2` and
/// `"off"`/`"warn"`/`"error"`; anything else maps to `Off` so an exotic
/// config can never fail the run.
pub fn normalize_severity(raw: &Value) -> Severity {
    match raw {
        Value::Number(n) => match n.as_u64() {
            Some(0) => Severity::Off,
            Some(1) => Severity::Warn,
            Some(2) => Severity::Error,
            _ => Severity::Off,
        },
        Value::String(s) => match s.as_str() {
            "off" => Severity::Off,
            "warn" => Severity::Warn,
            "error" => Severity::Error,
            _ => Severity::Off,
        },
        _ => Severity::Off,
    }
}

/// Split a raw rule value into severity and option tail.
///
/// The bare form (`"error"`, `2`) has no options; the array form
/// (`["error", "single"]`) carries everything after the severity. An empty
/// array normalizes to `Off`.
fn split_rule_value(raw: &Value) -> (Severity, Vec<Value>) {
    match raw {
        Value::Array(items) => {
            let severity = items
                .first()
                .map(normalize_severity)
                .unwrap_or(Severity::Off);
            (severity, items.iter().skip(1).cloned().collect())
        }
        other => (normalize_severity(other), Vec::new()),
    }
}

/// Normalize a resolved ESLint config: parse every rule, keep the active
/// ones, and collect the plugin set from active-rule prefixes plus the
/// config's own `plugins` list.
pub fn parse_config(raw: &ResolvedEslintConfig) -> NormalizedConfig {
    let total_rules = raw.rules.len();
    let mut rules = Vec::new();

    for (rule_id, raw_value) in &raw.rules {
        let (severity, options) = split_rule_value(raw_value);
        if !severity.is_active() {
            continue;
        }
        let (plugin_prefix, rule_name) = parse_rule_id(rule_id);
        rules.push(NormalizedRule {
            rule_id: rule_id.clone(),
            plugin_prefix,
            rule_name,
            severity,
            options,
        });
    }

    let mut plugins: BTreeSet<String> = rules
        .iter()
        .filter_map(|r| r.plugin_prefix.clone())
        .collect();
    plugins.extend(raw.plugins.iter().cloned());

    let active_rules = rules.len();
    NormalizedConfig {
        rules,
        plugins: plugins.into_iter().collect(),
        total_rules,
        active_rules,
    }
}
