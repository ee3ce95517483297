mod core;
mod react;
mod typescript;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::types::RuleCategory;

/// A curated mapping table entry. Guidance and descriptions are static;
/// entries whose description depends on rule options carry a refinement tag
/// instead of a callback, so the table stays plain data.
#[derive(Debug, Clone, Copy)]
pub struct RuleMapping {
    pub description: &'static str,
    pub category: RuleCategory,
    pub do_this: Option<&'static str>,
    pub dont_do_this: Option<&'static str>,
    pub refinement: OptionRefinement,
}

/// How a rule's options refine its description. `refine` returns `None`
/// when the options don't select a more specific wording, in which case the
/// static description stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRefinement {
    None,
    /// `quotes`: "single" / "double" / "backtick".
    QuoteStyle,
    /// `semi`: "always" / "never".
    SemicolonStyle,
    /// `indent`: "tab" or a space count.
    IndentStyle,
    /// `prefer-const`: `{ destructuring: "all" }`.
    ConstDestructuring,
    /// `@typescript-eslint/no-explicit-any`: `{ ignoreRestArgs: true }`.
    ExplicitAnyRestArgs,
    /// `@typescript-eslint/no-unused-vars`: `{ argsIgnorePattern: ".." }`.
    UnusedVarsIgnorePattern,
    /// `@typescript-eslint/consistent-type-definitions`: "interface" / "type".
    TypeDefinitionStyle,
}

impl OptionRefinement {
    pub fn refine(self, options: &[Value]) -> Option<String> {
        let first = options.first()?;
        match self {
            OptionRefinement::None => None,
            OptionRefinement::QuoteStyle => match first.as_str()? {
                "single" => Some("Use single quotes for strings".to_string()),
                "double" => Some("Use double quotes for strings".to_string()),
                "backtick" => Some("Use template literals for strings".to_string()),
                _ => None,
            },
            OptionRefinement::SemicolonStyle => match first.as_str()? {
                "always" => {
                    Some("Always use semicolons at the end of statements".to_string())
                }
                "never" => Some("Never use semicolons (ASI)".to_string()),
                _ => None,
            },
            OptionRefinement::IndentStyle => {
                if first.as_str() == Some("tab") {
                    return Some("Use tabs for indentation".to_string());
                }
                first
                    .as_u64()
                    .map(|width| format!("Use {width} spaces for indentation"))
            }
            OptionRefinement::ConstDestructuring => {
                (first.get("destructuring")?.as_str()? == "all").then(|| {
                    "Use const for destructured variables only when all are never reassigned"
                        .to_string()
                })
            }
            OptionRefinement::ExplicitAnyRestArgs => first
                .get("ignoreRestArgs")?
                .as_bool()?
                .then(|| "Avoid any type (rest arguments are allowed)".to_string()),
            OptionRefinement::UnusedVarsIgnorePattern => first
                .get("argsIgnorePattern")?
                .as_str()
                .map(|pattern| format!("Remove unused variables (pattern {pattern} ignored)")),
            OptionRefinement::TypeDefinitionStyle => match first.as_str()? {
                "interface" => {
                    Some("Prefer interface over type for object types".to_string())
                }
                "type" => Some("Prefer type over interface for object types".to_string()),
                _ => None,
            },
        }
    }
}

/// Resolver output: either a table hit (with possibly refined description)
/// or a synthesized fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMapping {
    pub description: String,
    pub category: RuleCategory,
    pub do_this: Option<&'static str>,
    pub dont_do_this: Option<&'static str>,
    pub is_fallback: bool,
}

/// Plugin prefix to display name. Unknown prefixes fall back to the prefix
/// itself.
const PLUGIN_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("@typescript-eslint", "TypeScript"),
    ("react", "React"),
    ("react-hooks", "React Hooks"),
    ("jsx-a11y", "Accessibility"),
    ("import", "Imports"),
    ("import-x", "Imports"),
    ("unicorn", "Unicorn"),
    ("sonarjs", "SonarJS"),
    ("security", "Security"),
    ("n", "Node.js"),
    ("promise", "Promises"),
    ("jest", "Jest"),
    ("vitest", "Vitest"),
    ("testing-library", "Testing Library"),
    ("prettier", "Prettier"),
    ("vue", "Vue"),
    ("svelte", "Svelte"),
    ("astro", "Astro"),
];

pub fn plugin_display_name(prefix: &str) -> &str {
    PLUGIN_DISPLAY_NAMES
        .iter()
        .find(|(id, _)| *id == prefix)
        .map(|(_, name)| *name)
        .unwrap_or(prefix)
}

/// Category inference for plugins whose rules carry no curated mapping.
const PLUGIN_CATEGORIES: &[(&str, RuleCategory)] = &[
    ("@typescript-eslint", RuleCategory::TypeSafety),
    ("react", RuleCategory::React),
    ("react-hooks", RuleCategory::React),
    ("jsx-a11y", RuleCategory::React),
    ("import", RuleCategory::Imports),
    ("import-x", RuleCategory::Imports),
    ("security", RuleCategory::Security),
    ("jest", RuleCategory::Testing),
    ("vitest", RuleCategory::Testing),
    ("testing-library", RuleCategory::Testing),
    ("promise", RuleCategory::CodeQuality),
];

/// Keyword patterns for category inference, checked against the full rule id
/// in order. First match wins.
static CATEGORY_PATTERNS: LazyLock<Vec<(Regex, RuleCategory)>> = LazyLock::new(|| {
    [
        (
            r"^no-async-promise-executor|require-await|no-await-in-loop",
            RuleCategory::Performance,
        ),
        (r"^prefer-const|no-var|const-|let-", RuleCategory::CodeQuality),
        (r"^no-unused-|no-undef", RuleCategory::TypeSafety),
        (r"^no-console|no-debugger|no-alert", RuleCategory::CodeQuality),
        (r"^eqeqeq|no-implicit-coercion", RuleCategory::TypeSafety),
        (r"^camelcase|id-|naming-", RuleCategory::Style),
        (r"^indent|quotes|semi|comma|space|brace", RuleCategory::Style),
        (r"^no-eval|no-new-func|no-script-url", RuleCategory::Security),
        (r"^complexity|max-|no-nested", RuleCategory::CodeQuality),
        (r"import|export", RuleCategory::Imports),
        (r"test|spec|describe|it\b", RuleCategory::Testing),
    ]
    .iter()
    .map(|(pattern, category)| (Regex::new(pattern).unwrap(), *category))
    .collect()
});

/// All curated mappings, keyed by full rule id.
static RULE_MAPPINGS: LazyLock<HashMap<&'static str, &'static RuleMapping>> =
    LazyLock::new(|| {
        core::CORE_MAPPINGS
            .iter()
            .chain(typescript::TYPESCRIPT_MAPPINGS)
            .chain(react::REACT_MAPPINGS)
            .map(|(id, mapping)| (*id, mapping))
            .collect()
    });

/// Infer a category for a rule with no curated mapping: plugin table first,
/// then keyword patterns, then `Other`.
pub fn infer_category(rule_id: &str, plugin_prefix: Option<&str>) -> RuleCategory {
    if let Some(prefix) = plugin_prefix {
        if let Some((_, category)) = PLUGIN_CATEGORIES.iter().find(|(id, _)| *id == prefix) {
            return *category;
        }
    }

    for (pattern, category) in CATEGORY_PATTERNS.iter() {
        if pattern.is_match(rule_id) {
            return *category;
        }
    }

    RuleCategory::Other
}

/// Synthesize a description from the rule id alone.
pub fn fallback_description(rule_id: &str, plugin_prefix: Option<&str>) -> String {
    let rule_name = match plugin_prefix {
        Some(prefix) => rule_id
            .strip_prefix(&format!("{prefix}/"))
            .unwrap_or(rule_id),
        None => rule_id,
    };

    let description = parse_rule_name(rule_name);
    match plugin_prefix {
        Some(prefix) => format!("{}: {description}", plugin_display_name(prefix)),
        None => description,
    }
}

fn parse_rule_name(rule_name: &str) -> String {
    if let Some(rest) = rule_name.strip_prefix("no-") {
        return format!("Avoid {}", humanize(rest));
    }
    if let Some(rest) = rule_name.strip_prefix("prefer-") {
        return format!("Prefer {}", humanize(rest));
    }
    if let Some(rest) = rule_name.strip_prefix("require-") {
        return format!("Require {}", humanize(rest));
    }
    format!("Follow {} rule", humanize(rule_name))
}

fn humanize(kebab_case: &str) -> String {
    kebab_case.split('-').collect::<Vec<_>>().join(" ")
}

/// Resolve a rule to its guideline text: curated table hit (description
/// refined by options when they select one) or synthesized fallback. Never
/// fails; unknown rules always produce something readable.
pub fn resolve_mapping(
    rule_id: &str,
    plugin_prefix: Option<&str>,
    options: &[Value],
) -> ResolvedMapping {
    if let Some(mapping) = RULE_MAPPINGS.get(rule_id) {
        let description = if options.is_empty() {
            mapping.description.to_string()
        } else {
            mapping
                .refinement
                .refine(options)
                .unwrap_or_else(|| mapping.description.to_string())
        };
        return ResolvedMapping {
            description,
            category: mapping.category,
            do_this: mapping.do_this,
            dont_do_this: mapping.dont_do_this,
            is_fallback: false,
        };
    }

    ResolvedMapping {
        description: fallback_description(rule_id, plugin_prefix),
        category: infer_category(rule_id, plugin_prefix),
        do_this: None,
        dont_do_this: None,
        is_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Table lookups ────────────────────────────────────────────────────

    #[test]
    fn test_table_has_no_duplicate_ids() {
        let expected = core::CORE_MAPPINGS.len()
            + typescript::TYPESCRIPT_MAPPINGS.len()
            + react::REACT_MAPPINGS.len();
        assert_eq!(
            RULE_MAPPINGS.len(),
            expected,
            "merged table lost entries to duplicate rule ids"
        );
    }

    #[test]
    fn test_known_core_rule_resolves_from_table() {
        let resolved = resolve_mapping("no-console", None, &[]);
        assert!(!resolved.is_fallback);
        assert_eq!(
            resolved.description,
            "Remove console statements from production code"
        );
        assert_eq!(resolved.category, RuleCategory::CodeQuality);
        assert!(resolved.do_this.is_some());
        assert!(resolved.dont_do_this.is_some());
    }

    #[test]
    fn test_known_scoped_rule_resolves_from_table() {
        let resolved =
            resolve_mapping("@typescript-eslint/no-explicit-any", Some("@typescript-eslint"), &[]);
        assert!(!resolved.is_fallback);
        assert_eq!(resolved.category, RuleCategory::TypeSafety);
    }

    #[test]
    fn test_known_react_rule_category_override() {
        // Security-sensitive react rules are categorized as security, not react.
        let resolved = resolve_mapping("react/jsx-no-target-blank", Some("react"), &[]);
        assert_eq!(resolved.category, RuleCategory::Security);
    }

    // ── Option refinement ────────────────────────────────────────────────

    #[test]
    fn test_quotes_refinement() {
        let single = resolve_mapping("quotes", None, &[json!("single")]);
        assert_eq!(single.description, "Use single quotes for strings");

        let double = resolve_mapping("quotes", None, &[json!("double")]);
        assert_eq!(double.description, "Use double quotes for strings");

        let backtick = resolve_mapping("quotes", None, &[json!("backtick")]);
        assert_eq!(backtick.description, "Use template literals for strings");
    }

    #[test]
    fn test_quotes_unknown_option_keeps_static_description() {
        let resolved = resolve_mapping("quotes", None, &[json!("fancy")]);
        assert_eq!(resolved.description, "Use consistent quote style for strings");
    }

    #[test]
    fn test_empty_options_never_refine() {
        let resolved = resolve_mapping("quotes", None, &[]);
        assert_eq!(resolved.description, "Use consistent quote style for strings");
    }

    #[test]
    fn test_semi_refinement() {
        let always = resolve_mapping("semi", None, &[json!("always")]);
        assert_eq!(
            always.description,
            "Always use semicolons at the end of statements"
        );

        let never = resolve_mapping("semi", None, &[json!("never")]);
        assert_eq!(never.description, "Never use semicolons (ASI)");
    }

    #[test]
    fn test_indent_refinement() {
        let tabs = resolve_mapping("indent", None, &[json!("tab")]);
        assert_eq!(tabs.description, "Use tabs for indentation");

        let spaces = resolve_mapping("indent", None, &[json!(4)]);
        assert_eq!(spaces.description, "Use 4 spaces for indentation");

        let odd = resolve_mapping("indent", None, &[json!({ "SwitchCase": 1 })]);
        assert_eq!(odd.description, "Use consistent indentation");
    }

    #[test]
    fn test_prefer_const_destructuring_refinement() {
        let all = resolve_mapping("prefer-const", None, &[json!({ "destructuring": "all" })]);
        assert_eq!(
            all.description,
            "Use const for destructured variables only when all are never reassigned"
        );

        let any = resolve_mapping("prefer-const", None, &[json!({ "destructuring": "any" })]);
        assert_eq!(
            any.description,
            "Use const for variables that are never reassigned"
        );
    }

    #[test]
    fn test_explicit_any_rest_args_refinement() {
        let ignore = resolve_mapping(
            "@typescript-eslint/no-explicit-any",
            Some("@typescript-eslint"),
            &[json!({ "ignoreRestArgs": true })],
        );
        assert_eq!(
            ignore.description,
            "Avoid any type (rest arguments are allowed)"
        );

        let plain = resolve_mapping(
            "@typescript-eslint/no-explicit-any",
            Some("@typescript-eslint"),
            &[json!({ "ignoreRestArgs": false })],
        );
        assert_eq!(plain.description, "Avoid using the any type");
    }

    #[test]
    fn test_unused_vars_pattern_refinement() {
        let resolved = resolve_mapping(
            "@typescript-eslint/no-unused-vars",
            Some("@typescript-eslint"),
            &[json!({ "argsIgnorePattern": "^_" })],
        );
        assert_eq!(
            resolved.description,
            "Remove unused variables (pattern ^_ ignored)"
        );
    }

    #[test]
    fn test_type_definition_style_refinement() {
        let interface = resolve_mapping(
            "@typescript-eslint/consistent-type-definitions",
            Some("@typescript-eslint"),
            &[json!("interface")],
        );
        assert_eq!(
            interface.description,
            "Prefer interface over type for object types"
        );

        let type_style = resolve_mapping(
            "@typescript-eslint/consistent-type-definitions",
            Some("@typescript-eslint"),
            &[json!("type")],
        );
        assert_eq!(
            type_style.description,
            "Prefer type over interface for object types"
        );
    }

    // ── Fallback synthesis ───────────────────────────────────────────────

    #[test]
    fn test_fallback_unknown_rule() {
        let resolved = resolve_mapping("totally-unknown-rule", None, &[]);
        assert!(resolved.is_fallback);
        assert_eq!(resolved.description, "Follow totally unknown rule rule");
        assert_eq!(resolved.category, RuleCategory::Other);
        assert_eq!(resolved.do_this, None);
        assert_eq!(resolved.dont_do_this, None);
    }

    #[test]
    fn test_fallback_description_verbs() {
        assert_eq!(
            fallback_description("no-jquery", None),
            "Avoid jquery"
        );
        assert_eq!(
            fallback_description("prefer-signals", None),
            "Prefer signals"
        );
        assert_eq!(
            fallback_description("require-jsdoc", None),
            "Require jsdoc"
        );
        assert_eq!(
            fallback_description("consistent-return", None),
            "Follow consistent return rule"
        );
    }

    #[test]
    fn test_fallback_prefixed_uses_display_name() {
        assert_eq!(
            fallback_description("unicorn/no-array-for-each", Some("unicorn")),
            "Unicorn: Avoid array for each"
        );
        assert_eq!(
            fallback_description("import/no-cycle", Some("import")),
            "Imports: Avoid cycle"
        );
    }

    #[test]
    fn test_fallback_unknown_prefix_uses_prefix_itself() {
        assert_eq!(
            fallback_description("@acme/no-widgets", Some("@acme")),
            "@acme: Avoid widgets"
        );
    }

    #[test]
    fn test_plugin_display_name_lookup() {
        assert_eq!(plugin_display_name("@typescript-eslint"), "TypeScript");
        assert_eq!(plugin_display_name("jsx-a11y"), "Accessibility");
        assert_eq!(plugin_display_name("n"), "Node.js");
        assert_eq!(plugin_display_name("mystery"), "mystery");
    }

    // ── Category inference ───────────────────────────────────────────────

    #[test]
    fn test_infer_category_from_plugin() {
        assert_eq!(
            infer_category("@typescript-eslint/made-up", Some("@typescript-eslint")),
            RuleCategory::TypeSafety
        );
        assert_eq!(
            infer_category("jsx-a11y/made-up", Some("jsx-a11y")),
            RuleCategory::React
        );
        assert_eq!(
            infer_category("security/detect-object-injection", Some("security")),
            RuleCategory::Security
        );
        assert_eq!(
            infer_category("vitest/no-focused-tests", Some("vitest")),
            RuleCategory::Testing
        );
        assert_eq!(
            infer_category("promise/param-names", Some("promise")),
            RuleCategory::CodeQuality
        );
    }

    #[test]
    fn test_infer_category_from_patterns() {
        assert_eq!(
            infer_category("require-await-everywhere", None),
            RuleCategory::Performance
        );
        assert_eq!(infer_category("const-naming", None), RuleCategory::CodeQuality);
        assert_eq!(infer_category("no-undef-init", None), RuleCategory::TypeSafety);
        assert_eq!(infer_category("comma-dangle", None), RuleCategory::Style);
        assert_eq!(
            infer_category("no-script-url-redirect", None),
            RuleCategory::Security
        );
        assert_eq!(infer_category("max-params", None), RuleCategory::CodeQuality);
        assert_eq!(infer_category("first-import", None), RuleCategory::Imports);
        assert_eq!(infer_category("unit-spec-style", None), RuleCategory::Testing);
    }

    #[test]
    fn test_infer_category_pattern_order() {
        // "no-await-in-loop" style names hit the performance group before the
        // later generic groups get a chance.
        assert_eq!(
            infer_category("no-await-in-loop-strict", None),
            RuleCategory::Performance
        );
    }

    #[test]
    fn test_infer_category_default_other() {
        assert_eq!(infer_category("totally-unknown-rule", None), RuleCategory::Other);
        assert_eq!(
            infer_category("unicorn/better-regex", Some("unicorn")),
            RuleCategory::Other
        );
    }
}
