use std::collections::HashMap;

use chrono::Utc;

use crate::mappings::resolve_mapping;
use crate::types::{
    CategoryGuidelines, GuidelineDocument, GuidelineItem, NormalizedConfig, RuleCategory,
};

#[derive(Debug, Clone, Copy)]
pub struct GeneratorOptions {
    /// Attach Do/Don't guidance to guidelines that have it.
    pub include_guidance: bool,
    /// Keep rules that only resolved to a synthesized fallback description.
    pub include_fallback: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            include_guidance: true,
            include_fallback: true,
        }
    }
}

/// Build the guideline document for a normalized config: resolve every
/// active rule, group by category in the fixed order, and sort each group
/// strict-first then by rule id.
pub fn generate_guidelines(
    config: &NormalizedConfig,
    options: &GeneratorOptions,
) -> GuidelineDocument {
    let mut by_category: HashMap<RuleCategory, Vec<GuidelineItem>> = HashMap::new();
    let mut unmapped_rules = 0;

    for rule in &config.rules {
        let mapping =
            resolve_mapping(&rule.rule_id, rule.plugin_prefix.as_deref(), &rule.options);

        if mapping.is_fallback {
            // Counted before the filter so the document reports coverage
            // even when fallback items are excluded.
            unmapped_rules += 1;
            if !options.include_fallback {
                continue;
            }
        }

        let (do_this, dont_do_this) = if options.include_guidance {
            (
                mapping.do_this.map(str::to_string),
                mapping.dont_do_this.map(str::to_string),
            )
        } else {
            (None, None)
        };

        by_category
            .entry(mapping.category)
            .or_default()
            .push(GuidelineItem {
                rule_id: rule.rule_id.clone(),
                is_strict: rule.severity.is_strict(),
                description: mapping.description,
                category: mapping.category,
                do_this,
                dont_do_this,
            });
    }

    let mut categories = Vec::new();
    for category in RuleCategory::ORDER {
        let Some(mut guidelines) = by_category.remove(&category) else {
            continue;
        };
        guidelines.sort_by(|a, b| {
            b.is_strict
                .cmp(&a.is_strict)
                .then_with(|| a.rule_id.cmp(&b.rule_id))
        });
        categories.push(CategoryGuidelines {
            category,
            display_name: category.display_name(),
            guidelines,
        });
    }

    GuidelineDocument {
        categories,
        total_rules: config.active_rules,
        unmapped_rules,
        generated_at: Utc::now(),
    }
}

/// Render the guideline document as markdown. The output is a pure function
/// of the document: lines joined with `\n`, no trailing newline, and the
/// footer date taken from the document's own timestamp.
pub fn render_markdown(document: &GuidelineDocument, options: &GeneratorOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# ESLint Code Standards".to_string());
    lines.push(String::new());
    lines.push(format!(
        "This project enforces **{} ESLint rules** for code quality and consistency.",
        document.total_rules
    ));
    lines.push(String::new());

    lines.push("## Quick Reference".to_string());
    lines.push(String::new());
    lines.push("- **Check for issues**: `npx eslint .`".to_string());
    lines.push("- **Fix issues**: `npx eslint . --fix`".to_string());
    lines.push(String::new());

    lines.push("## Core Principles".to_string());
    lines.push(String::new());
    lines.push(
        "Write code that is **accessible, performant, type-safe, and maintainable**. \
         Focus on clarity and explicit intent over brevity."
            .to_string(),
    );
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    for category in &document.categories {
        lines.push(format!("### {}", category.display_name));
        lines.push(String::new());

        for guideline in &category.guidelines {
            let severity = if guideline.is_strict {
                ""
            } else {
                " (recommended)"
            };
            lines.push(format!("- {}{severity}", guideline.description));

            if options.include_guidance {
                if let Some(do_this) = &guideline.do_this {
                    lines.push(format!("  - **Do**: {do_this}"));
                }
                if let Some(dont_do_this) = &guideline.dont_do_this {
                    lines.push(format!("  - **Don't**: {dont_do_this}"));
                }
            }
        }
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(format!(
        "*Generated from ESLint configuration on {}. {} rules enforced.*",
        document.generated_at.format("%Y-%m-%d"),
        document.total_rules
    ));

    lines.join("\n")
}

/// Convenience path used by the agent writers: config straight to markdown.
pub fn generate_rules_content(config: &NormalizedConfig, options: &GeneratorOptions) -> String {
    let document = generate_guidelines(config, options);
    render_markdown(&document, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_config, types::ResolvedEslintConfig};
    use chrono::TimeZone;
    use comrak::nodes::NodeValue;
    use comrak::{parse_document, Arena, Options};
    use serde_json::json;

    fn config_from(json: serde_json::Value) -> NormalizedConfig {
        let raw: ResolvedEslintConfig = serde_json::from_value(json).unwrap();
        parse_config(&raw)
    }

    fn collect_text<'a>(node: &'a comrak::nodes::AstNode<'a>) -> String {
        let mut buf = String::new();
        fn inner<'a>(node: &'a comrak::nodes::AstNode<'a>, buf: &mut String) {
            match &node.data.borrow().value {
                NodeValue::Text(t) => buf.push_str(t),
                NodeValue::Code(c) => buf.push_str(&c.literal),
                _ => {}
            }
            for child in node.children() {
                inner(child, buf);
            }
        }
        inner(node, &mut buf);
        buf
    }

    fn extract_headings<'a>(
        node: &'a comrak::nodes::AstNode<'a>,
        level: u8,
        titles: &mut Vec<String>,
    ) {
        for child in node.children() {
            {
                let data = child.data.borrow();
                if let NodeValue::Heading(heading) = &data.value {
                    if heading.level == level {
                        titles.push(collect_text(child));
                    }
                }
            }
            extract_headings(child, level, titles);
        }
    }

    fn heading_titles(markdown: &str, level: u8) -> Vec<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &Options::default());
        let mut titles = Vec::new();
        extract_headings(root, level, &mut titles);
        titles
    }

    // ── Document generation ──────────────────────────────────────────────

    #[test]
    fn test_generate_counts_and_grouping() {
        let config = config_from(json!({
            "rules": {
                "no-console": "error",
                "eqeqeq": "error",
                "quotes": ["warn", "single"]
            }
        }));
        let doc = generate_guidelines(&config, &GeneratorOptions::default());

        assert_eq!(doc.total_rules, 3);
        assert_eq!(doc.unmapped_rules, 0);
        assert_eq!(doc.guideline_count(), 3);

        let names: Vec<_> = doc.categories.iter().map(|c| c.category).collect();
        assert_eq!(
            names,
            vec![
                RuleCategory::TypeSafety,
                RuleCategory::CodeQuality,
                RuleCategory::Style
            ],
            "categories must follow the fixed order"
        );
    }

    #[test]
    fn test_generate_sorts_strict_first_then_by_id() {
        let config = config_from(json!({
            "rules": {
                "no-var": "warn",
                "no-console": "error",
                "complexity": "error"
            }
        }));
        let doc = generate_guidelines(&config, &GeneratorOptions::default());

        let quality = &doc.categories[0];
        assert_eq!(quality.category, RuleCategory::CodeQuality);
        let ids: Vec<_> = quality.guidelines.iter().map(|g| g.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["complexity", "no-console", "no-var"]);
        assert!(quality.guidelines[0].is_strict);
        assert!(!quality.guidelines[2].is_strict);
    }

    #[test]
    fn test_generate_counts_unmapped_before_filter() {
        let config = config_from(json!({
            "rules": {
                "no-console": "error",
                "totally-unknown-rule": "error"
            }
        }));

        let with_fallback = generate_guidelines(&config, &GeneratorOptions::default());
        assert_eq!(with_fallback.unmapped_rules, 1);
        assert_eq!(with_fallback.guideline_count(), 2);

        let without_fallback = generate_guidelines(
            &config,
            &GeneratorOptions {
                include_fallback: false,
                ..Default::default()
            },
        );
        assert_eq!(
            without_fallback.unmapped_rules, 1,
            "skipped fallback rules still count as unmapped"
        );
        assert_eq!(without_fallback.guideline_count(), 1);
    }

    #[test]
    fn test_generate_guidance_toggle() {
        let config = config_from(json!({ "rules": { "no-console": "error" } }));

        let with_guidance = generate_guidelines(&config, &GeneratorOptions::default());
        let item = &with_guidance.categories[0].guidelines[0];
        assert!(item.do_this.is_some());
        assert!(item.dont_do_this.is_some());

        let without_guidance = generate_guidelines(
            &config,
            &GeneratorOptions {
                include_guidance: false,
                ..Default::default()
            },
        );
        let item = &without_guidance.categories[0].guidelines[0];
        assert_eq!(item.do_this, None);
        assert_eq!(item.dont_do_this, None);
    }

    #[test]
    fn test_generate_fallback_item_shape() {
        let config = config_from(json!({ "rules": { "unicorn/no-array-for-each": "warn" } }));
        let doc = generate_guidelines(&config, &GeneratorOptions::default());

        let item = &doc.categories[0].guidelines[0];
        assert_eq!(item.description, "Unicorn: Avoid array for each");
        assert_eq!(item.category, RuleCategory::Other);
        assert!(!item.is_strict);
        assert_eq!(item.do_this, None);
    }

    #[test]
    fn test_generate_empty_config() {
        let doc = generate_guidelines(&NormalizedConfig::default(), &GeneratorOptions::default());
        assert!(doc.categories.is_empty());
        assert_eq!(doc.total_rules, 0);
        assert_eq!(doc.unmapped_rules, 0);
    }

    // ── Markdown rendering ───────────────────────────────────────────────

    fn fixed_doc(config: &NormalizedConfig) -> GuidelineDocument {
        let mut doc = generate_guidelines(config, &GeneratorOptions::default());
        doc.generated_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        doc
    }

    #[test]
    fn test_render_skeleton() {
        let config = config_from(json!({
            "rules": { "no-console": "error", "quotes": ["warn", "single"] }
        }));
        let doc = fixed_doc(&config);
        let markdown = render_markdown(&doc, &GeneratorOptions::default());

        assert!(markdown.starts_with("# ESLint Code Standards\n"));
        assert!(markdown
            .contains("This project enforces **2 ESLint rules** for code quality and consistency."));
        assert!(markdown.contains("- **Check for issues**: `npx eslint .`"));
        assert!(markdown.contains("- **Fix issues**: `npx eslint . --fix`"));
        assert!(markdown.contains("## Core Principles"));
        assert!(markdown.contains(
            "Write code that is **accessible, performant, type-safe, and maintainable**. \
             Focus on clarity and explicit intent over brevity."
        ));
        assert!(markdown
            .ends_with("*Generated from ESLint configuration on 2025-06-01. 2 rules enforced.*"));
        assert!(!markdown.ends_with('\n'), "no trailing newline");
    }

    #[test]
    fn test_render_recommended_suffix_for_warn_only() {
        let config = config_from(json!({
            "rules": { "no-console": "error", "quotes": ["warn", "single"] }
        }));
        let markdown = render_markdown(&fixed_doc(&config), &GeneratorOptions::default());

        assert!(markdown.contains("- Use single quotes for strings (recommended)"));
        assert!(markdown.contains("- Remove console statements from production code\n"));
        assert!(!markdown.contains("production code (recommended)"));
    }

    #[test]
    fn test_render_do_precedes_dont() {
        let config = config_from(json!({ "rules": { "no-console": "error" } }));
        let markdown = render_markdown(&fixed_doc(&config), &GeneratorOptions::default());

        let do_at = markdown
            .find("  - **Do**: Use a proper logging library")
            .expect("Do line present");
        let dont_at = markdown
            .find("  - **Don't**: Leave console.log statements")
            .expect("Don't line present");
        assert!(do_at < dont_at);
    }

    #[test]
    fn test_render_without_guidance_has_no_do_dont() {
        let options = GeneratorOptions {
            include_guidance: false,
            ..Default::default()
        };
        let config = config_from(json!({ "rules": { "no-console": "error" } }));
        let doc = generate_guidelines(&config, &options);
        let markdown = render_markdown(&doc, &options);

        assert!(!markdown.contains("**Do**:"));
        assert!(!markdown.contains("**Don't**:"));
    }

    #[test]
    fn test_render_category_headings_match_document() {
        let config = config_from(json!({
            "rules": {
                "eqeqeq": "error",
                "no-console": "error",
                "react/jsx-key": "error",
                "quotes": ["error", "single"]
            }
        }));
        let doc = fixed_doc(&config);
        let markdown = render_markdown(&doc, &GeneratorOptions::default());

        let headings = heading_titles(&markdown, 3);
        let expected: Vec<_> = doc
            .categories
            .iter()
            .map(|c| c.display_name.to_string())
            .collect();
        assert_eq!(headings, expected);
        assert_eq!(
            headings,
            vec![
                "Type Safety & Explicitness",
                "Code Quality",
                "React & JSX",
                "Code Style"
            ]
        );
    }

    #[test]
    fn test_render_title_structure() {
        let config = config_from(json!({ "rules": { "no-console": "error" } }));
        let markdown = render_markdown(&fixed_doc(&config), &GeneratorOptions::default());

        assert_eq!(heading_titles(&markdown, 1), vec!["ESLint Code Standards"]);
        assert_eq!(
            heading_titles(&markdown, 2),
            vec!["Quick Reference", "Core Principles"]
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = config_from(json!({
            "rules": { "no-console": "error", "semi": ["error", "always"] }
        }));
        let doc = fixed_doc(&config);
        let first = render_markdown(&doc, &GeneratorOptions::default());
        let second = render_markdown(&doc, &GeneratorOptions::default());
        assert_eq!(first, second);
    }
}
