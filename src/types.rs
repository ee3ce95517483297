use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    /// A rule is active when it can fire at all.
    pub fn is_active(self) -> bool {
        self != Severity::Off
    }

    /// Strict rules (`error`) sort ahead of recommended ones (`warn`).
    pub fn is_strict(self) -> bool {
        self == Severity::Error
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    TypeSafety,
    CodeQuality,
    React,
    Security,
    Performance,
    Style,
    Imports,
    Testing,
    Other,
}

impl RuleCategory {
    /// Rendering order of category sections. Categories with no guidelines
    /// are skipped, but never reordered.
    pub const ORDER: [RuleCategory; 9] = [
        RuleCategory::TypeSafety,
        RuleCategory::CodeQuality,
        RuleCategory::React,
        RuleCategory::Security,
        RuleCategory::Performance,
        RuleCategory::Style,
        RuleCategory::Imports,
        RuleCategory::Testing,
        RuleCategory::Other,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            RuleCategory::TypeSafety => "Type Safety & Explicitness",
            RuleCategory::CodeQuality => "Code Quality",
            RuleCategory::React => "React & JSX",
            RuleCategory::Security => "Security",
            RuleCategory::Performance => "Performance",
            RuleCategory::Style => "Code Style",
            RuleCategory::Imports => "Imports & Exports",
            RuleCategory::Testing => "Testing",
            RuleCategory::Other => "Other",
        }
    }
}

impl Serialize for RuleCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RuleCategory::TypeSafety => "type-safety",
            RuleCategory::CodeQuality => "code-quality",
            RuleCategory::React => "react",
            RuleCategory::Security => "security",
            RuleCategory::Performance => "performance",
            RuleCategory::Style => "style",
            RuleCategory::Imports => "imports",
            RuleCategory::Testing => "testing",
            RuleCategory::Other => "other",
        })
    }
}

/// One rule from the resolved ESLint config, after identity parsing and
/// severity normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRule {
    /// Full identifier as it appeared in the config, e.g.
    /// `@typescript-eslint/no-explicit-any`.
    pub rule_id: String,
    /// `@typescript-eslint` in the example above. `None` for core rules.
    pub plugin_prefix: Option<String>,
    /// `no-explicit-any` in the example above.
    pub rule_name: String,
    pub severity: Severity,
    /// Option tail of the array form, e.g. `["single"]` for
    /// `"quotes": ["error", "single"]`. Empty for the bare form.
    pub options: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedConfig {
    /// Active rules only (severity != off).
    pub rules: Vec<NormalizedRule>,
    /// Sorted, deduped union of rule-id prefixes and the config's own
    /// `plugins` list.
    pub plugins: Vec<String>,
    /// Every rule key in the config, active or not.
    pub total_rules: usize,
    /// Rules whose severity is `warn` or `error`.
    pub active_rules: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuidelineItem {
    pub rule_id: String,
    /// `error` severity. Strict items sort ahead of recommended ones.
    pub is_strict: bool,
    pub description: String,
    pub category: RuleCategory,
    pub do_this: Option<String>,
    pub dont_do_this: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGuidelines {
    pub category: RuleCategory,
    pub display_name: &'static str,
    pub guidelines: Vec<GuidelineItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuidelineDocument {
    /// Non-empty categories in `RuleCategory::ORDER`.
    pub categories: Vec<CategoryGuidelines>,
    /// Active rule count of the source config.
    pub total_rules: usize,
    /// Rules that only got a synthesized fallback description. Counted even
    /// when fallback items are excluded from the document.
    pub unmapped_rules: usize,
    pub generated_at: DateTime<Utc>,
}

impl GuidelineDocument {
    pub fn guideline_count(&self) -> usize {
        self.categories.iter().map(|c| c.guidelines.len()).sum()
    }
}
