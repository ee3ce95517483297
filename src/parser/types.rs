use serde::Deserialize;
use serde_json::Value;

/// Resolved ESLint configuration as printed by `eslint --print-config`.
///
/// Only the parts this tool consumes are modeled; the real output carries
/// plenty more (languageOptions, settings, ...) which serde ignores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolvedEslintConfig {
    /// Rule id -> severity, or `[severity, ...options]`.
    #[serde(default)]
    pub rules: serde_json::Map<String, Value>,
    /// Plugin names declared by the flat config, when present.
    #[serde(default)]
    pub plugins: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let config: ResolvedEslintConfig = serde_json::from_str(r#"{}"#).unwrap();
        assert!(config.rules.is_empty());
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let config: ResolvedEslintConfig = serde_json::from_str(
            r#"{
                "rules": { "no-console": "error" },
                "plugins": ["react"],
                "languageOptions": { "ecmaVersion": 2024 },
                "settings": {}
            }"#,
        )
        .unwrap();
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.plugins, vec!["react"]);
    }

    #[test]
    fn test_deserialize_rule_shapes() {
        let config: ResolvedEslintConfig = serde_json::from_str(
            r#"{
                "rules": {
                    "no-console": 2,
                    "quotes": ["error", "single"],
                    "semi": "warn"
                }
            }"#,
        )
        .unwrap();
        assert!(config.rules["no-console"].is_number());
        assert!(config.rules["quotes"].is_array());
        assert!(config.rules["semi"].is_string());
    }
}
