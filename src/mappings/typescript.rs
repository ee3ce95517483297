use crate::mappings::{OptionRefinement, RuleMapping};
use crate::types::RuleCategory;

/// Mappings for `@typescript-eslint` rules.
pub(crate) const TYPESCRIPT_MAPPINGS: &[(&str, RuleMapping)] = &[
    (
        "@typescript-eslint/no-explicit-any",
        RuleMapping {
            description: "Avoid using the any type",
            category: RuleCategory::TypeSafety,
            do_this: Some("Use specific types, unknown, or generics instead of any"),
            dont_do_this: Some("Use any to bypass type checking"),
            refinement: OptionRefinement::ExplicitAnyRestArgs,
        },
    ),
    (
        "@typescript-eslint/no-unused-vars",
        RuleMapping {
            description: "Remove unused variables",
            category: RuleCategory::CodeQuality,
            do_this: Some("Remove or use all declared variables"),
            dont_do_this: Some("Leave unused variables in code"),
            refinement: OptionRefinement::UnusedVarsIgnorePattern,
        },
    ),
    (
        "@typescript-eslint/explicit-function-return-type",
        RuleMapping {
            description: "Add explicit return types to functions",
            category: RuleCategory::TypeSafety,
            do_this: Some("Add return type annotations: function foo(): string"),
            dont_do_this: Some("Rely on type inference for function return types"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/explicit-module-boundary-types",
        RuleMapping {
            description: "Add explicit types to exported functions and classes",
            category: RuleCategory::TypeSafety,
            do_this: Some("Type all exported function parameters and return values"),
            dont_do_this: Some("Export functions without explicit type annotations"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/no-non-null-assertion",
        RuleMapping {
            description: "Avoid non-null assertions (!)",
            category: RuleCategory::TypeSafety,
            do_this: Some("Use optional chaining (?.) or proper null checks"),
            dont_do_this: Some("Use ! to assert non-null without checking"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/prefer-nullish-coalescing",
        RuleMapping {
            description: "Use nullish coalescing operator (??)",
            category: RuleCategory::TypeSafety,
            do_this: Some("Use ?? for null/undefined checks: value ?? defaultValue"),
            dont_do_this: Some("Use || which also catches falsy values like 0 or \"\""),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/prefer-optional-chain",
        RuleMapping {
            description: "Use optional chaining (?.)",
            category: RuleCategory::TypeSafety,
            do_this: Some("Use optional chaining: obj?.prop?.nested"),
            dont_do_this: Some("Use verbose checks: obj && obj.prop && obj.prop.nested"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/strict-boolean-expressions",
        RuleMapping {
            description: "Use explicit boolean expressions",
            category: RuleCategory::TypeSafety,
            do_this: Some("Use explicit checks: if (value !== undefined)"),
            dont_do_this: Some("Use implicit truthiness: if (value)"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/no-floating-promises",
        RuleMapping {
            description: "Handle all promises - don't let them float",
            category: RuleCategory::CodeQuality,
            do_this: Some("Await promises or use .then()/.catch() or void operator"),
            dont_do_this: Some("Call async functions without handling the promise"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/await-thenable",
        RuleMapping {
            description: "Only await thenable values",
            category: RuleCategory::CodeQuality,
            do_this: Some("Only await promises or thenable objects"),
            dont_do_this: Some("Await non-promise values"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/no-misused-promises",
        RuleMapping {
            description: "Use promises correctly",
            category: RuleCategory::CodeQuality,
            do_this: Some("Handle promises properly in conditionals and callbacks"),
            dont_do_this: Some("Use promises where a boolean or void is expected"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/consistent-type-imports",
        RuleMapping {
            description: "Use type-only imports for types",
            category: RuleCategory::Imports,
            do_this: Some("Use import type { Foo } for type-only imports"),
            dont_do_this: Some("Import types with regular import syntax"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/consistent-type-definitions",
        RuleMapping {
            description: "Use consistent type definition style",
            category: RuleCategory::Style,
            do_this: None,
            dont_do_this: None,
            refinement: OptionRefinement::TypeDefinitionStyle,
        },
    ),
    (
        "@typescript-eslint/naming-convention",
        RuleMapping {
            description: "Follow naming conventions",
            category: RuleCategory::Style,
            do_this: Some("Follow project naming conventions for variables, types, and interfaces"),
            dont_do_this: Some("Use inconsistent naming styles"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/no-inferrable-types",
        RuleMapping {
            description: "Omit type annotations for trivially inferred types",
            category: RuleCategory::Style,
            do_this: Some("Let TypeScript infer simple types: const x = 5"),
            dont_do_this: Some("Add redundant type annotations: const x: number = 5"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/ban-types",
        RuleMapping {
            description: "Avoid problematic built-in types",
            category: RuleCategory::TypeSafety,
            do_this: Some("Use Record<string, unknown> instead of {}"),
            dont_do_this: Some("Use {}, Object, Function as types"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/no-unsafe-assignment",
        RuleMapping {
            description: "Avoid assigning any to typed variables",
            category: RuleCategory::TypeSafety,
            do_this: Some("Ensure type safety when assigning values"),
            dont_do_this: Some("Assign any values to typed variables"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/no-unsafe-member-access",
        RuleMapping {
            description: "Avoid accessing members of any typed values",
            category: RuleCategory::TypeSafety,
            do_this: Some("Type values before accessing their properties"),
            dont_do_this: Some("Access properties on any typed values"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/no-unsafe-call",
        RuleMapping {
            description: "Avoid calling any typed values as functions",
            category: RuleCategory::TypeSafety,
            do_this: Some("Ensure proper typing before calling functions"),
            dont_do_this: Some("Call any typed values as functions"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "@typescript-eslint/no-unsafe-return",
        RuleMapping {
            description: "Avoid returning any from functions",
            category: RuleCategory::TypeSafety,
            do_this: Some("Ensure return values have proper types"),
            dont_do_this: Some("Return any from typed functions"),
            refinement: OptionRefinement::None,
        },
    ),
];
