use crate::mappings::{OptionRefinement, RuleMapping};
use crate::types::RuleCategory;

/// Mappings for core ESLint rules (no plugin prefix).
pub(crate) const CORE_MAPPINGS: &[(&str, RuleMapping)] = &[
    // Console and debugging
    (
        "no-console",
        RuleMapping {
            description: "Remove console statements from production code",
            category: RuleCategory::CodeQuality,
            do_this: Some("Use a proper logging library or remove debug statements"),
            dont_do_this: Some("Leave console.log statements in production code"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-debugger",
        RuleMapping {
            description: "Remove debugger statements",
            category: RuleCategory::CodeQuality,
            do_this: Some("Remove debugger statements before committing"),
            dont_do_this: Some("Leave debugger statements in code"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-alert",
        RuleMapping {
            description: "Avoid using alert, confirm, and prompt",
            category: RuleCategory::CodeQuality,
            do_this: Some("Use proper UI components for user interactions"),
            dont_do_this: Some("Use alert(), confirm(), or prompt()"),
            refinement: OptionRefinement::None,
        },
    ),
    // Variables
    (
        "no-unused-vars",
        RuleMapping {
            description: "Remove unused variables",
            category: RuleCategory::CodeQuality,
            do_this: Some("Remove or use all declared variables"),
            dont_do_this: Some("Leave unused variables in code"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-undef",
        RuleMapping {
            description: "Avoid using undefined variables",
            category: RuleCategory::TypeSafety,
            do_this: Some("Ensure all variables are properly declared before use"),
            dont_do_this: Some("Reference variables that are not defined"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-shadow",
        RuleMapping {
            description: "Avoid variable shadowing",
            category: RuleCategory::CodeQuality,
            do_this: Some("Rename inner variables so they do not hide outer ones"),
            dont_do_this: Some("Declare a variable with the same name as one in an outer scope"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "prefer-const",
        RuleMapping {
            description: "Use const for variables that are never reassigned",
            category: RuleCategory::CodeQuality,
            do_this: Some("Use const by default for all variable declarations"),
            dont_do_this: Some("Use let when the variable is never reassigned"),
            refinement: OptionRefinement::ConstDestructuring,
        },
    ),
    (
        "no-var",
        RuleMapping {
            description: "Use let or const instead of var",
            category: RuleCategory::CodeQuality,
            do_this: Some("Use const for constants, let for variables that change"),
            dont_do_this: Some("Use var for variable declarations"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-param-reassign",
        RuleMapping {
            description: "Avoid reassigning function parameters",
            category: RuleCategory::CodeQuality,
            do_this: Some("Copy the parameter into a local variable before modifying it"),
            dont_do_this: Some("Assign new values to function parameters"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-magic-numbers",
        RuleMapping {
            description: "Replace magic numbers with named constants",
            category: RuleCategory::CodeQuality,
            do_this: Some("Extract numbers to named constants: const MAX_RETRIES = 3"),
            dont_do_this: Some("Scatter unexplained numeric literals through the code"),
            refinement: OptionRefinement::None,
        },
    ),
    // Comparisons
    (
        "eqeqeq",
        RuleMapping {
            description: "Use strict equality operators (=== and !==)",
            category: RuleCategory::TypeSafety,
            do_this: Some("Always use === and !== for comparisons"),
            dont_do_this: Some("Use == or != which perform type coercion"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "yoda",
        RuleMapping {
            description: "Avoid yoda conditions",
            category: RuleCategory::Style,
            do_this: Some("Put the variable first: if (value === 42)"),
            dont_do_this: Some("Put the literal first: if (42 === value)"),
            refinement: OptionRefinement::None,
        },
    ),
    // Formatting
    (
        "quotes",
        RuleMapping {
            description: "Use consistent quote style for strings",
            category: RuleCategory::Style,
            do_this: None,
            dont_do_this: None,
            refinement: OptionRefinement::QuoteStyle,
        },
    ),
    (
        "semi",
        RuleMapping {
            description: "Use consistent semicolon style",
            category: RuleCategory::Style,
            do_this: None,
            dont_do_this: None,
            refinement: OptionRefinement::SemicolonStyle,
        },
    ),
    (
        "indent",
        RuleMapping {
            description: "Use consistent indentation",
            category: RuleCategory::Style,
            do_this: None,
            dont_do_this: None,
            refinement: OptionRefinement::IndentStyle,
        },
    ),
    (
        "camelcase",
        RuleMapping {
            description: "Use camelCase for identifiers",
            category: RuleCategory::Style,
            do_this: Some("Name variables and functions in camelCase: maxValue"),
            dont_do_this: Some("Mix snake_case and camelCase identifiers"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "curly",
        RuleMapping {
            description: "Use braces for all control statements",
            category: RuleCategory::CodeQuality,
            do_this: Some("Wrap if/else/for/while bodies in braces"),
            dont_do_this: Some("Write single-statement bodies without braces"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "dot-notation",
        RuleMapping {
            description: "Use dot notation for property access",
            category: RuleCategory::Style,
            do_this: Some("Access known properties with dots: obj.name"),
            dont_do_this: Some("Use bracket access for static keys: obj[\"name\"]"),
            refinement: OptionRefinement::None,
        },
    ),
    // Modern JavaScript
    (
        "prefer-template",
        RuleMapping {
            description: "Use template literals instead of string concatenation",
            category: RuleCategory::Style,
            do_this: Some("Use template literals: `Hello ${name}`"),
            dont_do_this: Some("Use string concatenation: \"Hello \" + name"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "prefer-arrow-callback",
        RuleMapping {
            description: "Use arrow functions for callbacks",
            category: RuleCategory::Style,
            do_this: Some("Use arrow functions: array.map((item) => item.value)"),
            dont_do_this: Some(
                "Use function expressions: array.map(function(item) { return item.value; })",
            ),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "object-shorthand",
        RuleMapping {
            description: "Use shorthand syntax for object methods and properties",
            category: RuleCategory::Style,
            do_this: Some("Use shorthand: { name, getValue() {} }"),
            dont_do_this: Some("Use verbose syntax: { name: name, getValue: function() {} }"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "prefer-destructuring",
        RuleMapping {
            description: "Use destructuring for object and array assignments",
            category: RuleCategory::Style,
            do_this: Some("Use destructuring: const { name } = obj"),
            dont_do_this: Some("Use direct access: const name = obj.name"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "prefer-spread",
        RuleMapping {
            description: "Use spread syntax instead of .apply()",
            category: RuleCategory::Style,
            do_this: Some("Call variadic functions with spread: fn(...args)"),
            dont_do_this: Some("Use fn.apply(null, args)"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "prefer-rest-params",
        RuleMapping {
            description: "Use rest parameters instead of arguments",
            category: RuleCategory::Style,
            do_this: Some("Declare variadic functions with (...args)"),
            dont_do_this: Some("Read the arguments object inside functions"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-plusplus",
        RuleMapping {
            description: "Avoid unary increment and decrement operators",
            category: RuleCategory::Style,
            do_this: Some("Use x += 1 and x -= 1"),
            dont_do_this: Some("Use x++ or x-- outside for-loop updates"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-useless-concat",
        RuleMapping {
            description: "Avoid useless string concatenation",
            category: RuleCategory::CodeQuality,
            do_this: Some("Join adjacent literals into one string"),
            dont_do_this: Some("Concatenate two string literals: \"a\" + \"b\""),
            refinement: OptionRefinement::None,
        },
    ),
    // Security
    (
        "no-eval",
        RuleMapping {
            description: "Never use eval() - it's a security risk",
            category: RuleCategory::Security,
            do_this: Some("Use safer alternatives like JSON.parse() for data"),
            dont_do_this: Some("Use eval() to execute dynamic code"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-implied-eval",
        RuleMapping {
            description: "Avoid implied eval through setTimeout/setInterval strings",
            category: RuleCategory::Security,
            do_this: Some("Use setTimeout(() => { /* code */ }, 100)"),
            dont_do_this: Some("Use setTimeout(\"code\", 100)"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-new-func",
        RuleMapping {
            description: "Avoid creating functions with the Function constructor",
            category: RuleCategory::Security,
            do_this: Some("Use regular function declarations or arrow functions"),
            dont_do_this: Some("Use new Function(\"a\", \"return a\")"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-script-url",
        RuleMapping {
            description: "Never use javascript: URLs",
            category: RuleCategory::Security,
            do_this: Some("Attach event handlers instead of script URLs"),
            dont_do_this: Some("Use href=\"javascript:...\" links"),
            refinement: OptionRefinement::None,
        },
    ),
    // Error handling
    (
        "no-throw-literal",
        RuleMapping {
            description: "Throw Error objects instead of literals",
            category: RuleCategory::CodeQuality,
            do_this: Some("throw new Error(\"Something went wrong\")"),
            dont_do_this: Some("throw \"Something went wrong\""),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-empty",
        RuleMapping {
            description: "Avoid empty block statements",
            category: RuleCategory::CodeQuality,
            do_this: Some("Add comments explaining why block is empty, or add proper logic"),
            dont_do_this: Some("Leave empty catch blocks or if/else blocks"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "default-case",
        RuleMapping {
            description: "Add default cases to switch statements",
            category: RuleCategory::CodeQuality,
            do_this: Some("Handle unexpected values in a default branch"),
            dont_do_this: Some("Write switch statements that silently skip unknown values"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "radix",
        RuleMapping {
            description: "Pass the radix argument to parseInt",
            category: RuleCategory::CodeQuality,
            do_this: Some("Call parseInt(value, 10) for decimal parsing"),
            dont_do_this: Some("Rely on parseInt guessing the base"),
            refinement: OptionRefinement::None,
        },
    ),
    // Async
    (
        "no-async-promise-executor",
        RuleMapping {
            description: "Avoid async function as Promise executor",
            category: RuleCategory::CodeQuality,
            do_this: Some("Use new Promise((resolve) => {}) with proper async handling"),
            dont_do_this: Some("Use new Promise(async (resolve) => {})"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "require-await",
        RuleMapping {
            description: "Async functions should contain await",
            category: RuleCategory::CodeQuality,
            do_this: Some("Use async only when await is needed, or return a Promise"),
            dont_do_this: Some("Create async functions without await"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-await-in-loop",
        RuleMapping {
            description: "Avoid await inside loops for better performance",
            category: RuleCategory::Performance,
            do_this: Some("Use Promise.all() for parallel execution"),
            dont_do_this: Some("Use await inside for/while loops"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-return-await",
        RuleMapping {
            description: "Don't return await - just return the promise",
            category: RuleCategory::Performance,
            do_this: Some("return promise (except in try/catch)"),
            dont_do_this: Some("return await promise"),
            refinement: OptionRefinement::None,
        },
    ),
    // Complexity
    (
        "no-nested-ternary",
        RuleMapping {
            description: "Avoid nested ternary operators",
            category: RuleCategory::CodeQuality,
            do_this: Some("Use if/else statements or extract to variables"),
            dont_do_this: Some("Use nested ternaries: a ? b ? c : d : e"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-else-return",
        RuleMapping {
            description: "Avoid else blocks after return",
            category: RuleCategory::CodeQuality,
            do_this: Some("Return early and continue at the outer level"),
            dont_do_this: Some("Wrap the rest of the function in an else block"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "no-lonely-if",
        RuleMapping {
            description: "Merge lonely if statements into else if",
            category: RuleCategory::Style,
            do_this: Some("Use else if when the else branch only contains an if"),
            dont_do_this: Some("Nest a single if inside an else block"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "max-depth",
        RuleMapping {
            description: "Limit nesting depth for better readability",
            category: RuleCategory::CodeQuality,
            do_this: Some("Use early returns and extract functions to reduce nesting"),
            dont_do_this: Some("Create deeply nested code structures"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "complexity",
        RuleMapping {
            description: "Keep functions simple with limited cyclomatic complexity",
            category: RuleCategory::CodeQuality,
            do_this: Some("Break complex functions into smaller, focused functions"),
            dont_do_this: Some("Create functions with too many branches and conditions"),
            refinement: OptionRefinement::None,
        },
    ),
    // Imports
    (
        "no-duplicate-imports",
        RuleMapping {
            description: "Merge duplicate imports from the same module",
            category: RuleCategory::Imports,
            do_this: Some("Combine imports: import { a, b } from './mod'"),
            dont_do_this: Some("Import the same module on multiple lines"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "sort-imports",
        RuleMapping {
            description: "Keep import statements sorted",
            category: RuleCategory::Imports,
            do_this: Some("Order imports consistently within each group"),
            dont_do_this: Some("Leave imports in arbitrary order"),
            refinement: OptionRefinement::None,
        },
    ),
];
