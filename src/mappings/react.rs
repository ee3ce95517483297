use crate::mappings::{OptionRefinement, RuleMapping};
use crate::types::RuleCategory;

/// Mappings for `react`, `react-hooks`, and `jsx-a11y` rules.
pub(crate) const REACT_MAPPINGS: &[(&str, RuleMapping)] = &[
    // React core
    (
        "react/jsx-key",
        RuleMapping {
            description: "Provide unique key props for elements in arrays",
            category: RuleCategory::React,
            do_this: Some("Add unique key prop to elements in .map() or arrays"),
            dont_do_this: Some("Use array index as key or omit key props"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/jsx-no-target-blank",
        RuleMapping {
            description: "Add rel=\"noopener noreferrer\" to links with target=\"_blank\"",
            category: RuleCategory::Security,
            do_this: Some("Add rel=\"noopener noreferrer\" when using target=\"_blank\""),
            dont_do_this: Some("Use target=\"_blank\" without proper rel attribute"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/no-unescaped-entities",
        RuleMapping {
            description: "Escape special characters in JSX text",
            category: RuleCategory::React,
            do_this: Some("Use HTML entities: &apos; &quot; &gt; &lt;"),
            dont_do_this: Some("Use unescaped quotes or special characters in JSX"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/jsx-no-useless-fragment",
        RuleMapping {
            description: "Avoid unnecessary fragments",
            category: RuleCategory::React,
            do_this: Some("Remove fragments that wrap a single child"),
            dont_do_this: Some("Wrap single elements in unnecessary <> </> or <Fragment>"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/jsx-curly-brace-presence",
        RuleMapping {
            description: "Use consistent curly braces in JSX",
            category: RuleCategory::Style,
            do_this: Some("Be consistent with curly braces in JSX props"),
            dont_do_this: Some("Mix {\"string\"} and \"string\" inconsistently"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/jsx-boolean-value",
        RuleMapping {
            description: "Use consistent boolean prop syntax",
            category: RuleCategory::Style,
            do_this: Some("Write boolean props bare: <Input disabled />"),
            dont_do_this: Some("Write <Input disabled={true} />"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/self-closing-comp",
        RuleMapping {
            description: "Use self-closing tags for components without children",
            category: RuleCategory::Style,
            do_this: Some("Use <Component /> for components without children"),
            dont_do_this: Some("Use <Component></Component> when there are no children"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/no-array-index-key",
        RuleMapping {
            description: "Avoid using array index as key",
            category: RuleCategory::React,
            do_this: Some("Use unique, stable identifiers as keys"),
            dont_do_this: Some("Use array index as key prop in lists"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/no-danger",
        RuleMapping {
            description: "Avoid dangerouslySetInnerHTML",
            category: RuleCategory::Security,
            do_this: Some("Use safer alternatives or sanitize HTML content"),
            dont_do_this: Some("Use dangerouslySetInnerHTML without careful consideration"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/no-deprecated",
        RuleMapping {
            description: "Avoid deprecated React APIs",
            category: RuleCategory::React,
            do_this: Some("Use current React APIs and patterns"),
            dont_do_this: Some("Use deprecated methods like componentWillMount"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/no-direct-mutation-state",
        RuleMapping {
            description: "Never mutate state directly",
            category: RuleCategory::React,
            do_this: Some("Use setState() or state setter from useState()"),
            dont_do_this: Some("Mutate this.state directly"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/no-unstable-nested-components",
        RuleMapping {
            description: "Don't define components inside other components",
            category: RuleCategory::React,
            do_this: Some("Define components at module level"),
            dont_do_this: Some("Define components inside render or function body"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/function-component-definition",
        RuleMapping {
            description: "Use consistent function component definition",
            category: RuleCategory::Style,
            do_this: Some("Use consistent style for function components"),
            dont_do_this: Some("Mix arrow functions and function declarations for components"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react/prop-types",
        RuleMapping {
            description: "Define prop types for components",
            category: RuleCategory::TypeSafety,
            do_this: Some("Use TypeScript interfaces or PropTypes"),
            dont_do_this: Some("Leave props untyped"),
            refinement: OptionRefinement::None,
        },
    ),
    // React hooks
    (
        "react-hooks/rules-of-hooks",
        RuleMapping {
            description: "Follow the Rules of Hooks",
            category: RuleCategory::React,
            do_this: Some("Call hooks at the top level of function components"),
            dont_do_this: Some("Call hooks inside loops, conditions, or nested functions"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "react-hooks/exhaustive-deps",
        RuleMapping {
            description: "Include all dependencies in hook dependency arrays",
            category: RuleCategory::React,
            do_this: Some("List all variables from component scope used in the effect"),
            dont_do_this: Some("Omit dependencies or suppress the warning"),
            refinement: OptionRefinement::None,
        },
    ),
    // Accessibility
    (
        "jsx-a11y/alt-text",
        RuleMapping {
            description: "Provide alt text for images",
            category: RuleCategory::React,
            do_this: Some("Add meaningful alt text: <img alt=\"Description\" />"),
            dont_do_this: Some("Omit alt attribute or use empty alt for meaningful images"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "jsx-a11y/anchor-is-valid",
        RuleMapping {
            description: "Ensure anchors are valid",
            category: RuleCategory::React,
            do_this: Some("Use proper href or use a button for actions"),
            dont_do_this: Some("Use <a href=\"#\"> or <a href=\"javascript:void(0)\">"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "jsx-a11y/click-events-have-key-events",
        RuleMapping {
            description: "Add keyboard handlers alongside click handlers",
            category: RuleCategory::React,
            do_this: Some("Add onKeyDown/onKeyUp handlers with onClick"),
            dont_do_this: Some("Add onClick without keyboard support"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "jsx-a11y/no-static-element-interactions",
        RuleMapping {
            description: "Add roles to interactive non-semantic elements",
            category: RuleCategory::React,
            do_this: Some("Use semantic elements or add appropriate role"),
            dont_do_this: Some("Add click handlers to divs without role"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "jsx-a11y/label-has-associated-control",
        RuleMapping {
            description: "Associate labels with form controls",
            category: RuleCategory::React,
            do_this: Some("Use htmlFor or nest input inside label"),
            dont_do_this: Some("Create labels without associated form controls"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "jsx-a11y/heading-has-content",
        RuleMapping {
            description: "Ensure headings have content",
            category: RuleCategory::React,
            do_this: Some("Add visible content to heading elements"),
            dont_do_this: Some("Create empty h1-h6 elements"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "jsx-a11y/no-autofocus",
        RuleMapping {
            description: "Avoid autofocus attribute",
            category: RuleCategory::React,
            do_this: Some("Use focus management with refs when needed"),
            dont_do_this: Some("Use autofocus attribute which can be disorienting"),
            refinement: OptionRefinement::None,
        },
    ),
    (
        "jsx-a11y/aria-props",
        RuleMapping {
            description: "Use valid ARIA attributes",
            category: RuleCategory::React,
            do_this: Some("Check attribute names against the ARIA specification"),
            dont_do_this: Some("Invent aria-* attributes that do not exist"),
            refinement: OptionRefinement::None,
        },
    ),
];
