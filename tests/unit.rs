//! Unit tests for fields, rules, registries, formatting and errors.
mod common;
use common::*;
use shapeflow::error::DefinitionError;
use shapeflow::prelude::*;
use std::result::Result;
use shapeflow::rule::{self, Always, Never};

#[allow(dead_code)]
struct Keyworded {
    r#type: String,
}

#[test]
fn test_field_macro_names_the_field() {
    assert_eq!(field!(Movie, title).property_name(), "title");
    assert_eq!(field!(Movie, release_year).property_name(), "release_year");
    assert_eq!(field!(Keyworded, r#type).property_name(), "type");
}

#[test]
fn test_specifier_from_name() {
    let spec = PropertySpecifier::<Movie>::new("length").unwrap();
    assert_eq!(spec.property_name(), "length");
    assert_eq!(spec.to_string(), "length");

    let raw = PropertySpecifier::<Keyworded>::new("r#type").unwrap();
    assert_eq!(raw.property_name(), "type");
}

#[test]
fn test_specifier_rejects_non_field_selectors() {
    for selector in ["", "   ", "title.len", "len(title)", "1title", "two words", "r#"] {
        let err = PropertySpecifier::<Movie>::new(selector).unwrap_err();
        assert_eq!(err, SelectorError::InvalidSelector(selector.to_string()));
    }
}

#[test]
fn test_specifier_equality_ignores_construction() {
    let from_macro = field!(Movie, title);
    let from_name = PropertySpecifier::<Movie>::new("title").unwrap();
    let padded = PropertySpecifier::<Movie>::new(" title ").unwrap();

    assert_eq!(from_macro, from_name);
    assert_eq!(from_name, padded);
    assert_ne!(from_macro, field!(Movie, length));
}

#[test]
fn test_specifier_serde() {
    let spec = field!(Movie, title);
    let json = serde_json::to_string(&spec).unwrap();
    assert_eq!(json, "\"title\"");

    let back: PropertySpecifier<Movie> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);

    let bad: Result<PropertySpecifier<Movie>, _> = serde_json::from_str("\"a.b\"");
    assert!(bad.is_err());
}

#[test]
fn test_required_fields_deduplicate_by_name() {
    let fields: RequiredFields<Movie> = [
        field!(Movie, title),
        field!(Movie, length),
        PropertySpecifier::new("title").unwrap(),
    ]
    .into_iter()
    .collect();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields.names(), vec!["title", "length"]);
    assert_eq!(fields.to_string(), "title, length");
}

#[test]
fn test_required_fields_equality_is_order_free() {
    let forward: RequiredFields<Movie> = [field!(Movie, title), field!(Movie, length)]
        .into_iter()
        .collect();
    let backward: RequiredFields<Movie> = [field!(Movie, length), field!(Movie, title)]
        .into_iter()
        .collect();
    let shorter: RequiredFields<Movie> = [field!(Movie, title)].into_iter().collect();

    assert_eq!(forward, backward);
    assert_ne!(forward, shorter);
    assert!(RequiredFields::<Movie>::default().is_empty());
}

#[test]
fn test_stock_rules() {
    assert!(<Always as Rule<u32>>::evaluate(&Always, &1));
    assert!(!<Never as Rule<u32>>::evaluate(&Never, &1));
    assert!(rule::all::<u32>(Vec::new()).evaluate(&1));
    assert!(!rule::any::<u32>(Vec::new()).evaluate(&1));
    assert!(rule::not::<u32>(Never).evaluate(&1));
}

#[test]
fn test_registry_defaults_and_registration() {
    let mut registry = RuleRegistry::<u32>::default();
    assert_eq!(registry.names(), vec!["always", "never"]);

    registry.register("big", |n: &u32| *n > 1000);
    assert!(registry.contains("big"));
    assert_eq!(registry.len(), 3);

    let big = registry.get("big").unwrap();
    assert!(big.evaluate(&5000));
    assert!(!big.evaluate(&5));
    assert!(registry.get("small").is_none());

    assert!(RuleRegistry::<u32>::empty().is_empty());
}

#[test]
fn test_trace_formatter() {
    let path = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    assert_eq!(TraceFormatter::format_path(&path), "A -> B -> C");
    assert_eq!(TraceFormatter::format_path(&[]), "(empty)");

    let fields: RequiredFields<Movie> = [field!(Movie, title), field!(Movie, length)]
        .into_iter()
        .collect();
    assert_eq!(
        TraceFormatter::format_result(&path, &fields),
        "A -> B -> C [requires: title, length]"
    );
    assert_eq!(
        TraceFormatter::format_result(&path, &RequiredFields::<Movie>::new()),
        "A -> B -> C"
    );
}

#[test]
fn test_options_defaults() {
    let options = EvaluationOptions::default();
    assert_eq!(options.max_steps, None);
    assert_eq!(options, EvaluationOptions::unbounded());
    assert_eq!(EvaluationOptions::with_max_steps(4).max_steps, Some(4));

    let parsed: EvaluationOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, options);
    let parsed: EvaluationOptions = serde_json::from_str(r#"{ "max_steps": null }"#).unwrap();
    assert_eq!(parsed, EvaluationOptions::unbounded());
}

#[test]
fn test_error_display() {
    let err = GraphError::InvalidGraph {
        dangling: vec!["Z".to_string()],
        duplicates: vec!["A".to_string(), "B".to_string()],
    };
    let message = err.to_string();
    assert!(message.contains("destination names are invalid: 'Z'"));
    assert!(message.contains("duplicated: 'A', 'B'"));

    let eval_err = EvaluationError::CycleDetected {
        steps: 7,
        shape: "loop".to_string(),
    };
    assert!(eval_err.to_string().contains('7'));
    assert!(eval_err.to_string().contains("loop"));

    let cap_err = EvaluationError::StepLimitExceeded {
        max_steps: 3,
        shape: "c".to_string(),
    };
    assert!(cap_err.to_string().contains("cap of 3 steps"));

    let def_err = DefinitionError::UnknownRules(vec!["a".to_string(), "b".to_string()]);
    assert!(def_err.to_string().contains("'a', 'b'"));

    let selector_err: DefinitionError = SelectorError::InvalidSelector("x.y".to_string()).into();
    assert!(selector_err.to_string().contains("x.y"));
}
