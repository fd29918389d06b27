use crate::DefaultTargets;
use crate::StaticTargets;
use crate::TargetSelector;
use crate::TargetSet;
use crate::TargetSpec;

#[test]
fn test_single_identifier_normalizes_to_one_element_set() {
    let set = TargetSet::normalize(TargetSpec::One("products".to_string()));

    assert_eq!(set.len(), 1);
    assert!(set.contains("products"));
    assert!(!set.contains("product"));
}

#[test]
fn test_many_identifiers_keep_declaration_order() {
    let set = TargetSet::normalize(TargetSpec::Many(vec![
        "beta".to_string(),
        "alpha".to_string(),
    ]));

    let collected: Vec<&str> = set.iter().collect();
    assert_eq!(collected, vec!["beta", "alpha"]);
}

#[test]
fn test_duplicates_are_preserved() {
    let set = TargetSet::normalize(TargetSpec::Many(vec![
        "products".to_string(),
        "products".to_string(),
    ]));

    assert_eq!(set.len(), 2);
}

#[test]
fn test_default_targets_select_the_default_query() {
    let set = TargetSet::normalize(DefaultTargets.resolve_targets());

    assert_eq!(set.len(), 1);
    assert!(set.contains(""));
}

#[test]
fn test_static_targets_return_the_configured_list() {
    let selector = StaticTargets::new(vec!["orders".to_string(), "users".to_string()]);

    let set = TargetSet::normalize(selector.resolve_targets());
    assert!(set.contains("orders"));
    assert!(set.contains("users"));
    assert!(!set.contains(""));
}

#[test]
fn test_target_spec_conversions() {
    assert_eq!(
        TargetSpec::from("products"),
        TargetSpec::One("products".to_string())
    );
    assert_eq!(
        TargetSpec::from(vec!["a".to_string()]),
        TargetSpec::Many(vec!["a".to_string()])
    );
}
