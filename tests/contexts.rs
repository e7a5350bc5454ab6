// tests/contexts.rs

use kubectl_foreach::contexts::parse_context_names;

#[test]
fn test_one_context_per_line() {
    let raw = "minikube\nprod-eu\nprod-us\n";
    assert_eq!(parse_context_names(raw), vec!["minikube", "prod-eu", "prod-us"]);
}

#[test]
fn test_blank_lines_and_whitespace_are_dropped() {
    let raw = "\n  kind-dev  \r\n\n\tstaging\n   \n";
    assert_eq!(parse_context_names(raw), vec!["kind-dev", "staging"]);
}

#[test]
fn test_no_contexts() {
    assert!(parse_context_names("").is_empty());
    assert!(parse_context_names("\n\n").is_empty());
}

#[test]
fn test_order_is_preserved() {
    let raw = "zeta\nalpha\nmid\n";
    assert_eq!(parse_context_names(raw), vec!["zeta", "alpha", "mid"]);
}
