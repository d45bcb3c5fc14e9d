use crate::common::{check_rule, lines};

#[test]
fn test_duplicates_reported_on_later_line() {
    let content = "# Guide\n\n## Install\n\n## Usage\n\n## install\n";
    let result = check_rule("MD024", content, "");
    assert_eq!(lines(&result), vec![7]);
    assert_eq!(result[0].message, "Duplicate heading: 'install'.");
}

#[test]
fn test_siblings_only_different_parents() {
    let content = "# Server\n\n## Overview\n\n# Client\n\n## Overview\n";
    assert!(check_rule("MD024", content, "siblings_only: true").is_empty());
    assert_eq!(lines(&check_rule("MD024", content, "")), vec![7]);
}

#[test]
fn test_siblings_only_same_parent() {
    let content = "# Server\n\n## Overview\n\n## Config\n\n## Overview\n";
    assert_eq!(lines(&check_rule("MD024", content, "siblings_only: true")), vec![7]);
}

#[test]
fn test_allow_different_nesting() {
    let content = "# Changes\n\n## Changes\n\n# Other\n\n## Changes\n";
    assert_eq!(lines(&check_rule("MD024", content, "allow_different_nesting: true")), vec![7]);
}

#[test]
fn test_closing_sequence_and_case() {
    let content = "## API ##\n\n## api\n";
    assert_eq!(lines(&check_rule("MD024", content, "")), vec![3]);
}
