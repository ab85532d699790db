// Property-based tests for the rewriter
// These tests generate Jenkinsfile-like content and verify:
// 1. Line count and order never change
// 2. Rewriting is idempotent
// 3. Content without the opening pattern passes through untouched

use proptest::prelude::*;
use shquote_lib::{RewriteOptions, rewrite};

/// Strategy for generating individual Jenkinsfile-like lines
fn jenkinsfile_line_strategy() -> impl Strategy<Value = String> {
    let indent = 0..12usize;
    prop_oneof![
        indent.clone().prop_map(|n| format!("{}sh '''", " ".repeat(n))),
        indent.clone().prop_map(|n| format!("{}'''", " ".repeat(n))),
        indent.clone().prop_map(|n| format!("{}sh \"\"\"", " ".repeat(n))),
        indent.clone().prop_map(|n| format!("{}\"\"\"", " ".repeat(n))),
        (indent, "[a-z ]{0,20}").prop_map(|(n, cmd)| format!("{}sh '{cmd}'", " ".repeat(n))),
        "[a-zA-Z0-9 {}()'\"=.-]{0,40}",
    ]
}

fn jenkinsfile_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(jenkinsfile_line_strategy(), 0..30).prop_map(|lines| lines.join("\n"))
}

/// Lines that never contain an `sh '''` opening
fn plain_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0..12usize).prop_map(|n| format!("{}'''", " ".repeat(n))),
        (0..12usize).prop_map(|n| format!("{}sh \"\"\"", " ".repeat(n))),
        "[a-z {}()=.-]{0,40}",
    ]
}

proptest! {
    #[test]
    fn line_count_is_preserved(content in jenkinsfile_strategy()) {
        let result = rewrite(&content, &RewriteOptions::default());
        prop_assert_eq!(result.content.split('\n').count(), content.split('\n').count());
    }

    #[test]
    fn rewrite_is_idempotent(content in jenkinsfile_strategy()) {
        let options = RewriteOptions::default();
        let once = rewrite(&content, &options);
        let twice = rewrite(&once.content, &options);
        prop_assert_eq!(&twice.content, &once.content);
        prop_assert!(!twice.changed());
    }

    #[test]
    fn no_opening_pattern_is_identity(lines in prop::collection::vec(plain_line_strategy(), 0..30)) {
        let content = lines.join("\n");
        let result = rewrite(&content, &RewriteOptions::default());
        prop_assert_eq!(&result.content, &content);
        prop_assert!(result.conversions.is_empty());
    }

    #[test]
    fn unchanged_lines_are_byte_identical(content in jenkinsfile_strategy()) {
        let result = rewrite(&content, &RewriteOptions::default());
        for (before, after) in content.split('\n').zip(result.content.split('\n')) {
            if !before.contains("'''") {
                prop_assert_eq!(before, after);
            }
        }
    }
}
