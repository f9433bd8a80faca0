//! Unit tests for package list reading

use super::*;

use proptest::prelude::*;
use std::io::Write;

#[test]
fn test_parse_skips_comments_and_blanks() {
    let names = parse_package_list("requests\n# a comment\n\nflask\n");
    assert_eq!(names, vec!["requests".to_string(), "flask".to_string()]);
}

#[test]
fn test_parse_trims_names() {
    let names = parse_package_list("  numpy  \r\n\t# indented comment\n   \npandas\t");
    assert_eq!(names, vec!["numpy".to_string(), "pandas".to_string()]);
}

#[test]
fn test_only_comments_is_empty() {
    assert!(parse_package_list("# one\n   # two\n\n\n").is_empty());
    assert!(parse_package_list("").is_empty());
}

#[test]
fn test_read_package_names_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "requests\n# pinned elsewhere\nflask\n").unwrap();

    let names = read_package_names(file.path()).unwrap();
    assert_eq!(names, vec!["requests".to_string(), "flask".to_string()]);
}

#[test]
fn test_missing_file_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("packages.txt");

    match read_package_names(&missing) {
        Err(SipError::Usage { message }) => assert!(message.contains("packages.txt")),
        other => panic!("Expected Usage error, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn prop_filtered_lines_never_survive(lines in proptest::collection::vec("[ \t]{0,3}(#[a-z ]{0,8}|[a-z][a-z0-9_.-]{0,10})?[ \t]{0,3}", 0..20)) {
        let content = lines.join("\n");
        let names = parse_package_list(&content);

        let expected = lines.iter().filter(|l| is_package_line(l)).count();
        prop_assert_eq!(names.len(), expected);
        for name in &names {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.starts_with(COMMENT_MARKER));
            prop_assert_eq!(name.trim(), name.as_str());
        }
    }
}
