use super::LineMode;

#[test]
fn only_with_newline_appends() {
    assert!(LineMode::WithNewline.append_newline());
    assert!(!LineMode::WithoutNewline.append_newline());
}

#[test]
fn default_appends_newline() {
    assert_eq!(LineMode::default(), LineMode::WithNewline);
}
