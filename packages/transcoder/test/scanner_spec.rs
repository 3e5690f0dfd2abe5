//! Balanced scanner tests.

use svg_transcoder::scanner::find_balanced_close;

#[test]
fn should_find_the_matching_close_brace() {
    assert_eq!(find_balanced_close("{x}", 0), Some(2));
    assert_eq!(find_balanced_close("a={x} b", 2), Some(4));
}

#[test]
fn should_count_nested_braces() {
    let text = "{outer({inner: {deep: 1}})}";
    assert_eq!(find_balanced_close(text, 0), Some(text.len() - 1));
}

#[test]
fn should_ignore_braces_inside_double_quoted_strings() {
    let text = r#"{"literal }" + x}"#;
    assert_eq!(find_balanced_close(text, 0), Some(text.len() - 1));
}

#[test]
fn should_ignore_braces_inside_single_quoted_strings() {
    let text = "{'}' + x}";
    assert_eq!(find_balanced_close(text, 0), Some(text.len() - 1));
}

#[test]
fn should_ignore_braces_inside_template_literals() {
    let text = "{`{}{}{` + x}";
    assert_eq!(find_balanced_close(text, 0), Some(text.len() - 1));
}

#[test]
fn should_not_close_a_string_at_an_escaped_quote() {
    let text = r#"{"say \"}\"" }"#;
    assert_eq!(find_balanced_close(text, 0), Some(text.len() - 1));
}

#[test]
fn should_return_none_when_no_close_exists() {
    assert_eq!(find_balanced_close("{x + 1", 0), None);
    assert_eq!(find_balanced_close("{", 0), None);
}

#[test]
fn should_return_none_when_the_close_is_swallowed_by_a_string() {
    assert_eq!(find_balanced_close("{'no end}", 0), None);
}

#[test]
fn should_scan_from_a_mid_string_offset() {
    let text = "<path d={m} fill={c}/>";
    let first = text.find('{').unwrap();
    assert_eq!(find_balanced_close(text, first), Some(first + 2));
    let second = text.rfind('{').unwrap();
    assert_eq!(find_balanced_close(text, second), Some(second + 2));
}
