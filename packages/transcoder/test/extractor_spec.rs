//! Expression extractor tests.

use svg_transcoder::extractor::{extract, restore};
use svg_transcoder::placeholder::encode;

#[test]
fn should_replace_attribute_expressions_with_placeholders() {
    let out = extract("<path d={pathData} />", true);
    assert_eq!(out, format!(r#"<path d="{}" />"#, encode("pathData")));
}

#[test]
fn should_keep_quoted_attribute_values_untouched() {
    let fragment = r#"<path d="M0 0h24" fill="red"/>"#;
    assert_eq!(extract(fragment, true), fragment);
}

#[test]
fn should_pass_numeric_literals_through_on_spelling_map_attributes() {
    assert_eq!(
        extract("<path strokeWidth={2} strokeOpacity={0.5} />", true),
        r#"<path strokeWidth="2" strokeOpacity="0.5" />"#
    );
}

#[test]
fn should_not_pass_numeric_literals_through_on_other_attributes() {
    let out = extract("<svg width={100}></svg>", true);
    assert_eq!(out, format!(r#"<svg width="{}"></svg>"#, encode("100")));
}

#[test]
fn should_not_pass_numerics_through_without_camel_case_policy() {
    let out = extract("<path strokeWidth={2} />", false);
    assert_eq!(out, format!(r#"<path strokeWidth="{}" />"#, encode("2")));
}

#[test]
fn should_extract_expressions_containing_quoted_braces() {
    let out = extract(r#"<text aria-label={"{" + x} />"#, true);
    assert_eq!(
        out,
        format!(r#"<text aria-label="{}" />"#, encode(r#""{" + x"#))
    );
}

#[test]
fn should_not_extract_from_inside_quoted_values() {
    let fragment = r#"<svg title="a={b}"><path d={x} /></svg>"#;
    assert_eq!(
        extract(fragment, true),
        format!(r#"<svg title="a={{b}}"><path d="{}" /></svg>"#, encode("x"))
    );
}

#[test]
fn should_not_let_text_apostrophes_mask_expressions() {
    let out = extract("<text>it's</text><path d={x} />", true);
    assert_eq!(
        out,
        format!("<text>it's</text><path d=\"{}\" />", encode("x"))
    );
}

#[test]
fn should_extract_text_interpolations() {
    let out = extract("<svg><text>{label}</text></svg>", true);
    assert_eq!(out, format!("<svg><text>{}</text></svg>", encode("label")));
}

#[test]
fn should_extract_interpolations_surrounded_by_text() {
    let out = extract("<text>count: {n} items</text>", true);
    assert_eq!(out, format!("<text>count: {} items</text>", encode("n")));
}

#[test]
fn should_not_extract_comment_blocks() {
    let fragment = "<svg>{/* keep me */}<path d=\"M0 0\"/></svg>";
    assert_eq!(extract(fragment, true), fragment);
}

#[test]
fn should_not_extract_css_braces_inside_style_blocks() {
    let fragment = "<svg><style>.a { fill: red; }</style></svg>";
    assert_eq!(extract(fragment, true), fragment);
}

#[test]
fn should_synthesize_ordered_spread_attributes() {
    let out = extract("<svg {...a} {...b}></svg>", true);
    assert_eq!(
        out,
        format!(
            r#"<svg data-spread-0="{}" data-spread-1="{}"></svg>"#,
            encode("a"),
            encode("b")
        )
    );
}

#[test]
fn should_leave_unbalanced_expressions_as_literal_text() {
    let fragment = "<svg width={oops></svg>";
    assert_eq!(extract(fragment, true), fragment);
    let fragment = "<svg {...oops></svg>";
    assert_eq!(extract(fragment, true), fragment);
}

#[test]
fn should_restore_attribute_expressions() {
    let prepared = format!(r#"<path d="{}" />"#, encode("pathData"));
    assert_eq!(restore(&prepared, true), "<path d={pathData} />");
}

#[test]
fn should_restore_text_interpolations() {
    let prepared = format!("<svg><text>{}</text></svg>", encode("label"));
    assert_eq!(restore(&prepared, true), "<svg><text>{label}</text></svg>");
}

#[test]
fn should_restore_spreads_in_order() {
    let prepared = format!(
        r#"<svg data-spread-0="{}" data-spread-1="{}"></svg>"#,
        encode("a"),
        encode("b")
    );
    assert_eq!(restore(&prepared, true), "<svg {...a} {...b}></svg>");
}

#[test]
fn should_rebrace_numeric_spelling_map_values() {
    assert_eq!(
        restore(r#"<path strokeWidth="2" />"#, true),
        "<path strokeWidth={2} />"
    );
    // only spelling-map attributes; plain markup numerics stay quoted
    assert_eq!(
        restore(r#"<svg width="100"></svg>"#, true),
        r#"<svg width="100"></svg>"#
    );
}

#[test]
fn should_not_rebrace_without_camel_case_policy() {
    let fragment = r#"<path stroke-width="2" />"#;
    assert_eq!(restore(fragment, false), fragment);
}

#[test]
fn should_leave_undecodable_frames_untouched() {
    // '=' in an illegal position inside the payload
    let fragment = r#"<svg><text>__EXPR__=a__END__</text></svg>"#;
    assert_eq!(restore(fragment, true), fragment);
}

#[test]
fn extraction_then_restoration_is_identity() {
    for fragment in [
        "<path d={pathData} />",
        "<svg><text>{label}</text></svg>",
        "<svg {...a} {...b}></svg>",
        "<svg onClick={() => toggle({open: !open})}></svg>",
        r#"<text aria-label={"}" + x} />"#,
    ] {
        assert_eq!(restore(&extract(fragment, true), true), fragment);
    }
}
