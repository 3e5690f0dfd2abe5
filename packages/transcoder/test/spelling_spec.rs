//! Attribute spelling map tests.

use svg_transcoder::spelling::{
    denormalize, is_camel_case_key, normalize, CAMEL_TO_KEBAB, KEBAB_TO_CAMEL,
};

#[test]
fn map_is_a_bijection() {
    for (camel, kebab) in CAMEL_TO_KEBAB.iter() {
        assert_eq!(KEBAB_TO_CAMEL.get(kebab), Some(camel));
    }
    assert_eq!(CAMEL_TO_KEBAB.len(), KEBAB_TO_CAMEL.len());
}

#[test]
fn no_forward_value_is_itself_a_forward_key() {
    for kebab in CAMEL_TO_KEBAB.values() {
        assert!(
            !CAMEL_TO_KEBAB.contains_key(kebab),
            "{kebab} is both a value and a key"
        );
    }
}

#[test]
fn svg_native_camel_case_names_are_absent() {
    for native in ["viewBox", "preserveAspectRatio", "gradientUnits", "gradientTransform"] {
        assert!(!is_camel_case_key(native));
    }
}

#[test]
fn should_rewrite_camel_case_attribute_keys() {
    assert_eq!(
        normalize(r#"<path strokeWidth="2" strokeLinecap="round"/>"#, true),
        r#"<path stroke-width="2" stroke-linecap="round"/>"#
    );
}

#[test]
fn should_rewrite_namespaced_spellings() {
    assert_eq!(
        normalize(r##"<use xlinkHref="#icon" xmlSpace="preserve"/>"##, true),
        r##"<use xlink:href="#icon" xml:space="preserve"/>"##
    );
}

#[test]
fn should_rewrite_class_name_to_class() {
    assert_eq!(
        normalize(r#"<svg className="icon"></svg>"#, true),
        r#"<svg class="icon"></svg>"#
    );
}

#[test]
fn should_not_rewrite_longer_keys_by_their_prefix() {
    assert_eq!(
        normalize(r#"<text fontSizeAdjust="0.5"/>"#, true),
        r#"<text font-size-adjust="0.5"/>"#
    );
}

#[test]
fn should_leave_data_prefixed_names_alone() {
    let fragment = r#"<svg data-strokeWidth="2" data-className="x"></svg>"#;
    assert_eq!(normalize(fragment, true), fragment);
}

#[test]
fn should_not_touch_attribute_values() {
    let fragment = r#"<svg aria-label="strokeWidth is set"></svg>"#;
    assert_eq!(normalize(fragment, true), fragment);
}

#[test]
fn should_be_a_no_op_without_camel_case_policy() {
    let fragment = r#"<path strokeWidth="2" className="icon"/>"#;
    assert_eq!(normalize(fragment, false), fragment);
    assert_eq!(denormalize(fragment, false), fragment);
}

#[test]
fn denormalize_inverts_normalize() {
    let fragment =
        r#"<svg className="icon"><path strokeWidth="2" fillRule="evenodd" clipPath="url(#c)"/></svg>"#;
    assert_eq!(denormalize(&normalize(fragment, true), true), fragment);
}
