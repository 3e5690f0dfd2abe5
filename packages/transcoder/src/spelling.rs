//! Attribute spelling map.
//!
//! JSX spells SVG's hyphenated and namespaced presentation attributes in
//! camelCase. This module holds the fixed bijection between the two
//! spellings: `normalize` rewrites attribute keys to pure-markup names
//! before the optimizer runs, `denormalize` applies the exact inverse
//! afterwards. Attributes that are camelCase in SVG itself (`viewBox`,
//! `preserveAspectRatio`, `gradientUnits`, ...) are deliberately absent.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// camelCase -> kebab/namespaced spelling.
///
/// Every forward value contains a `-` or `:` and no forward key does, so
/// no entry's value can collide with another entry's key.
const SPELLING_TABLE: &[(&str, &str)] = &[
    ("alignmentBaseline", "alignment-baseline"),
    ("baselineShift", "baseline-shift"),
    ("clipPath", "clip-path"),
    ("clipRule", "clip-rule"),
    ("colorInterpolation", "color-interpolation"),
    ("colorInterpolationFilters", "color-interpolation-filters"),
    ("colorRendering", "color-rendering"),
    ("dominantBaseline", "dominant-baseline"),
    ("fillOpacity", "fill-opacity"),
    ("fillRule", "fill-rule"),
    ("floodColor", "flood-color"),
    ("floodOpacity", "flood-opacity"),
    ("fontFamily", "font-family"),
    ("fontSize", "font-size"),
    ("fontSizeAdjust", "font-size-adjust"),
    ("fontStretch", "font-stretch"),
    ("fontStyle", "font-style"),
    ("fontVariant", "font-variant"),
    ("fontWeight", "font-weight"),
    ("imageRendering", "image-rendering"),
    ("letterSpacing", "letter-spacing"),
    ("lightingColor", "lighting-color"),
    ("markerEnd", "marker-end"),
    ("markerMid", "marker-mid"),
    ("markerStart", "marker-start"),
    ("paintOrder", "paint-order"),
    ("pointerEvents", "pointer-events"),
    ("shapeRendering", "shape-rendering"),
    ("stopColor", "stop-color"),
    ("stopOpacity", "stop-opacity"),
    ("strokeDasharray", "stroke-dasharray"),
    ("strokeDashoffset", "stroke-dashoffset"),
    ("strokeLinecap", "stroke-linecap"),
    ("strokeLinejoin", "stroke-linejoin"),
    ("strokeMiterlimit", "stroke-miterlimit"),
    ("strokeOpacity", "stroke-opacity"),
    ("strokeWidth", "stroke-width"),
    ("textAnchor", "text-anchor"),
    ("textDecoration", "text-decoration"),
    ("textRendering", "text-rendering"),
    ("transformOrigin", "transform-origin"),
    ("unicodeBidi", "unicode-bidi"),
    ("vectorEffect", "vector-effect"),
    ("wordSpacing", "word-spacing"),
    ("writingMode", "writing-mode"),
    ("xlinkActuate", "xlink:actuate"),
    ("xlinkArcrole", "xlink:arcrole"),
    ("xlinkHref", "xlink:href"),
    ("xlinkRole", "xlink:role"),
    ("xlinkShow", "xlink:show"),
    ("xlinkTitle", "xlink:title"),
    ("xlinkType", "xlink:type"),
    ("xmlLang", "xml:lang"),
    ("xmlSpace", "xml:space"),
];

pub static CAMEL_TO_KEBAB: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| SPELLING_TABLE.iter().copied().collect());

pub static KEBAB_TO_CAMEL: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| SPELLING_TABLE.iter().map(|(c, k)| (*k, *c)).collect());

/// True if `name` is a camelCase spelling the map knows about.
pub fn is_camel_case_key(name: &str) -> bool {
    CAMEL_TO_KEBAB.contains_key(name)
}

/// Alternation over the camelCase keys, longest first so that e.g.
/// `fontSizeAdjust` is never shadowed by `fontSize`.
pub(crate) fn camel_key_alternation() -> String {
    let mut keys: Vec<&str> = SPELLING_TABLE.iter().map(|(c, _)| *c).collect();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
    keys.join("|")
}

fn kebab_key_alternation() -> String {
    let mut keys: Vec<String> = SPELLING_TABLE
        .iter()
        .map(|(_, k)| regex::escape(k))
        .collect();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
    keys.join("|")
}

// The leading `(^|[^-\w])` guard keeps `data-strokeWidth` and base64
// placeholder payloads out of reach: only a whole attribute key, preceded
// by a non-name character and followed by `=`, is rewritten.
static CAMEL_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(^|[^-\w])({})(\s*=)", camel_key_alternation())).unwrap()
});

static KEBAB_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(^|[^-\w])({})(\s*=)", kebab_key_alternation())).unwrap()
});

static CLASS_NAME_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|[^-\w])className(\s*=)").unwrap());

static CLASS_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|[^-\w])class(\s*=)").unwrap());

/// Rewrite embedding-language attribute spellings to markup-safe ones.
///
/// A no-op when `use_camel_case` is off (Vue/Svelte/Astro input): those
/// dialects already use the markup spellings, and directive syntax is
/// handled by attribute protection instead.
pub fn normalize(fragment: &str, use_camel_case: bool) -> String {
    if !use_camel_case {
        return fragment.to_string();
    }
    let pass = CLASS_NAME_KEY_RE.replace_all(fragment, "${1}class${2}");
    CAMEL_KEY_RE
        .replace_all(&pass, |caps: &Captures| {
            format!(
                "{}{}{}",
                &caps[1],
                CAMEL_TO_KEBAB[caps.get(2).unwrap().as_str()],
                &caps[3]
            )
        })
        .into_owned()
}

/// The exact inverse of [`normalize`].
pub fn denormalize(fragment: &str, use_camel_case: bool) -> String {
    if !use_camel_case {
        return fragment.to_string();
    }
    let pass = KEBAB_KEY_RE.replace_all(fragment, |caps: &Captures| {
        format!(
            "{}{}{}",
            &caps[1],
            KEBAB_TO_CAMEL[caps.get(2).unwrap().as_str()],
            &caps[3]
        )
    });
    CLASS_KEY_RE
        .replace_all(&pass, "${1}className${2}")
        .into_owned()
}
