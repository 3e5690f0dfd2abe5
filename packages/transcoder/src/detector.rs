//! Dialect detection.
//!
//! Decides whether a fragment carries foreign (JSX/Vue/Svelte/Astro)
//! syntax that the optimizer cannot be trusted with. Pure string
//! classification; the verdict computed here is threaded through to the
//! reverse pipeline by the caller and is the single source of truth.

use bitflags::bitflags;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::spelling;

bitflags! {
    /// Individual reasons a fragment was classified foreign.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DialectSignals: u32 {
        /// An attribute value delimited by `={...}`.
        const EXPRESSION_VALUE = 1 << 0;
        /// A `{...expr}` spread in attribute position.
        const SPREAD = 1 << 1;
        /// The literal attribute name `className`.
        const CLASS_NAME = 1 << 2;
        /// An attribute name from the camelCase spelling map.
        const CAMEL_CASE_ATTR = 1 << 3;
        /// A directive-shaped attribute name (`v-`, `on:`, `client:`, ...).
        const DIRECTIVE = 1 << 4;
        /// A `{/* ... */}` block or a `//` line comment.
        const COMMENT = 1 << 5;
        /// Braces in element text content outside a style block.
        const TEXT_BRACES = 1 << 6;
    }
}

/// Directive name prefixes across the supported dialects. A bare leading
/// `:` or `@` (Vue shorthand) is checked separately.
pub const DIRECTIVE_PREFIXES: &[&str] = &[
    "v-",
    "client:",
    "on:",
    "bind:",
    "class:",
    "use:",
    "let:",
    "animate:",
    "transition:",
    "define:",
];

/// Markup namespace prefixes that must never be classified as directives.
pub const RESERVED_NAMESPACE_PREFIXES: &[&str] = &["xmlns:", "xlink:", "xml:", "sketch:"];

static EXPRESSION_VALUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"=\{").unwrap());

static SPREAD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*\.\.\.").unwrap());

static CLASS_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|[^-\w])className\s*=").unwrap());

static COMMENT_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{/\*[\s\S]*?\*/\}").unwrap());

// Anchored to the start of a line so `xmlns="http://..."` never counts.
static LINE_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*//").unwrap());

static STYLE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());

// A `{` in text content: after a tag close, before the next tag open.
static TEXT_BRACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r">[^<>]*\{").unwrap());

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[A-Za-z][^<>]*>").unwrap());

static QUOTED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]*"|'[^']*'"#).unwrap());

static NAME_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s([A-Za-z_:@][\w:@.\-]*)").unwrap());

/// True if `name` lives in a reserved markup namespace.
pub fn is_reserved_namespace(name: &str) -> bool {
    RESERVED_NAMESPACE_PREFIXES
        .iter()
        .any(|p| name.starts_with(p))
}

/// True if `name` has a dialect-directive shape. Reserved namespace names
/// are never directives, even though they contain `:`.
pub fn is_directive_name(name: &str) -> bool {
    if is_reserved_namespace(name) {
        return false;
    }
    if name.starts_with(':') || name.starts_with('@') {
        return true;
    }
    DIRECTIVE_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Attribute-name tokens of every tag, with quoted values blanked so words
/// inside values are not mistaken for names. Heuristic on purpose: the
/// detector classifies, it does not parse.
fn attribute_names(fragment: &str) -> Vec<String> {
    let mut names = Vec::new();
    for tag in TAG_RE.find_iter(fragment) {
        let inner = &tag.as_str()[1..tag.as_str().len() - 1];
        let blanked = QUOTED_RE.replace_all(inner, "\"\"");
        for caps in NAME_TOKEN_RE.captures_iter(&blanked) {
            names.push(caps[1].to_string());
        }
    }
    names
}

/// Byte ranges of `<style>...</style>` blocks; braces inside them are
/// legitimate CSS, not interpolation.
pub(crate) fn style_spans(fragment: &str) -> Vec<std::ops::Range<usize>> {
    STYLE_BLOCK_RE
        .find_iter(fragment)
        .map(|m| m.range())
        .collect()
}

/// Compute every signal present in the fragment.
pub fn analyze(fragment: &str) -> DialectSignals {
    let mut signals = DialectSignals::empty();

    if EXPRESSION_VALUE_RE.is_match(fragment) {
        signals |= DialectSignals::EXPRESSION_VALUE;
    }
    if SPREAD_RE.is_match(fragment) {
        signals |= DialectSignals::SPREAD;
    }
    if CLASS_NAME_RE.is_match(fragment) {
        signals |= DialectSignals::CLASS_NAME;
    }
    for name in attribute_names(fragment) {
        if spelling::is_camel_case_key(&name) {
            signals |= DialectSignals::CAMEL_CASE_ATTR;
        }
        if is_directive_name(&name) {
            signals |= DialectSignals::DIRECTIVE;
        }
    }
    if COMMENT_BLOCK_RE.is_match(fragment) || LINE_COMMENT_RE.is_match(fragment) {
        signals |= DialectSignals::COMMENT;
    }
    let without_styles = STYLE_BLOCK_RE.replace_all(fragment, "");
    if TEXT_BRACES_RE.is_match(&without_styles) {
        signals |= DialectSignals::TEXT_BRACES;
    }

    signals
}

/// The boolean verdict: does this fragment need protection at all?
pub fn detect(fragment: &str) -> bool {
    !analyze(fragment).is_empty()
}
