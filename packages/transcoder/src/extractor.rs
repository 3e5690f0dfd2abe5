//! Expression extraction.
//!
//! The forward pass replaces brace-delimited embedded expressions with
//! placeholder frames the optimizer cannot misread; the reverse pass
//! decodes frames back into the original expression text. Extraction is
//! fail-open: an expression with no balanced closing brace is left as
//! literal text and the scan resumes past the delimiter.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::chars;
use crate::detector;
use crate::placeholder;
use crate::scanner;
use crate::spelling;

/// Reserved attribute-name prefix carrying an extracted spread.
pub const SPREAD_ATTR_PREFIX: &str = "data-spread-";

static NUMERIC_EXPR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

static SPREAD_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"data-spread-\d+="__EXPR__([A-Za-z0-9+/=]*)__END__""#).unwrap()
});

static ATTR_PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"="__EXPR__([A-Za-z0-9+/=]*)__END__""#).unwrap());

// Inverse of the numeric-literal passthrough: a purely numeric value on a
// spelling-map attribute goes back into braces.
static NUMERIC_REBRACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"(^|[^-\w])({})="(-?\d+(?:\.\d+)?)""#,
        spelling::camel_key_alternation()
    ))
    .unwrap()
});

/// Forward pass: replace embedded expressions with placeholders, in the
/// order attribute values, text interpolations, spreads.
pub fn extract(fragment: &str, use_camel_case: bool) -> String {
    let pass = extract_attribute_values(fragment, use_camel_case);
    let pass = extract_text_interpolations(&pass);
    extract_spreads(&pass)
}

/// `name={expr}` -> `name="<frame>"`, except that a bare numeric literal
/// on a spelling-map attribute stays visible to the optimizer as a plain
/// quoted value.
///
/// An `={` inside a quoted attribute value is ordinary text, not a
/// delimiter, so the scan carries quote state while inside a tag.
fn extract_attribute_values(fragment: &str, use_camel_case: bool) -> String {
    let bytes = fragment.as_bytes();
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    let mut quote: Option<char> = None;
    let mut pos = 0;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
        } else if in_tag && (c == chars::DQ || c == chars::SQ) {
            quote = Some(c);
        } else if c == chars::LT {
            in_tag = true;
        } else if c == chars::GT {
            in_tag = false;
        } else if c == chars::EQ && i + 1 < bytes.len() && bytes[i + 1] as char == chars::LBRACE {
            let open = i + 1;
            if let Some(close) = scanner::find_balanced_close(fragment, open) {
                let expr = &fragment[open + 1..close];
                out.push_str(&fragment[pos..i]);
                let passthrough = use_camel_case
                    && NUMERIC_EXPR_RE.is_match(expr)
                    && attr_name_before(fragment, i)
                        .map(spelling::is_camel_case_key)
                        .unwrap_or(false);
                if passthrough {
                    out.push_str(&format!("=\"{}\"", expr));
                } else {
                    out.push_str(&format!("=\"{}\"", placeholder::encode(expr)));
                }
                pos = close + 1;
                i = close + 1;
                continue;
            }
            // unbalanced: the delimiter stays as literal text
        }
        i += 1;
    }
    out.push_str(&fragment[pos..]);
    out
}

/// The attribute name directly preceding the `=` at `eq`, if any.
fn attr_name_before(fragment: &str, eq: usize) -> Option<&str> {
    let bytes = fragment.as_bytes();
    let mut start = eq;
    while start > 0 {
        let c = bytes[start - 1] as char;
        if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '.' | '@') {
            start -= 1;
        } else {
            break;
        }
    }
    if start < eq {
        Some(&fragment[start..eq])
    } else {
        None
    }
}

/// `>...{expr}...<` -> the expression replaced in place by a frame.
///
/// Applies only to a `{` genuinely in text content (after a tag close,
/// before the next tag open), skipping `{/*` comment starts and anything
/// inside a `<style>` block, where braces are CSS.
fn extract_text_interpolations(fragment: &str) -> String {
    let style_spans = detector::style_spans(fragment);
    let mut out = String::with_capacity(fragment.len());
    let mut pos = 0;

    while let Some(found) = fragment[pos..].find(chars::LBRACE) {
        let open = pos + found;
        out.push_str(&fragment[pos..open]);

        let exempt = style_spans.iter().any(|r| r.contains(&open));
        let is_comment = fragment[open + 1..].starts_with("/*");
        if in_text_content(fragment, open) && !is_comment && !exempt {
            if let Some(close) = scanner::find_balanced_close(fragment, open) {
                out.push_str(&placeholder::encode(&fragment[open + 1..close]));
                pos = close + 1;
                continue;
            }
        }
        out.push(chars::LBRACE);
        pos = open + 1;
    }
    out.push_str(&fragment[pos..]);
    out
}

/// True if the offset sits between a `>` and the next `<`.
fn in_text_content(fragment: &str, offset: usize) -> bool {
    let before = &fragment[..offset];
    match (before.rfind(chars::LT), before.rfind(chars::GT)) {
        (Some(lt), Some(gt)) => gt > lt,
        (None, Some(_)) => true,
        _ => false,
    }
}

/// `{...expr}` -> `data-spread-<n>="<frame>"` with a zero-based,
/// left-to-right counter, so multiple spreads stay ordered.
fn extract_spreads(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut pos = 0;
    let mut counter = 0usize;

    while let Some(found) = fragment[pos..].find("{...") {
        let open = pos + found;
        match scanner::find_balanced_close(fragment, open) {
            Some(close) => {
                let expr = &fragment[open + 4..close];
                out.push_str(&fragment[pos..open]);
                out.push_str(&format!(
                    "{}{}=\"{}\"",
                    SPREAD_ATTR_PREFIX,
                    counter,
                    placeholder::encode(expr)
                ));
                counter += 1;
                pos = close + 1;
            }
            None => {
                out.push_str(&fragment[pos..=open]);
                pos = open + 1;
            }
        }
    }
    out.push_str(&fragment[pos..]);
    out
}

/// Reverse pass: decode placeholder frames back into expression text.
///
/// Spread carriers first (their whole attribute collapses back into
/// `{...expr}`), then attribute values, then bare frames in text. A frame
/// whose payload fails to decode is left untouched; such text can occur in
/// the wild without being ours.
pub fn restore(fragment: &str, use_camel_case: bool) -> String {
    let mut out = SPREAD_ATTR_RE
        .replace_all(fragment, |caps: &Captures| {
            match placeholder::try_decode(&caps[1]) {
                Ok(expr) => format!("{{...{}}}", expr),
                Err(_) => caps[0].to_string(),
            }
        })
        .into_owned();

    out = ATTR_PLACEHOLDER_RE
        .replace_all(&out, |caps: &Captures| {
            match placeholder::try_decode(&caps[1]) {
                Ok(expr) => format!("={{{}}}", expr),
                Err(_) => caps[0].to_string(),
            }
        })
        .into_owned();

    out = placeholder::PLACEHOLDER_RE
        .replace_all(&out, |caps: &Captures| {
            match placeholder::try_decode(&caps[1]) {
                Ok(expr) => format!("{{{}}}", expr),
                Err(_) => caps[0].to_string(),
            }
        })
        .into_owned();

    if use_camel_case {
        out = NUMERIC_REBRACE_RE
            .replace_all(&out, |caps: &Captures| {
                format!("{}{}={{{}}}", &caps[1], &caps[2], &caps[3])
            })
            .into_owned();
    }
    out
}
