//! Attribute protection.
//!
//! Renames attributes the optimizer must not interpret — directive-shaped
//! names and anything whose value carries a placeholder frame — into a
//! reserved `data-protected--` name embedding the sanitized original.
//! Reserved characters in the original name are substituted with distinct
//! textual markers (`:` -> `__COLON__`, `@` -> `__AT__`, `.` -> `__DOT__`)
//! so the rename is unambiguously invertible. A valueless directive gets
//! the `__BOOLEAN__` sentinel so the optimizer does not drop it and the
//! reverse pass can tell bare from valued.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::detector;
use crate::placeholder;

pub const PROTECTED_PREFIX: &str = "data-protected--";
pub const BOOLEAN_SENTINEL: &str = "__BOOLEAN__";

/// Reserved-character substitution table. None of the markers can occur
/// in a legally-formed attribute name, so substitution is injective.
pub const NAME_MARKERS: &[(char, &str)] = &[(':', "__COLON__"), ('@', "__AT__"), ('.', "__DOT__")];

/// One attribute as the pipeline models it internally. The wire text
/// (`data-protected--...`) exists only at the fragment boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Plain {
        name: String,
        value: Option<String>,
    },
    Protected {
        original_name: String,
        value: Option<String>,
    },
}

impl Attribute {
    /// Classify a source attribute, deciding whether the optimizer can be
    /// trusted with it.
    ///
    /// Protection-eligible: a directive-shaped name, or a value carrying a
    /// placeholder frame. Reserved namespace names are never protected,
    /// and `data-` names are already optimizer-safe (this also keeps the
    /// spread carriers and an already-protected name stable).
    pub fn classify(name: &str, value: Option<&str>) -> Attribute {
        let owned_value = value.map(str::to_string);
        if detector::is_reserved_namespace(name) || name.starts_with("data-") {
            return Attribute::Plain {
                name: name.to_string(),
                value: owned_value,
            };
        }
        let by_name = detector::is_directive_name(name);
        let by_value = value.is_some_and(placeholder::contains_placeholder);
        if by_name || by_value {
            Attribute::Protected {
                original_name: name.to_string(),
                value: owned_value,
            }
        } else {
            Attribute::Plain {
                name: name.to_string(),
                value: owned_value,
            }
        }
    }
}

/// Substitute each reserved character with its marker.
pub fn sanitize_name(name: &str) -> String {
    let mut out = name.to_string();
    for (ch, marker) in NAME_MARKERS {
        out = out.replace(*ch, marker);
    }
    out
}

/// The exact inverse of [`sanitize_name`].
pub fn desanitize_name(name: &str) -> String {
    let mut out = name.to_string();
    for (ch, marker) in NAME_MARKERS {
        out = out.replace(marker, ch.encode_utf8(&mut [0u8; 4]));
    }
    out
}

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[A-Za-z][^<>]*>").unwrap());

// One attribute token inside a tag: leading whitespace (which also skips
// the element name), the name, and an optional quoted value. The value
// text is kept verbatim, spacing around `=` included. The trailing bare
// `=` alternative catches an unquoted value, which is never rewritten.
static ATTR_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\s)([A-Za-z_:@][\w:@.\-]*)(\s*=\s*(?:"[^"]*"|'[^']*')|\s*=)?"#).unwrap()
});

static PROTECTED_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"data-protected--([\w.:@\-]+)(\s*=\s*(?:"([^"]*)"|'([^']*)'))?"#).unwrap()
});

/// Forward pass: rename every protection-eligible attribute.
pub fn protect(fragment: &str) -> String {
    TAG_RE
        .replace_all(fragment, |caps: &Captures| protect_tag(&caps[0]))
        .into_owned()
}

fn protect_tag(tag: &str) -> String {
    ATTR_TOKEN_RE
        .replace_all(tag, |caps: &Captures| {
            let ws = &caps[1];
            let name = &caps[2];
            let value_text = caps.get(3).map(|m| m.as_str()).unwrap_or("");
            let value = quoted_body(value_text);

            // `name=` without a quoted value: an unquoted value follows,
            // and renaming would strand it. Fail open.
            if value.is_none() && !value_text.is_empty() {
                return caps[0].to_string();
            }

            match Attribute::classify(name, value) {
                Attribute::Plain { .. } => caps[0].to_string(),
                Attribute::Protected { original_name, value: None } => format!(
                    "{}{}{}=\"{}\"",
                    ws,
                    PROTECTED_PREFIX,
                    sanitize_name(&original_name),
                    BOOLEAN_SENTINEL
                ),
                Attribute::Protected { original_name, value: Some(_) } => format!(
                    "{}{}{}{}",
                    ws,
                    PROTECTED_PREFIX,
                    sanitize_name(&original_name),
                    value_text
                ),
            }
        })
        .into_owned()
}

/// The body of a `= "..."` / `= '...'` attribute-value text, if present.
fn quoted_body(value_text: &str) -> Option<&str> {
    let trimmed = value_text.trim_start().strip_prefix('=')?.trim_start();
    trimmed
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
}

/// Reverse pass: restore every protected attribute to its original name,
/// dropping the boolean sentinel value where one was synthesized.
pub fn unprotect(fragment: &str) -> String {
    PROTECTED_ATTR_RE
        .replace_all(fragment, |caps: &Captures| {
            let original = desanitize_name(&caps[1]);
            let value = caps.get(3).or_else(|| caps.get(4)).map(|m| m.as_str());
            match value {
                Some(v) if v == BOOLEAN_SENTINEL => original,
                Some(_) => format!("{}{}", original, &caps[2]),
                None => original,
            }
        })
        .into_owned()
}
