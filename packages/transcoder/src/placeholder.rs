//! Placeholder codec.
//!
//! An extracted expression travels through the optimizer as
//! `__EXPR__<base64>__END__`: a fixed ASCII prefix, the standard-alphabet
//! base64 of the raw expression bytes, and a fixed ASCII suffix. The frame
//! contains no quotes, angle brackets or whitespace, so a quoted attribute
//! value or a text node holding one is inert to an XML optimizer. The
//! standard alphabet has no underscore, so a payload can never contain the
//! prefix or suffix and the recognizer cannot overrun a frame.
//!
//! The wire format is part of the public contract; other tooling may
//! recognize frames by [`PLACEHOLDER_RE`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TranscodeError;

pub const PLACEHOLDER_PREFIX: &str = "__EXPR__";
pub const PLACEHOLDER_SUFFIX: &str = "__END__";

/// Recognizes one placeholder frame; the capture group is the payload.
pub static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__EXPR__([A-Za-z0-9+/=]*)__END__").unwrap());

/// Encode raw expression text into a placeholder frame.
pub fn encode(expr: &str) -> String {
    format!(
        "{}{}{}",
        PLACEHOLDER_PREFIX,
        STANDARD.encode(expr),
        PLACEHOLDER_SUFFIX
    )
}

/// Decode the payload of a recognized frame back into expression text.
///
/// A failure means the text merely looked like a frame; callers leave it
/// untouched rather than propagating the error.
pub fn try_decode(payload: &str) -> Result<String, TranscodeError> {
    let bytes = STANDARD.decode(payload)?;
    Ok(String::from_utf8(bytes)?)
}

/// True if `value` contains a placeholder frame anywhere.
pub fn contains_placeholder(value: &str) -> bool {
    PLACEHOLDER_RE.is_match(value)
}
