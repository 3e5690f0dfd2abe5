//! Brace/quote-balanced scanner.
//!
//! Finds the `}` matching an opening `{` while ignoring braces inside
//! single-, double- or backtick-quoted strings, so expressions like
//! `{label + "}"}` are not truncated at the quoted brace. An explicit
//! state machine rather than a regex: embedded expressions nest
//! arbitrarily deep and carry string literals with escapes.

use crate::chars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InSingleQuote,
    InDoubleQuote,
    InBacktick,
}

impl ScanState {
    fn closing_quote(self) -> Option<char> {
        match self {
            ScanState::Normal => None,
            ScanState::InSingleQuote => Some(chars::SQ),
            ScanState::InDoubleQuote => Some(chars::DQ),
            ScanState::InBacktick => Some(chars::BT),
        }
    }
}

/// Returns the byte offset of the `}` balancing the `{` at `open`, or
/// `None` if the input ends first. `open` must point at a `{`.
///
/// Inside a quoted string, braces do not count toward the depth and a
/// backslash-escaped quote does not close the string.
pub fn find_balanced_close(text: &str, open: usize) -> Option<usize> {
    debug_assert_eq!(text[open..].chars().next(), Some(chars::LBRACE));
    let mut depth: i32 = 0;
    let mut state = ScanState::Normal;
    let mut escaped = false;

    for (idx, ch) in text[open..].char_indices() {
        match state.closing_quote() {
            None => match ch {
                chars::LBRACE => depth += 1,
                chars::RBRACE => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(open + idx);
                    }
                }
                chars::SQ => state = ScanState::InSingleQuote,
                chars::DQ => state = ScanState::InDoubleQuote,
                chars::BT => state = ScanState::InBacktick,
                _ => {}
            },
            Some(quote) => {
                if escaped {
                    escaped = false;
                } else if ch == chars::BACKSLASH {
                    escaped = true;
                } else if ch == quote {
                    state = ScanState::Normal;
                }
            }
        }
    }
    None
}
