//! Character constants used by the scanner and extractor.
#![allow(non_upper_case_globals)]

pub const SQ: char = '\'';
pub const DQ: char = '"';
pub const BT: char = '`';
pub const BACKSLASH: char = '\\';
pub const EQ: char = '=';
pub const LT: char = '<';
pub const GT: char = '>';
pub const LBRACE: char = '{';
pub const RBRACE: char = '}';
