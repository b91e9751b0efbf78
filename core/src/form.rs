//! The add-movie form and lenient year parsing.

use crate::types::NewMovie;

/// Raw text of the add-movie form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    pub genre: String,
    pub year: String,
}

impl MovieForm {
    pub fn new(title: impl Into<String>, genre: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            year: year.into(),
        }
    }

    /// No validation: an empty title or unparsable year goes to the server
    /// as-is.
    pub fn to_new_movie(&self) -> NewMovie {
        NewMovie {
            title: self.title.clone(),
            genre: self.genre.clone(),
            year: parse_year(&self.year),
        }
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.genre.clear();
        self.year.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.genre.is_empty() && self.year.is_empty()
    }
}

/// Parse the leading integer of `text`.
///
/// Leading whitespace is skipped, one optional sign is accepted and parsing
/// stops at the first non-digit, so `"1999 remaster"` is `1999` and
/// `"19.5"` is `19`. A `0x`/`0X` prefix switches to hexadecimal
/// (`"0x7E4"` is `2020`). Text with no leading digits yields `None`, and so
/// does a digit run too large for `i64`.
pub fn parse_year(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
