//! Detection of private/action lines in IRC transcripts.
//!
//! Logs mark private messages and actions with a timestamp followed by an
//! asterisk-wrapped body, optionally prefixed by a color directive and an
//! `-> ` outgoing marker:
//!
//! ```text
//! [12:34:56] *nick* hello
//! \x0303[12:34:56] -> *nick* hello
//! ```
//!
//! The shape is checked on the raw line, before any conversion.

use crate::markup::token::COLOR;

const OUTGOING_MARKER: &str = "-> ";

/// Decides which raw lines take part in conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFilter {
    include_private: bool,
}

impl LineFilter {
    pub fn new(include_private: bool) -> Self {
        Self { include_private }
    }

    /// Whether `raw` should be converted and written.
    pub fn accepts(&self, raw: &str) -> bool {
        self.include_private || !is_private_line(raw)
    }
}

/// True when `raw` starts with a `[HH:MM:SS] ` timestamp (optionally after a
/// color directive) followed by an optional `-> ` and a `*...*` body.
pub fn is_private_line(raw: &str) -> bool {
    let rest = skip_color_prefix(raw);

    let Some(rest) = strip_timestamp(rest).and_then(|r| r.strip_prefix(' ')) else {
        return false;
    };
    let rest = rest.strip_prefix(OUTGOING_MARKER).unwrap_or(rest);

    let Some(body) = rest.strip_prefix('*') else {
        return false;
    };
    // At least one character, then a closing asterisk somewhere after it.
    let mut chars = body.chars();
    match chars.next() {
        Some(_) => chars.as_str().contains('*'),
        None => false,
    }
}

/// Skip `\x03` plus one or two digits when they precede a `[`.
fn skip_color_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.first() != Some(&COLOR) {
        return raw;
    }
    let digits = bytes[1..]
        .iter()
        .take(2)
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return raw;
    }
    &raw[1 + digits..]
}

/// Strip a `[HH:MM:SS]` prefix.
fn strip_timestamp(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    if bytes.len() < 10 || bytes[0] != b'[' || bytes[9] != b']' {
        return None;
    }
    let fields = [&bytes[1..3], &bytes[4..6], &bytes[7..9]];
    if bytes[3] != b':' || bytes[6] != b':' {
        return None;
    }
    if !fields.iter().all(|f| f.iter().all(u8::is_ascii_digit)) {
        return None;
    }
    Some(&s[10..])
}
