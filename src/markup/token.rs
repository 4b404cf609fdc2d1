//! Control-code tokenizer and line-local token coalescing.
//!
//! A line is split at every color (`\x03`) and reset (`\x0f`) byte. Each
//! token carries the directive that introduced it and the literal text that
//! follows, up to the next directive byte or the end of the line. Text style
//! bytes (bold, italic, underline) stay inside the text runs.

use super::color::{ColorCode, ColorValue};

/// Color directive byte (`^C`).
pub const COLOR: u8 = 0x03;
/// Full reset byte (`^O`).
pub const RESET: u8 = 0x0f;
/// Bold toggle byte (`^B`).
pub const BOLD: u8 = 0x02;
/// Italic toggle byte (`^]`).
pub const ITALIC: u8 = 0x1d;
/// Underline toggle byte (`^_`).
pub const UNDERLINE: u8 = 0x1f;

/// Maximum digits in one color component.
const MAX_COLOR_DIGITS: usize = 2;

/// What introduced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Literal text with no directive in front of it.
    Plain,
    Color(ColorCode),
    Reset,
}

/// One parsed unit of a line. Borrows its text from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlToken<'a> {
    pub directive: Directive,
    pub text: &'a str,
}

impl<'a> ControlToken<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            directive: Directive::Plain,
            text,
        }
    }

    pub fn color(color: ColorCode, text: &'a str) -> Self {
        Self {
            directive: Directive::Color(color),
            text,
        }
    }

    pub fn reset(text: &'a str) -> Self {
        Self {
            directive: Directive::Reset,
            text,
        }
    }

    /// The requested color, if this is a color directive.
    pub fn color_code(&self) -> Option<ColorCode> {
        match self.directive {
            Directive::Color(color) => Some(color),
            _ => None,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self.directive, Directive::Color(_))
    }
}

/// Split a raw line into control tokens.
///
/// A line without directive bytes yields a single plain token. A color
/// directive at the very start of the line that asks for foreground 1 with
/// no background is downgraded to plain text: logs in the wild prefix
/// ordinary lines that way.
pub fn tokenize(line: &str) -> Vec<ControlToken<'_>> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    if bytes.first().map_or(true, |&b| b != COLOR && b != RESET) {
        let end = text_end(bytes, 0);
        tokens.push(ControlToken::plain(&line[..end]));
        pos = end;
    }

    while pos < bytes.len() {
        let directive = if bytes[pos] == RESET {
            pos += 1;
            Directive::Reset
        } else {
            let (color, next) = scan_color(line, pos + 1);
            pos = next;
            Directive::Color(color)
        };

        let end = text_end(bytes, pos);
        let text = &line[pos..end];
        pos = end;

        let token = match directive {
            Directive::Color(color) if tokens.is_empty() && is_line_start_default(color) => {
                ControlToken::plain(text)
            }
            directive => ControlToken { directive, text },
        };
        tokens.push(token);
    }

    tokens
}

/// Tokenize and coalesce in one step.
pub fn scan_line(line: &str) -> Vec<ControlToken<'_>> {
    coalesce(tokenize(line))
}

/// Merge adjacent bare color directives and drop an empty trailing token.
///
/// When a color token arrives and the most recent color token already
/// accepted has no text and a foreground, the earlier token is discarded.
/// If the new token asks for a foreground but no background, it inherits
/// the discarded token's background.
pub fn coalesce<'a>(tokens: Vec<ControlToken<'a>>) -> Vec<ControlToken<'a>> {
    let mut accepted: Vec<ControlToken<'a>> = Vec::with_capacity(tokens.len());

    for mut token in tokens {
        if let Directive::Color(ref mut color) = token.directive {
            if let Some(prev_idx) = accepted.iter().rposition(ControlToken::is_color) {
                let prev = accepted[prev_idx];
                match prev.directive {
                    Directive::Color(prev_color)
                        if prev.text.is_empty() && !prev_color.fg.is_unset() =>
                    {
                        if color.bg.is_unset() && !color.fg.is_unset() {
                            color.bg = prev_color.bg;
                        }
                        accepted.remove(prev_idx);
                    }
                    _ => {}
                }
            }
        }
        accepted.push(token);
    }

    if accepted.last().is_some_and(|t| t.text.is_empty()) {
        accepted.pop();
    }

    accepted
}

fn is_line_start_default(color: ColorCode) -> bool {
    color.fg == ColorValue::Palette(1) && color.bg.is_unset()
}

/// Index of the next directive byte at or after `from`, or the line length.
fn text_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == COLOR || b == RESET)
        .map_or(bytes.len(), |offset| from + offset)
}

/// Scan `fg[,bg]` digit groups starting right after a color byte.
///
/// The background group is only recognized after a foreground group, and
/// a comma not followed by a digit is left in the text.
fn scan_color(line: &str, start: usize) -> (ColorCode, usize) {
    let bytes = line.as_bytes();
    let fg_end = digits_end(bytes, start);
    if fg_end == start {
        return (ColorCode::UNSET, start);
    }
    let fg = ColorValue::parse(&line[start..fg_end]);

    if bytes.get(fg_end) == Some(&b',') {
        let bg_start = fg_end + 1;
        let bg_end = digits_end(bytes, bg_start);
        if bg_end > bg_start {
            let bg = ColorValue::parse(&line[bg_start..bg_end]);
            return (ColorCode::new(fg, bg), bg_end);
        }
    }

    (ColorCode::new(fg, ColorValue::Unset), fg_end)
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && end - start < MAX_COLOR_DIGITS && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}
