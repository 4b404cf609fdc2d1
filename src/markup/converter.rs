//! Per-line interpreter that turns control tokens into nested markup.
//!
//! **Algorithm** (per line):
//! 1. Tokenize and coalesce the line
//! 2. For every color token, classify it against the effective color and
//!    close whatever open color regions it supersedes, deciding each by
//!    looking ahead at the remaining color tokens of the line
//! 3. Open a new color region for the part of the request still missing
//! 4. Reset tokens close everything
//! 5. Color and reset token text is scanned for bold/italic/underline
//!    toggles; plain text before the first directive is copied as is
//! 6. At line end all remaining regions are closed, innermost first
//!
//! All state lives in [`LineConverter`] and is cleared at the start of
//! every line, so one converter can be reused for a whole file.

use super::color::{classify, ColorCode, ColorTransition, ColorValue};
use super::region::{Region, RegionStack, StyleKind};
use super::render::MarkupStyle;
use super::token::{self, ControlToken, Directive};

/// Converts raw IRC lines into markup, one line at a time.
#[derive(Debug, Default)]
pub struct LineConverter {
    markup: MarkupStyle,
    stack: RegionStack,
    toggles: StyleToggles,
    out: String,
}

impl LineConverter {
    /// Create a converter with the default markup names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom markup names.
    pub fn with_markup(markup: MarkupStyle) -> Self {
        Self {
            markup,
            ..Self::default()
        }
    }

    /// Convert one raw line. Never fails; stray control bytes degrade to
    /// best-effort markup.
    pub fn convert_line(&mut self, line: &str) -> String {
        self.reset();

        let tokens = token::scan_line(line);
        for index in 0..tokens.len() {
            self.apply_token(&tokens, index);
        }

        self.close_all();
        std::mem::take(&mut self.out)
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.toggles = StyleToggles::default();
        self.out.clear();
    }

    fn apply_token(&mut self, tokens: &[ControlToken<'_>], index: usize) {
        let token = tokens[index];

        match token.directive {
            Directive::Color(color) => self.apply_color(color, token.text, &tokens[index..]),
            Directive::Reset => self.close_all(),
            Directive::Plain => {
                self.out.push_str(token.text);
                return;
            }
        }

        self.write_styled_text(token.text);
    }

    /// `remaining` starts with the token being applied.
    fn apply_color(&mut self, color: ColorCode, text: &str, remaining: &[ControlToken<'_>]) {
        let mut state = classify(color, self.stack.effective_color());

        match state {
            ColorTransition::Cancel => {
                self.close_all();
                state = classify(color, self.stack.effective_color());
            }
            ColorTransition::Fg | ColorTransition::Bg | ColorTransition::Both => {
                self.close_superseded_colors(remaining);
                state = classify(color, self.stack.effective_color());
            }
            ColorTransition::New | ColorTransition::Same => {}
        }

        let whitespace_only = text.trim().is_empty();
        let requested = match state {
            ColorTransition::New | ColorTransition::Both => {
                let fg = if whitespace_only {
                    ColorValue::Unset
                } else {
                    color.fg
                };
                Some(ColorCode::new(fg, color.bg))
            }
            ColorTransition::Fg if !whitespace_only => Some(ColorCode::new(color.fg, ColorValue::Unset)),
            ColorTransition::Bg => Some(ColorCode::new(ColorValue::Unset, color.bg)),
            _ => None,
        };

        if let Some(code) = requested.filter(|c| c.is_visible()) {
            self.open(Region::color(code));
        }
    }

    /// Close open color regions from the innermost outward until one must
    /// stay open or a text style region is reached.
    fn close_superseded_colors(&mut self, remaining: &[ControlToken<'_>]) {
        while let Some(region) = self.stack.top().copied() {
            if !region.is_color() || !should_close(region.color, remaining) {
                break;
            }
            self.close_at(self.stack.len() - 1);
        }
    }

    /// Pass text through, toggling text style regions at marker bytes.
    fn write_styled_text(&mut self, text: &str) {
        let mut run_start = 0;

        for (i, byte) in text.bytes().enumerate() {
            if let Some(kind) = StyleKind::from_marker(byte) {
                self.out.push_str(&text[run_start..i]);
                self.toggle(kind);
                run_start = i + 1;
            }
        }

        self.out.push_str(&text[run_start..]);
    }

    fn toggle(&mut self, kind: StyleKind) {
        if self.toggles.is_open(kind) {
            if let Some(index) = self.stack.last_index_of(kind) {
                self.close_at(index);
            }
        } else {
            self.open(Region::style(kind));
        }
        self.toggles.flip(kind);
    }

    fn open(&mut self, region: Region) {
        self.markup.write_open(&region, &mut self.out);
        self.stack.push(region);
    }

    fn close_at(&mut self, index: usize) {
        if let Some(region) = self.stack.remove(index) {
            self.markup.write_close(&region, &mut self.out);
        }
    }

    fn close_all(&mut self) {
        while let Some(region) = self.stack.pop() {
            self.markup.write_close(&region, &mut self.out);
        }
    }
}

/// Decide whether an open color region must close before later tokens.
///
/// Scans the remaining color tokens in order, classifying each one against
/// the region. A cancel, or a later token turning a component transparent
/// that the region does not, closes the region. A later token that only
/// changes one component, or nothing, keeps it. If nothing settles the
/// question the region closes.
pub fn should_close(region: ColorCode, remaining: &[ControlToken<'_>]) -> bool {
    for later in remaining.iter().filter_map(ControlToken::color_code) {
        let state = classify(later, region);

        if state == ColorTransition::Cancel
            || (!region.fg.is_transparent() && later.fg.is_transparent())
            || (!region.bg.is_transparent() && later.bg.is_transparent())
        {
            return true;
        }

        if matches!(
            state,
            ColorTransition::Fg | ColorTransition::Bg | ColorTransition::Same
        ) {
            return false;
        }
    }

    true
}

/// Per-line open flags for the inline style toggles.
#[derive(Debug, Default, Clone, Copy)]
struct StyleToggles {
    bold: bool,
    italic: bool,
    underline: bool,
}

impl StyleToggles {
    fn slot(&mut self, kind: StyleKind) -> Option<&mut bool> {
        match kind {
            StyleKind::Bold => Some(&mut self.bold),
            StyleKind::Italic => Some(&mut self.italic),
            StyleKind::Underline => Some(&mut self.underline),
            StyleKind::Color => None,
        }
    }

    fn is_open(&mut self, kind: StyleKind) -> bool {
        self.slot(kind).is_some_and(|open| *open)
    }

    fn flip(&mut self, kind: StyleKind) {
        if let Some(open) = self.slot(kind) {
            *open = !*open;
        }
    }
}
