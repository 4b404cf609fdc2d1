//! Markup rendering for open and close events of regions.
//!
//! Color regions become generic containers with `fc<N>`/`bc<N>` classes.
//! Text styles become short bracket tags: `[b]`, `[i]`, `[u]`.

use serde::{Deserialize, Serialize};

use super::region::{Region, StyleKind};

/// Names used when writing markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupStyle {
    /// Element wrapping a color region.
    pub color_element: String,
    /// Class prefix for the foreground palette index.
    pub fg_class_prefix: String,
    /// Class prefix for the background palette index.
    pub bg_class_prefix: String,
}

impl Default for MarkupStyle {
    fn default() -> Self {
        Self {
            color_element: "span".to_string(),
            fg_class_prefix: "fc".to_string(),
            bg_class_prefix: "bc".to_string(),
        }
    }
}

impl MarkupStyle {
    /// Append the opening markup for `region`.
    pub fn write_open(&self, region: &Region, out: &mut String) {
        match bracket_name(region.kind) {
            Some(name) => {
                out.push('[');
                out.push(name);
                out.push(']');
            }
            None => {
                out.push('<');
                out.push_str(&self.color_element);
                out.push_str(" class=\"");
                out.push_str(&self.color_classes(region));
                out.push_str("\">");
            }
        }
    }

    /// Append the closing markup for `region`.
    pub fn write_close(&self, region: &Region, out: &mut String) {
        match bracket_name(region.kind) {
            Some(name) => {
                out.push_str("[/");
                out.push(name);
                out.push(']');
            }
            None => {
                out.push_str("</");
                out.push_str(&self.color_element);
                out.push('>');
            }
        }
    }

    /// Class list for a color region; transparent and unset components
    /// contribute nothing.
    pub fn color_classes(&self, region: &Region) -> String {
        let fg = region
            .color
            .fg
            .visible_index()
            .map(|n| format!("{}{}", self.fg_class_prefix, n));
        let bg = region
            .color
            .bg
            .visible_index()
            .map(|n| format!("{}{}", self.bg_class_prefix, n));

        fg.into_iter().chain(bg).collect::<Vec<_>>().join(" ")
    }
}

fn bracket_name(kind: StyleKind) -> Option<char> {
    match kind {
        StyleKind::Color => None,
        StyleKind::Bold => Some('b'),
        StyleKind::Italic => Some('i'),
        StyleKind::Underline => Some('u'),
    }
}
