//! Open styling regions and the stack that orders them.

use super::color::{ColorCode, ColorValue};
use super::token::{BOLD, ITALIC, UNDERLINE};

/// Kind of an open region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Color,
    Bold,
    Italic,
    Underline,
}

impl StyleKind {
    /// Text style toggled by a marker byte.
    pub fn from_marker(byte: u8) -> Option<Self> {
        match byte {
            BOLD => Some(StyleKind::Bold),
            ITALIC => Some(StyleKind::Italic),
            UNDERLINE => Some(StyleKind::Underline),
            _ => None,
        }
    }
}

/// A styling span that has been opened and not yet closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub kind: StyleKind,
    /// Only meaningful for [`StyleKind::Color`].
    pub color: ColorCode,
}

impl Region {
    pub fn color(color: ColorCode) -> Self {
        Self {
            kind: StyleKind::Color,
            color,
        }
    }

    pub fn style(kind: StyleKind) -> Self {
        Self {
            kind,
            color: ColorCode::UNSET,
        }
    }

    pub fn is_color(&self) -> bool {
        self.kind == StyleKind::Color
    }
}

/// Ordered open regions, innermost last.
///
/// Supports removal at any position so a text style can be closed without
/// disturbing the relative order of everything else.
#[derive(Debug, Default)]
pub struct RegionStack {
    regions: Vec<Region>,
}

impl RegionStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, region: Region) {
        self.regions.push(region);
    }

    pub fn pop(&mut self) -> Option<Region> {
        self.regions.pop()
    }

    /// Remove the region at `index`, keeping the order of the others.
    pub fn remove(&mut self, index: usize) -> Option<Region> {
        if index < self.regions.len() {
            Some(self.regions.remove(index))
        } else {
            None
        }
    }

    pub fn top(&self) -> Option<&Region> {
        self.regions.last()
    }

    /// Index of the most recently opened region of `kind`.
    pub fn last_index_of(&self, kind: StyleKind) -> Option<usize> {
        self.regions.iter().rposition(|r| r.kind == kind)
    }

    /// The visible color, inherited component-wise from the innermost
    /// color region that sets each component.
    pub fn effective_color(&self) -> ColorCode {
        let mut current = ColorCode::UNSET;

        for region in self.regions.iter().rev().filter(|r| r.is_color()) {
            if current.fg.is_unset() && region.color.fg != ColorValue::Unset {
                current.fg = region.color.fg;
            }
            if current.bg.is_unset() && region.color.bg != ColorValue::Unset {
                current.bg = region.color.bg;
            }
            if !current.fg.is_unset() && !current.bg.is_unset() {
                break;
            }
        }

        current
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions from outermost to innermost.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }
}
