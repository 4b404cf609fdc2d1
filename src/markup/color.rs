//! Color descriptors and the color transition classifier.
//!
//! mIRC color directives carry an optional foreground and an optional
//! background palette index. Index 99 is the conventional "transparent"
//! value and is kept distinct from a component that was never given.

use std::fmt;

/// Palette index that mIRC clients treat as "no color".
const TRANSPARENT_INDEX: u8 = 99;

/// One component of a color directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorValue {
    /// No color requested or inherited.
    #[default]
    Unset,
    /// Explicitly no visible color (index 99). Forces cancellation.
    Transparent,
    /// Palette entry 0-98.
    Palette(u8),
}

impl ColorValue {
    /// Build a value from a decoded palette index.
    pub fn from_index(index: u8) -> Self {
        if index == TRANSPARENT_INDEX {
            ColorValue::Transparent
        } else {
            ColorValue::Palette(index)
        }
    }

    /// Parse a 1-2 digit group. Anything unparseable yields `Unset`.
    pub fn parse(digits: &str) -> Self {
        match digits.parse::<u8>() {
            Ok(index) => Self::from_index(index),
            Err(_) => ColorValue::Unset,
        }
    }

    pub fn is_unset(self) -> bool {
        self == ColorValue::Unset
    }

    pub fn is_transparent(self) -> bool {
        self == ColorValue::Transparent
    }

    /// Palette index if this value produces visible styling.
    pub fn visible_index(self) -> Option<u8> {
        match self {
            ColorValue::Palette(index) => Some(index),
            ColorValue::Unset | ColorValue::Transparent => None,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Unset => write!(f, "-"),
            ColorValue::Transparent => write!(f, "{}", TRANSPARENT_INDEX),
            ColorValue::Palette(index) => write!(f, "{}", index),
        }
    }
}

/// A (foreground, background) pair. Compared component-wise only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorCode {
    pub fg: ColorValue,
    pub bg: ColorValue,
}

impl ColorCode {
    pub const UNSET: ColorCode = ColorCode {
        fg: ColorValue::Unset,
        bg: ColorValue::Unset,
    };

    pub fn new(fg: ColorValue, bg: ColorValue) -> Self {
        Self { fg, bg }
    }

    /// Convenience constructor from raw palette indices.
    pub fn indexed(fg: Option<u8>, bg: Option<u8>) -> Self {
        Self {
            fg: fg.map_or(ColorValue::Unset, ColorValue::from_index),
            bg: bg.map_or(ColorValue::Unset, ColorValue::from_index),
        }
    }

    pub fn is_unset(self) -> bool {
        self.fg.is_unset() && self.bg.is_unset()
    }

    /// True when at least one component would produce visible styling.
    pub fn is_visible(self) -> bool {
        self.fg.visible_index().is_some() || self.bg.visible_index().is_some()
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.fg, self.bg)
    }
}

/// How a candidate color relates to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTransition {
    /// Drop all color: both components unset, or both transparent.
    Cancel,
    /// Nothing active yet.
    New,
    /// Only the foreground differs.
    Fg,
    /// Only the background differs.
    Bg,
    /// Both differ, or a single change that cannot be expressed alone.
    Both,
    /// No visible difference.
    Same,
}

/// Classify a candidate color against the currently active color.
///
/// Argument order matters: a candidate that leaves its background unset
/// never counts as a background change, regardless of `active`.
pub fn classify(candidate: ColorCode, active: ColorCode) -> ColorTransition {
    let fg_unset = candidate.fg.is_unset();
    let bg_unset = candidate.bg.is_unset();

    if (fg_unset && bg_unset) || (candidate.fg.is_transparent() && candidate.bg.is_transparent()) {
        return ColorTransition::Cancel;
    }

    if active.is_unset() {
        return ColorTransition::New;
    }

    let fg_changed = candidate.fg != active.fg;
    let bg_changed = candidate.bg != active.bg && !bg_unset;

    if fg_changed {
        if bg_changed || (bg_unset && active.bg.is_unset()) {
            ColorTransition::Both
        } else {
            ColorTransition::Fg
        }
    } else if bg_changed {
        if fg_unset && active.fg.is_unset() {
            ColorTransition::Both
        } else {
            ColorTransition::Bg
        }
    } else {
        ColorTransition::Same
    }
}
