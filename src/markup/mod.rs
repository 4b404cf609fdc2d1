//! mIRC control code to markup conversion.
//!
//! IRC clients style text with inline control bytes: `^C` selects a
//! foreground/background palette color, `^O` resets everything, and `^B`,
//! `^]`, `^_` toggle bold, italic and underline. This module rewrites those
//! bytes into well-formed markup: color containers with `fc<N>`/`bc<N>`
//! classes and `[b]`/`[i]`/`[u]` bracket tags.
//!
//! # Module Structure
//!
//! - [`color`] - Color values, color pairs and the transition classifier
//! - [`token`] - Control-code tokenizer and token coalescing
//! - [`region`] - Open region stack and effective color
//! - [`render`] - Markup names and open/close rendering
//! - [`converter`] - The per-line interpreter
//!
//! # Usage
//!
//! ```
//! use irclog::markup::convert_line;
//!
//! let html = convert_line("\x0304,02alert\x0f done");
//! assert_eq!(html, r#"<span class="fc4 bc2">alert</span> done"#);
//! ```

pub mod color;
pub mod converter;
pub mod region;
pub mod render;
pub mod token;

pub use color::{classify, ColorCode, ColorTransition, ColorValue};
pub use converter::{should_close, LineConverter};
pub use region::{Region, RegionStack, StyleKind};
pub use render::MarkupStyle;
pub use token::{coalesce, scan_line, tokenize, ControlToken, Directive};

/// Convert one raw line with default markup names.
pub fn convert_line(line: &str) -> String {
    LineConverter::new().convert_line(line)
}
