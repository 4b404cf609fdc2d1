//! irclog - IRC transcript to markup converter
//!
//! Rewrites mIRC color and style control codes in chat logs into nested,
//! well-formed markup, one line at a time.
//!
//! - [`markup`] - The control-code interpreter (pure, no I/O)
//! - [`filter`] - Private/action line detection
//! - [`convert`] - File and stream conversion pipeline
//! - [`config`] - Configuration file
//! - [`cli`] - Command-line definitions

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod filter;
pub mod markup;

pub use config::Config;
pub use convert::{convert_file, convert_reader, ConvertOptions, ConvertStats};
pub use error::ConvertError;
pub use filter::{is_private_line, LineFilter};
pub use markup::{convert_line, LineConverter};
