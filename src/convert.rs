//! Line-by-line conversion of whole transcripts.
//!
//! Reads raw lines in file order, drops private/action lines unless asked
//! to keep them, converts the rest and writes each followed by `\n`.
//!
//! # Parallel mode
//!
//! Each line is converted independently, so the converter can run on all
//! cores. Lines are collected first, converted with rayon (one
//! [`LineConverter`] per worker), then written in input order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rayon::prelude::*;

use crate::config::Config;
use crate::error::ConvertError;
use crate::filter::LineFilter;
use crate::markup::{LineConverter, MarkupStyle};

/// Path that stands for stdin or stdout.
pub const STDIO_PATH: &str = "-";

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Write `separator_line` before the first converted line.
    pub align: bool,
    /// Keep private/action lines.
    pub include_private: bool,
    /// Convert with a rayon thread pool.
    pub parallel: bool,
    pub separator_line: String,
    pub markup: MarkupStyle,
}

impl ConvertOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            align: config.convert.align,
            include_private: config.convert.include_private,
            parallel: config.convert.parallel,
            separator_line: config.separator_line(),
            markup: config.markup.clone(),
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Counters for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_skipped: usize,
    /// Includes the separator line and line terminators.
    pub bytes_written: u64,
}

/// Convert every line of `reader` into `writer`, then flush.
pub fn convert_reader<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    options: &ConvertOptions,
) -> Result<ConvertStats, ConvertError> {
    let filter = LineFilter::new(options.include_private);
    let mut stats = ConvertStats::default();

    if options.align {
        write_line(&mut writer, &options.separator_line, &mut stats)?;
    }

    if options.parallel {
        let mut accepted = Vec::new();
        while let Some(line) = read_line(&mut reader)? {
            if take_line(&filter, &line, &mut stats) {
                accepted.push(line);
            }
        }

        let converted: Vec<String> = accepted
            .par_iter()
            .map_init(
                || LineConverter::with_markup(options.markup.clone()),
                |converter, line| converter.convert_line(line),
            )
            .collect();

        for line in &converted {
            write_line(&mut writer, line, &mut stats)?;
            stats.lines_written += 1;
        }
    } else {
        let mut converter = LineConverter::with_markup(options.markup.clone());
        while let Some(line) = read_line(&mut reader)? {
            if take_line(&filter, &line, &mut stats) {
                write_line(&mut writer, &converter.convert_line(&line), &mut stats)?;
                stats.lines_written += 1;
            }
        }
    }

    writer.flush().map_err(ConvertError::Write)?;
    Ok(stats)
}

/// Convert `input` into `output`. Either path may be `-` for stdio.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConvertStats, ConvertError> {
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        align = options.align,
        include_private = options.include_private,
        parallel = options.parallel,
        "Converting log"
    );

    let reader = open_input(input)?;
    let writer = open_output(output)?;
    let stats = convert_reader(reader, writer, options)?;

    tracing::info!(
        lines_read = stats.lines_read,
        lines_written = stats.lines_written,
        lines_skipped = stats.lines_skipped,
        size = %humansize::format_size(stats.bytes_written, humansize::DECIMAL),
        "Conversion finished"
    );

    Ok(stats)
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ConvertError> {
    if is_stdio(path) {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    if !path.exists() {
        return Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| ConvertError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &Path) -> Result<Box<dyn Write>, ConvertError> {
    if is_stdio(path) {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(path).map_err(|source| ConvertError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Read one line without its `\n` or `\r\n` terminator. Invalid UTF-8 is
/// replaced rather than rejected.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, ConvertError> {
    let mut buf = Vec::new();
    let read = reader
        .read_until(b'\n', &mut buf)
        .map_err(ConvertError::Read)?;
    if read == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Count the line and report whether the filter keeps it.
fn take_line(filter: &LineFilter, line: &str, stats: &mut ConvertStats) -> bool {
    stats.lines_read += 1;
    if filter.accepts(line) {
        true
    } else {
        tracing::trace!(line = stats.lines_read, "Skipping private line");
        stats.lines_skipped += 1;
        false
    }
}

fn write_line<W: Write>(
    writer: &mut W,
    line: &str,
    stats: &mut ConvertStats,
) -> Result<(), ConvertError> {
    writer
        .write_all(line.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .map_err(ConvertError::Write)?;
    stats.bytes_written += line.len() as u64 + 1;
    Ok(())
}
