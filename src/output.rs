//! Output formatting for query results, dumps and statistics

use crate::index::stats::{write_stats, IndexStats};
use crate::index::types::{Offset, WordOccurrences};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// How results are rendered
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// One JSON document per result instead of plain text
    pub json: bool,
    /// Bytes of corpus shown on each side of a match
    pub context: Option<usize>,
}

/// Stdout stream honoring the color setting
pub fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Offsets separated by spaces, or `-1` when there are none
pub fn format_offsets(offsets: &[Offset]) -> String {
    if offsets.is_empty() {
        return "-1".to_string();
    }
    offsets
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write the result of a single query
pub fn write_result<W: WriteColor>(
    out: &mut W,
    result: &WordOccurrences<'_>,
    corpus: &[u8],
    options: &OutputOptions,
) -> io::Result<()> {
    if options.json {
        serde_json::to_writer(&mut *out, result).map_err(io::Error::from)?;
        return writeln!(out);
    }

    match options.context {
        Some(radius) if !result.offsets.is_empty() => {
            for &offset in result.offsets {
                write_context_line(out, corpus, offset, result.word.len(), radius)?;
            }
            Ok(())
        }
        _ => writeln!(out, "{}", format_offsets(result.offsets)),
    }
}

/// Print every `(word, offsets)` pair
pub fn write_dump<W: WriteColor>(
    out: &mut W,
    entries: &[WordOccurrences<'_>],
    options: &OutputOptions,
) -> io::Result<()> {
    if options.json {
        serde_json::to_writer_pretty(&mut *out, entries).map_err(io::Error::from)?;
        return writeln!(out);
    }

    for entry in entries {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(out, "{}", entry.display_word())?;
        out.reset()?;
        writeln!(out, ": {}", format_offsets(entry.offsets))?;
    }

    Ok(())
}

pub fn write_index_stats<W: WriteColor>(
    out: &mut W,
    stats: &IndexStats,
    options: &OutputOptions,
) -> io::Result<()> {
    if options.json {
        serde_json::to_writer_pretty(&mut *out, stats).map_err(io::Error::from)?;
        return writeln!(out);
    }
    write_stats(out, stats)
}

/// Print one match with surrounding corpus bytes, match highlighted
fn write_context_line<W: WriteColor>(
    out: &mut W,
    corpus: &[u8],
    offset: Offset,
    match_len: usize,
    radius: usize,
) -> io::Result<()> {
    let offset = offset.min(corpus.len());
    let match_end = offset.saturating_add(match_len).min(corpus.len());
    let start = offset.saturating_sub(radius);
    let end = match_end.saturating_add(radius).min(corpus.len());

    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", offset)?;
    out.reset()?;
    write!(out, ":")?;

    write!(out, "{}", printable(&corpus[start..offset]))?;

    if match_end > offset {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", printable(&corpus[offset..match_end]))?;
        out.reset()?;
    }

    writeln!(out, "{}", printable(&corpus[match_end..end]))
}

/// Lossy text with line breaks and tabs flattened to spaces
fn printable(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace(['\n', '\r', '\t'], " ")
}
