//! Terminal and JSON rendering of search results, element groups and stats

use crate::index::groups::ElementGroup;
use crate::index::stats::format_size;
use crate::index::suffix_index::SuffixIndex;
use crate::index::types::{FragmentId, IndexStats};
use crate::query::searcher::MatchRecord;
use crate::utils::nucleotide;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A match record with its source position resolved to a fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedMatch {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub fragment: Option<FragmentId>,
    pub offset: Option<u32>,
    /// Matched symbols as nucleotide letters
    pub text: String,
}

impl LocatedMatch {
    pub fn resolve(index: &SuffixIndex, record: MatchRecord) -> Self {
        let location = index.locate(&record);
        let start = record.source_position as usize;
        let end = (start + record.length as usize).min(index.len());
        Self {
            record,
            fragment: location.map(|(f, _)| f),
            offset: location.map(|(_, o)| o),
            text: nucleotide::decode(&index.symbols()[start..end]),
        }
    }
}

pub fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print matches grouped under the query position they start at
pub fn print_matches<W: WriteColor>(out: &mut W, matches: &[LocatedMatch]) -> io::Result<()> {
    let mut current: Option<u32> = None;

    for m in matches {
        if current != Some(m.record.query_position) {
            if current.is_some() {
                // Blank line between query positions
                writeln!(out)?;
            }
            out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            writeln!(out, "query {}", m.record.query_position)?;
            out.reset()?;
            current = Some(m.record.query_position);
        }

        // fragment:offset, or the raw buffer position if unresolved
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        match (m.fragment, m.offset) {
            (Some(fragment), Some(offset)) => write!(out, "{}:{}", fragment, offset)?,
            _ => write!(out, "@{}", m.record.source_position)?,
        }
        out.reset()?;
        write!(out, ":{}:", m.record.length)?;

        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", m.text)?;
        out.reset()?;
        writeln!(out)?;
    }

    Ok(())
}

/// Print one line per element group
pub fn print_groups<W: WriteColor>(out: &mut W, groups: &[ElementGroup]) -> io::Result<()> {
    for group in groups {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{}", group)?;
        out.reset()?;
        writeln!(out, " {}", group.chain_as_string())?;
    }
    Ok(())
}

/// Print index statistics
pub fn print_stats<W: WriteColor>(out: &mut W, name: &str, stats: &IndexStats) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "{}", name)?;
    out.reset()?;

    writeln!(out, "Buffer length:    {}", stats.buffer_len)?;
    writeln!(out, "Fragments:        {}", stats.fragment_count)?;
    writeln!(out, "Intervals:        {}", stats.interval_count)?;
    writeln!(out, "Max LCP:          {}", stats.max_lcp)?;
    writeln!(out, "Child entries:    {}", stats.child_entries)?;
    writeln!(out, "Suffix links:     {}", stats.link_entries)?;
    writeln!(out, "Element groups:   {}", stats.element_groups)?;
    writeln!(
        out,
        "Estimated size:   {}",
        format_size(stats.estimated_bytes())
    )?;
    Ok(())
}

/// Pretty-printed JSON followed by a newline
pub fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
