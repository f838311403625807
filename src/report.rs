//! Console rendering for the demo run.

use crate::collection::Stats;
use crate::item::Item;
use colored::Colorize;
use std::io::{self, Write};

fn marker(item: &Item, color: bool) -> String {
    match (color, item.is_completed()) {
        (false, _) => item.marker().to_string(),
        (true, true) => item.marker().green().to_string(),
        (true, false) => item.marker().yellow().to_string(),
    }
}

pub fn write_listing<W: Write>(out: &mut W, items: &[Item], color: bool) -> io::Result<()> {
    writeln!(out, "All Todos:")?;
    for item in items {
        writeln!(out, "  [{}] {}", marker(item, color), item.text)?;
    }
    Ok(())
}

pub fn write_results<W: Write>(out: &mut W, results: &[String]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Async Processing Results:")?;
    for line in results {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &Stats) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Stats:")?;
    writeln!(out, "  Total: {}", stats.total)?;
    writeln!(out, "  Completed: {}", stats.completed)?;
    writeln!(out, "  Pending: {}", stats.pending)?;
    Ok(())
}
