//! Sequential orchestration of the demo: seed, list, toggle, fan out, report.

use crate::collection::{Collection, Stats};
use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::processing::fan_out;
use crate::report::{write_listing, write_results, write_stats};
use log::{debug, info};
use std::io::Write;

/// What a run produced, for callers that want more than the console text.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub results: Vec<String>,
    pub stats: Stats,
}

pub async fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<Summary, DemoError> {
    let list = Collection::new();
    for text in &config.seed {
        list.add(text.as_str());
    }

    write_listing(out, &list.all(), config.color)?;

    let toggled = list.toggle(config.toggle_id);
    debug!("toggle({}) matched: {}", config.toggle_id, toggled);

    // Captured once: this snapshot decides both how many tasks run and how
    // many results are collected.
    let batch = list.all();
    info!("processing {} items", batch.len());
    let results = fan_out(batch, config.delay()).await?;

    write_results(out, &results)?;

    let stats = list.stats();
    write_stats(out, &stats)?;
    out.flush()?;

    Ok(Summary { results, stats })
}
