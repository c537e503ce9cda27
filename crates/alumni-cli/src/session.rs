//! Line-oriented query session over a dataset loaded once.
//!
//! Each input line is one command:
//!
//! - `name=Asha,Bilal; platform=LinkedIn` runs a query (clauses are separated
//!   by `;`, values by `,`; repeated clauses accumulate)
//! - an empty line runs an unfiltered query; a clause with no values, such
//!   as `name=`, is rejected rather than widened to every name
//! - `reload` re-reads the dataset
//! - `quit` or `exit` ends the session (as does end of input)

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, trace, warn};

use alumni_model::{Dataset, FilterCriteria};
use alumni_query::AlumniQueryEngine;

use crate::logging::{log_data_enabled, redact_value};
use crate::render::{OutputFormat, render_outcome};

/// A parsed session input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Query(FilterCriteria),
    Reload,
    Quit,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub queries: usize,
    pub empty_results: usize,
    pub reloads: usize,
    pub rejected_lines: usize,
}

/// Parse one session line.
pub fn parse_command(line: &str) -> Result<SessionCommand> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("reload") {
        return Ok(SessionCommand::Reload);
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Ok(SessionCommand::Quit);
    }
    let mut criteria = FilterCriteria::new();
    for clause in line.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        let Some((key, values)) = clause.split_once('=') else {
            bail!("expected key=value, got '{clause}'");
        };
        let key = key.trim().to_ascii_lowercase();
        let target = match key.as_str() {
            "name" | "names" => &mut criteria.names,
            "platform" | "platforms" => &mut criteria.platforms,
            other => bail!("unknown filter '{other}' (expected name or platform)"),
        };
        let values: Vec<String> = values
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
            .collect();
        if values.is_empty() {
            bail!("filter '{key}' has no values");
        }
        target.extend(values);
    }
    Ok(SessionCommand::Query(criteria))
}

/// Serve commands from `input` until `quit` or end of input.
///
/// Rejected lines are reported on `output` and the session continues.
/// `reload` calls `loader` and swaps the engine's dataset only on success.
pub fn run_session<R, W, L>(
    engine: &mut AlumniQueryEngine,
    input: R,
    mut output: W,
    format: OutputFormat,
    mut loader: L,
) -> Result<SessionStats>
where
    R: BufRead,
    W: Write,
    L: FnMut() -> Result<Dataset>,
{
    let mut stats = SessionStats::default();
    for (idx, line) in input.lines().enumerate() {
        let line = line.context("read session input")?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(error) => {
                stats.rejected_lines += 1;
                warn!(line = idx + 1, %error, "rejected session input");
                writeln!(output, "error: {error}")?;
                continue;
            }
        };
        match command {
            SessionCommand::Quit => break,
            SessionCommand::Reload => match loader() {
                Ok(dataset) => {
                    stats.reloads += 1;
                    info!(rows = dataset.len(), "dataset reloaded");
                    writeln!(output, "reloaded {} records", dataset.len())?;
                    engine.reload(dataset);
                }
                Err(error) => {
                    warn!(error = %format!("{error:#}"), "reload failed; keeping current dataset");
                    writeln!(output, "error: {error:#}")?;
                }
            },
            SessionCommand::Query(criteria) => {
                let span = info_span!("query", line = idx + 1);
                let _guard = span.enter();
                log_criteria(&criteria);
                let options = engine.options();
                let outcome = engine.run(&criteria);
                stats.queries += 1;
                if outcome.is_empty() {
                    stats.empty_results += 1;
                }
                let rendered =
                    render_outcome(&outcome, options.top_n, format).context("render result")?;
                writeln!(output, "{rendered}")?;
            }
        }
    }
    output.flush()?;
    Ok(stats)
}

/// Log the active filters, redacting names unless row logging is enabled.
pub fn log_criteria(criteria: &FilterCriteria) {
    let names: Vec<&str> = criteria.names.iter().map(|n| redact_value(n)).collect();
    let platforms: Vec<&str> = criteria.platforms.iter().map(String::as_str).collect();
    info!(
        ?names,
        ?platforms,
        unconstrained = criteria.is_unconstrained(),
        "running query"
    );
}

/// Trace every loaded row. Only emitted when row logging is enabled.
pub fn log_records(dataset: &Dataset) {
    trace_records(dataset, log_data_enabled());
}

fn trace_records(dataset: &Dataset, log_data: bool) {
    if !log_data {
        return;
    }
    for (idx, record) in dataset.iter().enumerate() {
        trace!(row = idx + 1, %record, "loaded record");
    }
}
