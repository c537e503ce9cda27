use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use alumni_cli::render::{EMPTY_RESULT_WARNING, OutputFormat, render_options, render_outcome};
use alumni_cli::session::{SessionStats, log_criteria, log_records, run_session};
use alumni_ingest::load_dataset;
use alumni_model::{Dataset, FilterCriteria};
use alumni_query::{AlumniQueryEngine, QueryOptions};

use crate::cli::{DataArgs, OutputFormatArg, QueryArgs, RankArgs, SessionArgs};

pub fn run_query(args: &QueryArgs) -> Result<()> {
    let engine = build_engine(&args.data, &args.rank)?;
    let criteria = FilterCriteria::new()
        .with_names(args.names.iter().cloned())
        .with_platforms(args.platforms.iter().cloned());

    let query_span = info_span!("query");
    let _query_guard = query_span.enter();
    log_criteria(&criteria);
    let start = Instant::now();
    let outcome = engine.run(&criteria);
    info!(
        participants = outcome.participant_count(),
        duration_ms = start.elapsed().as_millis(),
        "query complete"
    );

    let format = output_format(args.rank.format);
    if outcome.is_empty() && format == OutputFormat::Table {
        warn!("query matched no records");
        eprintln!("warning: {EMPTY_RESULT_WARNING}");
        return Ok(());
    }
    let rendered = render_outcome(&outcome, engine.options().top_n, format)
        .context("render query result")?;
    println!("{rendered}");
    Ok(())
}

pub fn run_options(args: &DataArgs) -> Result<()> {
    let dataset = load(&args.data)?;
    println!("{}", render_options(&dataset));
    Ok(())
}

pub fn run_session_command(args: &SessionArgs) -> Result<SessionStats> {
    let path = args.data.data.as_path();
    let mut engine = build_engine(&args.data, &args.rank)?;
    eprintln!(
        "Loaded {} records. Enter filters as `name=A,B; platform=X`, `reload` or `quit`.",
        engine.dataset().len()
    );
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = run_session(
        &mut engine,
        stdin.lock(),
        stdout.lock(),
        output_format(args.rank.format),
        || load(path),
    )?;
    info!(
        queries = stats.queries,
        empty_results = stats.empty_results,
        reloads = stats.reloads,
        rejected_lines = stats.rejected_lines,
        "session ended"
    );
    Ok(stats)
}

fn build_engine(data: &DataArgs, rank: &RankArgs) -> Result<AlumniQueryEngine> {
    let dataset = load(&data.data)?;
    let options = QueryOptions::new().with_top_n(rank.top);
    Ok(AlumniQueryEngine::new(dataset).with_options(options))
}

fn load(path: &Path) -> Result<Dataset> {
    let ingest_span = info_span!("ingest", path = %path.display());
    let dataset = ingest_span
        .in_scope(|| load_dataset(path))
        .with_context(|| format!("load dataset: {}", path.display()))?;
    ingest_span.in_scope(|| log_records(&dataset));
    Ok(dataset)
}

fn output_format(arg: OutputFormatArg) -> OutputFormat {
    match arg {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Json => OutputFormat::Json,
    }
}
