// src/cli.rs
//
// Headless front end. Same pipeline as the GUI: one run per invocation,
// either against the live chart or a saved page (`--html`).

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use crate::{
    config::{
        options::{AppOptions, BatchView, Bound, ChartKind, ExportFormat},
        settings,
    },
    core::{Fetcher, HttpFetcher, SavedPage},
    csv::rows_to_string,
    file,
    log,
    progress::NullProgress,
    scrape::{self, ChartRun, RunOutcome, Trigger},
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Scrape the top chart into CSV/TSV/JSON")]
pub struct Cli {
    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and extract, then write one batch view
    Scrape(ScrapeArgs),
    /// Fetch and extract, then print one chart series
    Chart(ChartArgs),
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Read a saved page instead of fetching
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    pub html: Option<PathBuf>,

    /// Chart URL (defaults to settings, then the built-in URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Args)]
pub struct CapArgs {
    /// Fixed lower bound for ratings
    #[arg(long)]
    pub lower: Option<f64>,

    /// Fixed upper bound for ratings
    #[arg(long, conflicts_with = "no_upper")]
    pub upper: Option<f64>,

    /// Compute the upper bound from the batch instead of the fixed default
    #[arg(long)]
    pub no_upper: bool,
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub cap: CapArgs,

    #[arg(long, value_enum, default_value_t = BatchView::Base)]
    pub view: BatchView,

    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write a header row (default: from settings, on)
    #[arg(long, overrides_with = "no_headers")]
    pub headers: bool,

    /// Omit the header row
    #[arg(long, overrides_with = "headers")]
    pub no_headers: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub cap: CapArgs,

    #[arg(long, value_enum)]
    pub kind: ChartKind,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    log::init_stderr(cli.verbose);

    let mut opts = settings::load(&settings::default_path());
    match cli.command {
        Command::Scrape(args) => {
            apply_cap(&mut opts, &args.cap);
            scrape_cmd(&mut opts, args)
        }
        Command::Chart(args) => {
            apply_cap(&mut opts, &args.cap);
            chart_cmd(&mut opts, args)
        }
    }
}

fn apply_cap(opts: &mut AppOptions, cap: &CapArgs) {
    if let Some(v) = cap.lower {
        opts.capping.lower = Bound::Fixed(v);
    }
    if let Some(v) = cap.upper {
        opts.capping.upper = Bound::Fixed(v);
    }
    if cap.no_upper {
        opts.capping.upper = Bound::Computed;
    }
}

/// One run against the selected source. NoData is reported, not an error.
fn fetch_run(opts: &mut AppOptions, source: &SourceArgs) -> Result<Option<ChartRun>> {
    if let Some(url) = &source.url {
        opts.fetch.url = url.clone();
    }
    if source.timeout.is_some() {
        opts.fetch.timeout_secs = source.timeout;
    }

    let fetcher: Box<dyn Fetcher> = match &source.html {
        Some(path) => Box::new(SavedPage::new(path)),
        None => Box::new(HttpFetcher::new(opts.fetch.timeout())),
    };

    let mut progress = NullProgress;
    let outcome = scrape::run(Trigger::InitialLoad, fetcher.as_ref(), &opts.fetch, Some(&mut progress))
        .wrap_err("scrape failed")?;

    match outcome {
        RunOutcome::Data(run) => Ok(Some(run)),
        RunOutcome::NoData => {
            eprintln!("No data: the page has no embedded chart payload.");
            Ok(None)
        }
    }
}

/// Flags given on the command line win; everything else stays as loaded.
fn apply_export(opts: &mut AppOptions, args: &ScrapeArgs) {
    if let Some(format) = args.format {
        opts.export.format = format;
    }
    if args.headers {
        opts.export.include_headers = true;
    }
    if args.no_headers {
        opts.export.include_headers = false;
    }
}

fn scrape_cmd(opts: &mut AppOptions, args: ScrapeArgs) -> Result<()> {
    apply_export(opts, &args);

    let Some(run) = fetch_run(opts, &args.source)? else {
        return Ok(());
    };
    let batch = run.view(args.view, &opts.capping);

    match &args.out {
        Some(path) => {
            opts.export.set_path(path);
            let written = file::write_export(&opts.export, &batch)?;
            eprintln!("Wrote {} records to {}", batch.len(), written.display());
        }
        None => {
            let text = file::to_export_string(&opts.export, &batch)?;
            io::stdout().lock().write_all(text.as_bytes())?;
        }
    }
    info!(view = ?args.view, records = batch.len(), "cli: scrape done");
    Ok(())
}

fn chart_cmd(opts: &mut AppOptions, args: ChartArgs) -> Result<()> {
    let Some(run) = fetch_run(opts, &args.source)? else {
        return Ok(());
    };

    let Some(series) = run.series(args.kind, &opts.capping) else {
        eprintln!("No data to chart for {}.", args.kind.title());
        return Ok(());
    };

    let (headers, rows) = series.to_table();
    let text = rows_to_string(&rows, Some(&headers), '\t');
    let mut out = io::stdout().lock();
    writeln!(out, "# {} ({})", args.kind.heading(), args.kind.title())?;
    out.write_all(text.as_bytes())?;
    Ok(())
}
