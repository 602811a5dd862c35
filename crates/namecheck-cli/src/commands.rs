use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use namecheck_cli::config::{AppConfig, ConfigOverrides};
use namecheck_ingest::{FileExtractor, MasterLoad, expand_inputs, load_master_names};
use namecheck_match::{MasterIndex, NameMatcher};
use namecheck_model::{CheckResult, FileReviewResult, ReviewSummary};
use namecheck_report::{ReportFormat, write_master_csv, write_report_file};
use namecheck_review::ReviewEngine;
use tracing::{info, info_span};

use crate::cli::{CheckArgs, MasterArgs, MatchArgs, ReportFormatArg, ReviewArgs};

/// Everything the review summary needs to print.
pub struct ReviewOutcome {
    pub master: MasterLoad,
    pub files: Vec<FileReviewResult>,
    pub summary: ReviewSummary,
    pub report: Option<PathBuf>,
    pub elapsed: Duration,
}

pub struct MasterListing {
    pub master: MasterLoad,
    pub output: Option<PathBuf>,
}

pub fn run_review(args: &ReviewArgs) -> Result<ReviewOutcome> {
    let started = Instant::now();
    let (matcher, master) = build_matcher(&args.matching)?;
    let paths = expand_inputs(&args.paths).context("collect documents")?;
    if paths.is_empty() {
        bail!("no documents found under the given paths");
    }
    let span = info_span!("review", files = paths.len());
    let _guard = span.enter();

    let engine = ReviewEngine::new(Arc::new(matcher));
    let progress = progress_bar(paths.len(), args.no_progress);
    let files = engine.review_batch_with(&paths, &FileExtractor, |result| {
        progress.set_message(result.file.clone());
        progress.inc(1);
    });
    progress.finish_and_clear();

    let summary = ReviewSummary::from_results(&files);
    let report = match &args.report {
        Some(path) => {
            let format = report_format(path, args.format);
            write_report_file(path, format, &files)
                .with_context(|| format!("write report {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };
    let elapsed = started.elapsed();
    info!(
        files = summary.files,
        mismatched = summary.mismatched,
        errors = summary.errors,
        duration_ms = elapsed.as_millis() as u64,
        "review finished"
    );
    Ok(ReviewOutcome {
        master,
        files,
        summary,
        report,
        elapsed,
    })
}

pub fn run_check(args: &CheckArgs) -> Result<Vec<(String, Option<CheckResult>)>> {
    let (matcher, _) = build_matcher(&args.matching)?;
    Ok(args
        .names
        .iter()
        .map(|name| (name.clone(), matcher.check(name)))
        .collect())
}

pub fn run_master(args: &MasterArgs) -> Result<MasterListing> {
    let master = load_master_names(args.master.as_deref());
    if let Some(path) = &args.output {
        write_master_export(path, &master.names)?;
        info!(path = %path.display(), names = master.names.len(), "exported master list");
    }
    Ok(MasterListing {
        master,
        output: args.output.clone(),
    })
}

/// Resolves config, flags and the master list into a ready matcher.
pub fn build_matcher(args: &MatchArgs) -> Result<(NameMatcher, MasterLoad)> {
    let overrides = ConfigOverrides {
        master: args.master.clone(),
        similarity_threshold: args.similarity_threshold,
        fallback_max_chars: args.fallback_max_chars,
    };
    let config = AppConfig::resolve(args.config.as_deref())?.apply(&overrides)?;
    let master = load_master_names(config.master.as_deref());
    let index = MasterIndex::build(&master.names).context("build master index")?;
    info!(
        names = index.len(),
        source = %master.source.label(),
        "master list ready"
    );
    let matcher = NameMatcher::with_options(Arc::new(index), config.matching)
        .context("build matcher")?;
    Ok((matcher, master))
}

fn report_format(path: &Path, requested: Option<ReportFormatArg>) -> ReportFormat {
    match requested {
        Some(ReportFormatArg::Csv) => ReportFormat::Csv,
        Some(ReportFormatArg::Json) => ReportFormat::Json,
        None => ReportFormat::from_path(path).unwrap_or(ReportFormat::Csv),
    }
}

fn write_master_export(path: &Path, names: &[String]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_master_csv(BufWriter::new(file), names)
        .with_context(|| format!("write master list {}", path.display()))
}

fn progress_bar(len: usize, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::with_draw_target(Some(len as u64), ProgressDrawTarget::stderr());
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}
