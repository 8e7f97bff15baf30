//! Score command: the full readability report, or one formula.

use std::io::IsTerminal;

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::{Formula, Readability, ReadabilityReport, markdown};

use super::{is_markdown, read_input_file};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Files to score (`-` reads stdin).
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Print only this formula's score.
    #[arg(short, long, value_enum)]
    pub formula: Option<Formula>,

    /// Maximum acceptable grade, compared against the median grade.
    #[arg(long)]
    pub max_grade: Option<f64>,

    /// Strip markdown even without a `.md` extension.
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Serialize)]
struct FileReport {
    file: String,
    #[serde(flatten)]
    report: ReadabilityReport,
}

#[derive(Serialize)]
struct FileFormulaScore {
    file: String,
    formula: Formula,
    score: f64,
}

fn progress_bar(len: usize) -> ProgressBar {
    if len < 2 || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}") {
        bar.set_style(style);
    }
    bar
}

fn print_json<T: Serialize>(items: &[T]) -> anyhow::Result<()> {
    match items {
        [single] => println!("{}", serde_json::to_string_pretty(single)?),
        _ => println!("{}", serde_json::to_string_pretty(items)?),
    }
    Ok(())
}

/// Score one or more files.
#[instrument(name = "cmd_score", skip_all, fields(files = args.files.len()))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    engine: &Readability,
    config_max_grade: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(formula = ?args.formula, max_grade = ?args.max_grade, "executing score command");

    if let Some(formula) = args.formula {
        return score_formula(&args, formula, global_json, engine, max_input_bytes);
    }

    let max_grade = args.max_grade.or(config_max_grade);
    let bar = progress_bar(args.files.len());
    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        bar.set_message(file.to_string());
        let content = read_input_file(file, max_input_bytes)?;
        let strip_md = args.markdown || is_markdown(file);
        reports.push(FileReport {
            file: file.to_string(),
            report: engine.report(&content, strip_md, max_grade),
        });
        bar.inc(1);
    }
    bar.finish_and_clear();

    if global_json {
        print_json(&reports)?;
    } else {
        for entry in &reports {
            print_report(entry);
        }
    }

    let failed: Vec<&FileReport> = reports.iter().filter(|entry| entry.report.over_max).collect();
    if let Some(max) = max_grade {
        if !failed.is_empty() {
            let detail = failed
                .iter()
                .map(|entry| format!("{} ({:.1})", entry.file, entry.report.text_median))
                .collect::<Vec<_>>()
                .join(", ");
            bail!(
                "median grade above {max:.1} in {detail}. Use shorter sentences and plainer words."
            );
        }
        if !global_json {
            println!("{} all files at or below grade {max:.1}", "PASS:".green());
        }
    }

    Ok(())
}

fn score_formula(
    args: &ScoreArgs,
    formula: Formula,
    global_json: bool,
    engine: &Readability,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let mut scores = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let content = read_input_file(file, max_input_bytes)?;
        let prose = if args.markdown || is_markdown(file) {
            markdown::strip_to_prose(&content)
        } else {
            content
        };
        scores.push(FileFormulaScore {
            file: file.to_string(),
            formula,
            score: engine.score(formula, &prose),
        });
    }

    if global_json {
        print_json(&scores)?;
    } else if let [single] = scores.as_slice() {
        println!("{}", single.score);
    } else {
        for entry in &scores {
            println!("{}\t{}", entry.score, entry.file);
        }
    }
    Ok(())
}

fn print_report(entry: &FileReport) {
    let report = &entry.report;
    println!("{}", entry.file.bold());
    println!(
        "  {} {}  {} {}  {} {}  {} {}",
        "words".dimmed(),
        report.lexicon_count,
        "sentences".dimmed(),
        report.sentence_count,
        "syllables".dimmed(),
        report.syllable_count,
        "difficult".dimmed(),
        report.difficult_words.len(),
    );
    for score in &report.scores {
        println!("  {:<30} {:>8}", score.formula.name(), score.score);
    }
    let consensus = format!(
        "{} ({})",
        report.text_standard_label, report.text_standard
    );
    println!("  {:<30} {}", "consensus".bold(), consensus.cyan());
    let median = format!("{:.2}", report.text_median);
    if report.over_max {
        println!("  {:<30} {}", "median".bold(), median.red());
    } else {
        println!("  {:<30} {}", "median".bold(), median.green());
    }
}
