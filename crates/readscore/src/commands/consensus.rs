//! Consensus command: one grade level for a file.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::consensus::{GradeTally, TextStandard};
use readscore_core::{Readability, markdown};

use super::{is_markdown, read_input_file};

/// Arguments for the `consensus` subcommand.
#[derive(Args, Debug)]
pub struct ConsensusArgs {
    /// File to grade (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Print the winning grade as a number instead of a label.
    #[arg(long, conflicts_with = "median")]
    pub float: bool,

    /// Print the median of the formula grades instead of the vote winner.
    #[arg(long)]
    pub median: bool,

    /// Strip markdown even without a `.md` extension.
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ConsensusOutput {
    Median {
        file: String,
        text_median: f64,
        components: [f64; 8],
    },
    Standard {
        file: String,
        text_standard: TextStandard,
        votes: Vec<f64>,
        tallies: Vec<GradeTally>,
    },
}

/// Print the consensus grade of a file.
#[instrument(name = "cmd_consensus", skip_all, fields(file = %args.file))]
pub fn cmd_consensus(
    args: ConsensusArgs,
    global_json: bool,
    engine: &Readability,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(float = args.float, median = args.median, "executing consensus command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let text = if args.markdown || is_markdown(&args.file) {
        markdown::strip_to_prose(&content)
    } else {
        content
    };

    let output = if args.median {
        ConsensusOutput::Median {
            file: args.file.to_string(),
            text_median: engine.text_median(&text),
            components: engine.median_components(&text),
        }
    } else {
        let consensus = engine.consensus(&text);
        let text_standard = if args.float {
            TextStandard::Float(consensus.grade)
        } else {
            TextStandard::Label(consensus.label())
        };
        ConsensusOutput::Standard {
            file: args.file.to_string(),
            text_standard,
            votes: consensus.votes,
            tallies: consensus.tallies,
        }
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match output {
            ConsensusOutput::Median { text_median, .. } => println!("{text_median}"),
            ConsensusOutput::Standard { text_standard, .. } => println!("{text_standard}"),
        }
    }

    Ok(())
}
