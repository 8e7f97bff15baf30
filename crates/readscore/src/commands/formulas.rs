//! Formulas command: list what `score --formula` accepts.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::Formula;

/// Arguments for the `formulas` subcommand.
#[derive(Args, Debug, Default)]
pub struct FormulasArgs {}

#[derive(Serialize)]
struct FormulaEntry {
    name: &'static str,
    description: &'static str,
}

/// List every formula with a one-line description.
#[instrument(name = "cmd_formulas", skip_all)]
pub fn cmd_formulas(_args: FormulasArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing formulas command");

    let entries: Vec<FormulaEntry> = Formula::ALL
        .into_iter()
        .map(|formula| FormulaEntry {
            name: formula.name(),
            description: formula.description(),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{:<30} {}", entry.name.bold(), entry.description.dimmed());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_in_text_and_json() {
        assert!(cmd_formulas(FormulasArgs::default(), false).is_ok());
        assert!(cmd_formulas(FormulasArgs::default(), true).is_ok());
    }
}
