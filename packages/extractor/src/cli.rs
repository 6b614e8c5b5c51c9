//! Command-line interface for the extractor.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use console::style;
use roxmltree::Document;

use crate::document::Forecast;
use crate::error::Result;
use crate::extract::{extract_file, read_input, to_json, write_json};

/// DWML Extractor - Pull forecast series out of NWS DWML weather XML.
#[derive(Parser)]
#[command(name = "dwml-extract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract every parameter series to JSON.
    Extract {
        /// DWML XML file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List locations, time layouts and parameters without writing JSON.
    Inspect {
        /// DWML XML file
        input: PathBuf,
    },
}

/// Default log filter for a verbosity count; `RUST_LOG` takes precedence.
#[must_use]
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract {
            input,
            output,
            pretty,
        } => extract_command(&input, output.as_deref(), pretty),
        Commands::Inspect { input } => inspect_command(&input),
    }
}

/// Execute the extract command.
fn extract_command(input: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let summary = extract_file(input)?;
    tracing::info!(
        input = %input.display(),
        parameters = summary.parameters.len(),
        "Extracted forecast"
    );

    match output {
        Some(path) => {
            write_json(&summary, path, pretty)?;
            eprintln!(
                "{} {} parameters to {}",
                style("Extracted").green().bold(),
                summary.parameters.len(),
                path.display()
            );
        }
        None => println!("{}", to_json(&summary, pretty)?),
    }

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(input: &Path) -> Result<()> {
    let xml = read_input(input)?;
    let tree = Document::parse(&xml)?;
    let forecast = Forecast::new(&tree)?;

    println!("{}", style("Locations").bold());
    for (key, location) in forecast.locations() {
        match location.point() {
            Some(point) => println!(
                "  {} ({}, {})",
                style(key).cyan(),
                point.latitude,
                point.longitude
            ),
            None => println!("  {} (no point)", style(key).cyan()),
        }
    }

    println!("{}", style("Time layouts").bold());
    for (key, layout) in forecast.time_layouts() {
        let intervals = match layout.valid_times() {
            Ok(times) => times.len().to_string(),
            Err(e) => style(format!("invalid: {e}")).red().to_string(),
        };
        println!(
            "  {} [{}] {intervals} intervals",
            style(key).cyan(),
            layout.time_coordinate().unwrap_or("-")
        );
    }

    println!("{}", style("Parameters").bold());
    for parameter in forecast.parameters() {
        let unresolved = parameter.location().is_none() || parameter.time_layout().is_none();
        println!(
            "  {} {} ({}, {} raw values){}",
            style(parameter.element_name()).green(),
            parameter.parameter_type().unwrap_or("-"),
            parameter.kind().as_str(),
            parameter.raw_len(),
            if unresolved {
                style(" unresolved reference").yellow().to_string()
            } else {
                String::new()
            }
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_extract() {
        let cli = Cli::parse_from(["dwml-extract", "extract", "forecast.xml"]);

        let Commands::Extract {
            input,
            output,
            pretty,
        } = cli.command
        else {
            panic!("expected extract command");
        };
        assert_eq!(input, PathBuf::from("forecast.xml"));
        assert!(output.is_none());
        assert!(!pretty);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_extract_with_options() {
        let cli = Cli::parse_from([
            "dwml-extract",
            "-vv",
            "extract",
            "forecast.xml",
            "--output",
            "out.json",
            "--pretty",
        ]);

        let Commands::Extract { output, pretty, .. } = cli.command else {
            panic!("expected extract command");
        };
        assert_eq!(output, Some(PathBuf::from("out.json")));
        assert!(pretty);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_parse_inspect() {
        let cli = Cli::parse_from(["dwml-extract", "inspect", "forecast.xml", "-v"]);

        assert!(matches!(cli.command, Commands::Inspect { .. }));
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(7), "trace");
    }
}
