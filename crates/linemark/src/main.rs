mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputArgs};
use linemark_core::{Config, OutputFormat};
use linemark_diff::{classify, from_unified, GitSource, ParsedDiff};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    let _guard = linemark_core::init_logging(&config.log(), cli.verbose);
    if let Some(warning) = config.version_warning() {
        tracing::warn!("{}", warning);
    }

    if let Err(e) = run(cli, &config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// An explicit `--config` file must load; the implicit global/repo layers are best effort.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let loaded = Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            Ok(Config::default().merge(loaded))
        }
        None => Ok(Config::load()),
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::Classify {
            path,
            unified,
            output,
        } => {
            let raw = match path.as_deref() {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut input = String::new();
                    io::stdin()
                        .read_to_string(&mut input)
                        .context("Failed to read diff from stdin")?;
                    input
                }
            };
            let text = if unified { from_unified(&raw) } else { raw };
            emit(&classify(&text), config, &output)
        }
        Command::File { path, output } => {
            let source = GitSource::from_config(&config.diff());
            let text = source
                .diff_for_path(&path)
                .with_context(|| format!("Failed to diff {}", path.display()))?;
            let parsed = classify(&text);
            tracing::info!(
                "{}: {} added, {} modified, {} deletion anchors",
                path.display(),
                parsed.added_lines.len(),
                parsed.modified_lines.len(),
                parsed.deleted_at_lines.len()
            );
            emit(&parsed, config, &output)
        }
    }
}

fn emit(parsed: &ParsedDiff, config: &Config, args: &OutputArgs) -> Result<()> {
    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or_else(|| config.output_format());
    let rendered = output::render(parsed, format, args.flat)?;

    let mut stdout = io::stdout().lock();
    // A closed pipe (e.g. `| head -n 1`) is not an error
    if let Err(e) = stdout.write_all(rendered.as_bytes()) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(e.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = load_config(Some(missing.as_path())).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.toml"));
    }

    #[test]
    fn test_explicit_config_must_parse() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[output\nformat = ").unwrap();
        assert!(load_config(Some(broken.as_path())).is_err());
    }

    #[test]
    fn test_explicit_config_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linemark.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();
        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);
    }
}
