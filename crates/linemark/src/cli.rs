use clap::{Args, Parser, Subcommand, ValueEnum};
use linemark_core::OutputFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "linemark", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify configuration file path
    #[arg(long, global = true, env = "LINEMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify prefix-encoded diff text from a file or stdin
    Classify {
        /// Diff file to read; stdin when omitted
        path: Option<PathBuf>,

        /// Input is standard `git diff` output rather than prefix-encoded text
        #[arg(long)]
        unified: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Classify the working-tree changes of one file through git
    File {
        /// File inside a git work tree
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format; defaults to the configured one
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Print the flattened set of changed lines instead of the three groups
    #[arg(long)]
    pub flat: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_classify_with_flags() {
        let cli = Cli::try_parse_from([
            "linemark", "-vv", "classify", "--unified", "--format", "json", "--flat", "d.diff",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Classify {
                path,
                unified,
                output,
            } => {
                assert_eq!(path, Some(PathBuf::from("d.diff")));
                assert!(unified);
                assert_eq!(output.format, Some(FormatArg::Json));
                assert!(output.flat);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_file_requires_path() {
        assert!(Cli::try_parse_from(["linemark", "file"]).is_err());
        let cli = Cli::try_parse_from(["linemark", "file", "src/lib.rs"]).unwrap();
        assert!(matches!(cli.command, Command::File { .. }));
    }
}
