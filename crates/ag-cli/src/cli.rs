//! Command-line surface.

use ag_core::task::TaskMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "agentdemo",
    version,
    about = "Agent framework demo: classify a task, fake the work, summarise the result"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding agentdemo.db
    #[arg(long, global = true, env = "AGENTDEMO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Seed for reproducible mock data
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print raw JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a task through the full pipeline
    Run(RunArgs),

    /// Show the category a task would be routed to
    Classify {
        text: String,
    },

    /// List every task category
    Categories,

    /// Show recent results, newest first
    History {
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Forget all recorded results
    ClearHistory,

    /// Show or change preferences
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },
}

#[derive(Debug, Args)]
pub struct RunArgs {
    pub text: String,

    /// Execution mode (defaults to the stored preference)
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<TaskMode>,

    /// Skip the simulated delay
    #[arg(long)]
    pub no_delay: bool,
}

#[derive(Debug, Subcommand)]
pub enum PrefsAction {
    /// Set a preference, e.g. `prefs set defaultMode multi`
    Set { key: String, value: String },

    /// Flip a boolean preference
    Toggle { target: ToggleTarget },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ToggleTarget {
    DarkMode,
    ShowJokes,
}

fn parse_mode(s: &str) -> Result<TaskMode, String> {
    s.parse::<TaskMode>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_with_mode_and_global_flags() {
        let cli = Cli::parse_from([
            "agentdemo",
            "run",
            "погода в Москве",
            "--mode",
            "multi",
            "--no-delay",
            "--seed",
            "7",
            "--json",
        ]);
        assert_eq!(cli.seed, Some(7));
        assert!(cli.json);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.text, "погода в Москве");
                assert_eq!(args.mode, Some(TaskMode::Multi));
                assert!(args.no_delay);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn bad_mode_is_rejected() {
        assert!(Cli::try_parse_from(["agentdemo", "run", "x", "--mode", "turbo"]).is_err());
    }

    #[test]
    fn prefs_subcommands() {
        let cli = Cli::parse_from(["agentdemo", "prefs"]);
        assert!(matches!(cli.command, Commands::Prefs { action: None }));

        let cli = Cli::parse_from(["agentdemo", "prefs", "toggle", "dark-mode"]);
        assert!(matches!(
            cli.command,
            Commands::Prefs {
                action: Some(PrefsAction::Toggle {
                    target: ToggleTarget::DarkMode
                })
            }
        ));

        let cli = Cli::parse_from(["agentdemo", "prefs", "set", "historyLimit", "20"]);
        assert!(matches!(
            cli.command,
            Commands::Prefs { action: Some(PrefsAction::Set { ref key, ref value }) }
                if key == "historyLimit" && value == "20"
        ));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["agentdemo", "-v", "-q", "categories"]).is_err());
    }
}
