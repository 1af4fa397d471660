//! Command dispatch module for routing CLI commands to their handlers.

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for dispatched commands.
pub trait CliCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// A parsed command with its borrowed arguments.
pub enum Dispatch<'a> {
    Search {
        food: &'a [String],
        location: &'a [String],
        course: &'a [String],
        group: &'a [String],
        exclude: &'a [String],
    },
    Find {
        terms: &'a [String],
    },
    Ingest {
        file: &'a std::path::Path,
    },
    Locations,
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> Dispatch<'a> {
    /// Creates a dispatch from the parsed CLI.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::Search {
                food,
                location,
                course,
                group,
                exclude,
            }) => Self::Search {
                food,
                location,
                course,
                group,
                exclude,
            },
            Some(Commands::Find { terms }) => Self::Find { terms },
            Some(Commands::Ingest { file }) => Self::Ingest { file },
            Some(Commands::Locations) => Self::Locations,
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
            None => Self::Help,
        }
    }

    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Find { .. } => "find",
            Self::Ingest { .. } => "ingest",
            Self::Locations => "locations",
            Self::Config(_) => "config",
            Self::Completions(_) => "completions",
            Self::Help => "help",
        }
    }
}

impl CliCommand for Dispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Search {
                food,
                location,
                course,
                group,
                exclude,
            } => {
                let opts = commands::search::SearchOptions {
                    foods: food.to_vec(),
                    locations: location.to_vec(),
                    courses: course.to_vec(),
                    groups: group.to_vec(),
                    exclude: exclude.to_vec(),
                };
                commands::search::execute(ctx, &opts)
            }
            Self::Find { terms } => commands::find::execute(ctx, terms),
            Self::Ingest { file } => commands::ingest::execute(ctx, file),
            Self::Locations => commands::locations::execute(ctx),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("sust - search UCSC dining-hall menus");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_search_dispatch_borrows_tokens() {
        let cli = Cli::parse_from(["sust", "search", "-f", "potato", "-x", "nuts"]);
        match Dispatch::from_cli(&cli) {
            Dispatch::Search { food, exclude, location, .. } => {
                assert_eq!(food, ["potato"]);
                assert_eq!(exclude, ["nuts"]);
                assert!(location.is_empty());
            }
            other => panic!("expected search dispatch, got {}", other.name()),
        }
    }

    #[test]
    fn test_no_command_is_help() {
        let cli = Cli::parse_from(["sust"]);
        assert_eq!(Dispatch::from_cli(&cli).name(), "help");
    }

    #[test]
    fn test_names() {
        let cli = Cli::parse_from(["sust", "f", "soup"]);
        assert_eq!(Dispatch::from_cli(&cli).name(), "find");

        let cli = Cli::parse_from(["sust", "config", "path"]);
        assert_eq!(Dispatch::from_cli(&cli).name(), "config");
    }
}
