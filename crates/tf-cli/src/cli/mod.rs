use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tfl` binary.
#[derive(Debug, Parser)]
#[command(name = "tfl", version, about = "TaskFlow - team task tracking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .taskflow)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Act as this user ID instead of `identity.user_id`
    #[arg(long = "as", global = true, value_name = "USER_ID")]
    pub acting_as: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            acting_as: self.acting_as.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::TaskCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "tfl", "--format", "table", "--limit", "10", "--verbose", "whoami",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Whoami));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tfl", "whoami", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["tfl", "--format", "xml", "whoami"]).is_err());
    }

    #[test]
    fn acting_as_is_global() {
        let cli = Cli::try_parse_from(["tfl", "task", "list", "--mine", "--as", "usr-0badc0de"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.acting_as.as_deref(), Some("usr-0badc0de"));
        assert!(matches!(
            cli.command,
            Commands::Task {
                action: TaskCommands::List { mine: true, .. }
            }
        ));
    }

    #[test]
    fn attach_add_takes_many_paths() {
        let cli = Cli::try_parse_from(["tfl", "attach", "add", "tsk-1", "a.png", "b.pdf"])
            .expect("cli should parse");
        let Commands::Attach {
            action: super::subcommands::AttachCommands::Add { task_id, paths },
        } = cli.command
        else {
            panic!("expected attach add");
        };
        assert_eq!(task_id, "tsk-1");
        assert_eq!(paths, vec!["a.png", "b.pdf"]);
    }

    #[test]
    fn project_flag_is_copied() {
        let cli = Cli::try_parse_from(["tfl", "--project", "/tmp/demo", "stats"])
            .expect("cli should parse");
        assert_eq!(cli.global_flags().project.as_deref(), Some("/tmp/demo"));
    }
}
