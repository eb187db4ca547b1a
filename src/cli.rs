use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Fieldtime League Scheduling Admin Console
///
/// Commissioner's terminal console for the Fieldtime scheduling API:
/// generate CSV import templates, import and review availability
/// allocations, bulk-delete allocation records, generate concrete schedule
/// slots from allocation rules, and approve or reject coach-submitted
/// practice-time requests.
///
/// All validation, conflict detection, and persistence happen on the API
/// side; this console orchestrates the calls and renders the results.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Update API domain in config.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN"
    )]
    pub new_api_domain: Option<String>,

    /// Update the league identifier in config (used in export filenames).
    #[arg(long = "set-league", help_heading = "Configuration", value_name = "LEAGUE_ID")]
    pub new_league_id: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Specify a custom log file path for this run only.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Echo logs to stdout at debug level in addition to the log file.
    #[arg(long = "verbose", short = 'v', help_heading = "Debug")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a blank allocation CSV template for all active divisions and fields
    Template {
        /// Directory to write the template into (default: current directory)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Upload an allocation CSV for bulk upsert
    Import {
        /// CSV file to upload
        file: PathBuf,
    },

    /// List allocations, optionally filtered by scope and field
    List {
        /// Scope filter: LEAGUE or a division code
        #[arg(long)]
        scope: Option<String>,
        /// Field key filter
        #[arg(long)]
        field: Option<String>,
    },

    /// Bulk-delete allocations for a scope (requires typed confirmation)
    Clear {
        /// Scope to clear: LEAGUE or a division code (required)
        #[arg(long)]
        scope: String,
        /// Field key filter
        #[arg(long)]
        field: Option<String>,
        /// Start of the date range (default: season start)
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,
        /// End of the date range (default: season end)
        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,
        /// Supply the confirmation phrase non-interactively
        #[arg(long, value_name = "PHRASE")]
        confirm_phrase: Option<String>,
    },

    /// Dry-run slot generation for a division; commits nothing
    Preview {
        /// Division to generate slots for
        #[arg(long)]
        division: String,
        /// Field key filter
        #[arg(long)]
        field: Option<String>,
        /// Start of the date range (default: season start)
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,
        /// End of the date range (default: season end)
        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,
    },

    /// Commit slot generation for a division
    Apply {
        /// Division to generate slots for
        #[arg(long)]
        division: String,
        /// Field key filter
        #[arg(long)]
        field: Option<String>,
        /// Start of the date range (default: season start)
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,
        /// End of the date range (default: season end)
        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,
    },

    /// List practice-time requests, optionally filtered by status
    Requests {
        /// Status filter: Pending, Approved, or Rejected (default: all)
        #[arg(long)]
        status: Option<String>,
    },

    /// Approve a pending practice request
    Approve {
        /// Request id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Reject a pending practice request
    Reject {
        /// Request id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Whether this invocation only manages configuration (no API calls).
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_league_id.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_filters() {
        let args = Args::parse_from(["fieldtime_admin", "list", "--scope", "10U", "--field", "f1"]);
        match args.command {
            Some(Command::List { scope, field }) => {
                assert_eq!(scope.as_deref(), Some("10U"));
                assert_eq!(field.as_deref(), Some("f1"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_clear_requires_scope() {
        let result = Args::try_parse_from(["fieldtime_admin", "clear"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_approve_with_yes() {
        let args = Args::parse_from(["fieldtime_admin", "approve", "pr-7", "-y"]);
        match args.command {
            Some(Command::Approve { id, yes }) => {
                assert_eq!(id, "pr-7");
                assert!(yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_operation_detection() {
        let args = Args::parse_from(["fieldtime_admin", "--list-config"]);
        assert!(is_config_operation(&args));
        assert!(args.command.is_none());

        let args = Args::parse_from(["fieldtime_admin", "requests"]);
        assert!(!is_config_operation(&args));
    }
}
