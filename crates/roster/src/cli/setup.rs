use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rosterapp::commands::query::{Criteria, Sort, SortKey};
use rosterapp::model::Status;
use std::path::PathBuf;

/// Process arguments.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Interactive in-memory employee roster", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip confirmation questions
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Show the trash section from the start
    #[arg(long)]
    pub trash: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Read configuration from this file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(name = "roster", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Add an employee: add "Ana Silva" Engineer 50000 [status]
    #[command(alias = "a")]
    Add {
        name: String,
        role: String,
        #[arg(allow_hyphen_values = true)]
        salary: String,
        /// Active, "On Leave" or Terminated
        #[arg(default_value = "Active")]
        status: String,
    },

    /// Edit an employee; without flags, every field is asked for
    #[command(alias = "e")]
    Edit {
        /// Index (e.g. 2) or id
        target: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        salary: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },

    /// Set a bonus percent (0-100); asked for when omitted
    Bonus {
        target: String,
        #[arg(allow_negative_numbers = true)]
        percent: Option<i64>,
    },

    /// Move employees to the trash: delete 1 3-5
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        targets: Vec<String>,
    },

    /// Restore trashed employees: restore t1 (bare numbers mean trash indexes)
    Restore {
        #[arg(required = true, num_args = 1..)]
        targets: Vec<String>,
    },

    /// Permanently delete trashed employees
    Purge {
        #[arg(required = true, num_args = 1..)]
        targets: Vec<String>,
    },

    /// Permanently delete everything in the trash
    EmptyTrash,

    /// Move everyone with salary at or below a threshold to the trash
    Prune {
        #[arg(allow_negative_numbers = true)]
        threshold: Option<i64>,
    },

    /// Filter and sort the table (replaces the current filter)
    #[command(alias = "f")]
    Filter(FilterArgs),

    /// Clear the current filter
    Clear,

    /// Show the current view
    #[command(alias = "ls")]
    List {
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or hide the trash section
    Trash,

    /// Show counts and payroll totals
    Summary,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Name contains (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Exact role (case-insensitive)
    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub status: Option<Status>,

    #[arg(long)]
    pub min_salary: Option<u64>,

    #[arg(long)]
    pub max_salary: Option<u64>,

    /// Minimum bonus amount
    #[arg(long)]
    pub min_bonus: Option<u64>,

    /// Maximum bonus amount
    #[arg(long)]
    pub max_bonus: Option<u64>,

    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SortArg {
    Name,
    Role,
    Salary,
    Bonus,
    Status,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Role => SortKey::Role,
            SortArg::Salary => SortKey::Salary,
            SortArg::Bonus => SortKey::Bonus,
            SortArg::Status => SortKey::Status,
        }
    }
}

impl From<FilterArgs> for Criteria {
    fn from(args: FilterArgs) -> Self {
        Criteria {
            name_contains: args.name,
            role: args.role,
            status: args.status,
            salary_min: args.min_salary,
            salary_max: args.max_salary,
            bonus_min: args.min_bonus,
            bonus_max: args.max_bonus,
            sort: args.sort.map(|key| Sort {
                key: key.into(),
                descending: args.desc,
            }),
        }
    }
}

/// Splits a shell line and parses it. `Ok(None)` for blank lines and comments.
///
/// Help requests come back as errors too; `clap::Error::print` sends those to stdout.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let words = shlex::split(trimmed)
        .ok_or_else(|| clap::Error::raw(ErrorKind::InvalidValue, "Unbalanced quotes\n"))?;
    ShellLine::try_parse_from(words).map(|parsed| Some(parsed.command))
}
