use super::presenter::TerminalPresenter;
use super::render::Renderer;
use super::setup::{parse_line, Cli, ShellCommand};
use clap::Parser;
use console::Term;
use rosterapp::api::RosterApi;
use rosterapp::commands::CmdMessage;
use rosterapp::config::RosterConfig;
use rosterapp::error::{Result, RosterError};
use rosterapp::model::{EditRequest, EmployeeDraft};
use rosterapp::session::{Intent, Outcome, Session};
use rosterapp::store::memory::InMemoryStore;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

type Shell = Session<InMemoryStore, TerminalPresenter>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RosterConfig::load(cli.config.as_deref())?;
    let interactive = io::stdin().is_terminal();
    let use_color =
        config.color && !cli.no_color && Term::stdout().features().colors_supported();
    tracing::debug!(?config, interactive, use_color, "starting shell");

    let renderer = Renderer::new(use_color).map_err(|e| RosterError::Api(e.to_string()))?;
    let presenter = TerminalPresenter::new(renderer, Box::new(io::stdin().lock()), interactive);
    let mut session = Session::new(RosterApi::new(InMemoryStore::new()), presenter)
        .with_confirm(config.confirm && !cli.yes)
        .with_show_trash(config.show_trash || cli.trash);

    if interactive {
        println!(
            "roster {}: type `help` for commands, `quit` to leave.",
            env!("CARGO_PKG_VERSION")
        );
        session.handle(Intent::Refresh)?;
    }

    while let Some(line) = session.presenter_mut().read_command() {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };
        if matches!(command, ShellCommand::Quit) {
            break;
        }
        if let Err(e) = execute(&mut session, command) {
            tracing::debug!(error = %e, "command failed");
            session.presenter().print_errors(&error_messages(&e));
        }
    }
    Ok(())
}

/// `ROSTER_LOG` takes precedence; otherwise warnings only, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::try_from_env("ROSTER_LOG")
        .unwrap_or_else(|_| EnvFilter::default().add_directive(fallback.into()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn execute(session: &mut Shell, command: ShellCommand) -> Result<()> {
    let intent = match command {
        ShellCommand::Add {
            name,
            role,
            salary,
            status,
        } => Intent::Submit(EmployeeDraft::new(name, role, salary, status)),
        ShellCommand::Edit {
            target,
            name,
            role,
            salary,
            status,
        } => Intent::Edit {
            target,
            request: EditRequest {
                name,
                role,
                salary,
                status,
            },
        },
        ShellCommand::Bonus { target, percent } => Intent::SetBonus { target, percent },
        ShellCommand::Delete { targets } => Intent::Delete(targets),
        ShellCommand::Restore { targets } => Intent::Restore(targets),
        ShellCommand::Purge { targets } => Intent::Purge(targets),
        ShellCommand::EmptyTrash => Intent::EmptyTrash,
        ShellCommand::Prune { threshold } => Intent::DeleteBelow(threshold),
        ShellCommand::Filter(args) => Intent::Filter(args.into()),
        ShellCommand::Clear => Intent::ClearFilter,
        ShellCommand::Trash => Intent::ToggleTrash,
        ShellCommand::List { json: true } => {
            let view = session.view()?;
            session.presenter().print_json(&view);
            return Ok(());
        }
        ShellCommand::List { json: false } => Intent::Refresh,
        ShellCommand::Summary => {
            let result = session.api().summary()?;
            if let Some(summary) = result.summary {
                session.presenter().print_summary(&summary);
            }
            return Ok(());
        }
        ShellCommand::Quit => return Ok(()),
    };

    if let Outcome::Cancelled = session.handle(intent)? {
        session
            .presenter()
            .print_messages(&[CmdMessage::info("Cancelled.")]);
    }
    Ok(())
}

/// Validation failures list one line per field; everything else is a single line.
fn error_messages(err: &RosterError) -> Vec<CmdMessage> {
    match err {
        RosterError::Validation(errors) => errors
            .iter()
            .map(|(field, message)| CmdMessage::error(format!("{}: {}", field, message)))
            .collect(),
        other => vec![CmdMessage::error(other.to_string())],
    }
}
