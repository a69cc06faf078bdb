//! Subcommand execution

use std::io::{self, BufRead};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::EquipmentManager;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::Command;
use crate::parser::CommandParser;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");
    if !settings.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Some(Commands::Parse { words }) => cmd_parse(&words.join(" "), &settings),
        Some(Commands::Run { lines }) => cmd_run(lines, &settings),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(&settings),
            ConfigCommands::Path => cmd_config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "eqparse", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn report_ignored(command: &Command, settings: &Settings) {
    if !settings.report_ignored_tags {
        return;
    }
    if let Command::Update(update) = command {
        for ignored in &update.ignored {
            output::warning(ignored);
        }
    }
}

#[instrument(skip(settings))]
fn cmd_parse(line: &str, settings: &Settings) -> CliResult<()> {
    let command = CommandParser::new().parse_command(line);
    report_ignored(&command, settings);
    match &command {
        Command::Incorrect(incorrect) => Err(CliError::Usage(incorrect.message.clone())),
        valid => {
            output::command(valid);
            Ok(())
        }
    }
}

fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader
        .lines()
        .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
        .collect()
}

/// Execute `lines` in order against `manager`, printing each outcome.
///
/// Returns the number of lines that failed to parse or execute.
pub fn run_lines(lines: &[String], manager: &mut EquipmentManager, settings: &Settings) -> usize {
    let parser = CommandParser::new();
    let mut failed = 0;
    for line in lines {
        let command = parser.parse_command(line);
        report_ignored(&command, settings);
        if let Command::Incorrect(incorrect) = &command {
            output::outcome(false, &incorrect.message);
            failed += 1;
            continue;
        }
        match manager.execute(&command) {
            Ok(result) => {
                output::outcome(true, &result.message);
                if matches!(command, Command::Check(_) | Command::List(_)) {
                    for equipment in &result.equipment {
                        output::detail(equipment);
                    }
                }
            }
            Err(e) => {
                output::outcome(false, &e);
                failed += 1;
            }
        }
    }
    failed
}

#[instrument(skip(settings))]
fn cmd_run(lines: &[String], settings: &Settings) -> CliResult<()> {
    let lines = if lines.is_empty() {
        read_lines(io::stdin().lock())?
    } else {
        lines.to_vec()
    };
    let mut manager = EquipmentManager::new();
    let failed = run_lines(&lines, &mut manager, settings);
    debug!(total = lines.len(), failed, "batch finished");
    if failed > 0 {
        return Err(CliError::Batch {
            failed,
            total: lines.len(),
        });
    }
    Ok(())
}

fn cmd_config_show(settings: &Settings) -> CliResult<()> {
    output::plain(&settings.to_toml()?);
    Ok(())
}

fn cmd_config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::plain(&path.display()),
        None => output::warning("no config directory available on this platform"),
    }
    Ok(())
}
