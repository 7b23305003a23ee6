use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::Organization;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Display { depth }) => _display(depth.unwrap_or(settings.depth)),
        Some(Commands::Tree) => _tree(),
        Some(Commands::Misuse { name }) => _misuse(name),
        Some(Commands::Config) => _config(settings),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Err(CliError::Usage(
            "no command given, see 'comptree --help'".to_string(),
        )),
    }
}

#[instrument]
fn _display(depth: usize) -> CliResult<()> {
    let org = Organization::sample()?;
    org.display(depth)?;
    Ok(())
}

#[instrument]
fn _tree() -> CliResult<()> {
    let org = Organization::sample()?;
    output::info(&org.outline()?);
    Ok(())
}

#[instrument]
fn _misuse(name: &str) -> CliResult<()> {
    let mut org = Organization::sample()?;
    debug!("attaching '{}' below device1", name);
    org.attach_to_device(name)?;
    Ok(())
}

#[instrument]
fn _config(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
