//! Command dispatch logic for chotha

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use chotha_core::error::{ChothaError, Result};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(ChothaError::UsageError(
            "no command given (see `chotha --help`)".to_string(),
        )),

        Some(Commands::Generate { source, level }) => {
            commands::generate::execute(cli, source, *level, start)
        }

        Some(Commands::Segment { source }) => {
            commands::segment::execute(cli, source.as_deref(), start)
        }

        Some(Commands::Compact { level }) => commands::compact::execute(cli, *level, start),
    }
}
