use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use mars_rover_core::{config::ProgramConfiguration, Command, CommandBatch};

/// Commands executed when none are given on the command line.
const DEFAULT_COMMANDS: [Command; 3] = [Command::Backward, Command::Forward, Command::Left];

/// Encodings accepted for mission files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MissionFormat {
    Toml,
    Json,
}

impl MissionFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Reads and decodes the mission file at `path`.
pub(crate) fn load(path: &Path) -> Result<ProgramConfiguration> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read mission file at {}", path.display()))?;
    parse(&contents, MissionFormat::from_path(path))
        .with_context(|| format!("invalid mission file {}", path.display()))
}

fn parse(contents: &str, format: MissionFormat) -> Result<ProgramConfiguration> {
    let config = match format {
        MissionFormat::Toml => {
            toml::from_str(contents).context("failed to parse mission toml contents")?
        }
        MissionFormat::Json => {
            serde_json::from_str(contents).context("failed to parse mission json contents")?
        }
    };
    Ok(config)
}

/// Builds the batch to run from positional command-line arguments.
pub(crate) fn command_batch(arguments: &[String]) -> Result<CommandBatch> {
    if arguments.is_empty() {
        return Ok(CommandBatch::from_first(
            DEFAULT_COMMANDS[0],
            DEFAULT_COMMANDS[1..].iter().copied(),
        ));
    }

    let commands = Command::parse_sequence(&arguments.join(" "))?;
    let Some(batch) = CommandBatch::new(commands) else {
        bail!("no commands found in {:?}", arguments.join(" "));
    };
    Ok(batch)
}
