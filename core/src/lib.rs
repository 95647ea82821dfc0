#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Mars Rover workspace.
//!
//! This crate defines the vocabulary that connects the CLI adapter, the
//! planet model and the program system. Adapters decode a
//! [`config::ProgramConfiguration`] and a sequence of [`Command`] values, the
//! world crate turns the configuration into a validated planet and rover, and
//! the program system folds commands over immutable state snapshots. Failures
//! surface as [`ConfigError`] during setup and [`ObstacleHit`] during movement.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod config;
pub mod int;

/// Location on the planet surface expressed as signed column and row values.
///
/// Raw coordinates may lie outside the grid; the world crate wraps them before
/// they are bound to a planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Horizontal component, growing toward the east.
    pub x: i64,
    /// Vertical component, growing toward the north.
    pub y: i64,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass direction a rover faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Facing toward increasing `y`.
    North,
    /// Facing toward decreasing `y`.
    South,
    /// Facing toward increasing `x`.
    East,
    /// Facing toward decreasing `x`.
    West,
}

impl Orientation {
    /// Every orientation in declaration order.
    pub const ALL: [Orientation; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the orientation pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        };
        f.write_str(name)
    }
}

/// Movement commands a rover understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Step one cell in the facing direction.
    Forward,
    /// Step one cell away from the facing direction, turning around.
    Backward,
    /// Step one cell to the rover's left, turning to face it.
    Left,
    /// Step one cell to the rover's right, turning to face it.
    Right,
}

impl Command {
    /// Every command in declaration order.
    pub const ALL: [Command; 4] = [Self::Forward, Self::Backward, Self::Left, Self::Right];

    /// Parses a command sequence from free-form text.
    ///
    /// Tokens are separated by whitespace or commas. Each token is either a
    /// single command (`forward`, `F`, ...) or a compact run of command
    /// letters such as `BFL`.
    pub fn parse_sequence(text: &str) -> Result<Vec<Command>, ParseCommandError> {
        let mut commands = Vec::new();
        for token in text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            if let Ok(command) = token.parse::<Command>() {
                commands.push(command);
                continue;
            }

            for letter in token.chars() {
                let command = Self::from_letter(letter)
                    .ok_or_else(|| ParseCommandError::new(token))?;
                commands.push(command);
            }
        }
        Ok(commands)
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'F' | 'f' => Some(Self::Forward),
            'B' | 'b' => Some(Self::Backward),
            'L' | 'l' => Some(Self::Left),
            'R' | 'r' => Some(Self::Right),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let mut letters = trimmed.chars();
        if let (Some(letter), None) = (letters.next(), letters.next()) {
            return Self::from_letter(letter).ok_or_else(|| ParseCommandError::new(trimmed));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "forward" => Ok(Self::Forward),
            "backward" => Ok(Self::Backward),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseCommandError::new(trimmed)),
        }
    }
}

/// Reported when text does not name a known command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown command `{token}`; expected forward, backward, left, right or F/B/L/R")]
pub struct ParseCommandError {
    token: String,
}

impl ParseCommandError {
    fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }

    /// The token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Non-empty ordered sequence of commands executed as a single batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandBatch {
    commands: Vec<Command>,
}

impl CommandBatch {
    /// Creates a batch from the provided commands, or `None` when empty.
    #[must_use]
    pub fn new(commands: Vec<Command>) -> Option<Self> {
        if commands.is_empty() {
            None
        } else {
            Some(Self { commands })
        }
    }

    /// Creates a batch from a leading command followed by any number of others.
    #[must_use]
    pub fn from_first(first: Command, rest: impl IntoIterator<Item = Command>) -> Self {
        let mut commands = vec![first];
        commands.extend(rest);
        Self { commands }
    }

    /// Iterator over the commands in execution order.
    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        self.commands.iter().copied()
    }

    /// Number of commands in the batch. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Commands in execution order.
    #[must_use]
    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }
}

/// Records the cell a rover struck while attempting to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("obstacle at {position}")]
pub struct ObstacleHit {
    /// Wrapped coordinate the rover attempted to occupy.
    pub position: Coordinate,
}

impl ObstacleHit {
    /// Creates a hit for the provided wrapped coordinate.
    #[must_use]
    pub const fn at(position: Coordinate) -> Self {
        Self { position }
    }
}

/// Reasons a mission configuration is rejected before any command runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind")]
pub enum ConfigError {
    /// Planet width or height is zero or negative.
    #[error("planet dimensions {width}x{height} must both be positive")]
    InvalidDimensions {
        /// Requested planet width.
        width: i64,
        /// Requested planet height.
        height: i64,
    },
    /// An obstacle lies outside the planet grid.
    #[error("obstacle {obstacle} lies outside the {width}x{height} planet")]
    ObstacleOutOfBounds {
        /// Offending obstacle coordinate as configured.
        obstacle: Coordinate,
        /// Configured planet width.
        width: i64,
        /// Configured planet height.
        height: i64,
    },
}
