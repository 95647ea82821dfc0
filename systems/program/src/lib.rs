#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic program system that folds rover commands over immutable state.
//!
//! Every transition consumes a borrowed [`ProgramState`] and yields a brand new
//! snapshot, so earlier states stay valid for inspection. A collision never
//! produces a partial state: the caller receives the pre-move snapshot inside
//! [`NextPositionObstacle`] instead.

use std::sync::Arc;

use log::debug;
use mars_rover_core::{
    config::ProgramConfiguration, int, Command, CommandBatch, ConfigError, Coordinate,
    ObstacleHit, Orientation,
};
use mars_rover_world::{make_planet, make_rover, validate_position, Position, Rover};
use serde::Serialize;

/// One recorded placement in a rover's movement history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Cell occupied after the move.
    pub position: Position,
    /// Orientation after the move.
    pub orientation: Orientation,
}

/// Current rover snapshot together with every placement it has held.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProgramState {
    rover: Rover,
    history: Vec<HistoryEntry>,
}

impl ProgramState {
    fn initial(rover: Rover) -> Self {
        let history = vec![HistoryEntry {
            position: rover.position(),
            orientation: rover.orientation(),
        }];
        Self { rover, history }
    }

    fn advanced(&self, position: Position, orientation: Orientation) -> Self {
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(HistoryEntry {
            position,
            orientation,
        });

        Self {
            rover: Rover::new(Arc::clone(self.rover.planet()), position, orientation),
            history,
        }
    }

    /// Rover snapshot after the most recent successful command.
    #[must_use]
    pub fn rover(&self) -> &Rover {
        &self.rover
    }

    /// Placements in chronological order, starting with the landing.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Shorthand for the rover's current coordinate.
    #[must_use]
    pub fn position(&self) -> Coordinate {
        self.rover.position().coordinate()
    }

    /// Shorthand for the rover's current orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.rover.orientation()
    }
}

/// A command would have driven the rover into an obstacle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error(
    "rover at {} facing {} hit an {obstacle_hit}",
    .previous_state.position(),
    .previous_state.orientation()
)]
pub struct NextPositionObstacle {
    /// State before the rejected command.
    pub previous_state: ProgramState,
    /// Cell the rover attempted to enter.
    pub obstacle_hit: ObstacleHit,
}

/// Any failure a command program can end with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ProgramError {
    /// The mission configuration was rejected before moving.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A command collided with an obstacle.
    #[error(transparent)]
    Obstacle(#[from] NextPositionObstacle),
}

/// Builds the planet and lands the rover, recording the landing as history.
pub fn begin(config: &ProgramConfiguration) -> Result<ProgramState, ConfigError> {
    let planet = Arc::new(make_planet(&config.planet)?);
    let rover = make_rover(planet, &config.rover);
    debug!(
        "rover landed at {} facing {}",
        rover.position().coordinate(),
        rover.orientation()
    );
    Ok(ProgramState::initial(rover))
}

/// World direction a rover travels when executing `command` while facing
/// `orientation`. The rover ends up facing this direction.
#[must_use]
pub const fn travel_direction(command: Command, orientation: Orientation) -> Orientation {
    match command {
        Command::Forward => orientation,
        Command::Backward => orientation.opposite(),
        Command::Left => match orientation {
            Orientation::North => Orientation::West,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
            Orientation::West => Orientation::South,
        },
        Command::Right => match orientation {
            Orientation::North => Orientation::East,
            Orientation::South => Orientation::West,
            Orientation::East => Orientation::South,
            Orientation::West => Orientation::North,
        },
    }
}

const fn step_toward(from: Coordinate, heading: Orientation) -> (i64, i64) {
    match heading {
        Orientation::North => (from.x, int::increment(from.y)),
        Orientation::South => (from.x, int::decrement(from.y)),
        Orientation::East => (int::increment(from.x), from.y),
        Orientation::West => (int::decrement(from.x), from.y),
    }
}

/// Applies a single command, returning the next state or the collision.
pub fn move_rover(
    command: Command,
    state: &ProgramState,
) -> Result<ProgramState, NextPositionObstacle> {
    let heading = travel_direction(command, state.orientation());
    let (x, y) = step_toward(state.position(), heading);

    match validate_position(state.rover.planet(), x, y) {
        Ok(position) => {
            debug!(
                "{command:?}: {} -> {} facing {heading}",
                state.position(),
                position.coordinate()
            );
            Ok(state.advanced(position, heading))
        }
        Err(obstacle_hit) => {
            debug!(
                "{command:?} from {} facing {} blocked by obstacle at {}",
                state.position(),
                state.orientation(),
                obstacle_hit.position
            );
            Err(NextPositionObstacle {
                previous_state: state.clone(),
                obstacle_hit,
            })
        }
    }
}

/// Chains one more command onto an earlier result, passing failures through.
pub fn next_move<E>(
    previous: Result<ProgramState, E>,
    command: Command,
) -> Result<ProgramState, ProgramError>
where
    E: Into<ProgramError>,
{
    let state = previous.map_err(Into::into)?;
    Ok(move_rover(command, &state)?)
}

/// Folds commands over `initial` in order, stopping at the first collision.
///
/// Commands after a collision are never pulled from the iterator.
pub fn run<I>(initial: ProgramState, commands: I) -> Result<ProgramState, NextPositionObstacle>
where
    I: IntoIterator<Item = Command>,
{
    commands
        .into_iter()
        .try_fold(initial, |state, command| move_rover(command, &state))
}

/// Executes a whole batch on top of the result of [`begin`].
///
/// A configuration error is returned unchanged without evaluating any command.
pub fn run_batch(
    batch: &CommandBatch,
    initial: Result<ProgramState, ConfigError>,
) -> Result<ProgramState, ProgramError> {
    let state = initial?;
    Ok(run(state, batch.iter())?)
}
