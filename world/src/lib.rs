#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Planet model and rover placement for the Mars Rover workspace.
//!
//! A [`Planet`] is a toroidal grid: coordinates leaving one edge re-enter on
//! the opposite edge. [`validate_position`] is the single gate through which
//! raw coordinates become a [`Position`], wrapping first and checking
//! obstacles second.

use std::{collections::BTreeSet, sync::Arc};

use mars_rover_core::{
    config::{PlanetConfiguration, RoverConfiguration},
    ConfigError, Coordinate, ObstacleHit, Orientation,
};
use serde::Serialize;

/// Immutable wrapping grid with a fixed set of blocked cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Planet {
    width: i64,
    height: i64,
    obstacles: BTreeSet<Coordinate>,
}

impl Planet {
    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> i64 {
        self.height
    }

    /// Iterator over blocked cells in ascending coordinate order.
    pub fn obstacles(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.obstacles.iter().copied()
    }

    /// Reports whether the provided in-grid coordinate is blocked.
    #[must_use]
    pub fn is_obstacle(&self, coordinate: Coordinate) -> bool {
        self.obstacles.contains(&coordinate)
    }

    /// Wraps raw coordinates onto the grid using true modulo.
    #[must_use]
    pub fn wrap(&self, x: i64, y: i64) -> Coordinate {
        Coordinate::new(x.rem_euclid(self.width), y.rem_euclid(self.height))
    }

    fn contains(&self, coordinate: Coordinate) -> bool {
        (0..self.width).contains(&coordinate.x) && (0..self.height).contains(&coordinate.y)
    }
}

/// Validates the configuration and builds an immutable planet.
pub fn make_planet(config: &PlanetConfiguration) -> Result<Planet, ConfigError> {
    if config.width <= 0 || config.height <= 0 {
        return Err(ConfigError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }

    let mut planet = Planet {
        width: config.width,
        height: config.height,
        obstacles: BTreeSet::new(),
    };

    for &obstacle in &config.obstacles {
        if !planet.contains(obstacle) {
            return Err(ConfigError::ObstacleOutOfBounds {
                obstacle,
                width: config.width,
                height: config.height,
            });
        }
        let _ = planet.obstacles.insert(obstacle);
    }

    Ok(planet)
}

/// Coordinate that lies within the grid of the planet it was validated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Position {
    coordinate: Coordinate,
}

impl Position {
    /// Horizontal component in `[0, width)`.
    #[must_use]
    pub const fn x(&self) -> i64 {
        self.coordinate.x
    }

    /// Vertical component in `[0, height)`.
    #[must_use]
    pub const fn y(&self) -> i64 {
        self.coordinate.y
    }

    /// The underlying coordinate pair.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// Wraps `(x, y)` onto the planet and rejects cells occupied by obstacles.
///
/// The returned [`ObstacleHit`] carries the wrapped coordinate, i.e. the cell
/// the rover would have occupied.
pub fn validate_position(planet: &Planet, x: i64, y: i64) -> Result<Position, ObstacleHit> {
    let coordinate = planet.wrap(x, y);
    if planet.is_obstacle(coordinate) {
        return Err(ObstacleHit::at(coordinate));
    }
    Ok(Position { coordinate })
}

/// Immutable snapshot of a rover on its planet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Rover {
    planet: Arc<Planet>,
    position: Position,
    orientation: Orientation,
}

impl Rover {
    /// Places a rover at an already validated position.
    #[must_use]
    pub fn new(planet: Arc<Planet>, position: Position, orientation: Orientation) -> Self {
        Self {
            planet,
            position,
            orientation,
        }
    }

    /// Planet the rover is driving on.
    #[must_use]
    pub fn planet(&self) -> &Arc<Planet> {
        &self.planet
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Current orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// Lands a rover on the planet at its configured placement.
///
/// The landing coordinate is wrapped onto the grid but is not checked against
/// obstacles; a rover may therefore start on a blocked cell.
#[must_use]
pub fn make_rover(planet: Arc<Planet>, config: &RoverConfiguration) -> Rover {
    let coordinate = planet.wrap(config.position.x, config.position.y);
    Rover::new(planet, Position { coordinate }, config.orientation)
}
