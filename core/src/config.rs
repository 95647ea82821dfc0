//! Mission configuration accepted by the program system.

use serde::{Deserialize, Serialize};

use crate::{int, Coordinate, Orientation};

/// Complete description of a mission: the planet and where the rover lands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramConfiguration {
    /// Planet the rover explores.
    pub planet: PlanetConfiguration,
    /// Initial rover placement.
    pub rover: RoverConfiguration,
}

impl Default for ProgramConfiguration {
    /// A 5x4 planet without obstacles and a rover at `(4, 0)` facing west.
    fn default() -> Self {
        Self {
            planet: PlanetConfiguration {
                width: int::FIVE,
                height: int::FOUR,
                obstacles: Vec::new(),
            },
            rover: RoverConfiguration {
                position: Coordinate::new(int::FOUR, int::ZERO),
                orientation: Orientation::West,
            },
        }
    }
}

/// Unvalidated planet description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanetConfiguration {
    /// Number of columns; must be positive.
    pub width: i64,
    /// Number of rows; must be positive.
    pub height: i64,
    /// Blocked cells, each within the grid.
    #[serde(default)]
    pub obstacles: Vec<Coordinate>,
}

/// Unvalidated rover placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoverConfiguration {
    /// Landing coordinate.
    pub position: Coordinate,
    /// Landing orientation.
    pub orientation: Orientation,
}

#[cfg(test)]
mod tests {
    use super::{PlanetConfiguration, ProgramConfiguration, RoverConfiguration};
    use crate::{Coordinate, Orientation};

    #[test]
    fn default_mission_matches_reference_landing() {
        let config = ProgramConfiguration::default();
        assert_eq!(config.planet.width, 5);
        assert_eq!(config.planet.height, 4);
        assert!(config.planet.obstacles.is_empty());
        assert_eq!(config.rover.position, Coordinate::new(4, 0));
        assert_eq!(config.rover.orientation, Orientation::West);
    }

    #[test]
    fn configuration_round_trips_through_bincode() {
        let config = ProgramConfiguration {
            planet: PlanetConfiguration {
                width: 8,
                height: 3,
                obstacles: vec![Coordinate::new(1, 2), Coordinate::new(7, 0)],
            },
            rover: RoverConfiguration {
                position: Coordinate::new(0, 0),
                orientation: Orientation::South,
            },
        };

        let bytes = bincode::serialize(&config).expect("serialize");
        let restored: ProgramConfiguration = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, config);
    }
}
