//! Property-based checks of the movement laws on obstacle-free planets.
//!
//! Run with: cargo test -p mars-rover-system-program --test laws

use mars_rover_core::{
    config::{PlanetConfiguration, ProgramConfiguration, RoverConfiguration},
    Command, Coordinate, Orientation,
};
use mars_rover_system_program::{begin, move_rover, run, ProgramState};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop::sample::select(Command::ALL.to_vec())
}

/// Planet dimensions together with a landing cell inside the grid.
fn arb_landing() -> impl Strategy<Value = (i64, i64, i64, i64)> {
    (1_i64..12, 1_i64..12)
        .prop_flat_map(|(width, height)| (Just(width), Just(height), 0..width, 0..height))
}

fn open_planet(width: i64, height: i64, x: i64, y: i64, orientation: Orientation) -> ProgramState {
    begin(&ProgramConfiguration {
        planet: PlanetConfiguration {
            width,
            height,
            obstacles: Vec::new(),
        },
        rover: RoverConfiguration {
            position: Coordinate::new(x, y),
            orientation,
        },
    })
    .expect("generated dimensions are positive")
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn positions_always_stay_on_the_grid(
        (width, height, x, y) in arb_landing(),
        orientation in arb_orientation(),
        commands in prop::collection::vec(arb_command(), 1..40),
    ) {
        let state = run(open_planet(width, height, x, y, orientation), commands.clone())
            .expect("no obstacles to hit");

        prop_assert_eq!(state.history().len(), commands.len() + 1);
        for entry in state.history() {
            prop_assert!((0..width).contains(&entry.position.x()));
            prop_assert!((0..height).contains(&entry.position.y()));
        }
    }

    #[test]
    fn backward_equals_forward_from_opposite(
        (width, height, x, y) in arb_landing(),
        orientation in arb_orientation(),
    ) {
        let backward = move_rover(
            Command::Backward,
            &open_planet(width, height, x, y, orientation),
        )
        .expect("no obstacles to hit");
        let forward = move_rover(
            Command::Forward,
            &open_planet(width, height, x, y, orientation.opposite()),
        )
        .expect("no obstacles to hit");

        prop_assert_eq!(backward.position(), forward.position());
        prop_assert_eq!(backward.orientation(), orientation.opposite());
    }

    #[test]
    fn left_then_right_restores_orientation(
        (width, height, x, y) in arb_landing(),
        orientation in arb_orientation(),
    ) {
        let start = open_planet(width, height, x, y, orientation);
        let left = move_rover(Command::Left, &start).expect("no obstacles to hit");
        let back = move_rover(Command::Right, &left).expect("no obstacles to hit");

        prop_assert_eq!(back.orientation(), orientation);

        // The second step travels along the original heading, so the rover
        // ends one cell diagonally away rather than at home.
        let along_heading = move_rover(
            Command::Forward,
            &open_planet(width, height, left.position().x, left.position().y, orientation),
        )
        .expect("no obstacles to hit");
        prop_assert_eq!(back.position(), along_heading.position());
    }
}

#[test]
fn every_edge_wraps_to_the_opposite_side() {
    let (width, height) = (5, 4);

    let east = move_rover(
        Command::Forward,
        &open_planet(width, height, width - 1, 2, Orientation::East),
    )
    .expect("no obstacles");
    assert_eq!(east.position(), Coordinate::new(0, 2));

    let west = move_rover(
        Command::Forward,
        &open_planet(width, height, 0, 2, Orientation::West),
    )
    .expect("no obstacles");
    assert_eq!(west.position(), Coordinate::new(width - 1, 2));

    let north = move_rover(
        Command::Forward,
        &open_planet(width, height, 3, height - 1, Orientation::North),
    )
    .expect("no obstacles");
    assert_eq!(north.position(), Coordinate::new(3, 0));

    let south = move_rover(
        Command::Forward,
        &open_planet(width, height, 3, 0, Orientation::South),
    )
    .expect("no obstacles");
    assert_eq!(south.position(), Coordinate::new(3, height - 1));
}
