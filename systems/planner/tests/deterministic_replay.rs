use snake_autopilot_core::{Command, Event, GameOverReason, Grid};
use snake_autopilot_system_planner::Autopilot;
use snake_autopilot_world::{self as world, query, Config, World};

const MAX_TICKS: u64 = 600;

#[derive(Debug, PartialEq)]
struct ReplayOutcome {
    events: Vec<Event>,
    score: u32,
    ticks: u64,
    outcome: Option<GameOverReason>,
}

fn replay(grid: Grid, seed: u64) -> ReplayOutcome {
    let mut world = World::new(Config::new(grid, seed)).expect("valid config");
    let mut autopilot = Autopilot::new(grid);
    let mut log = Vec::new();

    while !query::is_finished(&world) && query::tick_index(&world) < MAX_TICKS {
        let mut events = Vec::new();
        world::apply(&mut world, Command::Tick, &mut events);

        let mut commands = Vec::new();
        autopilot.handle(
            &events,
            query::body(&world),
            query::food(&world),
            &mut commands,
        );
        assert_eq!(commands.len(), 1, "expected one command per tick");

        for command in commands {
            world::apply(&mut world, command, &mut events);
        }
        log.extend(events);
    }

    ReplayOutcome {
        events: log,
        score: query::score(&world),
        ticks: query::tick_index(&world),
        outcome: query::outcome(&world),
    }
}

#[test]
fn replay_is_deterministic() {
    let grid = Grid::new(8, 8).expect("valid grid");

    let first = replay(grid, 2024);
    let second = replay(grid, 2024);

    assert_eq!(first, second, "replay diverged between runs");
}

#[test]
fn autopilot_reaches_food() {
    let grid = Grid::new(10, 10).expect("valid grid");

    let outcome = replay(grid, 7);

    assert!(outcome.score >= 1, "snake never ate: {outcome:?}");
    assert!(outcome
        .events
        .iter()
        .any(|event| matches!(event, Event::FoodEaten { .. })));
}

#[test]
fn every_step_moves_to_an_adjacent_cell() {
    let grid = Grid::new(6, 6).expect("valid grid");

    let outcome = replay(grid, 11);

    for event in &outcome.events {
        if let Event::SnakeAdvanced { from, to } = event {
            assert!(from.is_adjacent(*to), "{from:?} -> {to:?} is not a single step");
        }
    }
    assert!(outcome.ticks > 0);
}
