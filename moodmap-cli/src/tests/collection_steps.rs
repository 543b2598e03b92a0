//! Behaviour-driven step definitions for the favourites and history
//! commands.

use super::helpers::{DataDir, StubServiceFactory, cafes, run_cli};
use super::*;
use moodmap_core::RankedPlace;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct CollectionWorld {
    data: DataDir,
    factory: StubServiceFactory,
    stdout: RefCell<String>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CollectionWorld {
    fn new() -> Self {
        Self {
            data: DataDir::new(),
            factory: StubServiceFactory {
                places: cafes(3),
                address: None,
            },
            stdout: RefCell::new(String::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, command: &str, extra: &[&str]) {
        let (result, stdout) = run_cli(self.data.argv(command, extra), &self.factory);
        self.stdout.replace(stdout);
        self.result.replace(Some(result));
    }

    fn search(&self, mood: &str, extra: &[&str]) {
        let mut args = vec!["--mood", mood, "--budget", "low"];
        args.extend_from_slice(extra);
        let (result, _) = run_cli(self.data.search_argv(&args), &self.factory);
        result.expect("setup search should succeed");
    }

    fn favorites(&self) -> Vec<RankedPlace> {
        let (result, stdout) = run_cli(self.data.argv("favorites", &["--json"]), &self.factory);
        result.expect("listing should succeed");
        serde_json::from_str(&stdout).expect("listing should be JSON")
    }
}

#[fixture]
fn world() -> CollectionWorld {
    CollectionWorld::new()
}

// --- Given steps ---

#[given("a favourite saved by an earlier search")]
fn saved_favourite(#[from(world)] world: &CollectionWorld) {
    world.search("cafe", &["--favorite", "1"]);
}

#[given("two earlier searches")]
fn two_searches(#[from(world)] world: &CollectionWorld) {
    world.search("cafe", &[]);
    world.search("bar", &[]);
}

#[given("eleven earlier searches")]
fn eleven_searches(#[from(world)] world: &CollectionWorld) {
    for i in 0..11 {
        world.search(&format!("amenity{i}"), &[]);
    }
}

// --- When steps ---

#[when("I remove the favourite at its latitude")]
fn remove_at_latitude(#[from(world)] world: &CollectionWorld) {
    let latitude = world.favorites()[0].latitude().to_string();
    world.run("favorites", &["--remove", &latitude]);
}

#[when("I remove the favourite at latitude zero")]
fn remove_at_zero(#[from(world)] world: &CollectionWorld) {
    world.run("favorites", &["--remove", "0"]);
}

#[when("I clear the history")]
fn clear_history(#[from(world)] world: &CollectionWorld) {
    world.run("history", &["--clear"]);
}

#[when("I remove the fifth history entry")]
fn remove_fifth(#[from(world)] world: &CollectionWorld) {
    world.run("history", &["--remove", "5"]);
}

#[when("I list the history")]
fn list_history(#[from(world)] world: &CollectionWorld) {
    world.run("history", &[]);
}

// --- Then steps ---

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &CollectionWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("no favourites remain")]
fn no_favourites(#[from(world)] world: &CollectionWorld) {
    assert!(world.stdout.borrow().contains("No favourites saved."));
    assert!(world.favorites().is_empty());
}

#[then("the output says no favourite was found")]
fn says_not_found(#[from(world)] world: &CollectionWorld) {
    assert!(
        world
            .stdout
            .borrow()
            .starts_with("No favourite at latitude 0.")
    );
}

#[then("one favourite remains")]
fn one_favourite_remains(#[from(world)] world: &CollectionWorld) {
    assert_eq!(world.favorites().len(), 1);
}

#[then("the history file is gone")]
fn history_file_gone(#[from(world)] world: &CollectionWorld) {
    assert!(!world.data.path().join("history.json").exists());
}

#[then("the history listing is empty")]
fn history_empty(#[from(world)] world: &CollectionWorld) {
    assert!(world.stdout.borrow().ends_with("No searches yet.\n"));
}

#[then("the command fails because the position is out of range")]
fn fails_out_of_range(#[from(world)] world: &CollectionWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::PositionOutOfRange {
            field,
            position,
            available,
        } => {
            assert_eq!(*field, ARG_REMOVE);
            assert_eq!(*position, 5);
            assert_eq!(*available, 2);
        }
        other => panic!("expected PositionOutOfRange, found {other:?}"),
    }
}

#[then("ten entries are listed")]
fn ten_entries(#[from(world)] world: &CollectionWorld) {
    let stdout = world.stdout.borrow();
    assert_eq!(stdout.lines().count(), 10, "unexpected output:\n{stdout}");
    assert!(stdout.starts_with("1. Mood: amenity10 |"));
}

#[then("the oldest search is forgotten")]
fn oldest_forgotten(#[from(world)] world: &CollectionWorld) {
    assert!(!world.stdout.borrow().contains("amenity0 |"));
}

macro_rules! register_collection_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(
            path = "tests/features/collections_command.feature",
            name = $scenario_title
        )]
        fn $fn_name(#[from(world)] world: CollectionWorld) {
            let _ = world;
        }
    };
}

register_collection_scenario!(remove_favourite_by_latitude, "removing a favourite by latitude");
register_collection_scenario!(
    remove_unknown_favourite,
    "removing an unknown favourite changes nothing"
);
register_collection_scenario!(
    clear_history_deletes_file,
    "clearing history deletes the stored file"
);
register_collection_scenario!(
    remove_missing_history_entry,
    "removing a missing history entry fails"
);
register_collection_scenario!(
    history_keeps_ten_newest,
    "history keeps the ten newest searches"
);
