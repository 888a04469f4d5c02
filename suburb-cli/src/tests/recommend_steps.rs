//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{Workspace, printed_names, single_weight_request, write_utf8};
use super::*;
use crate::recommend::run_recommend_with;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use std::cell::RefCell;
use suburb_core::{PreferenceError, RecommendError, RequestValidationError};

#[derive(Debug)]
struct RecommendWorld {
    workspace: Workspace,
    include_request: RefCell<bool>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            include_request: RefCell::new(true),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["suburbs".to_owned(), "recommend".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.workspace.path("request.json").into_string());
        }
        argv.extend([
            format!("--{ARG_CATALOG}"),
            self.workspace.path("regions.json").into_string(),
        ]);
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("a region catalogue exists on disk")]
fn catalogue_exists(#[from(world)] world: &RecommendWorld) {
    world.workspace.write_catalog();
}

#[given("a request weighting only recreation exists on disk")]
fn recreation_request_exists(#[from(world)] world: &RecommendWorld) {
    world
        .workspace
        .write_request(&single_weight_request("recreation"));
}

#[given("the request contains invalid JSON")]
fn request_contains_invalid_json(#[from(world)] world: &RecommendWorld) {
    write_utf8(&world.workspace.path("request.json"), b"{ not valid json");
}

#[given("the request carries a negative weight")]
fn request_carries_negative_weight(#[from(world)] world: &RecommendWorld) {
    let mut request = single_weight_request("recreation");
    if let Some(slot) = request.get_mut("transport") {
        *slot = json!(-0.5);
    }
    world.workspace.write_request(&request);
}

#[given("I omit the request path")]
fn omit_request_path(#[from(world)] world: &RecommendWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &mut *buffer)
        }
        other => panic!("expected recommend command, found {other:?}"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and ranks A before B")]
fn command_ranks_a_first(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let printed: serde_json::Value =
        serde_json::from_slice(&world.stdout.borrow()).expect("stdout is JSON");
    assert_eq!(printed_names(&printed), vec!["A", "B"]);
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::ParseRecommendRequest { .. } => {}
        other => panic!("expected ParseRecommendRequest, found {other:?}"),
    }
}

#[then("the command fails because the request is invalid")]
fn command_fails_invalid_request(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::Recommend(RecommendError::InvalidInput(RequestValidationError::Preference(
            PreferenceError::Negative { .. },
        ))) => {}
        other => panic!("expected a negative weight rejection, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_RECOMMEND_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_happy_path, "ranking regions from a JSON request");
register_recommend_scenario!(recommend_invalid_json, "rejecting invalid JSON input");
register_recommend_scenario!(recommend_negative_weight, "rejecting negative weights");
register_recommend_scenario!(recommend_missing_request, "rejecting missing request paths");
