use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn no_arguments_parses() {
    assert!(Cli::try_parse_from(["rulewatch"]).is_ok());
}

#[test]
fn unknown_flags_are_rejected() {
    assert!(Cli::try_parse_from(["rulewatch", "--days", "30"]).is_err());
}

#[test]
fn positional_arguments_are_rejected() {
    assert!(Cli::try_parse_from(["rulewatch", "fetch"]).is_err());
}
