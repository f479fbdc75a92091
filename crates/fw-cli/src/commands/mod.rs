pub mod build;
pub mod check;
pub mod options;
pub mod play;

use std::fs;
use std::path::Path;

use colored::Colorize;
use fw_core::{AppearanceConfig, Character, CharacterCreationData};
use fw_story::ScenarioBundle;
use miette::{Context, IntoDiagnostic};

fn read_file(path: &Path) -> miette::Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read {}", path.display()))
}

fn load_creation_data(path: &Path) -> miette::Result<CharacterCreationData> {
    CharacterCreationData::from_json(&read_file(path)?)
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid creation data in {}", path.display()))
}

fn load_appearance(path: &Path) -> miette::Result<AppearanceConfig> {
    AppearanceConfig::from_json(&read_file(path)?)
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid appearance tables in {}", path.display()))
}

fn load_bundle(path: &Path) -> miette::Result<ScenarioBundle> {
    ScenarioBundle::from_json(&read_file(path)?)
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid scenario bundle in {}", path.display()))
}

fn load_character(path: &Path) -> miette::Result<Character> {
    Character::from_json(&read_file(path)?)
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid character in {}", path.display()))
}

/// Print validation issues as `(is_error, line)` pairs.
/// Returns the number of errors.
fn print_issues(issues: impl IntoIterator<Item = (bool, String)>) -> usize {
    let mut errors = 0;
    for (is_error, line) in issues {
        if is_error {
            errors += 1;
            eprintln!("  {}", line.red());
        } else {
            eprintln!("  {}", line.yellow());
        }
    }
    errors
}
