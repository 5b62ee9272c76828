// Input/output logic.
use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Serialize};

use crate::logic::{competition::TournamentSetup, error::SetupError, game::Match, team::Team};

// Read a JSON file and deserialise it.
fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, SetupError> {
    let json = fs::read_to_string(path)?;
    return Ok(serde_json::from_str(&json)?);
}

// Load a tournament setup.
pub fn load_setup(path: &Path) -> Result<TournamentSetup, SetupError> {
    tracing::debug!(path = %path.display(), "loading setup");
    read_json_file(path)
}

// Load a list of teams with their current counters.
pub fn load_teams(path: &Path) -> Result<Vec<Team>, SetupError> {
    read_json_file(path)
}

// Load a list of matches. Only the finished ones matter for the standings, the rest are kept as is.
pub fn load_matches(path: &Path) -> Result<Vec<Match>, SetupError> {
    read_json_file(path)
}

// Pretty JSON for output.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SetupError> {
    Ok(serde_json::to_string_pretty(value)?)
}

// Write pretty JSON to a file.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), SetupError> {
    fs::write(path, to_json(value)?)?;
    tracing::debug!(path = %path.display(), "wrote output");
    return Ok(());
}
