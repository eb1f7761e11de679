
use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;

use super::error::*;

pub use serde::{Serialize, Deserialize};
pub use serde::de::DeserializeOwned;

///
/// Renders the value as a single-line JSON string.
///
pub fn to_json<T: Serialize> (value: & T) -> Result<String>
{
    serde_json::to_string(value).context("Failed to render value as JSON.")
}

///
/// Reads and deserializes a TOML file.
///
pub fn from_toml_file<T: DeserializeOwned> (path: & Path) -> Result<T>
{
    let context = format!("Failed to read TOML from '{}'.", path.display());

    let mut contents = String::new();
    OpenOptions::new().read(true).open(path).context(context.clone())?
        .read_to_string(& mut contents).context(context.clone())?;

    toml::from_str(& contents).context(context)
}
