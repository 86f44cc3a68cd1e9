use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::profile::defs::DriveProfile;

#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub fn load_profile(path: &Path) -> Result<DriveProfile, ProfileLoadError> {
    let text = fs::read_to_string(path)?;
    let profile: DriveProfile = toml::from_str(&text)?;
    Ok(profile)
}

/// Loads the profile at `path`, or the empty profile when no path is given.
pub fn load_optional_profile(path: Option<&Path>) -> Result<DriveProfile, ProfileLoadError> {
    match path {
        Some(path) => load_profile(path),
        None => Ok(DriveProfile::default()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/profile/loader.rs"]
mod tests;
