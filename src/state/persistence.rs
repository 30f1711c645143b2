use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::Profile;

/// Load profiles from a JSON file in save order.
///
/// A missing file is an empty store.
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<Profile>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "Profile store not found, starting empty");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let profiles: Vec<Profile> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = profiles.len(), "Loaded profiles");
    Ok(profiles)
}

/// Save profiles to a JSON file, pretty-printed.
pub fn save_profiles<P: AsRef<Path>>(path: P, profiles: &[Profile]) -> Result<()> {
    let json = serde_json::to_string_pretty(profiles)?;
    fs::write(path, json)?;
    Ok(())
}
