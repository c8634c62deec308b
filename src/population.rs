// Loading and saving profile populations as JSON arrays
use roomatch_core::{Profile, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Read a population from a JSON array of profiles
pub fn load_population(path: impl AsRef<Path>) -> Result<Vec<Profile>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let profiles: Vec<Profile> = serde_json::from_str(&raw)?;

    let mut seen = HashSet::new();
    for p in &profiles {
        if !seen.insert(&p.id) {
            warn!(id = %p.id, "duplicate profile id in population");
        }
    }

    info!(count = profiles.len(), path = %path.display(), "population loaded");
    Ok(profiles)
}

pub fn save_population(path: impl AsRef<Path>, profiles: &[Profile]) -> Result<()> {
    let json = serde_json::to_string_pretty(profiles)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Look a profile up by the display form of its id, so `7` finds an
/// integer id and `STU007` a string id
pub fn find_profile<'a>(profiles: &'a [Profile], id: &str) -> Option<&'a Profile> {
    profiles.iter().find(|p| p.id.to_string() == id)
}
