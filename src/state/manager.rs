use strsim::jaro_winkler;
use tracing::info;

use crate::error::{DietError, Result};
use crate::models::{Profile, ProfileUpdate};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Saved profiles, keyed by exact name.
///
/// Profiles are kept oldest-saved first; replacing a profile counts as a
/// fresh save.
#[derive(Debug, Clone, Default)]
pub struct ProfileBook {
    profiles: Vec<Profile>,
}

impl ProfileBook {
    /// Build a book from profiles in save order. Later duplicates win.
    pub fn new(profiles: Vec<Profile>) -> Self {
        let mut book = Self::default();
        for profile in profiles {
            book.insert(profile);
        }
        book
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.name == name)
    }

    fn insert(&mut self, profile: Profile) -> bool {
        let replaced = match self.position(&profile.name) {
            Some(idx) => {
                self.profiles.remove(idx);
                true
            }
            None => false,
        };
        self.profiles.push(profile);
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Like [`get`](Self::get), but a miss becomes a `ProfileNotFound` error
    /// carrying the closest known name.
    pub fn require(&self, name: &str) -> Result<&Profile> {
        self.get(name).ok_or_else(|| self.not_found(name))
    }

    /// All profiles, most recently saved first.
    pub fn list_all(&self) -> Vec<&Profile> {
        self.profiles.iter().rev().collect()
    }

    /// Insert or replace a profile by name. Returns true if one was replaced.
    pub fn upsert(&mut self, profile: Profile) -> Result<bool> {
        if !profile.is_valid() {
            return Err(DietError::InvalidInput(format!(
                "profile '{}' needs a name and positive weight and height",
                profile.name
            )));
        }

        let name = profile.name.clone();
        let replaced = self.insert(profile);
        info!(profile = %name, replaced, "Saved profile");
        Ok(replaced)
    }

    /// Apply a partial update to an existing profile.
    pub fn update(&mut self, name: &str, update: &ProfileUpdate) -> Result<&Profile> {
        let idx = self.position(name).ok_or_else(|| self.not_found(name))?;

        let mut updated = self.profiles[idx].clone();
        updated.apply(update);
        if !updated.is_valid() {
            return Err(DietError::InvalidInput(format!(
                "update would leave '{}' without positive weight and height",
                name
            )));
        }

        self.profiles[idx] = updated;
        info!(profile = %name, "Updated profile");
        Ok(&self.profiles[idx])
    }

    /// Remove a profile. Returns whether it existed.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.profiles.remove(idx);
                info!(profile = %name, "Deleted profile");
                true
            }
            None => false,
        }
    }

    /// Closest saved name to `name`, if any is similar enough.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let needle = name.to_lowercase();
        self.profiles
            .iter()
            .map(|p| (p.name.as_str(), jaro_winkler(&p.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(candidate, _)| candidate)
    }

    fn not_found(&self, name: &str) -> DietError {
        DietError::ProfileNotFound {
            name: name.to_string(),
            suggestion: self.suggest(name).map(str::to_string),
        }
    }

    /// Profiles in save order, for serialization.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
