use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PALETTE: [&str; 11] = [
    "#ef4444", // red
    "#f97316", // orange
    "#f59e0b", // amber
    "#84cc16", // lime
    "#10b981", // emerald
    "#06b6d4", // cyan
    "#3b82f6", // blue
    "#6366f1", // indigo
    "#8b5cf6", // violet
    "#d946ef", // fuchsia
    "#f43f5e", // rose
];

pub const DEFAULT_AVATARS: [(&str, &str); 4] = [
    ("oreki", "/oreki.jpg"),
    ("chitanda", "/chitanda.jpg"),
    ("satoshi", "/satoshi.jpg"),
    ("mayaka", "/mayaka.jpg"),
];

/// Slate; not part of the speaker palette.
pub const NARRATOR_COLOR: &str = "#64748b";

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Failed to read roster file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Roster palette must contain at least one color")]
    EmptyPalette,
}

/// Static tables consulted when deriving a speaker identity.
///
/// Every field has a default, so a roster file only needs the keys it
/// overrides:
///
/// ```json
/// { "avatars": { "holmes": "/holmes.png" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub palette: Vec<String>,
    /// Keyed by lower-cased speaker token.
    pub avatars: BTreeMap<String, String>,
    pub narrator_color: String,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            avatars: DEFAULT_AVATARS
                .iter()
                .map(|(name, avatar)| (name.to_string(), avatar.to_string()))
                .collect(),
            narrator_color: NARRATOR_COLOR.to_string(),
        }
    }
}

impl Roster {
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let json = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let roster = Self::from_json(&json)?;
        log::info!(
            "Loaded roster from {}: {} colors, {} known speakers",
            path.display(),
            roster.palette.len(),
            roster.avatars.len()
        );
        Ok(roster)
    }

    fn validate(&self) -> Result<(), RosterError> {
        if self.palette.is_empty() {
            return Err(RosterError::EmptyPalette);
        }
        Ok(())
    }
}
