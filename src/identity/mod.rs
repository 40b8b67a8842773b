pub mod roster;

use serde::{Deserialize, Serialize};

pub use roster::{Roster, RosterError};

pub const NARRATOR_NAME: &str = "Narrator";
pub const NARRATOR_INITIALS: &str = "N";

/// Display attributes shared by every turn of one speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub initials: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    pub fn narrator(roster: &Roster) -> Self {
        Self {
            name: NARRATOR_NAME.to_string(),
            initials: NARRATOR_INITIALS.to_string(),
            color: roster.narrator_color.clone(),
            avatar: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentityDeriver {
    roster: Roster,
}

impl IdentityDeriver {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Derive the identity for a raw speaker token as written in the script.
    /// Color and avatar are keyed by the lower-cased token, so `ALICE` and
    /// `alice` share both.
    pub fn derive(&self, raw: &str) -> Identity {
        let key = raw.to_lowercase();
        let name = display_name(raw);
        Identity {
            initials: initials(&name),
            color: self.color_for(&key).to_string(),
            avatar: self.roster.avatars.get(&key).cloned(),
            name,
        }
    }

    /// Palette entry for an already lower-cased key.
    pub fn color_for(&self, key: &str) -> &str {
        let palette = &self.roster.palette;
        if palette.is_empty() {
            return &self.roster.narrator_color;
        }
        let index = (speaker_hash(key).unsigned_abs() % palette.len() as u64) as usize;
        &palette[index]
    }

    pub fn narrator(&self) -> Identity {
        Identity::narrator(&self.roster)
    }
}

/// Color a speaker name with the default roster, without parsing a script.
pub fn speaker_color(name: &str) -> String {
    IdentityDeriver::default()
        .color_for(&name.to_lowercase())
        .to_string()
}

/// `hash = unit + ((hash << 5) - hash)` over UTF-16 code units.
///
/// Only the shift operates on 32 bits: its operand is truncated to `i32` and
/// the shifted value wraps. The subtraction and addition are not truncated,
/// so the accumulator is carried in 64 bits. Changing this changes the color
/// of every existing speaker.
pub fn speaker_hash(key: &str) -> i64 {
    key.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        i64::from(unit) + (shifted - hash)
    })
}

pub fn display_name(raw: &str) -> String {
    raw.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
