use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// One rendered turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub initials: String,
    pub color: String,
}

impl ChatMessage {
    pub fn new(id: String, identity: Identity, message: String) -> Self {
        Self {
            id,
            name: identity.name,
            message,
            avatar: identity.avatar,
            initials: identity.initials,
            color: identity.color,
        }
    }

    pub fn identity(&self) -> Identity {
        Identity {
            name: self.name.clone(),
            initials: self.initials.clone(),
            color: self.color.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    /// Every other `key: value` pair, in key order.
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub front_matter: FrontMatter,
    pub messages: Vec<ChatMessage>,
}
