pub mod identity;
pub mod parser;
pub mod summary;

pub use identity::{Identity, IdentityDeriver, Roster, RosterError, speaker_color};
pub use parser::types::{ChatMessage, Conversation, FrontMatter};
pub use parser::{ConversationParser, parse_conversation, parse_script};
