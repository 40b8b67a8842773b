use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::parser::types::ChatMessage;

/// One speaker's presence in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerSummary {
    pub identity: Identity,
    pub turns: usize,
}

/// Group messages by speaker, in order of first appearance.
///
/// Speakers are matched on the lower-cased display name, so `Alice` and
/// `ALICE` count as one speaker; the first spelling seen is kept.
pub fn summarize_speakers(messages: &[ChatMessage]) -> Vec<SpeakerSummary> {
    let mut speakers: Vec<SpeakerSummary> = Vec::new();

    for message in messages {
        let key = message.name.to_lowercase();
        match speakers
            .iter_mut()
            .find(|s| s.identity.name.to_lowercase() == key)
        {
            Some(speaker) => speaker.turns += 1,
            None => speakers.push(SpeakerSummary {
                identity: message.identity(),
                turns: 1,
            }),
        }
    }

    speakers
}
