pub mod front_matter;
pub mod lexer;
pub mod math;
pub mod types;

use crate::identity::{Identity, IdentityDeriver, Roster};
use lexer::LineKind;
use types::{ChatMessage, Conversation};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_NONCE_LEN: usize = 9;

/// Parse a script into chat messages using the default roster.
pub fn parse_conversation(input: &str) -> Vec<ChatMessage> {
    ConversationParser::default().parse(input)
}

/// Like [`parse_conversation`], but keeps the front matter.
pub fn parse_script(input: &str) -> Conversation {
    ConversationParser::default().parse_script(input)
}

#[derive(Debug, Clone, Default)]
pub struct ConversationParser {
    deriver: IdentityDeriver,
    id_seed: Option<u64>,
}

impl ConversationParser {
    pub fn new(roster: Roster) -> Self {
        Self {
            deriver: IdentityDeriver::new(roster),
            id_seed: None,
        }
    }

    /// Draw message id nonces from a fixed seed instead of fresh entropy.
    pub fn with_id_seed(mut self, seed: u64) -> Self {
        self.id_seed = Some(seed);
        self
    }

    pub fn deriver(&self) -> &IdentityDeriver {
        &self.deriver
    }

    /// Split `input` into turns. Never fails; input with no body text
    /// yields an empty list.
    pub fn parse(&self, input: &str) -> Vec<ChatMessage> {
        self.parse_script(input).messages
    }

    pub fn parse_script(&self, input: &str) -> Conversation {
        let lines: Vec<&str> = input.lines().collect();
        let (front_matter, content_start) = front_matter::extract_front_matter(&lines);

        let body = lines[content_start..].join("\n");
        let mut turns = TurnBuilder::new(&self.deriver, self.id_nonce());

        for line in body.trim().lines() {
            match lexer::classify_line(line) {
                LineKind::Speaker(speaker) => {
                    log::trace!("Speaker line for '{}'", speaker.speaker);
                    turns.open(self.deriver.derive(speaker.speaker), speaker.body);
                }
                LineKind::Continuation => turns.continue_with(line),
            }
        }

        let messages = turns.finish();
        log::debug!(
            "Parsed {} messages from {} lines",
            messages.len(),
            lines.len() - content_start
        );

        Conversation {
            front_matter,
            messages,
        }
    }

    fn id_nonce(&self) -> String {
        let mut rng = match self.id_seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        (0..ID_NONCE_LEN)
            .map(|_| char::from(ID_ALPHABET[rng.usize(..ID_ALPHABET.len())]))
            .collect()
    }
}

struct OpenTurn<'a> {
    identity: Identity,
    lines: Vec<&'a str>,
}

/// Accumulates body lines for the open turn and emits it when the next
/// speaker line arrives.
struct TurnBuilder<'a> {
    deriver: &'a IdentityDeriver,
    nonce: String,
    current: Option<OpenTurn<'a>>,
    messages: Vec<ChatMessage>,
}

impl<'a> TurnBuilder<'a> {
    fn new(deriver: &'a IdentityDeriver, nonce: String) -> Self {
        Self {
            deriver,
            nonce,
            current: None,
            messages: Vec::new(),
        }
    }

    fn open(&mut self, identity: Identity, first_line: &'a str) {
        self.flush();
        let mut lines = Vec::new();
        if !first_line.is_empty() {
            lines.push(first_line);
        }
        self.current = Some(OpenTurn { identity, lines });
    }

    fn continue_with(&mut self, line: &'a str) {
        if let Some(turn) = &mut self.current {
            turn.lines.push(line);
            return;
        }
        // Blank lines before the first speaker are dropped.
        if line.trim().is_empty() {
            return;
        }
        self.current = Some(OpenTurn {
            identity: self.deriver.narrator(),
            lines: vec![line],
        });
    }

    fn flush(&mut self) {
        let Some(turn) = self.current.take() else {
            return;
        };

        let text = turn.lines.join("\n");
        let text = text.trim();
        if text.is_empty() {
            log::debug!("Dropping empty turn for '{}'", turn.identity.name);
            return;
        }

        let id = format!("msg-{}-{}", self.messages.len(), self.nonce);
        let message = math::normalize_math(text);
        self.messages.push(ChatMessage::new(id, turn.identity, message));
    }

    fn finish(mut self) -> Vec<ChatMessage> {
        self.flush();
        self.messages
    }
}
