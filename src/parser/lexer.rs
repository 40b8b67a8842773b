/// A line that opens a new turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakerLine<'a> {
    /// Trimmed speaker token, as written.
    pub speaker: &'a str,
    /// Text after the delimiter, possibly empty.
    pub body: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Speaker(SpeakerLine<'a>),
    Continuation,
}

pub fn classify_line(line: &str) -> LineKind<'_> {
    match bold_speaker(line).or_else(|| plain_speaker(line)) {
        Some(speaker) => LineKind::Speaker(speaker),
        None => LineKind::Continuation,
    }
}

/// `**Name**: text`, `**Name** text` or `**Name**:` alone.
///
/// The bolded token may not contain `*`. Without a colon the token must be
/// followed by whitespace, so a bold word at the start of a sentence
/// (`**Note**d.`) stays body text.
pub fn bold_speaker(line: &str) -> Option<SpeakerLine<'_>> {
    let rest = line.strip_prefix("**")?;
    let close = rest.find('*')?;
    let token = &rest[..close];
    let after = rest[close..].strip_prefix("**")?;

    let body = match after.strip_prefix(':') {
        Some(after_colon) => colon_body(after_colon)?,
        None => whitespace_body(after)?,
    };
    speaker_line(token, body)
}

/// `Name: text` or `Name:` alone, where the name is ASCII alphanumerics and
/// whitespace. The colon is required.
pub fn plain_speaker(line: &str) -> Option<SpeakerLine<'_>> {
    let end = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || c.is_whitespace()))
        .unwrap_or(line.len());
    let token = &line[..end];
    let after_colon = line[end..].strip_prefix(':')?;
    speaker_line(token, colon_body(after_colon)?)
}

fn speaker_line<'a>(token: &'a str, body: &'a str) -> Option<SpeakerLine<'a>> {
    let speaker = token.trim();
    if speaker.is_empty() {
        return None;
    }
    Some(SpeakerLine { speaker, body })
}

// After a colon the line may end outright; that opens a turn whose body
// arrives on the following lines.
fn colon_body(after_colon: &str) -> Option<&str> {
    if after_colon.is_empty() {
        Some("")
    } else {
        whitespace_body(after_colon)
    }
}

fn whitespace_body(after: &str) -> Option<&str> {
    if after.starts_with(char::is_whitespace) {
        Some(after.trim_start())
    } else {
        None
    }
}
