use super::types::FrontMatter;

/// Split an optional leading `---` block off `lines`.
///
/// Returns the collected front matter and the index of the first body line.
/// An opening `---` without a closing one is not front matter; the caller
/// gets index 0 and the line is parsed as body text.
pub fn extract_front_matter(lines: &[&str]) -> (FrontMatter, usize) {
    if lines.is_empty() || lines[0].trim() != "---" {
        return (FrontMatter::default(), 0);
    }

    let Some(closing) = lines[1..].iter().position(|l| l.trim() == "---") else {
        log::debug!("Front matter opened but never closed; treating '---' as body text");
        return (FrontMatter::default(), 0);
    };
    let closing_idx = closing + 1; // offset by the opening ---

    let mut fm = FrontMatter::default();

    for line in &lines[1..closing_idx] {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            log::debug!("Skipping front matter line without a key: '{trimmed}'");
            continue;
        };

        let key = key.trim();
        let value = value.trim();

        match key {
            "title" => fm.title = Some(value.to_string()),
            _ => {
                fm.fields.insert(key.to_string(), value.to_string());
            }
        }
    }

    (fm, closing_idx + 1)
}
