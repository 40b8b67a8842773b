//! Rewrites LaTeX-style math delimiters into `$...$` / `$$...$$` for a
//! markdown-math renderer.
//!
//! The bare `[...]` and `(...)` rules are heuristics. They leave anything
//! that does not look like math alone, so some real math stays unconverted,
//! and prose such as `(see C:\temp)` can still be wrapped.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

static DISPLAY_MATH: OnceLock<Regex> = OnceLock::new();
static INLINE_MATH: OnceLock<Regex> = OnceLock::new();
static BRACKETS: OnceLock<Regex> = OnceLock::new();
static PARENS: OnceLock<Regex> = OnceLock::new();

fn display_math() -> &'static Regex {
    DISPLAY_MATH.get_or_init(|| Regex::new(r"\\\[([\s\S]*?)\\\]").expect("valid display math regex"))
}

fn inline_math() -> &'static Regex {
    INLINE_MATH.get_or_init(|| Regex::new(r"\\\(([\s\S]*?)\\\)").expect("valid inline math regex"))
}

fn brackets() -> &'static Regex {
    BRACKETS.get_or_init(|| Regex::new(r"\[([\s\S]*?)\]").expect("valid bracket regex"))
}

fn parens() -> &'static Regex {
    PARENS.get_or_init(|| Regex::new(r"\(([\s\S]*?)\)").expect("valid paren regex"))
}

/// Apply the four delimiter rules in order, each over the whole text.
pub fn normalize_math(text: &str) -> String {
    let text = display_math().replace_all(text, |caps: &Captures| format!("$${}$$", &caps[1]));
    let text = inline_math().replace_all(&text, |caps: &Captures| format!("${}$", &caps[1]));
    let text = replace_bracket_math(&text);
    let text = replace_paren_math(&text);
    text.into_owned()
}

/// `[x^2 = 4]` becomes `$x^2 = 4$`. Link labels (`[text](url)`) and
/// brackets without `\`, `=`, `^` or `_` are left as written.
fn replace_bracket_math(text: &str) -> Cow<'_, str> {
    brackets().replace_all(text, |caps: &Captures| {
        let whole = &caps[0];
        let is_link_label = caps
            .get(0)
            .is_some_and(|m| text[m.end()..].starts_with('('));
        let content = &caps[1];
        if !is_link_label && content.contains(['\\', '=', '^', '_']) {
            format!("${content}$")
        } else {
            whole.to_string()
        }
    })
}

/// `(\alpha)` becomes `$\alpha$`. Only content with a backslash and no
/// nested parenthesis qualifies.
fn replace_paren_math(text: &str) -> Cow<'_, str> {
    parens().replace_all(text, |caps: &Captures| {
        let content = &caps[1];
        if !content.contains(['(', ')']) && content.contains('\\') {
            format!("${content}$")
        } else {
            caps[0].to_string()
        }
    })
}
