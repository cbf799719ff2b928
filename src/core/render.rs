//! Mixed prose/math rendering: split text on math delimiters, typeset the math, escape the rest.
//!
//! Delimiters, tried in this order at each position:
//! `$$...$$` (display), `\[...\]` (display), `$...$` (inline), `\(...\)` (inline).
//! Text without delimiters that contains a backslash command is typeset whole.

mod typeset;


pub use typeset::{MathMlTypesetter, TypesetError, Typesetter};

/// Piece of a mixed string: literal prose or a math span (delimiters removed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Math { latex: &'a str, display: bool },
}

/// (open, close, display) in priority order. Display pairs come first so `$$` never splits
/// into two empty inline spans.
const DELIMITERS: [(&str, &str, bool); 4] = [
    ("$$", "$$", true),
    ("\\[", "\\]", true),
    ("$", "$", false),
    ("\\(", "\\)", false),
];

/// True when `text` contains a backslash immediately followed by an ASCII letter.
fn has_command(text: &str) -> bool {
    text.as_bytes()
        .windows(2)
        .any(|w| w[0] == b'\\' && w[1].is_ascii_alphabetic())
}

fn has_delimiter(text: &str) -> bool {
    text.contains('$') || text.contains("\\(") || text.contains("\\[")
}

/// Offset of the next place an opening delimiter could start.
fn next_opening(text: &str) -> Option<usize> {
    [text.find('$'), text.find("\\("), text.find("\\[")]
        .into_iter()
        .flatten()
        .min()
}

/// Match a delimited span at the very start of `rest`. Returns the segment and the bytes consumed.
fn match_span(rest: &str) -> Option<(Segment<'_>, usize)> {
    for (open, close, display) in DELIMITERS {
        let Some(body) = rest.strip_prefix(open) else {
            continue;
        };
        if let Some(end) = body.find(close) {
            let segment = Segment::Math {
                latex: &body[..end],
                display,
            };
            return Some((segment, open.len() + end + close.len()));
        }
    }
    None
}

/// Split `text` into literal and math segments.
///
/// An opening delimiter with no closing partner turns the rest of the input into literal text.
pub fn segment(text: &str, display_hint: bool) -> Vec<Segment<'_>> {
    if text.is_empty() {
        return Vec::new();
    }
    if has_command(text) && !has_delimiter(text) {
        return vec![Segment::Math {
            latex: text,
            display: display_hint,
        }];
    }

    let mut segments = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        if let Some((segment, consumed)) = match_span(rest) {
            segments.push(segment);
            rest = &rest[consumed..];
            continue;
        }
        match next_opening(rest) {
            Some(0) | None => {
                segments.push(Segment::Literal(rest));
                break;
            }
            Some(idx) => {
                segments.push(Segment::Literal(&rest[..idx]));
                rest = &rest[idx..];
            }
        }
    }
    segments
}

/// Escape `&`, `<`, `>` and turn each newline into one `<br>`.
pub fn render_literal(text: &str) -> String {
    html_escape::encode_text(text).replace('\n', "<br>")
}

/// Typeset one math span, falling back to escaped monospace markup on failure.
pub fn render_math(latex: &str, display: bool, typesetter: &dyn Typesetter) -> String {
    match typesetter.typeset(latex, display) {
        Ok(markup) => {
            let class = if display {
                "math math-display"
            } else {
                "math math-inline"
            };
            format!("<span class=\"{}\">{}</span>", class, markup)
        }
        Err(e) => {
            log::warn!("Falling back to raw markup for {:?}: {}", latex, e);
            format!(
                "<code class=\"math-fallback\">{}</code>",
                html_escape::encode_text(latex)
            )
        }
    }
}

/// Render mixed prose/math text to display-safe markup. Never fails.
pub fn render(text: &str, display_hint: bool, typesetter: &dyn Typesetter) -> String {
    segment(text, display_hint)
        .into_iter()
        .map(|seg| match seg {
            Segment::Literal(s) => render_literal(s),
            Segment::Math { latex, display } => render_math(latex, display, typesetter),
        })
        .collect()
}
