//! Typesetting backends for math segments.

use latex2mathml::{DisplayStyle, latex_to_mathml};

/// Errors from a typesetting backend. The segmenter turns any of these into fallback markup.
#[derive(Debug, thiserror::Error)]
pub enum TypesetError {
    #[error("typesetting failed: {0}")]
    Backend(String),
    #[error("unsupported markup in {0:?}")]
    ParseError(String),
}

/// Turns one span of math markup into display markup.
pub trait Typesetter {
    fn typeset(&self, latex: &str, display: bool) -> Result<String, TypesetError>;
}

/// MathML output via `latex2mathml`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathMlTypesetter;

const PARSE_ERROR_START: &str = "<mtext>[PARSE ERROR:";
const PARSE_ERROR_END: &str = "</mtext>";

/// Drop `<mtext>[PARSE ERROR: ...]</mtext>` nodes latex2mathml leaves in otherwise usable output.
fn strip_parse_error_nodes(mathml: &str) -> String {
    let mut out = mathml.to_string();
    while let Some(start) = out.find(PARSE_ERROR_START) {
        let Some(end_rel) = out[start..].find(PARSE_ERROR_END) else {
            break;
        };
        let end = start + end_rel + PARSE_ERROR_END.len();
        out.replace_range(start..end, "");
    }
    out
}

impl Typesetter for MathMlTypesetter {
    fn typeset(&self, latex: &str, display: bool) -> Result<String, TypesetError> {
        let style = if display {
            DisplayStyle::Block
        } else {
            DisplayStyle::Inline
        };
        let mathml =
            latex_to_mathml(latex, style).map_err(|e| TypesetError::Backend(e.to_string()))?;
        let cleaned = strip_parse_error_nodes(&mathml);
        if cleaned.contains("[PARSE ERROR:") {
            return Err(TypesetError::ParseError(latex.to_string()));
        }
        Ok(cleaned)
    }
}
