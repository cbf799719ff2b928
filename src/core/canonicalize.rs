//! Answer canonicalization: math-editor markup to the plain-text answer dialect.
//!
//! The grading backend compares answers textually after its own light parsing. It accepts
//! bare fractions (`3/4`), decimals, integers, letters and `\frac{a}{b}`. Everything else the
//! math editor emits is rewritten by an ordered list of regex passes ([`Pass::ALL`]).
//!
//! Group matching stops at the first `}`, so nested groups (`\sqrt{\sqrt{x}}`, `x^{{a}}`) come
//! out partially converted. Output for such input is whatever the passes produce; the backend
//! is the authority on whether it grades.

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use regex::Regex;

/// One rewrite step. Variants are declared in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// `\dfrac` -> `\frac`
    FracAlias,
    /// Drop `\left` / `\right` and the whitespace after them.
    SizedDelimiters,
    /// `\cdot`, `\times` -> `*`
    Multiplication,
    /// `\sqrt{x}` -> `sqrt(x)`
    SquareRoot,
    NaturalLog,
    /// `\log_{b}` -> `log_b`, then bare `\log` -> `log`.
    Logarithm,
    /// `\sum_{l}^{u}` -> `sum_{l}^{u}`, then bare `\sum` -> `sum`.
    Summation,
    /// `^{x}` -> `^x`
    SuperscriptBraces,
    /// `^(12)` -> `^12`
    NumericExponentParens,
    /// `_{x}` -> `_x`
    SubscriptBraces,
    /// `\,` `\;` `\!` removed, `\ ` -> space.
    Spacing,
    /// `\text{x}` -> `x`
    TextLiteral,
    Whitespace,
}

impl Pass {
    /// Every pass, in the order [`canonicalize`] applies them.
    pub const ALL: [Pass; 13] = [
        Pass::FracAlias,
        Pass::SizedDelimiters,
        Pass::Multiplication,
        Pass::SquareRoot,
        Pass::NaturalLog,
        Pass::Logarithm,
        Pass::Summation,
        Pass::SuperscriptBraces,
        Pass::NumericExponentParens,
        Pass::SubscriptBraces,
        Pass::Spacing,
        Pass::TextLiteral,
        Pass::Whitespace,
    ];

    /// Short name used in trace logs.
    pub fn name(self) -> &'static str {
        match self {
            Pass::FracAlias => "frac-alias",
            Pass::SizedDelimiters => "sized-delimiters",
            Pass::Multiplication => "multiplication",
            Pass::SquareRoot => "square-root",
            Pass::NaturalLog => "natural-log",
            Pass::Logarithm => "logarithm",
            Pass::Summation => "summation",
            Pass::SuperscriptBraces => "superscript-braces",
            Pass::NumericExponentParens => "numeric-exponent-parens",
            Pass::SubscriptBraces => "subscript-braces",
            Pass::Spacing => "spacing",
            Pass::TextLiteral => "text-literal",
            Pass::Whitespace => "whitespace",
        }
    }

    /// (pattern, replacement) pairs, applied in order. Replacements use regex `${n}` syntax.
    fn rewrites(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Pass::FracAlias => &[(r"\\dfrac", r"\frac")],
            Pass::SizedDelimiters => &[(r"\\left\s*", ""), (r"\\right\s*", "")],
            Pass::Multiplication => &[(r"\\cdot", "*"), (r"\\times", "*")],
            Pass::SquareRoot => &[(r"\\sqrt\{([^}]+)\}", "sqrt(${1})")],
            Pass::NaturalLog => &[(r"\\ln", "ln")],
            // Subscript form first, otherwise the bare rule eats the backslash it needs.
            Pass::Logarithm => &[(r"\\log_\{([^}]+)\}", "log_${1}"), (r"\\log", "log")],
            Pass::Summation => &[
                (r"\\sum_\{([^}]+)\}\^\{([^}]+)\}", "sum_{${1}}^{${2}}"),
                (r"\\sum", "sum"),
            ],
            Pass::SuperscriptBraces => &[(r"\^\{([^}]+)\}", "^${1}")],
            Pass::NumericExponentParens => &[(r"\^\(([0-9]+)\)", "^${1}")],
            Pass::SubscriptBraces => &[(r"_\{([^}]+)\}", "_${1}")],
            Pass::Spacing => &[
                (r"\\,", ""),
                (r"\\;", ""),
                (r"\\!", ""),
                (r"\\ ", " "),
            ],
            Pass::TextLiteral => &[(r"\\text\{([^}]*)\}", "${1}")],
            Pass::Whitespace => &[(r"\s+", " ")],
        }
    }

    /// Apply this pass alone.
    pub fn apply(self, input: &str) -> String {
        let mut out = input.to_string();
        for (re, replacement) in compiled(self) {
            let next = re.replace_all(&out, *replacement).into_owned();
            out = next;
        }
        out
    }
}

type CompiledPass = Vec<(Regex, &'static str)>;

static COMPILED: OnceLock<Vec<CompiledPass>> = OnceLock::new();

fn compile_all() -> Vec<CompiledPass> {
    Pass::ALL
        .iter()
        .map(|pass| {
            pass.rewrites()
                .iter()
                .map(|(pattern, replacement)| {
                    let re = Regex::new(pattern).expect("rewrite patterns must be valid");
                    (re, *replacement)
                })
                .collect()
        })
        .collect()
}

fn compiled(pass: Pass) -> &'static [(Regex, &'static str)] {
    let index = Pass::ALL
        .iter()
        .position(|p| *p == pass)
        .unwrap_or_default();
    &COMPILED.get_or_init(compile_all)[index]
}

/// True when the input has nothing for the passes to do: no command, no braced script.
pub fn is_plain(s: &str) -> bool {
    !s.contains('\\') && !s.contains("^{") && !s.contains("_{")
}

/// Rewrite math-editor markup into the answer dialect the grading backend expects.
///
/// Total: unrecognized constructs pass through unchanged.
pub fn canonicalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if is_plain(trimmed) {
        return trimmed.to_string();
    }

    let mut out = trimmed.to_string();
    for pass in Pass::ALL {
        let next = pass.apply(&out);
        if next != out {
            log::trace!("{}: {:?} -> {:?}", pass.name(), out, next);
            out = next;
        }
    }
    let out = out.trim().to_string();
    log::debug!("Canonicalized {:?} -> {:?}", raw, out);
    out
}
