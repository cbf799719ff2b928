//! Feedback rendering for a graded answer: correct answer and solution steps through the
//! math renderer.

use serde::{Deserialize, Serialize};

use crate::core::render::{Typesetter, render};

/// Grading response for a submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_answer: String,
    #[serde(default)]
    pub solution_steps: Vec<String>,
    #[serde(default)]
    pub mastery_changed: bool,
    #[serde(default)]
    pub new_mastery: Option<String>,
    pub topic_id: String,
    pub difficulty: u32,
}

/// Display-ready feedback. All markup fields are already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub correct: bool,
    /// Only present when the answer was wrong.
    pub correct_answer_html: Option<String>,
    pub steps_html: Vec<String>,
    pub mastery_notice: Option<String>,
}

/// `fractions_basic` -> `fractions basic`
fn topic_title(topic_id: &str) -> String {
    topic_id.replace('_', " ")
}

pub fn render_feedback(result: &AnswerResult, typesetter: &dyn Typesetter) -> FeedbackView {
    let correct_answer_html =
        (!result.correct).then(|| render(&result.correct_answer, false, typesetter));
    let steps_html = result
        .solution_steps
        .iter()
        .map(|step| render(step, false, typesetter))
        .collect();
    let mastery_notice = (result.mastery_changed
        && result.new_mastery.as_deref() == Some("mastered"))
    .then(|| format!("Topic mastered: {}!", topic_title(&result.topic_id)));

    FeedbackView {
        correct: result.correct,
        correct_answer_html,
        steps_html,
        mastery_notice,
    }
}

impl FeedbackView {
    /// Simple HTML fragment for the whole panel.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if self.correct {
            out.push_str("<h3 class=\"feedback-correct\">Correct!</h3>\n");
        } else {
            out.push_str("<h3 class=\"feedback-incorrect\">Incorrect</h3>\n");
        }
        if let Some(answer) = &self.correct_answer_html {
            out.push_str("<p>Correct answer:</p>\n<div class=\"correct-answer\">");
            out.push_str(answer);
            out.push_str("</div>\n");
        }
        if !self.steps_html.is_empty() {
            out.push_str("<p>Solution:</p>\n<ol>\n");
            for step in &self.steps_html {
                out.push_str("<li>");
                out.push_str(step);
                out.push_str("</li>\n");
            }
            out.push_str("</ol>\n");
        }
        if let Some(notice) = &self.mastery_notice {
            out.push_str("<p class=\"mastery\">");
            out.push_str(&html_escape::encode_text(notice));
            out.push_str("</p>\n");
        }
        out
    }
}
