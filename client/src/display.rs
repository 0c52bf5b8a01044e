//! Terminal presentation of the quiz.
//!
//! Keeps the same pieces of state a windowed front-end would show: the
//! current question, a feedback message, the score label and whether input is
//! still accepted. Everything is written to a plain `io::Write` so tests can
//! capture it.

use std::io::{self, Write};

pub const INITIAL_FEEDBACK: &str = "Please enter your answer and press Enter.";
pub const EMPTY_ANSWER_MESSAGE: &str = "Answer cannot be empty!";
pub const CONNECTION_LOST_WAITING_QUESTION: &str = "Connection lost. Quiz ended.";
pub const CONNECTION_LOST_WAITING_FEEDBACK: &str = "Connection lost. Please restart the quiz.";

pub struct QuizView<W: Write> {
    out: W,
    question: Option<String>,
    feedback_label: String,
    score_label: String,
    input_enabled: bool,
}

impl<W: Write> QuizView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            question: None,
            feedback_label: INITIAL_FEEDBACK.to_string(),
            score_label: "Score: 0".to_string(),
            input_enabled: true,
        }
    }

    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    pub fn feedback_label(&self) -> &str {
        &self.feedback_label
    }

    pub fn score_label(&self) -> &str {
        &self.score_label
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn show_welcome(&mut self) -> io::Result<()> {
        writeln!(self.out, "=== Quiz Game ===")?;
        writeln!(self.out, "{}", self.feedback_label)?;
        self.out.flush()
    }

    pub fn show_question(&mut self, question: &str) -> io::Result<()> {
        self.question = Some(question.to_string());
        writeln!(self.out)?;
        writeln!(self.out, "Question: {}", question)?;
        self.prompt()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "Your answer: ")?;
        self.out.flush()
    }

    pub fn show_feedback(&mut self, message: &str) -> io::Result<()> {
        self.feedback_label = message.to_string();
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    pub fn set_score(&mut self, score: &str) -> io::Result<()> {
        self.score_label = format!("Score: {}", score);
        writeln!(self.out, "{}", self.score_label)?;
        self.out.flush()
    }

    /// Shows a closing message and stops accepting answers
    pub fn finish(&mut self, message: &str) -> io::Result<()> {
        self.input_enabled = false;
        self.feedback_label = message.to_string();
        writeln!(self.out)?;
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(view: QuizView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_initial_labels() {
        let view = QuizView::new(Vec::new());
        assert_eq!(view.feedback_label(), INITIAL_FEEDBACK);
        assert_eq!(view.score_label(), "Score: 0");
        assert!(view.input_enabled());
        assert!(view.question().is_none());
    }

    #[test]
    fn test_question_and_feedback_rendering() {
        let mut view = QuizView::new(Vec::new());
        view.show_question("What is 5 * 6?").unwrap();
        view.show_feedback("Correct!").unwrap();
        view.set_score("10").unwrap();

        assert_eq!(view.question(), Some("What is 5 * 6?"));
        assert_eq!(view.feedback_label(), "Correct!");
        assert_eq!(view.score_label(), "Score: 10");

        let text = output(view);
        assert!(text.contains("Question: What is 5 * 6?"));
        assert!(text.contains("Your answer: "));
        assert!(text.contains("Correct!\n"));
        assert!(text.contains("Score: 10\n"));
    }

    #[test]
    fn test_finish_disables_input() {
        let mut view = QuizView::new(Vec::new());
        view.finish("Quiz is over. Final score: 30").unwrap();

        assert!(!view.input_enabled());
        assert_eq!(view.feedback_label(), "Quiz is over. Final score: 30");
        assert!(output(view).contains("Quiz is over. Final score: 30"));
    }
}
