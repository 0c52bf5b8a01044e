//! Line protocol spoken between the quiz server and its clients.
//!
//! Every message is a single UTF-8 line terminated by `\n`. The server sends a
//! question, the client answers it, the server replies with a feedback line and
//! then either the next question or the end-of-quiz line before closing.

use std::fmt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const DEFAULT_PORT: u16 = 1234;
pub const POINTS_PER_CORRECT_ANSWER: u32 = 10;

/// Substring clients look for to detect the end of a quiz.
pub const QUIZ_OVER_MARKER: &str = "Quiz is over";

const FEEDBACK_SEPARATOR: char = '|';
const SCORE_PREFIX: &str = "Score:";
const FINAL_SCORE_PREFIX: &str = "Quiz is over. Final score: ";

/// Outcome of grading a single answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Correct => "Correct!",
            Verdict::Incorrect => "Incorrect!",
        }
    }
}

/// Feedback line sent after every graded answer, e.g. `Correct!|Score:20`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub verdict: Verdict,
    pub score: u32,
}

impl Feedback {
    pub fn new(verdict: Verdict, score: u32) -> Self {
        Self { verdict, score }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.verdict.label(),
            FEEDBACK_SEPARATOR,
            SCORE_PREFIX,
            self.score
        )
    }
}

/// Client-side view of a feedback line.
///
/// Mirrors how clients read feedback: split on `|`, keep the first segment as
/// the message, and pull the score out of the second segment when it starts
/// with `Score:`. The message is kept verbatim so a server sending an
/// unexpected verdict still gets displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFeedback {
    pub message: String,
    pub score: Option<String>,
}

/// Parses a feedback line. Returns None when the line has no `|` separator.
pub fn parse_feedback(line: &str) -> Option<ParsedFeedback> {
    if !line.contains(FEEDBACK_SEPARATOR) {
        return None;
    }

    let mut parts = line.split(FEEDBACK_SEPARATOR);
    let message = parts.next().unwrap_or_default().to_string();
    let score = parts
        .next()
        .filter(|segment| segment.starts_with(SCORE_PREFIX))
        .and_then(|segment| segment.split(':').nth(1))
        .map(str::to_string);

    Some(ParsedFeedback { message, score })
}

/// Formats the last line of a quiz
pub fn final_score_line(score: u32) -> String {
    format!("{}{}", FINAL_SCORE_PREFIX, score)
}

/// Whether a server line marks the end of the quiz
pub fn is_quiz_over(line: &str) -> bool {
    line.contains(QUIZ_OVER_MARKER)
}

/// Extracts the score from a well-formed end-of-quiz line
pub fn parse_final_score(line: &str) -> Option<u32> {
    line.strip_prefix(FINAL_SCORE_PREFIX)?.trim().parse().ok()
}

/// Reads one line, stripping the `\n` or `\r\n` terminator.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of failing
/// the read. Returns None at end of stream.
pub async fn read_line_lossy<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Classification of a line received from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerLine {
    Question(String),
    Feedback(ParsedFeedback),
    QuizOver {
        text: String,
        final_score: Option<u32>,
    },
    Other(String),
}

impl ServerLine {
    /// Classifies a line that arrived while waiting for a question.
    ///
    /// Anything that is not the end-of-quiz line is treated as question text,
    /// including text containing `|`.
    pub fn expecting_question(line: &str) -> Self {
        if is_quiz_over(line) {
            ServerLine::QuizOver {
                text: line.to_string(),
                final_score: parse_final_score(line),
            }
        } else {
            ServerLine::Question(line.to_string())
        }
    }

    /// Classifies a line that arrived in reply to an answer
    pub fn expecting_feedback(line: &str) -> Self {
        match parse_feedback(line) {
            Some(feedback) => ServerLine::Feedback(feedback),
            None => ServerLine::Other(line.to_string()),
        }
    }
}
