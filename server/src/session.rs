//! Per-connection quiz session
//!
//! A session walks through its assigned questions strictly in order: send a
//! question, wait for one answer line, grade it, reply with feedback, and move
//! on. After the last answer the final score line is sent and the connection is
//! closed. The state machine ([`Session`]) is kept free of I/O so it can be
//! tested directly; [`run_session`] drives it over any async line stream.

use crate::questions::Question;
use log::debug;
use shared::{
    final_score_line, read_line_lossy, Feedback, Verdict, POINTS_PER_CORRECT_ANSWER,
};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingAnswer(usize),
    Finished,
}

/// Quiz progress for a single connection
#[derive(Debug)]
pub struct Session {
    questions: Vec<Question>,
    state: SessionState,
    score: u32,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        let state = if questions.is_empty() {
            SessionState::Finished
        } else {
            SessionState::AwaitingAnswer(0)
        };

        Self {
            questions,
            state,
            score: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Number of answers graded so far
    pub fn answered(&self) -> usize {
        match self.state {
            SessionState::AwaitingAnswer(index) => index,
            SessionState::Finished => self.questions.len(),
        }
    }

    /// The question currently waiting for an answer
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::AwaitingAnswer(index) => self.questions.get(index),
            SessionState::Finished => None,
        }
    }

    /// Grades an answer to the current question and advances.
    ///
    /// Returns None once the session is finished.
    pub fn grade(&mut self, answer: &str) -> Option<Feedback> {
        let index = match self.state {
            SessionState::AwaitingAnswer(index) => index,
            SessionState::Finished => return None,
        };

        let verdict = Verdict::from_correct(self.questions[index].is_correct(answer));
        if verdict == Verdict::Correct {
            self.score += POINTS_PER_CORRECT_ANSWER;
        }

        self.state = if index + 1 == self.questions.len() {
            SessionState::Finished
        } else {
            SessionState::AwaitingAnswer(index + 1)
        };

        Some(Feedback::new(verdict, self.score))
    }
}

/// How a session ended when no I/O error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed { score: u32 },
    Disconnected { score: u32, answered: usize },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("connection I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

async fn send_line<W>(writer: &mut W, line: &str) -> Result<(), SessionError>
where
    W: AsyncWrite + Unpin,
{
    let mut data = String::with_capacity(line.len() + 1);
    data.push_str(line);
    data.push('\n');
    writer.write_all(data.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Runs a full quiz over a connection.
///
/// Reads stop at the first missing line; in that case nothing more is written
/// and the outcome is [`SessionOutcome::Disconnected`]. Only the line
/// terminator is stripped from answers before grading; bytes that are not
/// valid UTF-8 are decoded lossily, so such an answer is simply graded.
pub async fn run_session<R, W>(
    mut reader: R,
    mut writer: W,
    questions: Vec<Question>,
) -> Result<SessionOutcome, SessionError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new(questions);

    while let Some(question) = session.current_question() {
        send_line(&mut writer, &question.text).await?;

        let answer = match read_line_lossy(&mut reader).await? {
            Some(answer) => answer,
            None => {
                return Ok(SessionOutcome::Disconnected {
                    score: session.score(),
                    answered: session.answered(),
                });
            }
        };

        if let Some(feedback) = session.grade(&answer) {
            debug!("Answer {:?} graded {}", answer, feedback);
            send_line(&mut writer, &feedback.to_string()).await?;
        }
    }

    send_line(&mut writer, &final_score_line(session.score())).await?;
    writer.shutdown().await?;

    Ok(SessionOutcome::Completed {
        score: session.score(),
    })
}
