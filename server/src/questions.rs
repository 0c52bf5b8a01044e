//! Immutable question pool and per-session sampling
//!
//! The pool is built once at startup and only ever read afterwards. Each
//! session receives its own owned copy of a random subset, so nothing here
//! needs synchronization.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// A single trivia question and its expected answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answer: String,
}

impl Question {
    pub fn new(text: &str, answer: &str) -> Self {
        Self {
            text: text.to_string(),
            answer: answer.to_string(),
        }
    }

    /// Case-insensitive exact comparison against the expected answer.
    ///
    /// Surrounding whitespace is significant: `" Seoul"` does not match `"Seoul"`.
    pub fn is_correct(&self, input: &str) -> bool {
        if self.answer.chars().count() != input.chars().count() {
            return false;
        }

        self.answer
            .chars()
            .zip(input.chars())
            .all(|(expected, given)| chars_equal_ignore_case(expected, given))
    }
}

fn chars_equal_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("requested {requested} questions but the pool only holds {available}")]
    NotEnoughQuestions { requested: usize, available: usize },
}

/// Fixed, read-only list of every question the server can ask
#[derive(Debug, Clone)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The built-in pool served by the quiz server
    pub fn reference() -> Self {
        Self::new(vec![
            Question::new("What is the capital of KOREA?", "Seoul"),
            Question::new("What is ?", "12"),
            Question::new("Who wrote 'Hamlet'?", "Shakespeare"),
            Question::new("What is the chemical symbol for water?", "H2O"),
            Question::new("What is 5 * 6?", "30"),
            Question::new("What is the smallest prime number?", "2"),
            Question::new("What is the capital of Japan?", "Tokyo"),
            Question::new("Who painted the Mona Lisa?", "da Vinci"),
        ])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Draws `n` distinct questions uniformly at random, in random order.
    ///
    /// Shuffles a copy of the pool and keeps the first `n` entries; the pool
    /// itself is left untouched.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Question>, SampleError> {
        self.check_sample_size(n)?;
        Ok(self.shuffled_prefix(n, rng))
    }

    /// Binds the pool to a fixed sample size, checked once up front
    pub fn into_sampler(self, n: usize) -> Result<SessionSampler, SampleError> {
        self.check_sample_size(n)?;
        Ok(SessionSampler { pool: self, size: n })
    }

    fn check_sample_size(&self, n: usize) -> Result<(), SampleError> {
        if n > self.questions.len() {
            return Err(SampleError::NotEnoughQuestions {
                requested: n,
                available: self.questions.len(),
            });
        }
        Ok(())
    }

    fn shuffled_prefix<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Question> {
        let mut shuffled = self.questions.clone();
        shuffled.shuffle(rng);
        shuffled.truncate(n);
        shuffled
    }

    /// Looks up the expected answer for a question text
    pub fn answer_for(&self, text: &str) -> Option<&str> {
        self.questions
            .iter()
            .find(|question| question.text == text)
            .map(|question| question.answer.as_str())
    }
}

/// A pool paired with a sample size it is known to satisfy
#[derive(Debug, Clone)]
pub struct SessionSampler {
    pool: QuestionPool,
    size: usize,
}

impl SessionSampler {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    /// Draws the questions for one session
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Question> {
        self.pool.shuffled_prefix(self.size, rng)
    }
}
