//! Answer input collection with local validation

use shared::read_line_lossy;
use tokio::io::AsyncBufRead;

/// A line typed by the player, classified before anything reaches the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Raw text to send, exactly as typed
    Answer(String),
    /// Blank or whitespace-only input; never sent to the server
    Empty,
}

impl Submission {
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Submission::Empty
        } else {
            Submission::Answer(raw.to_string())
        }
    }
}

/// Reads answers line by line from any async source (stdin in the binary).
///
/// Input that is not valid UTF-8 is decoded lossily and still submitted.
pub struct AnswerInput<R> {
    source: R,
}

impl<R> AnswerInput<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Next submission, or None once the input source is exhausted
    pub async fn next_submission(&mut self) -> std::io::Result<Option<Submission>> {
        let line = read_line_lossy(&mut self.source).await?;
        Ok(line.map(|raw| Submission::from_raw(&raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(Submission::from_raw(""), Submission::Empty);
        assert_eq!(Submission::from_raw("   "), Submission::Empty);
        assert_eq!(Submission::from_raw("\t"), Submission::Empty);
    }

    #[test]
    fn test_answer_is_kept_verbatim() {
        assert_eq!(
            Submission::from_raw("  da Vinci "),
            Submission::Answer("  da Vinci ".to_string())
        );
    }

    #[tokio::test]
    async fn test_answer_input_sequence() {
        let mut input = AnswerInput::new(&b"Seoul\n\n  \nH2O\n"[..]);

        assert_eq!(
            input.next_submission().await.unwrap(),
            Some(Submission::Answer("Seoul".to_string()))
        );
        assert_eq!(input.next_submission().await.unwrap(), Some(Submission::Empty));
        assert_eq!(input.next_submission().await.unwrap(), Some(Submission::Empty));
        assert_eq!(
            input.next_submission().await.unwrap(),
            Some(Submission::Answer("H2O".to_string()))
        );
        assert_eq!(input.next_submission().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_answer_input_accepts_invalid_utf8() {
        let mut input = AnswerInput::new(&b"Reykjav\xedk\r\n"[..]);

        assert_eq!(
            input.next_submission().await.unwrap(),
            Some(Submission::Answer("Reykjav\u{FFFD}k".to_string()))
        );
        assert_eq!(input.next_submission().await.unwrap(), None);
    }
}
