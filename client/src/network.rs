use crate::display::{
    QuizView, CONNECTION_LOST_WAITING_FEEDBACK, CONNECTION_LOST_WAITING_QUESTION,
    EMPTY_ANSWER_MESSAGE,
};
use crate::input::{AnswerInput, Submission};
use log::{debug, info, warn};
use shared::ServerLine;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

/// How a client run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientOutcome {
    /// The server sent the end-of-quiz line
    Finished { final_score: Option<u32> },
    /// The server went away before the quiz was over
    ConnectionLost,
    /// The player's input ran out
    InputClosed,
}

/// Client side of one quiz connection
pub struct QuizClient<R, W> {
    lines: Lines<R>,
    writer: W,
}

impl QuizClient<BufReader<OwnedReadHalf>, OwnedWriteHalf> {
    pub async fn connect(server_addr: &str) -> std::io::Result<Self> {
        let stream = TcpStream::connect(server_addr).await?;
        info!("Connected to {}", server_addr);

        let (read_half, write_half) = stream.into_split();
        Ok(Self::new(BufReader::new(read_half), write_half))
    }
}

impl<R, W> QuizClient<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: reader.lines(),
            writer,
        }
    }

    /// Next line from the server; read errors count as a lost connection
    async fn receive(&mut self) -> Option<String> {
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                warn!("Error receiving from server: {}", e);
                None
            }
        }
    }

    async fn send_answer(&mut self, answer: &str) -> std::io::Result<()> {
        self.writer
            .write_all(format!("{}\n", answer).as_bytes())
            .await?;
        self.writer.flush().await
    }

    /// Plays the quiz until the server ends it, the connection drops or the
    /// player's input runs out. Only display and input errors are returned.
    pub async fn run<I, O>(
        &mut self,
        input: &mut AnswerInput<I>,
        view: &mut QuizView<O>,
    ) -> std::io::Result<ClientOutcome>
    where
        I: AsyncBufRead + Unpin,
        O: Write,
    {
        view.show_welcome()?;

        loop {
            let Some(line) = self.receive().await else {
                view.finish(CONNECTION_LOST_WAITING_QUESTION)?;
                return Ok(ClientOutcome::ConnectionLost);
            };

            match ServerLine::expecting_question(&line) {
                ServerLine::QuizOver { text, final_score } => {
                    view.finish(&text)?;
                    return Ok(ClientOutcome::Finished { final_score });
                }
                _ => view.show_question(&line)?,
            }

            let answer = loop {
                match input.next_submission().await? {
                    Some(Submission::Answer(answer)) => break answer,
                    Some(Submission::Empty) => {
                        view.show_feedback(EMPTY_ANSWER_MESSAGE)?;
                        view.prompt()?;
                    }
                    None => {
                        info!("Input closed, leaving the quiz");
                        return Ok(ClientOutcome::InputClosed);
                    }
                }
            };

            if let Err(e) = self.send_answer(&answer).await {
                warn!("Error sending answer: {}", e);
                view.finish(CONNECTION_LOST_WAITING_FEEDBACK)?;
                return Ok(ClientOutcome::ConnectionLost);
            }

            let Some(feedback) = self.receive().await else {
                view.finish(CONNECTION_LOST_WAITING_FEEDBACK)?;
                return Ok(ClientOutcome::ConnectionLost);
            };
            debug!("Feedback: {}", feedback);

            match ServerLine::expecting_feedback(&feedback) {
                ServerLine::Feedback(parsed) => {
                    view.show_feedback(&parsed.message)?;
                    if let Some(score) = parsed.score {
                        view.set_score(&score)?;
                    }
                }
                _ => view.show_feedback(&feedback)?,
            }
        }
    }
}
