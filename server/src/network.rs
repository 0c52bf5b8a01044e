//! Server network layer: TCP listener and per-connection session tasks

use crate::questions::{Question, QuestionPool, SampleError, SessionSampler};
use crate::session::{run_session, SessionOutcome};
use log::{error, info, warn};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tokio::io::BufReader;
use tokio::net::{TcpListener, TcpStream};

pub const DEFAULT_SAMPLE_SIZE: usize = 5;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid sample size: {0}")]
    SampleSize(#[from] SampleError),
    #[error("sample size must be at least 1")]
    EmptySample,
}

/// Accepts quiz players and runs one independent session per connection
pub struct Server {
    listener: TcpListener,
    sampler: SessionSampler,
}

impl Server {
    /// Binds the listener. Fails if the address is unavailable or the pool
    /// cannot supply `sample_size` distinct questions.
    pub async fn bind(
        addr: &str,
        pool: QuestionPool,
        sample_size: usize,
    ) -> Result<Self, ServerError> {
        if sample_size == 0 {
            return Err(ServerError::EmptySample);
        }
        let sampler = pool.into_sampler(sample_size)?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.to_string(),
                source,
            })?;
        info!("Quiz server listening on {}", addr);

        Ok(Server { listener, sampler })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept loop. Never waits on a session; only returns if the task is dropped.
    pub async fn run(self) {
        let mut next_session_id: u64 = 1;

        info!(
            "Server started, {} questions per session from a pool of {}",
            self.sampler.size(),
            self.sampler.pool().len()
        );

        loop {
            let (stream, addr) = match self.listener.accept().await {
                Ok(connection) => connection,
                Err(e) => {
                    error!("Failed to accept connection: {}", e);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    continue;
                }
            };

            let session_id = next_session_id;
            next_session_id += 1;

            let questions = self.sampler.draw(&mut rand::thread_rng());

            info!("Session {}: client connected from {}", session_id, addr);
            tokio::spawn(handle_connection(session_id, stream, addr, questions));
        }
    }
}

async fn handle_connection(
    session_id: u64,
    stream: TcpStream,
    addr: SocketAddr,
    questions: Vec<Question>,
) {
    let (read_half, write_half) = stream.into_split();

    match run_session(BufReader::new(read_half), write_half, questions).await {
        Ok(SessionOutcome::Completed { score }) => {
            info!(
                "Session {}: quiz finished for {} with score {}",
                session_id, addr, score
            );
        }
        Ok(SessionOutcome::Disconnected { score, answered }) => {
            warn!(
                "Session {}: {} disconnected after {} answers (score {})",
                session_id, addr, answered, score
            );
        }
        Err(e) => {
            error!("Session {}: connection with {} aborted: {}", session_id, addr, e);
        }
    }

    info!("Session {}: ended", session_id);
}
