//! # Quiz Server Library
//!
//! Serves trivia quizzes over a newline-delimited TCP text protocol. Every
//! connecting client gets its own random selection of questions from a fixed
//! pool and plays through them one at a time, receiving feedback and a running
//! score after each answer.
//!
//! ## Architecture Design
//!
//! ### Task Per Connection
//! The accept loop hands every connection to a freshly spawned tokio task that
//! owns the socket, the sampled questions and the score. Sessions never talk
//! to each other and share no mutable state, so there are no locks anywhere
//! in the server. A stalled or misbehaving client only ever blocks its own
//! task.
//!
//! ### Immutable Question Pool
//! The pool is built once at startup and owned by the accept loop. Sampling
//! shuffles a copy, so the pool is never written after construction.
//!
//! ## Module Organization
//!
//! ### Questions Module (`questions`)
//! - Question/answer pairs and case-insensitive grading
//! - The built-in reference pool
//! - Uniform sampling without replacement
//!
//! ### Session Module (`session`)
//! - The per-connection state machine (awaiting answer `i`, finished)
//! - The async driver that speaks the line protocol over any stream
//!
//! ### Network Module (`network`)
//! - Listener setup and validation of the per-session question count
//! - The accept loop and per-connection task spawning
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::network::Server;
//! use server::questions::QuestionPool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = Server::bind("0.0.0.0:1234", QuestionPool::reference(), 5).await?;
//!
//!     // Runs until the process is stopped; each client is served on its own task
//!     server.run().await;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Handling
//!
//! A client disconnecting or a socket error ends that client's session only.
//! Failing to bind the listener is the only error that stops the server.

pub mod network;
pub mod questions;
pub mod session;
