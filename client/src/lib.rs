//! # Quiz Client Library
//!
//! Terminal front-end for the quiz server. It connects over TCP, shows each
//! question as it arrives, reads answers from the player and displays the
//! feedback and running score sent back by the server.
//!
//! ## Module Organization
//!
//! ### Network Module (`network`)
//! Drives the client side of the line protocol:
//! - Connection setup
//! - Strict question, answer, feedback ordering
//! - Detection of the end-of-quiz line and of dropped connections
//!
//! ### Input Module (`input`)
//! Reads answers line by line and rejects blank submissions locally, so an
//! empty answer never reaches the server.
//!
//! ### Display Module (`display`)
//! Renders the question, feedback message and score label, and tracks whether
//! input is still accepted.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use client::display::QuizView;
//! use client::input::AnswerInput;
//! use client::network::QuizClient;
//! use tokio::io::BufReader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = QuizClient::connect("127.0.0.1:1234").await?;
//!     let mut input = AnswerInput::new(BufReader::new(tokio::io::stdin()));
//!     let mut view = QuizView::new(std::io::stdout());
//!
//!     let outcome = client.run(&mut input, &mut view).await?;
//!     println!("{:?}", outcome);
//!
//!     Ok(())
//! }
//! ```

pub mod display;
pub mod input;
pub mod network;
