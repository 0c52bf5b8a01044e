//! Scripted player for smoke testing a running quiz server.
//!
//! Looks up each question in the built-in pool and answers it, or answers
//! everything wrong with `--wrong`.

use clap::Parser;
use server::questions::QuestionPool;
use shared::{parse_feedback, ServerLine, DEFAULT_PORT};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to connect to
    #[arg(short = 's', long, default_value_t = format!("127.0.0.1:{}", DEFAULT_PORT))]
    server: String,

    /// Answer every question incorrectly
    #[arg(long)]
    wrong: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let pool = QuestionPool::reference();

    let stream = TcpStream::connect(&args.server).await?;
    println!("Connected to {}", args.server);

    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    loop {
        let Some(line) = lines.next_line().await? else {
            println!("Server closed the connection");
            break;
        };

        let question = match ServerLine::expecting_question(&line) {
            ServerLine::QuizOver { text, .. } => {
                println!("{}", text);
                break;
            }
            ServerLine::Question(question) => question,
            _ => continue,
        };

        let answer = match (args.wrong, pool.answer_for(&question)) {
            (false, Some(answer)) => answer.to_string(),
            _ => "no idea".to_string(),
        };
        println!("Q: {}", question);
        println!("A: {}", answer);

        write_half.write_all(format!("{}\n", answer).as_bytes()).await?;

        let Some(feedback) = lines.next_line().await? else {
            println!("Server closed the connection");
            break;
        };

        match parse_feedback(&feedback) {
            Some(parsed) => println!(
                "   {} (score {})",
                parsed.message,
                parsed.score.as_deref().unwrap_or("?")
            ),
            None => println!("   {}", feedback),
        }
    }

    Ok(())
}
