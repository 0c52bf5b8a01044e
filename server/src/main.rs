use clap::Parser;
use log::info;
use server::network::{Server, DEFAULT_SAMPLE_SIZE};
use server::questions::QuestionPool;
use shared::DEFAULT_PORT;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server IP address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Number of questions asked in each session
    #[arg(short = 'n', long = "questions", default_value_t = DEFAULT_SAMPLE_SIZE)]
    questions: usize,
}

/// Parses command-line arguments, binds the listener and serves quizzes until Ctrl+C.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let address = format!("{}:{}", args.host, args.port);

    let server = Server::bind(&address, QuestionPool::reference(), args.questions).await?;

    tokio::select! {
        _ = server.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
