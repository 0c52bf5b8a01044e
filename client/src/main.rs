use clap::Parser;
use client::display::QuizView;
use client::input::AnswerInput;
use client::network::{ClientOutcome, QuizClient};
use log::info;
use shared::DEFAULT_PORT;
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to connect to
    #[arg(short = 's', long, default_value_t = format!("127.0.0.1:{}", DEFAULT_PORT))]
    server: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    info!("Starting client...");
    info!("Connecting to: {}", args.server);

    let mut client = match QuizClient::connect(&args.server).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Unable to connect to the server: {}", e);
            std::process::exit(1);
        }
    };

    let mut input = AnswerInput::new(BufReader::new(tokio::io::stdin()));
    let mut view = QuizView::new(std::io::stdout());

    match client.run(&mut input, &mut view).await? {
        ClientOutcome::Finished { final_score } => {
            info!("Quiz finished with final score {:?}", final_score);
        }
        ClientOutcome::ConnectionLost => info!("Connection to the server was lost"),
        ClientOutcome::InputClosed => info!("Input closed before the quiz ended"),
    }

    Ok(())
}
