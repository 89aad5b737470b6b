use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use valuation_builder::models::Config;
use valuation_builder::session::Session;

/// Interactive company valuation summary builder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Run one public company end to end: fetch, summarize, export
    #[arg(short, long)]
    ticker: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("valuation_builder=info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();

    // The LLM credential is the one required setting; absence is fatal.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("❌ Configuration Error: {}", e);
            eprintln!("Make sure you have a .env file with your Groq API key.");
            std::process::exit(1);
        }
    };

    let mut session = Session::new(&config)?;

    match cli.ticker {
        Some(ticker) => session.run_ticker(&ticker).await,
        None => session.run().await,
    }
}
