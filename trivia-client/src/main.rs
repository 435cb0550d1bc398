use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trivia_client::{
    config::Config, http_api::HttpTriviaApi, runner::HELP_TEXT, runner::run_session,
    terminal::TerminalView,
};
use trivia_core::GameController;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting trivia client...");

    let config = Config::new();
    let api_url = config.api_url().context("Invalid TRIVIA_API_URL")?;
    info!("Using backend at {}", api_url);

    let api = HttpTriviaApi::new(api_url.clone(), config.request_timeout())?;
    let view = TerminalView::new(std::io::stdout(), api_url);
    let mut controller = GameController::new(api, view, config.game_settings());

    println!("{}", HELP_TEXT);
    let input = BufReader::new(tokio::io::stdin());

    tokio::select! {
        result = run_session(&mut controller, input) => result?,
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    info!("Trivia client stopped.");
    Ok(())
}
