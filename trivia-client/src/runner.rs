use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};
use trivia_core::{GameController, GameView, GuessOutcome, MessageArea, MessageKind, TriviaApi};

pub const HELP_TEXT: &str =
    "Commands: /new (start over), /next (retry image), /leaderboard, /help, /quit";

/// One line of operator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A guess while playing, the player's name after game over
    Text(String),
    NewGame,
    NextImage,
    Leaderboard,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "/new" => Command::NewGame,
            "/next" => Command::NextImage,
            "/leaderboard" | "/lb" => Command::Leaderboard,
            "/help" | "/?" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Text(line.to_string()),
        }
    }
}

/// Play from startup until the input ends or the operator quits.
///
/// A scored guess schedules the next image; the delay is waited out before
/// the next line is read, which keeps guessing closed until the image is up.
pub async fn run_session<A, V, R>(controller: &mut GameController<A, V>, input: R) -> Result<()>
where
    A: TriviaApi,
    V: GameView,
    R: AsyncBufRead + Unpin,
{
    controller.start_session().await;
    controller.refresh_leaderboard().await;

    let mut lines = input.lines();
    let mut pending_advance: Option<Duration> = None;

    loop {
        if let Some(delay) = pending_advance.take() {
            tokio::time::sleep(delay).await;
            controller.load_next_image().await;
        }

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            info!("Input closed, ending session");
            break;
        };

        match Command::parse(&line) {
            Command::Quit => {
                info!("Quit requested");
                break;
            }
            Command::NewGame => controller.start_session().await,
            Command::NextImage => {
                if controller.session().can_guess() {
                    debug!("Image already loaded, ignoring /next");
                } else {
                    controller.load_next_image().await;
                }
            }
            Command::Leaderboard => controller.refresh_leaderboard().await,
            Command::Help => {
                let area = if controller.session().is_over() {
                    MessageArea::ScoreSubmit
                } else {
                    MessageArea::Main
                };
                controller
                    .view_mut()
                    .render_message(area, MessageKind::Info, HELP_TEXT);
            }
            Command::Text(text) => {
                if controller.session().is_over() {
                    controller.submit_score(&text).await;
                } else if let GuessOutcome::NextImageAfter(delay) =
                    controller.submit_guess(&text).await
                {
                    pending_advance = Some(delay);
                }
            }
        }
    }

    Ok(())
}
