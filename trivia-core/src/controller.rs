use std::time::Duration;

use tracing::{debug, error, info, warn};
use trivia_types::{GuessRequest, ScoreSubmission};

use crate::{
    ApiError, Control, GamePhase, GameSettings, GameView, LeaderboardDisplay, Layout, MessageArea,
    MessageKind, SessionState, TriviaApi,
};

/// What the driver should do after a guess command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Turns are exhausted; nothing happened
    Ignored,
    /// Empty guess or no image; a validation message was shown
    Rejected,
    /// The request failed; state is unchanged and the guess controls are back
    Failed,
    /// The guess was scored; load the next image once the delay has passed
    NextImageAfter(Duration),
    /// The guess used the last turn and the game-over view is up
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// Not in the game-over phase, or the score was already accepted
    Ignored,
    Rejected,
    Failed,
    Submitted,
}

/// Drives one game session against a backend and a view.
pub struct GameController<A, V> {
    api: A,
    view: V,
    settings: GameSettings,
    session: SessionState,
}

impl<A: TriviaApi, V: GameView> GameController<A, V> {
    pub fn new(api: A, view: V, settings: GameSettings) -> Self {
        let session = SessionState::new(settings.total_turns);
        Self {
            api,
            view,
            settings,
            session,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Reset to a fresh session and request its first image.
    pub async fn start_session(&mut self) {
        self.session = SessionState::new(self.settings.total_turns);
        info!(
            "Starting session {} with {} turns",
            self.session.session_id,
            self.session.turns_remaining()
        );

        self.view.set_layout(Layout::Playing);
        self.render_status();
        self.view.set_controls_enabled(Control::ScoreSubmit, true);
        self.view.render_message(MessageArea::ScoreSubmit, MessageKind::Info, "");
        self.view.render_message(MessageArea::Main, MessageKind::Info, "");

        if self.session.is_over() {
            // Nothing to play with zero configured turns
            self.enter_game_over();
            return;
        }

        // Guessing opens once an image is on screen
        self.view.set_controls_enabled(Control::Guess, false);
        self.load_next_image().await;
    }

    /// Fetch and show the next image. Returns whether an image was loaded.
    pub async fn load_next_image(&mut self) -> bool {
        if self.session.is_over() {
            debug!("Ignoring image load in phase {:?}", self.session.phase());
            return false;
        }

        let image = match self.api.fetch_image().await {
            Ok(image) => image,
            Err(err) => {
                warn!("Fetch image error: {}", err);
                self.view
                    .render_message(MessageArea::Main, MessageKind::Error, &err.describe("fetch image"));
                return false;
            }
        };

        debug!("Loaded image {} from {}", image.id, image.path);
        if let Err(err) = self.session.accept_image(image.id) {
            error!("Rejected loaded image: {}", err);
            return false;
        }

        self.view.render_image(&image.path);
        self.view.clear_guess_input();
        self.view.render_message(MessageArea::Main, MessageKind::Info, "");
        self.view.set_controls_enabled(Control::Guess, true);
        true
    }

    pub async fn submit_guess(&mut self, raw_input: &str) -> GuessOutcome {
        if self.session.turns_remaining() == 0 {
            debug!("Guess ignored, no turns remaining");
            return GuessOutcome::Ignored;
        }

        let user_guess = raw_input.trim();
        if user_guess.is_empty() {
            self.view
                .render_message(MessageArea::Main, MessageKind::Error, "Please enter a guess.");
            return GuessOutcome::Rejected;
        }

        let Some(image_id) = self.session.current_image().cloned() else {
            self.view.render_message(
                MessageArea::Main,
                MessageKind::Error,
                "No image loaded to guess for. Please wait or refresh.",
            );
            return GuessOutcome::Rejected;
        };

        self.view.set_controls_enabled(Control::Guess, false);
        self.view
            .render_message(MessageArea::Main, MessageKind::Info, "Submitting...");

        let request = GuessRequest {
            image_id,
            user_guess: user_guess.to_string(),
        };
        let verdict = match self.api.submit_guess(&request).await {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!("Submit guess error: {}", err);
                self.view
                    .render_message(MessageArea::Main, MessageKind::Error, &err.describe("submit guess"));
                self.view.set_controls_enabled(Control::Guess, true);
                return GuessOutcome::Failed;
            }
        };

        let phase = match self.session.resolve_guess(verdict.score) {
            Ok(phase) => phase,
            Err(err) => {
                error!("Could not apply guess result: {}", err);
                self.view.set_controls_enabled(Control::Guess, true);
                return GuessOutcome::Failed;
            }
        };

        info!(
            "Guess for image {} scored {} (correct: {}), {} turns left",
            request.image_id,
            verdict.score,
            verdict.correct,
            self.session.turns_remaining()
        );
        self.render_status();

        if verdict.correct {
            self.view
                .render_message(MessageArea::Main, MessageKind::Success, "Correct!");
        } else {
            let text = match verdict.correct_prompt.as_deref() {
                Some(prompt) => format!(
                    "Incorrect (Score: {}). The prompt was: \"{}\"",
                    verdict.score, prompt
                ),
                None => format!("Incorrect (Score: {}).", verdict.score),
            };
            self.view
                .render_message(MessageArea::Main, MessageKind::Error, &text);
        }

        if phase == GamePhase::GameOver {
            self.enter_game_over();
            GuessOutcome::GameOver
        } else {
            GuessOutcome::NextImageAfter(self.settings.next_image_delay)
        }
    }

    fn enter_game_over(&mut self) {
        let final_score = self.session.score();
        info!(
            "Session {} over with final score {}",
            self.session.session_id, final_score
        );

        self.view.set_controls_enabled(Control::Guess, false);
        self.view.set_layout(Layout::GameOver { final_score });
        self.view.render_message(
            MessageArea::ScoreSubmit,
            MessageKind::Info,
            &format!("Game Over! Final Score: {}", final_score),
        );
        self.view.set_controls_enabled(Control::ScoreSubmit, true);
    }

    pub async fn submit_score(&mut self, name: &str) -> ScoreOutcome {
        if self.session.phase() != GamePhase::GameOver {
            debug!("Score submission ignored in phase {:?}", self.session.phase());
            return ScoreOutcome::Ignored;
        }

        let name = name.trim();
        if name.is_empty() {
            self.view.render_message(
                MessageArea::ScoreSubmit,
                MessageKind::Error,
                "Please enter your name.",
            );
            return ScoreOutcome::Rejected;
        }

        self.view.set_controls_enabled(Control::ScoreSubmit, false);
        self.view.render_message(
            MessageArea::ScoreSubmit,
            MessageKind::Info,
            "Submitting score...",
        );

        let submission = ScoreSubmission {
            name: name.to_string(),
            score: self.session.score(),
        };
        if let Err(err) = self.api.submit_score(&submission).await {
            warn!("Submit score error: {}", err);
            let text = match &err {
                ApiError::Status { message: None, .. } => "Failed to submit score".to_string(),
                _ => err.backend_message().map_or_else(|| err.to_string(), str::to_string),
            };
            self.view.render_message(
                MessageArea::ScoreSubmit,
                MessageKind::Error,
                &format!("Error: {}", text),
            );
            self.view.set_controls_enabled(Control::ScoreSubmit, true);
            return ScoreOutcome::Failed;
        }

        if let Err(err) = self.session.mark_score_submitted() {
            error!("Score accepted outside game over: {}", err);
        }
        info!("Submitted score {} for {}", submission.score, submission.name);

        // Controls stay disabled so the same score cannot be sent twice
        self.view.render_message(
            MessageArea::ScoreSubmit,
            MessageKind::Success,
            "Score submitted successfully!",
        );
        self.refresh_leaderboard().await;
        ScoreOutcome::Submitted
    }

    pub async fn refresh_leaderboard(&mut self) {
        let board = match self.api.fetch_leaderboard().await {
            Ok(entries) if entries.is_empty() => LeaderboardDisplay::Empty,
            Ok(entries) => LeaderboardDisplay::Entries(entries),
            Err(err @ ApiError::Status { .. }) => {
                warn!("Leaderboard request rejected: {}", err);
                LeaderboardDisplay::Unavailable
            }
            Err(err) => {
                warn!("Fetch leaderboard error: {}", err);
                LeaderboardDisplay::Failed
            }
        };

        self.view.render_leaderboard(&board);
    }

    fn render_status(&mut self) {
        self.view
            .render_status(self.session.score(), self.session.turns_remaining());
    }
}
