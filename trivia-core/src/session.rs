use std::time::Duration;

use anyhow::{Result, anyhow};
use trivia_types::ImageId;
use uuid::Uuid;

pub const DEFAULT_TOTAL_TURNS: u32 = 7;
pub const DEFAULT_NEXT_IMAGE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub total_turns: u32,
    /// Pause between a resolved guess and the next image load
    pub next_image_delay: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            total_turns: DEFAULT_TOTAL_TURNS,
            next_image_delay: DEFAULT_NEXT_IMAGE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Loading,        // Waiting for an image, no guess possible
    Playing,        // Image shown, guess accepted
    GameOver,       // Turns exhausted, waiting for the player's name
    ScoreSubmitted, // Final score accepted by the backend
}

/// Transient state of one play-through
#[derive(Debug, Clone)]
pub struct SessionState {
    pub session_id: Uuid,
    score: i64,
    turns_remaining: u32,
    current_image: Option<ImageId>,
    phase: GamePhase,
}

impl SessionState {
    pub fn new(total_turns: u32) -> Self {
        let phase = if total_turns == 0 {
            GamePhase::GameOver
        } else {
            GamePhase::Loading
        };

        Self {
            session_id: Uuid::new_v4(),
            score: 0,
            turns_remaining: total_turns,
            current_image: None,
            phase,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    pub fn current_image(&self) -> Option<&ImageId> {
        self.current_image.as_ref()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::ScoreSubmitted)
    }

    pub fn can_guess(&self) -> bool {
        self.phase == GamePhase::Playing && self.current_image.is_some() && self.turns_remaining > 0
    }

    /// Record a freshly loaded image and enter `Playing`.
    pub fn accept_image(&mut self, image_id: ImageId) -> Result<()> {
        if self.is_over() {
            return Err(anyhow!("Cannot load an image in phase {:?}", self.phase));
        }

        self.current_image = Some(image_id);
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Apply a scored guess: add the delta, spend one turn and drop the image
    /// it was made against. Returns the phase the session moved to.
    pub fn resolve_guess(&mut self, score_delta: i64) -> Result<GamePhase> {
        if !self.can_guess() {
            return Err(anyhow!("No guess can be resolved in phase {:?}", self.phase));
        }

        self.score = self.score.saturating_add(score_delta);
        self.turns_remaining -= 1;
        self.current_image = None;
        self.phase = if self.turns_remaining == 0 {
            GamePhase::GameOver
        } else {
            GamePhase::Loading
        };

        Ok(self.phase)
    }

    pub fn mark_score_submitted(&mut self) -> Result<()> {
        if self.phase != GamePhase::GameOver {
            return Err(anyhow!("Score can only be submitted after game over, not in {:?}", self.phase));
        }

        self.phase = GamePhase::ScoreSubmitted;
        Ok(())
    }
}
