use async_trait::async_trait;
use trivia_types::{GuessRequest, GuessVerdict, ImageData, LeaderboardEntry, ScoreSubmission};

use crate::ApiError;

/// The four backend endpoints the controller talks to.
///
/// Each call is one round-trip with no retry; the implementation decides how
/// transport and HTTP failures map onto [`ApiError`].
#[async_trait]
pub trait TriviaApi: Send + Sync {
    /// `GET /api/get_image_data`
    async fn fetch_image(&self) -> Result<ImageData, ApiError>;

    /// `POST /api/submit_guess`
    async fn submit_guess(&self, request: &GuessRequest) -> Result<GuessVerdict, ApiError>;

    /// `POST /api/submit_score`; any 2xx body counts as success
    async fn submit_score(&self, submission: &ScoreSubmission) -> Result<(), ApiError>;

    /// `GET /api/get_leaderboard`, in the order the backend ranks it
    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError>;
}
