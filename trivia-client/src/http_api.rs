use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use trivia_core::{ApiError, TriviaApi};
use trivia_types::{
    ErrorBody, GuessRequest, GuessVerdict, ImageData, LeaderboardEntry, ScoreSubmission,
};
use url::Url;

// Relative, so a base mounted under a path prefix keeps it
const IMAGE_PATH: &str = "api/get_image_data";
const GUESS_PATH: &str = "api/submit_guess";
const SCORE_PATH: &str = "api/submit_score";
const LEADERBOARD_PATH: &str = "api/get_leaderboard";

struct Endpoints {
    image: Url,
    guess: Url,
    score: Url,
    leaderboard: Url,
}

impl Endpoints {
    fn resolve(base_url: &Url) -> anyhow::Result<Self> {
        let join = |path: &str| {
            base_url
                .join(path)
                .with_context(|| format!("Cannot resolve {} against {}", path, base_url))
        };
        Ok(Self {
            image: join(IMAGE_PATH)?,
            guess: join(GUESS_PATH)?,
            score: join(SCORE_PATH)?,
            leaderboard: join(LEADERBOARD_PATH)?,
        })
    }
}

/// [`TriviaApi`] over HTTP/JSON against a single backend origin
pub struct HttpTriviaApi {
    client: Client,
    base_url: Url,
    endpoints: Endpoints,
}

impl HttpTriviaApi {
    /// `base_url` should come from [`crate::config::parse_base_url`] so that
    /// its path ends in `/`.
    pub fn new(base_url: Url, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let endpoints = Endpoints::resolve(&base_url)?;
        Ok(Self {
            client,
            base_url,
            endpoints,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn read_reply<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            tracing::warn!("Backend returned status: {}", status);
            return Err(status_error(status.as_u16(), &body));
        }

        decode_reply(&body)
    }
}

/// Decode a 2xx body. A string `error` field wins over the expected payload.
fn decode_reply<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(decode_error)?;

    if let Some(message) = value.get("error").and_then(Value::as_str) {
        tracing::debug!("Backend reported error: {}", message);
        return Err(ApiError::Backend(message.to_string()));
    }

    serde_json::from_value(value).map_err(decode_error)
}

fn decode_error(err: serde_json::Error) -> ApiError {
    tracing::warn!("Failed to parse backend JSON: {:?}", err);
    ApiError::Decode(err.to_string())
}

fn transport_error(err: reqwest::Error) -> ApiError {
    tracing::warn!("Request to backend failed: {:?}", err);
    ApiError::Transport(err.to_string())
}

fn status_error(status: u16, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|body| body.error);
    ApiError::Status { status, message }
}

#[async_trait]
impl TriviaApi for HttpTriviaApi {
    async fn fetch_image(&self) -> Result<ImageData, ApiError> {
        tracing::debug!("Fetching image from {}", self.endpoints.image);
        let response = self
            .client
            .get(self.endpoints.image.clone())
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_reply(response).await
    }

    async fn submit_guess(&self, request: &GuessRequest) -> Result<GuessVerdict, ApiError> {
        tracing::debug!("Submitting guess for image {}", request.image_id);
        let response = self
            .client
            .post(self.endpoints.guess.clone())
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_reply(response).await
    }

    async fn submit_score(&self, submission: &ScoreSubmission) -> Result<(), ApiError> {
        tracing::debug!("Submitting score {} for {}", submission.score, submission.name);
        let response = self
            .client
            .post(self.endpoints.score.clone())
            .json(submission)
            .send()
            .await
            .map_err(transport_error)?;

        // Any 2xx counts, whatever the body says
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await.map_err(transport_error)?;
        tracing::warn!("Score submission returned status: {}", status);
        Err(status_error(status.as_u16(), &body))
    }

    async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let response = self
            .client
            .get(self.endpoints.leaderboard.clone())
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_reply(response).await
    }
}
