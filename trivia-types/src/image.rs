use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Backend-issued image identifier.
///
/// The client never interprets it; it is echoed back in the guess request
/// exactly as it was received, whether the backend sent a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ImageId {
    Text(String),
    Number(i64),
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageId::Text(id) => f.write_str(id),
            ImageId::Number(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        ImageId::Text(id.to_string())
    }
}

impl From<i64> for ImageId {
    fn from(id: i64) -> Self {
        ImageId::Number(id)
    }
}

/// Success body of `GET /api/get_image_data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageData {
    pub path: String, // renderable image URL, usually relative to the API origin
    pub id: ImageId,
}

/// Body of `POST /api/submit_guess`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessRequest {
    pub image_id: ImageId,
    pub user_guess: String,
}

/// Success body of `POST /api/submit_guess`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessVerdict {
    pub correct: bool,
    /// Delta to add to the running total. Its sign is up to the backend.
    #[ts(type = "number")]
    pub score: i64,
    #[serde(default)]
    pub correct_prompt: Option<String>,
}
