use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeaderboardEntry {
    pub name: String,
    /// Stored scores may be floats; they are rounded to the nearest integer
    #[ts(type = "number")]
    #[serde(deserialize_with = "rounded_score")]
    pub score: i64,
}

/// Body of `POST /api/submit_score`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreSubmission {
    pub name: String,
    #[ts(type = "number")]
    pub score: i64,
}

fn rounded_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Score {
        Integer(i64),
        Float(f64),
    }

    match Score::deserialize(deserializer) {
        Ok(Score::Integer(score)) => Ok(score),
        Ok(Score::Float(score)) if score.is_finite() => Ok(score.round() as i64),
        Ok(Score::Float(score)) => Err(D::Error::custom(format!("invalid score {}", score))),
        Err(_) => Err(D::Error::custom("score must be a number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_scores_are_rounded() {
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(
            r#"[{"name":"Ada","score":42.6},{"name":"Grace","score":12},{"name":"Alan","score":-3.2}]"#,
        )
        .unwrap();

        let scores: Vec<i64> = entries.iter().map(|entry| entry.score).collect();
        assert_eq!(scores, vec![43, 12, -3]);
    }

    #[test]
    fn test_non_numeric_score_is_rejected() {
        let err = serde_json::from_str::<LeaderboardEntry>(r#"{"name":"Ada","score":"42"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("score must be a number"));
    }
}
