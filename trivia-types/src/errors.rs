use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The `{"error": "..."}` body the backend sends instead of a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_ignores_extra_fields() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Name cannot be empty","code":400}"#).unwrap();
        assert_eq!(body.error, "Name cannot be empty");

        assert!(serde_json::from_str::<ErrorBody>(r#"{"message":"nope"}"#).is_err());
    }
}
