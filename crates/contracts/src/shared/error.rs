use serde::{Deserialize, Serialize};

/// Closed set of error categories surfaced by the API and the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Config,
    Validation,
    NotFound,
    Conflict,
    Network,
    Internal,
}

/// Wire shape of an error response body: `{"kind": ..., "message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        let err = ApiError::new(ErrorKind::NotFound, "formation 7 introuvable");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"not_found","message":"formation 7 introuvable"}"#
        );
    }

    #[test]
    fn test_round_trip() {
        let err = ApiError::new(ErrorKind::Validation, "titre manquant");
        let back: ApiError = serde_json::from_str(&serde_json::to_string(&err).unwrap()).unwrap();
        assert_eq!(back.kind, ErrorKind::Validation);
        assert_eq!(back.message, "titre manquant");
    }
}
