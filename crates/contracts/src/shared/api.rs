//! Wire shape of server-reported errors
//!
//! The shop API reports business errors as a JSON body whose `message` field
//! is usually an array of strings but occasionally a single string. Only the
//! first message is ever shown to the user.

use serde::Deserialize;

/// Error body returned by the shop API on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Messages,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, rename = "statusCode")]
    pub status_code: Option<u16>,
}

impl ErrorBody {
    /// First reported message, if the body carried any.
    pub fn first_message(&self) -> Option<&str> {
        match &self.message {
            Messages::One(m) if !m.is_empty() => Some(m.as_str()),
            Messages::Many(ms) => ms.first().map(String::as_str),
            _ => None,
        }
    }
}

/// `message` is an array in validation errors and a bare string elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Messages {
    One(String),
    Many(Vec<String>),
}

impl Default for Messages {
    fn default() -> Self {
        Messages::Many(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_array() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":["Not found"],"statusCode":404}"#).unwrap();
        assert_eq!(body.first_message(), Some("Not found"));
        assert_eq!(body.status_code, Some(404));
    }

    #[test]
    fn parses_bare_string_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Unauthorized","error":"Unauthorized"}"#).unwrap();
        assert_eq!(body.first_message(), Some("Unauthorized"));
    }

    #[test]
    fn absent_message_yields_none() {
        let body: ErrorBody = serde_json::from_str(r#"{"statusCode":500}"#).unwrap();
        assert_eq!(body.first_message(), None);

        let body: ErrorBody = serde_json::from_str(r#"{"message":[]}"#).unwrap();
        assert_eq!(body.first_message(), None);

        let body: ErrorBody = serde_json::from_str(r#"{"message":""}"#).unwrap();
        assert_eq!(body.first_message(), None);
    }
}
