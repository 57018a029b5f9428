use serde::{Deserialize, Serialize};
use std::fmt;

/// Participant identifier as supplied by the caller.
///
/// Kept opaque: no format or domain check happens here, so a validating
/// constructor can be added later without touching the store or services.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ParticipantEmail {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ParticipantEmail {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let email = ParticipantEmail::from("alex@mergington.edu");
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"alex@mergington.edu\"");
    }

    #[test]
    fn keeps_input_verbatim() {
        // no trimming or lowercasing
        let email = ParticipantEmail::new(" Alex@Mergington.edu ");
        assert_eq!(email.as_str(), " Alex@Mergington.edu ");
    }
}
