//! Wire model for reply generation requests.

use serde::{Deserialize, Deserializer, Serialize};

/// Email to reply to plus the desired reply tone.
///
/// Both fields default to empty strings when missing from the payload, so a
/// partial body still reaches the generator instead of failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailRequest {
    /// Body of the original email.
    #[serde(deserialize_with = "null_as_empty")]
    pub email_content: String,
    /// Free-form tone, e.g. "professional" or "friendly".
    #[serde(deserialize_with = "null_as_empty")]
    pub tone: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl EmailRequest {
    pub fn new(email_content: impl Into<String>, tone: impl Into<String>) -> Self {
        Self {
            email_content: email_content.into(),
            tone: tone.into(),
        }
    }

    /// Tone with surrounding whitespace removed, or `None` if blank.
    pub fn tone(&self) -> Option<&str> {
        let tone = self.tone.trim();
        (!tone.is_empty()).then_some(tone)
    }
}
