use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Role;

/// One visible line of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    role: Role,
    content: String,
    timestamp: DateTime<Utc>,
}

impl ChatEntry {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A completed request/response pair kept in a tab's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    input: String,
    output: String,
    timestamp: DateTime<Utc>,
}

impl ResultRecord {
    pub fn new(kind: impl Into<String>, input: impl Into<String>, output: impl Into<String>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: timestamp.timestamp_millis().to_string(),
            kind: kind.into(),
            language: None,
            input: input.into(),
            output: output.into(),
            timestamp,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A generated picture as kept in the image tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    id: String,
    prompt: String,
    #[serde(rename = "imageData")]
    image_data: String,
    timestamp: DateTime<Utc>,
}

impl GeneratedImage {
    pub fn new(prompt: impl Into<String>, image_data: impl Into<String>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: timestamp.timestamp_millis().to_string(),
            prompt: prompt.into(),
            image_data: image_data.into(),
            timestamp,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Base64-encoded PNG bytes.
    pub fn image_data(&self) -> &str {
        &self.image_data
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_record_id_is_millisecond_timestamp() {
        let record = ResultRecord::new("summary", "in", "out");
        assert_eq!(record.id(), record.timestamp().timestamp_millis().to_string());
    }

    #[test]
    fn test_result_record_serializes_type_key() {
        let record = ResultRecord::new("explain", "x = 1", "assigns 1").with_language("python");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "explain");
        assert_eq!(json["language"], "python");
        assert_eq!(json["output"], "assigns 1");
    }
}
