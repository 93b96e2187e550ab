use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::error::CoreError;
use crate::schema::{default_for, DEFAULT_NAME};

/// A persisted guestbook comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub name: String,
    pub text: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// A comment as submitted by a client, before validation and persistence.
///
/// Unknown fields are ignored. A missing or empty `name` becomes the
/// placeholder name; a missing `text` becomes an empty string and is left for
/// validation to reject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewComment {
    #[serde(default = "default_name", deserialize_with = "name_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub text: String,
}

fn default_name() -> String {
    default_for("name").unwrap_or(DEFAULT_NAME).to_string()
}

fn name_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.filter(|n| !n.is_empty()).unwrap_or_else(default_name))
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewComment {
    pub fn new(name: Option<&str>, text: &str) -> Self {
        Self {
            name: name
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .unwrap_or_else(default_name),
            text: text.to_string(),
        }
    }

    /// Returns the submitted value of `field`.
    ///
    /// Only client-supplied fields are available; server-assigned ones
    /// (`id`, `created`, `updated`) yield `CoreError::UnknownField`.
    pub fn value_of(&self, field: &str) -> Result<&str, CoreError> {
        match field {
            "name" => Ok(&self.name),
            "text" => Ok(&self.text),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }
}

impl Default for NewComment {
    fn default() -> Self {
        Self {
            name: default_name(),
            text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_their_defaults() {
        let candidate: NewComment = serde_json::from_str(r#"{"nickname": "x"}"#).unwrap();
        assert_eq!(candidate, NewComment::default());
        assert_eq!(candidate.name, DEFAULT_NAME);
        assert_eq!(Some(candidate.name.as_str()), default_for("name"));
        assert_eq!(candidate.text, "");
    }

    #[test]
    fn empty_or_null_name_becomes_placeholder() {
        let empty: NewComment = serde_json::from_str(r#"{"name": "", "text": "hi"}"#).unwrap();
        let null: NewComment = serde_json::from_str(r#"{"name": null, "text": "hi"}"#).unwrap();
        assert_eq!(empty.name, DEFAULT_NAME);
        assert_eq!(null.name, DEFAULT_NAME);
    }

    #[test]
    fn value_of_exposes_client_fields_only() {
        let candidate = NewComment::new(Some("job"), "hello");
        assert_eq!(candidate.value_of("name"), Ok("job"));
        assert_eq!(candidate.value_of("text"), Ok("hello"));
        assert_eq!(
            candidate.value_of("id"),
            Err(CoreError::UnknownField("id".to_string()))
        );
    }

    #[test]
    fn comment_serializes_timestamps_as_rfc3339() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let comment = Comment {
            id: 7,
            name: "job".into(),
            text: "hello".into(),
            created: at,
            updated: at,
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["created"], "2024-05-01T12:00:00Z");
        assert_eq!(json["created"], json["updated"]);
    }
}
