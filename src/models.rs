//! Frontend Models
//!
//! Data structures matching the backend wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment tree node as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub children: Vec<Comment>,
}

/// Payload for `POST /comments`
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest<'a> {
    pub author: &'a str,
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

/// Listing order accepted by the backend's `sort` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Parse a select value, falling back to ascending
    pub fn parse(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_deserializes_nested_tree() {
        let json = r#"{
            "id": 1,
            "parent_id": null,
            "author": "alice",
            "content": "root",
            "created_at": "2024-05-01T10:30:00Z",
            "updated_at": "2024-05-01T10:30:00Z",
            "deleted": false,
            "children": [
                {
                    "id": 2,
                    "parent_id": 1,
                    "author": "bob",
                    "content": "reply",
                    "created_at": "2024-05-01T11:00:00Z",
                    "updated_at": "2024-05-01T11:00:00Z",
                    "deleted": true,
                    "children": []
                }
            ]
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, 1);
        assert_eq!(comment.parent_id, None);
        assert_eq!(comment.children.len(), 1);
        assert_eq!(comment.children[0].parent_id, Some(1));
        assert!(comment.children[0].deleted);
    }

    #[test]
    fn test_comment_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": 7,
            "author": "carol",
            "content": "bare",
            "created_at": "2024-05-01T10:30:00Z",
            "updated_at": "2024-05-01T10:30:00Z"
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.parent_id, None);
        assert!(!comment.deleted);
        assert!(comment.children.is_empty());
    }

    #[test]
    fn test_create_request_omits_absent_parent() {
        let top = CreateCommentRequest { author: "a", content: "c", parent_id: None };
        assert_eq!(serde_json::to_string(&top).unwrap(), r#"{"author":"a","content":"c"}"#);

        let reply = CreateCommentRequest { author: "a", content: "c", parent_id: Some(3) };
        assert!(serde_json::to_string(&reply).unwrap().contains(r#""parent_id":3"#));
    }

    #[test]
    fn test_sort_order_round_trip() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("garbage"), SortOrder::Asc);
        assert_eq!(SortOrder::Desc.as_str(), "desc");
    }
}
