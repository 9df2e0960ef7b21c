//! Shared response envelope types for API handlers.
//!
//! - Mutations: `{ "success": true, "message": ..., "<entity>": ... }`
//! - Single reads: `{ "<entity>": ... }`
//! - Paginated lists: `{ "items": [...], "total", "pages", "current_page" }`
//!
//! Use these instead of ad-hoc `serde_json::json!` bodies to keep the
//! envelopes consistent across resources.

use forensic_core::pagination::{page_count, PageRequest};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// `{ "success": true, "message": ..., "<key>": entity }` envelope.
///
/// The entity key is omitted when there is no entity (e.g. deletes).
#[derive(Debug)]
pub struct MutationResponse<T> {
    pub message: String,
    key: &'static str,
    entity: Option<T>,
}

impl<T> MutationResponse<T> {
    /// A success message carrying the affected entity under `key`.
    pub fn new(message: impl Into<String>, key: &'static str, entity: T) -> Self {
        Self {
            message: message.into(),
            key,
            entity: Some(entity),
        }
    }
}

impl MutationResponse<()> {
    /// A bare success message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            key: "",
            entity: None,
        }
    }
}

impl<T: Serialize> Serialize for MutationResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.entity.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("success", &true)?;
        map.serialize_entry("message", &self.message)?;
        if let Some(entity) = &self.entity {
            map.serialize_entry(self.key, entity)?;
        }
        map.end()
    }
}

/// `{ "<key>": value }` envelope for single-entity reads.
#[derive(Debug)]
pub struct Keyed<T> {
    key: &'static str,
    value: T,
}

impl<T> Keyed<T> {
    pub fn new(key: &'static str, value: T) -> Self {
        Self { key, value }
    }
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.value)?;
        map.end()
    }
}

/// One page of a list endpoint.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(items: Vec<T>, total: i64, page: &PageRequest) -> Self {
        Self {
            items,
            total,
            pages: page_count(total, page.per_page),
            current_page: page.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_mutation_response_includes_entity_under_key() {
        let body = MutationResponse::new("Client created", "client", json!({"id": 7}));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": true, "message": "Client created", "client": {"id": 7}})
        );
    }

    #[test]
    fn test_message_only_response_omits_entity() {
        let body = MutationResponse::message("Case deleted");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": true, "message": "Case deleted"})
        );
    }

    #[test]
    fn test_keyed_wraps_value() {
        let body = Keyed::new("case", json!({"id": 1}));
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"case": {"id": 1}}));
    }

    #[test]
    fn test_page_response_counts_pages() {
        let page = PageRequest::new(Some(3), Some(10));
        let body = PageResponse::new(vec![1, 2], 22, &page);
        assert_eq!(body.pages, 3);
        assert_eq!(body.current_page, 3);
        assert_eq!(body.total, 22);
    }
}
