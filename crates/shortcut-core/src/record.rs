use serde::{Deserialize, Serialize};

/// A shortened URL as exchanged between the HTTP layer and storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// Identifier assigned by the backend. Zero until the record is stored,
    /// and ignored by backends that generate their own ids.
    #[serde(default)]
    pub id: i64,
    /// The URL the short code resolves to.
    pub original_url: String,
    /// The client-chosen alias. Unique within a store.
    pub short_code: String,
}

impl UrlRecord {
    /// Creates an unsaved record with `id` set to zero.
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            id: 0,
            original_url: original_url.into(),
            short_code: short_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_leaves_id_unset() {
        let record = UrlRecord::new("https://example.com", "ex1");
        assert_eq!(record.id, 0);
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.short_code, "ex1");
    }

    #[test]
    fn deserialize_without_id() {
        let record: UrlRecord = serde_json::from_str(
            r#"{"original_url":"https://example.com","short_code":"ex1"}"#,
        )
        .unwrap();
        assert_eq!(record, UrlRecord::new("https://example.com", "ex1"));
    }
}
