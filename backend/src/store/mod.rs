//! # Document Store
//!
//! A small collection-style document database on top of SQLite. Every document
//! is a flat JSON object identified by `(collection, id)`; the store performs
//! no schema checks beyond "is an object".
//!
//! Like the rest of the server, each operation opens its own connection to the
//! database file, so the store itself is a cheap, clonable path handle that is
//! shared with the HTTP handlers through `web::Data`.
//!
//! Supported operations mirror what the client and the import command need:
//! create with a generated id, upsert under a known id, fetch by id, equality
//! query over top-level fields, and delete.

use common::model::document::StoredDocument;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("a document must be a JSON object")]
    NotAnObject,
    #[error("document id must not be empty")]
    EmptyId,
    #[error("document {collection}/{id} not found")]
    NotFound { collection: String, id: String },
}

#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Opens the store at `path`, creating the file and schema when missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.connect()?.execute_batch(
            "CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                fields TEXT NOT NULL,
                updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now')),
                PRIMARY KEY (collection, id)
            );",
        )?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Inserts a document under a fresh UUID and returns the id.
    pub fn create(&self, collection: &str, fields: &Value) -> Result<String, StoreError> {
        let fields = as_object(fields)?;
        let id = Uuid::new_v4().to_string();
        self.connect()?.execute(
            "INSERT INTO documents (collection, id, fields) VALUES (?1, ?2, ?3)",
            params![collection, id, serde_json::to_string(fields)?],
        )?;
        Ok(id)
    }

    /// Writes a document under `id`, replacing the fields of an existing one.
    /// Insertion order is kept for replaced documents.
    pub fn set(&self, collection: &str, id: &str, fields: &Value) -> Result<(), StoreError> {
        if id.trim().is_empty() {
            return Err(StoreError::EmptyId);
        }
        let fields = as_object(fields)?;
        self.connect()?.execute(
            "INSERT INTO documents (collection, id, fields) VALUES (?1, ?2, ?3)
             ON CONFLICT (collection, id) DO UPDATE SET
                fields = excluded.fields,
                updated_at = strftime('%s', 'now')",
            params![collection, id, serde_json::to_string(fields)?],
        )?;
        Ok(())
    }

    pub fn get(&self, collection: &str, id: &str) -> Result<StoredDocument, StoreError> {
        let raw: Option<String> = self
            .connect()?
            .query_row(
                "SELECT fields FROM documents WHERE collection = ?1 AND id = ?2",
                params![collection, id],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(raw) => Ok(StoredDocument {
                id: id.to_string(),
                fields: serde_json::from_str(&raw)?,
            }),
            None => Err(not_found(collection, id)),
        }
    }

    /// Documents of `collection` whose top-level fields equal every filter
    /// value, in insertion order.
    ///
    /// String fields compare textually; any other JSON value compares by its
    /// JSON text, so `hasDetail=true` matches the boolean `true`.
    pub fn query(
        &self,
        collection: &str,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare("SELECT id, fields FROM documents WHERE collection = ?1 ORDER BY rowid")?;
        let rows = stmt.query_map(params![collection], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut documents = Vec::new();
        for row in rows {
            let (id, raw) = row?;
            let fields: Value = serde_json::from_str(&raw)?;
            if matches_filters(&fields, filters) {
                documents.push(StoredDocument { id, fields });
            }
        }
        Ok(documents)
    }

    pub fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let affected = self.connect()?.execute(
            "DELETE FROM documents WHERE collection = ?1 AND id = ?2",
            params![collection, id],
        )?;
        if affected == 0 {
            return Err(not_found(collection, id));
        }
        Ok(())
    }
}

fn as_object(fields: &Value) -> Result<&Map<String, Value>, StoreError> {
    fields.as_object().ok_or(StoreError::NotAnObject)
}

fn not_found(collection: &str, id: &str) -> StoreError {
    StoreError::NotFound {
        collection: collection.to_string(),
        id: id.to_string(),
    }
}

fn matches_filters(fields: &Value, filters: &BTreeMap<String, String>) -> bool {
    filters.iter().all(|(name, expected)| match fields.get(name) {
        Some(Value::String(actual)) => actual == expected,
        Some(other) => other.to_string() == *expected,
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, DocumentStore) {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::open(dir.path().join("documents.sqlite")).unwrap();
        (dir, store)
    }

    fn filter(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn created_document_can_be_read_back() {
        let (_dir, store) = open_temp();
        let id = store
            .create("crops", &json!({ "prefName": "新潟県", "cropName": "稲" }))
            .unwrap();

        let document = store.get("crops", &id).unwrap();
        assert_eq!(document.id, id);
        assert_eq!(document.fields["cropName"], "稲");
    }

    #[test]
    fn non_object_documents_are_rejected() {
        let (_dir, store) = open_temp();
        assert!(matches!(
            store.create("crops", &json!(["稲"])),
            Err(StoreError::NotAnObject)
        ));
        assert!(matches!(
            store.set("crops", " ", &json!({})),
            Err(StoreError::EmptyId)
        ));
    }

    #[test]
    fn query_filters_by_equality_in_insertion_order() {
        let (_dir, store) = open_temp();
        store
            .set("crops", "新潟県-稲", &json!({ "prefName": "新潟県", "cropName": "稲", "hasDetail": true }))
            .unwrap();
        store
            .set("crops", "北海道-小麦", &json!({ "prefName": "北海道", "cropName": "小麦", "hasDetail": false }))
            .unwrap();
        store
            .set("crops", "新潟県-枝豆", &json!({ "prefName": "新潟県", "cropName": "枝豆", "hasDetail": false }))
            .unwrap();
        store
            .set("varieties", "v1", &json!({ "prefName": "新潟県" }))
            .unwrap();

        let niigata = store.query("crops", &filter(&[("prefName", "新潟県")])).unwrap();
        let ids: Vec<_> = niigata.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["新潟県-稲", "新潟県-枝豆"]);

        let detailed = store
            .query("crops", &filter(&[("prefName", "新潟県"), ("hasDetail", "true")]))
            .unwrap();
        assert_eq!(detailed.len(), 1);
        assert_eq!(store.query("crops", &BTreeMap::new()).unwrap().len(), 3);
        assert!(store.query("crops", &filter(&[("missing", "x")])).unwrap().is_empty());
    }

    #[test]
    fn set_replaces_fields_and_keeps_position() {
        let (_dir, store) = open_temp();
        store.set("crops", "a", &json!({ "cropName": "稲" })).unwrap();
        store.set("crops", "b", &json!({ "cropName": "大豆" })).unwrap();
        store.set("crops", "a", &json!({ "cropName": "もち米" })).unwrap();

        let all = store.query("crops", &BTreeMap::new()).unwrap();
        assert_eq!(all[0].id, "a");
        assert_eq!(all[0].fields["cropName"], "もち米");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn delete_removes_once_then_reports_not_found() {
        let (_dir, store) = open_temp();
        let id = store.create("crops", &json!({ "cropName": "稲" })).unwrap();

        store.delete("crops", &id).unwrap();
        assert!(matches!(store.get("crops", &id), Err(StoreError::NotFound { .. })));
        assert!(matches!(store.delete("crops", &id), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn reopening_keeps_documents() {
        let (dir, store) = open_temp();
        store.set("crops", "a", &json!({ "cropName": "稲" })).unwrap();

        let reopened = DocumentStore::open(dir.path().join("documents.sqlite")).unwrap();
        assert_eq!(reopened.get("crops", "a").unwrap().fields["cropName"], "稲");
        assert_eq!(reopened.path(), store.path());
    }
}
