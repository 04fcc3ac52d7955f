//! In-process JSON document store.
//!
//! Documents are kept as raw `serde_json::Value` bodies, the way the wire
//! protocol and on-disk exports carry them, and are decoded against the
//! domain schema on every read. A body that no longer matches the schema
//! surfaces as `DATA_IS_UNEXPECTED_SHAPE` instead of panicking, which is also
//! how repository tests exercise that error path.
//!
//! Collections preserve insertion order, so "most recently created" is
//! simply the last document.

use hackhub_domain::errors::{DomainError, DomainResult};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

struct StoredDocument {
    id: Uuid,
    body: Value,
}

/// One named collection of JSON documents, ordered by insertion.
pub struct DocumentCollection {
    name: &'static str,
    documents: RwLock<Vec<StoredDocument>>,
}

impl DocumentCollection {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Insert a new document. Duplicate ids violate the store's uniqueness
    /// guarantee and are rejected.
    pub fn insert(&self, id: Uuid, body: Value) -> DomainResult<()> {
        let mut documents = self.documents.write();
        if documents.iter().any(|d| d.id == id) {
            return Err(DomainError::not_unique(format!(
                "Duplicate {} document id {}",
                self.name, id
            )));
        }
        documents.push(StoredDocument { id, body });
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<Value> {
        self.documents
            .read()
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.body.clone())
    }

    /// Overwrite an existing document body. Returns whether it existed.
    pub fn replace(&self, id: Uuid, body: Value) -> bool {
        let mut documents = self.documents.write();
        match documents.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.body = body;
                true
            }
            None => false,
        }
    }

    /// Decode, mutate, and re-encode a document under one write lock, so a
    /// repository mutation is a single atomic call. Returns whether the
    /// document existed.
    pub fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut T)) -> DomainResult<bool>
    where
        T: DeserializeOwned + Serialize,
    {
        let mut documents = self.documents.write();
        match documents.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                let mut value: T = self.decode(id, doc.body.clone())?;
                f(&mut value);
                doc.body = self.encode(&value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&self, id: Uuid) -> bool {
        let mut documents = self.documents.write();
        let before = documents.len();
        documents.retain(|d| d.id != id);
        documents.len() != before
    }

    /// All document bodies in insertion order.
    pub fn all(&self) -> Vec<Value> {
        self.documents.read().iter().map(|d| d.body.clone()).collect()
    }

    /// The most recently inserted document, if any.
    pub fn last(&self) -> Option<Value> {
        self.documents.read().last().map(|d| d.body.clone())
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// Decode a stored body against the domain schema.
    pub fn decode<T: DeserializeOwned>(&self, id: Uuid, body: Value) -> DomainResult<T> {
        serde_json::from_value(body).map_err(|err| {
            DomainError::unexpected_shape(format!(
                "Stored {} document {} does not match its schema: {}",
                self.name, id, err
            ))
        })
    }

    /// Encode a domain value into a document body.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> DomainResult<Value> {
        serde_json::to_value(value).map_err(|err| {
            DomainError::unexpected(format!("Failed to encode {} document: {}", self.name, err))
        })
    }

    /// Test hook: store an arbitrary body without schema checks, replacing
    /// any document with the same id.
    pub fn seed_raw(&self, id: Uuid, body: Value) {
        if !self.replace(id, body.clone()) {
            let mut documents = self.documents.write();
            documents.push(StoredDocument { id, body });
        }
    }
}
