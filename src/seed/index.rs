use anyhow::{Context, Result};
use std::collections::HashMap;
use tracing::debug;

use crate::api::client::ResourceApi;
use crate::api::models::{KeyField, RemoteRecord, Resource};

/// Natural keys compare trimmed and case-insensitively.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalized natural key -> backend id, built fresh from one collection read.
///
/// Only the first page the backend returns is seen; against a paginating
/// backend a large collection yields a partial index.
#[derive(Debug, Clone, Default)]
pub struct ExistingIndex {
    by_key: HashMap<String, String>,
}

impl ExistingIndex {
    /// Records with a blank key are ignored. So are records without an `_id`:
    /// the index doubles as the id source for references (a product's
    /// `categoryId`), so such a record counts as absent and will be posted.
    /// On duplicate keys the last one wins.
    pub fn from_records<'a, I>(records: I, field: KeyField) -> Self
    where
        I: IntoIterator<Item = &'a RemoteRecord>,
    {
        let mut by_key = HashMap::new();
        for rec in records {
            let key = normalize_key(rec.key(field).unwrap_or_default());
            if key.is_empty() {
                continue;
            }
            match rec.id.as_deref().filter(|id| !id.is_empty()) {
                Some(id) => {
                    by_key.insert(key, id.to_string());
                }
                None => debug!(%key, "remote record without id ignored"),
            }
        }
        Self { by_key }
    }

    /// One read of `resource`; HTTP and transport failures propagate.
    pub async fn build(api: &dyn ResourceApi, resource: Resource, field: KeyField) -> Result<Self> {
        let records = api
            .list(resource)
            .await
            .with_context(|| format!("fetching existing {resource}"))?;
        let index = Self::from_records(&records, field);
        debug!(%resource, fetched = records.len(), indexed = index.len(), "built existing index");
        Ok(index)
    }

    pub fn get(&self, raw_key: &str) -> Option<&str> {
        self.by_key.get(&normalize_key(raw_key)).map(String::as_str)
    }

    pub fn insert(&mut self, raw_key: &str, id: impl Into<String>) {
        self.by_key.insert(normalize_key(raw_key), id.into());
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
